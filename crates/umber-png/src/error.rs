/*
 * Copyright (c) 2024.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Formatter};

use umber_core::bit_depth::BitDepth;
use umber_core::bytestream::ByteIoError;
use umber_core::colorspace::ColorSpace;

/// Errors occurring during png encoding
pub enum PngEncodeErrors {
    /// Width or height is zero, or the two multiply beyond
    /// what the container can describe
    InvalidDimensions,
    /// Pixel buffer length does not match the dimensions,
    /// carries (expected, found)
    BufferSizeMismatch(usize, usize),
    /// The output sink failed, propagated and never retried
    WriteFailure(ByteIoError),
    /// Only truecolor RGB input is encoded
    UnsupportedColorspace(ColorSpace),
    /// Only 8 bit channels are encoded
    UnsupportedDepth(BitDepth)
}

impl Debug for PngEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDimensions => {
                writeln!(f, "Width and height must both be greater than zero")
            }
            Self::BufferSizeMismatch(expected, found) => {
                writeln!(
                    f,
                    "Expected a pixel buffer of {expected} bytes for the dimensions but found {found}"
                )
            }
            Self::WriteFailure(err) => {
                writeln!(f, "Could not write to the output sink: {err:?}")
            }
            Self::UnsupportedColorspace(colorspace) => {
                writeln!(f, "Cannot encode {colorspace:?} input, only RGB is supported")
            }
            Self::UnsupportedDepth(depth) => {
                writeln!(f, "Cannot encode {depth:?} input, only eight bit channels are supported")
            }
        }
    }
}

impl From<ByteIoError> for PngEncodeErrors {
    fn from(err: ByteIoError) -> Self {
        Self::WriteFailure(err)
    }
}
