/*
 * Copyright (c) 2024.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::File;
use std::io::{BufWriter, Write};

use crate::bytestream::writer::ByteIoError;

/// The writer trait implemented for the umber library of encoders
///
/// Anything that implements this trait can be used as a sink
/// for writing encoded images
pub trait ByteWriterTrait {
    /// Write all bytes to the sink or return an error if something occurred
    fn write_all_bytes(&mut self, buf: &[u8]) -> Result<(), ByteIoError>;
    /// Ensure bytes are written to the sink.
    ///
    /// For buffered sinks this hands the buffered bytes to the
    /// underlying device, for in memory sinks it is a no-op
    fn flush_bytes(&mut self) -> Result<(), ByteIoError>;
    /// A hint telling the implementation how big we expect the
    /// encoded output to be.
    ///
    /// This is just a hint, akin to calling `Vec::reserve`, sinks
    /// that cannot make use of it are free to ignore it
    fn reserve_capacity(&mut self, size: usize) -> Result<(), ByteIoError>;
}

impl ByteWriterTrait for &mut Vec<u8> {
    fn write_all_bytes(&mut self, buf: &[u8]) -> Result<(), ByteIoError> {
        self.extend_from_slice(buf);
        Ok(())
    }

    fn flush_bytes(&mut self) -> Result<(), ByteIoError> {
        Ok(())
    }

    fn reserve_capacity(&mut self, size: usize) -> Result<(), ByteIoError> {
        self.reserve(size);
        Ok(())
    }
}

impl ByteWriterTrait for &mut BufWriter<File> {
    fn write_all_bytes(&mut self, buf: &[u8]) -> Result<(), ByteIoError> {
        self.write_all(buf).map_err(ByteIoError::StdIoError)
    }

    fn flush_bytes(&mut self) -> Result<(), ByteIoError> {
        self.flush().map_err(ByteIoError::StdIoError)
    }

    fn reserve_capacity(&mut self, _: usize) -> Result<(), ByteIoError> {
        Ok(())
    }
}
