/*
 * Copyright (c) 2024.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Formatter};
use std::io;

use crate::bytestream::ByteWriterTrait;

/// Errors that arise from writing to a byte sink
pub enum ByteIoError {
    /// An error originating from the underlying `std::io` sink
    StdIoError(io::Error),
    /// A generic error
    Generic(&'static str)
}

impl Debug for ByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StdIoError(err) => writeln!(f, "underlying io error {err}"),
            Self::Generic(err) => writeln!(f, "{err}")
        }
    }
}

impl From<io::Error> for ByteIoError {
    fn from(err: io::Error) -> Self {
        ByteIoError::StdIoError(err)
    }
}

/// Encapsulates a simple byte writer with
/// support for endian aware writes
///
/// # Example
/// ```
/// use umber_core::bytestream::ByteWriter;
/// let mut sink = vec![];
/// let mut writer = ByteWriter::new(&mut sink);
/// writer.write_u16_be(0xCAFE).unwrap();
/// assert_eq!(writer.bytes_written(), 2);
/// assert_eq!(sink, [0xCA, 0xFE]);
/// ```
pub struct ByteWriter<T: ByteWriterTrait> {
    sink:          T,
    bytes_written: usize
}

impl<T: ByteWriterTrait> ByteWriter<T> {
    /// Create a new writer that writes to `sink`
    pub fn new(sink: T) -> ByteWriter<T> {
        ByteWriter {
            sink,
            bytes_written: 0
        }
    }

    /// Return the number of bytes the writer has written
    pub const fn bytes_written(&self) -> usize {
        self.bytes_written
    }

    /// Write all bytes in `buf` to the sink
    pub fn write_all(&mut self, buf: &[u8]) -> Result<(), ByteIoError> {
        self.sink.write_all_bytes(buf)?;
        self.bytes_written += buf.len();
        Ok(())
    }

    /// Write a single byte to the sink
    pub fn write_u8(&mut self, byte: u8) -> Result<(), ByteIoError> {
        self.write_all(&[byte])
    }

    /// Write `u16` as a big endian integer
    pub fn write_u16_be(&mut self, value: u16) -> Result<(), ByteIoError> {
        self.write_all(&value.to_be_bytes())
    }

    /// Write `u32` as a big endian integer
    pub fn write_u32_be(&mut self, value: u32) -> Result<(), ByteIoError> {
        self.write_all(&value.to_be_bytes())
    }

    /// Write `u64` as a big endian integer
    pub fn write_u64_be(&mut self, value: u64) -> Result<(), ByteIoError> {
        self.write_all(&value.to_be_bytes())
    }

    /// Hint to the sink how many bytes the encoded output is expected
    /// to occupy
    pub fn reserve(&mut self, size: usize) -> Result<(), ByteIoError> {
        self.sink.reserve_capacity(size)
    }

    /// Ensure all written bytes have reached the sink
    pub fn flush(&mut self) -> Result<(), ByteIoError> {
        self.sink.flush_bytes()
    }
}
