/*
 * Copyright (c) 2024.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Sink abstraction for the umber encoders
//!
//! Anything that implements [`ByteWriterTrait`] can be handed to an
//! encoder as an output sink, the [`ByteWriter`] wrapper adds endian
//! aware writes and byte accounting on top of it.
pub use crate::bytestream::traits::ByteWriterTrait;
pub use crate::bytestream::writer::{ByteIoError, ByteWriter};

mod traits;
mod writer;
