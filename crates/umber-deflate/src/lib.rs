//! A small deflate compressor
//!
//! This crate implements the compression half of RFC 1951 together
//! with the zlib container of RFC 1950, enough to feed png `IDAT`
//! streams without reaching for a compression library.
//!
//! Two encoding strategies exist, byte aligned stored blocks and
//! fixed Huffman codes fed by a greedy LZ77 matcher. Both produce
//! streams any inflate implementation can decompress.
//!
//! # Example
//! ```
//! use umber_deflate::DeflateEncoder;
//!
//! let data = b"hello hello hello";
//! let compressed = DeflateEncoder::new(data).encode_zlib();
//!
//! assert!(!compressed.is_empty());
//! ```
pub use crate::encoder::{DeflateEncoder, DeflateEncodingOptions, DeflateEncodingStrategy};

mod bitstream;
mod constants;
mod encoder;
mod utils;
