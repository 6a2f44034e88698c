//! A png encoder for 8 bit truecolor images
//!
//! This crate serializes a raw RGB pixel buffer into the png
//! container, signature, `IHDR`, zlib compressed `IDAT` chunks and
//! the closing `IEND`, each chunk protected by its CRC-32.
//!
//! The encoder always emits a single non interlaced 8 bit truecolor
//! image with every scanline carrying the `None` filter.
//!
//! # Example
//! ```
//! use umber_core::options::EncoderOptions;
//! use umber_png::PngEncoder;
//!
//! let pixels = [255, 0, 0, 0, 255, 0];
//! let options = EncoderOptions::default().set_width(2).set_height(1);
//!
//! let mut sink = vec![];
//! let mut encoder = PngEncoder::new(&pixels, options);
//!
//! encoder.encode(&mut sink).unwrap();
//! assert_eq!(&sink[..4], &[0x89, b'P', b'N', b'G']);
//! ```
pub use crate::encoder::PngEncoder;
pub use crate::enums::FilterType;
pub use crate::error::PngEncodeErrors;

mod constants;
mod crc;
mod encoder;
mod enums;
mod error;
mod headers;
