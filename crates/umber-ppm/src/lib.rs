//! A decoder for the plain text Portable Pixmap format
//!
//! The decoder can currently decode the ASCII `P3` variant,
//! producing a flat 8 bit RGB pixel buffer together with the
//! image dimensions.
//!
//! # Example
//! ```
//! use umber_ppm::PpmDecoder;
//!
//! let mut decoder = PpmDecoder::new("P3\n2 1\n255\n255 0 0\n0 255 0\n");
//! let pixels = decoder.decode().unwrap();
//!
//! assert_eq!(decoder.get_dimensions(), Some((2, 1)));
//! assert_eq!(pixels, [255, 0, 0, 0, 255, 0]);
//! ```
pub use crate::decoder::{PpmDecodeErrors, PpmDecoder};

mod decoder;
