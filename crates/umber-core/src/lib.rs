//! Core routines shared by all umber crates
//!
//! This crate provides a set of core routines shared
//! by the decoders and encoders under the `umber` umbrella
//!
//! It currently contains
//!
//! - A bytestream writer with endian aware writes
//! - Colorspace and bit depth information shared by images
//! - Image decoder and encoder options
pub mod bit_depth;
pub mod bytestream;
pub mod colorspace;
pub mod options;
