/*
 * Copyright (c) 2024.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Cross crate conformance tests
//!
//! Everything here runs the umber codecs against reference
//! implementations, `flate2` for the zlib streams and the `png`
//! crate for whole files, plus an independent CRC-32 to check
//! chunk trailers.
#![allow(unused_imports, unused)]

mod deflate;
mod png_encode;
mod ppm;

/// One parsed chunk of a png stream
pub struct RawChunk {
    pub name: [u8; 4],
    pub data: Vec<u8>,
    pub crc:  u32
}

/// Split a png byte stream into its chunks, asserting the stream
/// starts with the fixed signature
pub fn parse_chunks(stream: &[u8]) -> Vec<RawChunk> {
    assert_eq!(
        &stream[..8],
        &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A],
        "stream does not start with the png signature"
    );

    let mut chunks = vec![];
    let mut position = 8;

    while position < stream.len() {
        let length =
            u32::from_be_bytes(stream[position..position + 4].try_into().unwrap()) as usize;
        let name: [u8; 4] = stream[position + 4..position + 8].try_into().unwrap();
        let data = stream[position + 8..position + 8 + length].to_vec();
        let crc = u32::from_be_bytes(
            stream[position + 8 + length..position + 12 + length]
                .try_into()
                .unwrap()
        );

        chunks.push(RawChunk { name, data, crc });
        position += 12 + length;
    }
    chunks
}

/// Bitwise CRC-32 over the png polynomial, deliberately written
/// differently from the table driven one in the encoder so the two
/// cross check each other
pub fn reference_crc32(data: &[u8]) -> u32 {
    let mut crc = u32::MAX;

    for &byte in data {
        crc ^= u32::from(byte);

        for _ in 0..8 {
            crc = if crc & 1 == 1 {
                (crc >> 1) ^ 0xEDB8_8320
            } else {
                crc >> 1
            };
        }
    }
    !crc
}

/// Build a P3 fixture of the given size together with the flat
/// RGB buffer the decoder is expected to produce
pub fn gradient_pixmap(width: usize, height: usize) -> (String, Vec<u8>) {
    let mut text = format!("P3\n{width} {height}\n255\n");
    let mut pixels = Vec::with_capacity(width * height * 3);

    for y in 0..height {
        for x in 0..width {
            let r = (x * 7 % 256) as u8;
            let g = (y * 13 % 256) as u8;
            let b = ((x + y) * 3 % 256) as u8;

            text.push_str(&format!("{r} {g} {b}\n"));
            pixels.extend_from_slice(&[r, g, b]);
        }
    }
    (text, pixels)
}
