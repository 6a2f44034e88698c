/*
 * Copyright (c) 2024.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::Read;

use umber_deflate::{DeflateEncoder, DeflateEncodingOptions, DeflateEncodingStrategy};

fn inflate(compressed: &[u8]) -> Vec<u8> {
    let mut decoder = flate2::read::ZlibDecoder::new(compressed);
    let mut out = vec![];

    decoder.read_to_end(&mut out).unwrap();
    out
}

#[test]
fn reference_inflate_reads_both_strategies() {
    let data: Vec<u8> = (0..50_000_u32).map(|value| (value % 200) as u8).collect();

    for strategy in [
        DeflateEncodingStrategy::NoCompression,
        DeflateEncodingStrategy::FixedHuffman
    ] {
        let options = DeflateEncodingOptions::default().set_strategy(strategy);
        let compressed = DeflateEncoder::new_with_options(&data, options).encode_zlib();

        // flate2 verifies the adler trailer while reading, a
        // checksum mismatch would fail the read itself
        assert_eq!(inflate(&compressed), data);
    }
}

#[test]
fn filtered_scanline_shaped_payload() {
    // scanline shaped input, a filter byte then a row of samples,
    // the exact shape the png encoder feeds this crate
    let mut data = vec![];

    for row in 0..64_u32 {
        data.push(0);
        data.extend((0..48).map(|value| ((value * 5 + row) % 256) as u8));
    }
    let compressed = DeflateEncoder::new(&data).encode_zlib();

    assert_eq!(inflate(&compressed), data);
}
