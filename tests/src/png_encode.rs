/*
 * Copyright (c) 2024.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::Read;

use umber_core::options::EncoderOptions;
use umber_png::{PngEncodeErrors, PngEncoder};
use umber_ppm::PpmDecoder;

use crate::{gradient_pixmap, parse_chunks, reference_crc32};

fn encode_fixture(width: usize, height: usize) -> (Vec<u8>, Vec<u8>) {
    let (text, pixels) = gradient_pixmap(width, height);
    let mut decoder = PpmDecoder::new(&text);
    let decoded = decoder.decode().unwrap();

    assert_eq!(decoded, pixels);

    let options = EncoderOptions::default().set_width(width).set_height(height);
    let mut sink = vec![];

    PngEncoder::new(&decoded, options).encode(&mut sink).unwrap();

    (sink, pixels)
}

#[test]
fn chunk_layout_is_signature_ihdr_idat_iend() {
    let (stream, _) = encode_fixture(13, 7);
    let chunks = parse_chunks(&stream);

    assert_eq!(&chunks.first().unwrap().name, b"IHDR");
    assert_eq!(&chunks.last().unwrap().name, b"IEND");
    assert!(chunks.last().unwrap().data.is_empty());

    let ihdr_count = chunks.iter().filter(|c| &c.name == b"IHDR").count();
    let iend_count = chunks.iter().filter(|c| &c.name == b"IEND").count();
    let idat_count = chunks.iter().filter(|c| &c.name == b"IDAT").count();

    assert_eq!(ihdr_count, 1);
    assert_eq!(iend_count, 1);
    assert!(idat_count >= 1);
    // nothing else is emitted
    assert_eq!(chunks.len(), 2 + idat_count);
}

#[test]
fn ihdr_fields_describe_the_image() {
    let (stream, _) = encode_fixture(13, 7);
    let chunks = parse_chunks(&stream);
    let ihdr = &chunks[0].data;

    assert_eq!(ihdr.len(), 13);
    assert_eq!(u32::from_be_bytes(ihdr[0..4].try_into().unwrap()), 13);
    assert_eq!(u32::from_be_bytes(ihdr[4..8].try_into().unwrap()), 7);
    // depth 8, truecolor, deflate, filter method 0, no interlace
    assert_eq!(&ihdr[8..], &[8, 2, 0, 0, 0]);
}

#[test]
fn every_chunk_crc_validates() {
    let (stream, _) = encode_fixture(32, 17);

    for chunk in parse_chunks(&stream) {
        let mut protected = chunk.name.to_vec();
        protected.extend_from_slice(&chunk.data);

        assert_eq!(
            reference_crc32(&protected),
            chunk.crc,
            "crc mismatch in {:?} chunk",
            std::str::from_utf8(&chunk.name)
        );
    }
}

#[test]
fn idat_inflates_back_to_filtered_scanlines() {
    let width = 21;
    let height = 9;
    let (stream, pixels) = encode_fixture(width, height);

    let idat: Vec<u8> = parse_chunks(&stream)
        .iter()
        .filter(|chunk| &chunk.name == b"IDAT")
        .flat_map(|chunk| chunk.data.clone())
        .collect();

    let mut decoder = flate2::read::ZlibDecoder::new(&idat[..]);
    let mut scanlines = vec![];

    decoder.read_to_end(&mut scanlines).unwrap();

    // every row is its filter type byte, zero, then the raw pixels
    let mut expected = vec![];

    for row in pixels.chunks_exact(width * 3) {
        expected.push(0);
        expected.extend_from_slice(row);
    }
    assert_eq!(scanlines.len(), (width * 3 + 1) * height);
    assert_eq!(scanlines, expected);
}

#[test]
fn reference_decoder_reads_our_output() {
    let width = 40;
    let height = 25;
    let (stream, pixels) = encode_fixture(width, height);

    let decoder = png::Decoder::new(&stream[..]);
    let mut reader = decoder.read_info().unwrap();
    let mut decoded = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut decoded).unwrap();

    assert_eq!(info.width, width as u32);
    assert_eq!(info.height, height as u32);
    assert_eq!(info.color_type, png::ColorType::Rgb);
    assert_eq!(info.bit_depth, png::BitDepth::Eight);

    decoded.truncate(info.buffer_size());
    assert_eq!(decoded, pixels);
}

#[test]
fn single_pixel_image_roundtrips() {
    let (stream, pixels) = encode_fixture(1, 1);

    let decoder = png::Decoder::new(&stream[..]);
    let mut reader = decoder.read_info().unwrap();
    let mut decoded = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut decoded).unwrap();

    decoded.truncate(info.buffer_size());
    assert_eq!(decoded, pixels);
}

#[test]
fn large_image_splits_idat_chunks() {
    // incompressible-ish payload well above one 8K chunk
    let width = 128;
    let height = 96;
    let (stream, _) = encode_fixture(width, height);

    let idat_count = parse_chunks(&stream)
        .iter()
        .filter(|chunk| &chunk.name == b"IDAT")
        .count();

    assert!(idat_count >= 2);

    for chunk in parse_chunks(&stream) {
        if &chunk.name == b"IDAT" {
            assert!(chunk.data.len() <= 8192);
        }
    }
}

#[test]
fn buffer_shorter_than_dimensions_is_rejected() {
    let options = EncoderOptions::default().set_width(4).set_height(4);
    let pixels = [0_u8; 4 * 4 * 3 - 3];

    let err = PngEncoder::new(&pixels, options)
        .encode(&mut vec![])
        .unwrap_err();

    assert!(matches!(err, PngEncodeErrors::BufferSizeMismatch(48, 45)));
}

#[test]
fn zero_dimensions_are_rejected() {
    for (width, height) in [(0, 4), (4, 0), (0, 0)] {
        let options = EncoderOptions::default().set_width(width).set_height(height);
        let err = PngEncoder::new(&[], options).encode(&mut vec![]).unwrap_err();

        assert!(matches!(err, PngEncodeErrors::InvalidDimensions));
    }
}
