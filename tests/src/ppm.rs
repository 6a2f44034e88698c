/*
 * Copyright (c) 2024.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use umber_core::options::DecoderOptions;
use umber_ppm::{PpmDecodeErrors, PpmDecoder};

use crate::gradient_pixmap;

#[test]
fn decode_two_pixel_fixture() {
    let mut decoder = PpmDecoder::new("P3\n2 1\n255\n255 0 0\n0 255 0\n");
    let pixels = decoder.decode().unwrap();

    assert_eq!(decoder.get_dimensions(), Some((2, 1)));
    assert_eq!(pixels, [255, 0, 0, 0, 255, 0]);
}

#[test]
fn non_square_dimensions_keep_their_order() {
    let (text, expected) = gradient_pixmap(4, 3);
    let mut decoder = PpmDecoder::new(&text);
    let pixels = decoder.decode().unwrap();

    // width first, height second, a 4x3 image must never decode
    // as 4x4
    assert_eq!(decoder.get_dimensions(), Some((4, 3)));
    assert_eq!(pixels, expected);
}

#[test]
fn rejects_anything_but_p3() {
    for header in ["P6", "P5", "p3", " P3", "P3 "] {
        let data = format!("{header}\n1 1\n255\n0 0 0\n");
        let mut decoder = PpmDecoder::new(&data);
        let err = decoder.decode().unwrap_err();

        assert!(matches!(err, PpmDecodeErrors::BadHeader(_)));
    }
}

#[test]
fn rejects_color_depth_outside_byte_range() {
    for max_value in ["256", "-1"] {
        let data = format!("P3\n1 1\n{max_value}\n0 0 0\n");
        let mut decoder = PpmDecoder::new(&data);
        let err = decoder.decode().unwrap_err();

        assert!(matches!(err, PpmDecodeErrors::BadColorDepth(_)));
    }
}

#[test]
fn respects_dimension_limits() {
    let options = DecoderOptions::default().set_max_width(8).set_max_height(8);
    let mut decoder = PpmDecoder::new_with_options("P3\n9 2\n255\n", options);
    let err = decoder.decode().unwrap_err();

    assert!(matches!(err, PpmDecodeErrors::LargeDimensions(8, 9)));
}

#[test]
fn pixel_count_must_match_dimensions() {
    let mut decoder = PpmDecoder::new("P3\n3 3\n255\n1 2 3\n4 5 6\n");
    let err = decoder.decode().unwrap_err();

    assert!(matches!(err, PpmDecodeErrors::PixelCountMismatch(9, 2)));
}
