/*
 * Copyright (c) 2024.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Formatter};
use std::str::Lines;

use log::{info, trace};
use umber_core::bit_depth::BitDepth;
use umber_core::colorspace::ColorSpace;
use umber_core::options::DecoderOptions;

/// The magic token expected on the first line of a plain pixmap
const P3_MAGIC: &str = "P3";

/// Errors that can occur when decoding a plain pixmap
pub enum PpmDecodeErrors {
    /// The first line is not the `P3` magic token
    BadHeader(String),
    /// The dimensions line is missing or does not hold a
    /// positive width and height
    BadDimensions(String),
    /// The maximum color value line is missing or outside 0..=255
    BadColorDepth(String),
    /// A pixel line does not hold exactly three color values
    /// in 0..=255, carries the 1-based line number
    MalformedPixelLine(usize, String),
    /// Number of pixels read does not match width * height,
    /// carries (expected, found)
    PixelCountMismatch(usize, usize),
    /// Width or height is above the configured limit,
    /// carries (limit, found)
    LargeDimensions(usize, usize)
}

impl Debug for PpmDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BadHeader(line) => {
                writeln!(f, "Expected `{P3_MAGIC}` as the header line but found `{line}`")
            }
            Self::BadDimensions(line) => {
                writeln!(
                    f,
                    "Cannot read a positive width and height from dimensions line `{line}`"
                )
            }
            Self::BadColorDepth(line) => {
                writeln!(
                    f,
                    "Maximum color value `{line}` is not an integer between 0 and 255"
                )
            }
            Self::MalformedPixelLine(line_number, reason) => {
                writeln!(f, "Malformed pixel triplet on line {line_number}, {reason}")
            }
            Self::PixelCountMismatch(expected, found) => {
                writeln!(
                    f,
                    "Expected {expected} pixels from the dimensions but the stream holds {found}"
                )
            }
            Self::LargeDimensions(expected, found) => {
                writeln!(
                    f,
                    "Too large dimensions, expected a value less than {expected} but found {found}"
                )
            }
        }
    }
}

/// An instance of a plain pixmap decoder
///
/// The decoder can currently decode the ASCII `P3` format,
/// one header line, one dimensions line, one maximum color value
/// line and then one line per RGB pixel.
///
/// Color values above the 0..=255 range are rejected, never clamped.
pub struct PpmDecoder<'a> {
    width:           usize,
    height:          usize,
    decoded_headers: bool,
    lines:           Lines<'a>,
    line_number:     usize,
    colorspace:      ColorSpace,
    bit_depth:       BitDepth,
    options:         DecoderOptions
}

impl<'a> PpmDecoder<'a> {
    /// Create a new ppm decoder with default options
    ///
    /// # Arguments
    /// - data: PPM encoded text
    ///
    /// # Example
    /// ```
    /// use umber_ppm::PpmDecoder;
    /// let mut decoder = PpmDecoder::new("NOT VALID PPM");
    ///
    /// assert!(decoder.decode().is_err());
    /// ```
    pub fn new(data: &'a str) -> PpmDecoder<'a> {
        PpmDecoder::new_with_options(data, DecoderOptions::default())
    }

    /// Create a new ppm decoder with the specified options
    ///
    /// # Arguments
    /// - data: PPM encoded text
    /// - options: Modified options for the decoder
    ///
    /// # Example
    /// ```
    /// use umber_core::options::DecoderOptions;
    /// use umber_ppm::PpmDecoder;
    /// let options = DecoderOptions::default().set_max_width(4);
    /// let mut decoder = PpmDecoder::new_with_options("P3\n90 1\n255\n", options);
    ///
    /// assert!(decoder.decode().is_err());
    /// ```
    pub fn new_with_options(data: &'a str, options: DecoderOptions) -> PpmDecoder<'a> {
        PpmDecoder {
            width: 0,
            height: 0,
            decoded_headers: false,
            lines: data.lines(),
            line_number: 0,
            colorspace: ColorSpace::Unknown,
            bit_depth: BitDepth::Unknown,
            options
        }
    }

    fn next_line(&mut self) -> Option<&'a str> {
        let line = self.lines.next()?;
        self.line_number += 1;
        Some(line)
    }

    /// Read the three header lines and store them in internal state
    ///
    /// Returns Err on error otherwise returns nothing
    pub fn read_headers(&mut self) -> Result<(), PpmDecodeErrors> {
        if self.decoded_headers {
            return Ok(());
        }
        let magic = self.next_line().unwrap_or("");

        if magic != P3_MAGIC {
            return Err(PpmDecodeErrors::BadHeader(magic.to_string()));
        }

        let dimensions = self.next_line().unwrap_or("");
        let tokens: Vec<&str> = dimensions.split(' ').collect();

        if tokens.len() != 2 {
            return Err(PpmDecodeErrors::BadDimensions(dimensions.to_string()));
        }
        // width is the first token, height the second, never
        // the first token twice
        self.width = parse_dimension(tokens[0], dimensions)?;
        self.height = parse_dimension(tokens[1], dimensions)?;

        if self.width > self.options.get_max_width() {
            return Err(PpmDecodeErrors::LargeDimensions(
                self.options.get_max_width(),
                self.width
            ));
        }

        if self.height > self.options.get_max_height() {
            return Err(PpmDecodeErrors::LargeDimensions(
                self.options.get_max_height(),
                self.height
            ));
        }
        info!("Width: {}, height: {}", self.width, self.height);

        let max_value_line = self.next_line().unwrap_or("");
        let max_value: i64 = max_value_line
            .parse()
            .map_err(|_| PpmDecodeErrors::BadColorDepth(max_value_line.to_string()))?;

        if !(0..=255).contains(&max_value) {
            return Err(PpmDecodeErrors::BadColorDepth(max_value_line.to_string()));
        }
        // a plain pixmap with a maximum value up to 255 is always
        // one byte per channel
        self.colorspace = ColorSpace::RGB;
        self.bit_depth = BitDepth::Eight;

        info!("Colorspace: {:?}", self.colorspace);
        info!("Bit Depth: {:?}", self.bit_depth);

        self.decoded_headers = true;

        Ok(())
    }

    /// Return the image bit depth or none if headers
    /// are not decoded
    pub const fn get_bit_depth(&self) -> Option<BitDepth> {
        if self.decoded_headers {
            Some(self.bit_depth)
        } else {
            None
        }
    }

    /// Return the image colorspace or none if
    /// headers aren't decoded
    pub const fn get_colorspace(&self) -> Option<ColorSpace> {
        if self.decoded_headers {
            Some(self.colorspace)
        } else {
            None
        }
    }

    /// Return image dimensions as `(width, height)` or none if
    /// headers aren't decoded
    pub const fn get_dimensions(&self) -> Option<(usize, usize)> {
        if self.decoded_headers {
            Some((self.width, self.height))
        } else {
            None
        }
    }

    /// Decode a plain pixmap, returning the flat RGB bytes
    /// in row major order, top to bottom, left to right
    ///
    /// The returned buffer always holds exactly
    /// `width * height * 3` bytes
    pub fn decode(&mut self) -> Result<Vec<u8>, PpmDecodeErrors> {
        self.read_headers()?;

        let pixel_count = self.width * self.height;
        let size = pixel_count * self.colorspace.num_components();

        let mut pixels = Vec::with_capacity(size);

        while let Some(line) = self.next_line() {
            if line.is_empty() {
                continue;
            }
            let triplet = parse_triplet(line, self.line_number)?;

            pixels.extend_from_slice(&triplet);
        }
        trace!("Read {} color values", pixels.len());

        if pixels.len() != size {
            return Err(PpmDecodeErrors::PixelCountMismatch(
                pixel_count,
                pixels.len() / self.colorspace.num_components()
            ));
        }

        Ok(pixels)
    }
}

fn parse_dimension(token: &str, line: &str) -> Result<usize, PpmDecodeErrors> {
    let value: usize = token
        .parse()
        .map_err(|_| PpmDecodeErrors::BadDimensions(line.to_string()))?;

    if value == 0 {
        return Err(PpmDecodeErrors::BadDimensions(line.to_string()));
    }
    Ok(value)
}

fn parse_triplet(line: &str, line_number: usize) -> Result<[u8; 3], PpmDecodeErrors> {
    let tokens: Vec<&str> = line.split(' ').collect();

    if tokens.len() != 3 {
        return Err(PpmDecodeErrors::MalformedPixelLine(
            line_number,
            format!("expected 3 color values but found {}", tokens.len())
        ));
    }
    let mut triplet = [0; 3];

    for (value, token) in triplet.iter_mut().zip(&tokens) {
        let parsed: i64 = token.parse().map_err(|_| {
            PpmDecodeErrors::MalformedPixelLine(
                line_number,
                format!("cannot parse `{token}` as a color value")
            )
        })?;

        if !(0..=255).contains(&parsed) {
            return Err(PpmDecodeErrors::MalformedPixelLine(
                line_number,
                format!("color value {parsed} is outside the 0..=255 range")
            ));
        }
        *value = parsed as u8;
    }

    Ok(triplet)
}
