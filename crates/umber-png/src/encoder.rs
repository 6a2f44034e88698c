/*
 * Copyright (c) 2024.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use log::trace;
use umber_core::bit_depth::BitDepth;
use umber_core::bytestream::{ByteWriter, ByteWriterTrait};
use umber_core::colorspace::ColorSpace;
use umber_core::options::EncoderOptions;
use umber_deflate::DeflateEncoder;

use crate::constants::PNG_SIGNATURE;
use crate::enums::FilterType;
use crate::error::PngEncodeErrors;
use crate::headers::{write_chunk, write_ihdr};

/// An encoder that serializes an RGB pixel buffer into a png byte
/// stream
///
/// The pixel buffer is expected in row major order, top to bottom,
/// left to right, `width * height * 3` bytes long.
pub struct PngEncoder<'a> {
    pub(crate) options:          EncoderOptions,
    pub(crate) data:             &'a [u8],
    pub(crate) row_filter:       FilterType,
    pub(crate) encoded_chunks:   Vec<u8>,
    pub(crate) filter_scanlines: Vec<u8>
}

impl<'a> PngEncoder<'a> {
    /// Create a new encoder that can encode `data` into a png stream
    ///
    /// # Arguments
    /// - data: Raw RGB pixels, three bytes per pixel
    /// - options: Image metadata, must carry the dimensions of `data`
    pub fn new(data: &'a [u8], options: EncoderOptions) -> PngEncoder<'a> {
        PngEncoder {
            options,
            data,
            row_filter: FilterType::None,
            encoded_chunks: vec![],
            filter_scanlines: vec![]
        }
    }

    /// Encode the pixels into `sink`, returning the number of bytes
    /// written
    ///
    /// The emitted stream is always the signature, one `IHDR`, one
    /// or more `IDAT` chunks and one `IEND`
    pub fn encode<T: ByteWriterTrait>(&mut self, sink: T) -> Result<usize, PngEncodeErrors> {
        if self.options.width() == 0 || self.options.height() == 0 {
            return Err(PngEncodeErrors::InvalidDimensions);
        }

        if self.options.colorspace() != ColorSpace::RGB {
            return Err(PngEncodeErrors::UnsupportedColorspace(
                self.options.colorspace()
            ));
        }

        if self.options.depth() != BitDepth::Eight {
            return Err(PngEncodeErrors::UnsupportedDepth(self.options.depth()));
        }

        let expected_data_size = self
            .options
            .width()
            .checked_mul(self.options.height())
            .and_then(|size| size.checked_mul(self.options.colorspace().num_components()))
            .ok_or(PngEncodeErrors::InvalidDimensions)?;

        if self.data.len() != expected_data_size {
            return Err(PngEncodeErrors::BufferSizeMismatch(
                expected_data_size,
                self.data.len()
            ));
        }
        trace!(
            "Encoding a {}x{} image",
            self.options.width(),
            self.options.height()
        );

        let mut writer = ByteWriter::new(sink);

        writer.reserve(expected_data_size / 2 + 1024)?;

        self.encode_headers(&mut writer)?;

        // encode filters
        self.add_filters();

        self.write_idat_chunks(&mut writer)?;

        write_chunk(b"IEND", &[], &mut writer)?;

        writer.flush()?;

        Ok(writer.bytes_written())
    }

    pub(crate) fn encode_headers<T: ByteWriterTrait>(
        &self, writer: &mut ByteWriter<T>
    ) -> Result<(), PngEncodeErrors> {
        // write signature
        writer.write_u64_be(PNG_SIGNATURE)?;

        // the ihdr payload is assembled out of band so the chunk
        // writer can crc it
        let mut payload = Vec::with_capacity(13);
        {
            let mut payload_writer = ByteWriter::new(&mut payload);

            write_ihdr(self, &mut payload_writer)?;
        }
        write_chunk(b"IHDR", &payload, writer)?;

        Ok(())
    }

    fn add_filters(&mut self) {
        let scanline_size = self.options.width() * self.options.colorspace().num_components();

        self.filter_scanlines.clear();
        self.filter_scanlines
            .reserve((scanline_size + 1) * self.options.height());

        for scanline in self.data.chunks_exact(scanline_size) {
            // every scanline carries its filter type byte before the
            // pixel bytes
            self.filter_scanlines.push(self.row_filter.to_int());
            self.filter_scanlines.extend_from_slice(scanline);
        }
        // encode filtered scanlines
        self.encoded_chunks = DeflateEncoder::new(&self.filter_scanlines).encode_zlib();
    }

    fn write_idat_chunks<T: ByteWriterTrait>(
        &self, writer: &mut ByteWriter<T>
    ) -> Result<(), PngEncodeErrors> {
        debug_assert!(!self.encoded_chunks.is_empty());
        // Most decoders love data in 8KB chunks, since
        // probably libpng does that by default
        // so let's try emulating that
        for chunk in self.encoded_chunks.chunks(8192) {
            write_chunk(b"IDAT", chunk, writer)?;
        }
        Ok(())
    }
}
