/*
 * Copyright (c) 2024.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use umber_core::bytestream::{ByteIoError, ByteWriter, ByteWriterTrait};

use crate::crc::calc_crc_with_bytes;
use crate::encoder::PngEncoder;

/// Serialize the 13 byte ihdr payload into `writer`
pub(crate) fn write_ihdr(
    ctx: &PngEncoder, writer: &mut ByteWriter<&mut Vec<u8>>
) -> Result<(), ByteIoError> {
    // write width and height
    writer.write_u32_be(ctx.options.width() as u32)?;
    writer.write_u32_be(ctx.options.height() as u32)?;
    // write depth
    writer.write_u8(ctx.options.depth().bit_size() as u8)?;
    // color type, truecolor rgb
    writer.write_u8(2)?;
    // compression method, deflate
    writer.write_u8(0)?;
    // filter method
    writer.write_u8(0)?;
    // interlace method, always standard
    writer.write_u8(0)?;

    Ok(())
}

/// Write one png chunk, length, type, payload and the trailing
/// crc over type plus payload
pub(crate) fn write_chunk<T: ByteWriterTrait>(
    name: &[u8; 4], data: &[u8], writer: &mut ByteWriter<T>
) -> Result<(), ByteIoError> {
    // write length
    writer.write_u32_be(data.len() as u32)?;
    // write chunk name
    writer.write_all(name)?;
    // write chunk data
    writer.write_all(data)?;
    // crc is a continuous function, so first crc the chunk name
    // and then crc that with the chunk bytes passing in the previous crc
    let crc = calc_crc_with_bytes(name, u32::MAX);
    let crc = !calc_crc_with_bytes(data, crc);

    writer.write_u32_be(crc)?;

    Ok(())
}
