/*
 * Copyright (c) 2024.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use crate::bitstream::BitWriter;
use crate::constants::{
    DEFLATE_BLOCKTYPE_STATIC, DEFLATE_BLOCKTYPE_UNCOMPRESSED, DEFLATE_DISTANCE_BASE,
    DEFLATE_DISTANCE_EXTRA_BITS, DEFLATE_END_OF_BLOCK, DEFLATE_LENGTH_BASE,
    DEFLATE_LENGTH_EXTRA_BITS, DEFLATE_MAX_MATCH, DEFLATE_MIN_MATCH, DEFLATE_WINDOW_SIZE
};
use crate::utils::calc_adler_hash;

/// Number of bits used to index the LZ77 hash table
const HASH_LOG: u32 = 15;

/// How a deflate stream should be encoded
#[derive(Debug, Copy, Clone)]
pub enum DeflateEncodingStrategy {
    /// Byte aligned stored blocks, no compression at all.
    ///
    /// Useful when the payload is known to be incompressible
    NoCompression,
    /// Fixed Huffman codes fed by a greedy LZ77 matcher.
    ///
    /// Trades some ratio against the dynamic codes for a much
    /// simpler single pass encoder
    FixedHuffman
}

impl DeflateEncodingStrategy {
    /// The FLEVEL hint stored in the zlib header for this strategy
    fn to_level(self) -> u8 {
        match self {
            Self::NoCompression => 0,
            Self::FixedHuffman => 1
        }
    }
}

/// Options changing how the encoder emits the deflate stream
#[derive(Debug, Copy, Clone)]
pub struct DeflateEncodingOptions {
    strategy: DeflateEncodingStrategy
}

impl Default for DeflateEncodingOptions {
    fn default() -> Self {
        DeflateEncodingOptions {
            strategy: DeflateEncodingStrategy::FixedHuffman
        }
    }
}

impl DeflateEncodingOptions {
    /// Return the strategy the encoder will use
    pub const fn strategy(&self) -> DeflateEncodingStrategy {
        self.strategy
    }

    /// Set the strategy the encoder will use
    pub fn set_strategy(mut self, strategy: DeflateEncodingStrategy) -> Self {
        self.strategy = strategy;
        self
    }
}

/// A deflate encoder over borrowed input
///
/// # Example
/// ```
/// use umber_deflate::DeflateEncoder;
///
/// let compressed = DeflateEncoder::new(b"some bytes").encode_zlib();
/// // CM/CINFO of every stream we emit, deflate with a 32K window
/// assert_eq!(compressed[0], 0x78);
/// ```
pub struct DeflateEncoder<'a> {
    data:    &'a [u8],
    options: DeflateEncodingOptions,
    output:  Vec<u8>
}

impl<'a> DeflateEncoder<'a> {
    /// Create a new deflate encoder with the default options
    pub fn new(data: &'a [u8]) -> DeflateEncoder<'a> {
        DeflateEncoder::new_with_options(data, DeflateEncodingOptions::default())
    }

    /// Create a new deflate encoder with the specified options
    pub fn new_with_options(data: &'a [u8], options: DeflateEncodingOptions) -> DeflateEncoder<'a> {
        DeflateEncoder {
            data,
            options,
            output: vec![]
        }
    }

    fn write_zlib_header(&mut self) {
        const ZLIB_CM_DEFLATE: u16 = 8;
        const ZLIB_CINFO_32K_WINDOW: u16 = 7;

        let level_hint = self.options.strategy.to_level();

        let mut hdr = (ZLIB_CM_DEFLATE << 8) | (ZLIB_CINFO_32K_WINDOW << 12);

        hdr |= u16::from(level_hint) << 6;
        // FCHECK makes the whole header a multiple of 31
        hdr |= 31 - (hdr % 31);

        self.output.extend_from_slice(&hdr.to_be_bytes());
    }

    /// Encode the input as deflate blocks with no compression
    fn encode_no_compression(&mut self) {
        // A zero length input still needs one block for the
        // output to be a valid deflate stream
        if self.data.is_empty() {
            // BFINAL and BTYPE
            self.output.push(1 | (DEFLATE_BLOCKTYPE_UNCOMPRESSED << 1));
            // LEN and NLEN
            let num: u32 = 0xFFFF_0000;
            self.output.extend_from_slice(&num.to_le_bytes());
            return;
        }
        let mut input_position = 0;

        loop {
            let remaining = self.data.len() - input_position;

            // stored block payloads are capped at 65535 bytes
            let (bfinal, len) = if remaining <= usize::from(u16::MAX) {
                (1, remaining)
            } else {
                (0, usize::from(u16::MAX))
            };
            // The stream is byte aligned here so BFINAL and BTYPE
            // always occupy exactly one byte
            self.output.push(bfinal | (DEFLATE_BLOCKTYPE_UNCOMPRESSED << 1));

            let len_u16 = len as u16;

            self.output.extend_from_slice(&len_u16.to_le_bytes());
            self.output.extend_from_slice(&(!len_u16).to_le_bytes());

            self.output
                .extend_from_slice(&self.data[input_position..input_position + len]);
            input_position += len;

            if input_position == self.data.len() {
                break;
            }
        }
    }

    /// Encode the input as one fixed Huffman block
    ///
    /// Matches come from a greedy single candidate hash table, each
    /// position remembers the last place its three byte prefix was
    /// seen inside the window
    fn encode_fixed_huffman(&mut self) {
        let data = self.data;
        let out = &mut self.output;

        let mut writer = BitWriter::new();
        // BFINAL, the whole input fits one huffman block
        writer.write_bits(out, 1, 1);
        writer.write_bits(out, u32::from(DEFLATE_BLOCKTYPE_STATIC), 2);

        let mut head = vec![usize::MAX; 1 << HASH_LOG];
        let mut position = 0;

        while position < data.len() {
            let mut match_length = 0;
            let mut match_distance = 0;

            if position + DEFLATE_MIN_MATCH <= data.len() {
                let hash = hash3(&data[position..]);
                let candidate = head[hash];

                head[hash] = position;

                if candidate != usize::MAX && position - candidate <= DEFLATE_WINDOW_SIZE {
                    match_length = longest_match(data, candidate, position);
                    match_distance = position - candidate;
                }
            }

            if match_length >= DEFLATE_MIN_MATCH {
                write_length(&mut writer, out, match_length);
                write_distance(&mut writer, out, match_distance);

                // enter the bytes the match skips over into the hash
                // table so later input can match inside this region
                let end = position + match_length;

                for covered in position + 1..end.min(data.len() - DEFLATE_MIN_MATCH + 1) {
                    head[hash3(&data[covered..])] = covered;
                }
                position = end;
            } else {
                write_lit_len_symbol(&mut writer, out, u16::from(data[position]));
                position += 1;
            }
        }

        write_lit_len_symbol(&mut writer, out, DEFLATE_END_OF_BLOCK);
        writer.align_to_byte(out);
    }

    /// Encode the input into a zlib wrapped deflate stream
    pub fn encode_zlib(&mut self) -> Vec<u8> {
        self.output = Vec::with_capacity(self.data.len() + self.data.len() / 8 + 64);

        self.write_zlib_header();

        match self.options.strategy {
            DeflateEncodingStrategy::NoCompression => {
                self.encode_no_compression();
            }
            DeflateEncodingStrategy::FixedHuffman => {
                self.encode_fixed_huffman();
            }
        }
        // add adler hash
        let hash = calc_adler_hash(self.data);

        self.output.extend_from_slice(&hash.to_be_bytes());

        core::mem::take(&mut self.output)
    }
}

/// Hash the three byte prefix at the start of `bytes`
fn hash3(bytes: &[u8]) -> usize {
    let value =
        (u32::from(bytes[0]) << 16) | (u32::from(bytes[1]) << 8) | u32::from(bytes[2]);

    (value.wrapping_mul(0x9E37_79B1) >> (32 - HASH_LOG)) as usize
}

/// Length of the common prefix of `data[candidate..]` and
/// `data[position..]`, capped at the deflate maximum
fn longest_match(data: &[u8], candidate: usize, position: usize) -> usize {
    let limit = (data.len() - position).min(DEFLATE_MAX_MATCH);
    let mut length = 0;

    while length < limit && data[candidate + length] == data[position + length] {
        length += 1;
    }
    length
}

/// Fixed Huffman codeword for a literal/length symbol as
/// `(code, length in bits)`
fn fixed_lit_len_code(symbol: u16) -> (u16, u32) {
    match symbol {
        0..=143 => (0x30 + symbol, 8),
        144..=255 => (0x190 + (symbol - 144), 9),
        256..=279 => (symbol - 256, 7),
        _ => (0xC0 + (symbol - 280), 8)
    }
}

fn write_lit_len_symbol(writer: &mut BitWriter, out: &mut Vec<u8>, symbol: u16) {
    let (code, length) = fixed_lit_len_code(symbol);

    writer.write_huffman_code(out, code, length);
}

/// Emit a match length as its length code plus extra bits
fn write_length(writer: &mut BitWriter, out: &mut Vec<u8>, length: usize) {
    let mut index = 0;

    while index + 1 < DEFLATE_LENGTH_BASE.len()
        && usize::from(DEFLATE_LENGTH_BASE[index + 1]) <= length
    {
        index += 1;
    }
    write_lit_len_symbol(writer, out, 257 + index as u16);

    let extra_bits = DEFLATE_LENGTH_EXTRA_BITS[index];

    if extra_bits > 0 {
        let extra = length - usize::from(DEFLATE_LENGTH_BASE[index]);

        writer.write_bits(out, extra as u32, u32::from(extra_bits));
    }
}

/// Emit a match distance as its distance code plus extra bits
///
/// The fixed distance codes are plain five bit numbers
fn write_distance(writer: &mut BitWriter, out: &mut Vec<u8>, distance: usize) {
    let mut index = 0;

    while index + 1 < DEFLATE_DISTANCE_BASE.len()
        && usize::from(DEFLATE_DISTANCE_BASE[index + 1]) <= distance
    {
        index += 1;
    }
    writer.write_huffman_code(out, index as u16, 5);

    let extra_bits = DEFLATE_DISTANCE_EXTRA_BITS[index];

    if extra_bits > 0 {
        let extra = distance - usize::from(DEFLATE_DISTANCE_BASE[index]);

        writer.write_bits(out, extra as u32, u32::from(extra_bits));
    }
}
