/// Block type bits for a stored block
pub const DEFLATE_BLOCKTYPE_UNCOMPRESSED: u8 = 0;

/// Block type bits for a block using the fixed Huffman codes
pub const DEFLATE_BLOCKTYPE_STATIC: u8 = 1;

/// Shortest back-reference match deflate can represent
pub const DEFLATE_MIN_MATCH: usize = 3;

/// Longest back-reference match deflate can represent
pub const DEFLATE_MAX_MATCH: usize = 258;

/// Size of the LZ77 sliding window, distances never exceed it
pub const DEFLATE_WINDOW_SIZE: usize = 1 << 15;

/// The symbol terminating every block
pub const DEFLATE_END_OF_BLOCK: u16 = 256;

/// Base match lengths for the length codes 257..=285
pub static DEFLATE_LENGTH_BASE: [u16; 29] = [
    3, 4, 5, 6, 7, 8, 9, 10, 11, 13, 15, 17, 19, 23, 27, 31, 35, 43, 51, 59, 67, 83, 99, 115, 131,
    163, 195, 227, 258,
];

/// Extra bits carried by each length code
pub static DEFLATE_LENGTH_EXTRA_BITS: [u8; 29] = [
    0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 2, 2, 2, 2, 3, 3, 3, 3, 4, 4, 4, 4, 5, 5, 5, 5, 0,
];

/// Base match distances for the distance codes 0..=29
pub static DEFLATE_DISTANCE_BASE: [u16; 30] = [
    1, 2, 3, 4, 5, 7, 9, 13, 17, 25, 33, 49, 65, 97, 129, 193, 257, 385, 513, 769, 1025, 1537,
    2049, 3073, 4097, 6145, 8193, 12289, 16385, 24577,
];

/// Extra bits carried by each distance code
pub static DEFLATE_DISTANCE_EXTRA_BITS: [u8; 30] = [
    0, 0, 0, 0, 1, 1, 2, 2, 3, 3, 4, 4, 5, 5, 6, 6, 7, 7, 8, 8, 9, 9, 10, 10, 11, 11, 12, 12, 13,
    13,
];
