use simd_adler32::Adler32;

/// Calculate the adler hash of the uncompressed bytes, written
/// big endian as the last four bytes of a zlib stream
pub(crate) fn calc_adler_hash(data: &[u8]) -> u32 {
    let mut hash = Adler32::new();

    hash.write(data);
    hash.finish()
}
