/// The fixed eight byte png signature, `89 50 4E 47 0D 0A 1A 0A`,
/// written big endian before any chunk
pub const PNG_SIGNATURE: u64 = 0x8950_4E47_0D0A_1A0A;
