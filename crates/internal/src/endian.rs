//! Little-endian codec helpers
//!
//! Every serialization in the cipher goes through these functions, so the
//! produced bytes never depend on the host's native layout.

use byteorder::{ByteOrder, LittleEndian};

/// Read a little-endian u32 starting at `offset`
///
/// Panics if fewer than four bytes are available; callers index with
/// offsets derived from fixed-size arrays.
#[inline(always)]
pub fn read_u32_le(bytes: &[u8], offset: usize) -> u32 {
    LittleEndian::read_u32(&bytes[offset..offset + 4])
}

/// Write `value` as a little-endian u32 at `offset`
#[inline(always)]
pub fn write_u32_le(dst: &mut [u8], offset: usize, value: u32) {
    LittleEndian::write_u32(&mut dst[offset..offset + 4], value);
}

/// Write `value` as a little-endian u64 at `offset`
///
/// Encoded as the low 32-bit half followed by the high half, both
/// little-endian.
#[inline(always)]
pub fn write_u64_le(dst: &mut [u8], offset: usize, value: u64) {
    write_u32_le(dst, offset, value as u32);
    write_u32_le(dst, offset + 4, (value >> 32) as u32);
}

/// Rotate a 32-bit word left by `bits`
#[inline(always)]
pub fn rotl32(word: u32, bits: u32) -> u32 {
    word.rotate_left(bits)
}

/// Serialize a slice of words into `dst` as consecutive little-endian u32s
#[inline]
pub fn words_to_le_bytes(words: &[u32], dst: &mut [u8]) {
    LittleEndian::write_u32_into(words, &mut dst[..words.len() * 4]);
}
