//! Little-endian key decoding and tail packing shared by the SipHash family.

/// Decode a 16-byte key into two little-endian 64-bit words.
#[inline(always)]
pub(crate) const fn key_words_u64(key: &[u8; 16]) -> [u64; 2] {
  let [a0, a1, a2, a3, a4, a5, a6, a7, b0, b1, b2, b3, b4, b5, b6, b7] = *key;
  [
    u64::from_le_bytes([a0, a1, a2, a3, a4, a5, a6, a7]),
    u64::from_le_bytes([b0, b1, b2, b3, b4, b5, b6, b7]),
  ]
}

/// Decode an 8-byte key into two little-endian 32-bit words.
#[inline(always)]
pub(crate) const fn key_words_u32(key: &[u8; 8]) -> [u32; 2] {
  let [a0, a1, a2, a3, b0, b1, b2, b3] = *key;
  [u32::from_le_bytes([a0, a1, a2, a3]), u32::from_le_bytes([b0, b1, b2, b3])]
}

/// Pack up to 7 trailing bytes into the low bytes of a word, first byte lowest.
#[inline(always)]
pub(crate) fn tail_u64(tail: &[u8]) -> u64 {
  debug_assert!(tail.len() < 8);
  tail
    .iter()
    .enumerate()
    .fold(0, |acc, (i, &byte)| acc | (u64::from(byte) << (8 * i)))
}

/// Pack up to 3 trailing bytes into the low bytes of a word, first byte lowest.
#[inline(always)]
pub(crate) fn tail_u32(tail: &[u8]) -> u32 {
  debug_assert!(tail.len() < 4);
  tail
    .iter()
    .enumerate()
    .fold(0, |acc, (i, &byte)| acc | (u32::from(byte) << (8 * i)))
}
