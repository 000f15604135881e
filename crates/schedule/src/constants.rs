//! Fixed words of the seed schedule.
//!
//! Marker words are four ASCII bytes read little-endian, so `"expa"` is
//! `0x6170_7865`.

/// `"expa"`, first constant word in every tier.
pub const SIGMA_EXPA: u32 = 0x6170_7865;
/// `"te k"`, last constant word in every tier.
pub const SIGMA_TE_K: u32 = 0x6b20_6574;

/// `"nd 3"`, `"2-by"`: middle words for an 8-word (32-byte) key.
pub const SIGMA_KEY32: [u32; 2] = [0x3320_646e, 0x7962_2d32];
/// `"nd 1"`, `"6-by"`: middle words for a 4-word (16-byte) key.
pub const SIGMA_KEY16: [u32; 2] = [0x3120_646e, 0x7962_2d36];
/// `"nd X"`, `"X-by"`: placeholder middle words for any other seed length.
pub const SIGMA_GENERIC: [u32; 2] = [0x5820_646e, 0x7962_2d58];

/// Key used when the seed is empty: the first eight fractional hex words of pi.
pub const DEFAULT_KEY: [u32; 8] = [
  0x243f_6a88,
  0x85a3_08d3,
  0x1319_8a2e,
  0x0370_7344,
  0xa409_3822,
  0x299f_31d0,
  0x082e_fa98,
  0xec4e_6c89,
];

/// IV words used when the seed supplies fewer than two: the next two words of pi.
pub const DEFAULT_IV: [u32; 2] = [0x4528_21e6, 0x38d0_1377];

/// Words in a [`crate::SeedState`] block.
pub const STATE_WORDS: usize = 16;
