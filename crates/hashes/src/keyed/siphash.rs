//! SipHash with 64-bit lanes and a 128-bit key.
//!
//! SipHash is a *keyed* hash designed to defend hash tables against collision
//! attacks on untrusted inputs. [`SipHash24`] is the reference parameter set;
//! [`SipHash13`] trades finalization strength for speed.

use traits::{InvalidArgument, KeyedHash};

use crate::util::{key_words_u64, tail_u64};

/// SipHash-2-4: two compression rounds per word, four finalization rounds.
#[derive(Clone, Copy, Debug, Default)]
pub struct SipHash24;

/// SipHash-1-3: one compression round per word, three finalization rounds.
#[derive(Clone, Copy, Debug, Default)]
pub struct SipHash13;

// "somepseudorandomlygeneratedbytes" as little-endian words.
const C0: u64 = 0x736f_6d65_7073_6575;
const C1: u64 = 0x646f_7261_6e64_6f6d;
const C2: u64 = 0x6c79_6765_6e65_7261;
const C3: u64 = 0x7465_6462_7974_6573;

#[inline(always)]
fn half_round(a: &mut u64, b: &mut u64, c: &mut u64, d: &mut u64, s: u32, t: u32) {
  *a = a.wrapping_add(*b);
  *c = c.wrapping_add(*d);
  *b = b.rotate_left(s) ^ *a;
  *d = d.rotate_left(t) ^ *c;
  *a = a.rotate_left(32);
}

#[inline(always)]
fn sip_round(v: &mut [u64; 4]) {
  let [v0, v1, v2, v3] = v;
  half_round(v0, v1, v2, v3, 13, 16);
  half_round(v2, v1, v0, v3, 17, 21);
}

#[inline(always)]
fn rounds<const N: usize>(v: &mut [u64; 4]) {
  for _ in 0..N {
    sip_round(v);
  }
}

/// Word-level core: `C` compression rounds, `D` finalization rounds.
#[inline(always)]
fn siphash<const C: usize, const D: usize>(key: [u64; 2], data: &[u8]) -> u64 {
  let [k0, k1] = key;
  let mut v = [C0 ^ k0, C1 ^ k1, C2 ^ k0, C3 ^ k1];

  let (blocks, tail) = data.as_chunks::<8>();
  for block in blocks {
    let m = u64::from_le_bytes(*block);
    v[3] ^= m;
    rounds::<C>(&mut v);
    v[0] ^= m;
  }

  let b = ((data.len() as u64) << 56) | tail_u64(tail);
  v[3] ^= b;
  rounds::<C>(&mut v);
  v[0] ^= b;

  v[2] ^= 0xff;
  rounds::<D>(&mut v);

  let [v0, v1, v2, v3] = v;
  v0 ^ v1 ^ v2 ^ v3
}

/// SipHash-2-4 of `msg` under a 16-byte key, digest encoded little-endian.
///
/// ```
/// let key: [u8; 16] = core::array::from_fn(|i| i as u8);
/// assert_eq!(hashes::siphash64(key, b""), [0x31, 0x0e, 0x0e, 0xdd, 0x47, 0xdb, 0x6f, 0x72]);
/// ```
#[inline]
#[must_use]
pub fn siphash64(key: [u8; 16], msg: &[u8]) -> [u8; 8] {
  SipHash24::hash_with_key(key, msg)
}

/// Checked form of [`siphash64`] for a message given as an optional buffer
/// plus length.
///
/// # Errors
///
/// Returns [`InvalidArgument`] if `inlen > 0` and `msg` is `None` or shorter
/// than `inlen`.
#[inline]
pub fn try_siphash64(key: [u8; 16], msg: Option<&[u8]>, inlen: usize) -> Result<[u8; 8], InvalidArgument> {
  SipHash24::try_hash_with_key(key, msg, inlen)
}

impl SipHash24 {
  /// Hash with a key already decoded into little-endian words.
  #[inline]
  #[must_use]
  pub fn hash_words(key: [u64; 2], data: &[u8]) -> u64 {
    siphash::<2, 4>(key, data)
  }
}

impl SipHash13 {
  /// Hash with a key already decoded into little-endian words.
  #[inline]
  #[must_use]
  pub fn hash_words(key: [u64; 2], data: &[u8]) -> u64 {
    siphash::<1, 3>(key, data)
  }
}

impl KeyedHash for SipHash24 {
  const KEY_SIZE: usize = 16;
  const OUTPUT_SIZE: usize = 8;
  type Key = [u8; 16];
  type Output = [u8; 8];

  #[inline]
  fn hash_with_key(key: Self::Key, data: &[u8]) -> Self::Output {
    Self::hash_words(key_words_u64(&key), data).to_le_bytes()
  }
}

impl KeyedHash for SipHash13 {
  const KEY_SIZE: usize = 16;
  const OUTPUT_SIZE: usize = 8;
  type Key = [u8; 16];
  type Output = [u8; 8];

  #[inline]
  fn hash_with_key(key: Self::Key, data: &[u8]) -> Self::Output {
    Self::hash_words(key_words_u64(&key), data).to_le_bytes()
  }
}

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::vec::Vec;

  use super::*;

  fn reference_key() -> [u8; 16] {
    core::array::from_fn(|i| i as u8)
  }

  fn counting(len: usize) -> Vec<u8> {
    (0..len).map(|i| i as u8).collect()
  }

  #[test]
  fn empty_message_vector() {
    assert_eq!(
      siphash64(reference_key(), b""),
      [0x31, 0x0e, 0x0e, 0xdd, 0x47, 0xdb, 0x6f, 0x72]
    );
  }

  #[test]
  fn single_zero_byte_vector() {
    assert_eq!(
      siphash64(reference_key(), &[0x00]),
      [0xfd, 0x67, 0xdc, 0x93, 0xc5, 0x39, 0xf8, 0x74]
    );
  }

  #[test]
  fn full_word_vector() {
    assert_eq!(
      siphash64(reference_key(), &counting(8)),
      [0x62, 0x24, 0x93, 0x9a, 0x79, 0xf5, 0xf5, 0x93]
    );
  }

  #[test]
  fn siphash13_empty_vector() {
    assert_eq!(SipHash13::hash_with_key(reference_key(), b""), 0xabac_0158_050f_c4dc_u64.to_le_bytes());
  }

  #[test]
  fn digest_is_word_output_little_endian() {
    let key = reference_key();
    let data = counting(13);
    let word = SipHash24::hash_words(key_words_u64(&key), &data);
    assert_eq!(siphash64(key, &data), word.to_le_bytes());
  }

  #[test]
  fn deterministic() {
    let key = [0x5a; 16];
    let data = counting(100);
    assert_eq!(siphash64(key, &data), siphash64(key, &data));
  }

  #[test]
  fn length_extension_changes_digest() {
    let key = reference_key();
    let msg = counting(11);
    let mut doubled = msg.clone();
    doubled.extend_from_slice(&msg);
    assert_ne!(siphash64(key, &msg), siphash64(key, &doubled));

    // Trailing zero bytes only differ through the length byte.
    for len in 0..24 {
      let a = alloc::vec![0u8; len];
      let b = alloc::vec![0u8; len + 1];
      assert_ne!(siphash64(key, &a), siphash64(key, &b), "len={len}");
    }
  }

  #[test]
  fn checked_entry_point() {
    let key = reference_key();
    assert_eq!(try_siphash64(key, None, 0), Ok(siphash64(key, b"")));
    assert_eq!(try_siphash64(key, None, 1), Err(InvalidArgument::new()));
    assert_eq!(try_siphash64(key, Some(&[0, 1]), 3), Err(InvalidArgument::new()));
    assert_eq!(try_siphash64(key, Some(&[0, 1, 2]), 1), Ok(siphash64(key, &[0])));
  }

  #[test]
  fn round_counts_differ() {
    let key = reference_key();
    assert_ne!(SipHash13::hash_with_key(key, b"abc"), SipHash24::hash_with_key(key, b"abc"));
  }
}
