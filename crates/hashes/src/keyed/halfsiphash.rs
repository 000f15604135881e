//! HalfSipHash: SipHash scaled down to 32-bit lanes and a 64-bit key.
//!
//! Two of the four initial lanes carry no constant (`v0 = k0`, `v1 = k1`) and
//! the digest folds only `v1 ^ v3`. Both differ from [`super::siphash`] and
//! are part of the reference output.

use traits::{InvalidArgument, KeyedHash};

use crate::util::{key_words_u32, tail_u32};

/// HalfSipHash-2-4 with a 32-bit digest.
#[derive(Clone, Copy, Debug, Default)]
pub struct HalfSipHash24;

/// HalfSipHash-1-3 with a 32-bit digest.
#[derive(Clone, Copy, Debug, Default)]
pub struct HalfSipHash13;

const C2: u32 = 0x6c79_6765;
const C3: u32 = 0x7465_6462;

#[inline(always)]
fn half_round(a: &mut u32, b: &mut u32, c: &mut u32, d: &mut u32, s: u32, t: u32) {
  *a = a.wrapping_add(*b);
  *c = c.wrapping_add(*d);
  *b = b.rotate_left(s) ^ *a;
  *d = d.rotate_left(t) ^ *c;
  *a = a.rotate_left(16);
}

#[inline(always)]
fn sip_round(v: &mut [u32; 4]) {
  let [v0, v1, v2, v3] = v;
  half_round(v0, v1, v2, v3, 5, 8);
  half_round(v2, v1, v0, v3, 13, 7);
}

#[inline(always)]
fn rounds<const N: usize>(v: &mut [u32; 4]) {
  for _ in 0..N {
    sip_round(v);
  }
}

/// Final lane state before folding.
#[inline(always)]
fn lanes<const C: usize, const D: usize>(key: [u32; 2], data: &[u8]) -> [u32; 4] {
  let [k0, k1] = key;
  let mut v = [k0, k1, C2 ^ k0, C3 ^ k1];

  let (blocks, tail) = data.as_chunks::<4>();
  for block in blocks {
    let m = u32::from_le_bytes(*block);
    v[3] ^= m;
    rounds::<C>(&mut v);
    v[0] ^= m;
  }

  let b = ((data.len() as u32) << 24) | tail_u32(tail);
  v[3] ^= b;
  rounds::<C>(&mut v);
  v[0] ^= b;

  v[2] ^= 0xff;
  rounds::<D>(&mut v);
  v
}

#[inline(always)]
fn halfsiphash<const C: usize, const D: usize>(key: [u32; 2], data: &[u8]) -> u32 {
  let [_, v1, _, v3] = lanes::<C, D>(key, data);
  v1 ^ v3
}

/// HalfSipHash-2-4 of `msg` under an 8-byte key, digest encoded little-endian.
///
/// ```
/// let key: [u8; 8] = core::array::from_fn(|i| i as u8);
/// assert_eq!(hashes::halfsiphash32(key, b""), [0xa9, 0x35, 0x9f, 0x5b]);
/// ```
#[inline]
#[must_use]
pub fn halfsiphash32(key: [u8; 8], msg: &[u8]) -> [u8; 4] {
  HalfSipHash24::hash_with_key(key, msg)
}

/// Checked form of [`halfsiphash32`].
///
/// # Errors
///
/// Returns [`InvalidArgument`] if `inlen > 0` and `msg` is `None` or shorter
/// than `inlen`.
#[inline]
pub fn try_halfsiphash32(key: [u8; 8], msg: Option<&[u8]>, inlen: usize) -> Result<[u8; 4], InvalidArgument> {
  HalfSipHash24::try_hash_with_key(key, msg, inlen)
}

impl HalfSipHash24 {
  /// Hash with a key already decoded into little-endian words.
  #[inline]
  #[must_use]
  pub fn hash_words(key: [u32; 2], data: &[u8]) -> u32 {
    halfsiphash::<2, 4>(key, data)
  }
}

impl HalfSipHash13 {
  /// Hash with a key already decoded into little-endian words.
  #[inline]
  #[must_use]
  pub fn hash_words(key: [u32; 2], data: &[u8]) -> u32 {
    halfsiphash::<1, 3>(key, data)
  }
}

impl KeyedHash for HalfSipHash24 {
  const KEY_SIZE: usize = 8;
  const OUTPUT_SIZE: usize = 4;
  type Key = [u8; 8];
  type Output = [u8; 4];

  #[inline]
  fn hash_with_key(key: Self::Key, data: &[u8]) -> Self::Output {
    Self::hash_words(key_words_u32(&key), data).to_le_bytes()
  }
}

impl KeyedHash for HalfSipHash13 {
  const KEY_SIZE: usize = 8;
  const OUTPUT_SIZE: usize = 4;
  type Key = [u8; 8];
  type Output = [u8; 4];

  #[inline]
  fn hash_with_key(key: Self::Key, data: &[u8]) -> Self::Output {
    Self::hash_words(key_words_u32(&key), data).to_le_bytes()
  }
}
