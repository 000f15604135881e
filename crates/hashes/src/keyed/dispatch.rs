//! Runtime algorithm selection.
//!
//! Callers that pick SipHash or HalfSipHash from configuration carry an
//! [`Algorithm`] value and dispatch with a `match`; there is no global
//! function-pointer table to mutate.

use traits::{InvalidArgument, KeyedHash};

use super::{HalfSipHash24, SipHash24};

/// Keyed hash selected at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
  /// SipHash-2-4, 16-byte key, 8-byte digest.
  Sip64,
  /// HalfSipHash-2-4, 8-byte key, 4-byte digest.
  HalfSip32,
}

impl Algorithm {
  /// Every selectable algorithm.
  pub const ALL: &'static [Self] = &[Self::Sip64, Self::HalfSip32];

  #[inline]
  #[must_use]
  pub const fn key_len(self) -> usize {
    match self {
      Self::Sip64 => SipHash24::KEY_SIZE,
      Self::HalfSip32 => HalfSipHash24::KEY_SIZE,
    }
  }

  #[inline]
  #[must_use]
  pub const fn output_len(self) -> usize {
    match self {
      Self::Sip64 => SipHash24::OUTPUT_SIZE,
      Self::HalfSip32 => HalfSipHash24::OUTPUT_SIZE,
    }
  }

  #[inline]
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Sip64 => "siphash-2-4",
      Self::HalfSip32 => "halfsiphash-2-4",
    }
  }

  #[must_use]
  pub fn from_name(name: &str) -> Option<Self> {
    Self::ALL.iter().copied().find(|alg| alg.as_str() == name)
  }

  /// Hash `msg` under `key`.
  ///
  /// # Errors
  ///
  /// Returns [`InvalidArgument`] if `key.len()` differs from [`Self::key_len`].
  pub fn digest(self, key: &[u8], msg: &[u8]) -> Result<KeyedDigest, InvalidArgument> {
    match self {
      Self::Sip64 => {
        let key: [u8; 16] = key.try_into().map_err(|_| InvalidArgument::new())?;
        Ok(KeyedDigest::Sip64(SipHash24::hash_with_key(key, msg)))
      }
      Self::HalfSip32 => {
        let key: [u8; 8] = key.try_into().map_err(|_| InvalidArgument::new())?;
        Ok(KeyedDigest::HalfSip32(HalfSipHash24::hash_with_key(key, msg)))
      }
    }
  }

  /// Hash `msg` under `key` into the front of `out`, returning the number of
  /// bytes written. Bytes of `out` past the digest are left untouched.
  ///
  /// # Errors
  ///
  /// Returns [`InvalidArgument`] if the key length is wrong or `out` is
  /// shorter than [`Self::output_len`]. Nothing is written on error.
  pub fn digest_into(self, key: &[u8], msg: &[u8], out: &mut [u8]) -> Result<usize, InvalidArgument> {
    let dst = out.get_mut(..self.output_len()).ok_or(InvalidArgument::new())?;
    let digest = self.digest(key, msg)?;
    dst.copy_from_slice(digest.as_bytes());
    Ok(dst.len())
  }
}

impl core::fmt::Display for Algorithm {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Digest produced by [`Algorithm::digest`], tagged with its algorithm.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyedDigest {
  Sip64([u8; 8]),
  HalfSip32([u8; 4]),
}

impl KeyedDigest {
  #[inline]
  #[must_use]
  pub const fn algorithm(&self) -> Algorithm {
    match self {
      Self::Sip64(_) => Algorithm::Sip64,
      Self::HalfSip32(_) => Algorithm::HalfSip32,
    }
  }

  /// Little-endian digest bytes.
  #[inline]
  #[must_use]
  pub fn as_bytes(&self) -> &[u8] {
    match self {
      Self::Sip64(b) => b.as_slice(),
      Self::HalfSip32(b) => b.as_slice(),
    }
  }

  /// Digest as an integer, zero-extended for the 32-bit variant.
  ///
  /// Hash tables typically reduce this modulo their bucket count.
  #[inline]
  #[must_use]
  pub const fn to_u64(&self) -> u64 {
    match *self {
      Self::Sip64(b) => u64::from_le_bytes(b),
      Self::HalfSip32(b) => u32::from_le_bytes(b) as u64,
    }
  }
}

impl AsRef<[u8]> for KeyedDigest {
  #[inline]
  fn as_ref(&self) -> &[u8] {
    self.as_bytes()
  }
}
