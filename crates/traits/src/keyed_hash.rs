//! Keyed hash traits.

use core::fmt::Debug;

use crate::InvalidArgument;

/// A keyed, one-shot hash over a byte message.
///
/// Implementations are pure functions of `(key, data)`: no allocation, no
/// global state, and the same inputs always produce the same output bytes on
/// every platform.
///
/// These hashes are meant for hash-table bucket selection over untrusted
/// keys. They are **not** MACs and must not be used for signatures or key
/// derivation.
pub trait KeyedHash {
  /// Key size in bytes.
  const KEY_SIZE: usize;

  /// Output size in bytes.
  const OUTPUT_SIZE: usize;

  /// Key type, typically `[u8; KEY_SIZE]`.
  type Key: Copy + Debug + Default;

  /// Digest type, typically `[u8; OUTPUT_SIZE]` encoded little-endian.
  type Output: Copy + Eq + Debug + Default + AsRef<[u8]>;

  /// Compute the digest of `data` under `key`.
  #[must_use]
  fn hash_with_key(key: Self::Key, data: &[u8]) -> Self::Output;

  /// Compute the digest of the first `len` bytes of `data`.
  ///
  /// This is the checked entry point for callers that carry a message as an
  /// optional buffer plus an explicit length. A zero `len` always succeeds
  /// and hashes the empty message, whatever `data` holds.
  ///
  /// # Errors
  ///
  /// Returns [`InvalidArgument`] when `len > 0` and `data` is `None` or
  /// shorter than `len` bytes.
  #[inline]
  fn try_hash_with_key(key: Self::Key, data: Option<&[u8]>, len: usize) -> Result<Self::Output, InvalidArgument> {
    if len == 0 {
      return Ok(Self::hash_with_key(key, &[]));
    }
    let msg = data.and_then(|d| d.get(..len)).ok_or(InvalidArgument::new())?;
    Ok(Self::hash_with_key(key, msg))
  }
}
