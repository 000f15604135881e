//! Core traits for the sipseed workspace.
//!
//! This crate provides the seams the algorithm crates implement. It is
//! `no_std` compatible and has zero dependencies.
//!
//! | Trait | Purpose | Examples |
//! |-------|---------|----------|
//! | [`KeyedHash`] | Keyed one-shot hashes for hash-table indexing | SipHash-2-4, HalfSipHash-2-4 |
//!
//! # Error Types
//!
//! - [`InvalidArgument`] - A documented precondition was violated by the caller
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod error;
mod keyed_hash;

pub use error::InvalidArgument;
pub use keyed_hash::KeyedHash;

#[cfg(test)]
mod tests {
  use super::*;

  #[derive(Clone, Copy, Debug, Default)]
  struct XorFold;

  impl KeyedHash for XorFold {
    const KEY_SIZE: usize = 1;
    const OUTPUT_SIZE: usize = 1;
    type Key = [u8; 1];
    type Output = [u8; 1];

    fn hash_with_key(key: Self::Key, data: &[u8]) -> Self::Output {
      [data.iter().fold(key[0], |acc, b| acc ^ b)]
    }
  }

  #[test]
  fn zero_length_ignores_missing_buffer() {
    assert_eq!(XorFold::try_hash_with_key([5], None, 0), Ok([5]));
    assert_eq!(XorFold::try_hash_with_key([5], Some(&[1, 2, 3]), 0), Ok([5]));
  }

  #[test]
  fn missing_buffer_with_length_is_rejected() {
    assert_eq!(XorFold::try_hash_with_key([0], None, 1), Err(InvalidArgument::new()));
  }

  #[test]
  fn short_buffer_is_rejected() {
    assert_eq!(XorFold::try_hash_with_key([0], Some(&[1, 2]), 3), Err(InvalidArgument::new()));
  }

  #[test]
  fn only_the_declared_prefix_is_hashed() {
    assert_eq!(XorFold::try_hash_with_key([0], Some(&[1, 2, 4]), 2), Ok([3]));
  }
}
