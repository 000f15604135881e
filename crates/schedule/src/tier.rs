//! Length-based constant selection.

use crate::constants::{SIGMA_EXPA, SIGMA_GENERIC, SIGMA_KEY16, SIGMA_KEY32, SIGMA_TE_K};

/// Branch of the schedule chosen from the seed's word count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tier {
  /// `n >= 8`: key from `seed[..8]`, IV from `seed[8..]`.
  Key32,
  /// `4 <= n <= 6`: key from `seed[..4]` cycled, IV from `seed[4..]`.
  Key16,
  /// Anything else (`0..=3` or `7`): whole seed cycled as key, default IV.
  Generic,
}

impl Tier {
  /// Pick the tier for a seed of `n` words.
  ///
  /// Must be called with the caller's length, before the empty-seed fallback
  /// swaps in [`crate::DEFAULT_KEY`].
  #[inline]
  #[must_use]
  pub const fn select(n: usize) -> Self {
    match n {
      8.. => Self::Key32,
      4..=6 => Self::Key16,
      _ => Self::Generic,
    }
  }

  /// Number of leading seed words used as key material, or `None` when the
  /// whole seed is.
  #[inline]
  #[must_use]
  pub const fn key_words(self) -> Option<usize> {
    match self {
      Self::Key32 => Some(8),
      Self::Key16 => Some(4),
      Self::Generic => None,
    }
  }

  /// The four constant words of the state.
  #[inline]
  #[must_use]
  pub const fn constants(self) -> [u32; 4] {
    let [mid0, mid1] = match self {
      Self::Key32 => SIGMA_KEY32,
      Self::Key16 => SIGMA_KEY16,
      Self::Generic => SIGMA_GENERIC,
    };
    [SIGMA_EXPA, mid0, mid1, SIGMA_TE_K]
  }

  #[inline]
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Key32 => "key32",
      Self::Key16 => "key16",
      Self::Generic => "generic",
    }
  }
}
