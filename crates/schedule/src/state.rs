//! The 16-word generator state and its derivation from a seed.

use core::fmt;

use crate::{
  Tier,
  constants::{DEFAULT_IV, DEFAULT_KEY, STATE_WORDS},
};

/// Key schedule of a ChaCha-style keystream generator.
///
/// Word layout (see [`SeedState::to_words`]): four constants, eight key
/// words, the 64-bit block counter as low/high words, two IV words.
///
/// The value is an immutable snapshot. A generator that advances the counter
/// owns its own copy and serializes access to it.
#[derive(Clone, PartialEq, Eq)]
pub struct SeedState {
  tier: Tier,
  constants: [u32; 4],
  key: [u32; 8],
  counter: (u32, u32),
  iv: [u32; 2],
  refill_index: usize,
}

impl SeedState {
  #[inline]
  #[must_use]
  pub const fn tier(&self) -> Tier {
    self.tier
  }

  #[inline]
  #[must_use]
  pub const fn constants(&self) -> [u32; 4] {
    self.constants
  }

  #[inline]
  #[must_use]
  pub const fn key(&self) -> [u32; 8] {
    self.key
  }

  /// Block counter as `(low, high)`.
  #[inline]
  #[must_use]
  pub const fn counter(&self) -> (u32, u32) {
    self.counter
  }

  #[inline]
  #[must_use]
  pub const fn iv(&self) -> [u32; 2] {
    self.iv
  }

  /// Index of the next unread keystream word.
  ///
  /// Equal to [`STATE_WORDS`] after seeding, so the first draw generates a
  /// fresh block.
  #[inline]
  #[must_use]
  pub const fn refill_index(&self) -> usize {
    self.refill_index
  }

  /// The state as the 16 input words of a block function.
  #[must_use]
  pub fn to_words(&self) -> [u32; STATE_WORDS] {
    let (lo, hi) = self.counter;
    let counter = [lo, hi];
    let mut words = [0u32; STATE_WORDS];
    let parts = self
      .constants
      .iter()
      .chain(&self.key)
      .chain(&counter)
      .chain(&self.iv);
    for (dst, &src) in words.iter_mut().zip(parts) {
      *dst = src;
    }
    words
  }
}

impl fmt::Debug for SeedState {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("SeedState")
      .field("tier", &self.tier)
      .field("constants", &self.constants)
      .field("key", &"<redacted>")
      .field("counter", &self.counter)
      .field("iv", &self.iv)
      .field("refill_index", &self.refill_index)
      .finish()
  }
}

/// Derive a generator state from a seed of any length.
///
/// - The [`Tier`] is chosen from `seed.len()` as given.
/// - An empty seed is then replaced by [`DEFAULT_KEY`]. The tier stays
///   [`Tier::Generic`], so the state pairs the placeholder constants with an
///   8-word key, unlike a genuine 8-word seed.
/// - Key words cycle through the tier's key material: `key[i] = src[i % len]`.
/// - IV words come from the seed past the key material; missing ones take
///   [`DEFAULT_IV`], extra ones are ignored.
///
/// Never fails.
///
/// ```
/// use schedule::{DEFAULT_IV, Tier, derive_schedule};
///
/// let state = derive_schedule(&[1, 2, 3, 4, 5, 6, 7, 8]);
/// assert_eq!(state.tier(), Tier::Key32);
/// assert_eq!(state.key(), [1, 2, 3, 4, 5, 6, 7, 8]);
/// assert_eq!(state.iv(), DEFAULT_IV);
/// assert_eq!(state.counter(), (0, 0));
/// ```
#[must_use]
pub fn derive_schedule(seed: &[u32]) -> SeedState {
  let tier = Tier::select(seed.len());

  let (key_src, iv_src) = match tier.key_words() {
    Some(n) => seed.split_at_checked(n).unwrap_or((seed, &[][..])),
    None => (seed, &[][..]),
  };
  // TODO: the empty seed keeps generic constants with an 8-word key; settle
  // whether it should take the Key32 path once downstream keystreams allow it.
  let key_src = if key_src.is_empty() { DEFAULT_KEY.as_slice() } else { key_src };

  let mut cycled = key_src.iter().copied().cycle();
  let key = core::array::from_fn(|_| cycled.next().unwrap_or_default());

  let [iv0, iv1] = DEFAULT_IV;
  let mut iv_words = iv_src.iter().copied();
  let iv = [iv_words.next().unwrap_or(iv0), iv_words.next().unwrap_or(iv1)];

  SeedState {
    tier,
    constants: tier.constants(),
    key,
    counter: (0, 0),
    iv,
    refill_index: STATE_WORDS,
  }
}
