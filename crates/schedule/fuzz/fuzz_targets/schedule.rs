#![no_main]

use libfuzzer_sys::fuzz_target;
use schedule::{DEFAULT_IV, STATE_WORDS, Tier, derive_schedule};

fuzz_target!(|seed: Vec<u32>| {
  let state = derive_schedule(&seed);

  assert_eq!(state.tier(), Tier::select(seed.len()));
  assert_eq!(state.counter(), (0, 0));
  assert_eq!(state.refill_index(), STATE_WORDS);

  if let Some(n) = state.tier().key_words() {
    let [iv0, iv1] = state.iv();
    assert_eq!(iv0, seed.get(n).copied().unwrap_or(DEFAULT_IV[0]));
    assert_eq!(iv1, seed.get(n + 1).copied().unwrap_or(DEFAULT_IV[1]));
  } else {
    assert_eq!(state.iv(), DEFAULT_IV);
  }

  let words = state.to_words();
  assert_eq!(words[4..12], state.key());
});
