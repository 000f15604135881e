//! Seed-to-key-schedule derivation for ChaCha-style keystream generators.
//!
//! [`derive_schedule`] maps a caller-supplied word sequence of any length to
//! the fixed 16-word generator input: four constants, eight key words, a
//! zeroed 64-bit counter and two IV words. The derivation is pure, allocates
//! nothing and never fails.
//!
//! Which constants appear depends on the seed's length ([`Tier`]):
//!
//! | Seed words | Tier | Middle constants | IV source |
//! |------------|------|------------------|-----------|
//! | `>= 8` | [`Tier::Key32`] | `"nd 3"` `"2-by"` | `seed[8..]` |
//! | `4..=6` | [`Tier::Key16`] | `"nd 1"` `"6-by"` | `seed[4..]` |
//! | otherwise | [`Tier::Generic`] | `"nd X"` `"X-by"` | defaults |
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod constants;
mod state;
mod tier;

pub use constants::{DEFAULT_IV, DEFAULT_KEY, STATE_WORDS};
pub use state::{SeedState, derive_schedule};
pub use tier::Tier;
