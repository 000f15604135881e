//! Keyed hashing and seed-schedule derivation.
//!
//! `sipseed` bundles three pure, allocation-free primitives:
//!
//! - [`siphash64`] - SipHash-2-4, 16-byte key, 8-byte digest
//! - [`halfsiphash32`] - HalfSipHash-2-4, 8-byte key, 4-byte digest
//! - [`derive_schedule`] - variable-length seed to 16-word generator state
//!
//! # Quick Start
//!
//! ```
//! use sipseed::{Algorithm, derive_schedule, siphash64};
//!
//! let key: [u8; 16] = core::array::from_fn(|i| i as u8);
//! assert_eq!(siphash64(key, &[0x00]), [0xfd, 0x67, 0xdc, 0x93, 0xc5, 0x39, 0xf8, 0x74]);
//!
//! // Runtime selection, e.g. from configuration.
//! let alg = Algorithm::from_name("halfsiphash-2-4").unwrap();
//! let digest = alg.digest(&key[..alg.key_len()], b"").unwrap();
//! assert_eq!(digest.as_bytes(), &[0xa9, 0x35, 0x9f, 0x5b]);
//!
//! let state = derive_schedule(&[]);
//! assert_eq!(state.counter(), (0, 0));
//! ```
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std` | Yes | `std` support in the member crates |
//! | `hashes` | Yes | SipHash and HalfSipHash |
//! | `schedule` | Yes | Seed-schedule derivation |
//!
//! ## `no_std` Usage
//!
//! ```toml
//! [dependencies]
//! sipseed = { version = "0.1", default-features = false, features = ["hashes"] }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

pub use traits::{InvalidArgument, KeyedHash};

// =============================================================================
// Keyed hashes
// =============================================================================

#[cfg(feature = "hashes")]
pub use hashes::{
  Algorithm, KeyedDigest, halfsiphash32,
  keyed::{HalfSipHash13, HalfSipHash24, SipHash13, SipHash24},
  siphash64, try_halfsiphash32, try_siphash64,
};

// =============================================================================
// Seed schedule
// =============================================================================

#[cfg(feature = "schedule")]
pub use schedule::{DEFAULT_IV, DEFAULT_KEY, STATE_WORDS, SeedState, Tier, derive_schedule};
