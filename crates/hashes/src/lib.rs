//! Keyed hashes: SipHash (64-bit) and HalfSipHash (32-bit).
//!
//! This crate is `no_std` compatible and has zero library dependencies outside
//! the workspace. Dev-only dependencies are used for oracle testing and
//! benchmarking.
//!
//! # Modules
//!
//! - [`keyed`] - SipHash-2-4, HalfSipHash-2-4, their 1-3 variants, and
//!   [`Algorithm`] dispatch.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod keyed;

mod util;

pub use keyed::{Algorithm, KeyedDigest, halfsiphash32, siphash64, try_halfsiphash32, try_siphash64};
pub use traits::{InvalidArgument, KeyedHash};
