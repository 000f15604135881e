//! Keyed hashes for hash-table indexing (**NOT A MAC**).
//!
//! SipHash and HalfSipHash defend hash tables against algorithmic-complexity
//! attacks on untrusted keys. Outputs are bit-exact with the reference
//! implementations on every host byte order.
//!
//! - [`siphash64`] / [`SipHash24`] - 16-byte key, 8-byte digest
//! - [`halfsiphash32`] / [`HalfSipHash24`] - 8-byte key, 4-byte digest
//! - [`Algorithm`] - runtime selection between the two

pub mod dispatch;
pub mod halfsiphash;
pub mod siphash;

pub use dispatch::{Algorithm, KeyedDigest};
pub use halfsiphash::{HalfSipHash13, HalfSipHash24, halfsiphash32, try_halfsiphash32};
pub use siphash::{SipHash13, SipHash24, siphash64, try_siphash64};
