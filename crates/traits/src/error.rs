//! Error types.
//!
//! Every operation in this workspace is a pure function; the only failure is a
//! caller handing over arguments that break a documented precondition.

use core::fmt;

/// An argument violated a documented precondition.
///
/// Returned when a message length is non-zero but no (or too short a) buffer
/// backs it, when a key slice has the wrong length for the selected
/// algorithm, or when an output buffer is too small for the digest.
///
/// # Examples
///
/// ```
/// use traits::InvalidArgument;
///
/// fn first_byte(data: Option<&[u8]>) -> Result<u8, InvalidArgument> {
///   data.and_then(|d| d.first().copied()).ok_or(InvalidArgument::new())
/// }
///
/// assert!(first_byte(None).is_err());
/// assert_eq!(first_byte(Some(&[7])), Ok(7));
/// ```
///
/// Treat this as a caller bug, not a recoverable runtime condition: retrying
/// with the same arguments fails the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct InvalidArgument;

impl InvalidArgument {
  /// Create a new invalid-argument error.
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self
  }
}

impl Default for InvalidArgument {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl fmt::Display for InvalidArgument {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("invalid argument")
  }
}

impl core::error::Error for InvalidArgument {}

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::{format, string::ToString};

  use super::*;

  #[test]
  fn display_message() {
    assert_eq!(InvalidArgument::new().to_string(), "invalid argument");
  }

  #[test]
  fn debug_impl() {
    assert_eq!(format!("{:?}", InvalidArgument::new()), "InvalidArgument");
  }

  #[test]
  fn default_impl() {
    let err: InvalidArgument = Default::default();
    assert_eq!(err, InvalidArgument::new());
  }

  #[test]
  fn trait_bounds() {
    fn assert_send_sync<T: Send + Sync + Unpin>() {}
    fn assert_error<T: core::error::Error>() {}

    assert_send_sync::<InvalidArgument>();
    assert_error::<InvalidArgument>();
  }

  #[test]
  fn error_has_no_source() {
    use core::error::Error;
    assert!(InvalidArgument::new().source().is_none());
  }

  #[test]
  fn size_is_zero() {
    assert_eq!(size_of::<InvalidArgument>(), 0);
  }
}
