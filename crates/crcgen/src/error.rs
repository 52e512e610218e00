//! Error types for CRC table construction and variant resolution.
//!
//! Both errors describe a variant the engine was never built to support.
//! They only occur at the raw-integer boundary ([`crate::build_table`],
//! [`crate::Width::from_byte_width`], `TryFrom<u16>` / `TryFrom<u32>` on the
//! polynomial enums); the typed API cannot express them.

use core::fmt;

/// Unsupported CRC variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum CrcError {
  /// The requested register width is not 1, 2 or 4 bytes.
  UnsupportedWidth {
    /// Requested width in bytes.
    byte_width: usize,
  },
  /// The polynomial has no table in the registry for this width.
  UnsupportedPolynomial {
    /// Polynomial in normal (MSB-first) form.
    polynomial: u32,
    /// Register width in bits.
    width_bits: u32,
  },
}

impl fmt::Display for CrcError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match *self {
      Self::UnsupportedWidth { byte_width } => {
        write!(f, "unsupported crc width: {byte_width} bytes (supported: 1, 2, 4)")
      }
      Self::UnsupportedPolynomial { polynomial, width_bits } => {
        let digits = (width_bits as usize).div_ceil(4);
        write!(f, "unsupported crc-{width_bits} polynomial 0x{polynomial:0digits$X}")
      }
    }
  }
}

impl core::error::Error for CrcError {}

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::string::ToString;

  use super::*;

  #[test]
  fn display_width() {
    let err = CrcError::UnsupportedWidth { byte_width: 3 };
    assert_eq!(err.to_string(), "unsupported crc width: 3 bytes (supported: 1, 2, 4)");
  }

  #[test]
  fn display_polynomial_is_zero_padded() {
    let err = CrcError::UnsupportedPolynomial { polynomial: 0x0007, width_bits: 16 };
    assert_eq!(err.to_string(), "unsupported crc-16 polynomial 0x0007");

    let err = CrcError::UnsupportedPolynomial { polynomial: 0x04C1_1DB6, width_bits: 32 };
    assert_eq!(err.to_string(), "unsupported crc-32 polynomial 0x04C11DB6");
  }

  #[test]
  fn trait_bounds() {
    fn assert_send_sync<T: Send + Sync + Copy>() {}
    fn assert_error<T: core::error::Error>() {}

    assert_send_sync::<CrcError>();
    assert_error::<CrcError>();
  }

  #[test]
  fn no_source() {
    use core::error::Error;

    let err = CrcError::UnsupportedWidth { byte_width: 8 };
    assert!(err.source().is_none());
  }
}
