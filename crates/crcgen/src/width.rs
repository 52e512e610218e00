//! CRC register widths.
//!
//! [`Width`] is the runtime description of a register width (8, 16 or 32
//! bits). [`Register`] is the compile-time one: it is implemented for `u8`,
//! `u16` and `u32` only, and carries the handful of width-dependent
//! operations the table builder and the evaluator need.

use core::{
  fmt,
  ops::{BitAnd, BitXor},
};

use crate::{
  error::CrcError,
  reflect,
  tables::{self, Convention},
};

/// Supported CRC register width.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Width {
  /// 8-bit register (table builder only).
  Crc8,
  /// 16-bit register.
  Crc16,
  /// 32-bit register.
  Crc32,
}

impl Width {
  /// Resolve a register width given in bytes.
  ///
  /// # Errors
  ///
  /// [`CrcError::UnsupportedWidth`] unless `byte_width` is 1, 2 or 4.
  pub const fn from_byte_width(byte_width: usize) -> Result<Self, CrcError> {
    match byte_width {
      1 => Ok(Self::Crc8),
      2 => Ok(Self::Crc16),
      4 => Ok(Self::Crc32),
      _ => Err(CrcError::UnsupportedWidth { byte_width }),
    }
  }

  /// Resolve a register width given in bits, rounding up to whole bytes.
  ///
  /// A 12-bit request therefore yields [`Width::Crc16`].
  ///
  /// # Errors
  ///
  /// [`CrcError::UnsupportedWidth`] if the rounded byte count is not 1, 2 or 4.
  pub const fn from_bits(bits: u32) -> Result<Self, CrcError> {
    Self::from_byte_width(bits.div_ceil(8) as usize)
  }

  /// Width in bits.
  #[inline]
  #[must_use]
  pub const fn bits(self) -> u32 {
    match self {
      Self::Crc8 => 8,
      Self::Crc16 => 16,
      Self::Crc32 => 32,
    }
  }

  /// Width in bytes.
  #[inline]
  #[must_use]
  pub const fn bytes(self) -> usize {
    (self.bits() / 8) as usize
  }

  /// All-ones mask of this width.
  #[inline]
  #[must_use]
  pub const fn mask(self) -> u32 {
    match self {
      Self::Crc8 => 0xFF,
      Self::Crc16 => 0xFFFF,
      Self::Crc32 => 0xFFFF_FFFF,
    }
  }

  /// Bit `W - 1`.
  #[inline]
  #[must_use]
  pub const fn top_bit(self) -> u32 {
    1 << (self.bits() - 1)
  }

  /// Entries per row when a table of this width is rendered.
  #[inline]
  #[must_use]
  pub const fn default_columns(self) -> usize {
    match self {
      Self::Crc8 => 16,
      Self::Crc16 => 8,
      Self::Crc32 => 4,
    }
  }
}

impl TryFrom<usize> for Width {
  type Error = CrcError;

  #[inline]
  fn try_from(byte_width: usize) -> Result<Self, Self::Error> {
    Self::from_byte_width(byte_width)
  }
}

impl fmt::Display for Width {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "crc-{}", self.bits())
  }
}

mod private {
  pub trait Sealed {}

  impl Sealed for u8 {}
  impl Sealed for u16 {}
  impl Sealed for u32 {}
}

/// An unsigned integer usable as a CRC register.
///
/// Sealed: implemented for `u8`, `u16` and `u32`.
pub trait Register:
  Copy
  + Eq
  + Default
  + fmt::Debug
  + fmt::LowerHex
  + fmt::UpperHex
  + BitXor<Output = Self>
  + BitAnd<Output = Self>
  + Send
  + Sync
  + 'static
  + private::Sealed
{
  /// Register width.
  const WIDTH: Width;
  /// All bits clear.
  const ZERO: Self;
  /// All bits set.
  const ONES: Self;

  /// Zero-extend to `u32`.
  fn to_u32(self) -> u32;

  /// Reverse the bit order across the full register width.
  fn reflect(self) -> Self;

  /// `(self ^ byte) & 0xFF` as a table index.
  fn table_index(self, byte: u8) -> usize;

  /// `self >> 8`, which is zero for an 8-bit register.
  fn shift_out_byte(self) -> Self;

  /// Build a 256-entry table for `polynomial` in the given convention.
  fn build_table(polynomial: Self, convention: Convention) -> [Self; 256];
}

impl Register for u8 {
  const WIDTH: Width = Width::Crc8;
  const ZERO: Self = 0;
  const ONES: Self = Self::MAX;

  #[inline]
  fn to_u32(self) -> u32 {
    u32::from(self)
  }

  #[inline]
  fn reflect(self) -> Self {
    reflect::reflect8(self)
  }

  #[inline]
  fn table_index(self, byte: u8) -> usize {
    usize::from(self ^ byte)
  }

  #[inline]
  fn shift_out_byte(self) -> Self {
    0
  }

  #[inline]
  fn build_table(polynomial: Self, convention: Convention) -> [Self; 256] {
    tables::table8(polynomial, convention)
  }
}

impl Register for u16 {
  const WIDTH: Width = Width::Crc16;
  const ZERO: Self = 0;
  const ONES: Self = Self::MAX;

  #[inline]
  fn to_u32(self) -> u32 {
    u32::from(self)
  }

  #[inline]
  fn reflect(self) -> Self {
    reflect::reflect16(self)
  }

  #[inline]
  fn table_index(self, byte: u8) -> usize {
    usize::from((self ^ Self::from(byte)) as u8)
  }

  #[inline]
  fn shift_out_byte(self) -> Self {
    self >> 8
  }

  #[inline]
  fn build_table(polynomial: Self, convention: Convention) -> [Self; 256] {
    tables::table16(polynomial, convention)
  }
}

impl Register for u32 {
  const WIDTH: Width = Width::Crc32;
  const ZERO: Self = 0;
  const ONES: Self = Self::MAX;

  #[inline]
  fn to_u32(self) -> u32 {
    self
  }

  #[inline]
  fn reflect(self) -> Self {
    reflect::reflect32(self)
  }

  #[inline]
  fn table_index(self, byte: u8) -> usize {
    ((self ^ Self::from(byte)) & 0xFF) as usize
  }

  #[inline]
  fn shift_out_byte(self) -> Self {
    self >> 8
  }

  #[inline]
  fn build_table(polynomial: Self, convention: Convention) -> [Self; 256] {
    tables::table32(polynomial, convention)
  }
}
