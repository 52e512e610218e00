//! Bit reflection for CRC registers and input bytes.
//!
//! "Reflecting" a value reverses its bit order within a fixed width: bit 0
//! swaps with bit `W - 1`, bit 1 with bit `W - 2`, and so on. The table
//! builder reflects polynomials, and the evaluator reflects input bytes and
//! final register values when a variant asks for it.
//!
//! All functions are `const` so they can be used while baking tables at
//! compile time.

/// Reverse the bit order of a byte.
///
/// Three paired swaps: nibbles, then 2-bit pairs, then adjacent bits.
#[inline]
#[must_use]
pub const fn reflect8(value: u8) -> u8 {
  let v = value.rotate_left(4);
  let v = ((v & 0xCC) >> 2) | ((v & 0x33) << 2);
  ((v & 0xAA) >> 1) | ((v & 0x55) << 1)
}

/// Reverse the bit order of a 16-bit value.
#[inline]
#[must_use]
pub const fn reflect16(value: u16) -> u16 {
  reflect_bits(value as u32, 16) as u16
}

/// Reverse the bit order of a 32-bit value.
#[inline]
#[must_use]
pub const fn reflect32(value: u32) -> u32 {
  reflect_bits(value, 32)
}

/// Reverse the low `width` bits of `value`.
///
/// Bits above `width` are discarded. `width` is clamped to `1..=32`.
#[must_use]
pub const fn reflect_bits(mut value: u32, width: u32) -> u32 {
  let width = if width == 0 {
    1
  } else if width > 32 {
    32
  } else {
    width
  };

  let mut reflected = 0u32;
  let mut i = 0;
  while i < width {
    reflected <<= 1;
    if value & 1 != 0 {
      reflected |= 1;
    }
    value >>= 1;
    i += 1;
  }
  reflected
}
