//! Bit-at-a-time reference CRCs.
//!
//! These process one bit per step with no lookup table, so they mirror the
//! polynomial division directly. They are the oracle the table-driven
//! evaluator is tested against, and being `const` they also pin the catalog
//! check values at compile time.
//!
//! | Function | Direction | Polynomial form | Native catalog flavor |
//! |----------|-----------|-----------------|-----------------------|
//! | [`lsb_first`] | right shift | reflected | `refin = refout = true` |
//! | [`msb_first`] | left shift | normal | `refin = refout = false` |
//!
//! Both return the raw register; the caller applies any final XOR.

// SAFETY: All array indexing uses bounded loop indices (0..data.len()).
#![allow(clippy::indexing_slicing)]

use crate::{params::CHECK_INPUT, reflect::reflect32};

/// Bitwise LSB-first CRC.
///
/// `polynomial` is the reflected generator (e.g. `0xEDB88320` for
/// CRC-32/ISO-HDLC, `0xA001` for CRC-16/ARC). Any width up to 32 bits works
/// as long as `polynomial` and `register` fit in it.
#[must_use]
pub const fn lsb_first(polynomial: u32, register: u32, data: &[u8]) -> u32 {
  let mut crc = register;
  let mut i = 0;
  while i < data.len() {
    crc ^= data[i] as u32;
    let mut bit = 0;
    while bit < 8 {
      crc = if crc & 1 != 0 { (crc >> 1) ^ polynomial } else { crc >> 1 };
      bit += 1;
    }
    i += 1;
  }
  crc
}

/// Bitwise MSB-first CRC of `width_bits` (clamped to 8..=32).
///
/// `polynomial` is the normal generator without the implicit top term
/// (e.g. `0x1021`). The result is masked to the width.
#[must_use]
pub const fn msb_first(polynomial: u32, width_bits: u32, register: u32, data: &[u8]) -> u32 {
  let width = if width_bits < 8 {
    8
  } else if width_bits > 32 {
    32
  } else {
    width_bits
  };
  let mask = if width == 32 { u32::MAX } else { (1u32 << width) - 1 };
  let top = 1u32 << (width - 1);

  let mut crc = register & mask;
  let mut i = 0;
  while i < data.len() {
    crc ^= (data[i] as u32) << (width - 8);
    let mut bit = 0;
    while bit < 8 {
      crc = if crc & top != 0 { (crc << 1) ^ polynomial } else { crc << 1 };
      crc &= mask;
      bit += 1;
    }
    i += 1;
  }
  crc
}

// ─────────────────────────────────────────────────────────────────────────────
// Compile-time check values
// ─────────────────────────────────────────────────────────────────────────────

// CRC-32/ISO-HDLC
const _: () = assert!(lsb_first(reflect32(0x04C1_1DB7), !0, CHECK_INPUT) ^ !0 == 0xCBF4_3926);
// CRC-32/ISCSI
const _: () = assert!(lsb_first(reflect32(0x1EDC_6F41), !0, CHECK_INPUT) ^ !0 == 0xE306_9283);
// CRC-32/BASE91-D
const _: () = assert!(lsb_first(reflect32(0xA833_982B), !0, CHECK_INPUT) ^ !0 == 0x8731_5576);
// CRC-32/AIXM
const _: () = assert!(msb_first(0x8141_41AB, 32, 0, CHECK_INPUT) == 0x3010_BF7F);
// CRC-16/ARC
const _: () = assert!(lsb_first(0xA001, 0, CHECK_INPUT) == 0xBB3D);
// CRC-16/IBM-3740
const _: () = assert!(msb_first(0x1021, 16, 0xFFFF, CHECK_INPUT) == 0x29B1);
// CRC-16/CDMA2000
const _: () = assert!(msb_first(0xC867, 16, 0xFFFF, CHECK_INPUT) == 0x4C06);
