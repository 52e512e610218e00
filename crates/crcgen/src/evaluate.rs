//! Table-driven CRC evaluation.
//!
//! The evaluator processes one byte per step with the right-shifting
//! recurrence
//!
//! ```text
//! crc = table[(crc ^ byte) & 0xFF] ^ (crc >> 8)
//! ```
//!
//! It is convention-agnostic: whatever the table encodes is what gets
//! computed. Registry tables are LSB-first ([`crate::Convention::Forward`]).
//!
//! # Running values
//!
//! Every call takes the running value returned by the previous call and
//! returns the updated one. A running value of exactly zero together with a
//! non-zero `init` is read as "start of stream" and replaced by `init`. This
//! cannot tell a fresh stream from a stream whose register happened to reach
//! zero; use [`crate::Crc`] when chunks must be threaded through without that
//! ambiguity.

// SAFETY: Table indices come from `Register::table_index`, which masks to a
// byte, so they are always in 0..256.
#![allow(clippy::indexing_slicing)]

use crate::{
  error::CrcError,
  params::CrcConfig,
  reflect::reflect8,
  registry::{CRC16_REGISTRY, CRC32_REGISTRY, Crc16Polynomial, Crc32Polynomial, KnownPolynomial},
  width::Register,
};

/// Fold `data` into `crc` using `table`.
///
/// 1. Reseed with `config.init` if `crc` is zero and `init` is not.
/// 2. XOR in `config.xor_in`.
/// 3. Fold every byte, reflecting it first when `config.reflect_in` is set.
/// 4. Reflect the register when `config.reflect_out` is set.
/// 5. XOR in `config.xor_out`.
///
/// Empty `data` still runs steps 1, 2, 4 and 5.
#[must_use]
pub fn evaluate<R: Register>(table: &[R; 256], crc: R, data: &[u8], config: &CrcConfig<R>) -> R {
  let crc = if crc == R::ZERO && config.init != R::ZERO { config.init } else { crc };
  let crc = fold(table, crc ^ config.xor_in, data, config.reflect_in);
  let crc = if config.reflect_out { crc.reflect() } else { crc };
  crc ^ config.xor_out
}

/// Run the table recurrence over `data` with no seeding or masking.
#[inline]
#[must_use]
pub(crate) fn fold<R: Register>(table: &[R; 256], mut crc: R, data: &[u8], reflect_in: bool) -> R {
  if reflect_in {
    for &byte in data {
      crc = table[crc.table_index(reflect8(byte))] ^ crc.shift_out_byte();
    }
  } else {
    for &byte in data {
      crc = table[crc.table_index(byte)] ^ crc.shift_out_byte();
    }
  }
  crc
}

/// CRC-16 over `data` with a registered polynomial.
///
/// # Example
///
/// ```
/// use crcgen::{CrcConfig, Crc16Polynomial, crc16};
///
/// // CRC-16/IBM-SDLC (X-25)
/// let crc = crc16(Crc16Polynomial::Ccitt, 0, b"123456789", &CrcConfig::default());
/// assert_eq!(crc, 0x906E);
/// ```
#[inline]
#[must_use]
pub fn crc16(polynomial: Crc16Polynomial, crc: u16, data: &[u8], config: &CrcConfig<u16>) -> u16 {
  evaluate(polynomial.table(), crc, data, config)
}

/// CRC-32 over `data` with a registered polynomial.
///
/// # Example
///
/// ```
/// use crcgen::{CrcConfig, Crc32Polynomial, crc32};
///
/// let config = CrcConfig::default();
/// let head = crc32(Crc32Polynomial::Ieee, 0, b"1234", &config.with_xor_out(0));
/// let crc = crc32(Crc32Polynomial::Ieee, head, b"56789", &config);
/// assert_eq!(crc, 0xCBF4_3926);
/// ```
#[inline]
#[must_use]
pub fn crc32(polynomial: Crc32Polynomial, crc: u32, data: &[u8], config: &CrcConfig<u32>) -> u32 {
  evaluate(polynomial.table(), crc, data, config)
}

/// [`crc16`] for a polynomial given as a raw integer.
///
/// # Errors
///
/// [`CrcError::UnsupportedPolynomial`] if `polynomial` is not in
/// [`CRC16_REGISTRY`].
pub fn crc16_raw(polynomial: u16, crc: u16, data: &[u8], config: &CrcConfig<u16>) -> Result<u16, CrcError> {
  let table = CRC16_REGISTRY.resolve(polynomial)?;
  Ok(evaluate(table, crc, data, config))
}

/// [`crc32`] for a polynomial given as a raw integer.
///
/// # Errors
///
/// [`CrcError::UnsupportedPolynomial`] if `polynomial` is not in
/// [`CRC32_REGISTRY`].
pub fn crc32_raw(polynomial: u32, crc: u32, data: &[u8], config: &CrcConfig<u32>) -> Result<u32, CrcError> {
  let table = CRC32_REGISTRY.resolve(polynomial)?;
  Ok(evaluate(table, crc, data, config))
}
