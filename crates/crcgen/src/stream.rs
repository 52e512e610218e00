//! Streaming CRC state.
//!
//! [`Crc`] carries the table, the configuration and the raw register between
//! calls. The start of a stream is an explicit constructor rather than a
//! zero register, so a register that reaches zero mid-stream is just another
//! value and any chunking of the input gives the same result.
//!
//! Register lifecycle for a configuration `c`:
//!
//! ```text
//! new      register = c.init ^ c.xor_in
//! update   register = fold(register, data)
//! finalize (reflect_out ? reflect(register) : register) ^ c.xor_out
//! ```

use core::fmt;

use crate::{
  evaluate::fold,
  params::{CrcConfig, CrcParams},
  registry::KnownPolynomial,
  width::Register,
};

/// Incremental CRC over a borrowed table.
///
/// # Example
///
/// ```
/// use crcgen::{Crc, Crc32Polynomial, CrcParams};
///
/// let mut crc = Crc::from_params(&CrcParams::<Crc32Polynomial>::CRC32_ISCSI);
/// crc.update(b"1234");
/// crc.update(b"56789");
/// assert_eq!(crc.finalize(), 0xE306_9283);
/// ```
#[derive(Clone, Copy)]
pub struct Crc<'t, R: Register> {
  table: &'t [R; 256],
  config: CrcConfig<R>,
  register: R,
}

impl<'t, R: Register> Crc<'t, R> {
  /// Start a stream over `table`.
  #[inline]
  #[must_use]
  pub fn new(table: &'t [R; 256], config: CrcConfig<R>) -> Self {
    Self { table, config, register: Self::start(&config) }
  }

  /// Continue a stream whose finalized value so far is `crc`.
  ///
  /// Undoes `xor_out` and then the output reflection, so that
  /// `resume(t, c, a.finalize())` followed by `update(b)` finalizes to the
  /// CRC of `a || b`.
  #[must_use]
  pub fn resume(table: &'t [R; 256], config: CrcConfig<R>, crc: R) -> Self {
    let register = crc ^ config.xor_out;
    let register = if config.reflect_out { register.reflect() } else { register };
    Self { table, config, register }
  }

  #[inline]
  fn start(config: &CrcConfig<R>) -> R {
    config.init ^ config.xor_in
  }

  /// Feed `data` into the stream.
  #[inline]
  pub fn update(&mut self, data: &[u8]) {
    self.register = fold(self.table, self.register, data, self.config.reflect_in);
  }

  /// CRC of everything fed so far. Does not consume or alter the state.
  #[inline]
  #[must_use]
  pub fn finalize(&self) -> R {
    let crc = if self.config.reflect_out { self.register.reflect() } else { self.register };
    crc ^ self.config.xor_out
  }

  /// Restart the stream with the same table and configuration.
  #[inline]
  pub fn reset(&mut self) {
    self.register = Self::start(&self.config);
  }

  /// Raw register, before output reflection and `xor_out`.
  #[inline]
  #[must_use]
  pub fn register(&self) -> R {
    self.register
  }

  /// Configuration the stream was started with.
  #[inline]
  #[must_use]
  pub fn config(&self) -> &CrcConfig<R> {
    &self.config
  }

  /// Lookup table the stream folds with.
  #[inline]
  #[must_use]
  pub fn table(&self) -> &'t [R; 256] {
    self.table
  }
}

impl<R: Register> Crc<'static, R> {
  /// Start a stream for a registered polynomial.
  #[inline]
  #[must_use]
  pub fn with_polynomial<P: KnownPolynomial<Register = R>>(polynomial: P, config: CrcConfig<R>) -> Self {
    Self::new(polynomial.table(), config)
  }

  /// Start a stream for a catalog variant.
  #[inline]
  #[must_use]
  pub fn from_params<P: KnownPolynomial<Register = R>>(params: &CrcParams<P>) -> Self {
    Self::with_polynomial(params.polynomial, params.config)
  }
}

impl<R: Register> fmt::Debug for Crc<'_, R> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Crc")
      .field("config", &self.config)
      .field("register", &format_args!("{:#x}", self.register))
      .finish_non_exhaustive()
  }
}

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::format;

  use super::*;
  use crate::{
    evaluate::evaluate,
    params::CHECK_INPUT,
    registry::{Crc16Polynomial, Crc32Polynomial},
    tables::{Convention, CrcTable},
  };

  const DATA: &[u8] = b"The quick brown fox jumps over the lazy dog";

  #[test]
  fn catalog_check_values_streamed() {
    for params in CrcParams::<Crc16Polynomial>::ALL {
      let mut crc = Crc::from_params(params);
      for chunk in CHECK_INPUT.chunks(2) {
        crc.update(chunk);
      }
      assert_eq!(crc.finalize(), params.check, "{}", params.name);
    }
    for params in CrcParams::<Crc32Polynomial>::ALL {
      let mut crc = Crc::from_params(params);
      for chunk in CHECK_INPUT.chunks(4) {
        crc.update(chunk);
      }
      assert_eq!(crc.finalize(), params.check, "{}", params.name);
    }
  }

  #[test]
  fn every_split_matches_one_shot() {
    for params in CrcParams::<Crc32Polynomial>::ALL {
      let expected = params.checksum(DATA);
      for split in 0..=DATA.len() {
        let (a, b) = DATA.split_at(split);
        let mut crc = Crc::from_params(params);
        crc.update(a);
        crc.update(b);
        assert_eq!(crc.finalize(), expected, "{} split {split}", params.name);
      }
    }
  }

  #[test]
  fn zero_register_mid_stream_is_not_reseeded() {
    // CRC-16/ARC register is zero after its own check value is appended.
    let config = CrcConfig::<u16>::RAW;
    let mut crc = Crc::with_polynomial(Crc16Polynomial::Ibm, config);
    crc.update(CHECK_INPUT);
    crc.update(&[0x3D, 0xBB]);
    assert_eq!(crc.register(), 0);

    // With a non-zero init the stream keeps going from zero.
    let seeded = config.with_init(0xFFFF);
    let mut crc = Crc::with_polynomial(Crc16Polynomial::Ibm, seeded);
    let mut prefix = [0u8; 11];
    prefix[..9].copy_from_slice(CHECK_INPUT);
    let modbus = CrcParams::<Crc16Polynomial>::CRC16_MODBUS.checksum(CHECK_INPUT).to_le_bytes();
    prefix[9..].copy_from_slice(&modbus);
    crc.update(&prefix);
    assert_eq!(crc.register(), 0);
    crc.update(b"tail");

    let mut whole = [0u8; 15];
    whole[..11].copy_from_slice(&prefix);
    whole[11..].copy_from_slice(b"tail");
    assert_eq!(crc.finalize(), evaluate(Crc16Polynomial::Ibm.table(), 0, &whole, &seeded));
  }

  #[test]
  fn finalize_is_idempotent() {
    let mut crc = Crc::from_params(&CrcParams::<Crc32Polynomial>::CRC32_BZIP2);
    crc.update(DATA);
    let first = crc.finalize();
    assert_eq!(crc.finalize(), first);
    crc.update(b"");
    assert_eq!(crc.finalize(), first);
  }

  #[test]
  fn reset_restarts_the_stream() {
    let params = CrcParams::<Crc16Polynomial>::CRC16_IBM_3740;
    let mut crc = Crc::from_params(&params);
    crc.update(b"garbage");
    crc.reset();
    crc.update(CHECK_INPUT);
    assert_eq!(crc.finalize(), params.check);
  }

  #[test]
  fn empty_stream_matches_empty_evaluation() {
    for params in CrcParams::<Crc32Polynomial>::ALL {
      assert_eq!(Crc::from_params(params).finalize(), params.checksum(&[]), "{}", params.name);
    }
  }

  #[test]
  fn resume_continues_from_a_finalized_value() {
    for params in CrcParams::<Crc32Polynomial>::ALL {
      let (a, b) = DATA.split_at(17);
      let head = params.checksum(a);
      let mut crc = Crc::resume(params.polynomial.table(), params.config, head);
      crc.update(b);
      assert_eq!(crc.finalize(), params.checksum(DATA), "{}", params.name);
    }
    for params in CrcParams::<Crc16Polynomial>::ALL {
      let (a, b) = DATA.split_at(5);
      let head = params.checksum(a);
      let mut crc = Crc::resume(params.polynomial.table(), params.config, head);
      crc.update(b);
      assert_eq!(crc.finalize(), params.checksum(DATA), "{}", params.name);
    }
  }

  #[test]
  fn runtime_tables() {
    let table = CrcTable::<u8>::build(0x31, Convention::Forward);
    let mut crc = Crc::new(table.entries(), CrcConfig::RAW);
    crc.update(b"12345");
    crc.update(b"6789");
    assert_eq!(crc.finalize(), 0xA1);
    assert!(core::ptr::eq(crc.table(), table.entries()));
  }

  #[test]
  fn accessors_expose_the_configuration() {
    let params = CrcParams::<Crc16Polynomial>::CRC16_CDMA2000;
    let mut crc = Crc::from_params(&params);
    assert_eq!(*crc.config(), params.config);
    assert_eq!(crc.register(), params.config.init ^ params.config.xor_in);

    // A resumed stream keeps the configuration it was given.
    crc.update(CHECK_INPUT);
    let resumed = Crc::resume(crc.table(), *crc.config(), crc.finalize());
    assert_eq!(resumed.config(), crc.config());
    assert_eq!(resumed.finalize(), params.check);
  }

  #[test]
  fn debug_shows_register() {
    let crc = Crc::with_polynomial(Crc16Polynomial::Ccitt, CrcConfig::RAW.with_init(0xABCD));
    let rendered = format!("{crc:?}");
    assert!(rendered.contains("register: 0xabcd"), "{rendered}");
  }
}
