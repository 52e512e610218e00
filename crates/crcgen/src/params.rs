//! CRC configuration and the catalog of standard variants.
//!
//! [`CrcConfig`] holds the per-call parameters of the evaluator. [`CrcParams`]
//! pairs a registered polynomial with a configuration and the published check
//! value over `"123456789"`, following the naming of the
//! [CRC Catalogue](https://reveng.sourceforge.io/crc-catalogue/).
//!
//! # Mapping catalog parameters
//!
//! Registry tables are LSB-first, so the evaluator natively computes
//! catalog variants with `refin = refout = true`. Those map to
//! `reflect_in = reflect_out = false` with `init` taken as-is.
//!
//! Catalog variants with `refin = refout = false` map to
//! `reflect_in = reflect_out = true`, and `init` must be given bit-reflected.
//! Every variant below uses an all-zero or all-one init, which reflects to
//! itself.

use crate::{
  evaluate::evaluate,
  registry::{Crc16Polynomial, Crc32Polynomial, KnownPolynomial},
  width::Register,
};

/// Standard check input.
pub const CHECK_INPUT: &[u8] = b"123456789";

/// Per-call evaluator configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CrcConfig<R> {
  /// Seed used when the incoming running value is zero.
  pub init: R,
  /// XORed into the register before any byte is folded in.
  pub xor_in: R,
  /// XORed into the result after output reflection.
  pub xor_out: R,
  /// Reflect each input byte before folding it in.
  pub reflect_in: bool,
  /// Reflect the full register before `xor_out`.
  pub reflect_out: bool,
}

impl<R: Register> CrcConfig<R> {
  /// All-ones seed, no input mask, all-ones output mask, no reflection.
  pub const DEFAULT: Self =
    Self { init: R::ONES, xor_in: R::ZERO, xor_out: R::ONES, reflect_in: false, reflect_out: false };

  /// Everything zero and no reflection: the bare table recurrence.
  pub const RAW: Self =
    Self { init: R::ZERO, xor_in: R::ZERO, xor_out: R::ZERO, reflect_in: false, reflect_out: false };

  #[must_use]
  pub fn with_init(self, init: R) -> Self {
    Self { init, ..self }
  }

  #[must_use]
  pub fn with_xor_in(self, xor_in: R) -> Self {
    Self { xor_in, ..self }
  }

  #[must_use]
  pub fn with_xor_out(self, xor_out: R) -> Self {
    Self { xor_out, ..self }
  }

  #[must_use]
  pub fn with_reflect_in(self, reflect_in: bool) -> Self {
    Self { reflect_in, ..self }
  }

  #[must_use]
  pub fn with_reflect_out(self, reflect_out: bool) -> Self {
    Self { reflect_out, ..self }
  }

  /// Set both reflection flags.
  #[must_use]
  pub fn with_reflection(self, reflect: bool) -> Self {
    Self { reflect_in: reflect, reflect_out: reflect, ..self }
  }

  /// Whether a running value survives being passed back into another call
  /// unchanged, so that chunked evaluation matches one-shot evaluation.
  ///
  /// Holds when the output mask is undone by the input mask and no output
  /// reflection is applied. With a non-zero `init`, an intermediate result of
  /// exactly zero still triggers reseeding.
  #[must_use]
  pub fn is_chainable(&self) -> bool {
    self.xor_in == self.xor_out && !self.reflect_out
  }
}

impl<R: Register> Default for CrcConfig<R> {
  #[inline]
  fn default() -> Self {
    Self::DEFAULT
  }
}

/// A named standard CRC variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CrcParams<P: KnownPolynomial> {
  /// Catalog name, e.g. `"CRC-32/ISO-HDLC"`.
  pub name: &'static str,
  pub polynomial: P,
  pub config: CrcConfig<P::Register>,
  /// Published checksum of [`CHECK_INPUT`].
  pub check: P::Register,
}

impl<P: KnownPolynomial> CrcParams<P> {
  /// One-shot checksum of `data`.
  #[inline]
  #[must_use]
  pub fn checksum(&self, data: &[u8]) -> P::Register {
    evaluate(self.polynomial.table(), <P::Register as Register>::ZERO, data, &self.config)
  }

  /// Whether this variant reproduces its published check value.
  #[must_use]
  pub fn check(&self) -> bool {
    self.checksum(CHECK_INPUT) == self.check
  }
}

impl CrcParams<Crc16Polynomial> {
  /// CRC-16/IBM-SDLC (X-25, HDLC FCS).
  pub const CRC16_IBM_SDLC: Self = Self {
    name: "CRC-16/IBM-SDLC",
    polynomial: Crc16Polynomial::Ccitt,
    config: CrcConfig { init: 0xFFFF, xor_in: 0, xor_out: 0xFFFF, reflect_in: false, reflect_out: false },
    check: 0x906E,
  };

  /// CRC-16/IBM-3740, also known as CCITT-FALSE.
  pub const CRC16_IBM_3740: Self = Self {
    name: "CRC-16/IBM-3740",
    polynomial: Crc16Polynomial::Ccitt,
    config: CrcConfig { init: 0xFFFF, xor_in: 0, xor_out: 0, reflect_in: true, reflect_out: true },
    check: 0x29B1,
  };

  /// CRC-16/KERMIT.
  pub const CRC16_KERMIT: Self = Self {
    name: "CRC-16/KERMIT",
    polynomial: Crc16Polynomial::Ccitt,
    config: CrcConfig { init: 0, xor_in: 0, xor_out: 0, reflect_in: false, reflect_out: false },
    check: 0x2189,
  };

  /// CRC-16/XMODEM.
  pub const CRC16_XMODEM: Self = Self {
    name: "CRC-16/XMODEM",
    polynomial: Crc16Polynomial::Ccitt,
    config: CrcConfig { init: 0, xor_in: 0, xor_out: 0, reflect_in: true, reflect_out: true },
    check: 0x31C3,
  };

  /// CRC-16/CDMA2000.
  pub const CRC16_CDMA2000: Self = Self {
    name: "CRC-16/CDMA2000",
    polynomial: Crc16Polynomial::Cdma2000,
    config: CrcConfig { init: 0xFFFF, xor_in: 0, xor_out: 0, reflect_in: true, reflect_out: true },
    check: 0x4C06,
  };

  /// CRC-16/ARC.
  pub const CRC16_ARC: Self = Self {
    name: "CRC-16/ARC",
    polynomial: Crc16Polynomial::Ibm,
    config: CrcConfig { init: 0, xor_in: 0, xor_out: 0, reflect_in: false, reflect_out: false },
    check: 0xBB3D,
  };

  /// CRC-16/MODBUS.
  pub const CRC16_MODBUS: Self = Self {
    name: "CRC-16/MODBUS",
    polynomial: Crc16Polynomial::Ibm,
    config: CrcConfig { init: 0xFFFF, xor_in: 0, xor_out: 0, reflect_in: false, reflect_out: false },
    check: 0x4B37,
  };

  /// CRC-16/USB.
  pub const CRC16_USB: Self = Self {
    name: "CRC-16/USB",
    polynomial: Crc16Polynomial::Ibm,
    config: CrcConfig { init: 0xFFFF, xor_in: 0, xor_out: 0xFFFF, reflect_in: false, reflect_out: false },
    check: 0xB4C8,
  };

  /// CRC-16/UMTS (BUYPASS).
  pub const CRC16_UMTS: Self = Self {
    name: "CRC-16/UMTS",
    polynomial: Crc16Polynomial::Ibm,
    config: CrcConfig { init: 0, xor_in: 0, xor_out: 0, reflect_in: true, reflect_out: true },
    check: 0xFEE8,
  };

  /// Every 16-bit catalog entry.
  pub const ALL: &'static [Self] = &[
    Self::CRC16_IBM_SDLC,
    Self::CRC16_IBM_3740,
    Self::CRC16_KERMIT,
    Self::CRC16_XMODEM,
    Self::CRC16_CDMA2000,
    Self::CRC16_ARC,
    Self::CRC16_MODBUS,
    Self::CRC16_USB,
    Self::CRC16_UMTS,
  ];
}

impl CrcParams<Crc32Polynomial> {
  /// CRC-32/ISO-HDLC: Ethernet, gzip, zip, PNG.
  pub const CRC32_ISO_HDLC: Self = Self {
    name: "CRC-32/ISO-HDLC",
    polynomial: Crc32Polynomial::Ieee,
    config: CrcConfig { init: !0, xor_in: 0, xor_out: !0, reflect_in: false, reflect_out: false },
    check: 0xCBF4_3926,
  };

  /// CRC-32/BZIP2.
  pub const CRC32_BZIP2: Self = Self {
    name: "CRC-32/BZIP2",
    polynomial: Crc32Polynomial::Ieee,
    config: CrcConfig { init: !0, xor_in: 0, xor_out: !0, reflect_in: true, reflect_out: true },
    check: 0xFC89_1918,
  };

  /// CRC-32/JAMCRC.
  pub const CRC32_JAMCRC: Self = Self {
    name: "CRC-32/JAMCRC",
    polynomial: Crc32Polynomial::Ieee,
    config: CrcConfig { init: !0, xor_in: 0, xor_out: 0, reflect_in: false, reflect_out: false },
    check: 0x340B_C6D9,
  };

  /// CRC-32/MPEG-2.
  pub const CRC32_MPEG2: Self = Self {
    name: "CRC-32/MPEG-2",
    polynomial: Crc32Polynomial::Ieee,
    config: CrcConfig { init: !0, xor_in: 0, xor_out: 0, reflect_in: true, reflect_out: true },
    check: 0x0376_E6E7,
  };

  /// CRC-32/CKSUM (POSIX), without the length suffix the `cksum` tool appends.
  pub const CRC32_CKSUM: Self = Self {
    name: "CRC-32/CKSUM",
    polynomial: Crc32Polynomial::Ieee,
    config: CrcConfig { init: 0, xor_in: 0, xor_out: !0, reflect_in: true, reflect_out: true },
    check: 0x765E_7680,
  };

  /// CRC-32/ISCSI (CRC-32C).
  pub const CRC32_ISCSI: Self = Self {
    name: "CRC-32/ISCSI",
    polynomial: Crc32Polynomial::Castagnoli,
    config: CrcConfig { init: !0, xor_in: 0, xor_out: !0, reflect_in: false, reflect_out: false },
    check: 0xE306_9283,
  };

  /// CRC-32/BASE91-D (CRC-32D).
  pub const CRC32_BASE91_D: Self = Self {
    name: "CRC-32/BASE91-D",
    polynomial: Crc32Polynomial::Base91D,
    config: CrcConfig { init: !0, xor_in: 0, xor_out: !0, reflect_in: false, reflect_out: false },
    check: 0x8731_5576,
  };

  /// CRC-32/AIXM (CRC-32Q).
  pub const CRC32_AIXM: Self = Self {
    name: "CRC-32/AIXM",
    polynomial: Crc32Polynomial::Aixm,
    config: CrcConfig { init: 0, xor_in: 0, xor_out: 0, reflect_in: true, reflect_out: true },
    check: 0x3010_BF7F,
  };

  /// Every 32-bit catalog entry.
  pub const ALL: &'static [Self] = &[
    Self::CRC32_ISO_HDLC,
    Self::CRC32_BZIP2,
    Self::CRC32_JAMCRC,
    Self::CRC32_MPEG2,
    Self::CRC32_CKSUM,
    Self::CRC32_ISCSI,
    Self::CRC32_BASE91_D,
    Self::CRC32_AIXM,
  ];
}
