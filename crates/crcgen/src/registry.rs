//! Registry of polynomials with precomputed tables.
//!
//! Every registered table is a [`Convention::Forward`] table generated at
//! compile time, which is the form the right-shifting evaluator consumes.
//!
//! | Width | Polynomial | Variant |
//! |-------|------------|---------|
//! | 16 | 0x1021 | [`Crc16Polynomial::Ccitt`] |
//! | 16 | 0xC867 | [`Crc16Polynomial::Cdma2000`] |
//! | 16 | 0x8005 | [`Crc16Polynomial::Ibm`] |
//! | 32 | 0x04C11DB7 | [`Crc32Polynomial::Ieee`] |
//! | 32 | 0x1EDC6F41 | [`Crc32Polynomial::Castagnoli`] |
//! | 32 | 0xA833982B | [`Crc32Polynomial::Base91D`] |
//! | 32 | 0x814141AB | [`Crc32Polynomial::Aixm`] |
//!
//! Callers holding a raw polynomial either convert it with `TryFrom` or look
//! it up in [`CRC16_REGISTRY`] / [`CRC32_REGISTRY`]. A [`Registry`] can also
//! be built over caller-owned static tables; the evaluator only ever sees a
//! table.

use core::fmt;

use crate::{
  error::CrcError,
  tables::{Convention, table16, table32},
  width::Register,
};

// ─────────────────────────────────────────────────────────────────────────────
// Baked tables
// ─────────────────────────────────────────────────────────────────────────────

static CRC16_1021: [u16; 256] = table16(0x1021, Convention::Forward);
static CRC16_C867: [u16; 256] = table16(0xC867, Convention::Forward);
static CRC16_8005: [u16; 256] = table16(0x8005, Convention::Forward);

static CRC32_04C11DB7: [u32; 256] = table32(0x04C1_1DB7, Convention::Forward);
static CRC32_1EDC6F41: [u32; 256] = table32(0x1EDC_6F41, Convention::Forward);
static CRC32_A833982B: [u32; 256] = table32(0xA833_982B, Convention::Forward);
static CRC32_814141AB: [u32; 256] = table32(0x8141_41AB, Convention::Forward);

// ─────────────────────────────────────────────────────────────────────────────
// Registry
// ─────────────────────────────────────────────────────────────────────────────

/// One polynomial and its table.
#[derive(Clone, Copy)]
pub struct RegistryEntry<R: Register> {
  /// Polynomial in normal (MSB-first) form.
  pub polynomial: R,
  /// Forward table for `polynomial`.
  pub table: &'static [R; 256],
}

impl<R: Register> fmt::Debug for RegistryEntry<R> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("RegistryEntry").field("polynomial", &format_args!("{:#x}", self.polynomial)).finish_non_exhaustive()
  }
}

/// Polynomial -> table mapping over a fixed set of entries.
#[derive(Clone, Copy, Debug)]
pub struct Registry<R: Register> {
  entries: &'static [RegistryEntry<R>],
}

impl<R: Register> Registry<R> {
  /// Registry over `entries`. Later duplicates of a polynomial are shadowed.
  #[must_use]
  pub const fn new(entries: &'static [RegistryEntry<R>]) -> Self {
    Self { entries }
  }

  /// Table for `polynomial`, if registered.
  #[must_use]
  pub fn lookup(&self, polynomial: R) -> Option<&'static [R; 256]> {
    self.entries.iter().find(|entry| entry.polynomial == polynomial).map(|entry| entry.table)
  }

  /// Table for `polynomial`.
  ///
  /// # Errors
  ///
  /// [`CrcError::UnsupportedPolynomial`] if `polynomial` is not registered.
  pub fn resolve(&self, polynomial: R) -> Result<&'static [R; 256], CrcError> {
    self.lookup(polynomial).ok_or_else(|| unsupported(polynomial))
  }

  #[inline]
  #[must_use]
  pub fn contains(&self, polynomial: R) -> bool {
    self.lookup(polynomial).is_some()
  }

  /// Registered polynomials, in registration order.
  pub fn polynomials(&self) -> impl Iterator<Item = R> + '_ {
    self.entries.iter().map(|entry| entry.polynomial)
  }

  #[inline]
  #[must_use]
  pub const fn len(&self) -> usize {
    self.entries.len()
  }

  #[inline]
  #[must_use]
  pub const fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}

fn unsupported<R: Register>(polynomial: R) -> CrcError {
  let err = CrcError::UnsupportedPolynomial { polynomial: polynomial.to_u32(), width_bits: R::WIDTH.bits() };
  log::debug!("polynomial lookup failed: {err}");
  err
}

/// Registered 16-bit polynomials.
pub static CRC16_REGISTRY: Registry<u16> = Registry::new(&[
  RegistryEntry { polynomial: 0x1021, table: &CRC16_1021 },
  RegistryEntry { polynomial: 0xC867, table: &CRC16_C867 },
  RegistryEntry { polynomial: 0x8005, table: &CRC16_8005 },
]);

/// Registered 32-bit polynomials.
pub static CRC32_REGISTRY: Registry<u32> = Registry::new(&[
  RegistryEntry { polynomial: 0x04C1_1DB7, table: &CRC32_04C11DB7 },
  RegistryEntry { polynomial: 0x1EDC_6F41, table: &CRC32_1EDC6F41 },
  RegistryEntry { polynomial: 0xA833_982B, table: &CRC32_A833982B },
  RegistryEntry { polynomial: 0x8141_41AB, table: &CRC32_814141AB },
]);

// ─────────────────────────────────────────────────────────────────────────────
// Known polynomials
// ─────────────────────────────────────────────────────────────────────────────

/// A polynomial the engine ships a table for.
pub trait KnownPolynomial: Copy + Eq + fmt::Debug + Send + Sync + 'static {
  /// Register type of this polynomial's width.
  type Register: Register;

  /// Every variant, in registry order.
  const ALL: &'static [Self];

  /// Polynomial in normal (MSB-first) form.
  fn value(self) -> Self::Register;

  /// Precomputed forward table.
  fn table(self) -> &'static [Self::Register; 256];
}

/// Registered 16-bit polynomials.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum Crc16Polynomial {
  /// 0x1021: X.25, HDLC, XMODEM, Kermit, Bluetooth.
  Ccitt = 0x1021,
  /// 0xC867: CDMA2000.
  Cdma2000 = 0xC867,
  /// 0x8005: ARC, Modbus, USB.
  Ibm = 0x8005,
}

impl KnownPolynomial for Crc16Polynomial {
  type Register = u16;

  const ALL: &'static [Self] = &[Self::Ccitt, Self::Cdma2000, Self::Ibm];

  #[inline]
  fn value(self) -> u16 {
    self as u16
  }

  #[inline]
  fn table(self) -> &'static [u16; 256] {
    match self {
      Self::Ccitt => &CRC16_1021,
      Self::Cdma2000 => &CRC16_C867,
      Self::Ibm => &CRC16_8005,
    }
  }
}

impl TryFrom<u16> for Crc16Polynomial {
  type Error = CrcError;

  fn try_from(polynomial: u16) -> Result<Self, Self::Error> {
    Self::ALL.iter().copied().find(|p| p.value() == polynomial).ok_or_else(|| unsupported(polynomial))
  }
}

/// Registered 32-bit polynomials.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum Crc32Polynomial {
  /// 0x04C11DB7: Ethernet, gzip, zip, PNG, bzip2, MPEG-2.
  Ieee = 0x04C1_1DB7,
  /// 0x1EDC6F41: iSCSI, SCTP, ext4, Btrfs.
  Castagnoli = 0x1EDC_6F41,
  /// 0xA833982B: CRC-32D, BASE91-D.
  Base91D = 0xA833_982B,
  /// 0x814141AB: CRC-32Q, AIXM.
  Aixm = 0x8141_41AB,
}

impl KnownPolynomial for Crc32Polynomial {
  type Register = u32;

  const ALL: &'static [Self] = &[Self::Ieee, Self::Castagnoli, Self::Base91D, Self::Aixm];

  #[inline]
  fn value(self) -> u32 {
    self as u32
  }

  #[inline]
  fn table(self) -> &'static [u32; 256] {
    match self {
      Self::Ieee => &CRC32_04C11DB7,
      Self::Castagnoli => &CRC32_1EDC6F41,
      Self::Base91D => &CRC32_A833982B,
      Self::Aixm => &CRC32_814141AB,
    }
  }
}

impl TryFrom<u32> for Crc32Polynomial {
  type Error = CrcError;

  fn try_from(polynomial: u32) -> Result<Self, Self::Error> {
    Self::ALL.iter().copied().find(|p| p.value() == polynomial).ok_or_else(|| unsupported(polynomial))
  }
}
