//! CRC lookup table generation.
//!
//! A table maps every byte value to the register contribution of that byte
//! after eight shift/XOR steps. Two conventions are supported:
//!
//! | Convention | Shift | Polynomial used | Register seed |
//! |------------|-------|-----------------|---------------|
//! | [`Convention::Forward`] | right (LSB-first) | reflected at width `W` | `b` |
//! | [`Convention::Reflected`] | left (MSB-first) | as given | `d << (W - 8)` |
//!
//! The evaluator ([`crate::evaluate()`]) always shifts right, so a
//! [`Convention::Forward`] table is the one it consumes directly; it is the
//! form every registry table is baked in. [`Convention::Reflected`] tables
//! are the MSB-first tables used by left-shifting implementations. The two
//! are related entry-wise:
//!
//! ```text
//! forward[b] == reflect_W(reflected[reflect8(b)])
//! ```
//!
//! Generation is `const`, so registry tables are computed at compile time and
//! embedded in the binary. Runtime construction goes through [`CrcTable`] or
//! the width-erased [`build_table`].

// SAFETY: All array indexing in this module uses bounded loop indices (0..256)
// or a `u8` widened to `usize`. Clippy cannot prove this in const fn contexts.
#![allow(clippy::indexing_slicing)]

use core::fmt;

use crate::{
  error::CrcError,
  reflect::reflect_bits,
  width::{Register, Width},
};

/// Register convention a table is built for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Convention {
  /// LSB-first table built from the reflected polynomial.
  #[default]
  Forward,
  /// MSB-first table built from the polynomial as given.
  Reflected,
}

impl Convention {
  /// Map the `reflect` flag of the raw API onto a convention.
  #[inline]
  #[must_use]
  pub const fn from_reflect_flag(reflect: bool) -> Self {
    if reflect { Self::Reflected } else { Self::Forward }
  }

  /// Lowercase name, as used in log messages.
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Forward => "forward",
      Self::Reflected => "reflected",
    }
  }
}

impl fmt::Display for Convention {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Const generation
// ─────────────────────────────────────────────────────────────────────────────

/// Forward (LSB-first) table for `polynomial` at `width`.
///
/// Entries are masked to the width and zero-extended to `u32`.
#[must_use]
pub const fn forward_table(polynomial: u32, width: Width) -> [u32; 256] {
  let reflected = reflect_bits(polynomial, width.bits());
  let mask = width.mask();
  let mut table = [0u32; 256];

  let mut b = 0usize;
  while b < 256 {
    let mut v = b as u32;
    let mut i = 0;
    while i < 8 {
      v = if v & 1 != 0 { (v >> 1) ^ reflected } else { v >> 1 };
      i += 1;
    }
    table[b] = v & mask;
    b += 1;
  }

  table
}

/// Reflected (MSB-first) table for `polynomial` at `width`.
///
/// Entries are masked to the width and zero-extended to `u32`.
#[must_use]
pub const fn reflected_table(polynomial: u32, width: Width) -> [u32; 256] {
  let mask = width.mask();
  let top = width.top_bit();
  let shift = width.bits() - 8;
  let polynomial = polynomial & mask;
  let mut table = [0u32; 256];

  let mut d = 0usize;
  while d < 256 {
    let mut r = ((d as u32) << shift) & mask;
    let mut i = 0;
    while i < 8 {
      r = if r & top != 0 { ((r << 1) ^ polynomial) & mask } else { (r << 1) & mask };
      i += 1;
    }
    table[d] = r;
    d += 1;
  }

  table
}

/// Table for `polynomial` at `width` in either convention.
#[inline]
#[must_use]
pub const fn generate(polynomial: u32, width: Width, convention: Convention) -> [u32; 256] {
  match convention {
    Convention::Forward => forward_table(polynomial, width),
    Convention::Reflected => reflected_table(polynomial, width),
  }
}

/// 8-bit table.
#[must_use]
pub const fn table8(polynomial: u8, convention: Convention) -> [u8; 256] {
  let wide = generate(polynomial as u32, Width::Crc8, convention);
  let mut table = [0u8; 256];
  let mut i = 0;
  while i < 256 {
    table[i] = wide[i] as u8;
    i += 1;
  }
  table
}

/// 16-bit table.
#[must_use]
pub const fn table16(polynomial: u16, convention: Convention) -> [u16; 256] {
  let wide = generate(polynomial as u32, Width::Crc16, convention);
  let mut table = [0u16; 256];
  let mut i = 0;
  while i < 256 {
    table[i] = wide[i] as u16;
    i += 1;
  }
  table
}

/// 32-bit table.
#[inline]
#[must_use]
pub const fn table32(polynomial: u32, convention: Convention) -> [u32; 256] {
  generate(polynomial, Width::Crc32, convention)
}

/// Build a table for a width given in bytes.
///
/// `reflect = false` selects [`Convention::Forward`], `reflect = true`
/// selects [`Convention::Reflected`]. Entries are zero-extended to `u32`;
/// bits above the CRC width are always clear.
///
/// # Errors
///
/// [`CrcError::UnsupportedWidth`] unless `byte_width` is 1, 2 or 4.
///
/// # Example
///
/// ```
/// let table = crcgen::build_table(0x04C1_1DB7, 4, false)?;
/// assert_eq!(table[1], 0x7707_3096);
/// # Ok::<(), crcgen::CrcError>(())
/// ```
pub fn build_table(polynomial: u32, byte_width: usize, reflect: bool) -> Result<[u32; 256], CrcError> {
  let width = Width::from_byte_width(byte_width).inspect_err(|err| log::debug!("build_table rejected: {err}"))?;
  let convention = Convention::from_reflect_flag(reflect);
  log::trace!("building {convention} {width} table for polynomial {polynomial:#x}");
  Ok(generate(polynomial, width, convention))
}

// ─────────────────────────────────────────────────────────────────────────────
// Typed tables
// ─────────────────────────────────────────────────────────────────────────────

/// A 256-entry lookup table tagged with the polynomial and convention it was
/// built from.
#[derive(Clone, PartialEq, Eq)]
pub struct CrcTable<R: Register> {
  entries: [R; 256],
  polynomial: R,
  convention: Convention,
}

impl<R: Register> CrcTable<R> {
  /// Build the table for `polynomial` (normal, MSB-first form).
  #[must_use]
  pub fn build(polynomial: R, convention: Convention) -> Self {
    log::trace!("building {convention} {} table for polynomial {polynomial:#x}", R::WIDTH);
    Self { entries: R::build_table(polynomial, convention), polynomial, convention }
  }

  /// Polynomial this table was built from.
  #[inline]
  #[must_use]
  pub fn polynomial(&self) -> R {
    self.polynomial
  }

  /// Convention this table was built for.
  #[inline]
  #[must_use]
  pub fn convention(&self) -> Convention {
    self.convention
  }

  /// Entry for `byte`.
  #[inline]
  #[must_use]
  pub fn get(&self, byte: u8) -> R {
    self.entries[usize::from(byte)]
  }

  /// All 256 entries, indexed by byte value.
  #[inline]
  #[must_use]
  pub fn entries(&self) -> &[R; 256] {
    &self.entries
  }

  /// Render with `columns` entries per row and `separator` between entries.
  ///
  /// A `columns` of zero is treated as one.
  #[inline]
  #[must_use]
  pub fn render(&self, columns: usize, separator: char) -> TableDisplay<'_, R> {
    TableDisplay { entries: &self.entries, columns: columns.max(1), separator }
  }
}

impl<R: Register> AsRef<[R; 256]> for CrcTable<R> {
  #[inline]
  fn as_ref(&self) -> &[R; 256] {
    &self.entries
  }
}

impl<R: Register> fmt::Debug for CrcTable<R> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("CrcTable")
      .field("width", &R::WIDTH)
      .field("polynomial", &format_args!("{:#x}", self.polynomial))
      .field("convention", &self.convention)
      .finish_non_exhaustive()
  }
}

/// Renders as comma-separated rows using the width's default column count.
impl<R: Register> fmt::Display for CrcTable<R> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.render(R::WIDTH.default_columns(), ',').fmt(f)
  }
}

/// Text rendering of a table, as produced by [`CrcTable::render`].
///
/// Entries are written as `0x`-prefixed, zero-padded lowercase hex, each
/// followed by the separator and a space. Rows therefore end in a trailing
/// space before the newline, matching the `gencrctbl` output byte for byte.
/// The last entry has no separator.
#[derive(Clone, Copy, Debug)]
pub struct TableDisplay<'a, R: Register> {
  entries: &'a [R; 256],
  columns: usize,
  separator: char,
}

impl<'a, R: Register> TableDisplay<'a, R> {
  /// Render any table of register type `R`, including registry tables.
  #[inline]
  #[must_use]
  pub fn new(entries: &'a [R; 256], columns: usize, separator: char) -> Self {
    Self { entries, columns: columns.max(1), separator }
  }
}

impl<R: Register> fmt::Display for TableDisplay<'_, R> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let digits = R::WIDTH.bytes() * 2;
    for (i, entry) in self.entries.iter().enumerate() {
      if i != 0 {
        write!(f, "{} ", self.separator)?;
        if i % self.columns == 0 {
          writeln!(f)?;
        }
      }
      write!(f, "0x{entry:0digits$x}")?;
    }
    Ok(())
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::{format, string::ToString};

  use super::*;
  use crate::{
    reflect::reflect8,
    registry::{Crc32Polynomial, KnownPolynomial},
  };

  const POLYS: [(u32, Width); 8] = [
    (0x07, Width::Crc8),
    (0x31, Width::Crc8),
    (0x1021, Width::Crc16),
    (0xC867, Width::Crc16),
    (0x8005, Width::Crc16),
    (0x04C1_1DB7, Width::Crc32),
    (0x1EDC_6F41, Width::Crc32),
    (0x8141_41AB, Width::Crc32),
  ];

  #[test]
  fn crc32_forward_table_known_entries() {
    let table = forward_table(0x04C1_1DB7, Width::Crc32);
    assert_eq!(table[0], 0);
    assert_eq!(table[1], 0x7707_3096);
    assert_eq!(table[2], 0xEE0E_612C);
    assert_eq!(table[255], 0x2D02_EF8D);
  }

  #[test]
  fn crc16_reflected_table_known_entries() {
    let table = table16(0x1021, Convention::Reflected);
    assert_eq!(&table[..4], &[0x0000, 0x1021, 0x2042, 0x3063]);
  }

  #[test]
  fn crc8_forward_table_known_entries() {
    let table = table8(0x07, Convention::Forward);
    assert_eq!(&table[..4], &[0x00, 0x91, 0xE3, 0x72]);
  }

  #[test]
  fn entries_fit_width() {
    for (poly, width) in POLYS {
      for convention in [Convention::Forward, Convention::Reflected] {
        let table = generate(poly, width, convention);
        assert!(table.iter().all(|&e| e & !width.mask() == 0), "{poly:#x} {convention}");
      }
    }
  }

  #[test]
  fn conventions_are_bit_reflections_of_each_other() {
    for (poly, width) in POLYS {
      let forward = forward_table(poly, width);
      let reflected = reflected_table(poly, width);
      for b in 0..=255u8 {
        let mirrored = reflect_bits(reflected[usize::from(reflect8(b))], width.bits());
        assert_eq!(forward[usize::from(b)], mirrored, "poly {poly:#x} byte {b:#04x}");
      }
    }
  }

  #[test]
  fn generation_is_deterministic() {
    assert_eq!(table32(0xA833_982B, Convention::Forward), table32(0xA833_982B, Convention::Forward));
    assert_eq!(CrcTable::<u16>::build(0xC867, Convention::Reflected), CrcTable::build(0xC867, Convention::Reflected));
  }

  #[test]
  fn reflected_ignores_bits_above_width() {
    assert_eq!(reflected_table(0x1_1021, Width::Crc16), reflected_table(0x1021, Width::Crc16));
  }

  #[test]
  fn build_table_widens_entries() {
    let wide = build_table(0x8005, 2, false).unwrap();
    let narrow = table16(0x8005, Convention::Forward);
    for (w, n) in wide.iter().zip(narrow.iter()) {
      assert_eq!(*w, u32::from(*n));
    }
  }

  #[test]
  fn build_table_rejects_unsupported_width() {
    for bad in [0usize, 3, 8] {
      assert_eq!(build_table(0x1021, bad, false), Err(CrcError::UnsupportedWidth { byte_width: bad }));
    }
  }

  #[test]
  fn typed_table_accessors() {
    let table = CrcTable::<u32>::build(0x04C1_1DB7, Convention::Forward);
    assert_eq!(table.polynomial(), 0x04C1_1DB7);
    assert_eq!(table.convention(), Convention::Forward);
    assert_eq!(table.get(1), 0x7707_3096);
    assert_eq!(table.entries()[255], table.get(255));
  }

  #[test]
  fn render_rows() {
    let table = CrcTable::<u16>::build(0x1021, Convention::Reflected);
    let text = table.render(2, ',').to_string();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("0x0000, 0x1021, "));
    assert_eq!(lines.next(), Some("0x2042, 0x3063, "));
    assert_eq!(text.lines().count(), 128);
    assert!(text.ends_with("0x1ef0"));
  }

  #[test]
  fn display_uses_default_columns() {
    let table = CrcTable::<u32>::build(0x04C1_1DB7, Convention::Forward);
    let text = table.to_string();
    assert_eq!(text.lines().next(), Some("0x00000000, 0x77073096, 0xee0e612c, 0x990951ba, "));
    assert_eq!(text.lines().count(), 64);

    let table = CrcTable::<u8>::build(0x07, Convention::Forward);
    assert_eq!(table.to_string().lines().count(), 16);
  }

  #[test]
  fn render_custom_separator_and_zero_columns() {
    let table = CrcTable::<u8>::build(0x07, Convention::Forward);
    let text = table.render(0, ';').to_string();
    assert_eq!(text.lines().count(), 256);
    assert_eq!(text.lines().next(), Some("0x00; "));
  }

  #[test]
  fn render_borrowed_registry_table() {
    let registry = Crc32Polynomial::Ieee.table();
    let text = TableDisplay::new(registry, 4, ',').to_string();
    assert_eq!(text, CrcTable::<u32>::build(0x04C1_1DB7, Convention::Forward).to_string());
    assert!(text.starts_with("0x00000000, 0x77073096, 0xee0e612c, 0x990951ba, \n0x076dc419, "));
    assert!(text.ends_with("0x2d02ef8d"));

    let single = TableDisplay::new(registry, 0, ' ').to_string();
    assert_eq!(single.lines().count(), 256);
  }

  #[test]
  fn debug_is_compact() {
    let table = CrcTable::<u16>::build(0x8005, Convention::Forward);
    let dbg = format!("{table:?}");
    assert!(dbg.contains("0x8005"));
    assert!(dbg.contains("Forward"));
  }
}
