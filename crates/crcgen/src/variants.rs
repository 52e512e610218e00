//! Named hasher types for common catalog variants.

// ─────────────────────────────────────────────────────────────────────────────
// CRC-16
// ─────────────────────────────────────────────────────────────────────────────

define_crc_type! {
  /// CRC-16/IBM-SDLC, the X.25 / HDLC frame check sequence.
  ///
  /// # Properties
  ///
  /// - **Polynomial**: 0x1021
  /// - **Initial value**: 0xFFFF
  /// - **Final XOR**: 0xFFFF
  ///
  /// # Example
  ///
  /// ```rust
  /// use crcgen::{Checksum, Crc16IbmSdlc};
  ///
  /// assert_eq!(Crc16IbmSdlc::checksum(b"123456789"), 0x906E);
  /// ```
  pub struct Crc16IbmSdlc {
    polynomial: Crc16Polynomial,
    params: CRC16_IBM_SDLC,
  }
}

define_crc_type! {
  /// CRC-16/IBM-3740, also known as CCITT-FALSE.
  ///
  /// # Properties
  ///
  /// - **Polynomial**: 0x1021
  /// - **Initial value**: 0xFFFF
  /// - **Final XOR**: 0x0000
  /// - **Reflect input/output**: No (MSB-first)
  pub struct Crc16Ibm3740 {
    polynomial: Crc16Polynomial,
    params: CRC16_IBM_3740,
  }
}

define_crc_type! {
  /// CRC-16/CDMA2000.
  pub struct Crc16Cdma2000 {
    polynomial: Crc16Polynomial,
    params: CRC16_CDMA2000,
  }
}

define_crc_type! {
  /// CRC-16/ARC (IBM CRC-16, also used by LHA).
  ///
  /// # Properties
  ///
  /// - **Polynomial**: 0x8005
  /// - **Initial value**: 0x0000
  /// - **Final XOR**: 0x0000
  pub struct Crc16Arc {
    polynomial: Crc16Polynomial,
    params: CRC16_ARC,
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// CRC-32
// ─────────────────────────────────────────────────────────────────────────────

define_crc_type! {
  /// CRC-32/ISO-HDLC: Ethernet, gzip, zip, PNG.
  ///
  /// # Properties
  ///
  /// - **Polynomial**: 0x04C11DB7
  /// - **Initial value**: 0xFFFFFFFF
  /// - **Final XOR**: 0xFFFFFFFF
  ///
  /// # Example
  ///
  /// ```rust
  /// use crcgen::{Checksum, Crc32IsoHdlc};
  ///
  /// let mut hasher = Crc32IsoHdlc::new();
  /// hasher.update(b"1234");
  /// hasher.update(b"56789");
  /// assert_eq!(hasher.finalize(), 0xCBF4_3926);
  /// ```
  pub struct Crc32IsoHdlc {
    polynomial: Crc32Polynomial,
    params: CRC32_ISO_HDLC,
  }
}

define_crc_type! {
  /// CRC-32/ISCSI (CRC-32C): iSCSI, SCTP, ext4, Btrfs.
  ///
  /// # Properties
  ///
  /// - **Polynomial**: 0x1EDC6F41
  /// - **Initial value**: 0xFFFFFFFF
  /// - **Final XOR**: 0xFFFFFFFF
  pub struct Crc32Iscsi {
    polynomial: Crc32Polynomial,
    params: CRC32_ISCSI,
  }
}

define_crc_type! {
  /// CRC-32/BASE91-D (CRC-32D).
  pub struct Crc32Base91D {
    polynomial: Crc32Polynomial,
    params: CRC32_BASE91_D,
  }
}

define_crc_type! {
  /// CRC-32/AIXM (CRC-32Q), used by aeronautical data exchange.
  ///
  /// # Properties
  ///
  /// - **Polynomial**: 0x814141AB
  /// - **Initial value**: 0x00000000
  /// - **Final XOR**: 0x00000000
  /// - **Reflect input/output**: No (MSB-first)
  pub struct Crc32Aixm {
    polynomial: Crc32Polynomial,
    params: CRC32_AIXM,
  }
}

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::format;

  use super::*;
  use crate::{CHECK_INPUT, Checksum, Crc16Polynomial};

  const DATA: &[u8] = b"The quick brown fox jumps over the lazy dog";

  fn check_harness<C>(check: C::Output)
  where
    C: Checksum + core::fmt::Debug,
  {
    assert_eq!(C::checksum(CHECK_INPUT), check);

    // Streaming in every chunk size equals one-shot.
    let oneshot = C::checksum(DATA);
    for chunk_size in 1..=DATA.len() {
      let mut hasher = C::new();
      for chunk in DATA.chunks(chunk_size) {
        hasher.update(chunk);
      }
      assert_eq!(hasher.finalize(), oneshot, "chunk size {chunk_size}");
    }

    // Vectored updates equal concatenation.
    let (a, b) = DATA.split_at(10);
    assert_eq!(C::checksum_vectored(&[a, &[], b]), oneshot);

    // Resume continues a finalized prefix.
    let mut resumed = C::resume(C::checksum(a));
    resumed.update(b);
    assert_eq!(resumed.finalize(), oneshot);

    // Finalize is idempotent and reset restores the initial state.
    let mut hasher = C::default();
    hasher.update(DATA);
    assert_eq!(hasher.finalize(), hasher.finalize());
    hasher.reset();
    assert_eq!(hasher.finalize(), C::checksum(&[]));

    assert!(C::verify(DATA, oneshot));
  }

  #[test]
  fn crc16_variants() {
    check_harness::<Crc16IbmSdlc>(0x906E);
    check_harness::<Crc16Ibm3740>(0x29B1);
    check_harness::<Crc16Cdma2000>(0x4C06);
    check_harness::<Crc16Arc>(0xBB3D);
  }

  #[test]
  fn crc32_variants() {
    check_harness::<Crc32IsoHdlc>(0xCBF4_3926);
    check_harness::<Crc32Iscsi>(0xE306_9283);
    check_harness::<Crc32Base91D>(0x8731_5576);
    check_harness::<Crc32Aixm>(0x3010_BF7F);
  }

  #[test]
  fn output_sizes() {
    assert_eq!(Crc16Arc::OUTPUT_SIZE, 2);
    assert_eq!(Crc32Aixm::OUTPUT_SIZE, 4);
  }

  #[test]
  fn params_are_exposed() {
    assert_eq!(Crc32Iscsi::PARAMS.name, "CRC-32/ISCSI");
    assert_eq!(Crc16Cdma2000::PARAMS.polynomial, Crc16Polynomial::Cdma2000);
  }

  #[test]
  fn debug_shows_register() {
    let hasher = Crc32IsoHdlc::new();
    assert_eq!(format!("{hasher:?}"), "Crc32IsoHdlc { register: 0xffffffff }");
    assert_eq!(hasher.register(), !0);
  }
}
