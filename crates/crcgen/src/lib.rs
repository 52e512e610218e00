//! Parameterized table-driven CRC-16 and CRC-32.
//!
//! The engine has four pieces:
//!
//! - **Bit reflection** ([`reflect8`], [`reflect16`], [`reflect32`], [`reflect_bits`])
//! - **Table generation** for 8/16/32-bit registers in the forward (LSB-first) or reflected (MSB-first) convention
//!   ([`CrcTable`], [`build_table`])
//! - **Evaluation** of a byte buffer against a table with a per-call [`CrcConfig`] ([`crc16`], [`crc32`],
//!   [`evaluate`])
//! - **A registry** of precomputed tables for the supported polynomials ([`Crc16Polynomial`], [`Crc32Polynomial`])
//!
//! # Supported Polynomials
//!
//! | Polynomial | Width | Named hashers | Use Cases |
//! |------------|-------|---------------|-----------|
//! | 0x1021 | 16 | [`Crc16IbmSdlc`], [`Crc16Ibm3740`] | X.25, HDLC, XMODEM, Kermit |
//! | 0xC867 | 16 | [`Crc16Cdma2000`] | CDMA2000 |
//! | 0x8005 | 16 | [`Crc16Arc`] | ARC, Modbus, USB |
//! | 0x04C11DB7 | 32 | [`Crc32IsoHdlc`] | Ethernet, gzip, zip, PNG |
//! | 0x1EDC6F41 | 32 | [`Crc32Iscsi`] | iSCSI, SCTP, ext4 |
//! | 0xA833982B | 32 | [`Crc32Base91D`] | CRC-32D |
//! | 0x814141AB | 32 | [`Crc32Aixm`] | Aeronautical data (CRC-32Q) |
//!
//! Further catalog variants over the same polynomials are available as
//! [`CrcParams`] constants.
//!
//! # Example
//!
//! ```rust
//! use crcgen::{Checksum, Crc32IsoHdlc, Crc32Polynomial, CrcConfig, crc32};
//!
//! // Free function with an explicit configuration
//! let config = CrcConfig::default();
//! let crc = crc32(Crc32Polynomial::Ieee, 0, b"123456789", &config);
//! assert_eq!(crc, 0xCBF4_3926);
//!
//! // Streaming through a named hasher
//! let mut hasher = Crc32IsoHdlc::new();
//! hasher.update(b"1234");
//! hasher.update(b"56789");
//! assert_eq!(hasher.finalize(), crc);
//! ```
//!
//! # Running values
//!
//! The free functions take the previous result as the running value and
//! treat a running value of zero as "start of stream" whenever `init` is
//! non-zero. [`Crc`] and the named hashers track the start of the stream
//! explicitly and have no such special case.
//!
//! # no_std Support
//!
//! This crate is `no_std` and does not allocate. Diagnostics go through the
//! [`log`](https://docs.rs/log) facade; no logger is installed.

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

// Internal macros must be declared before modules that use them.
#[macro_use]
mod macros;

mod error;
mod evaluate;
mod params;
pub mod reference;
mod reflect;
mod registry;
mod stream;
mod tables;
mod variants;
mod width;

pub use error::CrcError;
pub use evaluate::{crc16, crc16_raw, crc32, crc32_raw, evaluate};
pub use params::{CHECK_INPUT, CrcConfig, CrcParams};
pub use reflect::{reflect_bits, reflect8, reflect16, reflect32};
pub use registry::{
  CRC16_REGISTRY, CRC32_REGISTRY, Crc16Polynomial, Crc32Polynomial, KnownPolynomial, Registry, RegistryEntry,
};
pub use stream::Crc;
pub use tables::{Convention, CrcTable, TableDisplay, build_table, forward_table, generate, reflected_table};
// Re-export traits for convenience
pub use traits::Checksum;
pub use variants::{
  Crc16Arc, Crc16Cdma2000, Crc16Ibm3740, Crc16IbmSdlc, Crc32Aixm, Crc32Base91D, Crc32IsoHdlc, Crc32Iscsi,
};
pub use width::{Register, Width};
