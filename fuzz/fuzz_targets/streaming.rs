//! Fuzz target for the streaming CRC API.
//!
//! Arbitrary configurations and chunkings must agree with one-shot
//! evaluation, and resuming from any finalized prefix must continue the
//! stream.

#![no_main]

use arbitrary::Arbitrary;
use crcgen::{Checksum, Crc, Crc16Polynomial, Crc32Iscsi, Crc32Polynomial, CrcConfig, KnownPolynomial, crc16, crc32};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  /// Chunk sizes for streaming updates
  chunk_sizes: Vec<usize>,
  polynomial: u8,
  init: u32,
  xor_in: u32,
  xor_out: u32,
  reflect_in: bool,
  reflect_out: bool,
}

fuzz_target!(|input: Input| {
  test_streaming_crc32(&input);
  test_streaming_crc16(&input);
  test_named_hasher(&input.data, &input.chunk_sizes);
});

fn chunks<'a>(data: &'a [u8], chunk_sizes: &[usize]) -> Vec<&'a [u8]> {
  let mut out = Vec::new();
  let mut offset = 0;
  let mut chunk_idx = 0;

  while offset < data.len() {
    let chunk_size = if chunk_sizes.is_empty() {
      1
    } else {
      (chunk_sizes[chunk_idx % chunk_sizes.len()] % 256).max(1)
    };

    let end = (offset + chunk_size).min(data.len());
    out.push(&data[offset..end]);
    offset = end;
    chunk_idx += 1;
  }

  out
}

fn test_streaming_crc32(input: &Input) {
  let polynomial = Crc32Polynomial::ALL[usize::from(input.polynomial) % Crc32Polynomial::ALL.len()];
  let config = CrcConfig {
    init: input.init,
    xor_in: input.xor_in,
    xor_out: input.xor_out,
    reflect_in: input.reflect_in,
    reflect_out: input.reflect_out,
  };
  let expected = crc32(polynomial, 0, &input.data, &config);

  let mut hasher = Crc::with_polynomial(polynomial, config);
  for chunk in chunks(&input.data, &input.chunk_sizes) {
    // Restarting from the finalized value must not change the result.
    hasher = Crc::resume(polynomial.table(), config, hasher.finalize());
    hasher.update(chunk);
  }

  assert_eq!(hasher.finalize(), expected, "crc32 streaming mismatch for {polynomial:?} {config:?}");
}

fn test_streaming_crc16(input: &Input) {
  let polynomial = Crc16Polynomial::ALL[usize::from(input.polynomial) % Crc16Polynomial::ALL.len()];
  let config = CrcConfig {
    init: input.init as u16,
    xor_in: input.xor_in as u16,
    xor_out: input.xor_out as u16,
    reflect_in: input.reflect_in,
    reflect_out: input.reflect_out,
  };
  let expected = crc16(polynomial, 0, &input.data, &config);

  let mut hasher = Crc::with_polynomial(polynomial, config);
  for chunk in chunks(&input.data, &input.chunk_sizes) {
    hasher.update(chunk);
  }

  assert_eq!(hasher.finalize(), expected, "crc16 streaming mismatch for {polynomial:?} {config:?}");
}

fn test_named_hasher(data: &[u8], chunk_sizes: &[usize]) {
  let expected = Crc32Iscsi::checksum(data);

  let mut hasher = Crc32Iscsi::new();
  hasher.update_vectored(&chunks(data, chunk_sizes));

  assert_eq!(hasher.finalize(), expected, "crc32/iscsi streaming mismatch");
}
