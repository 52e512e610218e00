//! Fuzz target for table generation.
//!
//! Every generated table must agree with the bit-at-a-time reference for
//! single bytes, and the two conventions must mirror each other.

#![no_main]

use arbitrary::Arbitrary;
use crcgen::{Convention, CrcError, build_table, generate, reference, reflect_bits, reflect8};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  polynomial: u32,
  byte_width: u8,
}

fuzz_target!(|input: Input| {
  let byte_width = usize::from(input.byte_width % 6);
  let (forward, reflected) = match (
    build_table(input.polynomial, byte_width, false),
    build_table(input.polynomial, byte_width, true),
  ) {
    (Ok(forward), Ok(reflected)) => (forward, reflected),
    (Err(err), Err(_)) => {
      assert_eq!(err, CrcError::UnsupportedWidth { byte_width });
      return;
    }
    _ => panic!("conventions disagree on width {byte_width}"),
  };

  let bits = u32::try_from(byte_width * 8).unwrap();
  let mask = if bits == 32 { u32::MAX } else { (1 << bits) - 1 };
  let polynomial = input.polynomial & mask;
  let width = crcgen::Width::from_byte_width(byte_width).unwrap();
  assert_eq!(forward, generate(polynomial, width, Convention::Forward));

  for b in 0..=255u8 {
    let i = usize::from(b);
    assert_eq!(forward[i], reference::lsb_first(reflect_bits(polynomial, bits), 0, &[b]), "forward[{b}]");
    assert_eq!(reflected[i], reference::msb_first(polynomial, bits, 0, &[b]), "reflected[{b}]");
    assert_eq!(forward[i], reflect_bits(reflected[usize::from(reflect8(b))], bits), "mirror[{b}]");
  }
});
