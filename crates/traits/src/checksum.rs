//! Non-cryptographic checksum trait.
//!
//! - **Streaming**: Incremental updates over any chunking of the input
//! - **Resumable**: A finalized value can seed a new hasher

use core::fmt::Debug;

/// Non-cryptographic checksum algorithm.
///
/// # Usage
///
/// ```rust
/// use traits::Checksum;
///
/// #[derive(Clone, Default)]
/// struct Sum(u8);
///
/// impl Checksum for Sum {
///   const OUTPUT_SIZE: usize = 1;
///   type Output = u8;
///
///   fn new() -> Self { Self(0) }
///   fn resume(sum: u8) -> Self { Self(sum) }
///   fn update(&mut self, data: &[u8]) {
///     self.0 = data.iter().fold(self.0, |acc, &b| acc.wrapping_add(b));
///   }
///   fn finalize(&self) -> u8 { self.0 }
///   fn reset(&mut self) { self.0 = 0; }
/// }
///
/// // One-shot
/// assert_eq!(Sum::checksum(&[1, 2, 3]), 6);
///
/// // Streaming
/// let mut hasher = Sum::new();
/// hasher.update(&[1, 2]);
/// hasher.update(&[3]);
/// assert_eq!(hasher.finalize(), 6);
/// ```
///
/// # Implementor Requirements
///
/// - `new()` must return the same state as `Default::default()`
/// - `finalize()` must be idempotent (calling multiple times returns same value)
/// - `reset()` must restore the hasher to its initial state
/// - Feeding the input in any chunking must finalize to the same value
pub trait Checksum: Clone + Default {
  /// Output size in bytes.
  ///
  /// - CRC-16: 2
  /// - CRC-32: 4
  const OUTPUT_SIZE: usize;

  /// The checksum output type.
  type Output: Copy + Eq + Debug + Default;

  /// Create a new hasher at the start of a stream.
  #[must_use]
  fn new() -> Self;

  /// Create a hasher that continues a stream whose finalized value so far
  /// is `checksum`.
  ///
  /// `resume(checksum(a))` followed by `update(b)` finalizes to
  /// `checksum(a || b)`.
  #[must_use]
  fn resume(checksum: Self::Output) -> Self;

  /// Update the hasher with additional data.
  fn update(&mut self, data: &[u8]);

  /// Update the hasher with multiple non-contiguous buffers.
  ///
  /// Semantics are identical to calling [`update`](Self::update) on each buffer
  /// in order.
  #[inline]
  fn update_vectored(&mut self, bufs: &[&[u8]]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Finalize and return the checksum.
  ///
  /// This method does not consume the hasher, allowing further updates
  /// if needed (though the result would include all data processed so far).
  #[must_use]
  fn finalize(&self) -> Self::Output;

  /// Reset the hasher to its initial state.
  fn reset(&mut self);

  /// Compute the checksum of data in one shot.
  #[inline]
  #[must_use]
  fn checksum(data: &[u8]) -> Self::Output {
    let mut h = Self::new();
    h.update(data);
    h.finalize()
  }

  /// Compute the checksum of multiple buffers in one shot.
  #[inline]
  #[must_use]
  fn checksum_vectored(bufs: &[&[u8]]) -> Self::Output {
    let mut h = Self::new();
    h.update_vectored(bufs);
    h.finalize()
  }

  /// Whether `data` checksums to `expected`.
  #[inline]
  #[must_use]
  fn verify(data: &[u8], expected: Self::Output) -> bool {
    Self::checksum(data) == expected
  }
}
