//! Internal macros for named CRC variant types.

/// Generate a named hasher for one catalog variant.
///
/// This macro creates:
/// - A `Copy` struct wrapping a [`crate::Crc`] over the variant's table
/// - `PARAMS`, `resume()` and `register()` inherent items
/// - `Default`, `Debug` and [`traits::Checksum`] implementations
///
/// # Arguments
///
/// - `$name`: The type name (e.g., `Crc32IsoHdlc`)
/// - `$poly`: The polynomial enum (e.g., `Crc32Polynomial`)
/// - `$params`: The catalog constant (e.g., `CRC32_ISO_HDLC`)
macro_rules! define_crc_type {
  (
    $(#[$outer:meta])*
    $vis:vis struct $name:ident {
      polynomial: $poly:ident,
      params: $params:ident,
    }
  ) => {
    $(#[$outer])*
    #[derive(Clone, Copy)]
    $vis struct $name {
      inner: $crate::Crc<'static, <$crate::$poly as $crate::KnownPolynomial>::Register>,
    }

    impl $name {
      /// Catalog parameters of this variant.
      pub const PARAMS: $crate::CrcParams<$crate::$poly> = $crate::CrcParams::<$crate::$poly>::$params;

      /// Create a hasher that continues from a previously finalized CRC.
      #[inline]
      #[must_use]
      pub fn resume(crc: <$crate::$poly as $crate::KnownPolynomial>::Register) -> Self {
        let params = Self::PARAMS;
        Self { inner: $crate::Crc::resume($crate::KnownPolynomial::table(params.polynomial), params.config, crc) }
      }

      /// Raw register, before output reflection and `xor_out`.
      #[inline]
      #[must_use]
      pub fn register(&self) -> <$crate::$poly as $crate::KnownPolynomial>::Register {
        self.inner.register()
      }
    }

    impl Default for $name {
      #[inline]
      fn default() -> Self {
        <Self as $crate::Checksum>::new()
      }
    }

    impl core::fmt::Debug for $name {
      fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct(stringify!($name)).field("register", &format_args!("{:#x}", self.inner.register())).finish()
      }
    }

    impl $crate::Checksum for $name {
      const OUTPUT_SIZE: usize = core::mem::size_of::<<$crate::$poly as $crate::KnownPolynomial>::Register>();
      type Output = <$crate::$poly as $crate::KnownPolynomial>::Register;

      #[inline]
      fn new() -> Self {
        Self { inner: $crate::Crc::from_params(&Self::PARAMS) }
      }

      #[inline]
      fn resume(crc: Self::Output) -> Self {
        $name::resume(crc)
      }

      #[inline]
      fn update(&mut self, data: &[u8]) {
        self.inner.update(data);
      }

      #[inline]
      fn finalize(&self) -> Self::Output {
        self.inner.finalize()
      }

      #[inline]
      fn reset(&mut self) {
        self.inner.reset();
      }
    }
  };
}
