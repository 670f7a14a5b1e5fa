// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `libm`-backed float math for builds without `std`.
//!
//! `core` has no `f64::log10`, `f64::powf`, and friends, so scale and tick
//! code calls them through this crate-private trait instead.

/// The `f64` math methods the scale and tick code needs.
pub(crate) trait FloatExt {
    fn floor(self) -> Self;
    fn ceil(self) -> Self;
    fn round(self) -> Self;
    fn log10(self) -> Self;
    fn powf(self, n: Self) -> Self;
    fn powi(self, n: i32) -> Self;
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
impl FloatExt for f64 {
    fn floor(self) -> Self {
        libm::floor(self)
    }

    fn ceil(self) -> Self {
        libm::ceil(self)
    }

    fn round(self) -> Self {
        libm::round(self)
    }

    fn log10(self) -> Self {
        libm::log10(self)
    }

    fn powf(self, n: Self) -> Self {
        libm::pow(self, n)
    }

    // libm has no pow-by-integer entry point; square-and-multiply keeps the
    // decade math exact for small exponents.
    fn powi(self, n: i32) -> Self {
        let mut exp = i64::from(n);
        let mut base = self;
        if exp < 0 {
            base = 1.0 / base;
            exp = -exp;
        }

        let mut acc = 1.0;
        #[allow(clippy::cast_sign_loss, reason = "negative exponents were flipped above")]
        let mut e = exp as u64;
        while e != 0 {
            if (e & 1) != 0 {
                acc *= base;
            }
            base *= base;
            e >>= 1;
        }
        acc
    }
}

#[cfg(all(not(feature = "std"), not(feature = "libm")))]
compile_error!("vantage_core requires either the `std` or `libm` feature");
