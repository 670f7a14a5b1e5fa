// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scalar-to-[0, 1] normalization for colormapped artists.

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::scale::ScaleMode;

/// How scalar values are normalized before colormap lookup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum NormMode {
    /// `(v - vmin) / (vmax - vmin)`.
    #[default]
    Linear,
    /// `log10(v / vmin) / log10(vmax / vmin)`; non-positive input is NaN.
    Log,
}

/// Maps scalar data into [0, 1] for colormap lookup.
///
/// Out-of-range values clamp; NaN input (or non-positive input in log mode)
/// yields NaN, which colormaps render as fully transparent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Normalizer {
    /// Value mapped to 0.
    pub vmin: f64,
    /// Value mapped to 1.
    pub vmax: f64,
    /// Normalization mode.
    pub mode: NormMode,
}

impl Normalizer {
    /// Creates a normalizer with explicit bounds.
    pub fn new(vmin: f64, vmax: f64, mode: NormMode) -> Self {
        Self { vmin, vmax, mode }
    }

    /// Creates a normalizer spanning the finite min/max of `values`.
    ///
    /// Falls back to `[0, 1]` when no finite value exists.
    pub fn from_data(values: &[f64], mode: NormMode) -> Self {
        let mut vmin = f64::INFINITY;
        let mut vmax = f64::NEG_INFINITY;
        for &v in values {
            if v.is_finite() {
                vmin = vmin.min(v);
                vmax = vmax.max(v);
            }
        }
        if !vmin.is_finite() || !vmax.is_finite() {
            vmin = 0.0;
            vmax = 1.0;
        }
        Self { vmin, vmax, mode }
    }

    /// Normalizes one value into [0, 1].
    pub fn norm(&self, v: f64) -> f64 {
        match self.mode {
            NormMode::Linear => {
                let span = self.vmax - self.vmin;
                if span == 0.0 {
                    return 0.5;
                }
                ((v - self.vmin) / span).clamp(0.0, 1.0)
            }
            NormMode::Log => {
                if v <= 0.0 || self.vmin <= 0.0 || self.vmax <= 0.0 {
                    return f64::NAN;
                }
                let span = (self.vmax / self.vmin).log10();
                if span == 0.0 {
                    return 0.5;
                }
                ((v / self.vmin).log10() / span).clamp(0.0, 1.0)
            }
        }
    }

    /// The scale mode matching this normalizer, for colorbar tick generation.
    pub fn scale_mode(&self) -> ScaleMode {
        match self.mode {
            NormMode::Linear => ScaleMode::Linear,
            NormMode::Log => ScaleMode::Log,
        }
    }
}
