// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-axis scale transforms between data space and transformed space.
//!
//! "Transformed space" is data space after the axis mapping: the identity for
//! linear axes, `log10` for log axes. The camera's projection window, zoom
//! boxes, and pan offsets all live in transformed space; base limits and
//! artist data live in data space.

extern crate alloc;

use alloc::string::ToString;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::error::Error;

/// The axis mapping mode. Each axis of a plot carries its own mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScaleMode {
    /// Identity mapping.
    #[default]
    Linear,
    /// Base-10 logarithmic mapping. Only defined for strictly positive data;
    /// non-positive samples transform to NaN and must be filtered upstream.
    Log,
}

impl ScaleMode {
    /// Maps a data-space value into transformed space.
    pub fn to_transformed(self, v: f64) -> f64 {
        match self {
            Self::Linear => v,
            // log10 of a non-positive value is NaN; callers treat those
            // samples as "not contributing" rather than erroring.
            Self::Log => {
                if v > 0.0 {
                    v.log10()
                } else {
                    f64::NAN
                }
            }
        }
    }

    /// Maps a transformed-space value back into data space.
    pub fn to_data(self, v: f64) -> f64 {
        match self {
            Self::Linear => v,
            Self::Log => 10.0_f64.powf(v),
        }
    }

    /// Returns the opposite mode (used by double-click scale toggling).
    pub fn toggled(self) -> Self {
        match self {
            Self::Linear => Self::Log,
            Self::Log => Self::Linear,
        }
    }

    /// Returns the canonical name, `"linear"` or `"log"`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Log => "log",
        }
    }
}

impl core::str::FromStr for ScaleMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "linear" => Ok(Self::Linear),
            "log" => Ok(Self::Log),
            other => Err(Error::InvalidScale(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn log_roundtrips_positive_values() {
        for v in [1.0e-6, 0.5, 1.0, 10.0, 3.7e8] {
            let t = ScaleMode::Log.to_transformed(v);
            let back = ScaleMode::Log.to_data(t);
            assert!((back - v).abs() <= 1e-9 * v, "roundtrip failed for {v}");
        }
    }

    #[test]
    fn log_of_non_positive_is_nan() {
        assert!(ScaleMode::Log.to_transformed(0.0).is_nan());
        assert!(ScaleMode::Log.to_transformed(-3.0).is_nan());
    }

    #[test]
    fn linear_is_identity() {
        assert_eq!(ScaleMode::Linear.to_transformed(-2.5), -2.5);
        assert_eq!(ScaleMode::Linear.to_data(-2.5), -2.5);
    }

    #[test]
    fn parse_rejects_unknown_names() {
        assert_eq!("linear".parse::<ScaleMode>(), Ok(ScaleMode::Linear));
        assert_eq!("log".parse::<ScaleMode>(), Ok(ScaleMode::Log));
        assert!(matches!(
            "symlog".parse::<ScaleMode>(),
            Err(Error::InvalidScale(_))
        ));
    }
}
