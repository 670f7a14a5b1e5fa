// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Data-space bounding boxes and limit discovery for autoscaling.

extern crate alloc;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::error::Error;
use crate::scale::ScaleMode;

/// A data-space bounding box with optionally unbounded sides.
///
/// Infinite spans (axhspan/axvspan) report `None` on the axis they do not
/// constrain; those sides are absent from the autoscale reduction rather
/// than participating as infinity sentinels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    /// Minimum x, if this artist bounds x at all.
    pub left: Option<f64>,
    /// Maximum x.
    pub right: Option<f64>,
    /// Minimum y.
    pub bottom: Option<f64>,
    /// Maximum y.
    pub top: Option<f64>,
}

impl Bounds {
    /// A box bounded on both axes.
    pub fn new(left: f64, right: f64, bottom: f64, top: f64) -> Self {
        Self {
            left: Some(left),
            right: Some(right),
            bottom: Some(bottom),
            top: Some(top),
        }
    }
}

/// Running min/max reduction over artist bounds.
#[derive(Clone, Copy, Debug, Default)]
pub struct BoundsUnion {
    left: Option<f64>,
    right: Option<f64>,
    bottom: Option<f64>,
    top: Option<f64>,
}

fn min_opt(acc: Option<f64>, v: Option<f64>) -> Option<f64> {
    match (acc, v) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    }
}

fn max_opt(acc: Option<f64>, v: Option<f64>) -> Option<f64> {
    match (acc, v) {
        (Some(a), Some(b)) => Some(a.max(b)),
        (a, b) => a.or(b),
    }
}

impl BoundsUnion {
    /// Creates an empty union.
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one artist's bounds into the union.
    pub fn add(&mut self, b: Bounds) {
        self.left = min_opt(self.left, b.left);
        self.right = max_opt(self.right, b.right);
        self.bottom = min_opt(self.bottom, b.bottom);
        self.top = max_opt(self.top, b.top);
    }

    /// Returns the aggregated `(left, right)` if any artist bounded x.
    pub fn x_range(&self) -> Option<(f64, f64)> {
        Some((self.left?, self.right?))
    }

    /// Returns the aggregated `(bottom, top)` if any artist bounded y.
    pub fn y_range(&self) -> Option<(f64, f64)> {
        Some((self.bottom?, self.top?))
    }
}

/// Finds sensible data-space limits for an array under the given scale.
///
/// Non-finite samples are ignored. Under [`ScaleMode::Log`], non-positive
/// samples do not contribute to the minimum; if no sample is positive the
/// limits fall back to `[0.1, 1.0]`. `pad` expands the limits by the given
/// fraction: additively for linear, multiplicatively for log.
///
/// Returns [`Error::NoFiniteData`] when no finite sample exists at all —
/// a silently bogus box would corrupt the autoscale reduction.
pub fn find_limits(values: &[f64], scale: ScaleMode, pad: f64) -> Result<(f64, f64), Error> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut pos_min = f64::INFINITY;
    let mut any_finite = false;
    for &v in values {
        if !v.is_finite() {
            continue;
        }
        any_finite = true;
        min = min.min(v);
        max = max.max(v);
        if v > 0.0 {
            pos_min = pos_min.min(v);
        }
    }
    if !any_finite {
        return Err(Error::NoFiniteData);
    }

    let (mut lo, mut hi) = match scale {
        ScaleMode::Linear => (min, max),
        ScaleMode::Log => {
            if pos_min.is_finite() {
                (pos_min, max)
            } else {
                (0.1, 1.0)
            }
        }
    };

    if pad > 0.0 {
        match scale {
            ScaleMode::Linear => {
                let p = (hi - lo) * pad;
                lo -= p;
                hi += p;
            }
            ScaleMode::Log => {
                let p = (hi / lo).powf(pad);
                lo /= p;
                hi *= p;
            }
        }
    }
    Ok((lo, hi))
}

/// Expands a degenerate `lo == hi` range symmetrically.
///
/// A zero-width range would make the orthographic projection singular, so a
/// collapsed axis gets ±0.5 around zero, or ±half the magnitude otherwise.
pub fn fix_empty_range((lo, hi): (f64, f64)) -> (f64, f64) {
    if lo != hi {
        return (lo, hi);
    }
    let d = if lo == 0.0 { 0.5 } else { 0.5 * lo.abs() };
    (lo - d, hi + d)
}
