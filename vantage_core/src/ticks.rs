// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick position and label generation.
//!
//! The axes controller consumes ticks through the [`TickCalculator`] trait:
//! positions and label strings in data space, for whatever scale mode the
//! axis currently uses. [`NiceTickCalculator`] is the built-in calculator;
//! a frontend wrapping a richer locator can substitute its own.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::scale::ScaleMode;

/// A major tick: data-space position plus its label text.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    /// Position in data space.
    pub value: f64,
    /// Label text.
    pub label: String,
}

/// Computes tick positions and labels for a data-space interval.
///
/// `lo`/`hi` are the axis' effective data-space limits (already accounting
/// for zoom and pan). Implementations may return ticks outside `[lo, hi]`;
/// the axes controller clips by normalized position.
pub trait TickCalculator {
    /// Ordered major ticks with labels.
    fn major_ticks(&self, lo: f64, hi: f64, mode: ScaleMode) -> Vec<Tick>;

    /// Ordered minor tick positions (no labels).
    fn minor_ticks(&self, lo: f64, hi: f64, mode: ScaleMode) -> Vec<f64>;
}

/// The default calculator: "nice" decimal steps for linear axes, powers of
/// ten (with 2-9 mantissa minors) for log axes.
#[derive(Clone, Copy, Debug)]
pub struct NiceTickCalculator {
    /// Approximate number of major ticks per axis.
    pub target_count: usize,
}

impl Default for NiceTickCalculator {
    fn default() -> Self {
        Self { target_count: 8 }
    }
}

impl TickCalculator for NiceTickCalculator {
    fn major_ticks(&self, lo: f64, hi: f64, mode: ScaleMode) -> Vec<Tick> {
        match mode {
            ScaleMode::Linear => {
                let (positions, step) = nice_ticks(lo, hi, self.target_count);
                positions
                    .into_iter()
                    .map(|v| Tick {
                        value: v,
                        label: format_tick(v, step),
                    })
                    .collect()
            }
            ScaleMode::Log => log_decades(lo, hi)
                .into_iter()
                .map(|e| Tick {
                    value: 10.0_f64.powi(e),
                    label: format_decade(e),
                })
                .collect(),
        }
    }

    fn minor_ticks(&self, lo: f64, hi: f64, mode: ScaleMode) -> Vec<f64> {
        match mode {
            // Linear minor ticks are off by default, matching the usual
            // plotting-library behavior.
            ScaleMode::Linear => Vec::new(),
            ScaleMode::Log => {
                let mut out = Vec::new();
                for e in log_decades(lo.max(f64::MIN_POSITIVE) / 10.0, hi) {
                    let base = 10.0_f64.powi(e);
                    for m in 2..10 {
                        let v = base * m as f64;
                        if v >= lo && v <= hi {
                            out.push(v);
                        }
                    }
                }
                out
            }
        }
    }
}

fn nice_ticks(mut min: f64, mut max: f64, count: usize) -> (Vec<f64>, f64) {
    if !min.is_finite() || !max.is_finite() || count == 0 {
        return (Vec::new(), 0.0);
    }
    if min == max {
        return (alloc::vec![min], 0.0);
    }
    if min > max {
        core::mem::swap(&mut min, &mut max);
    }
    let step0 = (max - min) / count.max(1) as f64;
    let step = nice_step(step0);
    if step == 0.0 {
        return (alloc::vec![min, max], max - min);
    }

    let start = (min / step).ceil() * step;
    let stop = (max / step).floor() * step;

    let n_f = ((stop - start) / step).round();
    let n = if n_f.is_finite() && n_f >= 0.0 {
        let n_f = n_f.min(10_000.0);
        #[allow(
            clippy::cast_possible_truncation,
            reason = "guarded by finite/non-negative checks and capped at 10k"
        )]
        {
            n_f as u64
        }
    } else {
        return (Vec::new(), step);
    };
    ((0..=n).map(|i| start + step * i as f64).collect(), step)
}

fn nice_step(step: f64) -> f64 {
    if !step.is_finite() || step <= 0.0 {
        return 0.0;
    }
    let power = step.log10().floor();
    let base = 10.0_f64.powf(power);
    let error = step / base;
    let nice = if error >= 7.5 {
        10.0
    } else if error >= 3.5 {
        5.0
    } else if error >= 1.5 {
        2.0
    } else {
        1.0
    };
    nice * base
}

/// Integer decade exponents whose powers of ten fall within `[lo, hi]`.
fn log_decades(lo: f64, hi: f64) -> Vec<i32> {
    if lo <= 0.0 || !lo.is_finite() || !hi.is_finite() || lo > hi {
        return Vec::new();
    }
    let min_e = {
        let e = lo.log10().ceil().clamp(i32::MIN as f64, i32::MAX as f64);
        #[allow(clippy::cast_possible_truncation, reason = "clamped to the i32 range")]
        {
            e as i32
        }
    };
    let max_e = {
        let e = hi.log10().floor().clamp(i32::MIN as f64, i32::MAX as f64);
        #[allow(clippy::cast_possible_truncation, reason = "clamped to the i32 range")]
        {
            e as i32
        }
    };
    (min_e..=max_e).collect()
}

fn format_decade(e: i32) -> String {
    // Keep small decades readable; large magnitudes use exponent form.
    if (-4..=4).contains(&e) {
        format_tick(10.0_f64.powi(e), 0.0)
    } else {
        alloc::format!("1e{e}")
    }
}

/// Formats a tick value for display.
///
/// `step` is the tick spacing (best effort, 0 when unknown) and controls the
/// number of decimals so neighboring labels format consistently. Values with
/// magnitude outside `[1e-4, 1e4]` use exponent notation.
pub fn format_tick(v: f64, step: f64) -> String {
    if v == 0.0 {
        return String::from("0");
    }
    if !v.is_finite() {
        return alloc::format!("{v}");
    }
    let mag = v.abs();
    if mag >= 1.0e4 || mag < 1.0e-4 {
        return alloc::format!("{v:.1e}");
    }
    let decimals = if step > 0.0 && step.is_finite() {
        let d = -step.log10().floor();
        #[allow(
            clippy::cast_possible_truncation,
            reason = "clamped to a single-digit decimal count"
        )]
        {
            d.clamp(0.0, 9.0) as usize
        }
    } else {
        // No step information; trim trailing zeros from a short fixed form.
        let s = alloc::format!("{v:.4}");
        let s = s.trim_end_matches('0').trim_end_matches('.');
        return String::from(s);
    };
    alloc::format!("{v:.decimals$}")
}
