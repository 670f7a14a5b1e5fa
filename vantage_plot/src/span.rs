// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Horizontal and vertical span artists (axhspan / axvspan).

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Rect;
use peniko::Color;
use peniko::color::palette::css;

use vantage_core::{Bounds, Error, Primitive, ScaleMode};

use crate::artist::Artist;
use crate::z_order;

/// Stand-in extent for the unbounded direction, in transformed space.
const UNBOUNDED: f64 = 1e8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Orientation {
    Horizontal,
    Vertical,
}

/// A shaded band across the full width or height of the axes.
///
/// A horizontal span covers `lo..hi` in y and is unbounded in x; a vertical
/// span covers `lo..hi` in x and is unbounded in y. The unbounded sides
/// report `None` from [`Artist::bounds`], so a span never drives autoscale
/// along its infinite direction.
#[derive(Clone, Debug)]
pub struct SpanArtist {
    orientation: Orientation,
    lo: f64,
    hi: f64,
    color: Color,
    xscale: ScaleMode,
    yscale: ScaleMode,
    z: i32,
    geometry: Vec<Primitive>,
}

impl SpanArtist {
    /// Creates a horizontal band covering `lo..hi` in y.
    pub fn h_span(lo: f64, hi: f64, xscale: ScaleMode, yscale: ScaleMode) -> Self {
        Self::build(Orientation::Horizontal, lo, hi, xscale, yscale)
    }

    /// Creates a vertical band covering `lo..hi` in x.
    pub fn v_span(lo: f64, hi: f64, xscale: ScaleMode, yscale: ScaleMode) -> Self {
        Self::build(Orientation::Vertical, lo, hi, xscale, yscale)
    }

    fn build(
        orientation: Orientation,
        lo: f64,
        hi: f64,
        xscale: ScaleMode,
        yscale: ScaleMode,
    ) -> Self {
        let mut out = Self {
            orientation,
            lo: lo.min(hi),
            hi: lo.max(hi),
            color: css::LIGHT_GRAY.into(),
            xscale,
            yscale,
            z: z_order::SPANS,
            geometry: Vec::new(),
        };
        out.regenerate();
        out
    }

    /// Sets the fill color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self.regenerate();
        self
    }

    /// The banded range, low then high.
    pub fn range(&self) -> (f64, f64) {
        (self.lo, self.hi)
    }

    /// Replaces the banded range and regenerates geometry.
    pub fn set_range(&mut self, lo: f64, hi: f64) {
        self.lo = lo.min(hi);
        self.hi = lo.max(hi);
        self.regenerate();
    }

    fn regenerate(&mut self) {
        self.geometry.clear();
        let scale = match self.orientation {
            Orientation::Horizontal => self.yscale,
            Orientation::Vertical => self.xscale,
        };
        let t_lo = scale.to_transformed(self.lo);
        let t_hi = scale.to_transformed(self.hi);
        if !t_lo.is_finite() || !t_hi.is_finite() {
            // A log-invalid edge leaves the band undrawable.
            return;
        }
        let rect = match self.orientation {
            Orientation::Horizontal => Rect::new(-UNBOUNDED, t_lo, UNBOUNDED, t_hi),
            Orientation::Vertical => Rect::new(t_lo, -UNBOUNDED, t_hi, UNBOUNDED),
        };
        self.geometry.push(Primitive::FilledRect {
            rect,
            color: self.color,
            z: self.z,
        });
    }
}

impl Artist for SpanArtist {
    fn bounds(&self) -> Result<Bounds, Error> {
        Ok(match self.orientation {
            Orientation::Horizontal => Bounds {
                left: None,
                right: None,
                bottom: Some(self.lo),
                top: Some(self.hi),
            },
            Orientation::Vertical => Bounds {
                left: Some(self.lo),
                right: Some(self.hi),
                bottom: None,
                top: None,
            },
        })
    }

    fn set_xscale(&mut self, mode: ScaleMode) -> Result<(), Error> {
        self.xscale = mode;
        self.regenerate();
        Ok(())
    }

    fn set_yscale(&mut self, mode: ScaleMode) -> Result<(), Error> {
        self.yscale = mode;
        self.regenerate();
        Ok(())
    }

    fn primitives(&self) -> &[Primitive] {
        &self.geometry
    }
}
