// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Colorbar layout for colormapped artists.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Rect;
use peniko::Color;

use vantage_core::{
    Colormap, LabelAnchor, LabelBaseline, Normalizer, TextMeasurer, TickCalculator, TickLabel,
    TickLine,
};

const MAJOR_TICK_LEN: f64 = 6.0;
const MINOR_TICK_LEN: f64 = 3.0;
const LABEL_PAD: f64 = 4.0;

/// A vertical colorbar keyed to an artist's normalizer.
///
/// The bar is rendered as a stack of constant-color segments approximating
/// the gradient; ticks come from the same calculator the axes use, over the
/// normalizer's value range and scale mode.
#[derive(Clone, Copy, Debug)]
pub struct Colorbar {
    /// The value range and normalization mode the bar represents.
    pub norm: Normalizer,
    /// Bar width in pixels, excluding ticks and labels.
    pub width: f64,
    /// Bar height in pixels.
    pub height: f64,
    /// Number of gradient segments.
    pub segments: usize,
    /// Label font size in pixels.
    pub font_size: f64,
}

/// Pixel-space drawing output of [`Colorbar::layout`], with `(0, 0)` at the
/// bar's top-left corner and y growing downward.
#[derive(Clone, Debug, Default)]
pub struct ColorbarLayout {
    /// Constant-color gradient segments, top to bottom.
    pub cells: Vec<(Rect, Color)>,
    /// Outline of the whole bar.
    pub border: Rect,
    /// Major and minor tick lines on the right edge.
    pub lines: Vec<TickLine>,
    /// Major tick labels to the right of the ticks.
    pub labels: Vec<TickLabel>,
    /// Total width in pixels including ticks and the widest label.
    pub margin: f64,
}

impl Colorbar {
    /// Creates a colorbar for `norm` with default geometry.
    pub fn new(norm: Normalizer) -> Self {
        Self {
            norm,
            width: 16.0,
            height: 256.0,
            segments: 128,
            font_size: 12.0,
        }
    }

    /// Computes the drawing layout.
    pub fn layout(
        &self,
        cmap: &dyn Colormap,
        calc: &dyn TickCalculator,
        measurer: &dyn TextMeasurer,
    ) -> ColorbarLayout {
        let mut out = ColorbarLayout {
            border: Rect::new(0.0, 0.0, self.width, self.height),
            ..ColorbarLayout::default()
        };

        let segments = self.segments.max(1);
        for i in 0..segments {
            let t = (i as f64 + 0.5) / segments as f64;
            // Segment 0 maps to the top of the bar, which is vmax.
            let y0 = self.height * i as f64 / segments as f64;
            let y1 = self.height * (i + 1) as f64 / segments as f64;
            out.cells
                .push((Rect::new(0.0, y0, self.width, y1), cmap.color(1.0 - t)));
        }

        let scale = self.norm.scale_mode();
        let t_lo = scale.to_transformed(self.norm.vmin);
        let t_hi = scale.to_transformed(self.norm.vmax);
        let span = t_hi - t_lo;
        if !span.is_finite() || span <= 0.0 {
            out.margin = self.width;
            return out;
        }
        let normalized = |value: f64| -> Option<f64> {
            let n = (scale.to_transformed(value) - t_lo) / span;
            (n.is_finite() && (0.0..=1.0).contains(&n)).then_some(n)
        };

        let mut max_label_width = 0.0_f64;
        for tick in calc.major_ticks(self.norm.vmin, self.norm.vmax, scale) {
            if let Some(n) = normalized(tick.value) {
                let py = (1.0 - n) * self.height;
                out.lines.push(TickLine {
                    from: (self.width, py),
                    to: (self.width + MAJOR_TICK_LEN, py),
                    width: 1.0,
                });
                let (label_width, _) = measurer.measure(&tick.label, self.font_size);
                max_label_width = max_label_width.max(label_width);
                out.labels.push(TickLabel {
                    text: tick.label,
                    pos: (self.width + MAJOR_TICK_LEN + LABEL_PAD, py),
                    anchor: LabelAnchor::Start,
                    baseline: LabelBaseline::Middle,
                });
            }
        }
        for value in calc.minor_ticks(self.norm.vmin, self.norm.vmax, scale) {
            if let Some(n) = normalized(value) {
                let py = (1.0 - n) * self.height;
                out.lines.push(TickLine {
                    from: (self.width, py),
                    to: (self.width + MINOR_TICK_LEN, py),
                    width: 0.5,
                });
            }
        }

        out.margin = self.width + MAJOR_TICK_LEN + LABEL_PAD + max_label_width;
        out
    }
}
