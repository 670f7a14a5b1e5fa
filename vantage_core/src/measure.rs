// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement seam for margin sizing.
//!
//! The left axis margin and the colorbar margin are sized from tick label
//! widths. Shaping and font handling stay out of this crate; callers that
//! render real text plug their own measurer in.

/// Measures label text for layout purposes.
pub trait TextMeasurer {
    /// Returns `(width, height)` in pixels for `text` at `font_size`.
    fn measure(&self, text: &str, font_size: f64) -> (f64, f64);
}

/// A rough character-count measurer: 0.6 em per glyph, 1 em tall.
///
/// Good enough to keep labels from overlapping their margin in headless use
/// and in tests; swap in a real font backend for production rendering.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, font_size: f64) -> (f64, f64) {
        let glyphs = text.chars().count() as f64;
        (0.6 * font_size * glyphs, font_size)
    }
}
