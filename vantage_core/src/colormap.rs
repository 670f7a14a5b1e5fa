// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Colormap lookup for scalar-colored artists.
//!
//! Artists and colorbars consume colormaps through the [`Colormap`] trait;
//! [`GradientColormap`] is a small piecewise-linear implementation that
//! covers the default palette and single-color series. A frontend with a
//! richer palette library can plug its own implementation in.

extern crate alloc;

use alloc::vec::Vec;

use peniko::Color;

/// Maps a normalized value in [0, 1] to a color.
pub trait Colormap {
    /// Returns the color for `t` in [0, 1]. NaN input (an unnormalizable
    /// sample, e.g. a non-positive value under a log norm) must yield a
    /// fully transparent color.
    fn color(&self, t: f64) -> Color;
}

/// A piecewise-linear gradient over evenly spaced color stops.
#[derive(Clone, Debug)]
pub struct GradientColormap {
    stops: Vec<Color>,
}

impl GradientColormap {
    /// Creates a gradient from evenly spaced stops.
    ///
    /// An empty stop list behaves like a single black stop.
    pub fn new(stops: impl Into<Vec<Color>>) -> Self {
        Self {
            stops: stops.into(),
        }
    }

    /// A single-color "gradient", used for uncolormapped series.
    pub fn solid(color: Color) -> Self {
        Self {
            stops: alloc::vec![color],
        }
    }

    /// A compact viridis-like default palette.
    pub fn viridis() -> Self {
        Self::new([
            Color::from_rgb8(0x44, 0x01, 0x54),
            Color::from_rgb8(0x3b, 0x52, 0x8b),
            Color::from_rgb8(0x21, 0x91, 0x8c),
            Color::from_rgb8(0x5e, 0xc9, 0x62),
            Color::from_rgb8(0xfd, 0xe7, 0x25),
        ])
    }
}

impl Colormap for GradientColormap {
    fn color(&self, t: f64) -> Color {
        if t.is_nan() {
            return Color::TRANSPARENT;
        }
        match self.stops.len() {
            0 => Color::BLACK,
            1 => self.stops[0],
            n => {
                let t = t.clamp(0.0, 1.0);
                let pos = t * (n - 1) as f64;
                #[allow(
                    clippy::cast_possible_truncation,
                    reason = "pos is clamped to [0, n-1]"
                )]
                let i = (pos as usize).min(n - 2);
                let frac = (pos - i as f64) as f32;
                let a = self.stops[i].components;
                let b = self.stops[i + 1].components;
                Color::new([
                    a[0] + (b[0] - a[0]) * frac,
                    a[1] + (b[1] - a[1]) * frac,
                    a[2] + (b[2] - a[2]) * frac,
                    a[3] + (b[3] - a[3]) * frac,
                ])
            }
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn gradient_hits_endpoints() {
        let cmap = GradientColormap::new([Color::BLACK, Color::WHITE]);
        assert_eq!(cmap.color(0.0).components, Color::BLACK.components);
        assert_eq!(cmap.color(1.0).components, Color::WHITE.components);
        let mid = cmap.color(0.5).components;
        assert!((mid[0] - 0.5).abs() < 1e-6);
    }

    #[test]
    fn nan_is_transparent() {
        let cmap = GradientColormap::viridis();
        assert_eq!(cmap.color(f64::NAN).components[3], 0.0);
    }

    #[test]
    fn solid_ignores_t() {
        let cmap = GradientColormap::solid(Color::WHITE);
        assert_eq!(cmap.color(0.0).components, cmap.color(1.0).components);
    }
}
