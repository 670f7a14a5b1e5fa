// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Line series artist.

extern crate alloc;

use alloc::vec::Vec;

use peniko::Color;
use peniko::color::palette::css;

use vantage_core::{Bounds, Error, Marker, Primitive, ScaleMode, find_limits, fix_empty_range};

use crate::artist::Artist;
use crate::z_order;

/// A line series, optionally with point markers at each sample.
///
/// Geometry is a polyline in transformed space; samples whose transformed
/// position is not finite (non-positive data under a log axis) are filtered
/// out, splitting the line at the gap rather than bridging it.
#[derive(Clone, Debug)]
pub struct LineArtist {
    x: Vec<f64>,
    y: Vec<f64>,
    xscale: ScaleMode,
    yscale: ScaleMode,
    color: Color,
    line_width: f64,
    marker_size: f64,
    draw_line: bool,
    draw_markers: bool,
    z: i32,
    /// Fractional bbox padding applied on both axes during autoscale.
    ///
    /// Lines and points pad so markers at the data extremes aren't clipped;
    /// exact-extent artists (meshes, images) use zero. This is policy, not
    /// geometry, so it stays adjustable.
    pub bbox_pad: f64,
    geometry: Vec<Primitive>,
}

impl LineArtist {
    /// Creates a line series. `x` and `y` must have equal length.
    pub fn new(
        x: impl Into<Vec<f64>>,
        y: impl Into<Vec<f64>>,
        xscale: ScaleMode,
        yscale: ScaleMode,
    ) -> Result<Self, Error> {
        let x = x.into();
        let y = y.into();
        if y.len() != x.len() {
            return Err(Error::DimensionMismatch {
                what: "y data",
                expected: x.len(),
                got: y.len(),
            });
        }
        let mut out = Self {
            x,
            y,
            xscale,
            yscale,
            color: css::STEEL_BLUE.into(),
            line_width: 1.0,
            marker_size: 5.0,
            draw_line: true,
            draw_markers: false,
            z: z_order::LINES,
            bbox_pad: 0.03,
            geometry: Vec::new(),
        };
        out.regenerate();
        Ok(out)
    }

    /// Sets the stroke/marker color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self.regenerate();
        self
    }

    /// Sets the stroke width in pixels.
    pub fn with_line_width(mut self, width: f64) -> Self {
        self.line_width = width;
        self.regenerate();
        self
    }

    /// Enables or disables the connecting line (the `-` part of a format).
    pub fn with_line(mut self, draw: bool) -> Self {
        self.draw_line = draw;
        self.regenerate();
        self
    }

    /// Enables point markers of the given pixel size (the `o` part).
    pub fn with_markers(mut self, size: f64) -> Self {
        self.draw_markers = true;
        self.marker_size = size;
        self.regenerate();
        self
    }

    /// Sets the render-order z value.
    pub fn with_z(mut self, z: i32) -> Self {
        self.z = z;
        self.regenerate();
        self
    }

    /// The x data.
    pub fn xdata(&self) -> &[f64] {
        &self.x
    }

    /// The y data.
    pub fn ydata(&self) -> &[f64] {
        &self.y
    }

    /// Replaces the x data and regenerates geometry.
    pub fn set_xdata(&mut self, x: impl Into<Vec<f64>>) -> Result<(), Error> {
        let x = x.into();
        if x.len() != self.y.len() {
            return Err(Error::DimensionMismatch {
                what: "x data",
                expected: self.y.len(),
                got: x.len(),
            });
        }
        self.x = x;
        self.regenerate();
        Ok(())
    }

    /// Replaces the y data and regenerates geometry.
    pub fn set_ydata(&mut self, y: impl Into<Vec<f64>>) -> Result<(), Error> {
        let y = y.into();
        if y.len() != self.x.len() {
            return Err(Error::DimensionMismatch {
                what: "y data",
                expected: self.x.len(),
                got: y.len(),
            });
        }
        self.y = y;
        self.regenerate();
        Ok(())
    }

    /// Replaces both arrays and regenerates geometry.
    pub fn set_data(
        &mut self,
        x: impl Into<Vec<f64>>,
        y: impl Into<Vec<f64>>,
    ) -> Result<(), Error> {
        let x = x.into();
        let y = y.into();
        if y.len() != x.len() {
            return Err(Error::DimensionMismatch {
                what: "y data",
                expected: x.len(),
                got: y.len(),
            });
        }
        self.x = x;
        self.y = y;
        self.regenerate();
        Ok(())
    }

    fn regenerate(&mut self) {
        self.geometry.clear();

        if self.draw_line {
            // Split the strip at samples that don't transform to a finite
            // position so log-invalid data never reaches the renderer.
            let mut run: Vec<[f32; 2]> = Vec::new();
            for (&x, &y) in self.x.iter().zip(&self.y) {
                let tx = self.xscale.to_transformed(x);
                let ty = self.yscale.to_transformed(y);
                if tx.is_finite() && ty.is_finite() {
                    run.push([tx as f32, ty as f32]);
                } else if run.len() > 1 {
                    self.geometry.push(Primitive::Polyline {
                        positions: core::mem::take(&mut run),
                        color: self.color,
                        width: self.line_width,
                        z: self.z,
                    });
                } else {
                    run.clear();
                }
            }
            if run.len() > 1 {
                self.geometry.push(Primitive::Polyline {
                    positions: run,
                    color: self.color,
                    width: self.line_width,
                    z: self.z,
                });
            }
        }

        if self.draw_markers {
            let mut positions = Vec::new();
            for (&x, &y) in self.x.iter().zip(&self.y) {
                let tx = self.xscale.to_transformed(x);
                let ty = self.yscale.to_transformed(y);
                if tx.is_finite() && ty.is_finite() {
                    positions.push([tx as f32, ty as f32]);
                }
            }
            let n = positions.len();
            let c = self.color.components;
            self.geometry.push(Primitive::PointSprites {
                positions,
                colors: alloc::vec![c; n],
                sizes: alloc::vec![self.marker_size as f32; n],
                marker: Marker::Circle,
                z: self.z + 1,
            });
        }
    }
}

impl Artist for LineArtist {
    fn bounds(&self) -> Result<Bounds, Error> {
        let (left, right) = fix_empty_range(find_limits(&self.x, self.xscale, self.bbox_pad)?);
        let (bottom, top) = fix_empty_range(find_limits(&self.y, self.yscale, self.bbox_pad)?);
        Ok(Bounds::new(left, right, bottom, top))
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

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn rejects_mismatched_lengths() {
        let err = LineArtist::new(
            [0.0, 1.0, 2.0],
            [0.0, 1.0],
            ScaleMode::Linear,
            ScaleMode::Linear,
        )
        .unwrap_err();
        assert!(matches!(err, Error::DimensionMismatch { .. }));
    }

    #[test]
    fn bbox_pads_three_percent_by_default() {
        let line = LineArtist::new(
            [0.0, 3.0],
            [0.0, 9.0],
            ScaleMode::Linear,
            ScaleMode::Linear,
        )
        .unwrap();
        let b = line.bounds().unwrap();
        assert!((b.left.unwrap() + 0.09).abs() < 1e-12);
        assert!((b.right.unwrap() - 3.09).abs() < 1e-12);
        assert!((b.bottom.unwrap() + 0.27).abs() < 1e-12);
        assert!((b.top.unwrap() - 9.27).abs() < 1e-12);
    }

    #[test]
    fn log_scale_splits_line_at_non_positive_samples() {
        let mut line = LineArtist::new(
            [1.0, 10.0, -5.0, 100.0, 1000.0],
            [1.0, 1.0, 1.0, 1.0, 1.0],
            ScaleMode::Linear,
            ScaleMode::Linear,
        )
        .unwrap();
        line.set_xscale(ScaleMode::Log).unwrap();
        let prims = line.primitives();
        assert_eq!(prims.len(), 2, "expected the line to split at the gap");
        match &prims[0] {
            Primitive::Polyline { positions, .. } => {
                assert_eq!(positions.len(), 2);
                assert!((positions[0][0] - 0.0).abs() < 1e-6);
                assert!((positions[1][0] - 1.0).abs() < 1e-6);
            }
            other => panic!("expected a polyline, got {other:?}"),
        }
    }

    #[test]
    fn markers_share_positions_with_line() {
        let line = LineArtist::new(
            [0.0, 1.0],
            [2.0, 3.0],
            ScaleMode::Linear,
            ScaleMode::Linear,
        )
        .unwrap()
        .with_markers(4.0);
        let prims = line.primitives();
        assert_eq!(prims.len(), 2);
        assert!(matches!(prims[1], Primitive::PointSprites { .. }));
    }

    #[test]
    fn setters_regenerate_geometry() {
        let mut line = LineArtist::new(
            [0.0, 1.0],
            [0.0, 1.0],
            ScaleMode::Linear,
            ScaleMode::Linear,
        )
        .unwrap();
        line.set_ydata([5.0, 6.0]).unwrap();
        match &line.primitives()[0] {
            Primitive::Polyline { positions, .. } => {
                assert_eq!(positions[0][1], 5.0);
            }
            other => panic!("expected a polyline, got {other:?}"),
        }
    }
}
