// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scatter point artist.

extern crate alloc;

use alloc::sync::Arc;
use alloc::vec::Vec;

use peniko::Color;
use peniko::color::palette::css;

use vantage_core::{
    Bounds, Colormap, Error, GradientColormap, Marker, NormMode, Normalizer, Primitive, ScaleMode,
    find_limits, fix_empty_range,
};

use crate::artist::Artist;
use crate::z_order;

/// Per-point sizes: one value for all points, or one per sample.
#[derive(Clone, Debug, PartialEq)]
pub enum SizeSpec {
    /// All points share one pixel size.
    Uniform(f64),
    /// One pixel size per sample.
    PerPoint(Vec<f64>),
}

/// A scatter collection with optional scalar coloring.
///
/// When a scalar array is attached ([`PointsArtist::set_array`]), each point
/// is colored by normalizing its value and looking it up in the colormap;
/// otherwise every point uses the flat color.
pub struct PointsArtist {
    x: Vec<f64>,
    y: Vec<f64>,
    values: Option<Vec<f64>>,
    norm: Normalizer,
    cmap: Arc<dyn Colormap>,
    color: Color,
    sizes: SizeSpec,
    marker: Marker,
    xscale: ScaleMode,
    yscale: ScaleMode,
    z: i32,
    /// Fractional bbox padding, as on [`crate::LineArtist`].
    pub bbox_pad: f64,
    geometry: Vec<Primitive>,
}

impl core::fmt::Debug for PointsArtist {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PointsArtist")
            .field("len", &self.x.len())
            .field("colormapped", &self.values.is_some())
            .field("norm", &self.norm)
            .field("marker", &self.marker)
            .field("xscale", &self.xscale)
            .field("yscale", &self.yscale)
            .field("z", &self.z)
            .finish_non_exhaustive()
    }
}

impl PointsArtist {
    /// Creates a scatter collection. `x` and `y` must have equal length.
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
            values: None,
            norm: Normalizer::new(0.0, 1.0, NormMode::Linear),
            cmap: Arc::new(GradientColormap::viridis()),
            color: css::DARK_ORANGE.into(),
            sizes: SizeSpec::Uniform(3.0),
            marker: Marker::Circle,
            xscale,
            yscale,
            z: z_order::POINTS,
            bbox_pad: 0.03,
            geometry: Vec::new(),
        };
        out.regenerate();
        Ok(out)
    }

    /// Sets the flat color used when no scalar array is attached.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self.regenerate();
        self
    }

    /// Sets per-point or uniform sizes.
    ///
    /// A per-point vector must match the sample count.
    pub fn with_sizes(mut self, sizes: SizeSpec) -> Result<Self, Error> {
        if let SizeSpec::PerPoint(s) = &sizes
            && s.len() != self.x.len()
        {
            return Err(Error::DimensionMismatch {
                what: "sizes",
                expected: self.x.len(),
                got: s.len(),
            });
        }
        self.sizes = sizes;
        self.regenerate();
        Ok(self)
    }

    /// Sets the marker glyph.
    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.marker = marker;
        self.regenerate();
        self
    }

    /// Attaches a scalar array for colormapped points.
    ///
    /// The normalizer is rebuilt over the array's finite range, keeping the
    /// current normalization mode.
    pub fn set_array(&mut self, values: impl Into<Vec<f64>>) -> Result<(), Error> {
        let values = values.into();
        if values.len() != self.x.len() {
            return Err(Error::DimensionMismatch {
                what: "scalar array",
                expected: self.x.len(),
                got: values.len(),
            });
        }
        self.norm = Normalizer::from_data(&values, self.norm.mode);
        self.values = Some(values);
        self.regenerate();
        Ok(())
    }

    /// Replaces the colormap and recolors.
    pub fn set_cmap(&mut self, cmap: Arc<dyn Colormap>) {
        self.cmap = cmap;
        self.regenerate();
    }

    /// Replaces the normalizer and recolors.
    pub fn set_norm(&mut self, norm: Normalizer) {
        self.norm = norm;
        self.regenerate();
    }

    /// The current normalizer (colorbars read vmin/vmax/mode from here).
    pub fn norm(&self) -> Normalizer {
        self.norm
    }

    /// The current colormap.
    pub fn cmap(&self) -> Arc<dyn Colormap> {
        Arc::clone(&self.cmap)
    }

    fn regenerate(&mut self) {
        let mut positions = Vec::with_capacity(self.x.len());
        let mut colors = Vec::with_capacity(self.x.len());
        let mut sizes = Vec::with_capacity(self.x.len());
        for (i, (&x, &y)) in self.x.iter().zip(&self.y).enumerate() {
            let tx = self.xscale.to_transformed(x);
            let ty = self.yscale.to_transformed(y);
            if !tx.is_finite() || !ty.is_finite() {
                continue;
            }
            positions.push([tx as f32, ty as f32]);
            let color = match &self.values {
                Some(vals) => self.cmap.color(self.norm.norm(vals[i])),
                None => self.color,
            };
            colors.push(color.components);
            sizes.push(match &self.sizes {
                SizeSpec::Uniform(s) => *s as f32,
                SizeSpec::PerPoint(s) => s[i] as f32,
            });
        }
        self.geometry = alloc::vec![Primitive::PointSprites {
            positions,
            colors,
            sizes,
            marker: self.marker,
            z: self.z,
        }];
    }
}

impl Artist for PointsArtist {
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
