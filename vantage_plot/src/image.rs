// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Image artist (imshow).

extern crate alloc;

use alloc::sync::Arc;
use alloc::vec::Vec;

use kurbo::Rect;

use vantage_core::{
    Bounds, Colormap, Error, GradientColormap, Grid, NormMode, Normalizer, Primitive, ScaleMode,
};

use crate::artist::Artist;
use crate::z_order;

/// A colormapped raster drawn as a single textured quad.
///
/// The value grid is turned into an RGBA texel buffer through the normalizer
/// and colormap; the quad covers `extent` in data space. Images only support
/// linear axes (the texture cannot be warped per-texel), so a log scale
/// request is rejected.
pub struct ImageArtist {
    array: Grid,
    extent: Rect,
    norm: Normalizer,
    cmap: Arc<dyn Colormap>,
    z: i32,
    geometry: Vec<Primitive>,
}

impl core::fmt::Debug for ImageArtist {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ImageArtist")
            .field("rows", &self.array.rows())
            .field("cols", &self.array.cols())
            .field("extent", &self.extent)
            .field("norm", &self.norm)
            .field("z", &self.z)
            .finish_non_exhaustive()
    }
}

impl ImageArtist {
    /// Creates an image covering `extent`, or the pixel-index extent
    /// `[0, cols] x [0, rows]` when `extent` is `None`.
    pub fn new(array: Grid, extent: Option<Rect>) -> Self {
        let extent = extent.unwrap_or_else(|| {
            Rect::new(0.0, 0.0, array.cols() as f64, array.rows() as f64)
        });
        let norm = Normalizer::from_data(array.values(), NormMode::Linear);
        let mut out = Self {
            array,
            extent,
            norm,
            cmap: Arc::new(GradientColormap::viridis()),
            z: z_order::IMAGES,
            geometry: Vec::new(),
        };
        out.regenerate();
        out
    }

    /// The current extent rectangle.
    pub fn extent(&self) -> Rect {
        self.extent
    }

    /// Moves/resizes the quad without touching the texture.
    pub fn set_extent(&mut self, extent: Rect) {
        self.extent = extent;
        self.regenerate();
    }

    /// Replaces the value grid and rebuilds the texture.
    pub fn set_array(&mut self, array: Grid) {
        self.norm = Normalizer::from_data(array.values(), self.norm.mode);
        self.array = array;
        self.regenerate();
    }

    /// Replaces the colormap and rebuilds the texture.
    pub fn set_cmap(&mut self, cmap: Arc<dyn Colormap>) {
        self.cmap = cmap;
        self.regenerate();
    }

    /// Replaces the normalizer and rebuilds the texture.
    pub fn set_norm(&mut self, norm: Normalizer) {
        self.norm = norm;
        self.regenerate();
    }

    /// The current normalizer.
    pub fn norm(&self) -> Normalizer {
        self.norm
    }

    /// The current colormap.
    pub fn cmap(&self) -> Arc<dyn Colormap> {
        Arc::clone(&self.cmap)
    }

    fn regenerate(&mut self) {
        let texels: Vec<[f32; 4]> = self
            .array
            .values()
            .iter()
            .map(|&v| self.cmap.color(self.norm.norm(v)).components)
            .collect();
        self.geometry = alloc::vec![Primitive::TexturedQuad {
            rect: self.extent,
            texels,
            tex_width: self.array.cols(),
            tex_height: self.array.rows(),
            z: self.z,
        }];
    }
}

impl Artist for ImageArtist {
    fn bounds(&self) -> Result<Bounds, Error> {
        Ok(Bounds::new(
            self.extent.x0,
            self.extent.x1,
            self.extent.y0,
            self.extent.y1,
        ))
    }

    fn set_xscale(&mut self, mode: ScaleMode) -> Result<(), Error> {
        match mode {
            ScaleMode::Linear => Ok(()),
            ScaleMode::Log => Err(Error::LogScaleUnsupported("images")),
        }
    }

    fn set_yscale(&mut self, mode: ScaleMode) -> Result<(), Error> {
        match mode {
            ScaleMode::Linear => Ok(()),
            ScaleMode::Log => Err(Error::LogScaleUnsupported("images")),
        }
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
    fn default_extent_is_pixel_indices() {
        let img = ImageArtist::new(Grid::new(2, 3, std::vec![0.0; 6]).unwrap(), None);
        let b = img.bounds().unwrap();
        assert_eq!((b.left, b.right), (Some(0.0), Some(3.0)));
        assert_eq!((b.bottom, b.top), (Some(0.0), Some(2.0)));
    }

    #[test]
    fn rejects_log_scale() {
        let mut img = ImageArtist::new(Grid::new(1, 1, std::vec![0.5]).unwrap(), None);
        assert_eq!(
            img.set_xscale(ScaleMode::Log),
            Err(Error::LogScaleUnsupported("images"))
        );
        assert!(img.set_xscale(ScaleMode::Linear).is_ok());
    }

    #[test]
    fn texture_matches_grid_shape() {
        let img = ImageArtist::new(
            Grid::new(2, 3, std::vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]).unwrap(),
            Some(Rect::new(-1.0, -1.0, 1.0, 1.0)),
        );
        match &img.primitives()[0] {
            Primitive::TexturedQuad {
                rect,
                texels,
                tex_width,
                tex_height,
                ..
            } => {
                assert_eq!(*rect, Rect::new(-1.0, -1.0, 1.0, 1.0));
                assert_eq!(texels.len(), 6);
                assert_eq!((*tex_width, *tex_height), (3, 2));
            }
            other => panic!("expected a textured quad, got {other:?}"),
        }
    }
}
