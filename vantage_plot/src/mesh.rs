// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Filled quadrilateral mesh artist (pcolormesh).

extern crate alloc;

use alloc::sync::Arc;
use alloc::vec::Vec;

use vantage_core::{
    Bounds, Colormap, Error, GradientColormap, Grid, NormMode, Normalizer, Primitive, ScaleMode,
    find_limits, fix_empty_range,
};

use crate::artist::Artist;
use crate::z_order;

/// A colormapped cell mesh over a rectilinear grid.
///
/// For an `M x N` value grid, `x` holds the `N + 1` column edges and `y` the
/// `M + 1` row edges. Each cell becomes four vertices and two triangles, with
/// the cell's color repeated on all four vertices. Cells with a log-invalid
/// corner are dropped from the geometry entirely.
pub struct MeshArtist {
    x: Vec<f64>,
    y: Vec<f64>,
    c: Grid,
    norm: Normalizer,
    cmap: Arc<dyn Colormap>,
    xscale: ScaleMode,
    yscale: ScaleMode,
    z: i32,
    geometry: Vec<Primitive>,
}

impl core::fmt::Debug for MeshArtist {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MeshArtist")
            .field("rows", &self.c.rows())
            .field("cols", &self.c.cols())
            .field("norm", &self.norm)
            .field("xscale", &self.xscale)
            .field("yscale", &self.yscale)
            .field("z", &self.z)
            .finish_non_exhaustive()
    }
}

impl MeshArtist {
    /// Creates a mesh with explicit cell edges.
    ///
    /// `x.len()` must be `c.cols() + 1` and `y.len()` must be `c.rows() + 1`.
    pub fn new(
        x: impl Into<Vec<f64>>,
        y: impl Into<Vec<f64>>,
        c: Grid,
        xscale: ScaleMode,
        yscale: ScaleMode,
    ) -> Result<Self, Error> {
        let x = x.into();
        let y = y.into();
        if x.len() != c.cols() + 1 {
            return Err(Error::DimensionMismatch {
                what: "x edges",
                expected: c.cols() + 1,
                got: x.len(),
            });
        }
        if y.len() != c.rows() + 1 {
            return Err(Error::DimensionMismatch {
                what: "y edges",
                expected: c.rows() + 1,
                got: y.len(),
            });
        }
        let norm = Normalizer::from_data(c.values(), NormMode::Linear);
        let mut out = Self {
            x,
            y,
            c,
            norm,
            cmap: Arc::new(GradientColormap::viridis()),
            xscale,
            yscale,
            z: z_order::MESHES,
            geometry: Vec::new(),
        };
        out.regenerate();
        Ok(out)
    }

    /// Creates a mesh with unit cell edges `0..=N` / `0..=M`.
    pub fn from_grid(c: Grid, xscale: ScaleMode, yscale: ScaleMode) -> Result<Self, Error> {
        let x: Vec<f64> = (0..=c.cols()).map(|i| i as f64).collect();
        let y: Vec<f64> = (0..=c.rows()).map(|j| j as f64).collect();
        Self::new(x, y, c, xscale, yscale)
    }

    /// Replaces the value grid and recolors. The shape must not change.
    pub fn set_array(&mut self, c: Grid) -> Result<(), Error> {
        if c.rows() != self.c.rows() || c.cols() != self.c.cols() {
            return Err(Error::DimensionMismatch {
                what: "grid data",
                expected: self.c.len(),
                got: c.len(),
            });
        }
        self.norm = Normalizer::from_data(c.values(), self.norm.mode);
        self.c = c;
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

    /// The current normalizer.
    pub fn norm(&self) -> Normalizer {
        self.norm
    }

    /// The current colormap.
    pub fn cmap(&self) -> Arc<dyn Colormap> {
        Arc::clone(&self.cmap)
    }

    fn regenerate(&mut self) {
        let tx: Vec<f64> = self.x.iter().map(|&v| self.xscale.to_transformed(v)).collect();
        let ty: Vec<f64> = self.y.iter().map(|&v| self.yscale.to_transformed(v)).collect();

        let mut positions = Vec::new();
        let mut colors = Vec::new();
        let mut indices = Vec::new();
        for row in 0..self.c.rows() {
            let (y0, y1) = (ty[row], ty[row + 1]);
            if !y0.is_finite() || !y1.is_finite() {
                continue;
            }
            for col in 0..self.c.cols() {
                let (x0, x1) = (tx[col], tx[col + 1]);
                if !x0.is_finite() || !x1.is_finite() {
                    continue;
                }
                let color = self.cmap.color(self.norm.norm(self.c.get(row, col))).components;
                #[allow(
                    clippy::cast_possible_truncation,
                    reason = "vertex counts stay far below u32::MAX"
                )]
                let base = positions.len() as u32;
                // Corners: bottom-left, bottom-right, top-right, top-left.
                positions.push([x0 as f32, y0 as f32]);
                positions.push([x1 as f32, y0 as f32]);
                positions.push([x1 as f32, y1 as f32]);
                positions.push([x0 as f32, y1 as f32]);
                colors.extend_from_slice(&[color, color, color, color]);
                indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
            }
        }

        self.geometry = alloc::vec![Primitive::TriangleMesh {
            positions,
            colors,
            indices,
            z: self.z,
        }];
    }
}

impl Artist for MeshArtist {
    fn bounds(&self) -> Result<Bounds, Error> {
        // Cell edges are exact; no padding, unlike line/point artists.
        let (left, right) = fix_empty_range(find_limits(&self.x, self.xscale, 0.0)?);
        let (bottom, top) = fix_empty_range(find_limits(&self.y, self.yscale, 0.0)?);
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

    fn mesh_parts(p: &Primitive) -> (&Vec<[f32; 2]>, &Vec<[f32; 4]>, &Vec<u32>) {
        match p {
            Primitive::TriangleMesh {
                positions,
                colors,
                indices,
                ..
            } => (positions, colors, indices),
            other => panic!("expected a triangle mesh, got {other:?}"),
        }
    }

    #[test]
    fn rejects_mismatched_edges() {
        let c = Grid::new(2, 3, std::vec![0.0; 6]).unwrap();
        let err = MeshArtist::new(
            [0.0, 1.0, 2.0],
            [0.0, 1.0, 2.0],
            c,
            ScaleMode::Linear,
            ScaleMode::Linear,
        )
        .unwrap_err();
        assert_eq!(
            err,
            Error::DimensionMismatch {
                what: "x edges",
                expected: 4,
                got: 3,
            }
        );
    }

    #[test]
    fn builds_four_vertices_and_two_triangles_per_cell() {
        let c = Grid::new(2, 3, std::vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        let mesh = MeshArtist::from_grid(c, ScaleMode::Linear, ScaleMode::Linear).unwrap();
        let (positions, colors, indices) = mesh_parts(&mesh.primitives()[0]);
        assert_eq!(positions.len(), 6 * 4);
        assert_eq!(colors.len(), 6 * 4);
        assert_eq!(indices.len(), 6 * 6);
        // Cell colors repeat across their four vertices.
        assert_eq!(colors[0], colors[3]);
        // First cell spans [0,1]x[0,1].
        assert_eq!(positions[0], [0.0, 0.0]);
        assert_eq!(positions[2], [1.0, 1.0]);
    }

    #[test]
    fn exact_edges_with_no_padding() {
        let c = Grid::new(1, 2, std::vec![1.0, 2.0]).unwrap();
        let mesh = MeshArtist::new(
            [0.0, 0.5, 1.0],
            [10.0, 20.0],
            c,
            ScaleMode::Linear,
            ScaleMode::Linear,
        )
        .unwrap();
        let b = mesh.bounds().unwrap();
        assert_eq!((b.left, b.right), (Some(0.0), Some(1.0)));
        assert_eq!((b.bottom, b.top), (Some(10.0), Some(20.0)));
    }

    #[test]
    fn log_scale_drops_cells_with_invalid_corners() {
        let c = Grid::new(1, 2, std::vec![1.0, 2.0]).unwrap();
        let mut mesh = MeshArtist::new(
            [0.0, 1.0, 10.0],
            [1.0, 2.0],
            c,
            ScaleMode::Linear,
            ScaleMode::Linear,
        )
        .unwrap();
        mesh.set_xscale(ScaleMode::Log).unwrap();
        let (positions, _, indices) = mesh_parts(&mesh.primitives()[0]);
        // The first cell touches x=0 which is log-invalid.
        assert_eq!(positions.len(), 4);
        assert_eq!(indices.len(), 6);
    }
}
