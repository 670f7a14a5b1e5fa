// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawable primitives and the per-frame scene view.
//!
//! Artists own their geometry as [`Primitive`]s with `f32` buffers, rebuilt
//! wholesale by their setters ("regenerate and replace"). A frame hands the
//! render surface a [`Scene`]: the projection window, the pixel viewport,
//! and *borrowed* primitives — unchanged artists contribute their cached
//! buffers untouched, which is what keeps redraw incremental.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Rect;
use peniko::Color;
use smallvec::SmallVec;

/// Point-sprite glyph shapes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Marker {
    /// A filled circle.
    #[default]
    Circle,
    /// An axis-aligned square.
    Square,
    /// An upward triangle.
    Triangle,
}

/// A drawable handed to the render surface.
///
/// Positions are in transformed (post-scale) space; the renderer maps them
/// through the scene's projection window. Buffers are `f32`, matching GPU
/// vertex formats.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    /// A connected line strip.
    Polyline {
        /// Vertex positions, one `[x, y]` per point.
        positions: Vec<[f32; 2]>,
        /// Stroke color.
        color: Color,
        /// Stroke width in pixels.
        width: f64,
        /// Render order.
        z: i32,
    },
    /// Point sprites with per-point color and size.
    PointSprites {
        /// Sprite center positions.
        positions: Vec<[f32; 2]>,
        /// Per-point RGBA colors (same length as `positions`).
        colors: Vec<[f32; 4]>,
        /// Per-point sizes in pixels (same length as `positions`).
        sizes: Vec<f32>,
        /// Glyph shape.
        marker: Marker,
        /// Render order.
        z: i32,
    },
    /// An indexed triangle mesh with vertex colors.
    TriangleMesh {
        /// Vertex positions.
        positions: Vec<[f32; 2]>,
        /// Per-vertex RGBA colors (same length as `positions`).
        colors: Vec<[f32; 4]>,
        /// Triangle indices into `positions`.
        indices: Vec<u32>,
        /// Render order.
        z: i32,
    },
    /// A textured axis-aligned quad.
    TexturedQuad {
        /// Quad extent in transformed space.
        rect: Rect,
        /// Row-major RGBA texels.
        texels: Vec<[f32; 4]>,
        /// Texture width in texels.
        tex_width: usize,
        /// Texture height in texels.
        tex_height: usize,
        /// Render order.
        z: i32,
    },
    /// A filled axis-aligned rectangle.
    FilledRect {
        /// Extent in transformed space.
        rect: Rect,
        /// Fill color.
        color: Color,
        /// Render order.
        z: i32,
    },
}

impl Primitive {
    /// The render-order key. Renderers should sort by `z` with a stable
    /// tie-break on submission order.
    pub fn z(&self) -> i32 {
        match self {
            Self::Polyline { z, .. }
            | Self::PointSprites { z, .. }
            | Self::TriangleMesh { z, .. }
            | Self::TexturedQuad { z, .. }
            | Self::FilledRect { z, .. } => *z,
        }
    }
}

/// Horizontal anchoring for a tick label.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LabelAnchor {
    /// Anchor at the left edge.
    Start,
    /// Anchor at the horizontal center.
    #[default]
    Middle,
    /// Anchor at the right edge.
    End,
}

/// Vertical baseline for a tick label.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LabelBaseline {
    /// Top of the text box sits at the y position.
    Hanging,
    /// Vertical center sits at the y position.
    #[default]
    Middle,
    /// The alphabetic baseline sits at the y position.
    Alphabetic,
}

/// A tick line in margin-local pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickLine {
    /// Start point `(x, y)`.
    pub from: (f64, f64),
    /// End point `(x, y)`.
    pub to: (f64, f64),
    /// Stroke width in pixels.
    pub width: f64,
}

/// A tick label in margin-local pixel coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct TickLabel {
    /// Label text.
    pub text: String,
    /// Anchor position `(x, y)`.
    pub pos: (f64, f64),
    /// Horizontal anchoring.
    pub anchor: LabelAnchor,
    /// Vertical baseline.
    pub baseline: LabelBaseline,
}

/// One axis' guide output: tick lines and labels, plus the measured margin
/// thickness the guide needs (label width drives the left margin).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickLayout {
    /// Major and minor tick lines.
    pub lines: Vec<TickLine>,
    /// Major tick labels.
    pub labels: Vec<TickLabel>,
    /// Margin thickness in pixels along the axis normal.
    pub margin: f64,
}

/// Viewport size in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Viewport {
    /// Creates a viewport, clamping non-positive sizes to one pixel.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: width.max(1.0),
            height: height.max(1.0),
        }
    }
}

/// One frame's worth of drawing state, borrowed from the axes controller.
#[derive(Debug)]
pub struct Scene<'a> {
    /// The effective projection window in transformed space (pan applied).
    pub window: Rect,
    /// The pixel viewport.
    pub viewport: Viewport,
    /// Artist primitives in draw order (sort by [`Primitive::z`] to paint).
    ///
    /// Most plots hold a handful of artists, so the list is inline-allocated.
    pub primitives: SmallVec<[&'a Primitive; 8]>,
    /// Bottom-margin guide output.
    pub x_ticks: &'a TickLayout,
    /// Left-margin guide output.
    pub y_ticks: &'a TickLayout,
    /// The zoom selection rectangle, when a drag is in progress.
    ///
    /// In pixel coordinates (y down from the top-left), unlike `window`;
    /// draw it as a screen-space overlay, not through the projection.
    pub rubber_band: Option<Rect>,
}
