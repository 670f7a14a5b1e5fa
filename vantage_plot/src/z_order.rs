// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Suggested z-order conventions for plot primitives.
//!
//! Artists carry an explicit z value for render ordering. The plot layer
//! assigns these consistently so callers don't have to hand-tune paint order
//! for every figure.
//!
//! These values are intentionally coarse. Renderers should sort by z with a
//! stable tie-break on submission order.

/// Plot background fill.
pub const BACKGROUND: i32 = -100;
/// Horizontal/vertical span fills drawn behind data.
pub const SPANS: i32 = -60;
/// Image quads.
pub const IMAGES: i32 = -40;
/// Filled mesh cells.
pub const MESHES: i32 = -20;
/// Stroked series lines.
pub const LINES: i32 = 0;
/// Scatter points drawn above lines.
pub const POINTS: i32 = 20;
/// The box-zoom rubber band, above everything.
pub const RUBBER_BAND: i32 = 100;
