// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interactive 2D axes for `vantage_core`.
//!
//! This crate is the orchestration layer of the Vantage plotting engine:
//! - **Artists** (lines, scatter points, meshes, images, spans) own geometry
//!   derived from their data and the current per-axis scale mode.
//! - The **camera** frames a projection window in transformed space, with a
//!   pan offset applied at render time.
//! - The **interaction machine** turns pointer events into box-zoom and pan
//!   gestures.
//! - The **axes controller** keeps limits, scales, artists, camera, and tick
//!   layouts mutually consistent, and assembles per-frame scenes.
//!
//! Everything is synchronous and single-threaded: a camera mutation always
//! completes its dependent tick recomputation before the call returns, so a
//! renderer never paints a half-updated frame.

#![no_std]

extern crate alloc;

mod artist;
mod axes;
#[cfg(test)]
mod axes_tests;
mod camera;
mod colorbar;
mod image;
mod interact;
mod line;
mod mesh;
mod points;
mod span;
pub mod z_order;

pub use artist::{Artist, ArtistId};
pub use axes::{Axes, PlotItem};
pub use camera::Camera;
pub use colorbar::{Colorbar, ColorbarLayout};
pub use image::ImageArtist;
pub use interact::{Action, Interaction, Tool};
pub use line::LineArtist;
pub use mesh::MeshArtist;
pub use points::{PointsArtist, SizeSpec};
pub use span::SpanArtist;
