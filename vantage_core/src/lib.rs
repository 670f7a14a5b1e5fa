// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core building blocks for the Vantage plotting engine.
//!
//! This crate is the leaf layer under `vantage_plot`:
//! - **Scale transforms** map data values into transformed (post-log) space.
//! - **Bounds** aggregate per-artist bounding boxes for autoscaling.
//! - **Normalization and colormaps** turn scalar arrays into vertex colors.
//! - **Primitives** are the drawables handed to a render surface, together
//!   with pixel-space tick/label guide output.
//!
//! Tick positioning and text measurement are modeled as collaborator traits
//! ([`TickCalculator`], [`TextMeasurer`]) with heuristic default
//! implementations; renderers and frontends can plug in real ones.

#![no_std]

extern crate alloc;

mod bounds;
mod colormap;
mod error;
#[cfg(not(feature = "std"))]
mod float;
mod grid;
mod measure;
mod norm;
mod primitive;
mod scale;
mod ticks;

pub use bounds::{Bounds, BoundsUnion, find_limits, fix_empty_range};
pub use colormap::{Colormap, GradientColormap};
pub use error::Error;
pub use grid::Grid;
pub use measure::{HeuristicTextMeasurer, TextMeasurer};
pub use norm::{NormMode, Normalizer};
pub use primitive::{
    LabelAnchor, LabelBaseline, Marker, Primitive, Scene, TickLabel, TickLine, TickLayout,
    Viewport,
};
pub use scale::ScaleMode;
pub use ticks::{NiceTickCalculator, Tick, TickCalculator, format_tick};
