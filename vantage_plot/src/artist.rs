// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The artist interface shared by all plotted entities.

extern crate alloc;

use vantage_core::{Bounds, Error, Primitive, ScaleMode};

/// A non-owning handle to an artist in an axes' registry.
///
/// Artists are owned exclusively by the [`crate::Axes`] that created them;
/// callers keep an id, never a reference that could extend the axes'
/// lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArtistId(pub u64);

/// A single plotted entity: a line, scatter collection, mesh, image, or span.
///
/// An artist owns its raw data-space inputs and a cache of derived render
/// geometry. Geometry is regenerated wholesale whenever data, scale mode, or
/// color normalization changes — never patched incrementally — and the cache
/// is returned by reference so unchanged artists cost nothing per frame.
pub trait Artist {
    /// The artist's data-space bounding box under its current scale modes.
    ///
    /// Sides an artist does not constrain (infinite spans) are `None`.
    /// Errors with [`Error::NoFiniteData`] when the artist has no finite
    /// samples; the autoscale pass decides whether to propagate.
    fn bounds(&self) -> Result<Bounds, Error>;

    /// Switches the x-axis scale mode and regenerates geometry.
    fn set_xscale(&mut self, mode: ScaleMode) -> Result<(), Error>;

    /// Switches the y-axis scale mode and regenerates geometry.
    fn set_yscale(&mut self, mode: ScaleMode) -> Result<(), Error>;

    /// The cached render geometry in transformed space.
    fn primitives(&self) -> &[Primitive];
}
