// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The axes controller: limits, scales, artists, camera, and ticks.

extern crate alloc;

use alloc::boxed::Box;
use alloc::vec::Vec;

use hashbrown::HashMap;
use kurbo::{Point, Rect};
use smallvec::SmallVec;

use vantage_core::{
    Bounds, BoundsUnion, Error, Grid, HeuristicTextMeasurer, LabelAnchor, LabelBaseline,
    NiceTickCalculator, Primitive, ScaleMode, Scene, TextMeasurer, TickCalculator, TickLabel,
    TickLayout, TickLine, Viewport, fix_empty_range,
};

use crate::artist::{Artist, ArtistId};
use crate::camera::Camera;
use crate::image::ImageArtist;
use crate::interact::{Action, Interaction, Tool};
use crate::line::LineArtist;
use crate::mesh::MeshArtist;
use crate::points::PointsArtist;
use crate::span::SpanArtist;

const FONT_SIZE: f64 = 12.0;
const MAJOR_TICK_LEN: f64 = 6.0;
const MINOR_TICK_LEN: f64 = 3.0;
const LABEL_PAD: f64 = 4.0;

/// Which axis an operation applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Axis {
    X,
    Y,
}

/// The concrete artist variants an axes can own.
///
/// Stored as a tagged enum so callers can get typed access back to the
/// artist they created; uniform operations go through [`Artist`].
#[derive(Debug)]
pub enum PlotItem {
    /// A line series.
    Line(LineArtist),
    /// A scatter collection.
    Points(PointsArtist),
    /// A quadrilateral mesh.
    Mesh(MeshArtist),
    /// A raster image.
    Image(ImageArtist),
    /// A horizontal or vertical span.
    Span(SpanArtist),
}

impl PlotItem {
    fn as_artist(&self) -> &dyn Artist {
        match self {
            Self::Line(a) => a,
            Self::Points(a) => a,
            Self::Mesh(a) => a,
            Self::Image(a) => a,
            Self::Span(a) => a,
        }
    }

    fn as_artist_mut(&mut self) -> &mut dyn Artist {
        match self {
            Self::Line(a) => a,
            Self::Points(a) => a,
            Self::Mesh(a) => a,
            Self::Image(a) => a,
            Self::Span(a) => a,
        }
    }
}

/// A 2D plot: data limits, per-axis scale modes, owned artists, the camera
/// framing them, and the interaction machine driving zoom and pan.
///
/// Every mutation is synchronous. Whenever the projection window changes,
/// the dependent tick layouts are rebuilt before the call returns, so a
/// [`Scene`] assembled afterwards is always internally consistent.
pub struct Axes {
    xlim: (f64, f64),
    ylim: (f64, f64),
    xscale: ScaleMode,
    yscale: ScaleMode,
    artists: HashMap<ArtistId, PlotItem>,
    draw_order: Vec<ArtistId>,
    next_id: u64,
    camera: Camera,
    interaction: Interaction,
    tick_calc: Box<dyn TickCalculator>,
    measurer: Box<dyn TextMeasurer>,
    x_ticks: TickLayout,
    y_ticks: TickLayout,
    rubber_band: Option<Rect>,
}

impl core::fmt::Debug for Axes {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Axes")
            .field("xlim", &self.xlim)
            .field("ylim", &self.ylim)
            .field("xscale", &self.xscale)
            .field("yscale", &self.yscale)
            .field("artists", &self.draw_order.len())
            .field("camera", &self.camera)
            .finish_non_exhaustive()
    }
}

impl Axes {
    /// Creates an empty axes over a pixel viewport, framing `[0, 1] x [0, 1]`.
    pub fn new(width: f64, height: f64) -> Self {
        let mut out = Self {
            xlim: (0.0, 1.0),
            ylim: (0.0, 1.0),
            xscale: ScaleMode::Linear,
            yscale: ScaleMode::Linear,
            artists: HashMap::new(),
            draw_order: Vec::new(),
            next_id: 0,
            camera: Camera::new(Rect::new(0.0, 0.0, 1.0, 1.0), Viewport::new(width, height)),
            interaction: Interaction::new(),
            tick_calc: Box::new(NiceTickCalculator::default()),
            measurer: Box::new(HeuristicTextMeasurer),
            x_ticks: TickLayout::default(),
            y_ticks: TickLayout::default(),
            rubber_band: None,
        };
        out.make_ticks();
        out
    }

    /// Replaces the tick calculator collaborator.
    pub fn set_tick_calculator(&mut self, calc: Box<dyn TickCalculator>) {
        self.tick_calc = calc;
        self.make_ticks();
    }

    /// Replaces the text measurer collaborator.
    pub fn set_text_measurer(&mut self, measurer: Box<dyn TextMeasurer>) {
        self.measurer = measurer;
        self.make_ticks();
    }

    // ---- plotting calls ----

    /// Adds a line series and autoscales.
    pub fn plot(
        &mut self,
        x: impl Into<Vec<f64>>,
        y: impl Into<Vec<f64>>,
    ) -> Result<ArtistId, Error> {
        let artist = LineArtist::new(x, y, self.xscale, self.yscale)?;
        Ok(self.add(PlotItem::Line(artist)))
    }

    /// Switches the x axis to log scale, then adds a line series.
    pub fn semilogx(
        &mut self,
        x: impl Into<Vec<f64>>,
        y: impl Into<Vec<f64>>,
    ) -> Result<ArtistId, Error> {
        self.set_xscale(ScaleMode::Log)?;
        self.plot(x, y)
    }

    /// Switches the y axis to log scale, then adds a line series.
    pub fn semilogy(
        &mut self,
        x: impl Into<Vec<f64>>,
        y: impl Into<Vec<f64>>,
    ) -> Result<ArtistId, Error> {
        self.set_yscale(ScaleMode::Log)?;
        self.plot(x, y)
    }

    /// Switches both axes to log scale, then adds a line series.
    pub fn loglog(
        &mut self,
        x: impl Into<Vec<f64>>,
        y: impl Into<Vec<f64>>,
    ) -> Result<ArtistId, Error> {
        self.set_xscale(ScaleMode::Log)?;
        self.set_yscale(ScaleMode::Log)?;
        self.plot(x, y)
    }

    /// Adds a scatter collection and autoscales.
    pub fn scatter(
        &mut self,
        x: impl Into<Vec<f64>>,
        y: impl Into<Vec<f64>>,
    ) -> Result<ArtistId, Error> {
        let artist = PointsArtist::new(x, y, self.xscale, self.yscale)?;
        Ok(self.add(PlotItem::Points(artist)))
    }

    /// Adds a raster image and autoscales.
    ///
    /// Errors when either axis is log scaled; images require linear axes.
    pub fn imshow(&mut self, array: Grid, extent: Option<Rect>) -> Result<ArtistId, Error> {
        if self.xscale == ScaleMode::Log || self.yscale == ScaleMode::Log {
            return Err(Error::LogScaleUnsupported("images"));
        }
        let artist = ImageArtist::new(array, extent);
        Ok(self.add(PlotItem::Image(artist)))
    }

    /// Adds a quadrilateral mesh with explicit cell edges and autoscales.
    pub fn pcolormesh(
        &mut self,
        x: impl Into<Vec<f64>>,
        y: impl Into<Vec<f64>>,
        c: Grid,
    ) -> Result<ArtistId, Error> {
        let artist = MeshArtist::new(x, y, c, self.xscale, self.yscale)?;
        Ok(self.add(PlotItem::Mesh(artist)))
    }

    /// Adds a quadrilateral mesh with unit cell edges and autoscales.
    pub fn pcolormesh_grid(&mut self, c: Grid) -> Result<ArtistId, Error> {
        let artist = MeshArtist::from_grid(c, self.xscale, self.yscale)?;
        Ok(self.add(PlotItem::Mesh(artist)))
    }

    /// Adds a horizontal band covering `lo..hi` in y and autoscales.
    pub fn axhspan(&mut self, lo: f64, hi: f64) -> ArtistId {
        self.add(PlotItem::Span(SpanArtist::h_span(
            lo,
            hi,
            self.xscale,
            self.yscale,
        )))
    }

    /// Adds a vertical band covering `lo..hi` in x and autoscales.
    pub fn axvspan(&mut self, lo: f64, hi: f64) -> ArtistId {
        self.add(PlotItem::Span(SpanArtist::v_span(
            lo,
            hi,
            self.xscale,
            self.yscale,
        )))
    }

    fn add(&mut self, item: PlotItem) -> ArtistId {
        let id = ArtistId(self.next_id);
        self.next_id += 1;
        self.artists.insert(id, item);
        self.draw_order.push(id);
        self.autoscale();
        id
    }

    /// Removes an artist. Limits are left as they are.
    pub fn remove(&mut self, id: ArtistId) -> bool {
        if self.artists.remove(&id).is_some() {
            self.draw_order.retain(|&other| other != id);
            true
        } else {
            false
        }
    }

    /// Typed access to an artist.
    pub fn item(&self, id: ArtistId) -> Option<&PlotItem> {
        self.artists.get(&id)
    }

    /// Typed mutable access to an artist. Setters on the artist regenerate
    /// its geometry; call [`Axes::autoscale`] afterwards to re-fit limits.
    pub fn item_mut(&mut self, id: ArtistId) -> Option<&mut PlotItem> {
        self.artists.get_mut(&id)
    }

    /// The number of owned artists.
    pub fn len(&self) -> usize {
        self.draw_order.len()
    }

    /// Whether the axes owns no artists.
    pub fn is_empty(&self) -> bool {
        self.draw_order.is_empty()
    }

    // ---- limits and scales ----

    /// The base x limits in data space, low then high.
    pub fn get_xlim(&self) -> (f64, f64) {
        self.xlim
    }

    /// The base y limits in data space, low then high.
    pub fn get_ylim(&self) -> (f64, f64) {
        self.ylim
    }

    /// The x limits currently on screen, accounting for zoom and pan.
    pub fn effective_xlim(&self) -> (f64, f64) {
        let w = self.camera.effective_window();
        (self.xscale.to_data(w.x0), self.xscale.to_data(w.x1))
    }

    /// The y limits currently on screen, accounting for zoom and pan.
    pub fn effective_ylim(&self) -> (f64, f64) {
        let w = self.camera.effective_window();
        (self.yscale.to_data(w.y0), self.yscale.to_data(w.y1))
    }

    /// Sets the base x limits and reframes that axis, dropping any zoom on
    /// it. A pan in flight is preserved but compensated, so exactly
    /// `lo..hi` lands on screen.
    ///
    /// Errors when a limit has no finite transformed position (non-positive
    /// under a log scale).
    pub fn set_xlim(&mut self, lo: f64, hi: f64) -> Result<(), Error> {
        self.set_lim(Axis::X, lo, hi)
    }

    /// Sets the base y limits and reframes that axis. See [`Axes::set_xlim`].
    pub fn set_ylim(&mut self, lo: f64, hi: f64) -> Result<(), Error> {
        self.set_lim(Axis::Y, lo, hi)
    }

    fn set_lim(&mut self, axis: Axis, lo: f64, hi: f64) -> Result<(), Error> {
        let lim = fix_empty_range((lo.min(hi), lo.max(hi)));
        let scale = match axis {
            Axis::X => self.xscale,
            Axis::Y => self.yscale,
        };
        let t0 = scale.to_transformed(lim.0);
        let t1 = scale.to_transformed(lim.1);
        if !t0.is_finite() || !t1.is_finite() {
            return Err(Error::InvalidScale(alloc::format!(
                "limits ({}, {}) have no finite position on a {} axis",
                lim.0,
                lim.1,
                scale.name(),
            )));
        }
        // The pan offset stays in place, so the stored window subtracts it
        // on this axis: the requested limits land on screen exactly.
        let pan = self.camera.pan();
        let mut window = self.camera.window();
        match axis {
            Axis::X => {
                self.xlim = lim;
                window.x0 = t0 - pan.0;
                window.x1 = t1 - pan.0;
            }
            Axis::Y => {
                self.ylim = lim;
                window.y0 = t0 - pan.1;
                window.y1 = t1 - pan.1;
            }
        }
        self.camera.set_window(window);
        self.make_ticks();
        Ok(())
    }

    /// The x-axis scale mode.
    pub fn xscale(&self) -> ScaleMode {
        self.xscale
    }

    /// The y-axis scale mode.
    pub fn yscale(&self) -> ScaleMode {
        self.yscale
    }

    /// Switches the x-axis scale mode.
    ///
    /// A no-op when the mode is unchanged. Otherwise every artist
    /// regenerates its geometry in the new scale and the axes autoscales,
    /// which also clears zoom and pan. Errors when an owned artist cannot
    /// render under the new scale (images under log).
    pub fn set_xscale(&mut self, mode: ScaleMode) -> Result<(), Error> {
        if mode == self.xscale {
            return Ok(());
        }
        self.check_scale_supported(mode)?;
        for id in &self.draw_order {
            if let Some(item) = self.artists.get_mut(id) {
                item.as_artist_mut().set_xscale(mode)?;
            }
        }
        self.xscale = mode;
        self.autoscale();
        Ok(())
    }

    /// Switches the y-axis scale mode. See [`Axes::set_xscale`].
    pub fn set_yscale(&mut self, mode: ScaleMode) -> Result<(), Error> {
        if mode == self.yscale {
            return Ok(());
        }
        self.check_scale_supported(mode)?;
        for id in &self.draw_order {
            if let Some(item) = self.artists.get_mut(id) {
                item.as_artist_mut().set_yscale(mode)?;
            }
        }
        self.yscale = mode;
        self.autoscale();
        Ok(())
    }

    /// Rejects a scale switch up front so no artist is left regenerated in
    /// a mode another artist then refuses.
    fn check_scale_supported(&self, mode: ScaleMode) -> Result<(), Error> {
        if mode == ScaleMode::Log
            && self.artists.values().any(|i| matches!(i, PlotItem::Image(_)))
        {
            return Err(Error::LogScaleUnsupported("images"));
        }
        Ok(())
    }

    /// Flips the x axis between linear and log.
    pub fn toggle_xscale(&mut self) -> Result<(), Error> {
        self.set_xscale(self.xscale.toggled())
    }

    /// Flips the y axis between linear and log.
    pub fn toggle_yscale(&mut self) -> Result<(), Error> {
        self.set_yscale(self.yscale.toggled())
    }

    // ---- camera paths ----

    /// Zooms into a transformed-space window.
    ///
    /// The window overrides the camera framing on both axes; base limits
    /// are untouched so [`Axes::reset`] restores the pre-zoom framing
    /// exactly. Degenerate windows are ignored.
    pub fn zoom(&mut self, window: Rect) {
        let window = window.abs();
        if window.width() <= 0.0
            || window.height() <= 0.0
            || !window.x0.is_finite()
            || !window.y0.is_finite()
            || !window.x1.is_finite()
            || !window.y1.is_finite()
        {
            return;
        }
        // The box was picked in pan-shifted coordinates; folding the pan
        // into the stored window keeps the picked region on screen.
        self.camera.set_window(window);
        self.camera.reset_pan();
        self.make_ticks();
    }

    /// Clears any zoom and pan, reframing the base limits.
    ///
    /// This is the canonical path from limits to window; `autoscale`
    /// always ends here.
    pub fn reset(&mut self) {
        self.camera.reset_pan();
        self.camera.set_window(Rect::new(
            self.xscale.to_transformed(self.xlim.0),
            self.yscale.to_transformed(self.ylim.0),
            self.xscale.to_transformed(self.xlim.1),
            self.yscale.to_transformed(self.ylim.1),
        ));
        self.make_ticks();
    }

    /// Refits the base limits to the union of artist bounding boxes, then
    /// resets the camera.
    ///
    /// Artists without finite data are skipped; unbounded box sides are
    /// absent from the union rather than infinite. An axis nothing
    /// constrains falls back to `[0, 1]` (linear) or `[1, 10]` (log).
    pub fn autoscale(&mut self) {
        let mut union = BoundsUnion::new();
        for id in &self.draw_order {
            if let Some(item) = self.artists.get(id)
                && let Ok(bounds) = item.as_artist().bounds()
            {
                union.add(bounds);
            }
        }
        self.xlim = fix_empty_range(union.x_range().unwrap_or(match self.xscale {
            ScaleMode::Linear => (0.0, 1.0),
            ScaleMode::Log => (1.0, 10.0),
        }));
        self.ylim = fix_empty_range(union.y_range().unwrap_or(match self.yscale {
            ScaleMode::Linear => (0.0, 1.0),
            ScaleMode::Log => (1.0, 10.0),
        }));
        self.reset();
    }

    /// Resizes the pixel viewport. The projection window is untouched, but
    /// tick pixel positions depend on the viewport and are rebuilt.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.camera.resize(width, height);
        self.make_ticks();
    }

    /// Converts a pixel position to data-space coordinates.
    pub fn pixel_to_data(&self, px: f64, py: f64) -> (f64, f64) {
        let p = self.camera.pixel_to_window(px, py);
        (self.xscale.to_data(p.x), self.yscale.to_data(p.y))
    }

    /// The camera, for renderers that need the raw projection state.
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    // ---- pointer entry points ----

    /// The active navigation tool.
    pub fn tool(&self) -> Tool {
        self.interaction.tool()
    }

    /// Selects the navigation tool, aborting any drag in flight.
    pub fn select_tool(&mut self, tool: Tool) {
        let action = self.interaction.select_tool(tool);
        self.apply(action);
    }

    /// Feeds a pointer-down at a pixel position.
    pub fn pointer_down(&mut self, px: f64, py: f64) {
        let action = self.interaction.pointer_down(Point::new(px, py));
        self.apply(action);
    }

    /// Feeds a pointer-move at a pixel position.
    pub fn pointer_move(&mut self, px: f64, py: f64) {
        let action = self.interaction.pointer_move(Point::new(px, py));
        self.apply(action);
    }

    /// Feeds a pointer-up at a pixel position.
    pub fn pointer_up(&mut self, px: f64, py: f64) {
        let action = self.interaction.pointer_up(Point::new(px, py));
        self.apply(action);
    }

    /// Aborts a drag (pointer capture loss). Any visible rubber band is
    /// hidden.
    pub fn cancel_drag(&mut self) {
        let action = self.interaction.cancel();
        self.apply(action);
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::RubberBand(rect) => self.rubber_band = Some(rect),
            Action::HideRubberBand => self.rubber_band = None,
            Action::ZoomTo(rect) => {
                self.rubber_band = None;
                let p0 = self.camera.pixel_to_window(rect.x0, rect.y0);
                let p1 = self.camera.pixel_to_window(rect.x1, rect.y1);
                self.zoom(Rect::from_points(p0, p1));
            }
            Action::PanBy(dx, dy) => {
                let (tdx, tdy) = self.camera.pixel_delta_to_window(dx, dy);
                // Dragging right moves the content right, so the window
                // shifts the other way.
                self.camera.pan_by(-tdx, -tdy);
                self.make_ticks();
            }
        }
    }

    // ---- ticks and scene assembly ----

    fn make_ticks(&mut self) {
        self.x_ticks = self.make_axis_ticks(Axis::X);
        self.y_ticks = self.make_axis_ticks(Axis::Y);
    }

    fn make_axis_ticks(&self, axis: Axis) -> TickLayout {
        let w = self.camera.effective_window();
        let viewport = self.camera.viewport();
        let (scale, t_lo, t_hi) = match axis {
            Axis::X => (self.xscale, w.x0, w.x1),
            Axis::Y => (self.yscale, w.y0, w.y1),
        };
        let span = t_hi - t_lo;
        if !span.is_finite() || span <= 0.0 {
            return TickLayout::default();
        }
        let lo = scale.to_data(t_lo);
        let hi = scale.to_data(t_hi);

        let mut layout = TickLayout::default();

        // Normalized [0, 1] position along the axis, or None when the tick
        // falls outside the current window.
        let normalized = |value: f64| -> Option<f64> {
            let n = (scale.to_transformed(value) - t_lo) / span;
            (n.is_finite() && (0.0..=1.0).contains(&n)).then_some(n)
        };

        let majors = self.tick_calc.major_ticks(lo, hi, scale);
        let mut max_label_width = 0.0_f64;
        for tick in &majors {
            if let Some(n) = normalized(tick.value) {
                let (label_width, _) = self.measurer.measure(&tick.label, FONT_SIZE);
                max_label_width = max_label_width.max(label_width);
                match axis {
                    Axis::X => {
                        let px = n * viewport.width;
                        layout.lines.push(TickLine {
                            from: (px, 0.0),
                            to: (px, MAJOR_TICK_LEN),
                            width: 1.0,
                        });
                        layout.labels.push(TickLabel {
                            text: tick.label.clone(),
                            pos: (px, MAJOR_TICK_LEN + LABEL_PAD),
                            anchor: LabelAnchor::Middle,
                            baseline: LabelBaseline::Hanging,
                        });
                    }
                    Axis::Y => {
                        let py = (1.0 - n) * viewport.height;
                        // Label x is placed once the margin is known.
                        layout.labels.push(TickLabel {
                            text: tick.label.clone(),
                            pos: (0.0, py),
                            anchor: LabelAnchor::End,
                            baseline: LabelBaseline::Middle,
                        });
                    }
                }
            }
        }

        // The left margin depends on the widest label, so y lines and label
        // x positions are placed after the measuring pass.
        match axis {
            Axis::X => {
                layout.margin = FONT_SIZE + MAJOR_TICK_LEN + 2.0 * LABEL_PAD;
            }
            Axis::Y => {
                layout.margin = max_label_width + MAJOR_TICK_LEN + 2.0 * LABEL_PAD;
                for label in &mut layout.labels {
                    label.pos.0 = layout.margin - MAJOR_TICK_LEN - LABEL_PAD;
                }
                for tick in &majors {
                    if let Some(n) = normalized(tick.value) {
                        let py = (1.0 - n) * viewport.height;
                        layout.lines.push(TickLine {
                            from: (layout.margin - MAJOR_TICK_LEN, py),
                            to: (layout.margin, py),
                            width: 1.0,
                        });
                    }
                }
            }
        }

        for value in self.tick_calc.minor_ticks(lo, hi, scale) {
            if let Some(n) = normalized(value) {
                match axis {
                    Axis::X => {
                        let px = n * viewport.width;
                        layout.lines.push(TickLine {
                            from: (px, 0.0),
                            to: (px, MINOR_TICK_LEN),
                            width: 0.5,
                        });
                    }
                    Axis::Y => {
                        let py = (1.0 - n) * viewport.height;
                        layout.lines.push(TickLine {
                            from: (layout.margin - MINOR_TICK_LEN, py),
                            to: (layout.margin, py),
                            width: 0.5,
                        });
                    }
                }
            }
        }

        layout
    }

    /// The current guide layout for the bottom margin.
    pub fn x_ticks(&self) -> &TickLayout {
        &self.x_ticks
    }

    /// The current guide layout for the left margin.
    pub fn y_ticks(&self) -> &TickLayout {
        &self.y_ticks
    }

    /// Assembles the frame to hand to the render surface.
    ///
    /// Primitives are borrowed from the artists' caches and sorted by z, so
    /// an unchanged artist contributes the same buffers as last frame.
    pub fn scene(&self) -> Scene<'_> {
        let mut primitives: SmallVec<[&Primitive; 8]> = SmallVec::new();
        for id in &self.draw_order {
            if let Some(item) = self.artists.get(id) {
                primitives.extend(item.as_artist().primitives());
            }
        }
        primitives.sort_by_key(|p| p.z());
        Scene {
            window: self.camera.effective_window(),
            viewport: self.camera.viewport(),
            primitives,
            x_ticks: &self.x_ticks,
            y_ticks: &self.y_ticks,
            rubber_band: self.rubber_band,
        }
    }

    /// The union of artist bounding boxes, for callers sizing shared color
    /// scales or insets. `None` when no artist has finite data.
    pub fn data_bounds(&self) -> Option<Bounds> {
        let mut union = BoundsUnion::new();
        let mut any = false;
        for id in &self.draw_order {
            if let Some(item) = self.artists.get(id)
                && let Ok(bounds) = item.as_artist().bounds()
            {
                union.add(bounds);
                any = true;
            }
        }
        any.then(|| {
            let x = union.x_range();
            let y = union.y_range();
            Bounds {
                left: x.map(|r| r.0),
                right: x.map(|r| r.1),
                bottom: y.map(|r| r.0),
                top: y.map(|r| r.1),
            }
        })
    }
}
