// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Orthographic camera over the transformed-space projection window.

use kurbo::{Point, Rect};

use vantage_core::Viewport;

/// The camera framing a rectangle of transformed space onto a pixel viewport.
///
/// Panning accumulates into a separate offset rather than mutating the
/// stored window, so limits derived from the window stay stable while a drag
/// is in flight and a reset can drop the offset wholesale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    window: Rect,
    pan: (f64, f64),
    viewport: Viewport,
}

impl Camera {
    /// Creates a camera framing `window` onto `viewport`.
    pub fn new(window: Rect, viewport: Viewport) -> Self {
        Self {
            window,
            pan: (0.0, 0.0),
            viewport,
        }
    }

    /// The stored window, ignoring any pan offset.
    pub fn window(&self) -> Rect {
        self.window
    }

    /// Replaces the stored window. The pan offset is untouched.
    pub fn set_window(&mut self, window: Rect) {
        self.window = window;
    }

    /// The window actually framed: the stored window shifted by the pan
    /// offset.
    pub fn effective_window(&self) -> Rect {
        self.window + kurbo::Vec2::new(self.pan.0, self.pan.1)
    }

    /// The accumulated pan offset in transformed-space units.
    pub fn pan(&self) -> (f64, f64) {
        self.pan
    }

    /// Shifts the pan offset by a transformed-space delta.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan.0 += dx;
        self.pan.1 += dy;
    }

    /// Drops the pan offset.
    pub fn reset_pan(&mut self) {
        self.pan = (0.0, 0.0);
    }

    /// The pixel viewport.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Updates the pixel viewport. The window is untouched, so the aspect
    /// ratio of the framed region follows the surface.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.viewport = Viewport::new(width, height);
    }

    /// Converts a pixel position to transformed-space coordinates.
    ///
    /// Pixel y grows downward from the top edge; window y grows upward.
    pub fn pixel_to_window(&self, px: f64, py: f64) -> Point {
        let w = self.effective_window();
        let nx = px / self.viewport.width;
        let ny = 1.0 - py / self.viewport.height;
        Point::new(w.x0 + nx * w.width(), w.y0 + ny * w.height())
    }

    /// Converts transformed-space coordinates to a pixel position.
    pub fn window_to_pixel(&self, p: Point) -> (f64, f64) {
        let w = self.effective_window();
        let nx = (p.x - w.x0) / w.width();
        let ny = (p.y - w.y0) / w.height();
        (nx * self.viewport.width, (1.0 - ny) * self.viewport.height)
    }

    /// Scales a pixel delta into a transformed-space delta under the current
    /// window and viewport, keeping drag speed matched to the cursor.
    pub fn pixel_delta_to_window(&self, dx: f64, dy: f64) -> (f64, f64) {
        let w = self.window;
        (
            dx / self.viewport.width * w.width(),
            -dy / self.viewport.height * w.height(),
        )
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn pixel_window_roundtrip() {
        let cam = Camera::new(
            Rect::new(-2.0, 1.0, 8.0, 6.0),
            Viewport::new(800.0, 600.0),
        );
        let p = cam.pixel_to_window(200.0, 150.0);
        let (px, py) = cam.window_to_pixel(p);
        assert!((px - 200.0).abs() < 1e-9);
        assert!((py - 150.0).abs() < 1e-9);
    }

    #[test]
    fn pixel_y_grows_downward() {
        let cam = Camera::new(Rect::new(0.0, 0.0, 1.0, 1.0), Viewport::new(100.0, 100.0));
        let top = cam.pixel_to_window(0.0, 0.0);
        let bottom = cam.pixel_to_window(0.0, 100.0);
        assert!((top.y - 1.0).abs() < 1e-12);
        assert!((bottom.y - 0.0).abs() < 1e-12);
    }

    #[test]
    fn panning_shifts_effective_window_only() {
        let mut cam = Camera::new(Rect::new(0.0, 0.0, 10.0, 10.0), Viewport::new(100.0, 100.0));
        cam.pan_by(2.0, -3.0);
        assert_eq!(cam.window(), Rect::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(cam.effective_window(), Rect::new(2.0, -3.0, 12.0, 7.0));
        cam.reset_pan();
        assert_eq!(cam.effective_window(), cam.window());
    }

    #[test]
    fn pixel_delta_scales_with_window() {
        let cam = Camera::new(Rect::new(0.0, 0.0, 10.0, 20.0), Viewport::new(100.0, 100.0));
        let (dx, dy) = cam.pixel_delta_to_window(10.0, 10.0);
        assert!((dx - 1.0).abs() < 1e-12);
        assert!((dy + 2.0).abs() < 1e-12);
    }
}
