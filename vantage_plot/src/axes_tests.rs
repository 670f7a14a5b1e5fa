// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end tests for the axes controller.

extern crate std;

use kurbo::Rect;

use vantage_core::{Error, Grid, ScaleMode};

use crate::axes::{Axes, PlotItem};
use crate::interact::Tool;

fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "expected {b}, got {a}");
}

fn demo_axes() -> Axes {
    Axes::new(800.0, 600.0)
}

#[test]
fn empty_axes_frames_unit_square() {
    let axes = demo_axes();
    assert_eq!(axes.get_xlim(), (0.0, 1.0));
    assert_eq!(axes.get_ylim(), (0.0, 1.0));
    assert_eq!(axes.camera().window(), Rect::new(0.0, 0.0, 1.0, 1.0));
}

#[test]
fn autoscale_pads_line_bbox() {
    let mut axes = demo_axes();
    axes.plot([0.0, 1.0, 2.0, 3.0], [0.0, 3.0, 6.0, 9.0]).unwrap();
    let (x0, x1) = axes.get_xlim();
    let (y0, y1) = axes.get_ylim();
    assert_close(x0, -0.09);
    assert_close(x1, 3.09);
    assert_close(y0, -0.27);
    assert_close(y1, 9.27);
    // The window frames the padded limits directly after autoscale.
    let w = axes.camera().effective_window();
    assert_close(w.x0, -0.09);
    assert_close(w.y1, 9.27);
}

#[test]
fn single_point_gets_symmetric_expansion() {
    let mut axes = demo_axes();
    axes.plot([2.0], [0.0]).unwrap();
    assert_eq!(axes.get_xlim(), (1.0, 3.0));
    assert_eq!(axes.get_ylim(), (-0.5, 0.5));
}

#[test]
fn autoscale_falls_back_per_scale_mode() {
    let mut axes = demo_axes();
    axes.autoscale();
    assert_eq!(axes.get_xlim(), (0.0, 1.0));
    axes.set_xscale(ScaleMode::Log).unwrap();
    assert_eq!(axes.get_xlim(), (1.0, 10.0));
    // Transformed window spans one decade.
    let w = axes.camera().window();
    assert_close(w.x0, 0.0);
    assert_close(w.x1, 1.0);
}

#[test]
fn hspan_contributes_only_to_y() {
    let mut axes = demo_axes();
    axes.axhspan(5.0, 15.0);
    assert_eq!(axes.get_xlim(), (0.0, 1.0), "x falls back, span is unbounded");
    assert_eq!(axes.get_ylim(), (5.0, 15.0));
}

#[test]
fn pixel_data_roundtrip_linear() {
    let mut axes = demo_axes();
    axes.set_xlim(0.0, 10.0).unwrap();
    axes.set_ylim(0.0, 10.0).unwrap();
    let (x, y) = axes.pixel_to_data(400.0, 300.0);
    assert_close(x, 5.0);
    assert_close(y, 5.0);
    // The top-left pixel is (xmin, ymax).
    let (x, y) = axes.pixel_to_data(0.0, 0.0);
    assert_close(x, 0.0);
    assert_close(y, 10.0);
}

#[test]
fn pixel_data_roundtrip_log() {
    let mut axes = demo_axes();
    axes.set_xscale(ScaleMode::Log).unwrap();
    axes.set_xlim(1.0, 100.0).unwrap();
    let (x, _) = axes.pixel_to_data(400.0, 300.0);
    assert_close(x, 10.0);
}

#[test]
fn set_xlim_rejects_non_positive_on_log() {
    let mut axes = demo_axes();
    axes.set_xscale(ScaleMode::Log).unwrap();
    assert!(matches!(
        axes.set_xlim(-1.0, 10.0),
        Err(Error::InvalidScale(_))
    ));
    // Limits are untouched by the failed call.
    assert_eq!(axes.get_xlim(), (1.0, 10.0));
}

#[test]
fn zoom_then_reset_restores_window_exactly() {
    let mut axes = demo_axes();
    axes.plot([0.0, 1.0, 2.0, 3.0], [0.0, 3.0, 6.0, 9.0]).unwrap();
    let before = axes.camera().window();
    axes.zoom(Rect::new(0.5, 1.0, 1.5, 2.0));
    assert_eq!(axes.camera().window(), Rect::new(0.5, 1.0, 1.5, 2.0));
    assert_close(axes.get_xlim().0, -0.09);
    axes.reset();
    assert_eq!(axes.camera().window(), before);
}

#[test]
fn log_zoom_converts_back_to_data_limits() {
    let mut axes = demo_axes();
    axes.plot([1.0, 10.0, 100.0], [1.0, 1.0, 1.0]).unwrap();
    axes.set_xscale(ScaleMode::Log).unwrap();
    let w = axes.camera().window();
    axes.zoom(Rect::new(0.5, w.y0, 1.5, w.y1));
    let (lo, hi) = axes.effective_xlim();
    assert!((lo - 10.0_f64.powf(0.5)).abs() < 1e-9);
    assert!((hi - 10.0_f64.powf(1.5)).abs() < 1e-9);
}

#[test]
fn scale_toggle_roundtrips_limits() {
    let mut axes = demo_axes();
    axes.plot([1.0, 10.0, 100.0], [1.0, 2.0, 3.0]).unwrap();
    let lim = axes.get_xlim();
    axes.toggle_xscale().unwrap();
    assert_eq!(axes.xscale(), ScaleMode::Log);
    axes.toggle_xscale().unwrap();
    assert_eq!(axes.xscale(), ScaleMode::Linear);
    assert_eq!(axes.get_xlim(), lim);
}

#[test]
fn loglog_switches_both_scales() {
    let mut axes = demo_axes();
    let id = axes
        .loglog([1.0, 10.0, 100.0], [1.0, 100.0, 10000.0])
        .unwrap();
    assert_eq!(axes.xscale(), ScaleMode::Log);
    assert_eq!(axes.yscale(), ScaleMode::Log);
    assert!(matches!(axes.item(id), Some(PlotItem::Line(_))));

    let mut axes = demo_axes();
    axes.semilogx([1.0, 10.0], [0.0, 1.0]).unwrap();
    assert_eq!(axes.xscale(), ScaleMode::Log);
    assert_eq!(axes.yscale(), ScaleMode::Linear);

    let mut axes = demo_axes();
    axes.semilogy([0.0, 1.0], [1.0, 10.0]).unwrap();
    assert_eq!(axes.yscale(), ScaleMode::Log);
    assert_eq!(axes.xscale(), ScaleMode::Linear);
}

#[test]
fn set_xscale_is_a_noop_when_unchanged() {
    let mut axes = demo_axes();
    axes.plot([0.0, 1.0], [0.0, 1.0]).unwrap();
    axes.zoom(Rect::new(0.2, 0.2, 0.4, 0.4));
    let window = axes.camera().window();
    axes.set_xscale(ScaleMode::Linear).unwrap();
    assert_eq!(axes.camera().window(), window, "no autoscale on a no-op");
}

#[test]
fn scale_switch_with_image_is_rejected_atomically() {
    let mut axes = demo_axes();
    let line = axes.plot([1.0, 2.0], [1.0, 2.0]).unwrap();
    axes.imshow(Grid::new(2, 2, std::vec![0.0, 1.0, 2.0, 3.0]).unwrap(), None)
        .unwrap();
    assert_eq!(
        axes.set_xscale(ScaleMode::Log),
        Err(Error::LogScaleUnsupported("images"))
    );
    assert_eq!(axes.xscale(), ScaleMode::Linear);
    // The line still renders its linear geometry.
    match axes.item(line) {
        Some(PlotItem::Line(l)) => assert_eq!(l.xdata(), &[1.0, 2.0]),
        other => panic!("expected a line, got {other:?}"),
    }
}

#[test]
fn imshow_rejected_on_log_axes() {
    let mut axes = demo_axes();
    axes.set_yscale(ScaleMode::Log).unwrap();
    let err = axes
        .imshow(Grid::new(1, 1, std::vec![1.0]).unwrap(), None)
        .unwrap_err();
    assert_eq!(err, Error::LogScaleUnsupported("images"));
    assert!(axes.is_empty());
}

#[test]
fn tools_are_mutually_exclusive() {
    let mut axes = demo_axes();
    axes.select_tool(Tool::Zoom);
    assert_eq!(axes.tool(), Tool::Zoom);
    axes.select_tool(Tool::Pan);
    assert_eq!(axes.tool(), Tool::Pan);
}

#[test]
fn box_zoom_via_pointer_frames_selection() {
    let mut axes = demo_axes();
    axes.set_xlim(0.0, 8.0).unwrap();
    axes.set_ylim(0.0, 6.0).unwrap();
    axes.select_tool(Tool::Zoom);
    axes.pointer_down(200.0, 150.0);
    axes.pointer_move(600.0, 450.0);
    assert!(axes.scene().rubber_band.is_some());
    axes.pointer_up(600.0, 450.0);
    assert!(axes.scene().rubber_band.is_none());
    let (x0, x1) = axes.effective_xlim();
    let (y0, y1) = axes.effective_ylim();
    assert_close(x0, 2.0);
    assert_close(x1, 6.0);
    assert_close(y0, 1.5);
    assert_close(y1, 4.5);
}

#[test]
fn unmoved_click_does_not_zoom() {
    let mut axes = demo_axes();
    axes.set_xlim(0.0, 8.0).unwrap();
    let before = axes.camera().window();
    axes.select_tool(Tool::Zoom);
    axes.pointer_down(200.0, 150.0);
    axes.pointer_up(200.0, 150.0);
    assert_eq!(axes.camera().window(), before);
    assert!(axes.scene().rubber_band.is_none());
}

#[test]
fn cancel_mid_drag_hides_rubber_band() {
    let mut axes = demo_axes();
    axes.select_tool(Tool::Zoom);
    axes.pointer_down(10.0, 10.0);
    axes.pointer_move(50.0, 50.0);
    assert!(axes.scene().rubber_band.is_some());
    axes.cancel_drag();
    assert!(axes.scene().rubber_band.is_none());
}

#[test]
fn pan_shifts_effective_limits_only() {
    let mut axes = demo_axes();
    axes.set_xlim(0.0, 8.0).unwrap();
    axes.set_ylim(0.0, 6.0).unwrap();
    axes.select_tool(Tool::Pan);
    axes.pointer_down(400.0, 300.0);
    // Drag right by 100 px: one eighth of the viewport, so one unit of x.
    axes.pointer_move(500.0, 300.0);
    axes.pointer_up(500.0, 300.0);
    let (x0, x1) = axes.effective_xlim();
    assert_close(x0, -1.0);
    assert_close(x1, 7.0);
    assert_eq!(axes.get_xlim(), (0.0, 8.0));
    axes.reset();
    let (x0, x1) = axes.effective_xlim();
    assert_close(x0, 0.0);
    assert_close(x1, 8.0);
}

#[test]
fn set_lim_lands_exactly_while_panned() {
    let mut axes = demo_axes();
    axes.set_xlim(0.0, 8.0).unwrap();
    axes.set_ylim(0.0, 6.0).unwrap();
    axes.select_tool(Tool::Pan);
    axes.pointer_down(400.0, 300.0);
    axes.pointer_move(500.0, 300.0);
    axes.pointer_up(500.0, 300.0);
    // Re-applying the limits compensates the pan instead of fighting it.
    axes.set_xlim(0.0, 8.0).unwrap();
    let (x0, x1) = axes.effective_xlim();
    assert_close(x0, 0.0);
    assert_close(x1, 8.0);
    // The pan offset itself stays in place.
    assert_close(axes.camera().pan().0, -1.0);
    let (y0, y1) = axes.effective_ylim();
    assert_close(y0, 0.0);
    assert_close(y1, 6.0);
}

#[test]
fn set_xlim_leaves_the_other_axis_zoomed() {
    let mut axes = demo_axes();
    axes.set_xlim(0.0, 8.0).unwrap();
    axes.set_ylim(0.0, 6.0).unwrap();
    axes.zoom(Rect::new(2.0, 1.5, 6.0, 4.5));
    axes.set_xlim(0.0, 8.0).unwrap();
    let (x0, x1) = axes.effective_xlim();
    assert_close(x0, 0.0);
    assert_close(x1, 8.0);
    // The y zoom survives the x limit change.
    let (y0, y1) = axes.effective_ylim();
    assert_close(y0, 1.5);
    assert_close(y1, 4.5);
}

#[test]
fn ticks_stay_inside_the_viewport() {
    let mut axes = demo_axes();
    axes.set_xlim(0.0, 10.0).unwrap();
    axes.set_ylim(0.0, 10.0).unwrap();
    axes.zoom(Rect::new(2.3, 2.3, 4.7, 4.7));
    for line in &axes.x_ticks().lines {
        assert!(line.from.0 >= 0.0 && line.from.0 <= 800.0);
    }
    for label in &axes.x_ticks().labels {
        let v: f64 = label.text.parse().unwrap();
        assert!((2.3..=4.7).contains(&v), "label {v} escaped the window");
    }
}

#[test]
fn left_margin_tracks_widest_label() {
    let mut axes = demo_axes();
    axes.set_ylim(0.0, 1.0).unwrap();
    let narrow = axes.y_ticks().margin;
    axes.set_ylim(0.0, 0.001).unwrap();
    let wide = axes.y_ticks().margin;
    assert!(
        wide > narrow,
        "longer labels must widen the margin ({narrow} vs {wide})"
    );
}

#[test]
fn resize_keeps_window_but_remakes_ticks() {
    let mut axes = demo_axes();
    axes.set_xlim(0.0, 10.0).unwrap();
    let window = axes.camera().window();
    let tick_x_before = axes.x_ticks().lines[1].from.0;
    axes.resize(400.0, 300.0);
    assert_eq!(axes.camera().window(), window);
    let tick_x_after = axes.x_ticks().lines[1].from.0;
    assert_close(tick_x_after, tick_x_before / 2.0);
}

#[test]
fn scene_orders_primitives_by_z() {
    let mut axes = demo_axes();
    axes.plot([0.0, 1.0], [0.0, 1.0]).unwrap();
    axes.axhspan(0.2, 0.4);
    axes.scatter([0.5], [0.5]).unwrap();
    let scene = axes.scene();
    let zs: std::vec::Vec<i32> = scene.primitives.iter().map(|p| p.z()).collect();
    let mut sorted = zs.clone();
    sorted.sort_unstable();
    assert_eq!(zs, sorted);
    assert_eq!(scene.viewport.width, 800.0);
}

#[test]
fn setters_through_item_mut_refresh_geometry() {
    let mut axes = demo_axes();
    let id = axes.plot([0.0, 1.0], [0.0, 1.0]).unwrap();
    match axes.item_mut(id) {
        Some(PlotItem::Line(line)) => line.set_ydata([10.0, 20.0]).unwrap(),
        other => panic!("expected a line, got {other:?}"),
    }
    // Limits only move on an explicit autoscale.
    assert_close(axes.get_ylim().1, 1.03);
    axes.autoscale();
    assert_close(axes.get_ylim().1, 20.3);
}

#[test]
fn remove_drops_the_artist() {
    let mut axes = demo_axes();
    let id = axes.plot([0.0, 1.0], [0.0, 1.0]).unwrap();
    assert_eq!(axes.len(), 1);
    assert!(axes.remove(id));
    assert!(!axes.remove(id));
    assert!(axes.is_empty());
    assert!(axes.scene().primitives.is_empty());
}
