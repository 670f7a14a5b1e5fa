// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer state machine for box-zoom and drag-pan.

use kurbo::{Point, Rect};

/// The active navigation tool. Tools are mutually exclusive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tool {
    /// Pointer events are ignored.
    #[default]
    None,
    /// Drag selects a rectangle to zoom into.
    Zoom,
    /// Drag pans the camera.
    Pan,
}

/// What the caller should do in response to a pointer event.
///
/// All coordinates are pixels; the axes controller converts them through
/// the camera before applying them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Action {
    /// Nothing to apply.
    None,
    /// Show or update the zoom selection rectangle.
    RubberBand(Rect),
    /// Hide the zoom selection rectangle.
    HideRubberBand,
    /// Commit a zoom into the selected pixel rectangle and hide the band.
    ZoomTo(Rect),
    /// Shift the camera by a pixel delta.
    PanBy(f64, f64),
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Drag {
    Idle,
    Zoom { start: Point, current: Point, moved: bool },
    Pan { last: Point },
}

/// Interprets pointer-down/move/up sequences under the selected tool.
///
/// A zoom drag tracks whether the pointer ever moved; an unmoved click
/// commits nothing. Switching tools or cancelling mid-drag hides any
/// visible rubber band and discards the drag.
#[derive(Clone, Copy, Debug)]
pub struct Interaction {
    tool: Tool,
    drag: Drag,
}

impl Default for Interaction {
    fn default() -> Self {
        Self::new()
    }
}

impl Interaction {
    pub fn new() -> Self {
        Self {
            tool: Tool::None,
            drag: Drag::Idle,
        }
    }

    /// The currently selected tool.
    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// Whether a drag is in flight.
    pub fn dragging(&self) -> bool {
        self.drag != Drag::Idle
    }

    /// Selects a tool, aborting any drag in flight.
    pub fn select_tool(&mut self, tool: Tool) -> Action {
        self.tool = tool;
        self.abort_drag()
    }

    /// Aborts a drag without committing it (pointer capture loss).
    pub fn cancel(&mut self) -> Action {
        self.abort_drag()
    }

    fn abort_drag(&mut self) -> Action {
        let was_zoom = matches!(self.drag, Drag::Zoom { .. });
        self.drag = Drag::Idle;
        if was_zoom {
            Action::HideRubberBand
        } else {
            Action::None
        }
    }

    /// Begins a drag at a pixel position.
    pub fn pointer_down(&mut self, p: Point) -> Action {
        match self.tool {
            Tool::None => Action::None,
            Tool::Zoom => {
                self.drag = Drag::Zoom {
                    start: p,
                    current: p,
                    moved: false,
                };
                Action::RubberBand(Rect::from_points(p, p))
            }
            Tool::Pan => {
                self.drag = Drag::Pan { last: p };
                Action::None
            }
        }
    }

    /// Updates a drag in flight. No-op when idle.
    pub fn pointer_move(&mut self, p: Point) -> Action {
        match &mut self.drag {
            Drag::Idle => Action::None,
            Drag::Zoom { start, current, moved } => {
                *current = p;
                *moved = true;
                Action::RubberBand(Rect::from_points(*start, p))
            }
            Drag::Pan { last } => {
                let delta = p - *last;
                *last = p;
                Action::PanBy(delta.x, delta.y)
            }
        }
    }

    /// Ends a drag. A zoom drag that moved commits its rectangle; an
    /// unmoved click only hides the band.
    pub fn pointer_up(&mut self, p: Point) -> Action {
        match self.drag {
            Drag::Idle => Action::None,
            Drag::Zoom { start, moved, .. } => {
                self.drag = Drag::Idle;
                if moved {
                    Action::ZoomTo(Rect::from_points(start, p))
                } else {
                    Action::HideRubberBand
                }
            }
            Drag::Pan { .. } => {
                self.drag = Drag::Idle;
                Action::None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn tools_are_mutually_exclusive() {
        let mut im = Interaction::new();
        im.select_tool(Tool::Zoom);
        assert_eq!(im.tool(), Tool::Zoom);
        im.select_tool(Tool::Pan);
        assert_eq!(im.tool(), Tool::Pan);
        assert_ne!(im.tool(), Tool::Zoom);
    }

    #[test]
    fn zoom_drag_commits_normalized_rect() {
        let mut im = Interaction::new();
        im.select_tool(Tool::Zoom);
        im.pointer_down(Point::new(10.0, 10.0));
        assert_eq!(
            im.pointer_move(Point::new(4.0, 20.0)),
            Action::RubberBand(Rect::new(4.0, 10.0, 10.0, 20.0))
        );
        assert_eq!(
            im.pointer_up(Point::new(2.0, 30.0)),
            Action::ZoomTo(Rect::new(2.0, 10.0, 10.0, 30.0))
        );
        assert!(!im.dragging());
    }

    #[test]
    fn unmoved_click_zooms_nothing() {
        let mut im = Interaction::new();
        im.select_tool(Tool::Zoom);
        im.pointer_down(Point::new(5.0, 5.0));
        assert_eq!(im.pointer_up(Point::new(5.0, 5.0)), Action::HideRubberBand);
    }

    #[test]
    fn pan_drag_emits_deltas() {
        let mut im = Interaction::new();
        im.select_tool(Tool::Pan);
        im.pointer_down(Point::new(0.0, 0.0));
        assert_eq!(im.pointer_move(Point::new(3.0, -4.0)), Action::PanBy(3.0, -4.0));
        assert_eq!(im.pointer_move(Point::new(5.0, -4.0)), Action::PanBy(2.0, 0.0));
        assert_eq!(im.pointer_up(Point::new(5.0, -4.0)), Action::None);
    }

    #[test]
    fn tool_switch_mid_drag_hides_band() {
        let mut im = Interaction::new();
        im.select_tool(Tool::Zoom);
        im.pointer_down(Point::new(0.0, 0.0));
        im.pointer_move(Point::new(1.0, 1.0));
        assert_eq!(im.select_tool(Tool::Pan), Action::HideRubberBand);
        assert!(!im.dragging());
        // The aborted drag leaves no stale moved flag behind.
        im.select_tool(Tool::Zoom);
        im.pointer_down(Point::new(0.0, 0.0));
        assert_eq!(im.pointer_up(Point::new(0.0, 0.0)), Action::HideRubberBand);
    }

    #[test]
    fn no_tool_ignores_pointers() {
        let mut im = Interaction::new();
        assert_eq!(im.pointer_down(Point::new(1.0, 1.0)), Action::None);
        assert_eq!(im.pointer_move(Point::new(2.0, 2.0)), Action::None);
        assert_eq!(im.pointer_up(Point::new(2.0, 2.0)), Action::None);
    }
}
