//! Click-and-drag window relocation.
//!
//! A press outside the text area records where inside the window the pointer
//! grabbed it. Every pointer move then places the window origin so that the
//! same local point stays under the pointer:
//!
//! ```text
//! origin = pointer_screen - anchor
//! ```
//!
//! No clamping to screen edges is applied.

use log::debug;

use super::geometry::Point;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DragState {
    /// Window-local grab point; `None` while idle.
    pub anchor: Option<Point>,
}

impl DragState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.anchor.is_some()
    }

    /// Record `local` as the anchor unless the press landed on the text area.
    /// Returns `true` if an anchor was recorded.
    pub fn begin_drag(&mut self, local: Point, over_text_area: bool) -> bool {
        if over_text_area {
            return false;
        }
        debug!("Drag anchor set at ({}, {})", local.x, local.y);
        self.anchor = Some(local);
        true
    }

    /// New window origin for the given pointer screen position.
    pub fn drag(&self, pointer_screen: Point) -> Option<Point> {
        self.anchor.map(|anchor| pointer_screen - anchor)
    }

    /// Releasing the button returns to idle. Without this a later press on
    /// the text area would leave the old anchor live, and selecting text
    /// would drag the window.
    pub fn end_drag(&mut self) {
        if self.anchor.take().is_some() {
            debug!("Drag released");
        }
    }
}
