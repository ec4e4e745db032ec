//! Translate egui input into core actions.
//!
//! Only pointer and key-release handling lives here; text editing itself is
//! left to egui's `TextEdit`.

use eframe::egui::{self, Pos2, Rect};

use crate::core::action::Action;
use crate::core::geometry::Point;

/// Where things are on screen this frame, in window-local points.
#[derive(Debug, Clone, Copy)]
pub struct Regions {
    /// Text area including its border and scrollbars.
    pub text_area: Rect,
    pub resize_grip: Rect,
    /// Window origin on the desktop, if the backend reports it.
    pub window_origin: Option<Pos2>,
}

/// The parts of `egui::PointerState` the note cares about.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerSnapshot {
    pub pos: Option<Pos2>,
    pub primary_pressed: bool,
    pub primary_down: bool,
    pub primary_released: bool,
    pub moved: bool,
}

impl PointerSnapshot {
    pub fn capture(input: &egui::InputState) -> Self {
        let pointer = &input.pointer;
        Self {
            pos: pointer.interact_pos(),
            primary_pressed: pointer.primary_pressed(),
            primary_down: pointer.primary_down(),
            primary_released: pointer.primary_released(),
            moved: pointer.delta() != egui::Vec2::ZERO,
        }
    }
}

/// What the pointer asks for this frame.
#[derive(Debug, Clone, PartialEq)]
pub enum PointerIntent {
    Core(Action),
    /// Press on the resize grip: hand the gesture to the window manager.
    Resize,
}

pub fn pointer_intents(pointer: &PointerSnapshot, regions: &Regions) -> Vec<PointerIntent> {
    let mut intents = Vec::new();
    let Some(pos) = pointer.pos else {
        if pointer.primary_released {
            intents.push(PointerIntent::Core(Action::EndDrag));
        }
        return intents;
    };

    if pointer.primary_pressed {
        if regions.resize_grip.contains(pos) {
            intents.push(PointerIntent::Resize);
        } else {
            intents.push(PointerIntent::Core(Action::BeginDrag {
                local: to_point(pos),
                over_text_area: regions.text_area.contains(pos),
            }));
        }
    } else if pointer.primary_down && pointer.moved {
        if let Some(origin) = regions.window_origin {
            intents.push(PointerIntent::Core(Action::Drag {
                pointer_screen: to_point(origin) + to_point(pos),
            }));
        }
    }

    if pointer.primary_released {
        intents.push(PointerIntent::Core(Action::EndDrag));
    }
    intents
}

/// Window origin used to turn local pointer positions into screen positions.
///
/// After an `OuterPosition` command the backend can keep reporting the old
/// origin for a frame while pointer positions already reflect the move. The
/// last origin sent therefore wins over the reported one until the drag ends.
#[derive(Debug, Clone, Copy, Default)]
pub struct OriginTracker {
    sent: Option<Pos2>,
}

impl OriginTracker {
    pub fn moved_to(&mut self, origin: Pos2) {
        self.sent = Some(origin);
    }

    pub fn reset(&mut self) {
        self.sent = None;
    }

    pub fn resolve(&self, reported: Option<Pos2>) -> Option<Pos2> {
        self.sent.or(reported)
    }
}

/// True if any key went up this frame.
pub fn key_released(events: &[egui::Event]) -> bool {
    events
        .iter()
        .any(|e| matches!(e, egui::Event::Key { pressed: false, .. }))
}

/// True if Backspace or Delete went down this frame.
pub fn delete_pressed(input: &egui::InputState) -> bool {
    input.key_pressed(egui::Key::Backspace) || input.key_pressed(egui::Key::Delete)
}

pub fn to_point(pos: Pos2) -> Point {
    Point::new(pos.x, pos.y)
}

pub fn to_pos2(point: Point) -> Pos2 {
    egui::pos2(point.x, point.y)
}
