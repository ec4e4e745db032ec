//! # Actions
//!
//! Everything that can happen to the note becomes an `Action`.
//! User releases a key? That's `Action::KeyReleased`.
//! User grabs the window frame? That's `Action::BeginDrag { .. }`.
//!
//! `update()` applies an action to the state and returns an `Effect` telling
//! the GUI adapter what to do outside the core (write the file, move the
//! window, close it). No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  Effect
//! ```

use std::ops::Range;

use log::debug;

use super::geometry::Point;
use super::state::App;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A key was released while the text area had focus.
    KeyReleased,
    /// The text widget edited the content.
    TextEdited(String),
    /// The text widget's selection moved (char range, `None` = collapsed).
    SelectionChanged(Option<Range<usize>>),
    /// Backspace/Delete with a possible selection.
    DeleteSelection,
    /// Primary button pressed at window-local `local`.
    BeginDrag { local: Point, over_text_area: bool },
    /// Pointer moved to `pointer_screen` with the primary button held.
    Drag { pointer_screen: Point },
    /// Primary button released.
    EndDrag,
    Close,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Write the buffer to the save file.
    Save,
    /// Text was removed; put the cursor at this char index.
    CursorMoved(usize),
    /// Put the window's top-left corner here (screen coordinates).
    MoveWindow(Point),
    Close,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::KeyReleased => Effect::Save,
        Action::TextEdited(text) => {
            if app.buffer.text() != text {
                app.buffer.set_text(text);
                app.unsaved = true;
            }
            Effect::None
        }
        Action::SelectionChanged(Some(range)) => {
            app.buffer.select(range);
            Effect::None
        }
        Action::SelectionChanged(None) => {
            app.buffer.clear_selection();
            Effect::None
        }
        Action::DeleteSelection => match app.buffer.delete_selection() {
            Ok(cursor) => {
                app.unsaved = true;
                Effect::CursorMoved(cursor)
            }
            Err(e) => {
                debug!("Delete ignored: {}", e);
                Effect::None
            }
        },
        Action::BeginDrag {
            local,
            over_text_area,
        } => {
            app.drag.begin_drag(local, over_text_area);
            Effect::None
        }
        Action::Drag { pointer_screen } => match app.drag.drag(pointer_screen) {
            Some(origin) => Effect::MoveWindow(origin),
            None => Effect::None,
        },
        Action::EndDrag => {
            app.drag.end_drag();
            Effect::None
        }
        Action::Close => Effect::Close,
    }
}
