//! # Application State
//!
//! Everything the note window's event handlers share, in one owned value
//! instead of module-level globals.
//!
//! ```text
//! App
//! ├── buffer: NoteBuffer        // note text + selection
//! ├── drag: DragState           // optional drag anchor
//! ├── save_path: PathBuf        // where every key release writes
//! └── unsaved: bool             // buffer changed since last save
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::io;
use std::path::PathBuf;

use super::buffer::NoteBuffer;
use super::drag::DragState;
use super::storage;

#[derive(Debug)]
pub struct App {
    pub buffer: NoteBuffer,
    pub drag: DragState,
    pub save_path: PathBuf,
    pub unsaved: bool,
}

impl App {
    /// Empty note bound to `save_path`. Nothing is read from disk.
    pub fn new(save_path: impl Into<PathBuf>) -> Self {
        Self {
            buffer: NoteBuffer::new(),
            drag: DragState::new(),
            save_path: save_path.into(),
            unsaved: false,
        }
    }

    /// Build the context and pull in any previously saved note.
    pub fn load(save_path: impl Into<PathBuf>) -> io::Result<Self> {
        let mut app = Self::new(save_path);
        storage::load_into(&app.save_path, &mut app.buffer)?;
        Ok(app)
    }

    /// Write the buffer to the save file.
    pub fn save(&mut self) -> io::Result<()> {
        storage::save(&self.save_path, &self.buffer)?;
        self.unsaved = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::scratch_path;
    use std::fs;

    #[test]
    fn test_load_without_file_starts_empty() {
        let (_dir, path) = scratch_path();
        let app = App::load(&path).unwrap();
        assert!(app.buffer.is_empty());
        assert!(!app.drag.is_dragging());
    }

    #[test]
    fn test_load_with_file_fills_buffer() {
        let (_dir, path) = scratch_path();
        fs::write(&path, "Buy milk").unwrap();
        let app = App::load(&path).unwrap();
        assert_eq!(app.buffer.text(), "Buy milk");
        assert!(!app.unsaved);
    }

    #[test]
    fn test_save_clears_unsaved_flag() {
        let (_dir, path) = scratch_path();
        let mut app = App::new(&path);
        app.buffer.set_text("x");
        app.unsaved = true;
        app.save().unwrap();
        assert!(!app.unsaved);
        assert_eq!(fs::read_to_string(&path).unwrap(), "x");
    }
}
