//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::path::PathBuf;

use tempfile::TempDir;

use crate::core::buffer::NoteBuffer;
use crate::core::state::App;

/// A fresh temp directory and a save-file path inside it that does not exist
/// yet. Keep the `TempDir` alive for as long as the path is used.
pub fn scratch_path() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("note.txt");
    (dir, path)
}

pub fn buffer_with(text: &str) -> NoteBuffer {
    let mut buffer = NoteBuffer::new();
    buffer.set_text(text);
    buffer
}

/// Creates a test App with an empty buffer pointing at a path nothing reads.
pub fn test_app() -> App {
    App::new("unused-test-note.txt")
}
