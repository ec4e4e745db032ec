//! # Note Persistence
//!
//! The note lives in one plain UTF-8 file, by default `todo_sauvegarde.txt`
//! in the current working directory. No header, no metadata.
//!
//! - Load: a missing file means an empty note; anything else that goes wrong
//!   (permissions, invalid UTF-8) is returned to the caller.
//! - Save: truncating overwrite of the trimmed buffer. No temp file, no
//!   rename, no backup.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info};

use super::buffer::NoteBuffer;

pub const DEFAULT_SAVE_FILE: &str = "todo_sauvegarde.txt";

/// Default save path, relative to the working directory.
pub fn default_save_path() -> PathBuf {
    PathBuf::from(DEFAULT_SAVE_FILE)
}

/// Read the save file. `Ok(None)` when it does not exist.
pub fn load(path: &Path) -> io::Result<Option<String>> {
    if !path.exists() {
        info!("No save file at {}, starting empty", path.display());
        return Ok(None);
    }
    let contents = fs::read_to_string(path)?;
    info!("Loaded {} bytes from {}", contents.len(), path.display());
    Ok(Some(contents))
}

/// Load the save file into the start of `buffer`.
pub fn load_into(path: &Path, buffer: &mut NoteBuffer) -> io::Result<()> {
    if let Some(contents) = load(path)? {
        buffer.insert_at_start(&contents);
    }
    Ok(())
}

/// Overwrite the save file with the buffer's trimmed content.
pub fn save(path: &Path, buffer: &NoteBuffer) -> io::Result<()> {
    let contents = buffer.persisted_form();
    fs::write(path, contents)?;
    debug!("Saved {} bytes to {}", contents.len(), path.display());
    Ok(())
}
