//! # Note Buffer
//!
//! The single in-memory string that backs the note, plus the current
//! selection. Positions are **char indices**, matching what the text widget
//! reports, and are converted to byte offsets only when the string is edited.
//!
//! ```text
//! NoteBuffer
//! ├── text: String                   // note content, verbatim
//! └── selection: Option<Range<usize>>  // char range, never empty
//! ```

use std::fmt;
use std::ops::Range;

/// Returned by [`NoteBuffer::delete_selection`] when nothing is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoSelection;

impl fmt::Display for NoSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no text selected")
    }
}

impl std::error::Error for NoSelection {}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteBuffer {
    text: String,
    selection: Option<Range<usize>>,
}

impl NoteBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the whole content. Clears the selection.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.selection = None;
    }

    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Insert `text` verbatim before everything already in the buffer.
    pub fn insert_at_start(&mut self, text: &str) {
        self.text.insert_str(0, text);
        if let Some(sel) = self.selection.take() {
            let shift = text.chars().count();
            self.selection = Some(sel.start + shift..sel.end + shift);
        }
    }

    pub fn selection(&self) -> Option<Range<usize>> {
        self.selection.clone()
    }

    /// Select a char range. Ends are clamped to the buffer and reversed
    /// ranges normalised; an empty range clears the selection.
    pub fn select(&mut self, range: Range<usize>) {
        let len = self.char_len();
        let (a, b) = (range.start.min(len), range.end.min(len));
        let (start, end) = if a <= b { (a, b) } else { (b, a) };
        self.selection = (start < end).then_some(start..end);
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Remove the selected text.
    ///
    /// Returns the char index where the cursor should land (the start of the
    /// removed range). Errors with [`NoSelection`] and leaves the text alone
    /// when nothing is selected.
    pub fn delete_selection(&mut self) -> Result<usize, NoSelection> {
        let range = self.selection.take().ok_or(NoSelection)?;
        let start = byte_offset(&self.text, range.start);
        let end = byte_offset(&self.text, range.end);
        self.text.replace_range(start..end, "");
        Ok(range.start)
    }

    /// The form written to the save file: content with surrounding
    /// whitespace trimmed.
    pub fn persisted_form(&self) -> &str {
        self.text.trim()
    }
}

/// Byte offset of the char at `char_idx`, or the string length past the end.
fn byte_offset(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(byte, _)| byte)
        .unwrap_or(s.len())
}
