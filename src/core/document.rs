// document module - the text buffer and its file/dirty state
use super::error::{EditorError, Result};
use super::selection::{byte_range, Selection};
use std::fs;
use std::ops::Range;
use std::path::{Path, PathBuf};

pub const PRODUCT_NAME: &str = "Text Editor";
pub const DEFAULT_FILE_NAME: &str = "jauns.txt";

/// Where the buffer stands relative to the disk.
///
/// A document is either untitled (never written to a user-chosen path) or
/// backed by a file, and in both cases either clean or dirty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DocState {
    UntitledClean,
    UntitledDirty,
    SavedClean(PathBuf),
    SavedDirty(PathBuf),
}

impl DocState {
    pub fn is_dirty(&self) -> bool {
        matches!(self, DocState::UntitledDirty | DocState::SavedDirty(_))
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            DocState::SavedClean(path) | DocState::SavedDirty(path) => Some(path),
            _ => None,
        }
    }

    fn edited(self) -> Self {
        match self {
            DocState::UntitledClean => DocState::UntitledDirty,
            DocState::SavedClean(path) => DocState::SavedDirty(path),
            dirty => dirty,
        }
    }
}

pub struct Document {
    text: String,
    state: DocState,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            state: DocState::UntitledClean,
        }
    }

    // handle loading a file; bytes that are not valid text become U+FFFD
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).map_err(|e| EditorError::io(path, e))?;
        let (text, lossy) = decode_text(&bytes);
        if lossy {
            log::warn!("{} is not valid Unicode text, invalid bytes were replaced", path.display());
        }
        log::info!("loaded {} ({} bytes)", path.display(), bytes.len());
        Ok(Self {
            text,
            state: DocState::SavedClean(path.to_path_buf()),
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    // The widget edits this in place; whoever hands it out calls mark_edited on change
    pub fn text_mut(&mut self) -> &mut String {
        &mut self.text
    }

    pub fn state(&self) -> &DocState {
        &self.state
    }

    pub fn is_dirty(&self) -> bool {
        self.state.is_dirty()
    }

    pub fn path(&self) -> Option<&Path> {
        self.state.path()
    }

    pub fn mark_edited(&mut self) {
        let state = std::mem::replace(&mut self.state, DocState::UntitledClean);
        self.state = state.edited();
    }

    pub fn file_name(&self) -> String {
        match self.path() {
            Some(path) => path.display().to_string(),
            None => DEFAULT_FILE_NAME.to_string(),
        }
    }

    pub fn title(&self) -> String {
        format!("{} - {}", PRODUCT_NAME, self.file_name())
    }

    pub fn status(&self) -> &'static str {
        if self.is_dirty() {
            "Modified."
        } else {
            ""
        }
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.state = DocState::UntitledClean;
    }

    // Write the whole buffer, then track `path` as the clean backing file
    pub fn write_to(&mut self, path: &Path) -> Result<()> {
        fs::write(path, &self.text).map_err(|e| EditorError::io(path, e))?;
        log::info!("saved {} ({} bytes)", path.display(), self.text.len());
        self.state = DocState::SavedClean(path.to_path_buf());
        Ok(())
    }

    pub fn selected_text(&self, selection: Selection) -> &str {
        &self.text[byte_range(&self.text, selection.range())]
    }

    // Replace a char range with `text`; returns the char index just after the insertion
    pub fn replace_range(&mut self, chars: Range<usize>, text: &str) -> usize {
        let start = chars.start;
        let bytes = byte_range(&self.text, chars);
        self.text.replace_range(bytes, text);
        self.mark_edited();
        start + text.chars().count()
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

// Honours a UTF-8 or UTF-16 byte-order mark, otherwise assumes UTF-8.
// The flag is set when anything had to be replaced.
fn decode_text(bytes: &[u8]) -> (String, bool) {
    match bytes {
        [0xEF, 0xBB, 0xBF, rest @ ..] => decode_utf8(rest),
        [0xFF, 0xFE, rest @ ..] => decode_utf16(rest, u16::from_le_bytes),
        [0xFE, 0xFF, rest @ ..] => decode_utf16(rest, u16::from_be_bytes),
        _ => decode_utf8(bytes),
    }
}

fn decode_utf8(bytes: &[u8]) -> (String, bool) {
    match std::str::from_utf8(bytes) {
        Ok(text) => (text.to_string(), false),
        Err(_) => (String::from_utf8_lossy(bytes).into_owned(), true),
    }
}

fn decode_utf16(bytes: &[u8], unit: fn([u8; 2]) -> u16) -> (String, bool) {
    let chunks = bytes.chunks_exact(2);
    let odd_byte = !chunks.remainder().is_empty();
    let mut lossy = odd_byte;
    let units = chunks.map(|pair| unit([pair[0], pair[1]]));
    let mut text: String = char::decode_utf16(units)
        .map(|c| {
            c.unwrap_or_else(|_| {
                lossy = true;
                char::REPLACEMENT_CHARACTER
            })
        })
        .collect();
    if odd_byte {
        text.push(char::REPLACEMENT_CHARACTER);
    }
    (text, lossy)
}
