// file_ops module - New/Open/Save/Save As on top of the document state
use super::document::{DocState, Document};
use super::error::Result;
use std::path::{Path, PathBuf};

/// Filters shown by every file dialog: (label, extensions)
pub const FILE_FILTERS: &[(&str, &[&str])] = &[
    ("Text files (*.txt)", &["txt"]),
    ("All files (*.*)", &["*"]),
];

pub const SAVE_PROMPT: &str = "Save changes?";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaveChoice {
    Yes,
    No,
    Cancel,
}

/// The dialogs the file commands need from the desktop.
pub trait FileDialogs {
    /// Ask for a destination path; `None` when the user cancels.
    fn pick_save_path(&mut self, title: &str, directory: Option<&Path>, file_name: &str)
        -> Option<PathBuf>;

    /// Ask for a file to open; `None` when the user cancels.
    fn pick_open_path(&mut self, title: &str) -> Option<PathBuf>;

    fn confirm_save(&mut self, prompt: &str) -> SaveChoice;
}

pub fn new_document(doc: &mut Document) {
    doc.clear();
    log::debug!("new document");
}

// Suggested directory and file name for the save dialog
fn save_target(doc: &Document) -> (Option<PathBuf>, String) {
    match doc.path() {
        Some(path) => (
            path.parent().map(Path::to_path_buf),
            path.file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| doc.file_name()),
        ),
        None => (None, doc.file_name()),
    }
}

fn prompt_and_write(doc: &mut Document, dialogs: &mut impl FileDialogs, title: &str) -> Result<bool> {
    let (directory, file_name) = save_target(doc);
    let Some(path) = dialogs.pick_save_path(title, directory.as_deref(), &file_name) else {
        log::debug!("{} cancelled", title);
        return Ok(false);
    };
    doc.write_to(&path)?;
    Ok(true)
}

/// Always prompts for a destination. `Ok(true)` when the file was written.
pub fn save_as(doc: &mut Document, dialogs: &mut impl FileDialogs) -> Result<bool> {
    prompt_and_write(doc, dialogs, "Save As")
}

/// Saves pending changes. `Ok(true)` when the caller may go on: nothing to
/// save, the user declined, or the file was written. `Ok(false)` on cancel.
pub fn save(doc: &mut Document, dialogs: &mut impl FileDialogs, confirm: bool) -> Result<bool> {
    if !doc.is_dirty() {
        return Ok(true);
    }

    if confirm {
        match dialogs.confirm_save(SAVE_PROMPT) {
            SaveChoice::No => return Ok(true),
            SaveChoice::Cancel => return Ok(false),
            SaveChoice::Yes => {}
        }
    }

    // First save of an untitled document needs a destination
    match doc.state() {
        DocState::UntitledClean | DocState::UntitledDirty => prompt_and_write(doc, dialogs, "Save"),
        DocState::SavedClean(path) | DocState::SavedDirty(path) => {
            let path = path.clone();
            doc.write_to(&path)?;
            Ok(true)
        }
    }
}

/// Replaces the buffer with a file chosen by the user, offering to save
/// pending changes first. `Ok(true)` when a file was loaded.
pub fn open(doc: &mut Document, dialogs: &mut impl FileDialogs) -> Result<bool> {
    if !save(doc, dialogs, true)? {
        return Ok(false);
    }

    let Some(path) = dialogs.pick_open_path("Open") else {
        return Ok(false);
    };

    if !path.exists() {
        log::debug!("open aborted, {} does not exist", path.display());
        return Ok(false);
    }

    *doc = Document::load(&path)?;
    Ok(true)
}
