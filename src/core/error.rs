// error module - every failure a menu command can report
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("{}: {}", path.display(), source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Clipboard error: {0}")]
    Clipboard(String),
    #[error("Print error: {0}")]
    Print(String),
    #[error("Settings error: {0}")]
    Settings(#[from] serde_json::Error),
}

impl EditorError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, EditorError>;
