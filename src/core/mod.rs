// core - everything the editor does that doesn't draw pixels
pub mod actions;
pub mod clipboard;
pub mod document;
pub mod error;
pub mod file_ops;
pub mod pagination;
pub mod print;
pub mod selection;
pub mod settings;
pub mod shortcuts;
