// dialogs - OS-native file pickers and message boxes
use crate::core::document::PRODUCT_NAME;
use crate::core::file_ops::{FileDialogs, SaveChoice, FILE_FILTERS};
use rfd::{FileDialog, MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};
use std::path::{Path, PathBuf};

#[derive(Default)]
pub struct NativeDialogs;

fn with_text_filters(mut dialog: FileDialog) -> FileDialog {
    for (label, extensions) in FILE_FILTERS {
        dialog = dialog.add_filter(*label, *extensions);
    }
    dialog
}

impl NativeDialogs {
    pub fn pick_pdf_path(&mut self, file_name: &str) -> Option<PathBuf> {
        FileDialog::new()
            .set_title("Print to PDF")
            .add_filter("PDF documents (*.pdf)", &["pdf"])
            .set_file_name(file_name)
            .save_file()
    }
}

impl FileDialogs for NativeDialogs {
    fn pick_save_path(&mut self, title: &str, directory: Option<&Path>, file_name: &str)
        -> Option<PathBuf> {
        let mut dialog = with_text_filters(FileDialog::new().set_title(title)).set_file_name(file_name);
        if let Some(directory) = directory {
            dialog = dialog.set_directory(directory);
        }
        dialog.save_file()
    }

    fn pick_open_path(&mut self, title: &str) -> Option<PathBuf> {
        with_text_filters(FileDialog::new().set_title(title)).pick_file()
    }

    fn confirm_save(&mut self, prompt: &str) -> SaveChoice {
        let answer = MessageDialog::new()
            .set_title(PRODUCT_NAME)
            .set_description(prompt)
            .set_level(MessageLevel::Warning)
            .set_buttons(MessageButtons::YesNoCancel)
            .show();
        match answer {
            MessageDialogResult::Yes => SaveChoice::Yes,
            MessageDialogResult::No => SaveChoice::No,
            _ => SaveChoice::Cancel,
        }
    }
}
