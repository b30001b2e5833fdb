mod app;
mod dialogs;
mod editor;
mod state;
mod themes;

pub use app::TextEditorApp;

use crate::core::{document::PRODUCT_NAME, settings::Settings};
use std::path::PathBuf;

/// Entry point for the editor window
pub fn run(file_path: Option<PathBuf>) -> anyhow::Result<()> {
    let settings_path = Settings::default_path();
    let settings = Settings::load_or_default(&settings_path);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(PRODUCT_NAME)
            .with_inner_size([900.0, 650.0])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };

    eframe::run_native(
        PRODUCT_NAME,
        options,
        Box::new(move |cc| {
            themes::apply_theme(&cc.egui_ctx);
            Ok(Box::new(TextEditorApp::new(cc, file_path, settings, settings_path)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("failed to open the editor window: {}", e))
}
