// app module - the editor window: menus, command dispatch and dialogs
use super::{dialogs::NativeDialogs, editor::EditorPanel, state::EditorState};
use crate::core::{
    actions::Action,
    document::{Document, PRODUCT_NAME},
    error::EditorError,
    file_ops,
    print::PrintJob,
    settings::{FontChoice, FontFamilyKind, Paper, Settings, MAX_FONT_SIZE, MIN_FONT_SIZE},
    shortcuts::Shortcuts,
};
use egui::{Context, ViewportCommand};
use std::path::PathBuf;

struct PrintWindow {
    job: PrintJob,
    page: usize, // 0-based page shown in the preview
    message: Option<String>,
}

pub struct TextEditorApp {
    state: EditorState,
    dialogs: NativeDialogs,
    settings: Settings,
    settings_path: PathBuf,
    error: Option<String>,
    show_about: bool,
    font_dialog: Option<FontChoice>,
    print_window: Option<PrintWindow>,
    shown_title: String,
}

impl TextEditorApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        file_path: Option<PathBuf>,
        settings: Settings,
        settings_path: PathBuf,
    ) -> Self {
        let mut error = None;
        let document = match file_path {
            Some(path) => Document::load(&path).unwrap_or_else(|e| {
                log::error!("{}", e);
                error = Some(e.to_string());
                Document::new()
            }),
            None => Document::new(),
        };

        let mut app = Self::with_document(document, settings, settings_path);
        app.error = error;
        app
    }

    fn with_document(document: Document, settings: Settings, settings_path: PathBuf) -> Self {
        Self {
            state: EditorState::new(document, settings.font),
            dialogs: NativeDialogs,
            settings,
            settings_path,
            error: None,
            show_about: false,
            font_dialog: None,
            print_window: None,
            shown_title: String::new(),
        }
    }

    fn modal_open(&self) -> bool {
        self.error.is_some() || self.show_about || self.font_dialog.is_some() || self.print_window.is_some()
    }

    fn report(&mut self, error: EditorError) {
        log::error!("{}", error);
        self.error = Some(error.to_string());
    }

    fn save_settings(&mut self) {
        if let Err(e) = self.settings.save(&self.settings_path) {
            self.report(e);
        }
    }

    fn menu_item(ui: &mut egui::Ui, text: &str, action: Action, chosen: &mut Option<Action>) {
        let mut button = egui::Button::new(text);
        if let Some(shortcut) = Shortcuts::label(action) {
            button = button.shortcut_text(shortcut);
        }
        if ui.add(button).clicked() {
            *chosen = Some(action);
            ui.close();
        }
    }

    fn menu_bar(&mut self, ctx: &Context) {
        let mut chosen = None;
        let enabled = !self.modal_open();

        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            ui.add_enabled_ui(enabled, |ui| {
                egui::MenuBar::new().ui(ui, |ui| {
                    ui.menu_button("File", |ui| {
                        Self::menu_item(ui, "New", Action::New, &mut chosen);
                        Self::menu_item(ui, "Open...", Action::Open, &mut chosen);
                        Self::menu_item(ui, "Save", Action::Save, &mut chosen);
                        Self::menu_item(ui, "Save As...", Action::SaveAs, &mut chosen);
                        ui.separator();
                        Self::menu_item(ui, "Print...", Action::Print, &mut chosen);
                        ui.separator();
                        Self::menu_item(ui, "Exit", Action::Exit, &mut chosen);
                    });

                    ui.menu_button("Edit", |ui| {
                        Self::menu_item(ui, "Cut", Action::Cut, &mut chosen);
                        Self::menu_item(ui, "Copy", Action::Copy, &mut chosen);
                        Self::menu_item(ui, "Paste", Action::Paste, &mut chosen);
                        ui.separator();
                        Self::menu_item(ui, "Select All", Action::SelectAll, &mut chosen);
                    });

                    ui.menu_button("Format", |ui| {
                        Self::menu_item(ui, "Font...", Action::Font, &mut chosen);
                    });

                    ui.menu_button("Help", |ui| {
                        Self::menu_item(ui, &format!("About {}", PRODUCT_NAME), Action::About, &mut chosen);
                    });
                });
            });
        });

        if let Some(action) = chosen {
            self.handle_action(ctx, action);
        }
    }

    fn status_bar(&mut self, ctx: &Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(self.state.document.status());

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("{} pt", self.state.font.size));
                    ui.separator();
                    ui.label(format!("Characters: {}", self.state.document.char_count()));
                });
            });
        });
    }

    fn handle_shortcuts(&mut self, ctx: &Context) {
        if self.modal_open() {
            return;
        }

        let actions = ctx.input_mut(Shortcuts::resolve);
        for action in actions {
            self.handle_action(ctx, action);
        }
    }

    // Centralized action handler; failures end up in the error window
    fn handle_action(&mut self, ctx: &Context, action: Action) {
        if self.modal_open() {
            log::debug!("{:?} ignored while a dialog is open", action);
            return;
        }

        let result = match action {
            Action::New => {
                file_ops::new_document(&mut self.state.document);
                self.state.reset_caret();
                Ok(())
            }
            Action::Open => file_ops::open(&mut self.state.document, &mut self.dialogs).map(|opened| {
                if opened {
                    self.state.reset_caret();
                }
            }),
            Action::Save => file_ops::save(&mut self.state.document, &mut self.dialogs, false).map(drop),
            Action::SaveAs => file_ops::save_as(&mut self.state.document, &mut self.dialogs).map(drop),
            Action::Exit => {
                ctx.send_viewport_cmd(ViewportCommand::Close);
                Ok(())
            }
            Action::Copy => self.state.copy_selection(),
            Action::Cut => self.state.cut_selection(),
            Action::Paste => self.state.paste_from_clipboard(),
            Action::SelectAll => {
                self.state.select_all();
                Ok(())
            }
            Action::Font => {
                self.font_dialog = Some(self.state.font);
                Ok(())
            }
            Action::About => {
                self.show_about = true;
                Ok(())
            }
            Action::Print => {
                self.print_window = Some(PrintWindow {
                    job: PrintJob::new(
                        self.state.title(),
                        self.state.document.text(),
                        self.state.font,
                        self.settings.page_setup,
                    ),
                    page: 0,
                    message: None,
                });
                Ok(())
            }
        };

        if let Err(e) = result {
            self.report(e);
        }
    }

    fn sync_title(&mut self, ctx: &Context) {
        let title = self.state.title();
        if title != self.shown_title {
            ctx.send_viewport_cmd(ViewportCommand::Title(title.clone()));
            self.shown_title = title;
        }
    }

    fn show_error_window(&mut self, ctx: &Context) {
        let Some(message) = self.error.as_deref() else {
            return;
        };
        let mut close = false;

        egui::Window::new(PRODUCT_NAME)
            .id(egui::Id::new("error_window"))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(message);
                ui.add_space(8.0);
                if ui.button("OK").clicked() || ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    close = true;
                }
            });

        if close {
            self.error = None;
        }
    }

    fn show_about_window(&mut self, ctx: &Context) {
        let mut open = self.show_about;
        let mut close = false;

        egui::Window::new(format!("About {}", PRODUCT_NAME))
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.heading(PRODUCT_NAME);
                ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                ui.label(env!("CARGO_PKG_DESCRIPTION"));
                ui.label(env!("CARGO_PKG_AUTHORS"));
                ui.add_space(8.0);
                if ui.button("OK").clicked() {
                    close = true;
                }
            });

        self.show_about = open && !close;
    }

    fn show_font_window(&mut self, ctx: &Context) {
        let Some(mut choice) = self.font_dialog else {
            return;
        };
        let mut apply = false;
        let mut cancel = false;

        egui::Window::new("Font")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                egui::Grid::new("font_grid").num_columns(2).show(ui, |ui| {
                    ui.label("Family:");
                    egui::ComboBox::from_id_salt("font_family")
                        .selected_text(choice.family.label())
                        .show_ui(ui, |ui| {
                            for family in [FontFamilyKind::Monospace, FontFamilyKind::Proportional] {
                                ui.selectable_value(&mut choice.family, family, family.label());
                            }
                        });
                    ui.end_row();

                    ui.label("Size:");
                    ui.add(egui::Slider::new(&mut choice.size, MIN_FONT_SIZE..=MAX_FONT_SIZE).suffix(" pt"));
                    ui.end_row();
                });

                ui.separator();
                ui.label(egui::RichText::new("AaBbCc ĀāČčŠš 0123").font(super::themes::font_id(&choice)));
                ui.separator();

                ui.horizontal(|ui| {
                    if ui.button("OK").clicked() {
                        apply = true;
                    }
                    if ui.button("Cancel").clicked() || ui.input(|i| i.key_pressed(egui::Key::Escape)) {
                        cancel = true;
                    }
                });
            });

        if apply {
            let choice = choice.clamped();
            self.state.font = choice;
            self.settings.font = choice;
            self.font_dialog = None;
            self.save_settings();
        } else if cancel {
            self.font_dialog = None;
        } else {
            self.font_dialog = Some(choice);
        }
    }

    fn show_print_window(&mut self, ctx: &Context) {
        let Some(window) = self.print_window.as_mut() else {
            return;
        };
        let mut setup = window.job.setup();
        let mut export = false;
        let mut close = false;

        egui::Window::new("Print")
            .collapsible(false)
            .resizable(true)
            .default_size([520.0, 640.0])
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(format!("Document: {}", window.job.document_name()));

                ui.horizontal(|ui| {
                    ui.label("Paper:");
                    egui::ComboBox::from_id_salt("paper")
                        .selected_text(setup.paper.label())
                        .show_ui(ui, |ui| {
                            for paper in [Paper::A4, Paper::Letter] {
                                ui.selectable_value(&mut setup.paper, paper, paper.label());
                            }
                        });
                    ui.label("Margins:");
                    ui.add(egui::Slider::new(&mut setup.margin_mm, 5.0..=50.0).suffix(" mm"));
                });

                if setup != window.job.setup() {
                    window.job.set_setup(setup);
                }

                let page_count = window.job.page_count();
                window.page = window.page.min(page_count.saturating_sub(1));

                ui.separator();
                ui.horizontal(|ui| {
                    if ui.add_enabled(window.page > 0, egui::Button::new("◀")).clicked() {
                        window.page -= 1;
                    }
                    ui.label(format!("Page {} of {}", window.page + 1, page_count));
                    if ui.add_enabled(window.page + 1 < page_count, egui::Button::new("▶")).clicked() {
                        window.page += 1;
                    }
                });

                egui::Frame::canvas(ui.style())
                    .fill(egui::Color32::WHITE)
                    .inner_margin(12.0)
                    .show(ui, |ui| {
                        egui::ScrollArea::vertical()
                            .max_height(420.0)
                            .auto_shrink([false, false])
                            .show(ui, |ui| {
                                if let Some(page_text) = window.job.page_text(window.page) {
                                    let preview_font = egui::FontId::monospace(window.job.font().size * 0.75);
                                    for line in window.job.page_lines(page_text) {
                                        ui.label(egui::RichText::new(line).font(preview_font.clone()));
                                    }
                                }
                            });
                    });

                if let Some(message) = &window.message {
                    ui.label(message);
                }

                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button("Save as PDF...").clicked() {
                        export = true;
                    }
                    if ui.button("Close").clicked() || ui.input(|i| i.key_pressed(egui::Key::Escape)) {
                        close = true;
                    }
                });
            });

        if export {
            let suggested = pdf_file_name(&self.state.document.file_name());
            if let Some(path) = self.dialogs.pick_pdf_path(&suggested) {
                match window.job.export_pdf(&path) {
                    Ok(pages) => {
                        window.message = Some(format!("Printed {} page(s) to {}", pages, path.display()))
                    }
                    Err(e) => {
                        self.report(e);
                        self.print_window = None;
                        return;
                    }
                }
            }
        }

        if close {
            if self.settings.page_setup != setup {
                self.settings.page_setup = setup;
                self.save_settings();
            }
            self.print_window = None;
        }
    }
}

// "notes.txt" -> "notes.pdf"
fn pdf_file_name(file_name: &str) -> String {
    let path = std::path::Path::new(file_name);
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document".to_string());
    format!("{}.pdf", stem)
}

impl eframe::App for TextEditorApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_shortcuts(ctx);
        self.menu_bar(ctx);
        self.status_bar(ctx);

        let accepts_input = !self.modal_open();
        egui::CentralPanel::default().show(ctx, |ui| {
            EditorPanel::new(&mut self.state, accepts_input).show(ui);
        });

        self.show_font_window(ctx);
        self.show_print_window(ctx);
        self.show_about_window(ctx);
        self.show_error_window(ctx);

        self.sync_title(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_with_text(text: &str) -> TextEditorApp {
        let mut document = Document::new();
        document.text_mut().push_str(text);
        document.mark_edited();
        TextEditorApp::with_document(document, Settings::default(), PathBuf::from("settings.json"))
    }

    #[test]
    fn test_error_window_blocks_actions() {
        let ctx = Context::default();
        let mut app = app_with_text("unsaved work");
        app.error = Some("disk full".to_string());

        app.handle_action(&ctx, Action::New);
        app.handle_action(&ctx, Action::Font);
        assert_eq!(app.state.document.text(), "unsaved work");
        assert!(app.state.document.is_dirty());
        assert!(app.font_dialog.is_none());

        app.error = None;
        app.handle_action(&ctx, Action::New);
        assert_eq!(app.state.document.text(), "");
        assert!(!app.state.document.is_dirty());
    }

    #[test]
    fn test_print_window_blocks_other_dialogs() {
        let ctx = Context::default();
        let mut app = app_with_text("page one");
        app.handle_action(&ctx, Action::Print);
        assert!(app.print_window.is_some());

        app.handle_action(&ctx, Action::Font);
        app.handle_action(&ctx, Action::About);
        assert!(app.font_dialog.is_none());
        assert!(!app.show_about);
    }

    #[test]
    fn test_pdf_file_name() {
        assert_eq!(pdf_file_name("jauns.txt"), "jauns.pdf");
        assert_eq!(pdf_file_name("/home/user/notes.md"), "notes.pdf");
        assert_eq!(pdf_file_name(""), "document.pdf");
    }
}
