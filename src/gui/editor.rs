// src/gui/editor.rs - the document text area
use super::{state::EditorState, themes};
use crate::core::selection::Selection;
use egui::text::{CCursor, CCursorRange};
use egui::{Id, Response, Ui};

const EDITOR_ID: &str = "document_text";

pub struct EditorPanel<'a> {
    state: &'a mut EditorState,
    accepts_input: bool,
}

impl<'a> EditorPanel<'a> {
    pub fn new(state: &'a mut EditorState, accepts_input: bool) -> Self {
        Self { state, accepts_input }
    }

    pub fn show(&mut self, ui: &mut Ui) -> Response {
        let id = Id::new(EDITOR_ID);

        if let Some(selection) = self.state.pending_selection.take() {
            Self::push_selection(ui.ctx(), id, selection);
        }

        let font_id = themes::font_id(&self.state.font);
        let accepts_input = self.accepts_input;
        let text = self.state.document.text_mut();

        let output = egui::ScrollArea::both()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                egui::TextEdit::multiline(text)
                    .id(id)
                    .font(font_id)
                    .frame(false)
                    .lock_focus(true)
                    .desired_width(f32::INFINITY)
                    .min_size(ui.available_size())
                    .interactive(accepts_input)
                    .show(ui)
            })
            .inner;

        // Any change made by the widget (typing, its own clipboard keys, undo) dirties the document
        if output.response.changed() {
            self.state.document.mark_edited();
        }

        if let Some(range) = output.cursor_range {
            self.state.selection = Selection::between(range.secondary.index, range.primary.index);
        }

        output.response
    }

    // Move the widget's caret/selection and give it focus
    fn push_selection(ctx: &egui::Context, id: Id, selection: Selection) {
        let mut edit_state = egui::text_edit::TextEditState::load(ctx, id).unwrap_or_default();
        edit_state.cursor.set_char_range(Some(CCursorRange::two(
            CCursor::new(selection.anchor),
            CCursor::new(selection.cursor),
        )));
        edit_state.store(ctx, id);
        ctx.memory_mut(|m| m.request_focus(id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{document::Document, settings::FontChoice};

    // One headless frame with the editor filling the window
    fn frame(ctx: &egui::Context, state: &mut EditorState, events: Vec<egui::Event>) {
        let input = egui::RawInput {
            events,
            ..Default::default()
        };
        let _ = ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                EditorPanel::new(state, true).show(ui);
            });
        });
    }

    fn focused_editor() -> (egui::Context, EditorState) {
        let ctx = egui::Context::default();
        let mut state = EditorState::new(Document::new(), FontChoice::default());
        state.reset_caret();
        frame(&ctx, &mut state, Vec::new());
        (ctx, state)
    }

    #[test]
    fn test_typing_marks_document_dirty() {
        let (ctx, mut state) = focused_editor();
        assert!(!state.document.is_dirty());

        frame(&ctx, &mut state, vec![egui::Event::Text("labdien".to_string())]);
        assert_eq!(state.document.text(), "labdien");
        assert!(state.document.is_dirty());
        assert_eq!(state.selection, Selection::new(7));
    }

    #[test]
    fn test_idle_frames_keep_document_clean() {
        let (ctx, mut state) = focused_editor();
        frame(&ctx, &mut state, Vec::new());
        assert!(!state.document.is_dirty());
        assert_eq!(state.document.text(), "");
    }
}
