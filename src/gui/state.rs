// state - the open document plus what the text widget reports about it
use crate::core::{
    clipboard::{self, SystemClipboard},
    document::Document,
    error::Result,
    selection::Selection,
    settings::FontChoice,
};

pub struct EditorState {
    pub document: Document,
    pub selection: Selection,
    pub pending_selection: Option<Selection>, // pushed into the widget on the next frame
    pub font: FontChoice,
}

impl EditorState {
    pub fn new(document: Document, font: FontChoice) -> Self {
        Self {
            document,
            selection: Selection::default(),
            pending_selection: None,
            font,
        }
    }

    pub fn title(&self) -> String {
        self.document.title()
    }

    // After the buffer is replaced wholesale the old caret means nothing
    pub fn reset_caret(&mut self) {
        self.selection = Selection::default();
        self.pending_selection = Some(Selection::default());
    }

    fn place_caret(&mut self, caret: usize) {
        self.selection = Selection::new(caret);
        self.pending_selection = Some(self.selection);
    }

    // Copy selection to clipboard
    pub fn copy_selection(&self) -> Result<()> {
        if !self.selection.is_active() {
            return Ok(());
        }
        let mut system = SystemClipboard::new()?;
        clipboard::copy(&self.document, self.selection, &mut system)?;
        Ok(())
    }

    // Cut selection to clipboard
    pub fn cut_selection(&mut self) -> Result<()> {
        if !self.selection.is_active() {
            return Ok(());
        }
        let mut system = SystemClipboard::new()?;
        if let Some(caret) = clipboard::cut(&mut self.document, self.selection, &mut system)? {
            self.place_caret(caret);
        }
        Ok(())
    }

    // Paste from clipboard over the selection
    pub fn paste_from_clipboard(&mut self) -> Result<()> {
        let mut system = SystemClipboard::new()?;
        if let Some(caret) = clipboard::paste(&mut self.document, self.selection, &mut system)? {
            self.place_caret(caret);
        }
        Ok(())
    }

    pub fn select_all(&mut self) {
        self.selection = Selection::between(0, self.document.char_count());
        self.pending_selection = Some(self.selection);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_all_covers_buffer() {
        let mut doc = Document::new();
        doc.text_mut().push_str("čau!");
        let mut state = EditorState::new(doc, FontChoice::default());
        state.select_all();
        assert_eq!(state.selection.range(), 0..4);
        assert_eq!(state.pending_selection, Some(state.selection));
    }

    #[test]
    fn test_copy_without_selection_skips_clipboard() {
        // must not even open the system clipboard, so this passes headless
        let state = EditorState::new(Document::new(), FontChoice::default());
        assert!(state.copy_selection().is_ok());
    }

    #[test]
    fn test_reset_caret_moves_to_start() {
        let mut state = EditorState::new(Document::new(), FontChoice::default());
        state.selection = Selection::between(2, 5);
        state.reset_caret();
        assert_eq!(state.selection, Selection::new(0));
        assert_eq!(state.pending_selection, Some(Selection::new(0)));
    }
}
