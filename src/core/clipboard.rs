// clipboard module responsible for Copy/Cut/Paste menu commands
use super::document::Document;
use super::error::{EditorError, Result};
use super::selection::Selection;

pub trait ClipboardAccess {
    /// Plain text on the clipboard, `None` when it holds no text.
    fn get_text(&mut self) -> Result<Option<String>>;
    fn set_text(&mut self, text: &str) -> Result<()>;
}

pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    pub fn new() -> Result<Self> {
        let inner = arboard::Clipboard::new().map_err(|e| EditorError::Clipboard(e.to_string()))?;
        Ok(Self { inner })
    }
}

impl ClipboardAccess for SystemClipboard {
    fn get_text(&mut self) -> Result<Option<String>> {
        match self.inner.get_text() {
            Ok(text) => Ok(Some(text)),
            Err(arboard::Error::ContentNotAvailable) => Ok(None),
            Err(e) => Err(EditorError::Clipboard(e.to_string())),
        }
    }

    fn set_text(&mut self, text: &str) -> Result<()> {
        self.inner
            .set_text(text.to_string())
            .map_err(|e| EditorError::Clipboard(e.to_string()))
    }
}

// Returns whether anything was copied
pub fn copy(doc: &Document, selection: Selection, clipboard: &mut impl ClipboardAccess) -> Result<bool> {
    if !selection.is_active() {
        return Ok(false);
    }
    clipboard.set_text(doc.selected_text(selection))?;
    Ok(true)
}

// Returns the caret position after the cut, if anything was cut
pub fn cut(doc: &mut Document, selection: Selection, clipboard: &mut impl ClipboardAccess) -> Result<Option<usize>> {
    if !copy(doc, selection, clipboard)? {
        return Ok(None);
    }
    Ok(Some(doc.replace_range(selection.range(), "")))
}

// Replaces the selection with the clipboard text; returns the new caret position
pub fn paste(doc: &mut Document, selection: Selection, clipboard: &mut impl ClipboardAccess) -> Result<Option<usize>> {
    let Some(text) = clipboard.get_text()? else {
        return Ok(None);
    };
    Ok(Some(doc.replace_range(selection.range(), &text)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct MemoryClipboard {
        text: Option<String>,
        writes: usize,
    }

    impl ClipboardAccess for MemoryClipboard {
        fn get_text(&mut self) -> Result<Option<String>> {
            Ok(self.text.clone())
        }

        fn set_text(&mut self, text: &str) -> Result<()> {
            self.writes += 1;
            self.text = Some(text.to_string());
            Ok(())
        }
    }

    fn doc(text: &str) -> Document {
        let mut doc = Document::new();
        doc.text_mut().push_str(text);
        doc
    }

    #[test]
    fn test_empty_selection_does_not_touch_clipboard() {
        let mut document = doc("nothing selected");
        let mut clipboard = MemoryClipboard {
            text: Some("before".into()),
            writes: 0,
        };

        assert!(!copy(&document, Selection::new(3), &mut clipboard).unwrap());
        assert_eq!(cut(&mut document, Selection::new(3), &mut clipboard).unwrap(), None);
        assert_eq!(clipboard.writes, 0);
        assert_eq!(clipboard.text.as_deref(), Some("before"));
        assert_eq!(document.text(), "nothing selected");
        assert!(!document.is_dirty());
    }

    #[test]
    fn test_copy_puts_selection_on_clipboard() {
        let document = doc("copy this word");
        let mut clipboard = MemoryClipboard::default();
        assert!(copy(&document, Selection::between(9, 5), &mut clipboard).unwrap());
        assert_eq!(clipboard.text.as_deref(), Some("this"));
        assert!(!document.is_dirty());
    }

    #[test]
    fn test_cut_removes_selection_and_marks_dirty() {
        let mut document = doc("keep drop keep");
        let mut clipboard = MemoryClipboard::default();
        let caret = cut(&mut document, Selection::between(5, 10), &mut clipboard).unwrap();
        assert_eq!(caret, Some(5));
        assert_eq!(document.text(), "keep keep");
        assert_eq!(clipboard.text.as_deref(), Some("drop "));
        assert!(document.is_dirty());
    }

    #[test]
    fn test_paste_replaces_selection() {
        let mut document = doc("hello world");
        let mut clipboard = MemoryClipboard {
            text: Some("pasaule".into()),
            writes: 0,
        };
        let caret = paste(&mut document, Selection::between(6, 11), &mut clipboard).unwrap();
        assert_eq!(document.text(), "hello pasaule");
        assert_eq!(caret, Some(13));
        assert!(document.is_dirty());
    }

    #[test]
    fn test_paste_without_text_is_noop() {
        let mut document = doc("unchanged");
        let mut clipboard = MemoryClipboard::default();
        assert_eq!(paste(&mut document, Selection::new(0), &mut clipboard).unwrap(), None);
        assert_eq!(document.text(), "unchanged");
        assert!(!document.is_dirty());
    }
}
