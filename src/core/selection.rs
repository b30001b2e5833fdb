// selection module - the widget's selection as character indices into the buffer
use std::ops::Range;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Selection {
    pub anchor: usize, // Where selection started
    pub cursor: usize, // Current caret position
}

impl Selection {
    pub fn new(pos: usize) -> Self {
        Self {
            anchor: pos,
            cursor: pos,
        }
    }

    pub fn between(anchor: usize, cursor: usize) -> Self {
        Self { anchor, cursor }
    }

    pub fn is_active(&self) -> bool {
        self.anchor != self.cursor
    }

    // Ordered char range (anchor might be after cursor)
    pub fn range(&self) -> Range<usize> {
        self.anchor.min(self.cursor)..self.anchor.max(self.cursor)
    }
}

// Convert a char range into a byte range of `text`, clamped to its end
pub fn byte_range(text: &str, chars: Range<usize>) -> Range<usize> {
    let to_byte = |idx: usize| {
        text.char_indices()
            .nth(idx)
            .map(|(byte, _)| byte)
            .unwrap_or(text.len())
    };
    let start = to_byte(chars.start);
    let end = to_byte(chars.end).max(start);
    start..end
}
