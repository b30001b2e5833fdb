// pagination module - splitting a document into printed pages
//
// Each page takes as much of the remaining text as the measurer says fits in
// the printable area. The measurer is a trait so layout can be swapped or
// mocked; MonospaceMeasurer is the layout used for real print jobs.
use super::settings::{FontChoice, PageBounds};
use std::ops::Range;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// How much of a text fits on one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Fit {
    pub chars: usize,
    pub lines: usize,
}

pub trait TextMeasurer {
    fn measure(&self, text: &str, font: &FontChoice, bounds: PageBounds) -> Fit;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page<'a> {
    pub number: usize, // 1-based
    pub text: &'a str,
    pub has_more_pages: bool,
}

pub struct Paginator<'a, M: TextMeasurer> {
    text: &'a str,
    offset: usize, // print cursor, as a byte offset into `text`
    font: FontChoice,
    bounds: PageBounds,
    measurer: &'a M,
    printed: usize,
    finished: bool,
}

impl<'a, M: TextMeasurer> Paginator<'a, M> {
    pub fn new(text: &'a str, font: FontChoice, bounds: PageBounds, measurer: &'a M) -> Self {
        Self {
            text,
            offset: 0,
            font,
            bounds,
            measurer,
            printed: 0,
            finished: false,
        }
    }

    /// Text not yet printed. Once the job is done this is the whole document again.
    pub fn remaining(&self) -> &'a str {
        &self.text[self.offset..]
    }
}

impl<'a, M: TextMeasurer> Iterator for Paginator<'a, M> {
    type Item = Page<'a>;

    fn next(&mut self) -> Option<Page<'a>> {
        if self.finished {
            return None;
        }

        let remaining = self.remaining();
        let fit = self.measurer.measure(remaining, &self.font, self.bounds);
        let mut consumed = remaining
            .char_indices()
            .nth(fit.chars)
            .map(|(byte, _)| byte)
            .unwrap_or(remaining.len());

        if consumed == 0 && !remaining.is_empty() {
            // Nothing fits; take one grapheme so the job still terminates
            consumed = remaining.graphemes(true).next().map_or(remaining.len(), str::len);
            log::warn!("page {} too small for any text, forcing progress", self.printed + 1);
        }

        let page_text = &remaining[..consumed];
        self.offset += consumed;
        self.printed += 1;

        let has_more_pages = self.offset < self.text.len();
        if !has_more_pages {
            self.offset = 0;
            self.finished = true;
        }

        Some(Page {
            number: self.printed,
            text: page_text,
            has_more_pages,
        })
    }
}

/// Fixed-pitch layout: every display column advances 0.6 em (Courier).
#[derive(Debug, Clone, Copy)]
pub struct MonospaceMeasurer {
    pub advance_em: f32,
    pub line_spacing: f32,
}

impl Default for MonospaceMeasurer {
    fn default() -> Self {
        Self {
            advance_em: 0.6,
            line_spacing: 1.2,
        }
    }
}

// One laid-out line: what to draw, and how far the cursor moves past it
#[derive(Debug, Clone, PartialEq, Eq)]
struct LineBreak {
    visible: usize,
    consumed: usize,
}

fn is_blank(grapheme: &str) -> bool {
    grapheme.chars().all(char::is_whitespace)
}

fn next_line(text: &str, columns: usize) -> LineBreak {
    let mut width = 0;
    let mut last_break: Option<usize> = None; // byte offset just past whitespace

    for (idx, grapheme) in text.grapheme_indices(true) {
        if grapheme == "\n" || grapheme == "\r\n" {
            return LineBreak {
                visible: idx,
                consumed: idx + grapheme.len(),
            };
        }

        let w = grapheme.width();
        if width > 0 && width + w > columns {
            if is_blank(grapheme) {
                // swallow the space the line breaks on
                return LineBreak {
                    visible: idx,
                    consumed: idx + grapheme.len(),
                };
            }
            return match last_break {
                Some(at) => LineBreak {
                    visible: text[..at].trim_end().len(),
                    consumed: at,
                },
                None => LineBreak {
                    visible: idx,
                    consumed: idx,
                },
            };
        }

        width += w;
        if is_blank(grapheme) {
            last_break = Some(idx + grapheme.len());
        }
    }

    LineBreak {
        visible: text.len(),
        consumed: text.len(),
    }
}

impl MonospaceMeasurer {
    pub fn columns(&self, font: &FontChoice, width: f32) -> usize {
        let advance = self.advance_em * font.size;
        ((width / advance).floor() as usize).max(1)
    }

    pub fn line_height(&self, font: &FontChoice) -> f32 {
        self.line_spacing * font.size
    }

    pub fn lines_per_page(&self, font: &FontChoice, height: f32) -> usize {
        ((height / self.line_height(font)).floor() as usize).max(1)
    }

    /// Byte ranges of the visible lines of `text` when wrapped to `width` points.
    pub fn wrap_lines(&self, text: &str, font: &FontChoice, width: f32) -> Vec<Range<usize>> {
        let columns = self.columns(font, width);
        let mut lines = Vec::new();
        let mut start = 0;
        while start < text.len() {
            let line = next_line(&text[start..], columns);
            lines.push(start..start + line.visible);
            start += line.consumed;
        }
        lines
    }
}

impl TextMeasurer for MonospaceMeasurer {
    fn measure(&self, text: &str, font: &FontChoice, bounds: PageBounds) -> Fit {
        let columns = self.columns(font, bounds.width);
        let max_lines = self.lines_per_page(font, bounds.height);

        let mut consumed = 0;
        let mut lines = 0;
        while lines < max_lines && consumed < text.len() {
            consumed += next_line(&text[consumed..], columns).consumed;
            lines += 1;
        }

        Fit {
            chars: text[..consumed].chars().count(),
            lines,
        }
    }
}
