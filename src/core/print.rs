// print module - laying out a print job and rendering it to PDF
use super::error::{EditorError, Result};
use super::pagination::{MonospaceMeasurer, Paginator};
use super::settings::{pt_to_mm, FontChoice, PageSetup};
use printpdf::{BuiltinFont, Mm, PdfDocument};
use std::fs;
use std::ops::Range;
use std::path::Path;

pub struct PrintJob {
    document_name: String,
    text: String,
    font: FontChoice,
    setup: PageSetup,
    measurer: MonospaceMeasurer,
    layout: Vec<Range<usize>>, // byte range of each page for the current setup
}

impl PrintJob {
    pub fn new(document_name: impl Into<String>, text: impl Into<String>, font: FontChoice, setup: PageSetup) -> Self {
        let mut job = Self {
            document_name: document_name.into(),
            text: text.into(),
            font: font.clamped(),
            setup,
            measurer: MonospaceMeasurer::default(),
            layout: Vec::new(),
        };
        job.layout = job.paginate();
        job
    }

    pub fn document_name(&self) -> &str {
        &self.document_name
    }

    pub fn setup(&self) -> PageSetup {
        self.setup
    }

    pub fn font(&self) -> FontChoice {
        self.font
    }

    // Changing the paper or margins lays the document out again
    pub fn set_setup(&mut self, setup: PageSetup) {
        if setup != self.setup {
            self.setup = setup;
            self.layout = self.paginate();
        }
    }

    // A fresh pass over the document; every call starts from page one
    pub fn pages(&self) -> Paginator<'_, MonospaceMeasurer> {
        Paginator::new(&self.text, self.font, self.setup.bounds(), &self.measurer)
    }

    fn paginate(&self) -> Vec<Range<usize>> {
        let mut layout = Vec::new();
        let mut start = 0;
        for page in self.pages() {
            let end = start + page.text.len();
            layout.push(start..end);
            start = end;
        }
        log::debug!("'{}' laid out on {} page(s)", self.document_name, layout.len());
        layout
    }

    pub fn page_count(&self) -> usize {
        self.layout.len()
    }

    /// Text of the 0-based page `index`, from the current layout.
    pub fn page_text(&self, index: usize) -> Option<&str> {
        self.layout.get(index).map(|range| &self.text[range.clone()])
    }

    /// The lines of one page as they will be drawn.
    pub fn page_lines<'p>(&self, page_text: &'p str) -> Vec<&'p str> {
        self.measurer
            .wrap_lines(page_text, &self.font, self.setup.bounds().width)
            .into_iter()
            .map(|range| &page_text[range])
            .collect()
    }

    pub fn render_pdf(&self) -> Result<Vec<u8>> {
        let (width, height) = self.setup.paper.size_mm();
        let margin = self.setup.margin_mm.max(0.0);
        let line_height = pt_to_mm(self.measurer.line_height(&self.font));
        let first_baseline = height - margin - pt_to_mm(self.font.size);

        let (doc, first_page, first_layer) =
            PdfDocument::new(self.document_name.as_str(), Mm(width), Mm(height), "Layer 1");
        let courier = doc
            .add_builtin_font(BuiltinFont::Courier)
            .map_err(|e| EditorError::Print(format!("{:?}", e)))?;

        for page in self.pages() {
            if !page.has_more_pages {
                log::debug!("rendering last page {}", page.number);
            }
            let (page_index, layer_index) = if page.number == 1 {
                (first_page, first_layer)
            } else {
                doc.add_page(Mm(width), Mm(height), "Layer 1")
            };
            let layer = doc.get_page(page_index).get_layer(layer_index);

            let mut y = first_baseline;
            for line in self.page_lines(page.text) {
                if !line.is_empty() {
                    layer.use_text(line, self.font.size, Mm(margin), Mm(y), &courier);
                }
                y -= line_height;
            }
        }

        doc.save_to_bytes()
            .map_err(|e| EditorError::Print(format!("{:?}", e)))
    }

    // Returns the number of pages written
    pub fn export_pdf(&self, path: &Path) -> Result<usize> {
        let bytes = self.render_pdf()?;
        fs::write(path, bytes).map_err(|e| EditorError::io(path, e))?;
        let pages = self.page_count();
        log::info!("printed {} page(s) of '{}' to {}", pages, self.document_name, path.display());
        Ok(pages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::settings::{FontFamilyKind, Paper};

    fn job(text: &str) -> PrintJob {
        PrintJob::new(
            "Text Editor - jauns.txt",
            text,
            FontChoice {
                family: FontFamilyKind::Monospace,
                size: 12.0,
            },
            PageSetup::default(),
        )
    }

    #[test]
    fn test_short_document_is_one_page() {
        let job = job("Labdien!\nSecond line.");
        assert_eq!(job.page_count(), 1);
        let page = job.pages().next().unwrap();
        assert_eq!(job.page_lines(page.text), vec!["Labdien!", "Second line."]);
    }

    #[test]
    fn test_long_document_spans_pages_without_losing_text() {
        let text: String = (1..=200).map(|n| format!("line {n}\n")).collect();
        let job = job(&text);
        let pages: Vec<&str> = job.pages().map(|p| p.text).collect();
        assert!(pages.len() > 1);
        assert_eq!(pages.concat(), text);
        // the next job starts over
        assert_eq!(job.pages().next().unwrap().number, 1);
    }

    #[test]
    fn test_smaller_paper_needs_more_pages() {
        let text: String = (1..=300).map(|n| format!("row {n}\n")).collect();
        let mut job = job(&text);
        let a4 = job.page_count();
        job.set_setup(PageSetup {
            paper: Paper::Letter,
            margin_mm: 40.0,
        });
        assert!(job.page_count() > a4);
    }

    #[test]
    fn test_layout_follows_page_setup() {
        let text: String = (1..=150).map(|n| format!("item {n}\n")).collect();
        let mut job = job(&text);
        let pages: Vec<&str> = (0..job.page_count()).filter_map(|i| job.page_text(i)).collect();
        assert_eq!(pages.concat(), text);
        assert_eq!(job.page_text(job.page_count()), None);

        let before = job.page_count();
        job.set_setup(PageSetup {
            paper: Paper::A4,
            margin_mm: 50.0,
        });
        assert!(job.page_count() > before);
        assert_eq!(job.page_count(), job.pages().count());
        assert_eq!(job.page_text(0), job.pages().next().map(|p| p.text));
    }

    #[test]
    fn test_export_writes_pdf() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.pdf");
        let text: String = (1..=120).map(|n| format!("entry {n}\n")).collect();
        let job = job(&text);

        let pages = job.export_pdf(&path).unwrap();
        assert!(pages > 1);
        assert_eq!(pages, job.page_count());
        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_empty_document_renders_blank_page() {
        let job = job("");
        assert_eq!(job.page_count(), 1);
        assert!(job.render_pdf().unwrap().starts_with(b"%PDF"));
    }
}
