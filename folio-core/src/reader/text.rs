//! Plain-text view: fixed-size pages of lines with keyword search

use super::View;
use crate::types::TextDocument;
use std::borrow::Cow;
use std::ops::Range;

/// Pages through a text document `lines_per_page` lines at a time
///
/// The bookmark is the line offset of the current page, not the page index.
#[derive(Debug, Clone)]
pub struct TextView {
    doc: TextDocument,
    lines_per_page: usize,
    page: usize,
}

impl TextView {
    /// Open at the page containing `start_line`
    ///
    /// The page is not clamped to the document, so a stale bookmark past the
    /// end shows an empty page.
    pub fn new(doc: TextDocument, start_line: u64, lines_per_page: usize) -> Self {
        let lines_per_page = lines_per_page.max(1);
        let start_line = usize::try_from(start_line).unwrap_or(usize::MAX);
        Self {
            doc,
            lines_per_page,
            page: start_line / lines_per_page,
        }
    }

    /// Zero-based page index
    pub fn page(&self) -> usize {
        self.page
    }

    /// Always one more than the number of full pages
    pub fn total_pages(&self) -> usize {
        self.doc.line_count() / self.lines_per_page + 1
    }

    /// Line indices shown on the current page, clipped to the document
    pub fn page_range(&self) -> Range<usize> {
        let len = self.doc.line_count();
        let start = self.page.saturating_mul(self.lines_per_page).min(len);
        let end = start.saturating_add(self.lines_per_page).min(len);
        start..end
    }

    /// Indices of lines containing `keyword`, ignoring case
    pub fn find_matches(&self, keyword: &str) -> Vec<usize> {
        let keyword = keyword.to_lowercase();
        self.doc
            .lines
            .iter()
            .enumerate()
            .filter(|(_, line)| line.to_lowercase().contains(&keyword))
            .map(|(i, _)| i)
            .collect()
    }
}

impl View for TextView {
    fn title(&self) -> &str {
        &self.doc.name
    }

    fn unit_label(&self) -> &'static str {
        "Page"
    }

    fn position(&self) -> usize {
        self.page
    }

    fn total(&self) -> usize {
        self.total_pages()
    }

    fn body(&self) -> Cow<'_, str> {
        Cow::Owned(self.doc.lines[self.page_range()].concat())
    }

    fn hint(&self) -> &'static str {
        "[n]ext  [p]rev  [s]earch  [q]uit"
    }

    fn next(&mut self) -> bool {
        let end = self.page.saturating_add(1).saturating_mul(self.lines_per_page);
        if end < self.doc.line_count() {
            self.page += 1;
            true
        } else {
            false
        }
    }

    fn prev(&mut self) -> bool {
        if self.page > 0 {
            self.page -= 1;
            true
        } else {
            false
        }
    }

    fn supports_search(&self) -> bool {
        true
    }

    fn search(&mut self, keyword: &str) -> usize {
        let matches = self.find_matches(keyword);
        if let Some(&first) = matches.first() {
            self.page = first / self.lines_per_page;
        }
        matches.len()
    }

    fn bookmark(&self) -> u64 {
        self.page.saturating_mul(self.lines_per_page) as u64
    }
}
