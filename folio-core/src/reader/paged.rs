//! View over pre-extracted units (EPUB chapters, PDF pages)

use super::View;
use crate::types::PagedDocument;
use std::borrow::Cow;

/// Steps through a paginated document one unit at a time
///
/// The bookmark is the unit index itself.
#[derive(Debug, Clone)]
pub struct PagedView {
    doc: PagedDocument,
    index: usize,
    preview_chars: Option<usize>,
}

impl PagedView {
    /// Open at `start`, clamped to the last unit
    pub fn new(doc: PagedDocument, start: u64) -> Self {
        let last = doc.len().saturating_sub(1);
        let index = usize::try_from(start).unwrap_or(usize::MAX).min(last);
        Self {
            doc,
            index,
            preview_chars: None,
        }
    }

    /// Only show the first `chars` characters of each unit
    pub fn with_preview_chars(mut self, chars: usize) -> Self {
        self.preview_chars = Some(chars);
        self
    }

}

/// Longest prefix of `text` holding at most `chars` characters
fn clip_chars(text: &str, chars: usize) -> &str {
    match text.char_indices().nth(chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

impl View for PagedView {
    fn title(&self) -> &str {
        &self.doc.name
    }

    fn unit_label(&self) -> &'static str {
        self.doc.kind.label()
    }

    fn position(&self) -> usize {
        self.index
    }

    fn total(&self) -> usize {
        self.doc.len()
    }

    fn body(&self) -> Cow<'_, str> {
        let text = self.doc.units.get(self.index).map(String::as_str).unwrap_or("");
        match self.preview_chars {
            Some(chars) => Cow::Borrowed(clip_chars(text, chars)),
            None => Cow::Borrowed(text),
        }
    }

    fn hint(&self) -> &'static str {
        "[n]ext  [p]rev  [q]uit"
    }

    fn next(&mut self) -> bool {
        if self.index + 1 < self.doc.len() {
            self.index += 1;
            true
        } else {
            false
        }
    }

    fn prev(&mut self) -> bool {
        if self.index > 0 {
            self.index -= 1;
            true
        } else {
            false
        }
    }

    fn bookmark(&self) -> u64 {
        self.index as u64
    }
}
