//! In-memory documents
//!
//! A document is loaded completely before it is displayed and is never
//! mutated afterwards; the reader views only index into it.

use std::path::Path;

/// What a single unit of a paginated document represents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitKind {
    /// An EPUB content document
    Chapter,
    /// A native PDF page
    Page,
}

impl UnitKind {
    /// Label shown in the reader header
    pub fn label(self) -> &'static str {
        match self {
            UnitKind::Chapter => "Chapter",
            UnitKind::Page => "Page",
        }
    }
}

/// A plain-text book split into lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextDocument {
    /// File name shown in the header
    pub name: String,

    /// Lines including their terminators, so joining them restores the text
    pub lines: Vec<String>,
}

impl TextDocument {
    pub fn new(name: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            name: name.into(),
            lines,
        }
    }

    /// Split text into lines, keeping each line's terminator
    ///
    /// `\r\n` and a bare `\r` both end a line and are rewritten to `\n`.
    pub fn from_text(name: impl Into<String>, text: &str) -> Self {
        let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
        let lines = normalized
            .split_inclusive('\n')
            .map(str::to_string)
            .collect();
        Self::new(name, lines)
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

/// A book made of pre-extracted units (EPUB chapters or PDF pages)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagedDocument {
    /// File name shown in the header
    pub name: String,

    pub kind: UnitKind,

    /// Plain text of each unit, in reading order
    pub units: Vec<String>,
}

impl PagedDocument {
    pub fn new(name: impl Into<String>, kind: UnitKind, units: Vec<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            units,
        }
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

/// File name component of a path, used as the document title
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
