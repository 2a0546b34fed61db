//! Library menu: list books, pick one, read it, remember where we stopped

use crate::bookmarks::BookmarkStore;
use crate::config::ReaderConfig;
use crate::error::{Result, SelectionError};
use crate::format::{load_text, BookFormat, Capabilities};
use crate::reader::{InputSource, PagedView, Session, TextView};
use crate::types::{PagedDocument, UnitKind};
use std::fs;
use std::io::Write;
use std::path::Path;

/// How a library run ended without an error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LibraryOutcome {
    /// The books directory holds nothing readable; bookmarks were not touched
    NoBooks,
    /// The selected file has no reader; bookmarks were not touched
    Unsupported { book: String },
    /// The book was read and its position written to the bookmark file
    Saved { book: String, position: u64 },
}

/// Orchestrates one reading session over a books directory
pub struct Library {
    config: ReaderConfig,
    capabilities: Capabilities,
    store: BookmarkStore,
}

impl Library {
    pub fn new(config: ReaderConfig, capabilities: Capabilities) -> Self {
        let store = BookmarkStore::new(&config.bookmarks_file);
        Self {
            config,
            capabilities,
            store,
        }
    }

    /// Supported files in the books directory, sorted by name
    pub fn list_books(&self) -> Result<Vec<String>> {
        let mut books: Vec<String> = fs::read_dir(self.config.books_dir())?
            .filter_map(|e| e.ok())
            .filter(|e| e.path().is_file())
            .filter_map(|e| e.file_name().into_string().ok())
            .filter(|name| BookFormat::from_path(name).is_some())
            .collect();

        books.sort();
        tracing::debug!("Found {} books in {:?}", books.len(), self.config.books_dir());
        Ok(books)
    }

    /// Show the menu, read the selected book, and save its new position
    pub fn run(
        &self,
        input: &mut dyn InputSource,
        out: &mut dyn Write,
    ) -> Result<LibraryOutcome> {
        fs::create_dir_all(self.config.books_dir())?;
        let mut bookmarks = self.store.load()?;

        let books = self.list_books()?;
        if books.is_empty() {
            writeln!(
                out,
                "No supported books found in '{}/' directory.",
                self.config.books_dir().display()
            )?;
            return Ok(LibraryOutcome::NoBooks);
        }

        writeln!(out, "📚 Your Library:")?;
        for (i, book) in books.iter().enumerate() {
            writeln!(out, "{}. {}", i + 1, book)?;
        }
        write!(out, "Select book #: ")?;
        out.flush()?;

        let line = input.next_line()?.ok_or(SelectionError::NoInput)?;
        let book = books[parse_selection(&line, books.len())?].clone();
        let start = bookmarks.get(&book).copied().unwrap_or(0);
        tracing::debug!("Opening {} at {}", book, start);

        let Some(position) = self.open_book(&book, start, input, out)? else {
            writeln!(out, "Unsupported file type.")?;
            return Ok(LibraryOutcome::Unsupported { book });
        };

        bookmarks.insert(book.clone(), position);
        self.store.save(&bookmarks)?;
        tracing::info!("Saved {} at {}", book, position);
        writeln!(out, "✅ Progress saved.")?;

        Ok(LibraryOutcome::Saved { book, position })
    }

    /// Read one book from `start` until the reader quits
    ///
    /// Returns the position to bookmark, or `None` when the file extension is
    /// not a supported format.
    pub fn open_book(
        &self,
        book: &str,
        start: u64,
        input: &mut dyn InputSource,
        out: &mut dyn Write,
    ) -> Result<Option<u64>> {
        let Some(format) = BookFormat::from_path(book) else {
            return Ok(None);
        };

        let path = self.config.book_path(book);
        let position = match format {
            BookFormat::Text => {
                let doc = load_text(&path)?;
                let view = TextView::new(doc, start, self.config.lines_per_page);
                Session::new(view, input, out).run()?
            }
            BookFormat::Epub => {
                self.read_paged(&path, book, format, UnitKind::Chapter, start, input, out)?
            }
            BookFormat::Pdf => {
                self.read_paged(&path, book, format, UnitKind::Page, start, input, out)?
            }
        };

        Ok(Some(position))
    }

    #[allow(clippy::too_many_arguments)]
    fn read_paged(
        &self,
        path: &Path,
        book: &str,
        format: BookFormat,
        kind: UnitKind,
        start: u64,
        input: &mut dyn InputSource,
        out: &mut dyn Write,
    ) -> Result<u64> {
        let Some(extractor) = self.capabilities.extractor_for(format) else {
            tracing::warn!("{} capability missing, cannot open {}", format.name(), book);
            writeln!(out, "{} support not available in this build.", format.name())?;
            return Ok(0);
        };

        let units = extractor.extract(path)?;
        if units.is_empty() {
            writeln!(out, "No readable content in {}.", book)?;
            return Ok(0);
        }

        let mut view = PagedView::new(PagedDocument::new(book, kind, units), start);
        if kind == UnitKind::Chapter {
            view = view.with_preview_chars(self.config.chapter_preview_chars);
        }

        Ok(Session::new(view, input, out).run()?)
    }
}

/// Turn a one-based menu entry into an index into `available` books
fn parse_selection(line: &str, available: usize) -> std::result::Result<usize, SelectionError> {
    let trimmed = line.trim();
    let selected: i64 = trimmed
        .parse()
        .map_err(|_| SelectionError::NotANumber(trimmed.to_string()))?;

    if selected < 1 || selected as u64 > available as u64 {
        return Err(SelectionError::OutOfRange {
            selected,
            available,
        });
    }

    Ok(selected as usize - 1)
}
