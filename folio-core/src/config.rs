//! Reader configuration

use std::path::{Path, PathBuf};

/// Directory scanned for books when none is configured
pub const DEFAULT_BOOKS_DIR: &str = "books";

/// Bookmark file used when none is configured
pub const DEFAULT_BOOKMARKS_FILE: &str = "bookmarks.json";

/// Number of text lines shown per page
pub const DEFAULT_LINES_PER_PAGE: usize = 25;

/// Number of characters of an EPUB chapter shown on screen
pub const DEFAULT_CHAPTER_PREVIEW_CHARS: usize = 3000;

/// Paths and layout settings shared by the library and the renderers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderConfig {
    /// Directory containing `.txt`, `.epub` and `.pdf` files
    pub books_dir: PathBuf,

    /// JSON file holding the last position per book
    pub bookmarks_file: PathBuf,

    /// Lines per page for plain-text books
    pub lines_per_page: usize,

    /// Characters of each EPUB chapter displayed before truncation
    pub chapter_preview_chars: usize,
}

impl ReaderConfig {
    pub fn new() -> Self {
        Self {
            books_dir: PathBuf::from(DEFAULT_BOOKS_DIR),
            bookmarks_file: PathBuf::from(DEFAULT_BOOKMARKS_FILE),
            lines_per_page: DEFAULT_LINES_PER_PAGE,
            chapter_preview_chars: DEFAULT_CHAPTER_PREVIEW_CHARS,
        }
    }

    /// Set the books directory
    pub fn with_books_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.books_dir = dir.into();
        self
    }

    /// Set the bookmark file path
    pub fn with_bookmarks_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.bookmarks_file = path.into();
        self
    }

    /// Set the number of lines per text page (at least 1)
    pub fn with_lines_per_page(mut self, lines: usize) -> Self {
        self.lines_per_page = lines.max(1);
        self
    }

    /// Set how many characters of a chapter are displayed
    pub fn with_chapter_preview_chars(mut self, chars: usize) -> Self {
        self.chapter_preview_chars = chars;
        self
    }

    /// Full path of a book inside the books directory
    pub fn book_path(&self, file_name: &str) -> PathBuf {
        self.books_dir.join(file_name)
    }

    pub fn books_dir(&self) -> &Path {
        &self.books_dir
    }
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self::new()
    }
}
