//! Error types for Folio Core

use thiserror::Error;

/// Result type alias using FolioError
pub type Result<T> = std::result::Result<T, FolioError>;

/// Top-level error type for all Folio operations
#[derive(Debug, Error)]
pub enum FolioError {
    #[error("Bookmark error: {0}")]
    Bookmark(#[from] BookmarkError),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Selection error: {0}")]
    Selection(#[from] SelectionError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that occur while reading or writing the bookmark file
#[derive(Debug, Error)]
pub enum BookmarkError {
    #[error("Failed to access {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed bookmark file {path}: {source}")]
    Malformed {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors that occur while loading a document into display units
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Failed to read {path}: {source}")]
    Unreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid EPUB: {0}")]
    InvalidEpub(String),

    #[error("Invalid PDF: {0}")]
    InvalidPdf(String),
}

/// Errors raised by the library menu for input it cannot act on
#[derive(Debug, Error)]
pub enum SelectionError {
    #[error("'{0}' is not a valid number")]
    NotANumber(String),

    #[error("Selection {selected} is out of range (1-{available})")]
    OutOfRange { selected: i64, available: usize },

    #[error("Input closed before a book was selected")]
    NoInput,
}
