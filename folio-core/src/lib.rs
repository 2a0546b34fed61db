//! Folio Core Library
//!
//! This crate provides the building blocks of the Folio terminal reader: a
//! bookmark store, format capabilities for plain text, EPUB and PDF, the
//! interactive pagination loop, and the library menu that ties them together.
//! Every document is loaded into a sequence of display units before the loop
//! starts; the loop itself only ever indexes into that sequence.

pub mod bookmarks;
pub mod config;
pub mod error;
pub mod format;
pub mod library;
pub mod reader;
pub mod types;

pub use bookmarks::{BookmarkStore, Bookmarks};
pub use config::ReaderConfig;
pub use error::{BookmarkError, FolioError, ParseError, Result, SelectionError};
pub use format::{BookFormat, Capabilities, UnitExtractor};
pub use library::{Library, LibraryOutcome};
pub use reader::{Command, InputSource, PagedView, Session, SessionState, TextView, View};
pub use types::{PagedDocument, TextDocument, UnitKind};
