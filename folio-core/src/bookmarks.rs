//! Bookmark persistence
//!
//! Positions are kept in a single JSON object keyed by book file name. The
//! file is read once when a session starts and overwritten as a whole when
//! it ends; a missing file is the same as an empty map.

use crate::error::BookmarkError;
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Last read position per book file name.
///
/// Text books store a line offset, EPUB and PDF books store a chapter or page
/// index.
pub type Bookmarks = BTreeMap<String, u64>;

/// JSON file backed bookmark store
#[derive(Debug, Clone)]
pub struct BookmarkStore {
    path: PathBuf,
}

impl BookmarkStore {
    /// Create a store for the given bookmark file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all bookmarks, returning an empty map when the file does not exist
    pub fn load(&self) -> Result<Bookmarks, BookmarkError> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("No bookmark file at {:?}, starting empty", self.path);
                return Ok(Bookmarks::new());
            }
            Err(source) => {
                return Err(BookmarkError::Io {
                    path: self.display_path(),
                    source,
                })
            }
        };

        let bookmarks: Bookmarks =
            serde_json::from_str(&data).map_err(|source| BookmarkError::Malformed {
                path: self.display_path(),
                source,
            })?;

        tracing::debug!("Loaded {} bookmarks from {:?}", bookmarks.len(), self.path);
        Ok(bookmarks)
    }

    /// Overwrite the bookmark file with the given map
    pub fn save(&self, bookmarks: &Bookmarks) -> Result<(), BookmarkError> {
        let json =
            serde_json::to_string_pretty(bookmarks).map_err(|source| BookmarkError::Malformed {
                path: self.display_path(),
                source,
            })?;

        fs::write(&self.path, json).map_err(|source| BookmarkError::Io {
            path: self.display_path(),
            source,
        })
    }

    fn display_path(&self) -> String {
        self.path.display().to_string()
    }
}
