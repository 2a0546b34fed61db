//! Plain-text loading

use crate::error::ParseError;
use crate::types::{display_name, TextDocument};
use std::fs;
use std::path::Path;

/// Read a UTF-8 text file fully into memory as lines
pub fn load_text(path: &Path) -> Result<TextDocument, ParseError> {
    let text = fs::read_to_string(path).map_err(|source| ParseError::Unreadable {
        path: path.display().to_string(),
        source,
    })?;

    let doc = TextDocument::from_text(display_name(path), &text);
    tracing::debug!("Loaded {:?} with {} lines", path, doc.line_count());
    Ok(doc)
}
