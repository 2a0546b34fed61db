//! PDF page extraction

use super::UnitExtractor;
use crate::error::ParseError;
use std::fs;
use std::path::Path;

/// Extracts the plain text of every native PDF page
pub struct PdfExtractor;

impl PdfExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl UnitExtractor for PdfExtractor {
    fn extract(&self, path: &Path) -> Result<Vec<String>, ParseError> {
        let data = fs::read(path).map_err(|source| ParseError::Unreadable {
            path: path.display().to_string(),
            source,
        })?;

        let pages = pdf_extract::extract_text_from_mem_by_pages(&data)
            .map_err(|e| ParseError::InvalidPdf(format!("Failed to extract PDF text: {}", e)))?;

        tracing::debug!("Extracted {} pages from {:?}", pages.len(), path);
        Ok(pages)
    }

    fn format_name(&self) -> &str {
        "PDF"
    }
}
