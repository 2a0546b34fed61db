//! Supported book formats and the capabilities that load them
//!
//! Plain text is always available. EPUB and PDF loading depend on optional
//! crates, so they are modelled as capabilities the library is constructed
//! with; a missing capability is reported to the reader instead of failing.

#[cfg(feature = "epub")]
mod epub;
#[cfg(feature = "pdf")]
mod pdf;
mod text;

#[cfg(feature = "epub")]
pub use epub::EpubExtractor;
#[cfg(feature = "pdf")]
pub use pdf::PdfExtractor;
pub use text::load_text;

use crate::error::ParseError;
use std::path::Path;

/// Book formats the library lists and can dispatch to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookFormat {
    Text,
    Epub,
    Pdf,
}

impl BookFormat {
    /// Resolve a format from a bare extension (case-insensitive, no dot)
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "txt" => Some(BookFormat::Text),
            "epub" => Some(BookFormat::Epub),
            "pdf" => Some(BookFormat::Pdf),
            _ => None,
        }
    }

    /// Resolve a format from a file name or path
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        path.as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }

    /// Name used in user-facing notices
    pub fn name(self) -> &'static str {
        match self {
            BookFormat::Text => "Text",
            BookFormat::Epub => "EPUB",
            BookFormat::Pdf => "PDF",
        }
    }
}

/// Trait for extracting the display units of a paginated format
pub trait UnitExtractor: Send + Sync {
    /// Load the plain text of every unit, in reading order
    fn extract(&self, path: &Path) -> Result<Vec<String>, ParseError>;

    /// Human-readable format name
    fn format_name(&self) -> &str;
}

/// The optional format loaders available to a library
#[derive(Default)]
pub struct Capabilities {
    epub: Option<Box<dyn UnitExtractor>>,
    pdf: Option<Box<dyn UnitExtractor>>,
}

impl Capabilities {
    /// No EPUB or PDF support
    pub fn none() -> Self {
        Self::default()
    }

    /// Loaders compiled into this build
    pub fn builtin() -> Self {
        #[allow(unused_mut)]
        let mut caps = Self::none();
        #[cfg(feature = "epub")]
        {
            caps = caps.with_epub(EpubExtractor::new());
        }
        #[cfg(feature = "pdf")]
        {
            caps = caps.with_pdf(PdfExtractor::new());
        }
        caps
    }

    /// Use the given loader for EPUB files
    pub fn with_epub(mut self, extractor: impl UnitExtractor + 'static) -> Self {
        self.epub = Some(Box::new(extractor));
        self
    }

    /// Use the given loader for PDF files
    pub fn with_pdf(mut self, extractor: impl UnitExtractor + 'static) -> Self {
        self.pdf = Some(Box::new(extractor));
        self
    }

    /// Loader for a paginated format, if one is available
    pub fn extractor_for(&self, format: BookFormat) -> Option<&dyn UnitExtractor> {
        match format {
            BookFormat::Epub => self.epub.as_deref(),
            BookFormat::Pdf => self.pdf.as_deref(),
            BookFormat::Text => None,
        }
    }
}

impl std::fmt::Debug for Capabilities {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Capabilities")
            .field("epub", &self.epub.as_ref().map(|e| e.format_name()))
            .field("pdf", &self.pdf.as_ref().map(|e| e.format_name()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedUnits;

    impl UnitExtractor for FixedUnits {
        fn extract(&self, _path: &Path) -> Result<Vec<String>, ParseError> {
            Ok(vec!["one".to_string()])
        }

        fn format_name(&self) -> &str {
            "fixed"
        }
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(BookFormat::from_path("a.txt"), Some(BookFormat::Text));
        assert_eq!(BookFormat::from_path("B.EPUB"), Some(BookFormat::Epub));
        assert_eq!(BookFormat::from_path("dir/c.pdf"), Some(BookFormat::Pdf));
        assert_eq!(BookFormat::from_path("notes.md"), None);
        assert_eq!(BookFormat::from_path("README"), None);
    }

    #[test]
    fn test_no_capabilities() {
        let caps = Capabilities::none();
        assert!(caps.extractor_for(BookFormat::Text).is_none());
        assert!(caps.extractor_for(BookFormat::Epub).is_none());
        assert!(caps.extractor_for(BookFormat::Pdf).is_none());
    }

    #[test]
    fn test_injected_capability() {
        let caps = Capabilities::none().with_pdf(FixedUnits);
        assert!(caps.extractor_for(BookFormat::Epub).is_none());

        let units = caps
            .extractor_for(BookFormat::Pdf)
            .unwrap()
            .extract(Path::new("x.pdf"))
            .unwrap();
        assert_eq!(units, vec!["one"]);
    }
}
