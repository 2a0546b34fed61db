//! EPUB chapter extraction

use super::UnitExtractor;
use crate::error::ParseError;
use epub::doc::EpubDoc;
use scraper::{ElementRef, Html};
use std::path::{Path, PathBuf};

const XHTML_MIME: &str = "application/xhtml+xml";

/// Extracts one plain-text chapter per EPUB content document
///
/// Content documents are visited in spine (reading) order, followed by any
/// XHTML manifest items the spine leaves out. Markup is stripped to the
/// concatenated text of the `<body>` element.
pub struct EpubExtractor;

impl EpubExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Strip markup from an XHTML content document
    pub fn html_to_text(html: &str) -> String {
        let document = Html::parse_document(html);
        let root = document.root_element();

        let body = root
            .children()
            .filter_map(ElementRef::wrap)
            .find(|el| el.value().name() == "body");

        body.unwrap_or(root).text().collect()
    }
}

impl Default for EpubExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl UnitExtractor for EpubExtractor {
    fn extract(&self, path: &Path) -> Result<Vec<String>, ParseError> {
        let mut doc = EpubDoc::new(path).map_err(|e| ParseError::InvalidEpub(e.to_string()))?;

        let mut ids: Vec<String> = doc.spine.iter().map(|item| item.idref.clone()).collect();

        // Content documents missing from the spine follow it, ordered by path.
        let mut unlisted: Vec<(PathBuf, String)> = doc
            .resources
            .keys()
            .filter(|id| !ids.contains(*id))
            .filter(|id| doc.get_resource_mime(id).as_deref() == Some(XHTML_MIME))
            .map(|id| (doc.resources.get(id).map(|r| r.path.clone()).unwrap_or_default(), id.clone()))
            .collect();
        unlisted.sort();
        ids.extend(unlisted.into_iter().map(|(_, id)| id));

        let mut chapters = Vec::with_capacity(ids.len());
        for id in &ids {
            match doc.get_resource_str(id) {
                Some((content, _mime)) => chapters.push(Self::html_to_text(&content)),
                None => tracing::debug!("Skipping unreadable content document {}", id),
            }
        }

        tracing::debug!("Extracted {} chapters from {:?}", chapters.len(), path);
        Ok(chapters)
    }

    fn format_name(&self) -> &str {
        "EPUB"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const CONTAINER: &str = r#"<?xml version="1.0"?>
<container version="1.0" xmlns="urn:oasis:names:tc:opendocument:xmlns:container">
  <rootfiles>
    <rootfile full-path="OEBPS/content.opf" media-type="application/oebps-package+xml"/>
  </rootfiles>
</container>"#;

    const OPF: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<package xmlns="http://www.idpf.org/2007/opf" version="2.0" unique-identifier="bookid">
  <metadata xmlns:dc="http://purl.org/dc/elements/1.1/">
    <dc:title>Test Book</dc:title>
    <dc:identifier id="bookid">test-book-1</dc:identifier>
    <dc:language>en</dc:language>
  </metadata>
  <manifest>
    <item id="ncx" href="toc.ncx" media-type="application/x-dtbncx+xml"/>
    <item id="notes" href="notes.xhtml" media-type="application/xhtml+xml"/>
    <item id="c2" href="c2.xhtml" media-type="application/xhtml+xml"/>
    <item id="style" href="style.css" media-type="text/css"/>
    <item id="c1" href="c1.xhtml" media-type="application/xhtml+xml"/>
    <item id="appendix" href="appendix.xhtml" media-type="application/xhtml+xml"/>
  </manifest>
  <spine toc="ncx">
    <itemref idref="c1"/>
    <itemref idref="c2"/>
  </spine>
</package>"#;

    const NCX: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<ncx xmlns="http://www.daisy.org/z3986/2005/ncx/" version="2005-1">
  <head><meta name="dtb:uid" content="test-book-1"/></head>
  <docTitle><text>Test Book</text></docTitle>
  <navMap>
    <navPoint id="n1" playOrder="1"><navLabel><text>One</text></navLabel><content src="c1.xhtml"/></navPoint>
  </navMap>
</ncx>"#;

    fn xhtml(body: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<html xmlns="http://www.w3.org/1999/xhtml"><head><title>Head</title></head><body>{}</body></html>"#,
            body
        )
    }

    /// Write a small EPUB with two spine chapters and two unlisted documents
    fn create_test_epub(dir: &tempfile::TempDir) -> std::path::PathBuf {
        let path = dir.path().join("book.epub");
        let file = std::fs::File::create(&path).unwrap();
        let mut writer = zip::ZipWriter::new(file);
        let stored =
            zip::write::FileOptions::default().compression_method(zip::CompressionMethod::Stored);

        let entries = [
            ("mimetype", "application/epub+zip".to_string()),
            ("META-INF/container.xml", CONTAINER.to_string()),
            ("OEBPS/content.opf", OPF.to_string()),
            ("OEBPS/toc.ncx", NCX.to_string()),
            ("OEBPS/style.css", "p { margin: 0; }".to_string()),
            ("OEBPS/c1.xhtml", xhtml("<p>Body <b>One</b></p>")),
            ("OEBPS/c2.xhtml", xhtml("<p>Body <i>Two</i></p>")),
            ("OEBPS/notes.xhtml", xhtml("<p>Notes</p>")),
            ("OEBPS/appendix.xhtml", xhtml("<p>Appendix</p>")),
        ];
        for (name, content) in entries {
            writer.start_file(name, stored).unwrap();
            writer.write_all(content.as_bytes()).unwrap();
        }
        writer.finish().unwrap();

        path
    }

    #[test]
    fn test_extract_chapters_in_order() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = create_test_epub(&dir);

        let chapters = EpubExtractor::new().extract(&path).unwrap();
        let texts: Vec<&str> = chapters.iter().map(|c| c.trim()).collect();

        assert_eq!(texts, vec!["Body One", "Body Two", "Appendix", "Notes"]);
    }

    #[test]
    fn test_html_to_text_uses_body() {
        let html = r#"
            <html>
              <head><title>Ignored Title</title></head>
              <body><h1>Chapter One</h1><p>It was a <b>dark</b> night.</p></body>
            </html>
        "#;

        let text = EpubExtractor::html_to_text(html);
        assert!(text.contains("Chapter One"));
        assert!(text.contains("It was a dark night."));
        assert!(!text.contains("Ignored Title"));
    }

    #[test]
    fn test_html_fragment_without_body() {
        let text = EpubExtractor::html_to_text("<p>plain</p>");
        assert_eq!(text.trim(), "plain");
    }

    #[test]
    fn test_invalid_archive() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("broken.epub");
        std::fs::write(&path, b"not a zip archive").unwrap();

        let err = EpubExtractor::new().extract(&path).unwrap_err();
        assert!(matches!(err, ParseError::InvalidEpub(_)));
    }
}
