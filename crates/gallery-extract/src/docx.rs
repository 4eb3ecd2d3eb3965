//! DOCX (Microsoft Word) text extractor
//!
//! Manual ZIP + XML parsing: the writer crate in this workspace's stack
//! is writer-only, so reading goes straight at the container. DOCX files
//! are ZIP archives whose main content lives in `word/document.xml`;
//! paragraph text is the concatenation of `w:t` runs inside each `w:p`
//! element.
//!
//! Paragraphs are joined by a single newline and empty paragraphs
//! contribute an empty line, preserving paragraph boundaries instead of
//! compacting whitespace.

use crate::traits::TextExtractor;
use gallery_core::{Extraction, GalleryError, InputFormat, Result};
use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::{Cursor, Read};
use zip::ZipArchive;

/// DOCX extractor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DocxExtractor;

impl DocxExtractor {
    /// Create a new DOCX extractor instance
    #[inline]
    #[must_use = "creates a new DOCX extractor"]
    pub const fn new() -> Self {
        Self
    }

    /// Paragraph texts in document order, empty paragraphs included.
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes are not a ZIP container, the
    /// container has no `word/document.xml`, or the XML is malformed.
    pub fn paragraphs(data: &[u8]) -> Result<Vec<String>> {
        let mut archive = ZipArchive::new(Cursor::new(data))
            .map_err(|e| GalleryError::Extraction(format!("not a DOCX container: {e}")))?;

        let mut xml = String::new();
        archive
            .by_name("word/document.xml")
            .map_err(|e| GalleryError::Extraction(format!("missing word/document.xml: {e}")))?
            .read_to_string(&mut xml)?;

        Self::paragraphs_from_xml(&xml)
    }

    fn paragraphs_from_xml(xml: &str) -> Result<Vec<String>> {
        let mut reader = Reader::from_reader(xml.as_bytes());
        let mut buf = Vec::new();

        let mut paragraphs = Vec::new();
        let mut current: Option<String> = None;
        let mut in_text_run = false;

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) => match e.name().as_ref() {
                    b"w:p" => current = Some(String::new()),
                    b"w:t" => in_text_run = current.is_some(),
                    _ => {}
                },
                // <w:p/> is a paragraph with no runs: an empty line.
                Ok(Event::Empty(e)) => {
                    if e.name().as_ref() == b"w:p" {
                        paragraphs.push(String::new());
                    }
                }
                Ok(Event::Text(t)) if in_text_run => {
                    let unescaped = t.unescape().map_err(|e| {
                        GalleryError::Extraction(format!("malformed document.xml: {e}"))
                    })?;
                    if let Some(paragraph) = current.as_mut() {
                        paragraph.push_str(&unescaped);
                    }
                }
                Ok(Event::End(e)) => match e.name().as_ref() {
                    b"w:t" => in_text_run = false,
                    b"w:p" => {
                        if let Some(paragraph) = current.take() {
                            paragraphs.push(paragraph);
                        }
                    }
                    _ => {}
                },
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(GalleryError::Extraction(format!(
                        "malformed document.xml: {e}"
                    )))
                }
                Ok(_) => {}
            }
            buf.clear();
        }

        Ok(paragraphs)
    }
}

impl TextExtractor for DocxExtractor {
    #[inline]
    fn format(&self) -> InputFormat {
        InputFormat::Docx
    }

    fn extract_bytes(&mut self, data: &[u8]) -> Result<Extraction> {
        let paragraphs = Self::paragraphs(data)?;
        Ok(Extraction::from_text(paragraphs.join("\n")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    /// Assemble a minimal DOCX container around the given document.xml
    /// body markup.
    fn build_docx(body: &str) -> Vec<u8> {
        let xml = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{body}</w:body></w:document>"#
        );

        let mut cursor = Cursor::new(Vec::new());
        let mut writer = ZipWriter::new(&mut cursor);
        let options = SimpleFileOptions::default();
        writer.start_file("word/document.xml", options).unwrap();
        writer.write_all(xml.as_bytes()).unwrap();
        writer.finish().unwrap();
        cursor.into_inner()
    }

    fn paragraph(text: &str) -> String {
        format!("<w:p><w:r><w:t>{text}</w:t></w:r></w:p>")
    }

    #[test]
    fn test_paragraphs_in_document_order() {
        let body = format!("{}{}", paragraph("First"), paragraph("Second"));
        let docx = build_docx(&body);
        let paragraphs = DocxExtractor::paragraphs(&docx).unwrap();
        assert_eq!(paragraphs, vec!["First".to_string(), "Second".to_string()]);
    }

    #[test]
    fn test_empty_paragraph_preserves_boundary() {
        // ["Hello", "", "World"] must extract to "Hello\n\nWorld".
        let body = format!("{}<w:p/>{}", paragraph("Hello"), paragraph("World"));
        let docx = build_docx(&body);

        let mut extractor = DocxExtractor::new();
        let extraction = extractor.extract_bytes(&docx).unwrap();
        assert_eq!(extraction.text(), Some("Hello\n\nWorld"));
    }

    #[test]
    fn test_explicit_empty_paragraph_element() {
        // An empty paragraph written as a start/end pair, not self-closed.
        let body = format!("{}<w:p></w:p>{}", paragraph("Hello"), paragraph("World"));
        let docx = build_docx(&body);
        let paragraphs = DocxExtractor::paragraphs(&docx).unwrap();
        assert_eq!(
            paragraphs,
            vec!["Hello".to_string(), String::new(), "World".to_string()]
        );
    }

    #[test]
    fn test_multiple_runs_concatenate_within_paragraph() {
        let body =
            "<w:p><w:r><w:t>Hel</w:t></w:r><w:r><w:t>lo</w:t></w:r></w:p>".to_string();
        let docx = build_docx(&body);
        let paragraphs = DocxExtractor::paragraphs(&docx).unwrap();
        assert_eq!(paragraphs, vec!["Hello".to_string()]);
    }

    #[test]
    fn test_xml_entities_unescaped() {
        let body = paragraph("Fish &amp; Chips &lt;fresh&gt;");
        let docx = build_docx(&body);
        let paragraphs = DocxExtractor::paragraphs(&docx).unwrap();
        assert_eq!(paragraphs, vec!["Fish & Chips <fresh>".to_string()]);
    }

    #[test]
    fn test_document_with_no_text_is_empty() {
        let docx = build_docx("<w:p/>");
        let mut extractor = DocxExtractor::new();
        let extraction = extractor.extract_bytes(&docx).unwrap();
        assert!(extraction.is_empty());
    }

    #[test]
    fn test_not_a_zip_is_fatal() {
        let mut extractor = DocxExtractor::new();
        match extractor.extract_bytes(b"definitely not a zip archive") {
            Err(GalleryError::Extraction(msg)) => {
                assert!(msg.contains("container"), "unexpected message: {msg}");
            }
            other => panic!("Expected Extraction error, got {other:?}"),
        }
    }

    #[test]
    fn test_zip_without_document_xml_is_fatal() {
        let mut cursor = Cursor::new(Vec::new());
        let mut writer = ZipWriter::new(&mut cursor);
        writer
            .start_file("unrelated.txt", SimpleFileOptions::default())
            .unwrap();
        writer.write_all(b"hi").unwrap();
        writer.finish().unwrap();
        let bytes = cursor.into_inner();

        let mut extractor = DocxExtractor::new();
        match extractor.extract_bytes(&bytes) {
            Err(GalleryError::Extraction(msg)) => {
                assert!(msg.contains("word/document.xml"), "unexpected message: {msg}");
            }
            other => panic!("Expected Extraction error, got {other:?}"),
        }
    }

    #[test]
    fn test_format_is_docx() {
        assert_eq!(DocxExtractor::new().format(), InputFormat::Docx);
    }
}
