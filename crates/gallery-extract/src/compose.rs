//! DOCX re-composition
//!
//! Some tools hand their output back as a downloadable Word document
//! (e.g. a translated notice). The regenerated file is a single paragraph
//! wrapping the full text, sanitized so control characters cannot break
//! the document's XML encoding.

use docx_rs::{Docx, Paragraph, Run};
use gallery_core::{sanitize_for_xml, GalleryError, Result};
use std::io::Cursor;

/// Build a DOCX file containing one paragraph with the given text.
///
/// Control characters outside the XML-safe whitespace set are replaced by
/// spaces before the document is assembled.
///
/// # Errors
///
/// Returns an error if the document cannot be packaged.
pub fn compose_docx(text: &str) -> Result<Vec<u8>> {
    let sanitized = sanitize_for_xml(text);

    let mut cursor = Cursor::new(Vec::new());
    Docx::new()
        .add_paragraph(Paragraph::new().add_run(Run::new().add_text(sanitized)))
        .build()
        .pack(&mut cursor)
        .map_err(|e| GalleryError::Extraction(format!("failed to package DOCX: {e}")))?;
    Ok(cursor.into_inner())
}
