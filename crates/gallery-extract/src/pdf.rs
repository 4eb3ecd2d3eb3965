//! PDF text extractor
//!
//! Two-stage contract:
//!
//! 1. **Structural extraction**: walk every page and concatenate the
//!    embedded text layer (`lopdf`). If any usable text comes out, that
//!    is the result and OCR is never touched.
//! 2. **OCR fallback**: when the document cannot be loaded or the text
//!    layer trims to nothing (the common case for scanned documents),
//!    spool the bytes to disk, rasterize every page with `pdftoppm`, and
//!    recognize each page image independently, concatenating in page
//!    order.
//!
//! A page that individually fails OCR contributes an empty string and a
//! warning; one bad page does not abort the document.

use crate::spool::Spooled;
use crate::traits::{ExtractOptions, TextExtractor, TextRecognizer};
use gallery_core::{Extraction, GalleryError, InputFormat, Result};
use gallery_ocr::{rasterize_pdf, OcrEngine};
use lopdf::Document;
use std::path::PathBuf;

/// PDF extractor with structural-first, OCR-fallback behavior.
///
/// The OCR engine is only constructed when the fallback actually runs, so
/// PDFs with a machine-readable text layer extract fine on hosts without
/// Tesseract installed.
#[derive(Debug, Clone, Default)]
pub struct PdfExtractor {
    options: ExtractOptions,
}

impl PdfExtractor {
    /// Create an extractor with default options
    #[inline]
    #[must_use = "creates a new PDF extractor"]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an extractor with explicit options
    #[inline]
    #[must_use = "creates a new PDF extractor with the given options"]
    pub fn with_options(options: ExtractOptions) -> Self {
        Self { options }
    }

    /// Extract the embedded text layer, walking pages in page order.
    ///
    /// A page whose text cannot be decoded contributes nothing; the
    /// document-level outcome (empty string) is indistinguishable from a
    /// document with no text layer, and both route to the OCR fallback.
    ///
    /// # Errors
    ///
    /// Returns an error if the document structure itself cannot be
    /// loaded.
    pub fn extract_structural(data: &[u8]) -> Result<String> {
        let doc = Document::load_mem(data)
            .map_err(|e| GalleryError::Extraction(format!("failed to load PDF: {e}")))?;

        let mut text = String::new();
        for page_no in doc.get_pages().keys() {
            match doc.extract_text(&[*page_no]) {
                Ok(page_text) => text.push_str(&page_text),
                Err(e) => log::debug!("no extractable text on page {page_no}: {e}"),
            }
        }
        Ok(text)
    }

    /// OCR fallback for scanned documents.
    fn extract_scanned(&self, data: &[u8]) -> Result<Extraction> {
        let spooled = Spooled::write(data, "pdf")?;
        let pages = rasterize_pdf(spooled.path(), self.options.raster_dpi)
            .map_err(|e| GalleryError::Ocr(e.to_string()))?;
        log::debug!("OCR fallback over {} page(s)", pages.len());

        let mut engine = OcrEngine::with_language(&self.options.ocr_language)
            .map_err(|e| GalleryError::Ocr(e.to_string()))?;
        Ok(Extraction::from_text(ocr_pages(&mut engine, pages.paths())))
    }
}

impl TextExtractor for PdfExtractor {
    #[inline]
    fn format(&self) -> InputFormat {
        InputFormat::Pdf
    }

    fn extract_bytes(&mut self, data: &[u8]) -> Result<Extraction> {
        match Self::extract_structural(data) {
            Ok(text) if !text.trim().is_empty() => return Ok(Extraction::Text(text)),
            Ok(_) => log::debug!("PDF has no text layer, falling back to OCR"),
            Err(e) => log::debug!("structural extraction failed ({e}), falling back to OCR"),
        }
        self.extract_scanned(data)
    }
}

/// Recognize a sequence of page images, concatenating results in order.
///
/// A page that fails recognition contributes an empty string; the failure
/// is logged with its 1-based page number and the remaining pages still
/// run.
fn ocr_pages(recognizer: &mut dyn TextRecognizer, pages: &[PathBuf]) -> String {
    let mut text = String::new();
    for (index, page) in pages.iter().enumerate() {
        match recognizer.recognize_file(page) {
            Ok(page_text) => text.push_str(&page_text),
            Err(e) => log::warn!("OCR failed on page {}: {e}", index + 1),
        }
    }
    text
}
