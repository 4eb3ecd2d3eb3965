//! Pipeline front door: format resolution and extractor dispatch
//!
//! Uploaded bytes come in with nothing but a declared filename; the
//! pipeline derives the extension token, routes to the matching
//! extractor, and normalizes the result. Unrecognized extensions are a
//! deliberate permissive fallback: an empty extraction, not an error.

use crate::docx::DocxExtractor;
use crate::pdf::PdfExtractor;
use crate::raster::ImageExtractor;
use crate::traits::{ExtractOptions, TextExtractor};
use gallery_core::{Extraction, GalleryError, InputFormat, Result};
use gallery_ocr::OcrEngine;
use std::path::Path;

/// The document text-extraction pipeline.
///
/// One instance can serve any number of sequential extractions; each call
/// is independent and cleans up its own temporary state.
#[derive(Debug, Clone, Default)]
pub struct TextPipeline {
    options: ExtractOptions,
}

impl TextPipeline {
    /// Create a pipeline with default options
    #[inline]
    #[must_use = "creates a new extraction pipeline"]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pipeline with explicit options
    #[inline]
    #[must_use = "creates a new extraction pipeline with the given options"]
    pub fn with_options(options: ExtractOptions) -> Self {
        Self { options }
    }

    /// The options this pipeline runs with
    #[inline]
    #[must_use = "returns the pipeline options"]
    pub const fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Extract plain text from uploaded bytes, dispatching on the
    /// declared filename's extension.
    ///
    /// Unrecognized extensions yield `Ok(Extraction::Empty)`.
    ///
    /// # Errors
    ///
    /// Returns an error when the routed extractor cannot read the
    /// document at all (corrupt DOCX, undecodable image, OCR machinery
    /// unavailable for a scanned PDF).
    pub fn extract_bytes(&self, data: &[u8], filename: &str) -> Result<Extraction> {
        let Some(format) = InputFormat::from_filename(filename) else {
            log::debug!("unrecognized extension on {filename:?}, returning empty extraction");
            return Ok(Extraction::Empty);
        };
        self.extract_as(data, format)
    }

    /// Extract plain text from bytes of a known format.
    ///
    /// # Errors
    ///
    /// Same contract as [`TextPipeline::extract_bytes`].
    pub fn extract_as(&self, data: &[u8], format: InputFormat) -> Result<Extraction> {
        log::debug!("extracting {} bytes as {format}", data.len());
        match format {
            InputFormat::Pdf => {
                PdfExtractor::with_options(self.options.clone()).extract_bytes(data)
            }
            InputFormat::Docx => DocxExtractor::new().extract_bytes(data),
            InputFormat::Png | InputFormat::Jpeg => {
                ImageExtractor::new(self.recognizer()?, format).extract_bytes(data)
            }
        }
    }

    /// Extract plain text from a file on disk, dispatching on its name.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, plus the
    /// [`TextPipeline::extract_bytes`] contract.
    pub fn extract_file<P: AsRef<Path>>(&self, path: P) -> Result<Extraction> {
        let path = path.as_ref();
        let data = std::fs::read(path)?;
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.extract_bytes(&data, &filename)
    }

    fn recognizer(&self) -> Result<OcrEngine> {
        OcrEngine::with_language(&self.options.ocr_language)
            .map_err(|e| GalleryError::Ocr(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrecognized_extension_is_empty_not_error() {
        let pipeline = TextPipeline::new();
        let extraction = pipeline.extract_bytes(b"anything", "notes.txt").unwrap();
        assert!(extraction.is_empty());
    }

    #[test]
    fn test_no_extension_is_empty_not_error() {
        let pipeline = TextPipeline::new();
        let extraction = pipeline.extract_bytes(b"anything", "README").unwrap();
        assert!(extraction.is_empty());
    }

    #[test]
    fn test_unrecognized_extension_never_touches_extractors() {
        // Garbage bytes would make every extractor error; the permissive
        // fallback must short-circuit before any of them run.
        let pipeline = TextPipeline::new();
        let extraction = pipeline
            .extract_bytes(b"\x00\x01garbage", "upload.xyz")
            .unwrap();
        assert!(extraction.is_empty());
    }

    #[test]
    fn test_corrupt_docx_errors() {
        let pipeline = TextPipeline::new();
        let result = pipeline.extract_bytes(b"not a zip", "contract.docx");
        assert!(result.is_err());
    }

    #[test]
    fn test_extract_file_missing_is_io_error() {
        let pipeline = TextPipeline::new();
        match pipeline.extract_file("/nonexistent/contract.pdf") {
            Err(GalleryError::Io(_)) => {}
            other => panic!("Expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn test_options_accessor() {
        let pipeline =
            TextPipeline::with_options(ExtractOptions::default().with_raster_dpi(300));
        assert_eq!(pipeline.options().raster_dpi, 300);
    }
}
