//! Core trait definitions and options for the extraction pipeline

use gallery_core::{Extraction, GalleryError, InputFormat, Result};
use image::DynamicImage;
use std::path::Path;

/// Options for an extraction run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Tesseract language code used for image OCR and the PDF fallback
    pub ocr_language: String,

    /// Render resolution (DPI) for PDF page rasterization in the OCR
    /// fallback
    pub raster_dpi: u32,
}

impl ExtractOptions {
    /// Set the OCR language
    #[inline]
    #[must_use = "returns options with the OCR language configured"]
    pub fn with_ocr_language(mut self, language: impl Into<String>) -> Self {
        self.ocr_language = language.into();
        self
    }

    /// Set the rasterization DPI for the PDF OCR fallback
    #[inline]
    #[must_use = "returns options with the raster DPI configured"]
    pub fn with_raster_dpi(mut self, dpi: u32) -> Self {
        self.raster_dpi = dpi;
        self
    }
}

impl Default for ExtractOptions {
    #[inline]
    fn default() -> Self {
        Self {
            ocr_language: gallery_ocr::DEFAULT_LANGUAGE.to_string(),
            raster_dpi: gallery_ocr::DEFAULT_RASTER_DPI,
        }
    }
}

/// A text recognizer over rasters: the seam between extractors and the
/// OCR engine.
///
/// Extractors only ever need these two operations, so tests can swap in
/// a recording stub where the real engine would require Tesseract on the
/// host.
pub trait TextRecognizer {
    /// Recognize text in a decoded image.
    ///
    /// # Errors
    /// Returns an error if the raster cannot be recognized at all;
    /// "no text found" is an empty string, not an error.
    fn recognize_image(&mut self, image: &DynamicImage) -> Result<String>;

    /// Recognize text in an image file on disk.
    ///
    /// # Errors
    /// Returns an error if the file cannot be loaded or recognized.
    fn recognize_file(&mut self, path: &Path) -> Result<String>;
}

impl TextRecognizer for gallery_ocr::OcrEngine {
    fn recognize_image(&mut self, image: &DynamicImage) -> Result<String> {
        Self::recognize_image(self, image).map_err(|e| GalleryError::Ocr(e.to_string()))
    }

    fn recognize_file(&mut self, path: &Path) -> Result<String> {
        Self::recognize_file(self, path).map_err(|e| GalleryError::Ocr(e.to_string()))
    }
}

/// Main trait for per-format text extractors
///
/// Each extractor (PDF, DOCX, image) implements this trait; the pipeline
/// resolves an upload's format and dispatches to the matching extractor.
pub trait TextExtractor {
    /// The format this extractor handles
    fn format(&self) -> InputFormat;

    /// Extract plain text from raw document bytes
    ///
    /// # Errors
    /// Returns an error if the document structure cannot be read at all.
    /// A readable document with no usable text is `Ok(Extraction::Empty)`.
    fn extract_bytes(&mut self, data: &[u8]) -> Result<Extraction>;

    /// Extract plain text from a file path
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    fn extract_file<P: AsRef<Path>>(&mut self, path: P) -> Result<Extraction>
    where
        Self: Sized,
    {
        let data = std::fs::read(path.as_ref())?;
        self.extract_bytes(&data)
    }

    /// Check if this extractor can handle the given format
    fn can_handle(&self, format: InputFormat) -> bool {
        self.format() == format
    }
}
