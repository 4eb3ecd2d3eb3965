//! Tesseract engine wrapper
//!
//! Mirrors the behavior of calling Tesseract over a whole page image:
//! the recognized text is returned verbatim, with no post-processing and
//! no confidence threshold. Whether "no text found" matters is the
//! caller's decision.

use crate::OcrError;
use image::DynamicImage;
use leptess::LepTess;
use std::io::Cursor;
use std::path::Path;

/// Default Tesseract language
pub const DEFAULT_LANGUAGE: &str = "eng";

/// OCR engine recognizing text in whole raster images.
///
/// Construction initializes Tesseract with the requested language and
/// fails fast if the language data is unavailable. Recognition methods
/// take `&mut self` because the underlying Tesseract handle is stateful
/// (one image loaded at a time).
pub struct OcrEngine {
    tess: LepTess,
    language: String,
}

impl OcrEngine {
    /// Create an engine for the default language.
    ///
    /// # Errors
    ///
    /// Returns [`OcrError::Init`] if Tesseract cannot be initialized,
    /// typically because the language data is not installed.
    pub fn new() -> Result<Self, OcrError> {
        Self::with_language(DEFAULT_LANGUAGE)
    }

    /// Create an engine for a specific Tesseract language code
    /// (e.g. `"eng"`, `"hin"`).
    ///
    /// # Errors
    ///
    /// Returns [`OcrError::Init`] if Tesseract cannot be initialized for
    /// the requested language.
    pub fn with_language(language: &str) -> Result<Self, OcrError> {
        let tess = LepTess::new(None, language).map_err(|e| OcrError::Init(e.to_string()))?;
        Ok(Self {
            tess,
            language: language.to_string(),
        })
    }

    /// The language this engine was initialized with.
    #[inline]
    #[must_use = "returns the engine's language code"]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Recognize text in an already-decoded image.
    ///
    /// The raster is re-encoded as PNG in memory before being handed to
    /// Tesseract, which only ingests encoded image bytes or files.
    ///
    /// # Errors
    ///
    /// Returns [`OcrError::Image`] if the raster cannot be handed to the
    /// engine, or [`OcrError::Recognition`] if recognition itself fails.
    pub fn recognize_image(&mut self, image: &DynamicImage) -> Result<String, OcrError> {
        let mut encoded = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut encoded), image::ImageFormat::Png)
            .map_err(|e| OcrError::Image(format!("PNG re-encode failed: {e}")))?;

        self.tess
            .set_image_from_mem(&encoded)
            .map_err(|e| OcrError::Image(e.to_string()))?;
        self.tess
            .get_utf8_text()
            .map_err(|e| OcrError::Recognition(e.to_string()))
    }

    /// Recognize text in an image file on disk.
    ///
    /// Used by the PDF OCR fallback, which works off page images the
    /// rasterizer already wrote to a scratch directory.
    ///
    /// # Errors
    ///
    /// Returns [`OcrError::Image`] if the file cannot be loaded, or
    /// [`OcrError::Recognition`] if recognition fails.
    pub fn recognize_file(&mut self, path: &Path) -> Result<String, OcrError> {
        self.tess
            .set_image(path)
            .map_err(|e| OcrError::Image(format!("{}: {e}", path.display())))?;
        self.tess
            .get_utf8_text()
            .map_err(|e| OcrError::Recognition(e.to_string()))
    }
}

impl std::fmt::Debug for OcrEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OcrEngine")
            .field("language", &self.language)
            .finish_non_exhaustive()
    }
}
