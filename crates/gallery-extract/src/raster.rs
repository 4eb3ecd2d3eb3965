//! Raster image text extractor
//!
//! Decodes the upload and recognizes the whole raster. The recognized
//! text is returned verbatim, with no post-processing and no confidence
//! threshold. An undecodable image is a raised error, never a silent
//! empty result: the caller must be able to tell "nothing found" from
//! "could not even open the image".

use crate::traits::{TextExtractor, TextRecognizer};
use gallery_core::{Extraction, GalleryError, InputFormat, Result};
use image::ImageReader;
use std::io::Cursor;

/// Image extractor parameterized over the recognizer seam.
#[derive(Debug)]
pub struct ImageExtractor<R> {
    recognizer: R,
    format: InputFormat,
}

impl<R: TextRecognizer> ImageExtractor<R> {
    /// Create an extractor for one of the image formats.
    ///
    /// # Panics
    ///
    /// Panics if `format` is not an image format; the pipeline only
    /// routes PNG/JPEG here.
    #[must_use = "creates a new image extractor"]
    pub fn new(recognizer: R, format: InputFormat) -> Self {
        assert!(format.is_image(), "ImageExtractor requires an image format");
        Self { recognizer, format }
    }
}

impl<R: TextRecognizer> TextExtractor for ImageExtractor<R> {
    #[inline]
    fn format(&self) -> InputFormat {
        self.format
    }

    fn extract_bytes(&mut self, data: &[u8]) -> Result<Extraction> {
        let img = ImageReader::new(Cursor::new(data))
            .with_guessed_format()
            .map_err(|e| GalleryError::Extraction(format!("failed to read image: {e}")))?
            .decode()
            .map_err(|e| GalleryError::Extraction(format!("failed to decode image: {e}")))?;

        let text = self.recognizer.recognize_image(&img)?;
        Ok(Extraction::from_text(text))
    }
}
