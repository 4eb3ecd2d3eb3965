//! Optical Character Recognition support for the AI app gallery
//!
//! Recognition is delegated to Tesseract through the `leptess` bindings;
//! no recognition algorithm lives here. The crate adds two things on top:
//!
//! 1. [`OcrEngine`]: a thin engine wrapper that recognizes whole rasters
//!    (decoded images or image files) and returns plain text verbatim.
//! 2. [`rasterize`]: PDF page rasterization by shelling out to the
//!    Poppler `pdftoppm` binary, used by the PDF extractor's OCR fallback
//!    for scanned documents with no text layer.
//!
//! Tesseract language data must be installed on the host; engine
//! construction fails fast when it is not.

pub mod engine;
pub mod rasterize;

pub use engine::{OcrEngine, DEFAULT_LANGUAGE};
pub use rasterize::{rasterize_pdf, PageImages, DEFAULT_RASTER_DPI};

use thiserror::Error;

/// OCR-specific errors
#[derive(Error, Debug)]
pub enum OcrError {
    /// Tesseract could not be initialized (missing language data or
    /// library misconfiguration)
    #[error("Failed to initialize OCR engine: {0}")]
    Init(String),

    /// Recognition over a prepared raster failed
    #[error("Failed to recognize text: {0}")]
    Recognition(String),

    /// The raster could not be handed to the engine (re-encoding or
    /// image loading failure)
    #[error("Failed to prepare image for OCR: {0}")]
    Image(String),

    /// The external `pdftoppm` binary failed or produced no page images
    #[error("Failed to rasterize PDF: {0}")]
    Rasterize(String),

    /// Filesystem error while spooling or scanning rasterizer output
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
