//! Error types for text extraction and collaborator calls.
//!
//! Every layer of the pipeline funnels its failures into [`GalleryError`],
//! so callers can match on the failure class without knowing which parser
//! or external binary produced it.

use thiserror::Error;

/// Error types that can occur while extracting text or talking to an
/// external collaborator.
///
/// # Examples
///
/// ```rust,ignore
/// use gallery_core::{GalleryError, Result};
///
/// fn read_input(path: &str) -> Result<Vec<u8>> {
///     Ok(std::fs::read(path)?)
/// }
///
/// match read_input("missing.pdf") {
///     Err(GalleryError::Io(e)) => eprintln!("file error: {e}"),
///     Err(e) => eprintln!("other error: {e}"),
///     Ok(_) => {}
/// }
/// ```
#[derive(Error, Debug)]
pub enum GalleryError {
    /// File I/O error: reading uploads, writing spool files, walking
    /// rasterizer output directories.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error from collaborator wire
    /// types.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Format detection failed or the format is malformed in a way the
    /// dispatcher itself notices (not the per-format parsers).
    #[error("Format detection error: {0}")]
    Format(String),

    /// A format-specific parser could not read the document structure
    /// (corrupt PDF/DOCX, undecodable image).
    #[error("Extraction error: {0}")]
    Extraction(String),

    /// Optical character recognition failed: engine initialization, page
    /// rasterization, or recognition itself.
    #[error("OCR error: {0}")]
    Ocr(String),

    /// A required configuration value (API key) is missing or empty.
    #[error("Configuration error: {0}")]
    Config(String),

    /// An external AI/translation endpoint returned a failure.
    #[error("Collaborator error: {0}")]
    Collaborator(String),
}

/// Type alias for [`Result<T, GalleryError>`].
pub type Result<T> = std::result::Result<T, GalleryError>;
