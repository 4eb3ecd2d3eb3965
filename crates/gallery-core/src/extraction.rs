//! Extraction result type
//!
//! The original pipeline signalled "nothing found" with an empty string,
//! which made it impossible to tell a blank scan apart from a parser that
//! never ran. [`Extraction`] makes the distinction explicit: extractors
//! return `Ok(Text)` or `Ok(Empty)`, and hard failures are `Err`.

use serde::{Deserialize, Serialize};

/// Outcome of a successful extractor run.
///
/// "Successful" means the extractor could read the artifact; whether it
/// found any usable text is this enum. Failures to even read the artifact
/// are reported as [`crate::GalleryError`] instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Extraction {
    /// Usable text was found. Guaranteed non-empty after trimming when
    /// built through [`Extraction::from_text`].
    Text(String),
    /// Extraction ran to completion but produced no usable text
    /// (blank scan, OCR found nothing, unrecognized extension).
    Empty,
}

impl Extraction {
    /// Build an extraction from raw extractor output, normalizing
    /// whitespace-only output to [`Extraction::Empty`].
    #[inline]
    #[must_use = "returns the normalized extraction result"]
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        if text.trim().is_empty() {
            Self::Empty
        } else {
            Self::Text(text)
        }
    }

    /// The extracted text, if any.
    #[inline]
    #[must_use = "returns the extracted text if present"]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text(t) => Some(t),
            Self::Empty => None,
        }
    }

    /// Consume the extraction, yielding the text if any.
    #[inline]
    #[must_use = "consumes the extraction and returns the text if present"]
    pub fn into_text(self) -> Option<String> {
        match self {
            Self::Text(t) => Some(t),
            Self::Empty => None,
        }
    }

    /// Whether no usable text was found.
    #[inline]
    #[must_use = "returns whether the extraction is empty"]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}
