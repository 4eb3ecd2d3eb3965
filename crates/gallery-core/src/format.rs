//! Input format types for the upload pipeline
//!
//! This module defines the `InputFormat` enum covering the formats the
//! gallery accepts as uploads.

use serde::{Deserialize, Serialize};

/// Input document format
///
/// Dispatch is purely filename-extension based; no content sniffing is
/// performed. A spoofed extension will be routed to the wrong extractor,
/// which is an accepted limitation for trusted single-user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum InputFormat {
    /// PDF document
    #[serde(rename = "PDF")]
    Pdf,
    /// Microsoft Word document (.docx)
    #[serde(rename = "DOCX")]
    Docx,
    /// PNG image
    #[serde(rename = "PNG")]
    Png,
    /// JPEG image
    #[serde(rename = "JPEG")]
    Jpeg,
}

impl InputFormat {
    /// Detect format from file extension
    #[inline]
    #[must_use = "detects format from file extension"]
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            "png" => Some(Self::Png),
            "jpg" | "jpeg" => Some(Self::Jpeg),
            _ => None,
        }
    }

    /// Detect format from a filename's final extension.
    ///
    /// Returns `None` for names without a recognized extension; the
    /// pipeline turns that into an empty extraction rather than an error
    /// (permissive fallback).
    #[inline]
    #[must_use = "detects format from a filename"]
    pub fn from_filename(name: &str) -> Option<Self> {
        let ext = name.rsplit('.').next()?;
        if ext.len() == name.len() {
            // No '.' in the name at all.
            return None;
        }
        Self::from_extension(ext)
    }

    /// Get file extensions associated with this format
    #[inline]
    #[must_use = "returns file extensions for this format"]
    pub const fn extensions(&self) -> &'static [&'static str] {
        match self {
            Self::Pdf => &["pdf"],
            Self::Docx => &["docx"],
            Self::Png => &["png"],
            Self::Jpeg => &["jpg", "jpeg"],
        }
    }

    /// Check if this is an image format
    #[inline]
    #[must_use = "returns whether this is an image format"]
    pub const fn is_image(&self) -> bool {
        matches!(self, Self::Png | Self::Jpeg)
    }

    /// All formats the pipeline accepts
    #[inline]
    #[must_use = "returns the supported format set"]
    pub const fn all() -> &'static [Self] {
        &[Self::Pdf, Self::Docx, Self::Png, Self::Jpeg]
    }
}

impl std::fmt::Display for InputFormat {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Pdf => "PDF",
            Self::Docx => "DOCX",
            Self::Png => "PNG",
            Self::Jpeg => "JPEG",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for InputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "PDF" => Ok(Self::Pdf),
            "DOCX" => Ok(Self::Docx),
            "PNG" => Ok(Self::Png),
            "JPEG" | "JPG" => Ok(Self::Jpeg),
            _ => Err(format!("unknown input format: '{s}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extension() {
        assert_eq!(InputFormat::from_extension("pdf"), Some(InputFormat::Pdf));
        assert_eq!(InputFormat::from_extension("PDF"), Some(InputFormat::Pdf));
        assert_eq!(InputFormat::from_extension("docx"), Some(InputFormat::Docx));
        assert_eq!(InputFormat::from_extension("jpg"), Some(InputFormat::Jpeg));
        assert_eq!(InputFormat::from_extension("jpeg"), Some(InputFormat::Jpeg));
        assert_eq!(InputFormat::from_extension("png"), Some(InputFormat::Png));
        assert_eq!(InputFormat::from_extension("txt"), None);
        assert_eq!(InputFormat::from_extension(""), None);
    }

    #[test]
    fn test_from_filename() {
        assert_eq!(
            InputFormat::from_filename("contract.pdf"),
            Some(InputFormat::Pdf)
        );
        assert_eq!(
            InputFormat::from_filename("notice.final.DOCX"),
            Some(InputFormat::Docx)
        );
        assert_eq!(
            InputFormat::from_filename("scan.JPeG"),
            Some(InputFormat::Jpeg)
        );
        assert_eq!(InputFormat::from_filename("archive.tar.gz"), None);
        assert_eq!(InputFormat::from_filename("no_extension"), None);
        assert_eq!(InputFormat::from_filename(""), None);
    }

    #[test]
    fn test_extensions_roundtrip() {
        for format in InputFormat::all() {
            let exts = format.extensions();
            assert!(!exts.is_empty(), "Format {format:?} should have extensions");
            for ext in exts {
                assert_eq!(
                    InputFormat::from_extension(ext),
                    Some(*format),
                    "Extension '{ext}' should parse back to {format:?}"
                );
            }
        }
    }

    #[test]
    fn test_is_image() {
        assert!(InputFormat::Png.is_image());
        assert!(InputFormat::Jpeg.is_image());
        assert!(!InputFormat::Pdf.is_image());
        assert!(!InputFormat::Docx.is_image());
    }

    #[test]
    fn test_display_trait() {
        assert_eq!(format!("{}", InputFormat::Pdf), "PDF");
        assert_eq!(format!("{}", InputFormat::Docx), "DOCX");
        assert_eq!(format!("{}", InputFormat::Png), "PNG");
        assert_eq!(format!("{}", InputFormat::Jpeg), "JPEG");
    }

    #[test]
    fn test_from_str() {
        use std::str::FromStr;

        assert_eq!(InputFormat::from_str("pdf").unwrap(), InputFormat::Pdf);
        assert_eq!(InputFormat::from_str("JPG").unwrap(), InputFormat::Jpeg);
        assert_eq!(InputFormat::from_str("Docx").unwrap(), InputFormat::Docx);
        assert!(InputFormat::from_str("xlsx").is_err());
        assert!(InputFormat::from_str("").is_err());
    }

    #[test]
    fn test_serialization() {
        let format = InputFormat::Pdf;
        let json = serde_json::to_string(&format).unwrap();
        assert_eq!(json, r#""PDF""#);

        let deserialized: InputFormat = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, InputFormat::Pdf);
    }

    #[test]
    fn test_display_fromstr_roundtrip() {
        use std::str::FromStr;

        for format in InputFormat::all() {
            let s = format.to_string();
            let parsed = InputFormat::from_str(&s).unwrap();
            assert_eq!(*format, parsed, "Roundtrip failed for {format:?}");
        }
    }
}
