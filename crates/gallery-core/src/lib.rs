//! # Gallery Core: shared types for the AI app gallery
//!
//! The gallery is a set of small demo tools (contract risk analysis,
//! document parsing, prescription transcription, translation, story
//! generation) that share one local pipeline: turning an uploaded PDF,
//! DOCX, or image into plain text before handing it to an external model.
//!
//! This crate holds the types every other crate agrees on:
//!
//! - [`InputFormat`]: the accepted upload formats and extension-based
//!   detection
//! - [`Extraction`]: the explicit text/empty result of an extractor run
//! - [`GalleryError`] / [`Result`]: the shared error taxonomy
//! - [`sanitize_for_xml`]: control-character cleanup for regenerated
//!   documents

pub mod error;
pub mod extraction;
pub mod format;
pub mod sanitize;

pub use error::{GalleryError, Result};
pub use extraction::Extraction;
pub use format::InputFormat;
pub use sanitize::sanitize_for_xml;
