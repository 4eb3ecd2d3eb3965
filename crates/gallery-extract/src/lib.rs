//! # Gallery Extract: document text-extraction pipeline
//!
//! The one piece of the AI app gallery with real local logic: turning an
//! uploaded PDF, DOCX, or image into plain text before the result is
//! handed to an external model.
//!
//! # Architecture
//!
//! ```text
//! uploaded bytes + filename
//!         │
//!         ▼
//!   TextPipeline ── unrecognized extension ──► Extraction::Empty
//!         │
//!    InputFormat
//!    ┌────┼─────────────┐
//!    ▼    ▼             ▼
//!  PdfExtractor   DocxExtractor   ImageExtractor
//!  (lopdf text    (zip +          (image decode +
//!   layer, OCR     quick-xml)      Tesseract)
//!   fallback via
//!   pdftoppm)
//! ```
//!
//! Every extractor returns [`Extraction`]: usable text, or explicitly
//! empty. Hard failures (corrupt container, undecodable image) are
//! errors. Temporary files created along the way are scoped to the
//! extraction call and removed on every exit path.

pub mod compose;
pub mod docx;
pub mod pdf;
pub mod pipeline;
pub mod raster;
pub mod spool;
pub mod traits;

pub use compose::compose_docx;
pub use docx::DocxExtractor;
pub use raster::ImageExtractor;
pub use pdf::PdfExtractor;
pub use pipeline::TextPipeline;
pub use spool::Spooled;
pub use traits::{ExtractOptions, TextExtractor, TextRecognizer};

pub use gallery_core::{Extraction, GalleryError, InputFormat, Result};
