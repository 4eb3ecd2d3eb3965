//! Temporary storage for uploaded bytes
//!
//! Extractors that delegate to external processes (the PDF rasterizer)
//! need the upload materialized as a real file. [`Spooled`] owns that
//! file: uniquely named, fully written and flushed before the path is
//! handed out, and deleted when dropped: on success, error return, or
//! panic alike. One spool file exists per in-flight extraction.

use gallery_core::Result;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// An uploaded artifact spooled to disk for the lifetime of one
/// extraction.
#[derive(Debug)]
pub struct Spooled {
    file: NamedTempFile,
}

impl Spooled {
    /// Write `data` to a uniquely named temporary file carrying the given
    /// extension (without the dot).
    ///
    /// The bytes are flushed before returning so external processes that
    /// open the path see the full content, not a partially buffered file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or written.
    pub fn write(data: &[u8], extension: &str) -> Result<Self> {
        let mut file = tempfile::Builder::new()
            .prefix("gallery-upload-")
            .suffix(&format!(".{extension}"))
            .tempfile()?;
        file.write_all(data)?;
        file.flush()?;
        Ok(Self { file })
    }

    /// Path of the spooled file, valid until this value is dropped.
    #[inline]
    #[must_use = "returns the spool file path"]
    pub fn path(&self) -> &Path {
        self.file.path()
    }
}
