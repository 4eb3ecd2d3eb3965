//! PDF page rasterization via `pdftoppm`
//!
//! Scanned PDFs have no text layer, so the fallback path renders every
//! page to a PNG and recognizes each raster independently. Rendering is
//! delegated to Poppler's `pdftoppm` binary: it reads the PDF from a path
//! on disk (the caller must have flushed the bytes there) and writes
//! `<prefix>-<n>.png` files into a scratch directory that is removed
//! recursively when the result is dropped.

use crate::OcrError;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Default render resolution in DPI.
///
/// Matches the default the original pipeline relied on from its
/// rasterization library.
pub const DEFAULT_RASTER_DPI: u32 = 200;

/// Filename prefix for rendered pages, yielding `page-1.png`,
/// `page-2.png`, ...
const PAGE_PREFIX: &str = "page";

/// Rendered page images, in page order.
///
/// Owns the scratch directory the images live in; the files disappear
/// when this value is dropped, on every exit path.
#[derive(Debug)]
pub struct PageImages {
    // Held for its Drop; never read after construction.
    _scratch: TempDir,
    pages: Vec<PathBuf>,
}

impl PageImages {
    /// Paths of the rendered pages, sorted by page number.
    #[inline]
    #[must_use = "returns the rendered page paths"]
    pub fn paths(&self) -> &[PathBuf] {
        &self.pages
    }

    /// Number of rendered pages.
    #[inline]
    #[must_use = "returns the rendered page count"]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Whether no pages were rendered.
    #[inline]
    #[must_use = "returns whether no pages were rendered"]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

/// Render every page of a PDF to PNG at the given resolution.
///
/// # Errors
///
/// Returns [`OcrError::Rasterize`] if `pdftoppm` cannot be spawned, exits
/// unsuccessfully, or produces no page images, and [`OcrError::Io`] for
/// filesystem failures while scanning its output.
pub fn rasterize_pdf(pdf_path: &Path, dpi: u32) -> Result<PageImages, OcrError> {
    let scratch = TempDir::with_prefix("gallery-ocr-")?;

    log::debug!("rasterizing {} at {dpi} dpi", pdf_path.display());
    let status = Command::new("pdftoppm")
        .arg("-png")
        .arg("-r")
        .arg(dpi.to_string())
        .arg(pdf_path)
        .arg(scratch.path().join(PAGE_PREFIX))
        .status()
        .map_err(|e| OcrError::Rasterize(format!("failed to run pdftoppm: {e}")))?;

    if !status.success() {
        return Err(OcrError::Rasterize(format!(
            "pdftoppm exited with {status}"
        )));
    }

    let mut numbered = Vec::new();
    for entry in std::fs::read_dir(scratch.path())? {
        let path = entry?.path();
        if let Some(n) = page_number(&path) {
            numbered.push((n, path));
        }
    }
    numbered.sort_by_key(|(n, _)| *n);

    if numbered.is_empty() {
        return Err(OcrError::Rasterize(
            "pdftoppm produced no page images".to_string(),
        ));
    }

    Ok(PageImages {
        _scratch: scratch,
        pages: numbered.into_iter().map(|(_, p)| p).collect(),
    })
}

/// Parse the page number out of a `page-<n>.png` path.
///
/// `pdftoppm` zero-pads depending on page count (`page-01.png`), so the
/// numeric value is parsed rather than compared as a string.
fn page_number(path: &Path) -> Option<usize> {
    if path.extension().and_then(|e| e.to_str()) != Some("png") {
        return None;
    }
    let stem = path.file_stem()?.to_str()?;
    let (prefix, number) = stem.rsplit_once('-')?;
    if prefix != PAGE_PREFIX {
        return None;
    }
    number.parse().ok()
}
