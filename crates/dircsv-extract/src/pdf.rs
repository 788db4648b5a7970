//! PDF content extractor.
//!
//! Two passes: `lopdf` pulls text page by page (fast, joins pages with
//! newlines), and `pdf-extract` reruns the whole document with layout analysis
//! when the first pass fails or finds nothing. Either backend can be compiled
//! out; with both gone every PDF gets an installation note.

use dircsv_core::{DocumentExtractor, ExtractError};
use std::path::Path;
use tracing::{debug, warn};

const FORMAT: &str = "PDF";

/// Extractor for PDF files.
pub struct PdfExtractor;

impl PdfExtractor {
    /// Create a new PDF extractor.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Whether at least one PDF backend was compiled in.
    #[must_use]
    pub fn is_available() -> bool {
        cfg!(any(feature = "pdf-fast", feature = "pdf-layout"))
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentExtractor for PdfExtractor {
    fn name(&self) -> &str {
        "pdf"
    }

    fn extensions(&self) -> &[&str] {
        &[".pdf"]
    }

    fn extract(&self, path: &Path) -> Result<String, ExtractError> {
        if !Self::is_available() {
            return Err(unavailable());
        }

        debug!("Extracting PDF: {:?}", path);
        let bytes = std::fs::read(path).map_err(|e| ExtractError::read(FORMAT, e))?;
        extract_pdf_bytes(&bytes)
    }
}

fn unavailable() -> ExtractError {
    ExtractError::Unavailable {
        format: FORMAT,
        hint: "No PDF text library available. Build with the 'pdf-fast' or 'pdf-layout' feature",
    }
}

/// Run the fast pass, then the layout pass if the fast pass gave nothing.
pub fn extract_pdf_bytes(bytes: &[u8]) -> Result<String, ExtractError> {
    combine_passes(fast_pass(bytes), || layout_pass(bytes))
}

/// Pick the result of the two passes.
///
/// Each pass is `None` when its backend is not compiled in. The layout pass
/// only runs when the fast pass is missing, empty or failed.
fn combine_passes<L>(
    fast: Option<Result<String, String>>,
    layout: L,
) -> Result<String, ExtractError>
where
    L: FnOnce() -> Option<Result<String, String>>,
{
    let fast = match fast {
        Some(Ok(text)) if !text.is_empty() => return Ok(text),
        Some(Ok(_)) => {
            debug!("lopdf found no text, trying layout extraction");
            Some(Ok(String::new()))
        }
        Some(Err(e)) => {
            debug!("lopdf failed ({}), trying layout extraction", e);
            Some(Err(e))
        }
        None => None,
    };

    match layout() {
        Some(result) => result.map_err(|e| ExtractError::read(FORMAT, e)),
        None => match fast {
            Some(Ok(text)) => Ok(text),
            Some(Err(e)) => Err(ExtractError::read(FORMAT, e)),
            None => Err(unavailable()),
        },
    }
}

/// Run a parser, turning a panic into an error message.
///
/// Both backends are known to panic on some malformed files.
#[cfg_attr(not(any(feature = "pdf-fast", feature = "pdf-layout")), allow(dead_code))]
fn guarded<F>(backend: &str, parse: F) -> Result<String, String>
where
    F: FnOnce() -> Result<String, String>,
{
    std::panic::catch_unwind(std::panic::AssertUnwindSafe(parse)).unwrap_or_else(|_| {
        warn!("{} panicked while parsing a PDF", backend);
        Err(format!("{backend} could not parse the document"))
    })
}

#[cfg(feature = "pdf-fast")]
fn fast_pass(bytes: &[u8]) -> Option<Result<String, String>> {
    Some(guarded("lopdf", || {
        let doc = lopdf::Document::load_mem(bytes).map_err(|e| e.to_string())?;
        let mut pages = Vec::new();
        for page_number in doc.get_pages().keys() {
            let text = doc
                .extract_text(&[*page_number])
                .map_err(|e| e.to_string())?;
            pages.push(text);
        }
        Ok(pages.join("\n").trim().to_string())
    }))
}

#[cfg(not(feature = "pdf-fast"))]
fn fast_pass(_bytes: &[u8]) -> Option<Result<String, String>> {
    None
}

#[cfg(feature = "pdf-layout")]
fn layout_pass(bytes: &[u8]) -> Option<Result<String, String>> {
    Some(guarded("pdf-extract", || {
        pdf_extract::extract_text_from_mem(bytes).map_err(|e| e.to_string())
    }))
}

#[cfg(not(feature = "pdf-layout"))]
fn layout_pass(_bytes: &[u8]) -> Option<Result<String, String>> {
    None
}
