//! # dircsv-extract
//!
//! Content extraction for the dircsv scanner.
//!
//! ## Extractors
//!
//! | Extractor | Extensions | Backend |
//! |-----------|------------|---------|
//! | [`TextExtractor`] | `.txt`, `.md`, `.json`, `.cs`, `.py`, `.xml`, `.html`, and 25+ more | encoding chain: UTF-8, UTF-8 with BOM, Latin-1, Windows-1252 |
//! | [`PdfExtractor`] | `.pdf` | `lopdf` page by page, then `pdf-extract` as a layout-aware fallback |
//! | [`DocxExtractor`] | `.docx` | `zip` + `quick-xml`: paragraphs, then table cells |
//!
//! Files with an unknown extension are judged by [`looks_like_text`] on their
//! first [`SAMPLE_SIZE`] bytes before anything is decoded.
//!
//! ## Feature Flags
//!
//! | Feature | Default | Enables |
//! |---------|---------|---------|
//! | `pdf-fast` | yes | `lopdf` page extraction |
//! | `pdf-layout` | yes | `pdf-extract` fallback |
//! | `docx` | yes | DOCX extraction |
//!
//! A disabled backend is still registered; it reports
//! [`ExtractError::Unavailable`](dircsv_core::ExtractError::Unavailable) so the
//! record carries an installation note instead of silently empty content.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use dircsv_extract::ExtractorRegistry;
//!
//! let registry = ExtractorRegistry::with_defaults();
//! let text = registry.extract(".pdf", Path::new("report.pdf"))
//!     .unwrap_or_else(|e| e.into_sentinel());
//! ```

pub mod detect;
pub mod docx;
pub mod pdf;
pub mod registry;
pub mod text;

pub use detect::{looks_like_text, probe_file, read_unclassified, SAMPLE_SIZE, TEXT_RATIO_PERCENT};
pub use docx::DocxExtractor;
pub use pdf::PdfExtractor;
pub use registry::ExtractorRegistry;
pub use text::{
    decode, read_text_file, TextEncoding, TextExtractor, ENCODING_CHAIN, ENCODING_FAILED_SENTINEL,
};
