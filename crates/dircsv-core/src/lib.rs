//! # dircsv-core
//!
//! Core types, classification policy and traits shared by the dircsv crates.
//!
//! dircsv walks a directory tree, classifies every file by extension, pulls
//! readable text out of it where it can, and flattens the whole tree into a
//! single CSV file with one row per file.
//!
//! ## Pipeline
//!
//! ```text
//! walk → policy → extractor / decoder / heuristic → csv-safe escape → Record
//!                                                                      ↓
//!                                                         export (written once)
//! ```
//!
//! ## Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Record`] | One scanned file: relative path, name, extension, content |
//! | [`FileKind`] | Extension class resolved once per file |
//! | [`ScanReport`] | Records plus skipped files and traversal errors |
//! | [`ExportOutcome`] | Whether the exporter wrote a file |
//!
//! ## Key Traits
//!
//! | Trait | Purpose |
//! |-------|---------|
//! | [`DocumentExtractor`] | Turn a file into plain text, or explain why it cannot |
//!
//! ## Related Crates
//!
//! - `dircsv-extract`: text decoding, binary heuristic, PDF and DOCX extraction
//! - `dircsv-csv`: CSV-safe escaping and the tabular exporter
//! - `dircsv-scan`: directory walker and record builder

pub mod error;
pub mod policy;
pub mod traits;
pub mod types;

pub use error::{Error, ExportError, ExtractError, Result, ScanError, SkipReason};
pub use policy::{Classification, FileKind};
pub use traits::DocumentExtractor;
pub use types::*;
