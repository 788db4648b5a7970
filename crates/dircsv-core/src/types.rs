//! Core types for dircsv.
//!
//! - [`Record`]: one scanned file, the unit the exporter writes
//! - [`ScanReport`]: everything a scan produced, including what it dropped
//! - [`SortOrder`]: how the finished record sequence is ordered
//! - [`ExportOutcome`]: result of a successful export call

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::SkipReason;

// ============================================================================
// Records
// ============================================================================

/// One row of the output file.
///
/// Built once by the scanner and never mutated. Field order matches the CSV
/// column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    relative_path: String,
    file_name: String,
    file_extension: String,
    content: String,
}

impl Record {
    /// Create a record. `content` must already be CSV-safe.
    #[must_use]
    pub fn new(
        relative_path: impl Into<String>,
        file_name: impl Into<String>,
        file_extension: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            relative_path: relative_path.into(),
            file_name: file_name.into(),
            file_extension: file_extension.into(),
            content: content.into(),
        }
    }

    /// Path prefixed with the scanned folder's own name.
    #[must_use]
    pub fn relative_path(&self) -> &str {
        &self.relative_path
    }

    /// Base name including the extension.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Lowercase extension with its leading dot, or empty.
    #[must_use]
    pub fn file_extension(&self) -> &str {
        &self.file_extension
    }

    /// Extracted CSV-safe text, a bracketed placeholder, or empty.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }
}

/// CSV column names, in order.
pub const CSV_COLUMNS: [&str; 4] = ["relative_path", "file_name", "file_extension", "content"];

// ============================================================================
// Scan results
// ============================================================================

/// Ordering of the finished record sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Order in which the walker discovered the files.
    #[default]
    Discovery,
    /// Sorted by `relative_path`.
    #[serde(alias = "path")]
    RelativePath,
}

/// A file that was included by the policy but could not become a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: SkipReason,
}

/// A directory entry the walker could not visit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalError {
    /// Offending path, when the walker knows it
    pub path: Option<PathBuf>,
    pub message: String,
}

/// Everything one scan produced.
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    /// Canonical scan root
    pub root: PathBuf,
    /// Records in the requested order
    pub records: Vec<Record>,
    /// Included files dropped during record building
    pub skipped: Vec<SkippedFile>,
    /// Subtrees or entries the walker could not visit
    pub errors: Vec<TraversalError>,
    /// The scan stopped early on request
    pub cancelled: bool,
}

impl ScanReport {
    /// Whether nothing was skipped, nothing failed and the walk finished.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty() && self.errors.is_empty() && !self.cancelled
    }

    /// Consume the report, keeping only the records.
    #[must_use]
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}

/// What the CSV exporter did with a record sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The file was written with a header and `rows` data rows.
    Written { path: PathBuf, rows: usize },
    /// There were no records, so no file was created.
    NothingToExport,
}
