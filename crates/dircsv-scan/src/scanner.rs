//! Directory walker.

use crate::record::{build_record, extension_of};
use dircsv_core::policy::{self, PROBE_MAX_FILE_SIZE};
use dircsv_core::{ExportOutcome, ScanError, ScanReport, SkippedFile, SortOrder, TraversalError};
use dircsv_csv::export;
use dircsv_extract::ExtractorRegistry;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

/// Configuration for the scanner.
#[derive(Debug, Clone, Copy)]
pub struct ScanOptions {
    /// Descend into symlinked directories and read symlinked files
    pub follow_links: bool,
    /// Order of the finished records
    pub order: SortOrder,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            follow_links: true,
            order: SortOrder::Discovery,
        }
    }
}

/// Walks one directory tree and builds its records.
pub struct Scanner {
    /// Extractor registry
    extractors: Arc<ExtractorRegistry>,
    /// Configuration
    options: ScanOptions,
    /// Set from outside to stop the walk between files
    cancel: Option<Arc<AtomicBool>>,
}

impl Scanner {
    /// Create a scanner with an explicit registry.
    pub fn new(extractors: Arc<ExtractorRegistry>, options: ScanOptions) -> Self {
        Self {
            extractors,
            options,
            cancel: None,
        }
    }

    /// Create a scanner with the default extractors.
    pub fn with_options(options: ScanOptions) -> Self {
        Self::new(Arc::new(ExtractorRegistry::with_defaults()), options)
    }

    /// Stop the walk once `flag` becomes true. Records built so far are kept.
    #[must_use]
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Options in effect.
    pub fn options(&self) -> &ScanOptions {
        &self.options
    }

    /// Scan `root` and every directory below it.
    ///
    /// Only an unusable root fails the call. Unreadable subtrees, symlink
    /// loops and files that cannot be turned into records are collected in
    /// the report instead.
    pub fn scan(&self, root: &Path) -> Result<ScanReport, ScanError> {
        let root = root
            .canonicalize()
            .map_err(|source| ScanError::InvalidRoot {
                path: root.to_path_buf(),
                source,
            })?;
        if !root.is_dir() {
            return Err(ScanError::NotADirectory(root));
        }

        info!("Scanning folder: {:?}", root);

        let mut report = ScanReport {
            root: root.clone(),
            ..ScanReport::default()
        };

        let walker = WalkDir::new(&root).follow_links(self.options.follow_links);
        for entry in walker {
            if self.is_cancelled() {
                warn!("Scan cancelled after {} files", report.records.len());
                report.cancelled = true;
                break;
            }

            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Cannot read {:?}: {}", e.path(), e);
                    report.errors.push(TraversalError {
                        path: e.path().map(Path::to_path_buf),
                        message: e.to_string(),
                    });
                    continue;
                }
            };

            if !entry.file_type().is_file() || !should_include(&entry) {
                continue;
            }

            match build_record(&self.extractors, &root, entry.path()) {
                Ok(record) => {
                    debug!("Processed {:?}", entry.path());
                    report.records.push(record);
                }
                Err(reason) => {
                    warn!("File could not be processed: {}", reason);
                    report.skipped.push(SkippedFile {
                        path: entry.path().to_path_buf(),
                        reason,
                    });
                }
            }
        }

        if self.options.order == SortOrder::RelativePath {
            report
                .records
                .sort_by(|a, b| a.relative_path().cmp(b.relative_path()));
        }

        info!("Total files found: {}", report.records.len());
        Ok(report)
    }

    fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Self::with_options(ScanOptions::default())
    }
}

/// Scan `root` with default options and extractors.
pub fn scan(root: &Path) -> Result<ScanReport, ScanError> {
    Scanner::default().scan(root)
}

/// Scan `root` and write the records to `destination` in one call.
pub fn scan_to_csv(root: &Path, destination: &Path) -> dircsv_core::Result<ExportOutcome> {
    let report = scan(root)?;
    Ok(export(&report.records, destination)?)
}

/// Inclusion rule for a regular file.
fn should_include(entry: &DirEntry) -> bool {
    if policy::is_target(&extension_of(entry.path())) {
        return true;
    }
    let size = entry.metadata().ok().map(|m| m.len());
    passes_probe(&entry.file_name().to_string_lossy(), size)
}

/// Files outside the target set need a known size within the probe limit and
/// a name that does not mark them hidden or temporary.
fn passes_probe(file_name: &str, size: Option<u64>) -> bool {
    let Some(size) = size else {
        return false;
    };
    size <= PROBE_MAX_FILE_SIZE && !file_name.starts_with('.') && !file_name.starts_with('~')
}
