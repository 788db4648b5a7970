//! Error types for dircsv.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for dircsv operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The scan could not start
    #[error("scan error: {0}")]
    Scan(#[from] ScanError),

    /// Writing the CSV failed
    #[error("export error: {0}")]
    Export(#[from] ExportError),
}

/// Content extraction errors.
///
/// These never escape the record builder: every variant is rendered into a
/// bracketed sentinel via [`ExtractError::into_sentinel`] and stored as the
/// record's content.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The library needed for this format was not compiled in.
    #[error("{format} support is not available: {hint}")]
    Unavailable {
        format: &'static str,
        hint: &'static str,
    },

    /// The document was opened but could not be parsed.
    #[error("{format} read error: {message}")]
    Read {
        format: &'static str,
        message: String,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl ExtractError {
    /// Build a [`ExtractError::Read`] from any displayable cause.
    pub fn read(format: &'static str, cause: impl std::fmt::Display) -> Self {
        Self::Read {
            format,
            message: cause.to_string(),
        }
    }

    /// Render the bracketed placeholder stored in a record's content.
    #[must_use]
    pub fn into_sentinel(self) -> String {
        match self {
            Self::Unavailable { hint, .. } => format!("[Note: {hint}]"),
            Self::Read { format, message } => format!("[{format} read error: {message}]"),
            Self::Io(e) => format!("[Error reading file: {e}]"),
        }
    }
}

/// Errors that stop a scan before it starts.
///
/// Problems below the root (unreadable subtrees, symlink loops, single files)
/// are collected in the scan report instead.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("cannot resolve scan root {path}: {source}")]
    InvalidRoot {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("scan root is not a directory: {0}")]
    NotADirectory(PathBuf),
}

/// Why an included file was dropped from the result set.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    #[error("{path} is not located under scan root {root}")]
    Relativize { path: PathBuf, root: PathBuf },

    #[error("{0} has no file name")]
    NoFileName(PathBuf),
}

/// Export errors.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("write failed: {0}")]
    Write(String),
}

/// Result type alias for dircsv operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    // ========== ExtractError Tests ==========

    #[test]
    fn test_unavailable_sentinel_is_a_note() {
        let err = ExtractError::Unavailable {
            format: "DOCX",
            hint: "build with the 'docx' feature",
        };
        assert_eq!(err.into_sentinel(), "[Note: build with the 'docx' feature]");
    }

    #[test]
    fn test_read_sentinel_names_format() {
        let err = ExtractError::read("PDF", "unexpected end of file");
        assert_eq!(err.into_sentinel(), "[PDF read error: unexpected end of file]");
    }

    #[test]
    fn test_io_sentinel() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let sentinel = ExtractError::Io(io_err).into_sentinel();
        assert!(sentinel.starts_with("[Error reading file: "));
        assert!(sentinel.contains("file not found"));
        assert!(sentinel.ends_with(']'));
    }

    #[test]
    fn test_extract_error_display() {
        let err = ExtractError::read("DOCX", "missing word/document.xml");
        assert_eq!(err.to_string(), "DOCX read error: missing word/document.xml");
    }

    #[test]
    fn test_extract_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err: ExtractError = io_err.into();
        assert!(matches!(err, ExtractError::Io(_)));
    }

    // ========== ScanError Tests ==========

    #[test]
    fn test_invalid_root_display() {
        let err = ScanError::InvalidRoot {
            path: PathBuf::from("/missing"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        assert_eq!(err.to_string(), "cannot resolve scan root /missing: no such file");
    }

    #[test]
    fn test_not_a_directory_display() {
        let err = ScanError::NotADirectory(PathBuf::from("/etc/hosts"));
        assert_eq!(err.to_string(), "scan root is not a directory: /etc/hosts");
    }

    // ========== Error Conversion Tests ==========

    #[test]
    fn test_error_from_scan_error() {
        let err: Error = ScanError::NotADirectory(PathBuf::from("x")).into();
        assert!(matches!(err, Error::Scan(_)));
        assert!(err.to_string().starts_with("scan error:"));
    }

    #[test]
    fn test_error_from_export_error() {
        let err: Error = ExportError::Write("disk full".to_string()).into();
        assert_eq!(err.to_string(), "export error: write failed: disk full");
    }

    #[test]
    fn test_skip_reason_display() {
        let reason = SkipReason::Relativize {
            path: PathBuf::from("/a/b"),
            root: PathBuf::from("/c"),
        };
        assert_eq!(reason.to_string(), "/a/b is not located under scan root /c");
    }
}
