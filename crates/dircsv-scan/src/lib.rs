//! Directory scanning for dircsv.
//!
//! This crate walks a directory tree and turns every included file into a
//! [`Record`](dircsv_core::Record):
//!
//! ```text
//! walkdir entry → inclusion rule → excluded-dir check → FileKind dispatch → csv_safe → Record
//! ```
//!
//! # Components
//!
//! - [`Scanner`]: walks one root and builds the [`ScanReport`](dircsv_core::ScanReport)
//! - [`ScanOptions`]: symlink following and output order
//! - [`build_record`]: builds a single record, given the scan root explicitly
//! - [`scan_to_csv`]: scan and export in one call
//!
//! # Example
//!
//! ```rust,ignore
//! use dircsv_scan::{Scanner, ScanOptions};
//!
//! let report = Scanner::with_options(ScanOptions::default()).scan(Path::new("./project"))?;
//! for skipped in &report.skipped {
//!     eprintln!("{}: {}", skipped.path.display(), skipped.reason);
//! }
//! dircsv_csv::export(&report.records, Path::new("scanresult.csv"))?;
//! ```

pub mod record;
pub mod scanner;

pub use record::{build_record, extension_of, extract_content, in_excluded_dir};
pub use scanner::{scan, scan_to_csv, ScanOptions, Scanner};
