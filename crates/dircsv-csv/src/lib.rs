//! # dircsv-csv
//!
//! The two CSV concerns of dircsv:
//!
//! - [`csv_safe`] flattens extracted text into one physical line: quotes are
//!   doubled, line breaks become a literal `\n`, tabs a literal `\t`.
//! - [`export`] writes the finished records as UTF-8 with a byte-order mark,
//!   comma-delimited, every field quoted, under a fixed four-column header.
//!
//! The writer quotes (and doubles quotes) on its own, so text escaped by
//! [`csv_safe`] carries doubled quotes through a CSV round trip. Readers get
//! back exactly the escaped form stored in [`Record::content`](dircsv_core::Record::content).

pub mod escape;
pub mod export;

pub use escape::csv_safe;
pub use export::{export, UTF8_BOM};
