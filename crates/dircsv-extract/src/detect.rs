//! Text/binary heuristic for files whose extension says nothing.

use dircsv_core::policy::BINARY_LIKE_SENTINEL;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use tracing::debug;

use crate::text::read_text_file;

/// Number of leading bytes inspected.
pub const SAMPLE_SIZE: usize = 1024;

/// Minimum share of printable bytes, in percent.
pub const TEXT_RATIO_PERCENT: usize = 80;

/// Judge whether a byte sample looks like text.
///
/// Empty samples and samples containing a NUL byte are never text. Otherwise
/// printable ASCII plus tab, LF and CR must make up at least
/// [`TEXT_RATIO_PERCENT`] of the sample.
#[must_use]
pub fn looks_like_text(sample: &[u8]) -> bool {
    if sample.is_empty() || sample.contains(&0) {
        return false;
    }

    let printable = sample
        .iter()
        .filter(|&&b| (0x20..=0x7E).contains(&b) || matches!(b, b'\t' | b'\n' | b'\r'))
        .count();

    printable * 100 >= sample.len() * TEXT_RATIO_PERCENT
}

/// Read the first [`SAMPLE_SIZE`] bytes of a file and apply [`looks_like_text`].
pub fn probe_file(path: &Path) -> io::Result<bool> {
    let mut sample = Vec::with_capacity(SAMPLE_SIZE);
    File::open(path)?
        .take(SAMPLE_SIZE as u64)
        .read_to_end(&mut sample)?;
    Ok(looks_like_text(&sample))
}

/// Content for a file with no known extension.
///
/// Text-like files are decoded in full; anything else gets a placeholder.
/// Never fails.
#[must_use]
pub fn read_unclassified(path: &Path) -> String {
    match probe_file(path) {
        Ok(true) => read_text_file(path).unwrap_or_else(|e| e.into_sentinel()),
        Ok(false) => {
            debug!("Binary-like content: {:?}", path);
            BINARY_LIKE_SENTINEL.to_string()
        }
        Err(e) => format!("[Error during intelligent read: {e}]"),
    }
}
