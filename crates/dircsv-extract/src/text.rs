//! Plain text decoding.
//!
//! Text files carry no reliable encoding marker, so the decoder walks a fixed
//! chain and keeps the first encoding that accepts every byte. Latin-1 maps
//! all 256 byte values, which makes the chain total in practice.

use dircsv_core::{DocumentExtractor, ExtractError};
use std::borrow::Cow;
use std::path::Path;
use tracing::debug;

/// Returned only if every encoding in the chain rejects the input.
pub const ENCODING_FAILED_SENTINEL: &str = "[Error: Could not read file due to encoding issues]";

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Encodings tried by [`decode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    /// Strict UTF-8; a leading byte-order mark is kept as `U+FEFF`.
    Utf8,
    /// UTF-8 with a leading byte-order mark removed.
    Utf8Sig,
    /// ISO-8859-1, one byte per code point.
    Latin1,
    Windows1252,
}

/// Order in which [`decode`] tries encodings.
pub const ENCODING_CHAIN: [TextEncoding; 4] = [
    TextEncoding::Utf8,
    TextEncoding::Utf8Sig,
    TextEncoding::Latin1,
    TextEncoding::Windows1252,
];

impl TextEncoding {
    /// Decode `bytes`, or `None` if they are not valid in this encoding.
    #[must_use]
    pub fn decode(self, bytes: &[u8]) -> Option<String> {
        match self {
            Self::Utf8 => std::str::from_utf8(bytes).ok().map(str::to_owned),
            Self::Utf8Sig => {
                let body = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
                std::str::from_utf8(body).ok().map(str::to_owned)
            }
            Self::Latin1 => Some(bytes.iter().copied().map(char::from).collect()),
            Self::Windows1252 => encoding_rs::WINDOWS_1252
                .decode_without_bom_handling_and_without_replacement(bytes)
                .map(Cow::into_owned),
        }
    }
}

/// Decode raw bytes with the first encoding in [`ENCODING_CHAIN`] that accepts them.
///
/// Content is never truncated.
#[must_use]
pub fn decode(bytes: &[u8]) -> String {
    for encoding in ENCODING_CHAIN {
        if let Some(text) = encoding.decode(bytes) {
            if encoding != TextEncoding::Utf8 {
                debug!("Decoded {} bytes as {:?}", bytes.len(), encoding);
            }
            return text;
        }
    }
    ENCODING_FAILED_SENTINEL.to_string()
}

/// Read a whole file and [`decode`] it.
pub fn read_text_file(path: &Path) -> Result<String, ExtractError> {
    let bytes = std::fs::read(path)?;
    Ok(decode(&bytes))
}

/// Extensions handled by [`TextExtractor`]: the readable set minus documents.
const TEXT_EXTENSIONS: &[&str] = &[
    ".cs", ".xml", ".csproj", ".json", ".py", ".md", ".jt", ".jtx", ".js", ".jsx", ".txt",
    ".log", ".cfg", ".conf", ".ini", ".properties", ".yaml", ".yml", ".html", ".htm", ".csv",
    ".tsv", ".rst", ".asc", ".ascx", ".xaml", ".css", ".scss", ".less", ".sql", ".php", ".rb",
    ".java",
];

/// Extractor for plain text files.
pub struct TextExtractor;

impl TextExtractor {
    /// Create a new text extractor.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for TextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentExtractor for TextExtractor {
    fn name(&self) -> &str {
        "text"
    }

    fn extensions(&self) -> &[&str] {
        TEXT_EXTENSIONS
    }

    fn extract(&self, path: &Path) -> Result<String, ExtractError> {
        read_text_file(path)
    }
}
