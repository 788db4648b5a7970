//! Extension-based classification policy.
//!
//! Three extension sets decide what happens to a file:
//!
//! - **target**: always listed in the inventory, whatever the content
//! - **readable**: text is extracted (plain decode, PDF or DOCX)
//! - **binary**: never read, the content is a fixed placeholder
//!
//! A fourth set names directories whose contents are listed but never read.
//!
//! Extensions carry their leading dot and are lowercase, the same shape as
//! [`Record::file_extension`](crate::Record::file_extension). Lookups accept any
//! ASCII case.

/// Extensions always included in the inventory.
pub const TARGET_EXTENSIONS: &[&str] = &[
    ".cs", ".xml", ".csproj", ".sln", ".dll", ".json", ".py", ".md", ".jt", ".jtx", ".js",
    ".jsx", ".txt", ".log", ".cfg", ".conf", ".ini", ".properties", ".yaml", ".yml", ".html",
    ".htm", ".csv", ".tsv", ".rst", ".asc", ".ascx", ".xaml", ".css", ".scss", ".less", ".sql",
    ".php", ".rb", ".java", ".pdf", ".docx",
];

/// Extensions whose text content is extracted.
pub const READABLE_EXTENSIONS: &[&str] = &[
    ".cs", ".xml", ".csproj", ".json", ".py", ".md", ".jt", ".jtx", ".js", ".jsx", ".txt",
    ".log", ".cfg", ".conf", ".ini", ".properties", ".yaml", ".yml", ".html", ".htm", ".csv",
    ".tsv", ".rst", ".asc", ".ascx", ".xaml", ".css", ".scss", ".less", ".sql", ".php", ".rb",
    ".java", ".pdf", ".docx",
];

/// Extensions that are never read. `.pdf` and `.docx` must stay out of here.
pub const BINARY_EXTENSIONS: &[&str] = &[
    ".dll", ".exe", ".dxt", ".png", ".jpg", ".jpeg", ".gif", ".bmp", ".ico", ".zip", ".rar",
    ".tar", ".gz", ".7z", ".bin", ".dat", ".lib", ".pdb", ".class", ".jar", ".war", ".ear",
    ".apk", ".ipa",
];

/// Directory names whose files are listed with empty content (lowercase).
pub const EXCLUDED_DIR_NAMES: &[&str] = &[
    ".git",
    "node_modules",
    "venv",
    ".venv",
    "__pycache__",
    "dist",
    "build",
    "out",
    "target",
    "bin",
    "obj",
    "dircsv_config",
];

/// Files with unknown extensions larger than this are skipped.
pub const PROBE_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Content placeholder for binary-set extensions.
pub const BINARY_SENTINEL: &str = "[Binary file – content not readable]";

/// Content placeholder for probed files the heuristic rejects.
pub const BINARY_LIKE_SENTINEL: &str = "[Binary-like file detected – content not readable]";

fn contains(set: &[&str], extension: &str) -> bool {
    set.iter().any(|e| e.eq_ignore_ascii_case(extension))
}

/// Inventory classification of an extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Target,
    Unclassified,
}

/// Classify an extension for inventory purposes.
#[must_use]
pub fn classify(extension: &str) -> Classification {
    if is_target(extension) {
        Classification::Target
    } else {
        Classification::Unclassified
    }
}

#[must_use]
pub fn is_target(extension: &str) -> bool {
    contains(TARGET_EXTENSIONS, extension)
}

#[must_use]
pub fn is_readable(extension: &str) -> bool {
    contains(READABLE_EXTENSIONS, extension)
}

#[must_use]
pub fn is_binary(extension: &str) -> bool {
    contains(BINARY_EXTENSIONS, extension)
}

/// Whether a single path component names an excluded directory.
#[must_use]
pub fn is_excluded_segment(name: &str) -> bool {
    let lower = name.to_lowercase();
    EXCLUDED_DIR_NAMES.contains(&lower.as_str())
}

/// How a file's content is obtained, resolved once per file.
///
/// The sets overlap (`.dll` is both target and binary, `.pdf` both target and
/// readable), so resolution runs binary, then readable, then target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// Never read, content is [`BINARY_SENTINEL`].
    Binary,
    /// Dispatched to an extractor.
    Readable,
    /// Listed because of its extension, content goes through the heuristic.
    Target,
    /// Included only by probing, content goes through the heuristic.
    Unclassified,
}

impl FileKind {
    #[must_use]
    pub fn resolve(extension: &str) -> Self {
        if is_binary(extension) {
            Self::Binary
        } else if is_readable(extension) {
            Self::Readable
        } else if is_target(extension) {
            Self::Target
        } else {
            Self::Unclassified
        }
    }
}
