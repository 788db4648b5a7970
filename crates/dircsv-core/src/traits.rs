//! Extraction trait.
//!
//! Optional document libraries are modelled as capabilities: an extractor whose
//! backing library was not compiled in still exists and answers every request
//! with [`ExtractError::Unavailable`], which the caller turns into a note.

use std::path::Path;

use crate::error::ExtractError;

/// Turns one file into plain text.
pub trait DocumentExtractor: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Extensions (with leading dot) this extractor handles.
    fn extensions(&self) -> &[&str];

    /// Check if this extractor handles the given extension.
    fn can_extract(&self, extension: &str) -> bool {
        self.extensions()
            .iter()
            .any(|ext| ext.eq_ignore_ascii_case(extension))
    }

    /// Extract raw, unescaped text.
    ///
    /// Implementations must not panic on malformed input; every failure is an
    /// [`ExtractError`].
    fn extract(&self, path: &Path) -> Result<String, ExtractError>;
}
