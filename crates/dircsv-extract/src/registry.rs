//! Extractor registry keyed by file extension.

use dircsv_core::{DocumentExtractor, ExtractError};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use crate::{DocxExtractor, PdfExtractor, TextExtractor};

/// Registry of document extractors.
pub struct ExtractorRegistry {
    /// Named extractors
    extractors: HashMap<String, Arc<dyn DocumentExtractor>>,
    /// Lowercase extension to extractor name mapping
    extension_mapping: HashMap<String, String>,
    /// Used when no extension mapping matches
    default_extractor: Option<String>,
}

impl ExtractorRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            extractors: HashMap::new(),
            extension_mapping: HashMap::new(),
            default_extractor: None,
        }
    }

    /// Registry with the text, PDF and DOCX extractors, text as default.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register("text", TextExtractor::new());
        registry.register("pdf", PdfExtractor::new());
        registry.register("docx", DocxExtractor::new());
        registry.set_default("text");
        registry
    }

    /// Register an extractor.
    pub fn register<E: DocumentExtractor + 'static>(&mut self, name: &str, extractor: E) {
        let extractor = Arc::new(extractor);
        for ext in extractor.extensions() {
            self.extension_mapping
                .insert(ext.to_lowercase(), name.to_string());
        }
        self.extractors.insert(name.to_string(), extractor);
    }

    /// Set the fallback extractor.
    pub fn set_default(&mut self, name: &str) {
        self.default_extractor = Some(name.to_string());
    }

    /// Get the extractor for an extension (with leading dot), falling back to the default.
    #[must_use]
    pub fn get_for_extension(&self, extension: &str) -> Option<Arc<dyn DocumentExtractor>> {
        self.extension_mapping
            .get(&extension.to_lowercase())
            .or(self.default_extractor.as_ref())
            .and_then(|name| self.extractors.get(name))
            .cloned()
    }

    /// Extract raw text from a file using the extractor for its extension.
    pub fn extract(&self, extension: &str, path: &Path) -> Result<String, ExtractError> {
        let extractor = self
            .get_for_extension(extension)
            .ok_or_else(|| ExtractError::Unavailable {
                format: "document",
                hint: "no extractor registered for this file type",
            })?;

        extractor.extract(path)
    }
}

impl Default for ExtractorRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
