//! Recognizer registry
//!
//! The registry is an ordered, immutable collection of recognizers assembled
//! by [`RegistryBuilder`] before the analyzer is constructed. There is no
//! way to add recognizers to a built registry, so it can be shared freely
//! across windows.

use crate::analysis::norwegian;
use crate::analysis::pattern::PatternLibrary;
use crate::analysis::recognizer::{PatternRecognizer, Recognizer};
use crate::domain::Result;
use std::path::Path;
use std::sync::Arc;

/// Ordered, immutable collection of recognizers
pub struct RecognizerRegistry {
    recognizers: Vec<Arc<dyn Recognizer>>,
}

impl RecognizerRegistry {
    /// Start assembling a registry
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder {
            recognizers: Vec::new(),
        }
    }

    /// Recognizers registered for a language, in registration order
    pub fn for_language<'a>(
        &'a self,
        language: &'a str,
    ) -> impl Iterator<Item = &'a Arc<dyn Recognizer>> {
        self.recognizers
            .iter()
            .filter(move |r| r.language() == language)
    }

    /// Total number of registered recognizers
    pub fn len(&self) -> usize {
        self.recognizers.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.recognizers.is_empty()
    }
}

/// Builder assembling an immutable [`RecognizerRegistry`]
pub struct RegistryBuilder {
    recognizers: Vec<Arc<dyn Recognizer>>,
}

impl RegistryBuilder {
    /// Register a single recognizer
    pub fn recognizer(mut self, recognizer: impl Recognizer + 'static) -> Self {
        self.recognizers.push(Arc::new(recognizer));
        self
    }

    /// Register every recognizer defined in a TOML pattern library
    pub fn library(mut self, library: &PatternLibrary) -> Result<Self> {
        for def in &library.recognizers {
            self.recognizers
                .push(Arc::new(PatternRecognizer::from_definition(def)?));
        }
        Ok(self)
    }

    /// Register the recognizers from a pattern library file
    pub fn library_file(self, path: impl AsRef<Path>) -> Result<Self> {
        let library = PatternLibrary::from_file(path)?;
        self.library(&library)
    }

    /// Register the built-in Norwegian date/age/quantity recognizer set
    pub fn norwegian_defaults(self) -> Result<Self> {
        let library = norwegian::builtin_library()?;
        self.library(&library)
    }

    /// Finish assembly
    pub fn build(self) -> RecognizerRegistry {
        RecognizerRegistry {
            recognizers: self.recognizers,
        }
    }
}
