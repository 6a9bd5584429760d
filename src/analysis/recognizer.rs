//! Recognizer trait and the pattern-based implementation

use crate::analysis::models::{Detection, EntityKind};
use crate::analysis::pattern::{CompiledPattern, RecognizerDefinition};
use crate::domain::{Result, SkjoldError};

/// Trait for entity recognizers.
///
/// Pattern recognizers are the built-in implementation; statistical
/// recognizers can be registered alongside them as long as they emit
/// [`Detection`]s with window-relative offsets.
pub trait Recognizer: Send + Sync {
    /// Recognizer name, used in diagnostics and audit entries
    fn name(&self) -> &str;

    /// Entity kind this recognizer detects
    fn entity(&self) -> EntityKind;

    /// Language tag this recognizer applies to
    fn language(&self) -> &str;

    /// Context vocabulary that strengthens this recognizer's matches
    /// when found near them. Empty for recognizers without context support.
    fn context(&self) -> &[String] {
        &[]
    }

    /// Produce all candidate matches in the window.
    ///
    /// Candidates from different patterns may overlap each other; overlap
    /// resolution happens later, at the analyzer level. An execution
    /// failure aborts only this recognizer's candidates for the window.
    fn recognize(&self, window: &str) -> Result<Vec<Detection>>;
}

/// A named, scored matcher over one or more regex grammars
pub struct PatternRecognizer {
    name: String,
    entity: EntityKind,
    language: String,
    patterns: Vec<CompiledPattern>,
    context: Vec<String>,
}

impl PatternRecognizer {
    /// Create a pattern recognizer from already compiled patterns
    pub fn new(
        name: impl Into<String>,
        entity: EntityKind,
        language: impl Into<String>,
        patterns: Vec<CompiledPattern>,
    ) -> Self {
        Self {
            name: name.into(),
            entity,
            language: language.into(),
            patterns,
            context: Vec::new(),
        }
    }

    /// Attach a context vocabulary
    pub fn with_context(mut self, context: Vec<String>) -> Self {
        self.context = context;
        self
    }

    /// Build a recognizer from a library definition, compiling its grammars
    pub fn from_definition(def: &RecognizerDefinition) -> Result<Self> {
        let entity = EntityKind::parse(&def.entity).map_err(|e| {
            SkjoldError::Configuration(format!("Recognizer '{}': {e}", def.name))
        })?;

        if def.patterns.is_empty() {
            return Err(SkjoldError::Configuration(format!(
                "Recognizer '{}' defines no patterns",
                def.name
            )));
        }

        let patterns = def
            .patterns
            .iter()
            .map(CompiledPattern::compile)
            .collect::<Result<Vec<_>>>()?;

        Ok(
            Self::new(def.name.as_str(), entity, def.language.as_str(), patterns)
                .with_context(def.context.clone()),
        )
    }
}

impl Recognizer for PatternRecognizer {
    fn name(&self) -> &str {
        &self.name
    }

    fn entity(&self) -> EntityKind {
        self.entity
    }

    fn language(&self) -> &str {
        &self.language
    }

    fn context(&self) -> &[String] {
        &self.context
    }

    fn recognize(&self, window: &str) -> Result<Vec<Detection>> {
        let mut detections = Vec::new();

        for pattern in &self.patterns {
            for m in pattern.regex.find_iter(window) {
                let m = m.map_err(|e| {
                    SkjoldError::Analysis(format!(
                        "Pattern '{}' of recognizer '{}' failed to execute: {e}",
                        pattern.name, self.name
                    ))
                })?;

                detections.push(Detection::new(
                    self.entity,
                    m.start(),
                    m.end(),
                    pattern.score,
                    self.name.as_str(),
                ));
            }
        }

        Ok(detections)
    }
}
