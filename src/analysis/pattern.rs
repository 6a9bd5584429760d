//! Pattern library for PII recognition
//!
//! Recognizers are defined in TOML pattern libraries. The built-in Norwegian
//! library is embedded in the binary; a custom library can be supplied via
//! configuration using the same schema.

use crate::domain::{Result, SkjoldError};
use fancy_regex::Regex;
use serde::Deserialize;

/// Pattern definition from TOML
#[derive(Debug, Clone, Deserialize)]
pub struct PatternDefinition {
    /// Pattern name, used in diagnostics
    pub name: String,
    /// Regex grammar; casing is encoded in the grammar itself
    pub regex: String,
    /// Base confidence score (0.0 - 1.0)
    pub score: f32,
}

/// Recognizer definition from TOML
#[derive(Debug, Clone, Deserialize)]
pub struct RecognizerDefinition {
    /// Recognizer name
    pub name: String,
    /// Entity kind label ("DATE", "QUANTITY")
    pub entity: String,
    /// Language tag the recognizer applies to
    #[serde(default = "default_language")]
    pub language: String,
    /// Context vocabulary that strengthens matches when found nearby
    #[serde(default)]
    pub context: Vec<String>,
    /// Patterns, in declaration order; each contributes candidates
    /// independently
    pub patterns: Vec<PatternDefinition>,
}

fn default_language() -> String {
    crate::analysis::language::NORWEGIAN_BOKMAAL.to_string()
}

/// Pattern library container
#[derive(Debug, Deserialize)]
pub struct PatternLibrary {
    /// Recognizer definitions in declaration order
    pub recognizers: Vec<RecognizerDefinition>,
}

impl PatternLibrary {
    /// Parse a pattern library from TOML content
    pub fn from_toml(content: &str) -> Result<Self> {
        let library: PatternLibrary = toml::from_str(content)
            .map_err(|e| SkjoldError::Configuration(format!("Invalid pattern library: {e}")))?;

        if library.recognizers.is_empty() {
            return Err(SkjoldError::Configuration(
                "Pattern library defines no recognizers".to_string(),
            ));
        }

        Ok(library)
    }

    /// Parse a pattern library from a TOML file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            SkjoldError::Configuration(format!(
                "Failed to read pattern library {}: {e}",
                path.display()
            ))
        })?;

        Self::from_toml(&content)
    }
}

/// A compiled pattern with its base score
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    /// Pattern name
    pub name: String,
    /// Compiled grammar
    pub regex: Regex,
    /// Base confidence score
    pub score: f32,
}

impl CompiledPattern {
    /// Compile a pattern definition.
    ///
    /// An invalid grammar or out-of-range score is a configuration error,
    /// surfaced before any text is processed.
    pub fn compile(def: &PatternDefinition) -> Result<Self> {
        if !(0.0..=1.0).contains(&def.score) {
            return Err(SkjoldError::Configuration(format!(
                "Pattern '{}' has score {} outside [0, 1]",
                def.name, def.score
            )));
        }

        let regex = Regex::new(&def.regex).map_err(|e| {
            SkjoldError::Configuration(format!("Invalid grammar in pattern '{}': {e}", def.name))
        })?;

        Ok(Self {
            name: def.name.clone(),
            regex,
            score: def.score,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_pattern() {
        let def = PatternDefinition {
            name: "year".to_string(),
            regex: r"\b(18|19|20)[0-9]{2}\b".to_string(),
            score: 0.5,
        };
        let compiled = CompiledPattern::compile(&def).unwrap();
        assert!(compiled.regex.is_match("Det var i 1984.").unwrap());
    }

    #[test]
    fn test_compile_invalid_grammar() {
        let def = PatternDefinition {
            name: "broken".to_string(),
            regex: r"(unclosed".to_string(),
            score: 0.5,
        };
        let err = CompiledPattern::compile(&def).unwrap_err();
        assert!(matches!(err, SkjoldError::Configuration(_)));
        assert!(err.to_string().contains("broken"));
    }

    #[test]
    fn test_compile_score_out_of_range() {
        let def = PatternDefinition {
            name: "overconfident".to_string(),
            regex: r"\d+".to_string(),
            score: 1.5,
        };
        assert!(matches!(
            CompiledPattern::compile(&def),
            Err(SkjoldError::Configuration(_))
        ));
    }

    #[test]
    fn test_library_from_toml() {
        let toml = r#"
            [[recognizers]]
            name = "year"
            entity = "DATE"

            [[recognizers.patterns]]
            name = "year"
            regex = '\b(18|19|20)[0-9]{2}\b'
            score = 0.5
        "#;
        let library = PatternLibrary::from_toml(toml).unwrap();
        assert_eq!(library.recognizers.len(), 1);
        assert_eq!(library.recognizers[0].language, "nb");
        assert!(library.recognizers[0].context.is_empty());
    }

    #[test]
    fn test_library_empty_rejected() {
        let err = PatternLibrary::from_toml("").unwrap_err();
        assert!(matches!(err, SkjoldError::Configuration(_)));
    }
}
