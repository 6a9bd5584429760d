//! Domain error types
//!
//! Defines the error hierarchy for Skjold. All errors are domain-specific
//! and don't expose third-party types.

use thiserror::Error;

/// Main Skjold error type
///
/// This is the primary error type used throughout the application.
#[derive(Debug, Error)]
pub enum SkjoldError {
    /// Malformed or missing configuration, including invalid recognizer
    /// grammars in a pattern library. Fatal at initialization, before any
    /// text is processed.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A recognizer failed to execute against a window (for example the
    /// grammar hit the backtracking limit). Caught per-recognizer so one
    /// faulty pattern does not abort the whole window.
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Internal invariant violation: an annotation outside its window,
    /// overlapping annotations after resolution, or an offset off a char
    /// boundary. A defect, not a recoverable condition.
    #[error("Bounds error: {0}")]
    Bounds(String),

    /// I/O errors from the input/output adapters
    #[error("I/O error: {0}")]
    Io(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for SkjoldError {
    fn from(err: std::io::Error) -> Self {
        SkjoldError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for SkjoldError {
    fn from(err: serde_json::Error) -> Self {
        SkjoldError::Serialization(err.to_string())
    }
}

// Conversion from serde_yaml::Error
impl From<serde_yaml::Error> for SkjoldError {
    fn from(err: serde_yaml::Error) -> Self {
        SkjoldError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for SkjoldError {
    fn from(err: toml::de::Error) -> Self {
        SkjoldError::Configuration(format!("TOML parse error: {err}"))
    }
}
