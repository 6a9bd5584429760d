//! Configuration schema types
//!
//! Defines the configuration structure mapped from `skjold.toml`. Every
//! section has complete defaults, so a missing section falls back to the
//! reference parameters of the analysis pipeline.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main Skjold configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkjoldConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Analysis pipeline settings
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Audit logging configuration
    #[serde(default)]
    pub audit: AuditConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl SkjoldConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.analysis.validate()?;
        self.audit.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// Apply environment variable overrides (`SKJOLD_*`)
    pub fn apply_env_overrides(&mut self) -> Result<(), String> {
        if let Ok(val) = std::env::var("SKJOLD_DRY_RUN") {
            self.application.dry_run = val
                .parse()
                .map_err(|_| format!("Invalid SKJOLD_DRY_RUN value: {val}"))?;
        }

        if let Ok(val) = std::env::var("SKJOLD_ANALYSIS_LANGUAGE") {
            self.analysis.language = val;
        }

        if let Ok(val) = std::env::var("SKJOLD_ANALYSIS_SCORE_THRESHOLD") {
            self.analysis.score_threshold = val
                .parse()
                .map_err(|_| format!("Invalid SKJOLD_ANALYSIS_SCORE_THRESHOLD value: {val}"))?;
        }

        if let Ok(val) = std::env::var("SKJOLD_ANALYSIS_CHUNK_SIZE") {
            self.analysis.chunk_size = val
                .parse()
                .map_err(|_| format!("Invalid SKJOLD_ANALYSIS_CHUNK_SIZE value: {val}"))?;
        }

        if let Ok(val) = std::env::var("SKJOLD_ANALYSIS_PATTERN_LIBRARY") {
            self.analysis.pattern_library = Some(PathBuf::from(val));
        }

        if let Ok(val) = std::env::var("SKJOLD_AUDIT_ENABLED") {
            self.audit.enabled = val
                .parse()
                .map_err(|_| format!("Invalid SKJOLD_AUDIT_ENABLED value: {val}"))?;
        }

        if let Ok(val) = std::env::var("SKJOLD_AUDIT_LOG_PATH") {
            self.audit.log_path = PathBuf::from(val);
        }

        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Dry run mode: report detections but leave text unchanged
    #[serde(default)]
    pub dry_run: bool,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            dry_run: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Analysis pipeline configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Language tag analyzed recognizers must match
    #[serde(default = "default_language")]
    pub language: String,

    /// Minimum score an annotation must reach
    #[serde(default = "default_score_threshold")]
    pub score_threshold: f32,

    /// Maximum window size in characters
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,

    /// Path to a custom pattern library TOML file; the embedded Norwegian
    /// library is used when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern_library: Option<PathBuf>,

    /// Context enhancement settings
    #[serde(default)]
    pub context: ContextConfig,
}

impl AnalysisConfig {
    fn validate(&self) -> Result<(), String> {
        if self.language.is_empty() {
            return Err("language must not be empty".to_string());
        }
        if !(0.0..=1.0).contains(&self.score_threshold) {
            return Err(format!(
                "score_threshold {} outside [0, 1]",
                self.score_threshold
            ));
        }
        if self.chunk_size == 0 {
            return Err("chunk_size must be at least 1".to_string());
        }
        if let Some(ref path) = self.pattern_library {
            if !path.exists() {
                return Err(format!("Pattern library file not found: {}", path.display()));
            }
            if path.extension().and_then(|s| s.to_str()) != Some("toml") {
                return Err(format!(
                    "Pattern library must be a TOML file: {}",
                    path.display()
                ));
            }
        }
        self.context.validate()?;
        Ok(())
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            score_threshold: default_score_threshold(),
            chunk_size: default_chunk_size(),
            pattern_library: None,
            context: ContextConfig::default(),
        }
    }
}

fn default_language() -> String {
    crate::analysis::language::NORWEGIAN_BOKMAAL.to_string()
}

fn default_score_threshold() -> f32 {
    0.3
}

// Keeps a window of many short records safely under the analyzer's
// one-million-character ceiling.
fn default_chunk_size() -> usize {
    8445
}

/// Context enhancement configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextConfig {
    /// Score added to a match supported by a context word
    #[serde(default = "default_similarity_factor")]
    pub similarity_factor: f32,

    /// Floor a supported match's score is lifted to
    #[serde(default = "default_min_score")]
    pub min_score: f32,

    /// Words inspected before the match
    #[serde(default = "default_prefix_count")]
    pub prefix_count: usize,

    /// Words inspected after the match
    #[serde(default = "default_suffix_count")]
    pub suffix_count: usize,
}

impl ContextConfig {
    fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.similarity_factor) {
            return Err(format!(
                "context.similarity_factor {} outside [0, 1]",
                self.similarity_factor
            ));
        }
        if !(0.0..=1.0).contains(&self.min_score) {
            return Err(format!(
                "context.min_score {} outside [0, 1]",
                self.min_score
            ));
        }
        Ok(())
    }
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            similarity_factor: default_similarity_factor(),
            min_score: default_min_score(),
            prefix_count: default_prefix_count(),
            suffix_count: default_suffix_count(),
        }
    }
}

fn default_similarity_factor() -> f32 {
    0.45
}

fn default_min_score() -> f32 {
    0.4
}

fn default_prefix_count() -> usize {
    0
}

fn default_suffix_count() -> usize {
    1
}

/// Audit logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Enable the audit trail
    #[serde(default)]
    pub enabled: bool,

    /// Audit log file path
    #[serde(default = "default_audit_log_path")]
    pub log_path: PathBuf,

    /// Use JSON lines format for audit entries
    #[serde(default = "default_audit_json_format")]
    pub json_format: bool,
}

impl AuditConfig {
    fn validate(&self) -> Result<(), String> {
        if self.enabled && self.log_path.as_os_str().is_empty() {
            return Err("audit.log_path must not be empty when audit is enabled".to_string());
        }
        Ok(())
    }
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_path: default_audit_log_path(),
            json_format: default_audit_json_format(),
        }
    }
}

fn default_audit_log_path() -> PathBuf {
    PathBuf::from("./audit/anonymization.log")
}

fn default_audit_json_format() -> bool {
    true
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable file logging in addition to console output
    #[serde(default)]
    pub local_enabled: bool,

    /// Directory for log files
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Rotation policy ("daily" or "hourly")
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.local_enabled {
            if self.local_path.is_empty() {
                return Err("logging.local_path must not be empty".to_string());
            }
            let valid_rotations = ["daily", "hourly"];
            if !valid_rotations.contains(&self.local_rotation.as_str()) {
                return Err(format!(
                    "Invalid logging.local_rotation '{}'. Must be one of: {}",
                    self.local_rotation,
                    valid_rotations.join(", ")
                ));
            }
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

fn default_local_path() -> String {
    "./logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = SkjoldConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.analysis.language, "nb");
        assert!((config.analysis.score_threshold - 0.3).abs() < f32::EPSILON);
        assert_eq!(config.analysis.chunk_size, 8445);
        assert!((config.analysis.context.similarity_factor - 0.45).abs() < f32::EPSILON);
        assert!((config.analysis.context.min_score - 0.4).abs() < f32::EPSILON);
        assert_eq!(config.analysis.context.prefix_count, 0);
        assert_eq!(config.analysis.context.suffix_count, 1);
        assert!(!config.application.dry_run);
        assert!(!config.audit.enabled);
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        let mut config = SkjoldConfig::default();
        config.application.log_level = "verbose".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_threshold_rejected() {
        let mut config = SkjoldConfig::default();
        config.analysis.score_threshold = 1.2;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_chunk_size_rejected() {
        let mut config = SkjoldConfig::default();
        config.analysis.chunk_size = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_pattern_library_rejected() {
        let mut config = SkjoldConfig::default();
        config.analysis.pattern_library = Some(PathBuf::from("/nonexistent/patterns.toml"));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: SkjoldConfig = toml::from_str(
            r#"
            [analysis]
            score_threshold = 0.5
        "#,
        )
        .unwrap();

        assert!((config.analysis.score_threshold - 0.5).abs() < f32::EPSILON);
        assert_eq!(config.analysis.chunk_size, 8445);
        assert_eq!(config.application.log_level, "info");
    }
}
