//! Configuration management
//!
//! Configuration comes from a TOML file (`skjold.toml` by default) with
//! `${VAR}` environment substitution and `SKJOLD_*` environment overrides.
//! All sections have complete defaults matching the reference analysis
//! parameters, and the whole configuration is validated before any text is
//! processed.

pub mod loader;
pub mod schema;

// Re-export commonly used items
pub use loader::{load_config, load_config_or_default};
pub use schema::{
    AnalysisConfig, ApplicationConfig, AuditConfig, ContextConfig, LoggingConfig, SkjoldConfig,
};
