//! Logging and observability
//!
//! Structured logging via `tracing`: a console layer is always on, and an
//! optional JSON file layer with rotation can be enabled through the
//! `[logging]` configuration section.

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, LoggingGuard};
