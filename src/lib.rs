// Skjold - Norwegian free-text PII anonymizer
// Copyright (c) 2025 Skjold Contributors
// Licensed under the MIT License

//! # Skjold - Norwegian free-text PII anonymizer
//!
//! Skjold detects personally identifiable information in free-form
//! Norwegian text — dates, ages, years written as digits or as spelled-out
//! words, weekdays, quantities resembling years — and replaces each
//! detected span with an anonymized placeholder such as `<DATE>`,
//! preserving the rest of the content unchanged.
//!
//! ## Architecture
//!
//! Skjold follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`analysis`] - Recognizers, registry, context enhancement, analyzer
//! - [`anonymize`] - Span substitution, audit trail, run reporting
//! - [`chunk`] - Record windowing and reassembly
//! - [`adapters`] - File readers and writer
//! - [`domain`] - Error taxonomy and result alias
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Pipeline
//!
//! Records flow through the pipeline strictly in order: the chunker packs
//! them into bounded windows, the analyzer runs every registered recognizer
//! over each window and resolves overlapping candidates, and the anonymizer
//! substitutes the surviving annotations before results are mapped back to
//! per-record outputs.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use skjold::anonymize::AnonymizerEngine;
//! use skjold::config::SkjoldConfig;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = SkjoldConfig::default();
//!     let engine = AnonymizerEngine::from_config(&config)?;
//!
//!     let records = vec!["Hun er 25 år gammel.".to_string()];
//!     let (redacted, report) = engine.anonymize_records(&records)?;
//!
//!     assert_eq!(redacted[0], "Hun er <DATE>.");
//!     println!("Anonymized {} spans", report.total_detections);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Skjold uses the [`domain::SkjoldError`] type for all errors:
//!
//! ```rust,no_run
//! use skjold::domain::SkjoldError;
//!
//! fn example() -> Result<(), SkjoldError> {
//!     let config = skjold::config::load_config("skjold.toml")?;
//!     Ok(())
//! }
//! ```
//!
//! Configuration problems (including invalid recognizer grammars) are fatal
//! before any text is processed; a recognizer failing on one window loses
//! only that window's candidates; invariant violations fail loudly rather
//! than emit corrupted output.
//!
//! ## Logging
//!
//! Skjold uses structured logging with the `tracing` crate:
//!
//! ```rust,no_run
//! use tracing::{info, warn};
//!
//! info!("Starting anonymization");
//! warn!(recognizer = "decade", "Recognizer failed on window");
//! ```

pub mod adapters;
pub mod analysis;
pub mod anonymize;
pub mod chunk;
pub mod cli;
pub mod config;
pub mod domain;
pub mod logging;
