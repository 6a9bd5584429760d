//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Skjold using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Skjold - Norwegian free-text PII anonymizer
#[derive(Parser, Debug)]
#[command(name = "skjold")]
#[command(version, about, long_about = None)]
#[command(author = "Skjold Contributors")]
pub struct Cli {
    /// Path to configuration file (defaults to skjold.toml when present)
    #[arg(short, long, env = "SKJOLD_CONFIG")]
    pub config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "SKJOLD_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Anonymize a source file into a redacted JSON target file
    Anonymize(commands::anonymize::AnonymizeArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
