//! Validate config command implementation
//!
//! Implements the `validate-config` command for validating the Skjold
//! configuration file.

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: Option<&str>) -> anyhow::Result<i32> {
        let config_path = config_path.unwrap_or("skjold.toml");
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        let config = match load_config(config_path) {
            Ok(config) => {
                println!("✅ Configuration file loaded successfully");
                config
            }
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(2);
            }
        };

        // load_config already validated; show the effective settings
        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Dry Run: {}", config.application.dry_run);
        println!("  Language: {}", config.analysis.language);
        println!("  Score Threshold: {}", config.analysis.score_threshold);
        println!("  Chunk Size: {}", config.analysis.chunk_size);
        match &config.analysis.pattern_library {
            Some(path) => println!("  Pattern Library: {}", path.display()),
            None => println!("  Pattern Library: built-in Norwegian set"),
        }
        println!(
            "  Context Window: {} before / {} after",
            config.analysis.context.prefix_count, config.analysis.context.suffix_count
        );
        println!(
            "  Context Boost: +{} (floor {})",
            config.analysis.context.similarity_factor, config.analysis.context.min_score
        );
        println!("  Audit Enabled: {}", config.audit.enabled);
        if config.audit.enabled {
            println!("  Audit Log: {}", config.audit.log_path.display());
        }
        println!();

        Ok(0)
    }
}
