//! Anonymize command implementation
//!
//! Reads a record sequence from the source file, runs the anonymization
//! pipeline and writes the redacted records to the JSON target file.

use crate::adapters::{read_records, write_records};
use crate::anonymize::AnonymizerEngine;
use crate::config::load_config_or_default;
use clap::Args;
use std::path::{Path, PathBuf};

/// Arguments for the anonymize command
#[derive(Args, Debug)]
pub struct AnonymizeArgs {
    /// Source file to anonymize (.txt, .json or .yaml)
    pub source: PathBuf,

    /// Target file for the redacted output (.json)
    pub target: PathBuf,

    /// Report detections without rewriting the text
    #[arg(long)]
    pub dry_run: bool,
}

impl AnonymizeArgs {
    /// Execute the anonymize command
    pub async fn execute(&self, config_path: Option<&str>) -> anyhow::Result<i32> {
        tracing::info!(
            source = %self.source.display(),
            target = %self.target.display(),
            "Anonymizing file"
        );

        // Fail on bad extensions before reading or analyzing anything
        if let Err(e) = validate_extensions(&self.source, &self.target) {
            println!("❌ {e}");
            return Ok(2);
        }

        let mut config = match load_config_or_default(config_path) {
            Ok(config) => config,
            Err(e) => {
                println!("❌ Failed to load configuration");
                println!("   Error: {e}");
                return Ok(2);
            }
        };
        if self.dry_run {
            config.application.dry_run = true;
        }

        let engine = match AnonymizerEngine::from_config(&config) {
            Ok(engine) => engine,
            Err(e) => {
                println!("❌ Failed to initialize anonymization engine");
                println!("   Error: {e}");
                return Ok(2);
            }
        };

        println!("🔒 Anonymizing: {}", self.source.display());
        if engine.is_dry_run() {
            println!("   (dry run: output text is left unchanged)");
        }

        let records = read_records(&self.source)?;
        let (redacted, report) = engine.anonymize_records(&records)?;
        write_records(&self.target, &redacted)?;

        println!("{}", report.format_console());
        println!(
            "✅ Anonymization completed. Output written to: {}",
            self.target.display()
        );

        Ok(0)
    }
}

/// Reject unsupported source/target extensions up front
fn validate_extensions(source: &Path, target: &Path) -> Result<(), String> {
    let source_ext = source
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase());
    match source_ext.as_deref() {
        Some("txt") | Some("json") | Some("yaml") | Some("yml") => {}
        _ => {
            return Err(format!(
                "Source file must be a .txt, .json or .yaml file: {}",
                source.display()
            ))
        }
    }

    let target_ext = target
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase());
    if target_ext.as_deref() != Some("json") {
        return Err(format!(
            "Target file must be a .json file: {}",
            target.display()
        ));
    }

    Ok(())
}
