//! Init command implementation
//!
//! Implements the `init` command for generating a sample configuration
//! file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "skjold.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing Skjold configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2);
        }

        match fs::write(&self.output, Self::generate_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Validate configuration: skjold validate-config");
                println!("  3. Anonymize a file: skjold anonymize input.txt output.json");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(5)
            }
        }
    }

    /// Generate the sample configuration
    fn generate_config() -> String {
        r#"# Skjold Configuration File
# PII detection and anonymization for Norwegian free-text

[application]
log_level = "info"
# Report detections without rewriting the text
dry_run = false

[analysis]
# Language tag recognizers must match
language = "nb"
# Minimum score an annotation must reach
score_threshold = 0.3
# Maximum analyzer window size in characters
chunk_size = 8445
# Custom pattern library (TOML); the built-in Norwegian set is used when unset
# pattern_library = "patterns/custom.toml"

[analysis.context]
# Score added to a match supported by a nearby context word
similarity_factor = 0.45
# Floor a supported match's score is lifted to
min_score = 0.4
# Words inspected before / after a match
prefix_count = 0
suffix_count = 1

[audit]
# Append-only audit trail of substitutions (matched text stored hashed)
enabled = false
log_path = "./audit/anonymization.log"
json_format = true

[logging]
# File logging in addition to console output
local_enabled = false
local_path = "./logs"
local_rotation = "daily"  # daily | hourly
"#
        .to_string()
    }
}
