//! Audit logger for anonymization operations

use crate::analysis::models::Detection;
use crate::domain::{Result, SkjoldError};
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// Audit log entry for one analyzed window
#[derive(Debug, Serialize)]
struct AuditLogEntry {
    timestamp: String,
    window: usize,
    detections_count: usize,
    detections: Vec<AuditDetection>,
}

/// Audit detection entry (with hashed matched text)
#[derive(Debug, Serialize)]
struct AuditDetection {
    entity: String,
    recognizer: String,
    start: usize,
    end: usize,
    score: f32,
    /// SHA-256 hash of the matched text (never log plaintext PII)
    value_hash: String,
}

/// Append-only audit trail of what was detected and replaced
pub struct AuditLogger {
    log_path: PathBuf,
    json_format: bool,
}

impl AuditLogger {
    /// Create a new audit logger, creating the log directory if needed
    pub fn new(log_path: PathBuf, json_format: bool) -> Result<Self> {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                SkjoldError::Io(format!(
                    "Failed to create audit log directory {}: {e}",
                    parent.display()
                ))
            })?;
        }

        Ok(Self {
            log_path,
            json_format,
        })
    }

    /// Log the annotations of one window
    pub fn log_window(
        &self,
        window_index: usize,
        window_text: &str,
        annotations: &[Detection],
    ) -> Result<()> {
        let entry = AuditLogEntry {
            timestamp: chrono::Utc::now().to_rfc3339(),
            window: window_index,
            detections_count: annotations.len(),
            detections: annotations
                .iter()
                .map(|d| AuditDetection {
                    entity: d.entity.label().to_string(),
                    recognizer: d.recognizer.clone(),
                    start: d.start,
                    end: d.end,
                    score: d.score,
                    value_hash: hash_value(&window_text[d.start..d.end]),
                })
                .collect(),
        };

        self.write_entry(&entry)
    }

    /// Write an audit entry to the log file
    fn write_entry(&self, entry: &AuditLogEntry) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| {
                SkjoldError::Io(format!(
                    "Failed to open audit log {}: {e}",
                    self.log_path.display()
                ))
            })?;

        if self.json_format {
            let json_line = serde_json::to_string(entry)?;
            writeln!(file, "{json_line}")
                .map_err(|e| SkjoldError::Io(format!("Failed to write audit entry: {e}")))?;
        } else {
            writeln!(
                file,
                "[{}] Window: {} | Detections: {}",
                entry.timestamp, entry.window, entry.detections_count
            )
            .map_err(|e| SkjoldError::Io(format!("Failed to write audit entry: {e}")))?;
        }

        Ok(())
    }
}

/// Hash a matched value with SHA-256
fn hash_value(value: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    let result = hasher.finalize();
    format!("{result:x}")
}
