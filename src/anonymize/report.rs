//! Run reporting for anonymization
//!
//! Summarizes a run for console output: how many records and windows were
//! processed, what was detected, and how long it took.

use crate::analysis::models::{Detection, EntityKind};
use serde::Serialize;
use std::collections::HashMap;
use std::time::Duration;

/// Summary of one anonymization run
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// Records processed
    pub records: usize,

    /// Windows analyzed
    pub windows: usize,

    /// Windows in which at least one annotation survived
    pub windows_with_detections: usize,

    /// Total annotations substituted
    pub total_detections: usize,

    /// Annotations by entity kind
    pub detections_by_kind: HashMap<EntityKind, usize>,

    /// Warnings collected during the run
    pub warnings: Vec<String>,

    /// Total processing time (ms)
    pub elapsed_ms: u64,
}

impl RunReport {
    /// Create a new empty report
    pub fn new() -> Self {
        Self {
            records: 0,
            windows: 0,
            windows_with_detections: 0,
            total_detections: 0,
            detections_by_kind: HashMap::new(),
            warnings: Vec::new(),
            elapsed_ms: 0,
        }
    }

    /// Record the annotations of one analyzed window
    pub fn add_window(&mut self, annotations: &[Detection]) {
        if !annotations.is_empty() {
            self.windows_with_detections += 1;
            self.total_detections += annotations.len();
            for annotation in annotations {
                *self.detections_by_kind.entry(annotation.entity).or_insert(0) += 1;
            }
        }
    }

    /// Add a warning
    pub fn add_warning(&mut self, warning: String) {
        self.warnings.push(warning);
    }

    /// Record run totals
    pub fn finish(&mut self, records: usize, windows: usize, elapsed: Duration) {
        self.records = records;
        self.windows = windows;
        self.elapsed_ms = elapsed.as_millis() as u64;
    }

    /// Format report for console output
    pub fn format_console(&self) -> String {
        let mut output = String::new();

        output.push_str("\nAnonymization summary\n");
        output.push_str("─────────────────────────────────────────\n");
        output.push_str(&format!("  Records processed:   {}\n", self.records));
        output.push_str(&format!("  Windows analyzed:    {}\n", self.windows));
        output.push_str(&format!("  Spans anonymized:    {}\n", self.total_detections));

        if !self.detections_by_kind.is_empty() {
            let mut kinds: Vec<_> = self.detections_by_kind.iter().collect();
            kinds.sort_by(|a, b| b.1.cmp(a.1));
            for (kind, count) in kinds {
                output.push_str(&format!("    {:12} {:>6}\n", kind.label(), count));
            }
        }

        if !self.warnings.is_empty() {
            output.push_str("  Warnings:\n");
            for warning in &self.warnings {
                output.push_str(&format!("    • {warning}\n"));
            }
        }

        output.push_str(&format!("  Elapsed:             {} ms\n", self.elapsed_ms));
        output
    }
}

impl Default for RunReport {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detection(kind: EntityKind) -> Detection {
        Detection::new(kind, 0, 4, 0.5, "test")
    }

    #[test]
    fn test_empty_report() {
        let report = RunReport::new();
        assert_eq!(report.total_detections, 0);
        assert!(report.detections_by_kind.is_empty());
    }

    #[test]
    fn test_add_window_counts_by_kind() {
        let mut report = RunReport::new();
        report.add_window(&[
            detection(EntityKind::Date),
            detection(EntityKind::Date),
            detection(EntityKind::Quantity),
        ]);
        report.add_window(&[]);

        assert_eq!(report.windows_with_detections, 1);
        assert_eq!(report.total_detections, 3);
        assert_eq!(report.detections_by_kind.get(&EntityKind::Date), Some(&2));
        assert_eq!(
            report.detections_by_kind.get(&EntityKind::Quantity),
            Some(&1)
        );
    }

    #[test]
    fn test_format_console() {
        let mut report = RunReport::new();
        report.add_window(&[detection(EntityKind::Date)]);
        report.finish(3, 1, Duration::from_millis(12));

        let output = report.format_console();
        assert!(output.contains("Records processed:   3"));
        assert!(output.contains("DATE"));
        assert!(output.contains("12 ms"));
    }
}
