//! Record chunking
//!
//! Long inputs are analyzed in bounded windows. The chunker packs
//! consecutive records into windows whose space-joined concatenation stays
//! under a size limit, and keeps each record's byte range inside the window
//! so results can be mapped back to the original records exactly.

use crate::domain::{Result, SkjoldError};
use std::ops::Range;

/// A bounded window of consecutive records joined by single spaces
#[derive(Debug, Clone)]
pub struct Window {
    text: String,
    /// (record index, byte range of that record inside `text`)
    records: Vec<(usize, Range<usize>)>,
}

impl Window {
    /// The window text submitted to the analyzer
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Record indices and their byte ranges, in input order
    pub fn records(&self) -> &[(usize, Range<usize>)] {
        &self.records
    }
}

/// Splits record sequences into analyzer-sized windows
#[derive(Debug, Clone)]
pub struct Chunker {
    max_window: usize,
}

impl Chunker {
    /// Create a chunker with the given maximum window size in characters
    pub fn new(max_window: usize) -> Result<Self> {
        if max_window == 0 {
            return Err(SkjoldError::Configuration(
                "Chunk size must be at least 1".to_string(),
            ));
        }
        Ok(Self { max_window })
    }

    /// Partition records into consecutive windows.
    ///
    /// Every record lands in exactly one window, in input order. A single
    /// record larger than the window size passes through as its own
    /// oversized window: splitting mid-record could break a pattern match
    /// at the cut point, so it is only logged.
    pub fn chunk(&self, records: &[String]) -> Vec<Window> {
        let mut windows = Vec::new();
        let mut text = String::new();
        let mut ranges: Vec<(usize, Range<usize>)> = Vec::new();

        for (index, record) in records.iter().enumerate() {
            let added = record.len() + if text.is_empty() { 0 } else { 1 };
            if !text.is_empty() && text.len() + added > self.max_window {
                windows.push(Window {
                    text: std::mem::take(&mut text),
                    records: std::mem::take(&mut ranges),
                });
            }

            if text.is_empty() && record.len() > self.max_window {
                tracing::warn!(
                    record = index,
                    length = record.len(),
                    max_window = self.max_window,
                    "Record exceeds window size, processing as oversized window"
                );
            }

            if !text.is_empty() {
                text.push(' ');
            }
            let start = text.len();
            text.push_str(record);
            ranges.push((index, start..text.len()));
        }

        if !ranges.is_empty() {
            windows.push(Window {
                text,
                records: ranges,
            });
        }

        windows
    }
}
