//! Analysis data models

use serde::{Deserialize, Serialize};
use std::fmt;

/// PII category assigned to a detected span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityKind {
    /// Dates, ages, years, weekdays and other time-related expressions.
    /// Nearly all time expressions map here so downstream anonymization
    /// treats them uniformly.
    Date,
    /// Bare numbers that are only probably years, disambiguated by
    /// surrounding unit words. Kept separate from [`EntityKind::Date`] to
    /// avoid over-redacting ordinary monetary or measurement figures.
    Quantity,
}

impl EntityKind {
    /// Placeholder label for the category, as substituted into output text
    pub fn label(&self) -> &'static str {
        match self {
            Self::Date => "DATE",
            Self::Quantity => "QUANTITY",
        }
    }

    /// Parse an entity kind from its library string form
    pub fn parse(s: &str) -> crate::domain::Result<Self> {
        match s.to_uppercase().as_str() {
            "DATE" => Ok(Self::Date),
            "QUANTITY" => Ok(Self::Quantity),
            _ => Err(crate::domain::SkjoldError::Configuration(format!(
                "Unknown entity kind: {s}"
            ))),
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A candidate match produced by a recognizer.
///
/// Offsets are half-open byte offsets into the analyzed window, always on
/// character boundaries since they come from the regex engine. Detections
/// that survive thresholding and overlap resolution are the annotations
/// consumed by the anonymizer.
#[derive(Debug, Clone, Serialize)]
pub struct Detection {
    /// Category of the detected span
    pub entity: EntityKind,
    /// Start byte offset into the window (inclusive)
    pub start: usize,
    /// End byte offset into the window (exclusive)
    pub end: usize,
    /// Confidence score (0.0 - 1.0)
    pub score: f32,
    /// Name of the recognizer that produced this detection
    pub recognizer: String,
}

impl Detection {
    /// Create a new detection; the score is clamped into [0, 1]
    pub fn new(
        entity: EntityKind,
        start: usize,
        end: usize,
        score: f32,
        recognizer: impl Into<String>,
    ) -> Self {
        Self {
            entity,
            start,
            end,
            score: score.clamp(0.0, 1.0),
            recognizer: recognizer.into(),
        }
    }

    /// Set the confidence score, clamped into [0, 1]
    pub fn set_score(&mut self, score: f32) {
        self.score = score.clamp(0.0, 1.0);
    }

    /// Span length in bytes
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Whether the span is empty
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Whether two detections share any character position
    pub fn overlaps(&self, other: &Detection) -> bool {
        self.start < other.end && other.start < self.end
    }
}
