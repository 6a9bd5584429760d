//! Main anonymization engine
//!
//! Drives the full pipeline over a record sequence: chunk records into
//! windows, analyze each window, substitute the surviving annotations with
//! placeholders, and map results back to per-record outputs in the original
//! order.

use crate::analysis::{
    Analyzer, BokmaalEngine, Detection, LanguageEngine, LemmaContextEnhancer, RecognizerRegistry,
};
use crate::anonymize::audit::AuditLogger;
use crate::anonymize::report::RunReport;
use crate::chunk::Chunker;
use crate::config::SkjoldConfig;
use crate::domain::{Result, SkjoldError};
use std::ops::Range;
use std::sync::Arc;
use std::time::Instant;

/// Anonymization engine
///
/// Constructed once per run from the validated configuration and reused for
/// every window; all components are read-only after construction.
pub struct AnonymizerEngine {
    analyzer: Analyzer,
    chunker: Chunker,
    language: String,
    score_threshold: f32,
    dry_run: bool,
    audit: Option<AuditLogger>,
}

impl AnonymizerEngine {
    /// Build the engine from a validated configuration.
    ///
    /// Recognizers come from the configured pattern library, or the
    /// embedded Norwegian set when none is configured. Grammar compilation
    /// failures surface here, before any text is processed.
    pub fn from_config(config: &SkjoldConfig) -> Result<Self> {
        let builder = match &config.analysis.pattern_library {
            Some(path) => RecognizerRegistry::builder().library_file(path)?,
            None => RecognizerRegistry::builder().norwegian_defaults()?,
        };
        let registry = builder.build();

        let context = &config.analysis.context;
        let enhancer = LemmaContextEnhancer::new(
            context.similarity_factor,
            context.min_score,
            context.prefix_count,
            context.suffix_count,
        )?;

        let engine: Arc<dyn LanguageEngine> = Arc::new(BokmaalEngine::new());
        let analyzer = Analyzer::new(registry, enhancer, engine);
        let chunker = Chunker::new(config.analysis.chunk_size)?;

        let audit = if config.audit.enabled {
            Some(AuditLogger::new(
                config.audit.log_path.clone(),
                config.audit.json_format,
            )?)
        } else {
            None
        };

        Ok(Self {
            analyzer,
            chunker,
            language: config.analysis.language.clone(),
            score_threshold: config.analysis.score_threshold,
            dry_run: config.application.dry_run,
            audit,
        })
    }

    /// Whether the engine reports without rewriting
    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Anonymize an ordered record sequence.
    ///
    /// Output record `i` is the redaction of input record `i`; length and
    /// order are preserved. In dry-run mode the text passes through
    /// unchanged while the report still counts detections.
    pub fn anonymize_records(&self, records: &[String]) -> Result<(Vec<String>, RunReport)> {
        let started = Instant::now();
        let mut report = RunReport::new();

        let windows = self.chunker.chunk(records);
        let mut outputs: Vec<Option<String>> = vec![None; records.len()];

        for (position, window) in windows.iter().enumerate() {
            let annotations =
                self.analyzer
                    .analyze(window.text(), &self.language, self.score_threshold);

            if !self.dry_run {
                if let Some(audit) = &self.audit {
                    audit.log_window(position, window.text(), &annotations)?;
                }
            }

            for (record_index, range) in window.records() {
                let record_text = &window.text()[range.clone()];
                let redacted = if self.dry_run {
                    record_text.to_string()
                } else {
                    let local = clamp_to_record(&annotations, range);
                    redact_spans(record_text, &local)?
                };
                outputs[*record_index] = Some(redacted);
            }

            report.add_window(&annotations);
            tracing::info!(
                window = position + 1,
                windows = windows.len(),
                annotations = annotations.len(),
                "Anonymized window"
            );
        }

        let redacted = outputs
            .into_iter()
            .enumerate()
            .map(|(index, output)| {
                output.ok_or_else(|| {
                    SkjoldError::Bounds(format!("Record {index} missing from reassembly"))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        report.finish(records.len(), windows.len(), started.elapsed());
        Ok((redacted, report))
    }
}

/// Replace each annotated span with its `<ENTITY_KIND>` placeholder.
///
/// Annotations must be sorted, non-overlapping and within bounds; a
/// violation is a [`SkjoldError::Bounds`] defect and no output is produced.
/// The rewrite runs left to right, so earlier replacements never disturb
/// the offsets of later ones.
pub fn redact_spans(text: &str, annotations: &[Detection]) -> Result<String> {
    validate_annotations(text, annotations)?;

    let mut output = String::with_capacity(text.len());
    let mut cursor = 0;

    for annotation in annotations {
        output.push_str(&text[cursor..annotation.start]);
        output.push('<');
        output.push_str(annotation.entity.label());
        output.push('>');
        cursor = annotation.end;
    }
    output.push_str(&text[cursor..]);

    Ok(output)
}

/// Check the annotation invariants the substitution relies on
fn validate_annotations(text: &str, annotations: &[Detection]) -> Result<()> {
    let mut previous_end = 0;

    for annotation in annotations {
        if annotation.start >= annotation.end || annotation.end > text.len() {
            return Err(SkjoldError::Bounds(format!(
                "Annotation {}..{} outside window of length {}",
                annotation.start,
                annotation.end,
                text.len()
            )));
        }
        if !text.is_char_boundary(annotation.start) || !text.is_char_boundary(annotation.end) {
            return Err(SkjoldError::Bounds(format!(
                "Annotation {}..{} not on character boundaries",
                annotation.start, annotation.end
            )));
        }
        if annotation.start < previous_end {
            return Err(SkjoldError::Bounds(format!(
                "Annotation {}..{} overlaps or precedes an earlier annotation",
                annotation.start, annotation.end
            )));
        }
        previous_end = annotation.end;
    }

    Ok(())
}

/// Project window annotations into one record's coordinate space.
///
/// Annotations crossing a record boundary are clamped to the record's
/// range, so every record redacts exactly the characters it owns.
fn clamp_to_record(annotations: &[Detection], range: &Range<usize>) -> Vec<Detection> {
    annotations
        .iter()
        .filter(|d| d.start < range.end && d.end > range.start)
        .map(|d| {
            let mut clamped = d.clone();
            clamped.start = d.start.max(range.start) - range.start;
            clamped.end = d.end.min(range.end) - range.start;
            clamped
        })
        .collect()
}
