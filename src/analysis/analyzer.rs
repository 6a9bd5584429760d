//! Analyzer
//!
//! Orchestrates the recognizers and the context enhancer over a text
//! window: collect all raw candidates, enhance, filter by score threshold,
//! resolve overlaps into a final non-overlapping annotation set.

use crate::analysis::context::LemmaContextEnhancer;
use crate::analysis::language::LanguageEngine;
use crate::analysis::models::Detection;
use crate::analysis::registry::RecognizerRegistry;
use std::cmp::Ordering;
use std::sync::Arc;

/// Analysis context: registry, enhancer and language engine, constructed
/// once and reused across windows.
///
/// The analyzer holds no per-window state; [`analyze`](Self::analyze) is
/// read-only, so one analyzer can serve any number of windows (and could be
/// shared across threads).
pub struct Analyzer {
    registry: RecognizerRegistry,
    enhancer: LemmaContextEnhancer,
    engine: Arc<dyn LanguageEngine>,
}

impl Analyzer {
    /// Create an analyzer from its three collaborators
    pub fn new(
        registry: RecognizerRegistry,
        enhancer: LemmaContextEnhancer,
        engine: Arc<dyn LanguageEngine>,
    ) -> Self {
        Self {
            registry,
            enhancer,
            engine,
        }
    }

    /// Analyze one window.
    ///
    /// Returns the final annotation set: non-overlapping, sorted by start
    /// offset, every score at or above `score_threshold`.
    ///
    /// A recognizer whose execution fails loses its candidates for this
    /// window only; the failure is logged, not propagated, since losing one
    /// recognizer's coverage on one window is far cheaper than losing the
    /// whole batch.
    pub fn analyze(&self, window: &str, language: &str, score_threshold: f32) -> Vec<Detection> {
        let mut candidates = Vec::new();

        for recognizer in self.registry.for_language(language) {
            match recognizer.recognize(window) {
                Ok(mut found) => {
                    let context = recognizer.context();
                    if !context.is_empty() {
                        for detection in &mut found {
                            self.enhancer
                                .enhance(window, detection, context, self.engine.as_ref());
                        }
                    }
                    candidates.extend(found);
                }
                Err(e) => {
                    tracing::warn!(
                        recognizer = recognizer.name(),
                        error = %e,
                        "Recognizer failed on window, dropping its candidates"
                    );
                }
            }
        }

        candidates.retain(|d| d.score >= score_threshold);

        resolve_overlaps(candidates)
    }
}

/// Resolve overlapping candidates into a non-overlapping annotation set.
///
/// Tie-break policy: higher score first; at equal score the longer span
/// (the more specific pattern); at equal length the earlier start. Sorted
/// candidates are accepted greedily against the already accepted set, then
/// re-sorted by start offset for output.
fn resolve_overlaps(mut candidates: Vec<Detection>) -> Vec<Detection> {
    candidates.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| b.len().cmp(&a.len()))
            .then_with(|| a.start.cmp(&b.start))
    });

    let mut accepted: Vec<Detection> = Vec::new();
    for candidate in candidates {
        if !accepted.iter().any(|a| a.overlaps(&candidate)) {
            accepted.push(candidate);
        }
    }

    accepted.sort_by_key(|d| d.start);
    accepted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::language::BokmaalEngine;
    use crate::analysis::models::EntityKind;
    use crate::analysis::recognizer::Recognizer;
    use crate::domain::{Result, SkjoldError};

    fn detection(start: usize, end: usize, score: f32, name: &str) -> Detection {
        Detection::new(EntityKind::Date, start, end, score, name)
    }

    #[test]
    fn test_resolve_prefers_higher_score() {
        let resolved = resolve_overlaps(vec![
            detection(0, 4, 0.5, "year"),
            detection(0, 4, 0.85, "quantity"),
        ]);

        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].recognizer, "quantity");
    }

    #[test]
    fn test_resolve_prefers_longer_span_at_equal_score() {
        let resolved = resolve_overlaps(vec![
            detection(3, 9, 0.5, "month"),
            detection(0, 14, 0.5, "date_month_year"),
        ]);

        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].recognizer, "date_month_year");
    }

    #[test]
    fn test_resolve_prefers_earlier_start_at_equal_length() {
        let resolved = resolve_overlaps(vec![
            detection(2, 6, 0.5, "late"),
            detection(0, 4, 0.5, "early"),
        ]);

        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].recognizer, "early");
    }

    #[test]
    fn test_resolve_keeps_disjoint_sorted_by_start() {
        let resolved = resolve_overlaps(vec![
            detection(10, 14, 0.5, "b"),
            detection(0, 4, 0.6, "a"),
            detection(20, 24, 0.7, "c"),
        ]);

        let starts: Vec<_> = resolved.iter().map(|d| d.start).collect();
        assert_eq!(starts, vec![0, 10, 20]);
    }

    #[test]
    fn test_resolve_output_never_overlaps() {
        let resolved = resolve_overlaps(vec![
            detection(0, 10, 0.5, "a"),
            detection(5, 15, 0.5, "b"),
            detection(12, 20, 0.5, "c"),
            detection(8, 13, 0.9, "d"),
        ]);

        for (i, a) in resolved.iter().enumerate() {
            for b in &resolved[i + 1..] {
                assert!(!a.overlaps(b));
            }
        }
    }

    struct FailingRecognizer;

    impl Recognizer for FailingRecognizer {
        fn name(&self) -> &str {
            "failing"
        }

        fn entity(&self) -> EntityKind {
            EntityKind::Date
        }

        fn language(&self) -> &str {
            "nb"
        }

        fn recognize(&self, _window: &str) -> Result<Vec<Detection>> {
            Err(SkjoldError::Analysis("backtrack limit".to_string()))
        }
    }

    struct FixedRecognizer;

    impl Recognizer for FixedRecognizer {
        fn name(&self) -> &str {
            "fixed"
        }

        fn entity(&self) -> EntityKind {
            EntityKind::Date
        }

        fn language(&self) -> &str {
            "nb"
        }

        fn recognize(&self, _window: &str) -> Result<Vec<Detection>> {
            Ok(vec![detection(0, 3, 0.5, "fixed")])
        }
    }

    #[test]
    fn test_failing_recognizer_does_not_abort_window() {
        let registry = RecognizerRegistry::builder()
            .recognizer(FailingRecognizer)
            .recognizer(FixedRecognizer)
            .build();
        let analyzer = Analyzer::new(
            registry,
            LemmaContextEnhancer::default(),
            Arc::new(BokmaalEngine::new()),
        );

        let annotations = analyzer.analyze("abc def", "nb", 0.3);

        assert_eq!(annotations.len(), 1);
        assert_eq!(annotations[0].recognizer, "fixed");
    }

    #[test]
    fn test_threshold_filters_low_scores() {
        struct LowScoreRecognizer;

        impl Recognizer for LowScoreRecognizer {
            fn name(&self) -> &str {
                "low"
            }

            fn entity(&self) -> EntityKind {
                EntityKind::Quantity
            }

            fn language(&self) -> &str {
                "nb"
            }

            fn recognize(&self, _window: &str) -> Result<Vec<Detection>> {
                Ok(vec![Detection::new(EntityKind::Quantity, 0, 3, 0.2, "low")])
            }
        }

        let registry = RecognizerRegistry::builder()
            .recognizer(LowScoreRecognizer)
            .build();
        let analyzer = Analyzer::new(
            registry,
            LemmaContextEnhancer::default(),
            Arc::new(BokmaalEngine::new()),
        );

        assert!(analyzer.analyze("abc", "nb", 0.3).is_empty());
    }
}
