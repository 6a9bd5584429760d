//! Lemma-aware context enhancement
//!
//! A match near one of its recognizer's declared context words is more
//! likely to be a true positive ("2000 kroner" is a quantity, not a year).
//! The enhancer inspects a configurable number of words before and after a
//! candidate and raises its score on lexical or lemma overlap with the
//! vocabulary. It never lowers a score and never creates or removes
//! matches.

use crate::analysis::language::LanguageEngine;
use crate::analysis::models::Detection;
use crate::domain::{Result, SkjoldError};
use std::collections::HashSet;

/// Context-aware score enhancer
#[derive(Debug, Clone)]
pub struct LemmaContextEnhancer {
    similarity_factor: f32,
    min_score_with_context: f32,
    prefix_count: usize,
    suffix_count: usize,
}

impl LemmaContextEnhancer {
    /// Create an enhancer.
    ///
    /// `similarity_factor` is added to the score of a supported match;
    /// `min_score_with_context` is the floor a supported match is lifted
    /// to; `prefix_count`/`suffix_count` bound the word window inspected
    /// before/after the match.
    pub fn new(
        similarity_factor: f32,
        min_score_with_context: f32,
        prefix_count: usize,
        suffix_count: usize,
    ) -> Result<Self> {
        if !(0.0..=1.0).contains(&similarity_factor) {
            return Err(SkjoldError::Configuration(format!(
                "Context similarity factor {similarity_factor} outside [0, 1]"
            )));
        }
        if !(0.0..=1.0).contains(&min_score_with_context) {
            return Err(SkjoldError::Configuration(format!(
                "Minimum score with context {min_score_with_context} outside [0, 1]"
            )));
        }

        Ok(Self {
            similarity_factor,
            min_score_with_context,
            prefix_count,
            suffix_count,
        })
    }

    /// Raise the detection's score if a neighboring word supports it.
    ///
    /// A neighbor supports the match when its lemma (or lowercased surface
    /// form) equals the lemma of any declared context word. Detections
    /// without neighboring context words pass through unchanged.
    pub fn enhance(
        &self,
        window: &str,
        detection: &mut Detection,
        context: &[String],
        engine: &dyn LanguageEngine,
    ) {
        if context.is_empty() || (self.prefix_count == 0 && self.suffix_count == 0) {
            return;
        }

        let words = engine.words(window);

        let before = words
            .iter()
            .filter(|(offset, word)| offset + word.len() <= detection.start)
            .rev()
            .take(self.prefix_count);
        let after = words
            .iter()
            .filter(|(offset, _)| *offset >= detection.end)
            .take(self.suffix_count);

        let vocabulary: HashSet<String> = context.iter().map(|w| engine.lemma(w)).collect();

        let supported = before
            .chain(after)
            .any(|(_, word)| vocabulary.contains(&engine.lemma(word)));

        if supported {
            let boosted = (detection.score + self.similarity_factor).min(1.0);
            let raised = boosted.max(self.min_score_with_context);
            // enhancement only ever strengthens
            detection.set_score(raised.max(detection.score));
        }
    }
}

impl Default for LemmaContextEnhancer {
    fn default() -> Self {
        Self {
            similarity_factor: 0.45,
            min_score_with_context: 0.4,
            prefix_count: 0,
            suffix_count: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::language::BokmaalEngine;
    use crate::analysis::models::EntityKind;

    fn quantity_context() -> Vec<String> {
        ["kroner", "meter", "omtrent", "km"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_boosts_on_following_context_word() {
        let enhancer = LemmaContextEnhancer::default();
        let engine = BokmaalEngine::new();
        let window = "Det kostet 2000 kroner.";
        let mut detection = Detection::new(EntityKind::Quantity, 11, 15, 0.4, "quantity_year_like");

        enhancer.enhance(window, &mut detection, &quantity_context(), &engine);

        assert!((detection.score - 0.85).abs() < 1e-6);
    }

    #[test]
    fn test_boosts_on_inflected_context_word() {
        let enhancer = LemmaContextEnhancer::default();
        let engine = BokmaalEngine::new();
        // "kronene" is not in the vocabulary but lemmatizes like "kroner"
        let window = "Han brukte 1900 kronene.";
        let mut detection = Detection::new(EntityKind::Quantity, 11, 15, 0.4, "quantity_year_like");

        enhancer.enhance(window, &mut detection, &quantity_context(), &engine);

        assert!(detection.score > 0.4);
    }

    #[test]
    fn test_no_context_word_leaves_score_unchanged() {
        let enhancer = LemmaContextEnhancer::default();
        let engine = BokmaalEngine::new();
        let window = "Det skjedde i 2000 her.";
        let mut detection = Detection::new(EntityKind::Quantity, 14, 18, 0.4, "quantity_year_like");

        enhancer.enhance(window, &mut detection, &quantity_context(), &engine);

        assert_eq!(detection.score, 0.4);
    }

    #[test]
    fn test_empty_vocabulary_is_noop() {
        let enhancer = LemmaContextEnhancer::default();
        let engine = BokmaalEngine::new();
        let mut detection = Detection::new(EntityKind::Date, 0, 4, 0.5, "year");

        enhancer.enhance("1984 kroner", &mut detection, &[], &engine);

        assert_eq!(detection.score, 0.5);
    }

    #[test]
    fn test_prefix_words_ignored_with_zero_prefix_count() {
        let enhancer = LemmaContextEnhancer::default();
        let engine = BokmaalEngine::new();
        // context word precedes the match; the default window is 0 before, 1 after
        let window = "kroner 2000 betalt";
        let mut detection = Detection::new(EntityKind::Quantity, 7, 11, 0.4, "quantity_year_like");

        enhancer.enhance(window, &mut detection, &quantity_context(), &engine);

        assert_eq!(detection.score, 0.4);
    }

    #[test]
    fn test_score_never_decreases() {
        let enhancer = LemmaContextEnhancer::new(0.1, 0.2, 0, 1).unwrap();
        let engine = BokmaalEngine::new();
        let window = "Det kostet 2000 kroner.";
        let mut detection = Detection::new(EntityKind::Quantity, 11, 15, 0.9, "quantity_year_like");

        enhancer.enhance(window, &mut detection, &quantity_context(), &engine);

        assert!(detection.score >= 0.9);
    }

    #[test]
    fn test_score_capped_at_one() {
        let enhancer = LemmaContextEnhancer::default();
        let engine = BokmaalEngine::new();
        let window = "Det kostet 2000 kroner.";
        let mut detection = Detection::new(EntityKind::Quantity, 11, 15, 0.8, "quantity_year_like");

        enhancer.enhance(window, &mut detection, &quantity_context(), &engine);

        assert!(detection.score <= 1.0);
    }

    #[test]
    fn test_invalid_factor_rejected() {
        assert!(LemmaContextEnhancer::new(1.5, 0.4, 0, 1).is_err());
        assert!(LemmaContextEnhancer::new(0.45, -0.1, 0, 1).is_err());
    }
}
