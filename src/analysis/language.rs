//! Language engine
//!
//! The context enhancer needs two things from a language: word boundaries
//! with byte offsets, and a lemma lookup so inflected neighbors still match
//! the declared context vocabulary. Both are behind the [`LanguageEngine`]
//! trait; the analyzer treats the engine as an opaque capability reachable
//! via a language tag.

use unicode_segmentation::UnicodeSegmentation;

/// Language tag for Norwegian Bokmål
pub const NORWEGIAN_BOKMAAL: &str = "nb";

/// Tokenization and lemmatization capability for one language
pub trait LanguageEngine: Send + Sync {
    /// Language tag this engine serves
    fn language(&self) -> &str;

    /// Word tokens with their byte offsets, in text order
    fn words<'a>(&self, text: &'a str) -> Vec<(usize, &'a str)>;

    /// Dictionary form of a word, lowercased
    fn lemma(&self, word: &str) -> String;
}

/// Built-in Bokmål engine.
///
/// Words come from Unicode segmentation. The lemmatizer strips the common
/// definite/plural noun endings so that e.g. "kronene" and "kroner" reduce
/// to the same stem; it is deliberately small, enough for context-word
/// comparison and nothing more.
pub struct BokmaalEngine;

// Longest first, so "-ene" is tried before "-e"
const NOUN_SUFFIXES: [&str; 7] = ["ene", "ane", "er", "en", "et", "a", "e"];

const MIN_STEM_CHARS: usize = 3;

impl BokmaalEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BokmaalEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageEngine for BokmaalEngine {
    fn language(&self) -> &str {
        NORWEGIAN_BOKMAAL
    }

    fn words<'a>(&self, text: &'a str) -> Vec<(usize, &'a str)> {
        text.unicode_word_indices().collect()
    }

    fn lemma(&self, word: &str) -> String {
        let word = word.to_lowercase();
        for suffix in NOUN_SUFFIXES {
            if let Some(stem) = word.strip_suffix(suffix) {
                if stem.chars().count() >= MIN_STEM_CHARS {
                    return stem.to_string();
                }
            }
        }
        word
    }
}
