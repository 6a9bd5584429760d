//! Entity recognition pipeline
//!
//! The analysis layer turns a text window into a set of non-overlapping,
//! threshold-surviving annotations:
//!
//! - **Recognizers** ([`recognizer`]) emit candidate matches from regex
//!   grammars defined in TOML pattern libraries ([`pattern`]).
//! - The **registry** ([`registry`]) is the immutable, ordered recognizer
//!   collection, assembled by a builder before analysis starts.
//! - The **context enhancer** ([`context`]) strengthens candidates near
//!   their recognizer's declared vocabulary, using word boundaries and
//!   lemmas from the **language engine** ([`language`]).
//! - The **analyzer** ([`analyzer`]) orchestrates the above and resolves
//!   overlaps.
//!
//! The built-in Norwegian recognizer set lives in [`norwegian`].

pub mod analyzer;
pub mod context;
pub mod language;
pub mod models;
pub mod norwegian;
pub mod pattern;
pub mod recognizer;
pub mod registry;

// Re-export main types
pub use analyzer::Analyzer;
pub use context::LemmaContextEnhancer;
pub use language::{BokmaalEngine, LanguageEngine, NORWEGIAN_BOKMAAL};
pub use models::{Detection, EntityKind};
pub use pattern::PatternLibrary;
pub use recognizer::{PatternRecognizer, Recognizer};
pub use registry::{RecognizerRegistry, RegistryBuilder};
