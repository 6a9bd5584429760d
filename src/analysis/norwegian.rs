//! Built-in Norwegian recognizer set
//!
//! Date, age, year and quantity recognizers for Norwegian Bokmål. The
//! grammars, month/weekday names and spelled-number vocabularies are a
//! fixed lexicon asset, embedded at compile time and reproduced exactly;
//! see `patterns/norwegian_datetime.toml`.

use crate::analysis::pattern::PatternLibrary;
use crate::domain::Result;

const BUILTIN_LIBRARY: &str = include_str!("../../patterns/norwegian_datetime.toml");

/// The embedded Norwegian date/age/quantity pattern library
pub fn builtin_library() -> Result<PatternLibrary> {
    PatternLibrary::from_toml(BUILTIN_LIBRARY)
}
