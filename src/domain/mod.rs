//! Domain types for Skjold.
//!
//! The domain layer provides the error taxonomy ([`SkjoldError`]) and the
//! crate-wide [`Result`] alias. All fallible operations in the analysis and
//! anonymization pipeline return `Result<T, SkjoldError>`; errors never
//! expose third-party types.

pub mod errors;
pub mod result;

// Re-export commonly used types for convenience
pub use errors::SkjoldError;
pub use result::Result;
