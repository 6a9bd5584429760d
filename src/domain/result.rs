//! Result type alias for Skjold

use super::errors::SkjoldError;

/// Result type alias for Skjold operations
///
/// Use this throughout the codebase for fallible operations.
pub type Result<T> = std::result::Result<T, SkjoldError>;
