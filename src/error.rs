//! Error types for attribute casting.

use thiserror::Error;

/// Result type for cast operations.
pub type CastResult<T> = Result<T, CastError>;

/// Errors that can occur while casting attributes.
///
/// Loose primitive coercions (int/float/string/bool) never fail; errors
/// only arise from the date/time normalizer and the JSON decoder. A failure
/// on one field aborts the whole record pass.
#[derive(Debug, Error)]
pub enum CastError {
    /// A value could not be parsed under the effective date format.
    #[error("unparseable date-time {value:?} for format {format:?}")]
    DateParse { value: String, format: String },

    /// Malformed JSON text for a `json`-declared field.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A `json`-declared field carried a non-string raw value.
    #[error("json cast expects JSON text, got a {0} value")]
    JsonInput(&'static str),
}
