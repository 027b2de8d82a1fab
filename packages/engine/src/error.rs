//! Lookup error types
//!
//! "Not found" is deliberately absent here: a path that does not resolve or a
//! key with no occurrences is an empty result, not an error.

/// Result type for lookup operations
pub type LookupResult<T> = Result<T, LookupError>;

/// Errors surfaced by the lookup facade
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// Input bytes are not valid JSON
    #[error(transparent)]
    Decode(#[from] serde_json::Error),

    /// The decoder produced something the value model cannot represent
    #[error("JSON data type not recognized: {kind}")]
    UnrecognizedType { kind: String },

    /// Input rejected before decoding because of the configured size limit
    #[error("input of {len} bytes exceeds the configured limit of {limit} bytes")]
    InputTooLarge { len: usize, limit: usize },
}

impl LookupError {
    pub fn unrecognized_type(kind: impl Into<String>) -> Self {
        LookupError::UnrecognizedType { kind: kind.into() }
    }

    /// True when the input itself was malformed JSON
    #[must_use]
    pub fn is_decode(&self) -> bool {
        matches!(self, LookupError::Decode(_))
    }
}
