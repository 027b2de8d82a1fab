//! Lookup configuration
//!
//! `LookupConfig` is a plain serde-friendly struct with fluent `with_*`
//! builders. Validation lives in [`validation`].

pub mod validation;

use serde::{Deserialize, Serialize};

pub use validation::{ConfigResult, ConfigurationError, Validator};

/// How an explicit path treats a segment that does not match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathMode {
    /// The first unmatched segment fails the whole path
    #[default]
    Strict,
    /// Unmatched segments keep the last cursor and only the final segment
    /// decides success. A segment may also advance twice, once by key and
    /// once by index. Kept for compatibility with older callers.
    Lenient,
}

/// Lookup facade configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    /// Path resolution mode
    pub path_mode: PathMode,

    /// Log a debug diagnostic when a lookup finds nothing
    pub log_misses: bool,

    /// Reject inputs larger than this many bytes before decoding
    pub max_input_bytes: Option<usize>,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            path_mode: PathMode::Strict,
            log_misses: true,
            max_input_bytes: None,
        }
    }
}

impl LookupConfig {
    /// Select the path resolution mode
    ///
    /// # Examples
    /// ```
    /// use spjson_engine::config::{LookupConfig, PathMode};
    ///
    /// let config = LookupConfig::default().with_path_mode(PathMode::Lenient);
    /// assert_eq!(config.path_mode, PathMode::Lenient);
    /// ```
    #[must_use]
    pub fn with_path_mode(mut self, mode: PathMode) -> Self {
        self.path_mode = mode;
        self
    }

    #[must_use]
    pub fn with_miss_logging(mut self, enabled: bool) -> Self {
        self.log_misses = enabled;
        self
    }

    /// Cap the size of accepted input documents
    #[must_use]
    pub fn with_max_input_bytes(mut self, limit: usize) -> Self {
        self.max_input_bytes = Some(limit);
        self
    }

    /// Parse a configuration from JSON text; missing fields take defaults
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::Parse` for malformed JSON or unknown
    /// enum values, and any error from [`Validator::validate`].
    pub fn from_json(text: &str) -> ConfigResult<Self> {
        let config: LookupConfig =
            serde_json::from_str(text).map_err(|e| ConfigurationError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}
