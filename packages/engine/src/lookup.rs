//! Lookup facade
//!
//! [`JsonParser`] is the single entry point: decode, normalize, then resolve
//! a path or run a key search. It keeps no per-call state, so one instance
//! can be shared across threads and called concurrently; the only shared
//! state is the atomic [`LookupStats`].

use crate::config::{ConfigResult, LookupConfig, Validator};
use crate::document::DocumentRef;
use crate::error::{LookupError, LookupResult};
use crate::path::{Path, resolve as resolve_path};
use crate::search;
use crate::stats::LookupStats;
use crate::value::Value;

/// JSON lookup facade
#[derive(Debug, Default)]
pub struct JsonParser {
    config: LookupConfig,
    stats: LookupStats,
}

impl JsonParser {
    /// Create a parser with the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with a custom configuration
    ///
    /// # Errors
    ///
    /// Returns a `ConfigurationError` if the configuration does not validate.
    pub fn with_config(config: LookupConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            stats: LookupStats::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &LookupConfig {
        &self.config
    }

    #[must_use]
    pub fn stats(&self) -> &LookupStats {
        &self.stats
    }

    /// Value at the end of an explicit path
    ///
    /// Segments are object keys or bracketed array indices such as `"[2]"`.
    /// A path that does not resolve is `Ok(None)`; only malformed input is
    /// an error.
    ///
    /// # Errors
    ///
    /// Returns `LookupError::Decode` if `data` is not valid JSON, and
    /// `LookupError::InputTooLarge` if it exceeds the configured limit.
    ///
    /// # Examples
    /// ```
    /// use spjson_engine::{JsonParser, Value};
    ///
    /// let parser = JsonParser::new();
    /// let found = parser
    ///     .get_by_path(br#"{"a":{"b":[{"c":5}]}}"#, &["a", "b", "[0]", "c"])
    ///     .expect("valid JSON");
    /// assert_eq!(found, Some(Value::Number(5.0)));
    /// ```
    pub fn get_by_path<S: AsRef<str>>(&self, data: &[u8], path: &[S]) -> LookupResult<Option<Value>> {
        let path = Path::from_segments(path.iter().map(S::as_ref));
        let document = self.decode(data)?;
        Ok(self.find_by_path(&document, &path).cloned())
    }

    /// Every value bound to `key`, optionally only below a member named `under`
    ///
    /// Always a vector; empty when nothing matched. `Some("")` is the same as
    /// `None`.
    ///
    /// # Errors
    ///
    /// Returns `LookupError::Decode` if `data` is not valid JSON, and
    /// `LookupError::InputTooLarge` if it exceeds the configured limit.
    pub fn get_by_key(&self, data: &[u8], key: &str, under: Option<&str>) -> LookupResult<Vec<Value>> {
        let document = self.decode(data)?;
        Ok(self
            .find_by_key(&document, key, under)
            .into_iter()
            .cloned()
            .collect())
    }

    /// The decoded document, untouched
    ///
    /// # Errors
    ///
    /// Returns `LookupError::Decode` if `data` is not valid JSON, and
    /// `LookupError::InputTooLarge` if it exceeds the configured limit.
    pub fn get_raw(&self, data: &[u8]) -> LookupResult<Value> {
        self.decode(data)
    }

    /// Path lookup over an already decoded document
    #[must_use]
    pub fn find_by_path<'a>(&self, document: &'a Value, path: &Path) -> Option<&'a Value> {
        let found = resolve_path(DocumentRef::normalize(document), path, self.config.path_mode);
        self.stats.record_lookup(found.is_some());
        if found.is_none() && self.config.log_misses {
            log::debug!("JSON value not found: path={path}");
        }
        found
    }

    /// Key search over an already decoded document
    #[must_use]
    pub fn find_by_key<'a>(&self, document: &'a Value, key: &str, under: Option<&str>) -> Vec<&'a Value> {
        let found = search::search(DocumentRef::normalize(document), key, under);
        self.stats.record_lookup(!found.is_empty());
        if found.is_empty() && self.config.log_misses {
            log::debug!("JSON value not found: key={key} under={}", under.unwrap_or(""));
        }
        found
    }

    fn decode(&self, data: &[u8]) -> LookupResult<Value> {
        if let Some(limit) = self.config.max_input_bytes {
            if data.len() > limit {
                log::error!("JSON input rejected: {} bytes over limit of {limit}", data.len());
                return Err(LookupError::InputTooLarge {
                    len: data.len(),
                    limit,
                });
            }
        }
        self.stats.record_bytes(data.len() as u64);

        let json: serde_json::Value = serde_json::from_slice(data).map_err(|e| {
            self.stats.record_decode_error();
            log::error!("unmarshal JSON data error: {e} ({} bytes)", data.len());
            LookupError::Decode(e)
        })?;

        Value::try_from(json).inspect_err(|e| log::error!("JSON data error: {e}"))
    }
}
