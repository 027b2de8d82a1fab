//! spjson public API
//!
//! Find values in JSON documents either by an explicit path of keys and
//! array indices, or by searching the whole document for a key, optionally
//! only below some ancestor key.
//!
//! The free functions use a process-wide [`JsonParser`]; build your own with
//! [`JsonParser::with_config`] when different settings are needed.
//!
//! ```
//! let data = br##"{"properties":{"nc:Vehicle":{"oneOf":[{"$ref":"#/v"}]}}}"##;
//!
//! let first = spjson::get_by_path(data, &["properties", "nc:Vehicle", "oneOf", "[0]"])
//!     .expect("valid JSON");
//! assert!(first.is_some());
//!
//! let refs = spjson::get_by_key(data, "$ref", Some("oneOf")).expect("valid JSON");
//! assert_eq!(refs.len(), 1);
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

use std::sync::OnceLock;

pub mod builder;

pub use builder::{Gated, GateState, Query, Ungated};

// Re-export the engine types callers handle directly
pub use spjson_engine::{
    ConfigurationError, JsonParser, LookupConfig, LookupError, LookupResult, LookupStatsSnapshot,
    Path, PathMode, Value, ValueKind,
};

/// Process-wide parser shared by the free functions and `SpJson`
static GLOBAL_PARSER: OnceLock<JsonParser> = OnceLock::new();

/// Get the process-wide parser, creating it with defaults on first use
pub fn global_parser() -> &'static JsonParser {
    GLOBAL_PARSER.get_or_init(JsonParser::new)
}

/// Initialize the process-wide parser with a custom configuration
///
/// Has no effect once the parser exists. An invalid configuration is logged
/// and the default parser is used instead.
pub fn init_global_parser(config: LookupConfig) {
    match JsonParser::with_config(config) {
        Ok(parser) => {
            if GLOBAL_PARSER.set(parser).is_err() {
                tracing::warn!("global JSON parser already initialized, configuration ignored");
            }
        }
        Err(e) => {
            tracing::error!("invalid JSON parser configuration: {e}, using default parser");
        }
    }
}

/// Main entry point for fluent queries
pub struct SpJson;

impl SpJson {
    /// Start a query over `data` with the process-wide parser
    #[must_use]
    pub fn bytes(data: &[u8]) -> Query<'_> {
        Query::new(data)
    }

    /// Start a query over `data` with a specific parser
    #[must_use]
    pub fn with_parser<'a>(data: &'a [u8], parser: &'a JsonParser) -> Query<'a> {
        Query::with_parser(data, parser)
    }
}

/// Value at the end of an explicit path, `None` when it does not resolve
///
/// # Errors
///
/// Returns `LookupError::Decode` if `data` is not valid JSON.
pub fn get_by_path<S: AsRef<str>>(data: &[u8], path: &[S]) -> LookupResult<Option<Value>> {
    global_parser().get_by_path(data, path)
}

/// Every value bound to `key`, optionally only below a member named `under`
///
/// # Errors
///
/// Returns `LookupError::Decode` if `data` is not valid JSON.
pub fn get_by_key(data: &[u8], key: &str, under: Option<&str>) -> LookupResult<Vec<Value>> {
    global_parser().get_by_key(data, key, under)
}

/// The decoded document as-is
///
/// # Errors
///
/// Returns `LookupError::Decode` if `data` is not valid JSON.
pub fn get_raw(data: &[u8]) -> LookupResult<Value> {
    global_parser().get_raw(data)
}
