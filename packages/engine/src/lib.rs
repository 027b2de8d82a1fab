//! # spjson engine
//!
//! Generic JSON value search over a fully decoded document.
//!
//! Two ways to find values:
//!
//! - **Explicit paths**: an ordered list of object keys and bracketed array
//!   indices, e.g. `["properties", "nc:Vehicle", "oneOf", "[0]"]`.
//! - **Recursive key search**: every value bound to a key anywhere in the
//!   document, optionally only below some ancestor key.
//!
//! Decoding is delegated to `serde_json`. Any top-level kind is accepted;
//! non-object roots are normalized under a synthetic wrapper so that search
//! logic always starts from an object.
//!
//! ```
//! use spjson_engine::{JsonParser, Value};
//!
//! let parser = JsonParser::new();
//! let data = br#"{"properties":{"allOf":{"items":1},"other":{"allOf":2}}}"#;
//!
//! let items = parser.get_by_key(data, "items", Some("allOf")).expect("valid JSON");
//! assert_eq!(items, vec![Value::Number(1.0)]);
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod config;
pub mod document;
pub mod error;
pub mod lookup;
pub mod path;
pub mod search;
pub mod stats;
pub mod value;

pub use config::{ConfigurationError, LookupConfig, PathMode};
pub use document::{Document, DocumentRef};
pub use error::{LookupError, LookupResult};
pub use lookup::JsonParser;
pub use path::{Path, PathSegment};
pub use stats::{LookupStats, LookupStatsSnapshot};
pub use value::{Object, Value, ValueKind};
