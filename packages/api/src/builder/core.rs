//! Core `Query` builder
//!
//! A `Query` borrows the input bytes and a parser, collects options, and
//! runs one lookup when a terminal method (`key`, `path`, `raw`) is called.

use spjson_engine::{JsonParser, LookupResult, Value};

/// State marker: no gate key set, every lookup is available
#[derive(Debug, Clone, Copy, Default)]
pub struct Ungated;

/// State marker: a gate key is set, only key search is available
#[derive(Debug, Clone)]
pub struct Gated {
    /// Ancestor key every match must sit below
    pub gate: String,
}

/// Access to the gate key carried by a builder state
pub trait GateState {
    fn gate(&self) -> Option<&str>;
}

impl GateState for Ungated {
    fn gate(&self) -> Option<&str> {
        None
    }
}

impl GateState for Gated {
    fn gate(&self) -> Option<&str> {
        Some(&self.gate)
    }
}

/// Fluent lookup over one JSON document
///
/// Type parameter `S` tracks the gate state:
/// - `Ungated`: path, key and raw lookups available
/// - `Gated`: only key search, restricted to the gate's subtrees
#[derive(Debug, Clone)]
pub struct Query<'a, S = Ungated> {
    pub(crate) data: &'a [u8],
    pub(crate) parser: &'a JsonParser,
    pub(crate) state: S,
}

impl<'a> Query<'a, Ungated> {
    /// Start a query over `data` using the process-wide parser
    #[must_use]
    pub fn new(data: &'a [u8]) -> Self {
        Self::with_parser(data, crate::global_parser())
    }

    /// Start a query over `data` using a specific parser
    #[must_use]
    pub fn with_parser(data: &'a [u8], parser: &'a JsonParser) -> Self {
        Self {
            data,
            parser,
            state: Ungated,
        }
    }

    /// Only report key matches found below a member named `gate`
    ///
    /// An empty gate leaves the query ungated.
    #[must_use]
    pub fn under(self, gate: impl Into<String>) -> Query<'a, Gated> {
        Query {
            data: self.data,
            parser: self.parser,
            state: Gated { gate: gate.into() },
        }
    }

    /// Value at the end of an explicit path
    ///
    /// # Errors
    ///
    /// Returns the parser's `LookupError` if the input cannot be decoded.
    pub fn path<I, P>(self, segments: I) -> LookupResult<Option<Value>>
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        let segments: Vec<String> = segments.into_iter().map(Into::into).collect();
        let found = self.parser.get_by_path(self.data, segments.as_slice())?;
        tracing::debug!(path = %segments.join(" > "), found = found.is_some(), "path lookup");
        Ok(found)
    }

    /// The whole decoded document
    ///
    /// # Errors
    ///
    /// Returns the parser's `LookupError` if the input cannot be decoded.
    pub fn raw(self) -> LookupResult<Value> {
        self.parser.get_raw(self.data)
    }
}

impl<S: GateState> Query<'_, S> {
    /// Every value bound to `key`, always as a vector
    ///
    /// # Errors
    ///
    /// Returns the parser's `LookupError` if the input cannot be decoded.
    pub fn key(&self, key: &str) -> LookupResult<Vec<Value>> {
        let gate = self.state.gate();
        let found = self.parser.get_by_key(self.data, key, gate)?;
        tracing::debug!(key, under = gate.unwrap_or(""), matches = found.len(), "key lookup");
        Ok(found)
    }

    /// First value bound to `key` in traversal order
    ///
    /// # Errors
    ///
    /// Returns the parser's `LookupError` if the input cannot be decoded.
    pub fn first(&self, key: &str) -> LookupResult<Option<Value>> {
        Ok(self.key(key)?.into_iter().next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEMA: &[u8] = br#"{"properties":{"allOf":{"items":1},"other":{"allOf":2}}}"#;

    #[test]
    fn test_gated_key() {
        let parser = JsonParser::new();
        let found = Query::with_parser(SCHEMA, &parser)
            .under("allOf")
            .key("items")
            .expect("valid JSON");
        assert_eq!(found, vec![Value::Number(1.0)]);
    }

    #[test]
    fn test_empty_gate_is_ungated() {
        let parser = JsonParser::new();
        let query = Query::with_parser(SCHEMA, &parser).under("");
        assert_eq!(query.key("allOf").expect("valid JSON").len(), 2);
    }

    #[test]
    fn test_first_follows_traversal_order() {
        let parser = JsonParser::new();
        let first = Query::with_parser(br#"{"k": 1, "a": {"k": 2}}"#, &parser)
            .first("k")
            .expect("valid JSON");
        assert_eq!(first, Some(Value::Number(1.0)));
    }

    #[test]
    fn test_path_accepts_owned_and_borrowed_segments() {
        let parser = JsonParser::new();
        let borrowed = Query::with_parser(SCHEMA, &parser)
            .path(["properties", "other", "allOf"])
            .expect("valid JSON");
        let owned = Query::with_parser(SCHEMA, &parser)
            .path(vec![String::from("properties"), String::from("other"), String::from("allOf")])
            .expect("valid JSON");
        assert_eq!(borrowed, Some(Value::Number(2.0)));
        assert_eq!(borrowed, owned);
    }
}
