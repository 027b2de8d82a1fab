//! Document normalization
//!
//! JSON documents may have any kind at the top level. Search logic wants an
//! object root, so anything else is held under a synthetic wrapper. The
//! wrapper is an enum tag rather than a string key: no real member name can
//! collide with it, and key search never reports it.

use crate::value::{Object, Value, ValueKind};

/// An owned, object-rooted document
#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    /// The document was already an object
    Object(Object),
    /// A non-object top-level value under the synthetic wrapper
    Wrapped(Value),
}

/// Borrowed view of a normalized document
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DocumentRef<'a> {
    Object(&'a Object),
    Wrapped(&'a Value),
}

impl Document {
    /// Normalize an owned value. Never fails.
    #[must_use]
    pub fn normalize(value: Value) -> Self {
        log_root_kind(value.kind());
        match value {
            Value::Object(map) => Document::Object(map),
            other => Document::Wrapped(other),
        }
    }

    #[must_use]
    pub fn view(&self) -> DocumentRef<'_> {
        match self {
            Document::Object(map) => DocumentRef::Object(map),
            Document::Wrapped(value) => DocumentRef::Wrapped(value),
        }
    }

    #[must_use]
    pub fn is_wrapped(&self) -> bool {
        matches!(self, Document::Wrapped(_))
    }

    /// Undo normalization
    #[must_use]
    pub fn into_value(self) -> Value {
        match self {
            Document::Object(map) => Value::Object(map),
            Document::Wrapped(value) => value,
        }
    }
}

impl From<Value> for Document {
    fn from(value: Value) -> Self {
        Document::normalize(value)
    }
}

impl<'a> DocumentRef<'a> {
    /// Normalize a borrowed value without copying it
    #[must_use]
    pub fn normalize(value: &'a Value) -> Self {
        log_root_kind(value.kind());
        match value {
            Value::Object(map) => DocumentRef::Object(map),
            other => DocumentRef::Wrapped(other),
        }
    }

    #[must_use]
    pub fn is_wrapped(self) -> bool {
        matches!(self, DocumentRef::Wrapped(_))
    }

    /// Kind of the original top-level value
    #[must_use]
    pub fn root_kind(self) -> ValueKind {
        match self {
            DocumentRef::Object(_) => ValueKind::Object,
            DocumentRef::Wrapped(value) => value.kind(),
        }
    }
}

fn log_root_kind(kind: ValueKind) {
    if kind != ValueKind::Object {
        log::debug!("JSON data: wrapping top-level {kind} under synthetic root");
    }
}
