//! Path resolution over a normalized document

use super::{Path, PathSegment};
use crate::config::PathMode;
use crate::document::DocumentRef;
use crate::value::Value;

/// Position of the walk: the document root or some value inside it
#[derive(Debug, Clone, Copy)]
enum Cursor<'a> {
    Root(DocumentRef<'a>),
    Value(&'a Value),
}

impl<'a> Cursor<'a> {
    fn member(self, segment: &PathSegment) -> Option<&'a Value> {
        match (self, segment) {
            (Cursor::Root(DocumentRef::Wrapped(value)), PathSegment::Wrapped) => Some(value),
            (Cursor::Root(DocumentRef::Object(map)), PathSegment::Text(key)) => map.get(key),
            (Cursor::Value(Value::Object(map)), PathSegment::Text(key)) => map.get(key),
            _ => None,
        }
    }

    fn element(self, index: usize) -> Option<&'a Value> {
        match self {
            Cursor::Value(Value::Array(items)) => items.get(index),
            _ => None,
        }
    }
}

/// Resolve `path` against `doc`
///
/// An empty path never resolves. For a wrapped document the wrapper
/// segment is added in front of the caller's segments.
#[must_use]
pub fn resolve<'a>(doc: DocumentRef<'a>, path: &Path, mode: PathMode) -> Option<&'a Value> {
    if path.is_empty() {
        return None;
    }
    let path = path.for_document(doc);
    match mode {
        PathMode::Strict => resolve_strict(doc, path.segments()),
        PathMode::Lenient => resolve_lenient(doc, path.segments()),
    }
}

fn resolve_strict<'a>(doc: DocumentRef<'a>, segments: &[PathSegment]) -> Option<&'a Value> {
    let mut cursor = Cursor::Root(doc);
    let mut resolved = None;
    for segment in segments {
        let next = match cursor {
            Cursor::Value(Value::Array(_)) => segment.index().and_then(|i| cursor.element(i)),
            _ => cursor.member(segment),
        }?;
        cursor = Cursor::Value(next);
        resolved = Some(next);
    }
    resolved
}

// A miss clears the tentative result but keeps the cursor, so a later
// segment may still match against the stale position.
fn resolve_lenient<'a>(doc: DocumentRef<'a>, segments: &[PathSegment]) -> Option<&'a Value> {
    let mut cursor = Cursor::Root(doc);
    let mut tentative = None;
    for segment in segments {
        tentative = None;
        if let Some(next) = cursor.member(segment) {
            tentative = Some(next);
            cursor = Cursor::Value(next);
        }
        if let Some(next) = segment.index().and_then(|i| cursor.element(i)) {
            tentative = Some(next);
            cursor = Cursor::Value(next);
        }
    }
    tentative
}
