//! Explicit lookup paths
//!
//! A path is an ordered list of segments. Caller segments are plain text:
//! either an object key or a bracketed array index such as `[2]`. The
//! synthetic [`PathSegment::Wrapped`] segment addresses the value held by a
//! wrapped document and is only ever added by the engine.

pub mod resolver;

use std::fmt;

use crate::document::DocumentRef;

pub use resolver::resolve;

/// One unit of an explicit path
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// Addresses the top-level value of a wrapped document
    Wrapped,
    /// Caller-supplied key or index text, kept verbatim
    Text(String),
}

impl PathSegment {
    pub fn text(text: impl Into<String>) -> Self {
        PathSegment::Text(text.into())
    }

    /// The segment as a literal object key
    #[must_use]
    pub fn as_key(&self) -> Option<&str> {
        match self {
            PathSegment::Text(text) => Some(text),
            PathSegment::Wrapped => None,
        }
    }

    /// The segment as an array index
    ///
    /// One leading `[` and one trailing `]` are stripped; the rest must be
    /// base-10 digits.
    ///
    /// ```
    /// use spjson_engine::path::PathSegment;
    ///
    /// assert_eq!(PathSegment::text("[2]").index(), Some(2));
    /// assert_eq!(PathSegment::text("7").index(), Some(7));
    /// assert_eq!(PathSegment::text("[-1]").index(), None);
    /// assert_eq!(PathSegment::text("name").index(), None);
    /// ```
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        self.as_key().and_then(parse_index)
    }
}

fn parse_index(text: &str) -> Option<usize> {
    let inner = text.strip_prefix('[').unwrap_or(text);
    let inner = inner.strip_suffix(']').unwrap_or(inner);
    if inner.is_empty() || !inner.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    inner.parse().ok()
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Wrapped => f.write_str("<root>"),
            PathSegment::Text(text) => f.write_str(text),
        }
    }
}

/// An ordered sequence of path segments
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Path {
    segments: Vec<PathSegment>,
}

impl Path {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a path from caller text segments
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        segments.into_iter().collect()
    }

    #[must_use]
    pub fn push(mut self, segment: impl Into<String>) -> Self {
        self.segments.push(PathSegment::text(segment));
        self
    }

    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The path as it must be walked over `doc`: prefixed with the wrapper
    /// segment when the document root was wrapped
    #[must_use]
    pub fn for_document(&self, doc: DocumentRef<'_>) -> Path {
        if !doc.is_wrapped() {
            return self.clone();
        }
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.push(PathSegment::Wrapped);
        segments.extend(self.segments.iter().cloned());
        Path { segments }
    }
}

impl<S: Into<String>> FromIterator<S> for Path {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Path {
            segments: iter.into_iter().map(PathSegment::text).collect(),
        }
    }
}

/// Segments joined with `" > "`
impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(" > ")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}
