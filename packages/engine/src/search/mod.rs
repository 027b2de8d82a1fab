//! Recursive key search
//!
//! Collects every value bound to a key anywhere in a document, depth first.
//! An optional gate key restricts matches to objects that sit somewhere
//! below a member with that name.
//!
//! All traversal state lives in a [`SearchContext`] created per call, so
//! searches are re-entrant and need no locking.

pub mod gate;

use crate::document::DocumentRef;
use crate::value::{Object, Value};

pub use gate::GateSet;

/// Find every value bound to `key` in `doc`
///
/// With `under` set (and non-empty), a match only counts when a strict
/// ancestor of the object holding it is a member named `under`. Results are
/// in pre-order: an object's own match comes before anything found below it.
/// The result is always a vector, empty when nothing matched.
#[must_use]
pub fn search<'a>(doc: DocumentRef<'a>, key: &str, under: Option<&str>) -> Vec<&'a Value> {
    let mut context = SearchContext::new(key, under.filter(|gate| !gate.is_empty()));
    match doc {
        DocumentRef::Object(map) => context.visit_object(map),
        // the wrapper contributes no key of its own
        DocumentRef::Wrapped(value) => context.visit_value(value),
    }
    context.into_matches()
}

/// Per-call traversal state
#[derive(Debug)]
pub struct SearchContext<'a, 'q> {
    key: &'q str,
    gate: Option<&'q str>,
    ancestors: GateSet<'a>,
    matches: Vec<&'a Value>,
}

impl<'a, 'q> SearchContext<'a, 'q> {
    #[must_use]
    pub fn new(key: &'q str, gate: Option<&'q str>) -> Self {
        Self {
            key,
            gate,
            ancestors: GateSet::new(),
            matches: Vec::new(),
        }
    }

    pub fn visit_object(&mut self, object: &'a Object) {
        if let Some(found) = object.get(self.key) {
            if self.gate_open() {
                self.matches.push(found);
            }
        }

        for (name, member) in object {
            self.ancestors.push(name);
            self.visit_value(member);
            self.ancestors.pop(name);
        }
    }

    /// Descend into containers; scalars hold no keyed structure
    pub fn visit_value(&mut self, value: &'a Value) {
        match value {
            Value::Object(object) => self.visit_object(object),
            Value::Array(items) => {
                for item in items {
                    self.visit_value(item);
                }
            }
            Value::String(_) | Value::Number(_) | Value::Bool(_) | Value::Null => {}
        }
    }

    fn gate_open(&self) -> bool {
        self.gate.is_none_or(|gate| self.ancestors.contains(gate))
    }

    #[must_use]
    pub fn into_matches(self) -> Vec<&'a Value> {
        self.matches
    }
}
