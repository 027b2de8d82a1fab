//! Ancestor-gate set

use hashbrown::HashMap;

/// Keys on the path from the document root to the node being visited
///
/// Counted, so a key that appears at several depths of the current branch
/// stays present until its outermost occurrence is popped.
#[derive(Debug, Default)]
pub struct GateSet<'a> {
    counts: HashMap<&'a str, usize>,
}

impl<'a> GateSet<'a> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: &'a str) {
        *self.counts.entry(key).or_insert(0) += 1;
    }

    pub fn pop(&mut self, key: &str) {
        if let Some(count) = self.counts.get_mut(key) {
            *count -= 1;
            if *count == 0 {
                self.counts.remove(key);
            }
        }
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.counts.contains_key(key)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_repeat_survives_inner_pop() {
        let mut gates = GateSet::new();
        gates.push("a");
        gates.push("b");
        gates.push("a");

        gates.pop("a");
        assert!(gates.contains("a"));

        gates.pop("b");
        gates.pop("a");
        assert!(!gates.contains("a"));
        assert!(gates.is_empty());
    }

    #[test]
    fn test_pop_of_absent_key_is_ignored() {
        let mut gates = GateSet::new();
        gates.pop("never");
        assert!(gates.is_empty());
    }
}
