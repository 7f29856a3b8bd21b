//! # Namespace
//!
//! The export table of the kata: every utility registered under its name,
//! with a one-line summary and the drill that exercises it.
//!
//! A `Namespace` is immutable. [`Namespace::define`] returns a new table and
//! leaves the original alone; structural sharing in `im` keeps that cheap.
//! Entries keep the order they were first defined in, which is the order the
//! lesson runs them.
//!
//! ## Example
//!
//! ```
//! use fp_kata::namespace::Namespace;
//!
//! let m = Namespace::standard();
//! assert_eq!(m.names().first(), Some(&"say"));
//! assert!(m.lookup("compose").is_some());
//! assert!(m.lookup("zip").is_none());
//! ```

use im::{HashMap as ImHashMap, Vector};

use fp_common::Result;

use crate::lesson::drills;

/// A drill: runs the checks for one utility.
pub type Drill = fn() -> Result<()>;

/// One registered utility.
#[derive(Debug, Clone, Copy)]
pub struct Entry {
    pub name: &'static str,
    pub summary: &'static str,
    pub drill: Drill,
}

/// Immutable name-to-entry table.
#[derive(Debug, Clone, Default)]
pub struct Namespace {
    entries: ImHashMap<&'static str, Entry>,
    order: Vector<&'static str>,
}

impl Namespace {
    /// Creates an empty namespace.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every utility of the library, in lesson order.
    #[must_use]
    pub fn standard() -> Self {
        Self::new()
            .define("say", "returns a function that returns the given string", drills::say)
            .define("identity", "returns its argument unchanged", drills::identity)
            .define("each", "calls a function on every element, in order", drills::each)
            .define("map", "transforms every element into a new sequence", drills::map)
            .define("filter", "keeps the elements matching a predicate", drills::filter)
            .define("reduce", "folds a sequence left to right", drills::reduce)
            .define("prop_eq", "tests one property of a record for equality", drills::prop_eq)
            .define("curry2", "turns f(a, b) into f(a)(b)", drills::curry2)
            .define("compose", "chains functions right to left", drills::compose)
            .define("complement", "negates a predicate", drills::complement)
            .define("reject", "drops the elements matching a predicate", drills::reject)
    }

    /// Returns a new namespace with `name` bound to the given entry.
    ///
    /// Redefining a name replaces its entry but keeps its position.
    #[must_use]
    pub fn define(&self, name: &'static str, summary: &'static str, drill: Drill) -> Self {
        let mut order = self.order.clone();
        if !self.entries.contains_key(name) {
            order.push_back(name);
        }
        Self {
            entries: self.entries.update(
                name,
                Entry {
                    name,
                    summary,
                    drill,
                },
            ),
            order,
        }
    }

    /// Looks up an entry by name.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&Entry> {
        self.entries.get(name)
    }

    /// Names in definition order.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.order.iter().copied().collect()
    }

    /// Entries in definition order.
    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.order.iter().filter_map(|name| self.entries.get(name))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fp_common::{KataError, check};

    fn passing() -> Result<()> {
        Ok(())
    }

    fn failing() -> Result<()> {
        check(false, "always fails")
    }

    #[test]
    fn test_standard_order() {
        let m = Namespace::standard();
        assert_eq!(
            m.names(),
            vec![
                "say",
                "identity",
                "each",
                "map",
                "filter",
                "reduce",
                "prop_eq",
                "curry2",
                "compose",
                "complement",
                "reject",
            ]
        );
        assert_eq!(m.len(), 11);
        assert_eq!(m.iter().count(), 11);
    }

    #[test]
    fn test_define_is_functional() {
        let empty = Namespace::new();
        let one = empty.define("ok", "passes", passing);
        assert!(empty.is_empty());
        assert_eq!(one.len(), 1);
        assert!(one.lookup("ok").is_some());
        assert!(empty.lookup("ok").is_none());
    }

    #[test]
    fn test_redefine_keeps_position() {
        let m = Namespace::new()
            .define("a", "first", passing)
            .define("b", "second", passing)
            .define("a", "replaced", failing);
        assert_eq!(m.names(), vec!["a", "b"]);

        let a = m.lookup("a").map(|entry| (entry.summary, (entry.drill)()));
        assert_eq!(
            a,
            Some((
                "replaced",
                Err(KataError::AssertionFailed {
                    message: "always fails".to_string()
                })
            ))
        );
    }
}
