//! # Keyed Records
//!
//! A [`Props`] value answers "what is stored under this key?", the Rust
//! counterpart of a dynamic `record[key]` lookup. Absent keys return `None`;
//! there is no "undefined" value that could compare equal to anything.
//!
//! Implementations are provided for JSON objects, the standard maps, and
//! `im::HashMap`, all keyed by `String` and looked up by `&str`.
//!
//! ## Example
//!
//! ```
//! use fp_common::Props;
//! use serde_json::json;
//!
//! let jon = json!({ "firstName": "Jon" });
//! assert_eq!(jon.prop("firstName"), Some(&json!("Jon")));
//! assert_eq!(jon.prop("lastName"), None);
//! assert!(!json!(42).has_prop("firstName"));
//! ```

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use serde_json::Value;

/// Keyed lookup on a record.
pub trait Props {
    /// Borrowed form of the key (`str` for string-keyed records).
    type Key: ?Sized;
    /// Stored value type, compared with `PartialEq` by predicates.
    type Value: PartialEq;

    /// Returns the value stored under `key`, if any.
    fn prop(&self, key: &Self::Key) -> Option<&Self::Value>;

    /// Returns true if `key` is present.
    fn has_prop(&self, key: &Self::Key) -> bool {
        self.prop(key).is_some()
    }
}

/// Only JSON objects have properties; every other JSON value has none.
impl Props for Value {
    type Key = str;
    type Value = Value;

    fn prop(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|fields| fields.get(key))
    }
}

impl<V: PartialEq, S: BuildHasher> Props for HashMap<String, V, S> {
    type Key = str;
    type Value = V;

    fn prop(&self, key: &str) -> Option<&V> {
        self.get(key)
    }
}

impl<V: PartialEq> Props for BTreeMap<String, V> {
    type Key = str;
    type Value = V;

    fn prop(&self, key: &str) -> Option<&V> {
        self.get(key)
    }
}

impl<V: PartialEq + Clone, S: BuildHasher> Props for im::HashMap<String, V, S> {
    type Key = str;
    type Value = V;

    fn prop(&self, key: &str) -> Option<&V> {
        self.get(key)
    }
}

impl<R: Props + ?Sized> Props for &R {
    type Key = R::Key;
    type Value = R::Value;

    fn prop(&self, key: &Self::Key) -> Option<&Self::Value> {
        (**self).prop(key)
    }
}
