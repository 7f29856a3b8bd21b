//! Predicate helpers over keyed records.
//!
//! Records are anything implementing [`Props`]. The record type is a generic
//! parameter of the returned predicate, so name it where the compiler cannot
//! see it yet (`prop_eq::<Value, _>(...)`).

use std::borrow::Borrow;

use fp_common::Props;

/// Predicate: the record stores exactly `value` under `key`.
///
/// Comparison is the value type's own `PartialEq`, with no coercion between
/// representations. A record missing `key` never matches.
///
/// # Examples
/// ```
/// use fp_kata::predicates::prop_eq;
/// use fp_kata::traversal::filter;
/// use serde_json::{json, Value};
///
/// let people = vec![json!({ "firstName": "Jon" }), json!({ "firstName": "Sansa" })];
/// let jons = filter(prop_eq::<Value, _>("firstName", json!("Jon")), &people);
/// assert_eq!(jons.len(), 1);
/// ```
pub fn prop_eq<R, K>(key: K, value: R::Value) -> impl Fn(&R) -> bool
where
    R: Props + ?Sized,
    K: Borrow<R::Key>,
{
    move |record: &R| record.prop(key.borrow()) == Some(&value)
}

/// Predicate: the record has some value under `key`.
///
/// `complement(has_prop(key))` matches records where the key is absent.
pub fn has_prop<R, K>(key: K) -> impl Fn(&R) -> bool
where
    R: Props + ?Sized,
    K: Borrow<R::Key>,
{
    move |record: &R| record.has_prop(key.borrow())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use serde_json::{Value, json};

    use super::*;
    use crate::combinators::{complement, reject};
    use crate::traversal::filter;

    fn people() -> Vec<Value> {
        vec![
            json!({ "firstName": "Jon" }),
            json!({ "firstName": "Sansa" }),
        ]
    }

    #[test]
    fn test_prop_eq_matches_and_misses() {
        let is_jon = prop_eq::<Value, _>("firstName", json!("Jon"));
        assert!(is_jon(&json!({ "firstName": "Jon" })));
        assert!(!is_jon(&json!({ "firstName": "Sansa" })));
    }

    #[test]
    fn test_prop_eq_in_filter() {
        let people = people();
        let jons = filter(prop_eq::<Value, _>("firstName", json!("Jon")), &people);
        assert_eq!(jons, vec![json!({ "firstName": "Jon" })]);
    }

    #[test]
    fn test_prop_eq_is_strict() {
        let is_one = prop_eq::<Value, _>("n", json!(1));
        assert!(is_one(&json!({ "n": 1 })));
        assert!(!is_one(&json!({ "n": "1" })));
        assert!(!is_one(&json!({ "n": true })));
    }

    #[test]
    fn test_absent_key_never_matches() {
        let is_null = prop_eq::<Value, _>("house", Value::Null);
        assert!(!is_null(&json!({ "firstName": "Jon" })));
        assert!(is_null(&json!({ "house": null })));
    }

    #[test]
    fn test_missing_key_via_complement() {
        let people = vec![
            json!({ "firstName": "Jon", "house": "Stark" }),
            json!({ "firstName": "Jon" }),
        ];
        let homeless = filter(complement(has_prop::<Value, _>("house")), &people);
        assert_eq!(homeless, vec![json!({ "firstName": "Jon" })]);
    }

    #[test]
    fn test_prop_eq_on_hash_maps() {
        let record = |age: u32| HashMap::from([("age".to_string(), age)]);
        let records = vec![record(13), record(20), record(13)];

        let thirteen = prop_eq::<HashMap<String, u32>, _>(String::from("age"), 13);
        assert_eq!(filter(&thirteen, &records).len(), 2);
        assert_eq!(reject(&thirteen, &records), vec![record(20)]);
    }
}
