//! # Assertion Harness
//!
//! No need for a testing library to check our work: two primitives are enough.
//!
//! - [`check`] fails with the given message when a condition is false.
//! - [`check_eq`] fails with `Expected {actual} to eq {expected}` when two
//!   values differ.
//!
//! Both return [`Result`] instead of panicking so a lesson can stop at the
//! first failure and report it.
//!
//! ## Example
//!
//! ```
//! use fp_common::harness::{check, check_eq};
//!
//! check(1 + 1 == 2, "arithmetic still works").unwrap();
//! check_eq(vec![2, 4], [2, 4]).unwrap();
//!
//! let err = check_eq(3, 4).unwrap_err();
//! assert_eq!(err.to_string(), "Expected 3 to eq 4");
//! ```

use std::fmt::Debug;

use tracing::debug;

use crate::error::{KataError, Result};

/// Fails with `message` unless `condition` holds.
pub fn check(condition: bool, message: impl Into<String>) -> Result<()> {
    if condition {
        return Ok(());
    }
    let message = message.into();
    debug!(%message, "check failed");
    Err(KataError::AssertionFailed { message })
}

/// Fails unless `actual == expected`.
///
/// The two sides may be different types as long as they compare, so a
/// `Vec<i32>` can be checked against an array literal and a `String`
/// against a `&str`.
///
/// Both sides are rendered with `Debug` in the failure message, so strings
/// appear quoted: `Expected "hello" to eq "hell"`.
pub fn check_eq<A, E>(actual: A, expected: E) -> Result<()>
where
    A: PartialEq<E> + Debug,
    E: Debug,
{
    if actual == expected {
        return Ok(());
    }
    let actual = format!("{actual:?}");
    let expected = format!("{expected:?}");
    debug!(%actual, %expected, "check_eq failed");
    Err(KataError::NotEqual { actual, expected })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_passes_and_fails() {
        assert_eq!(check(true, "unused"), Ok(()));
        assert_eq!(
            check(false, "boom"),
            Err(KataError::AssertionFailed {
                message: "boom".to_string()
            })
        );
    }

    #[test]
    fn test_check_eq_mixed_types() {
        assert!(check_eq(String::from("hello"), "hello").is_ok());
        assert!(check_eq(vec![1, 2, 3], [1, 2, 3]).is_ok());
    }

    #[test]
    fn test_check_eq_reports_both_sides() {
        let err = check_eq(vec![1], [1, 2]).unwrap_err();
        assert_eq!(
            err,
            KataError::NotEqual {
                actual: "[1]".to_string(),
                expected: "[1, 2]".to_string(),
            }
        );
        assert_eq!(err.to_string(), "Expected [1] to eq [1, 2]");
    }

    #[test]
    fn test_check_eq_quotes_strings() {
        let err = check_eq("hello", "hell").unwrap_err();
        assert_eq!(err.to_string(), r#"Expected "hello" to eq "hell""#);
    }

    #[test]
    fn test_check_eq_is_strict() {
        // No coercion between representations: a string is never a number.
        assert!(check_eq("1", "1 ").is_err());
        assert!(check_eq(1.0_f64, 1.0_f64).is_ok());
    }
}
