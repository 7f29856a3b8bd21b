//! Identity and Closures
//!
//! Before anything else: functions can return other functions, and the
//! returned function keeps whatever it captured alive after its maker returns.

/// Returns its argument unchanged.
///
/// Moves owned values through untouched; given a reference it hands back the
/// very same reference, not a copy.
///
/// # Examples
/// ```
/// use fp_kata::closures::identity;
/// assert_eq!(identity(1), 1);
///
/// let jon = String::from("Jon");
/// assert!(std::ptr::eq(identity(&jon), &jon));
/// ```
#[inline]
pub fn identity<T>(x: T) -> T {
    x
}

/// Returns a function that always produces `value`.
///
/// # Examples
/// ```
/// use fp_kata::closures::always;
/// let zero = always(0);
/// assert_eq!(zero(), 0);
/// assert_eq!(zero(), 0);
/// ```
pub fn always<T: Clone>(value: T) -> impl Fn() -> T {
    move || value.clone()
}

/// Returns a zero-argument function that returns `string`.
///
/// # Examples
/// ```
/// use fp_kata::closures::say;
/// let say_hello = say("hello");
/// assert_eq!(say_hello(), "hello");
/// ```
pub fn say(string: impl Into<String>) -> impl Fn() -> String {
    always(string.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_edge_values() {
        assert_eq!(identity(0), 0);
        assert_eq!(identity(""), "");
        assert_eq!(identity(None::<i32>), None);
        assert_eq!(identity(vec![1, 2]), vec![1, 2]);
    }

    #[test]
    fn test_identity_returns_same_reference() {
        let people = vec!["Jon", "Sansa"];
        let same = identity(&people);
        assert!(std::ptr::eq(same, &people));
    }

    #[test]
    fn test_say_outlives_its_argument() {
        let say_hello = {
            let greeting = String::from("hello");
            say(greeting)
        };
        assert_eq!(say_hello(), "hello");
        assert_eq!(say_hello(), "hello");
    }

    #[test]
    fn test_always_clones_each_call() {
        let letters = always(vec!['h', 'i']);
        let mut first = letters();
        first.push('!');
        assert_eq!(letters(), vec!['h', 'i']);
    }
}
