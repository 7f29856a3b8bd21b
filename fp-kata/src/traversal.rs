//! # Traversal Primitives
//!
//! `each`, `map`, `filter` and `reduce` over slices.
//!
//! `each` is the one primitive allowed side effects: its callback is `FnMut`
//! and may push, print or count. `map` and `filter` are built on top of it
//! but never touch their input; each returns a freshly allocated `Vec`.
//!
//! All four visit elements exactly once, index 0 first.
//!
//! ## Example
//!
//! ```
//! use fp_kata::traversal::{each, filter, map, reduce};
//!
//! let numbers = [1, 2, 3, 4];
//! assert_eq!(map(|x| x * 2, &numbers), vec![2, 4, 6, 8]);
//! assert_eq!(filter(|x| x % 2 == 0, &numbers), vec![2, 4]);
//! assert_eq!(reduce(|acc, x| acc + x, 0, &numbers), 10);
//!
//! let mut word = String::new();
//! each(|c| word.push(*c), &['h', 'e', 'l', 'l', 'o']);
//! assert_eq!(word, "hello");
//! ```

/// Calls `f` on every element, in order, for its side effects.
pub fn each<T, F>(mut f: F, items: &[T])
where
    F: FnMut(&T),
{
    for item in items {
        f(item);
    }
}

/// Maps every element through `f` into a new vector of the same length.
pub fn map<T, U, F>(mut f: F, items: &[T]) -> Vec<U>
where
    F: FnMut(&T) -> U,
{
    let mut out = Vec::with_capacity(items.len());
    each(|item| out.push(f(item)), items);
    out
}

/// Keeps the elements satisfying `predicate`, preserving their order.
pub fn filter<T, P>(predicate: P, items: &[T]) -> Vec<T>
where
    T: Clone,
    P: Fn(&T) -> bool,
{
    let mut out = Vec::new();
    each(
        |item| {
            if predicate(item) {
                out.push(item.clone());
            }
        },
        items,
    );
    out
}

/// Left fold: `f(...f(f(initial, items[0]), items[1])..., items[n-1])`.
///
/// Returns `initial` untouched for an empty slice.
pub fn reduce<T, A, F>(f: F, initial: A, items: &[T]) -> A
where
    F: FnMut(A, &T) -> A,
{
    items.iter().fold(initial, f)
}
