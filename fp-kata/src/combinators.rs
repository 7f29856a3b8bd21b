//! # Function Combinators
//!
//! Functions that take functions and hand back new ones.
//!
//! - [`compose`] / [`compose!`](crate::compose): right-to-left composition
//! - [`compose_all`]: the same over a runtime list of boxed steps
//! - [`tupled`]: lets a binary function sit at the right end of a pipeline
//! - [`curry2`]: `f(a, b)` into `f(a)(b)`
//! - [`complement`] and [`reject`]: negated predicates and the filter they drive
//!
//! Only the rightmost function of a pipeline sees the caller's arguments.
//! Every function to its left is unary and receives the previous result, so a
//! pipeline over several arguments takes them as one tuple.

use std::rc::Rc;

use crate::traversal::{filter, reduce};

/// Composes two functions right to left: `compose(f, g)(x) == f(g(x))`.
///
/// # Examples
/// ```
/// use fp_kata::combinators::compose;
/// let inc_then_double = compose(|x: i32| x * 2, |x: i32| x + 1);
/// assert_eq!(inc_then_double(3), 8);
/// ```
pub fn compose<A, B, C, F, G>(outer: F, inner: G) -> impl Fn(A) -> C
where
    G: Fn(A) -> B,
    F: Fn(B) -> C,
{
    move |x: A| outer(inner(x))
}

/// Composes any number of functions right to left.
///
/// `compose!(f, g, h)(x) == f(g(h(x)))`. A single function is returned as is.
///
/// # Examples
/// ```
/// use fp_kata::compose;
/// fn double(x: i32) -> i32 { x * 2 }
///
/// let double_thrice = compose!(double, double, double);
/// assert_eq!(double_thrice(3), 24);
/// ```
#[macro_export]
macro_rules! compose {
    ($f:expr $(,)?) => {
        $f
    };
    ($f:expr, $($rest:expr),+ $(,)?) => {
        $crate::combinators::compose($f, $crate::compose!($($rest),+))
    };
}

/// One step of a runtime pipeline.
pub type Step<'a, T> = Box<dyn Fn(T) -> T + 'a>;

/// Composes a runtime list of steps right to left.
///
/// The last step runs first. An empty pipeline returns its input.
///
/// # Examples
/// ```
/// use fp_kata::combinators::{compose_all, Step};
/// let steps: Vec<Step<'_, i32>> = vec![Box::new(|x: i32| x - 1), Box::new(|x: i32| x * 10)];
/// assert_eq!(compose_all(steps)(2), 19);
/// ```
pub fn compose_all<'a, T: 'a>(mut steps: Vec<Step<'a, T>>) -> impl Fn(T) -> T + 'a {
    steps.reverse();
    move |x: T| reduce(|acc, step: &Step<'a, T>| step(acc), x, &steps)
}

/// Adapts a binary function to take its arguments as one pair.
///
/// # Examples
/// ```
/// use fp_kata::combinators::{compose, tupled};
/// let add = |a: i32, b: i32| a + b;
/// let add_then_negate = compose(|x: i32| -x, tupled(add));
/// assert_eq!(add_then_negate((2, 3)), -5);
/// ```
pub fn tupled<A, B, C, F>(f: F) -> impl Fn((A, B)) -> C
where
    F: Fn(A, B) -> C,
{
    move |(a, b): (A, B)| f(a, b)
}

/// The second half of a curried binary function.
pub type Curried<B, C> = Box<dyn Fn(B) -> C>;

/// Curries a binary function: `curry2(f)(a)(b) == f(a, b)`.
///
/// Each call with a first argument returns a fresh function that remembers it.
///
/// # Examples
/// ```
/// use fp_kata::combinators::curry2;
/// let curried_add = curry2(|a: i32, b: i32| a + b);
/// let add2 = curried_add(2);
/// assert_eq!(add2(3), 5);
/// assert_eq!(add2(40), 42);
/// ```
pub fn curry2<A, B, C, F>(f: F) -> impl Fn(A) -> Curried<B, C>
where
    F: Fn(A, B) -> C + 'static,
    A: Clone + 'static,
    B: 'static,
    C: 'static,
{
    let f = Rc::new(f);
    move |a: A| -> Curried<B, C> {
        let f = Rc::clone(&f);
        Box::new(move |b: B| (*f)(a.clone(), b))
    }
}

/// Negates a predicate.
///
/// # Examples
/// ```
/// use fp_kata::combinators::complement;
/// let is_even = |x: &i32| x % 2 == 0;
/// let is_odd = complement(is_even);
/// assert!(!is_odd(&2));
/// assert!(is_odd(&3));
/// ```
pub fn complement<T, P>(predicate: P) -> impl Fn(&T) -> bool
where
    T: ?Sized,
    P: Fn(&T) -> bool,
{
    move |x: &T| !predicate(x)
}

/// Keeps the elements that do *not* satisfy `predicate`, in order.
///
/// Always `filter(complement(predicate), items)`: together with [`filter`]
/// it partitions `items`.
///
/// # Examples
/// ```
/// use fp_kata::combinators::reject;
/// assert_eq!(reject(|x: &i32| x % 2 != 0, &[1, 2]), vec![2]);
/// ```
pub fn reject<T, P>(predicate: P, items: &[T]) -> Vec<T>
where
    T: Clone,
    P: Fn(&T) -> bool,
{
    filter(complement(predicate), items)
}
