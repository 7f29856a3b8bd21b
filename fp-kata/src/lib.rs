//! # fp-kata
//!
//! A small functional utilities library in the spirit of lodash and ramda,
//! built one primitive at a time, and the lesson that drills each of them.
//!
//! - [`closures`]: `identity`, `say`, `always`
//! - [`traversal`]: `each`, `map`, `filter`, `reduce`
//! - [`combinators`]: `compose` (and [`compose!`]), `curry2`, `complement`, `reject`
//! - [`predicates`]: `prop_eq`, `has_prop`
//! - [`namespace`]: the export table naming every utility
//! - [`lesson`]: runs the drills in order and reports the first failure
//! - [`cli`]: the `kata` command's flags and what a run prints
//!
//! `each` is the only primitive that exists for its side effects. Everything
//! else leaves its input alone and returns a new value.

pub mod cli;
pub mod closures;
pub mod combinators;
pub mod config;
pub mod lesson;
pub mod namespace;
pub mod predicates;
pub mod traversal;


pub use closures::{always, identity, say};
pub use combinators::{complement, compose, compose_all, curry2, reject, tupled};
pub use config::LessonConfig;
pub use namespace::Namespace;
pub use predicates::{has_prop, prop_eq};
pub use traversal::{each, filter, map, reduce};
