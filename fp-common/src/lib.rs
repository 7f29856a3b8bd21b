//! # fp-common
//!
//! Building blocks shared by the functional kata.
//!
//! ## Modules
//!
//! - [`error`]: the [`KataError`] type every check and drill reports through
//! - [`harness`]: `check` / `check_eq`, a tiny assertion library of our own
//! - [`props`]: keyed lookup on records, so predicates can ask for `record[key]`
//!
//! Nothing here panics. A failed check is an ordinary `Err` that callers
//! propagate with `?`, which lets a lesson stop at the first broken drill and
//! report it instead of aborting the process.

pub mod error;
pub mod harness;
pub mod props;

pub use error::{KataError, Result};
pub use harness::{check, check_eq};
pub use props::Props;
