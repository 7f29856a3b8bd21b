//! # The Lesson
//!
//! Works through the library top to bottom, one drill per utility, and stops
//! at the first drill that fails. There is no retry: a failure means the
//! utility is wrong, and the report says which one and why.
//!
//! ## Example
//!
//! ```
//! use fp_kata::config::LessonConfig;
//! use fp_kata::lesson::run_lesson;
//! use fp_kata::namespace::Namespace;
//!
//! let report = run_lesson(&Namespace::standard(), &LessonConfig::new()).unwrap();
//! assert!(report.is_complete());
//! assert_eq!(report.passed.len(), 11);
//! ```

use fp_common::{KataError, Result};
use tracing::{error, info};

use crate::config::LessonConfig;
use crate::namespace::{Entry, Namespace};

/// Printed above and below the lesson.
pub const RULE: &str = "*--------------------------------------------*";

/// Printed once every drill has passed.
pub const COMPLETION: &str = "You've completed the lesson! Now on to extra credit...";

/// Questions to take away after finishing.
pub const EXTRA_CREDIT: [&str; 3] = [
    "Refactor?",
    "Are you sure you're not mutating anything?",
    "Compare your implementation to those in lodash or preferably ramda.",
];

/// The drill that broke the lesson.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrillFailure {
    pub drill: &'static str,
    pub error: KataError,
}

/// Outcome of a lesson run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LessonReport {
    /// Drills that passed, in the order they ran.
    pub passed: Vec<&'static str>,
    /// The first failing drill, if any. Nothing after it ran.
    pub failure: Option<DrillFailure>,
}

impl LessonReport {
    /// True when every drill that was asked for passed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failure.is_none()
    }
}

/// Runs the drills selected by `config`, in namespace order.
///
/// Asking for a drill the namespace does not define is an error; a drill
/// failing is not, it is recorded in the report.
pub fn run_lesson(namespace: &Namespace, config: &LessonConfig) -> Result<LessonReport> {
    let selected: Vec<&Entry> = match &config.only {
        Some(name) => vec![find(namespace, name)?],
        None => namespace.iter().collect(),
    };

    let mut report = LessonReport::default();
    for entry in selected {
        info!(drill = entry.name, "running drill");
        match (entry.drill)() {
            Ok(()) => {
                info!(drill = entry.name, "drill passed");
                report.passed.push(entry.name);
            }
            Err(err) => {
                error!(drill = entry.name, kind = err.kind(), error = %err, "drill failed");
                report.failure = Some(DrillFailure {
                    drill: entry.name,
                    error: err,
                });
                break;
            }
        }
    }
    Ok(report)
}

/// Runs a single drill by name.
pub fn run_drill(namespace: &Namespace, name: &str) -> Result<()> {
    (find(namespace, name)?.drill)()
}

fn find<'a>(namespace: &'a Namespace, name: &str) -> Result<&'a Entry> {
    namespace.lookup(name).ok_or_else(|| KataError::UnknownDrill {
        name: name.to_string(),
    })
}

/// One drill per utility, replaying the classic kata checks.
pub mod drills {
    use fp_common::{Result, check, check_eq};
    use serde_json::{Value, json};

    use crate::{closures, combinators, predicates, traversal};

    fn double(x: i32) -> i32 {
        x * 2
    }

    fn add(a: i32, b: i32) -> i32 {
        a + b
    }

    fn is_even(x: &i32) -> bool {
        x % 2 == 0
    }

    pub fn say() -> Result<()> {
        let say_hello = closures::say("hello");
        check_eq(say_hello(), "hello")
    }

    pub fn identity() -> Result<()> {
        check_eq(closures::identity(1), 1)
    }

    pub fn each() -> Result<()> {
        let letters = ['h', 'e', 'l', 'l', 'o'];
        let mut word = String::new();
        traversal::each(|letter| word.push(*letter), &letters);
        check_eq(word, "hello")
    }

    pub fn map() -> Result<()> {
        let numbers = vec![1, 2, 3, 4];
        let doubled = traversal::map(|x| double(*x), &numbers);
        check_eq(doubled, [2, 4, 6, 8])?;
        check_eq(numbers, [1, 2, 3, 4])
    }

    pub fn filter() -> Result<()> {
        check_eq(traversal::filter(is_even, &[1, 2, 3, 4]), [2, 4])
    }

    pub fn reduce() -> Result<()> {
        let total = traversal::reduce(|acc, x| add(acc, *x), 0, &[1, 2, 3, 4]);
        check_eq(total, 10)
    }

    pub fn prop_eq() -> Result<()> {
        let people = vec![json!({ "firstName": "Jon" }), json!({ "firstName": "Sansa" })];
        let is_jon = predicates::prop_eq::<Value, _>("firstName", json!("Jon"));
        let jons = traversal::filter(is_jon, &people);
        check_eq(jons.len(), 1)
    }

    pub fn curry2() -> Result<()> {
        let curried_add = combinators::curry2(add);
        let add2 = curried_add(2);
        check_eq(add2(3), 5)
    }

    pub fn compose() -> Result<()> {
        let double_thrice = crate::compose!(double, double, double);
        check_eq(double_thrice(3), 24)
    }

    pub fn complement() -> Result<()> {
        let is_odd = combinators::complement(is_even);
        check(!is_odd(&2), "2 is not odd")?;
        check(is_odd(&3), "3 is odd")
    }

    pub fn reject() -> Result<()> {
        let is_odd = combinators::complement(is_even);
        check_eq(combinators::reject(is_odd, &[1, 2]), [2])
    }
}
