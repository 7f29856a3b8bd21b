//! Errors reported by the harness and the lesson runner.

/// Result alias used across the kata.
pub type Result<T> = std::result::Result<T, KataError>;

/// Everything that can go wrong while working through the kata.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KataError {
    /// A boolean check did not hold. Carries the caller's message as-is.
    #[error("{message}")]
    AssertionFailed { message: String },

    /// Two values were expected to be equal. Both sides are rendered with `Debug`.
    #[error("Expected {actual} to eq {expected}")]
    NotEqual { actual: String, expected: String },

    /// The runner was asked for a drill the namespace does not define.
    #[error("no drill named `{name}`")]
    UnknownDrill { name: String },
}

impl KataError {
    /// Name of the variant, used as a structured logging field.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            KataError::AssertionFailed { .. } => "assertion_failed",
            KataError::NotEqual { .. } => "not_equal",
            KataError::UnknownDrill { .. } => "unknown_drill",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_equal_message() {
        let err = KataError::NotEqual {
            actual: "3".to_string(),
            expected: "4".to_string(),
        };
        assert_eq!(err.to_string(), "Expected 3 to eq 4");
        assert_eq!(err.kind(), "not_equal");
    }

    #[test]
    fn test_assertion_message_is_verbatim() {
        let err = KataError::AssertionFailed {
            message: "say should return a function".to_string(),
        };
        assert_eq!(err.to_string(), "say should return a function");
    }

    #[test]
    fn test_unknown_drill_message() {
        let err = KataError::UnknownDrill {
            name: "zip".to_string(),
        };
        assert_eq!(err.to_string(), "no drill named `zip`");
    }
}
