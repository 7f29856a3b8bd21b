//! Lesson runner options.

/// What the lesson runner should do.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LessonConfig {
    /// Run only the drill with this name.
    pub only: Option<String>,
    /// Skip the banner and closing notes.
    pub quiet: bool,
}

impl LessonConfig {
    /// Runs every drill with the banner on.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_only(mut self, name: impl Into<String>) -> Self {
        self.only = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }
}
