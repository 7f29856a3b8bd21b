//! Command-line front end of the lesson.
//!
//! [`execute`] turns parsed [`Args`] into an [`Outcome`]: the lines to print
//! and whether the run succeeded. The `kata` binary only parses, prints and
//! maps the outcome to an exit code.

use clap::Parser;
use fp_common::KataError;
use tracing::{Level, error};

use crate::config::LessonConfig;
use crate::lesson::{COMPLETION, EXTRA_CREDIT, RULE, run_lesson};
use crate::namespace::Namespace;

#[derive(Parser, Debug)]
#[command(
    name = "kata",
    author,
    version,
    about = "Work through map, filter, reduce, compose and friends"
)]
pub struct Args {
    /// List every utility in the namespace and exit
    #[arg(long)]
    pub list: bool,

    /// Run only the drill with this name
    #[arg(long, value_name = "NAME")]
    pub only: Option<String>,

    /// Skip the banner and the extra credit notes
    #[arg(short, long)]
    pub quiet: bool,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    pub log_level: Level,
}

impl Args {
    /// Lesson options selected by the flags.
    #[must_use]
    pub fn lesson_config(&self) -> LessonConfig {
        let config = LessonConfig::new().with_quiet(self.quiet);
        match &self.only {
            Some(name) => config.with_only(name.clone()),
            None => config,
        }
    }
}

/// What a run printed and whether it succeeded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    pub success: bool,
    pub stdout: Vec<String>,
    pub stderr: Vec<String>,
}

impl Outcome {
    fn failed(mut self, line: String) -> Self {
        self.stderr.push(line);
        self.success = false;
        self
    }
}

/// Runs the command described by `args` against `namespace`.
pub fn execute(namespace: &Namespace, args: &Args) -> Outcome {
    let mut out = Outcome {
        success: true,
        ..Outcome::default()
    };

    if args.list {
        out.stdout = namespace
            .iter()
            .map(|entry| format!("{:<12} {}", entry.name, entry.summary))
            .collect();
        return out;
    }

    let config = args.lesson_config();

    // Unknown names are rejected before anything is printed.
    if let Some(name) = &config.only {
        if namespace.lookup(name).is_none() {
            let err = KataError::UnknownDrill { name: name.clone() };
            error!(error = %err, "could not start the lesson");
            return out.failed(err.to_string());
        }
    }

    if !config.quiet {
        out.stdout.push(RULE.to_string());
    }

    let report = match run_lesson(namespace, &config) {
        Ok(report) => report,
        Err(err) => {
            error!(error = %err, "could not start the lesson");
            return out.failed(err.to_string());
        }
    };

    for name in &report.passed {
        out.stdout.push(format!("  ok  {name}"));
    }

    if let Some(failure) = &report.failure {
        out.stdout
            .push(format!("  FAIL {}: {}", failure.drill, failure.error));
        out.success = false;
        return out;
    }

    if !config.quiet {
        out.stdout.push(format!("{COMPLETION}\n"));
        for note in EXTRA_CREDIT {
            out.stdout.push(format!(" * {note}"));
        }
        out.stdout.push(String::new());
        out.stdout.push(RULE.to_string());
    }
    out
}
