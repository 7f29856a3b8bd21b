//! Runs the functional programming lesson.
//!
//! Usage: cargo run --bin kata -- [--list] [--only NAME] [--quiet]

use std::process::ExitCode;

use clap::Parser;
use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use fp_kata::cli::{Args, execute};
use fp_kata::namespace::Namespace;

fn init_tracing(level: Level) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_string().to_lowercase()));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .compact()
        .with_target(false);

    // A subscriber already installed (e.g. by a test harness) is fine.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.log_level);

    let outcome = execute(&Namespace::standard(), &args);
    for line in &outcome.stdout {
        println!("{line}");
    }
    for line in &outcome.stderr {
        eprintln!("{line}");
    }

    if outcome.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
