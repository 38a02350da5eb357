// Allow common clippy pedantic lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::must_use_candidate)]

//! pagewindow CLI
//!
//! Command-line interface for computing and rendering page windows

use clap::Parser;
use pagewindow::cli::{Cli, Runner};

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays machine-readable
    let level: tracing::Level = cli.log_level().into();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    let runner = Runner::new(cli);

    if let Err(e) = runner.run() {
        eprintln!("Error: {e}");
        std::process::exit(if e.is_config_error() { 2 } else { 1 });
    }
}
