//! Entry point for gcl-switcher, which points Claude Code at either GLM
//! (z.ai) or native Claude by editing `~/.claude/settings.json`.
//!
//! This binary loads environment variables, sets up logging, parses CLI
//! arguments via [`cli`], and dispatches to the chosen subcommand.

mod cli;
mod config;
mod constants;
mod error;
mod format;
mod mode;
mod switcher;

use colored::Colorize;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Runs the gcl-switcher CLI.
///
/// Any error from a command is printed to stderr and the process exits 1.
fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = cli::parse();
    if let Err(err) = cli::run(cli) {
        eprintln!("{} {:#}", "error:".red().bold(), err);
        std::process::exit(1);
    }
}

/// Logs go to stderr at `warn` unless `RUST_LOG` says otherwise.
fn init_tracing() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
