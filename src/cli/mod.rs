//! Command-line interface definition and dispatch for gcl-switcher.
//!
//! Uses [`clap`] for argument parsing with derive macros. Handlers live in
//! [`crate::switcher`]; this module only parses arguments and prints.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use colored::Colorize;

use crate::config::Store;
use crate::constants::{APP_NAME, RESTART_HINT};
use crate::mode::Mode;
use crate::switcher::{self, NativeOutcome, StatusReport};

const AFTER_HELP: &str = "\
Quickstart:
  gcl-switcher set-key sk-xxxxxxx  # save key once
  gcl-switcher use glm             # activate GLM
  gcl-switcher use claude          # go back to native Claude

Config files:
  ~/.claude/settings.json          Claude Code settings (edited by this tool)
  ~/.gcl-switcher.json             Stores your z.ai API key";

/// Top-level CLI structure for gcl-switcher.
///
/// The subcommand is optional: running with no arguments prints help.
#[derive(Parser)]
#[command(
    name = "gcl-switcher",
    version,
    about = "Switch Claude Code between GLM (z.ai) and native Claude",
    long_about = None,
    after_help = AFTER_HELP
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
///
/// The `///` doc comments on variants double as `--help` text rendered by clap.
#[derive(Subcommand)]
pub enum Commands {
    /// Show active mode and settings
    Status,
    /// Switch to GLM (z.ai) or back to native Claude
    Use {
        #[arg(value_enum)]
        mode: Mode,
    },
    /// Save your z.ai API key
    SetKey {
        /// The z.ai API key
        #[arg(allow_hyphen_values = true)]
        key: String,
    },
}

/// Parses command-line arguments into a [`Cli`] struct.
///
/// Like [`clap::Parser::parse`] this exits on invalid input, but with status 1
/// rather than clap's 2. `--help` and `--version` exit 0.
pub fn parse() -> Cli {
    Cli::try_parse().unwrap_or_else(|err| {
        let code = if err.use_stderr() { 1 } else { 0 };
        err.print().ok();
        std::process::exit(code);
    })
}

/// Dispatches the parsed CLI command to its handler.
pub fn run(cli: Cli) -> Result<()> {
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    let store = Store::open()?;
    match command {
        Commands::Status => print_status(&switcher::status(&store)),
        Commands::Use { mode: Mode::Glm } => {
            switcher::use_glm(&store)?;
            println!("{} {}", format!("Switched to {}.", Mode::Glm).green(), RESTART_HINT);
        }
        Commands::Use { mode: Mode::Claude } => match switcher::use_claude(&store)? {
            NativeOutcome::Switched => {
                println!("{} {}", format!("Switched to {}.", Mode::Claude).green(), RESTART_HINT);
            }
            NativeOutcome::AlreadyNative => {
                println!("Already on {}. Nothing changed.", Mode::Claude);
            }
        },
        Commands::SetKey { key } => {
            let redacted = switcher::set_key(&store, &key)?;
            println!("{} {}", "API key saved:".green(), redacted);
        }
    }
    Ok(())
}

fn print_status(report: &StatusReport) {
    println!("{} {}", "Active mode:".bold(), report.mode.to_string().cyan());

    if let Some(glm) = &report.glm {
        let field = |value: &Option<String>| value.clone().unwrap_or_default();
        println!("  Base URL : {}", field(&glm.base_url));
        println!("  Opus     : {}", field(&glm.opus_model));
        println!("  Sonnet   : {}", field(&glm.sonnet_model));
        println!("  Haiku    : {}", field(&glm.haiku_model));
    }

    if let Some(key) = &report.redacted_key {
        println!("  API key  : {}", key);
    } else if report.missing_key_warning() {
        println!(
            "  {} no API key saved - run: {} set-key <key>",
            "WARNING  :".yellow().bold(),
            APP_NAME
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_args_parses_to_none() {
        let cli = Cli::try_parse_from(["gcl-switcher"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_use_glm_and_claude() {
        let cli = Cli::try_parse_from(["gcl-switcher", "use", "glm"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Use { mode: Mode::Glm })));
        let cli = Cli::try_parse_from(["gcl-switcher", "use", "claude"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Use { mode: Mode::Claude })));
    }

    #[test]
    fn test_use_rejects_unknown_mode() {
        let err = Cli::try_parse_from(["gcl-switcher", "use", "gpt"]).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
        assert!(err.use_stderr());
    }

    #[test]
    fn test_use_requires_mode() {
        let err = Cli::try_parse_from(["gcl-switcher", "use"]).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_set_key_requires_key() {
        let err = Cli::try_parse_from(["gcl-switcher", "set-key"]).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_set_key_accepts_leading_dash() {
        let cli = Cli::try_parse_from(["gcl-switcher", "set-key", "-abc123"]).unwrap();
        match cli.command {
            Some(Commands::SetKey { key }) => assert_eq!(key, "-abc123"),
            _ => panic!("expected set-key"),
        }
    }

    #[test]
    fn test_unknown_command_is_error() {
        let err = Cli::try_parse_from(["gcl-switcher", "frobnicate"]).err().unwrap();
        assert!(err.use_stderr());
    }

    #[test]
    fn test_help_forms_do_not_use_stderr() {
        for args in [["gcl-switcher", "help"], ["gcl-switcher", "--help"], ["gcl-switcher", "-h"]] {
            let err = Cli::try_parse_from(args).err().unwrap();
            assert_eq!(err.kind(), ErrorKind::DisplayHelp);
            assert!(!err.use_stderr());
        }
    }
}
