//! Command-line interface for `td`.
//!
//! This module turns argv into a [`Request`] and hands it to the command
//! layer. clap rejects unknown commands and wrong argument counts before
//! anything reaches the dispatcher.

pub mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use todo_lib::Request;

use crate::config::{CliOverrides, Config};
use crate::format::exit_codes;
use crate::logging;

/// `td` - Todo list kept in a JSON file.
#[derive(Parser, Debug)]
#[command(name = "td")]
#[command(
    author,
    version,
    about = "Todo list kept in a JSON file",
    long_about = None,
    after_help = "Multi-word text must be quoted, e.g. td add 'water the dog'.\n\
                  Ids are positions: removing an item renumbers the ones after it."
)]
pub struct Cli {
    /// Todo file to operate on [default: todo.json]
    #[arg(short, long, global = true, env = "TD_FILE", value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Output format: text (default) or json
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Also write logs as JSON lines to this file
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Add the text as the next todo item
    Add {
        /// Item text
        text: String,
    },

    /// Remove the item with the given id (alias: rem, rm)
    #[command(visible_alias = "rem", alias = "rm")]
    Remove {
        /// Item id
        #[arg(value_parser = clap::value_parser!(u64).range(1..))]
        id: u64,
    },

    /// Change the text of the item with the given id (alias: cng)
    #[command(visible_alias = "cng")]
    Change {
        /// Item id
        #[arg(value_parser = clap::value_parser!(u64).range(1..))]
        id: u64,

        /// New item text
        text: String,
    },

    /// Show all todo items (alias: sho, ls)
    #[command(visible_alias = "sho", alias = "ls")]
    Show,

    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

impl Commands {
    /// The request this command stands for, if it operates on the list.
    #[must_use]
    pub fn to_request(&self) -> Option<Request> {
        match self {
            Self::Add { text } => Some(Request::add(text.clone())),
            Self::Remove { id } => Some(Request::remove(*id)),
            Self::Change { id, text } => Some(Request::change(*id, text.clone())),
            Self::Show => Some(Request::show()),
            Self::Completions { .. } => None,
        }
    }
}

impl Cli {
    #[must_use]
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            file: self.file.clone(),
            json: self.json.then_some(true),
        }
    }
}

/// Run the CLI and return the process exit code.
///
/// # Errors
///
/// Returns an error if logging or config cannot be set up, or if the
/// operation fails in a way that is not reported as a rejection.
pub fn run() -> Result<u8> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.quiet, cli.log_file.as_deref())
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;

    let Some(request) = cli.command.to_request() else {
        if let Commands::Completions { shell } = cli.command {
            commands::completions::execute(shell, &mut std::io::stdout());
        }
        return Ok(exit_codes::SUCCESS);
    };

    let config = Config::load(&cli.overrides())?;
    commands::todo::execute(&config, request, &mut std::io::stdout().lock())
}
