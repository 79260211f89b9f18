//! `todo_rust` - Todo list manager
//!
//! This crate provides the `td` command-line front end over [`todo_lib`].
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - [`cli`] - Command-line interface using clap; builds requests
//! - [`config`] - Configuration management
//! - [`format`] - Output formatting (text, JSON) and exit codes
//! - [`logging`] - tracing subscriber setup
//!
//! Storage, the item rules and request dispatch live in `todo_lib`.

#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod format;
pub mod logging;

pub use todo_lib::{Result, TodoError};

/// Run the CLI application and return the process exit code.
///
/// This is the main entry point called from `main()`.
///
/// # Errors
///
/// Returns an error if command execution fails.
pub fn run() -> anyhow::Result<u8> {
    cli::run()
}
