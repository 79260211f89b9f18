//! List operations: add, remove, change, show.

use std::io::Write;

use anyhow::{Context, Result};
use todo_lib::{Dispatcher, Operation, Outcome, Request};
use tracing::debug;

use crate::config::Config;
use crate::format::{OutcomeReport, exit_code_for, format_outcome_lines};

/// Dispatch `request` against the configured file and print the outcome.
///
/// Returns the exit code for the outcome.
///
/// # Errors
///
/// Returns an error if the dispatcher propagates one (write failure, I/O,
/// unroutable request) or output cannot be written.
pub fn execute(config: &Config, request: Request, out: &mut dyn Write) -> Result<u8> {
    let dispatcher = Dispatcher::standard(&config.file);
    let operation = request.operation;

    let outcome = dispatcher
        .handle(request)
        .with_context(|| format!("'{operation}' failed"))?;
    debug!(operation = %operation, rejected = outcome.is_rejected(), "Request handled");

    render(out, config.json, operation, &outcome)?;
    Ok(exit_code_for(&outcome))
}

/// Print an outcome as text lines or a single JSON object.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn render(
    out: &mut dyn Write,
    json: bool,
    operation: Operation,
    outcome: &Outcome,
) -> Result<()> {
    if json {
        let report = OutcomeReport::new(operation, outcome);
        writeln!(out, "{}", serde_json::to_string(&report)?)?;
    } else {
        for line in format_outcome_lines(outcome) {
            writeln!(out, "{line}")?;
        }
    }
    Ok(())
}
