//! Output formatting for `td`.
//!
//! Supports both human-readable text output and machine-parseable JSON.
//!
//! - [`format_outcome_lines`] - the text lines for an outcome
//! - [`OutcomeReport`] - the `--json` object for an outcome
//! - [`exit_code_for`] - process exit code for an outcome

mod output;
mod text;

pub use output::{OutcomeReport, ReportStatus, exit_code_for, exit_codes};
pub use text::{EMPTY_LIST, format_item_line, format_outcome_lines, format_rejection};
