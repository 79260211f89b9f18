use serde::Serialize;
use todo_lib::{Operation, Outcome, TodoItem};

use super::text::{EMPTY_LIST, format_rejection};

/// Process exit codes.
pub mod exit_codes {
    /// The operation completed.
    pub const SUCCESS: u8 = 0;
    /// Unhandled error (write failure, I/O, misconfiguration).
    pub const FAILURE: u8 = 1;
    /// The request was rejected and reported; nothing was saved.
    pub const REJECTED: u8 = 3;
}

/// Exit code for a handled outcome.
#[must_use]
pub const fn exit_code_for(outcome: &Outcome) -> u8 {
    if outcome.is_rejected() {
        exit_codes::REJECTED
    } else {
        exit_codes::SUCCESS
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Ok,
    Rejected,
}

/// JSON form of an outcome for `--json`.
#[derive(Debug, Clone, Serialize)]
pub struct OutcomeReport {
    pub status: ReportStatus,
    pub operation: Operation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<TodoItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl OutcomeReport {
    #[must_use]
    pub fn new(operation: Operation, outcome: &Outcome) -> Self {
        let mut report = Self {
            status: ReportStatus::Ok,
            operation,
            id: None,
            text: None,
            items: None,
            message: None,
        };

        match outcome {
            Outcome::Added { id, text } => {
                report.id = Some(*id);
                report.text = Some(text.clone());
            }
            Outcome::Removed { item } | Outcome::Changed { item } => {
                report.id = Some(item.id);
                report.text = Some(item.text.clone());
            }
            Outcome::Listing { items } => report.items = Some(items.clone()),
            Outcome::Empty => {
                report.items = Some(Vec::new());
                report.message = Some(EMPTY_LIST.to_string());
            }
            Outcome::Rejected(rejection) => {
                report.status = ReportStatus::Rejected;
                report.message = Some(format_rejection(rejection));
            }
        }

        report
    }
}
