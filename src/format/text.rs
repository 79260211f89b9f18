//! Text formatting for terminal output.
//!
//! One line per outcome; a listing prints one line per item.

use todo_lib::{Outcome, Rejection, TodoItem};

/// Message printed by `show` when the list has no items.
pub const EMPTY_LIST: &str = "Todo list empty";

/// Format a single item line: `{id}: {text}`.
#[must_use]
pub fn format_item_line(item: &TodoItem) -> String {
    item.to_string()
}

/// Format a rejection as the user-facing message.
#[must_use]
pub fn format_rejection(rejection: &Rejection) -> String {
    match rejection {
        Rejection::FileMissing { path } => format!("File does not exist: {}", path.display()),
        Rejection::InvalidDocument { path, .. } => {
            format!("Invalid JSON syntax in: {}", path.display())
        }
        Rejection::InvalidId { id } => format!("Item ID {id} out of range"),
    }
}

/// Lines to print for an outcome.
#[must_use]
pub fn format_outcome_lines(outcome: &Outcome) -> Vec<String> {
    match outcome {
        Outcome::Added { id, .. } => vec![format!("Todo item {id} added")],
        Outcome::Removed { item } => vec![format!("Item {} removed", item.id)],
        Outcome::Changed { item } => vec![format!("Item {} changed to: {}", item.id, item.text)],
        Outcome::Listing { items } => items.iter().map(format_item_line).collect(),
        Outcome::Empty => vec![EMPTY_LIST.to_string()],
        Outcome::Rejected(rejection) => vec![format_rejection(rejection)],
    }
}
