//! Error types for `todo-lib`.

use std::path::PathBuf;
use thiserror::Error;

use crate::dispatch::Operation;

/// Primary error type for todo-lib operations.
#[derive(Error, Debug)]
pub enum TodoError {
    // === Document Errors ===
    /// The storage file does not exist.
    #[error("File does not exist: {}", path.display())]
    NotFound { path: PathBuf },

    /// The storage file is not a JSON item array (after one optional unwrap).
    #[error("Invalid JSON syntax in {}: {reason}", path.display())]
    MalformedDocument { path: PathBuf, reason: String },

    /// Writing the storage file failed.
    #[error("Failed to write {}: {source}", path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Item Errors ===
    /// No item carries the referenced id.
    #[error("Item ID {id} out of range")]
    InvalidId { id: u64 },

    // === Dispatch Errors ===
    /// No handler in the dispatcher is bound to the operation.
    #[error("No handler bound to '{operation}'")]
    UnroutableRequest { operation: Operation },

    /// Two handlers were bound to the same operation.
    #[error("Handler for '{operation}' configured twice")]
    DuplicateHandler { operation: Operation },

    /// The request lacks a field its operation requires.
    #[error("'{operation}' request is missing '{field}'")]
    MissingField {
        operation: Operation,
        field: &'static str,
    },

    /// The operation tag is not one of the known tags.
    #[error("Unknown operation: {tag}")]
    UnknownOperation { tag: String },

    // === I/O Errors ===
    /// File system I/O error outside of saving.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TodoError {
    #[must_use]
    pub fn malformed(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::MalformedDocument {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    #[must_use]
    pub fn write_failure(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::WriteFailure {
            path: path.into(),
            source,
        }
    }
}

/// Result type using `TodoError`.
pub type Result<T> = std::result::Result<T, TodoError>;
