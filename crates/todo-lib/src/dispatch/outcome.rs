//! Results produced by handlers.

use std::path::PathBuf;

use crate::error::TodoError;
use crate::model::TodoItem;

/// What a handler did with a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A new item was appended.
    Added { id: u64, text: String },
    /// The item was deleted; remaining ids were renumbered.
    Removed { item: TodoItem },
    /// The item's text was replaced.
    Changed { item: TodoItem },
    /// The full list, in display order.
    Listing { items: Vec<TodoItem> },
    /// `show` on a list with no items.
    Empty,
    /// The request could not be carried out; nothing was saved.
    Rejected(Rejection),
}

impl Outcome {
    #[must_use]
    pub const fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }
}

/// A user-facing reason a request was turned down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    FileMissing { path: PathBuf },
    InvalidDocument { path: PathBuf, reason: String },
    InvalidId { id: u64 },
}

impl TryFrom<TodoError> for Rejection {
    type Error = TodoError;

    /// Errors that handlers report instead of propagating.
    fn try_from(err: TodoError) -> Result<Self, Self::Error> {
        match err {
            TodoError::NotFound { path } => Ok(Self::FileMissing { path }),
            TodoError::MalformedDocument { path, reason } => {
                Ok(Self::InvalidDocument { path, reason })
            }
            TodoError::InvalidId { id } => Ok(Self::InvalidId { id }),
            other => Err(other),
        }
    }
}
