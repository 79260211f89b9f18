//! Request types handed to the dispatcher.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, TodoError};

/// The four operations a todo list supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Add,
    Remove,
    Change,
    Show,
}

impl Operation {
    /// Every operation, in the reference dispatch order.
    pub const ALL: [Self; 4] = [Self::Add, Self::Remove, Self::Change, Self::Show];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Remove => "remove",
            Self::Change => "change",
            Self::Show => "show",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Operation {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "add" => Ok(Self::Add),
            "remove" | "rem" | "rm" => Ok(Self::Remove),
            "change" | "cng" => Ok(Self::Change),
            "show" | "sho" | "ls" => Ok(Self::Show),
            other => Err(TodoError::UnknownOperation {
                tag: other.to_string(),
            }),
        }
    }
}

/// Operation-specific request fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Payload {
    pub id: Option<u64>,
    pub text: Option<String>,
}

/// A single request: which operation to run and with what.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub operation: Operation,
    pub payload: Payload,
}

impl Request {
    #[must_use]
    pub const fn new(operation: Operation, payload: Payload) -> Self {
        Self { operation, payload }
    }

    #[must_use]
    pub fn add(text: impl Into<String>) -> Self {
        Self::new(
            Operation::Add,
            Payload {
                id: None,
                text: Some(text.into()),
            },
        )
    }

    #[must_use]
    pub const fn remove(id: u64) -> Self {
        Self::new(
            Operation::Remove,
            Payload {
                id: Some(id),
                text: None,
            },
        )
    }

    #[must_use]
    pub fn change(id: u64, text: impl Into<String>) -> Self {
        Self::new(
            Operation::Change,
            Payload {
                id: Some(id),
                text: Some(text.into()),
            },
        )
    }

    #[must_use]
    pub const fn show() -> Self {
        Self::new(
            Operation::Show,
            Payload {
                id: None,
                text: None,
            },
        )
    }

    /// The `id` field.
    ///
    /// # Errors
    ///
    /// Returns `MissingField` if the payload has no id.
    pub fn id(&self) -> Result<u64> {
        self.payload.id.ok_or(TodoError::MissingField {
            operation: self.operation,
            field: "id",
        })
    }

    /// Consume the request, yielding its `text` field.
    ///
    /// # Errors
    ///
    /// Returns `MissingField` if the payload has no text.
    pub fn into_text(self) -> Result<String> {
        let operation = self.operation;
        self.payload.text.ok_or(TodoError::MissingField {
            operation,
            field: "text",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_parse_aliases() {
        assert_eq!("add".parse::<Operation>().unwrap(), Operation::Add);
        assert_eq!("rem".parse::<Operation>().unwrap(), Operation::Remove);
        assert_eq!("RM".parse::<Operation>().unwrap(), Operation::Remove);
        assert_eq!("cng".parse::<Operation>().unwrap(), Operation::Change);
        assert_eq!("sho".parse::<Operation>().unwrap(), Operation::Show);
        assert_eq!("ls".parse::<Operation>().unwrap(), Operation::Show);
    }

    #[test]
    fn test_operation_parse_unknown() {
        let result = "purge".parse::<Operation>();
        assert!(matches!(result, Err(TodoError::UnknownOperation { tag }) if tag == "purge"));
    }

    #[test]
    fn test_operation_display_roundtrip() {
        for op in Operation::ALL {
            assert_eq!(op.to_string().parse::<Operation>().unwrap(), op);
        }
    }

    #[test]
    fn test_request_constructors_fill_required_fields() {
        assert_eq!(Request::add("a").into_text().unwrap(), "a");
        assert_eq!(Request::remove(3).id().unwrap(), 3);
        let change = Request::change(2, "b");
        assert_eq!(change.id().unwrap(), 2);
        assert_eq!(change.into_text().unwrap(), "b");
    }

    #[test]
    fn test_missing_field() {
        let request = Request::new(Operation::Change, Payload::default());
        assert!(matches!(
            request.id(),
            Err(TodoError::MissingField { field: "id", .. })
        ));
        assert!(matches!(
            request.into_text(),
            Err(TodoError::MissingField { field: "text", .. })
        ));
    }
}
