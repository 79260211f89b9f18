//! A handler binds one operation to the action that carries it out.

use std::path::Path;

use super::actions;
use super::outcome::Outcome;
use super::request::{Operation, Request};
use crate::error::Result;

/// Runs a matched request against the list stored at the given path.
pub type Action = fn(&Path, Request) -> Result<Outcome>;

#[derive(Debug, Clone, Copy)]
pub struct Handler {
    operation: Operation,
    action: Action,
}

impl Handler {
    #[must_use]
    pub const fn new(operation: Operation, action: Action) -> Self {
        Self { operation, action }
    }

    /// The built-in handler for `operation`.
    #[must_use]
    pub const fn builtin(operation: Operation) -> Self {
        let action: Action = match operation {
            Operation::Add => actions::add::execute,
            Operation::Remove => actions::remove::execute,
            Operation::Change => actions::change::execute,
            Operation::Show => actions::show::execute,
        };
        Self::new(operation, action)
    }

    #[must_use]
    pub const fn operation(&self) -> Operation {
        self.operation
    }

    #[must_use]
    pub fn matches(&self, request: &Request) -> bool {
        request.operation == self.operation
    }

    /// Run the bound action.
    ///
    /// # Errors
    ///
    /// Returns whatever the action could not turn into an [`Outcome`].
    pub fn execute(&self, path: &Path, request: Request) -> Result<Outcome> {
        (self.action)(path, request)
    }
}
