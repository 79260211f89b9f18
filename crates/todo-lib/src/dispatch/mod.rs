//! Request dispatch.
//!
//! A [`Dispatcher`] holds an ordered table of [`Handler`]s, each bound to one
//! [`Operation`]. `handle` walks the table from the head and runs the first
//! handler whose operation matches; the rest never see the request.
//!
//! The standard table is total over [`Operation::ALL`], so a request built
//! from a parsed operation always finds its handler. Partial tables are
//! allowed for embedding and answer unbound operations with
//! `UnroutableRequest`.

pub mod actions;
mod handler;
mod outcome;
mod request;

pub use handler::{Action, Handler};
pub use outcome::{Outcome, Rejection};
pub use request::{Operation, Payload, Request};

use std::path::PathBuf;

use tracing::{debug, trace};

use crate::error::{Result, TodoError};

/// Routes requests to the handler bound to their operation.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    path: PathBuf,
    handlers: Vec<Handler>,
}

impl Dispatcher {
    /// Built-in handlers in the reference order: add, remove, change, show.
    #[must_use]
    pub fn standard(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            handlers: Operation::ALL.into_iter().map(Handler::builtin).collect(),
        }
    }

    /// Use `handlers` in the given order.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateHandler` if two handlers share an operation.
    pub fn configure(
        path: impl Into<PathBuf>,
        handlers: impl IntoIterator<Item = Handler>,
    ) -> Result<Self> {
        let mut table: Vec<Handler> = Vec::new();
        for handler in handlers {
            if table.iter().any(|h| h.operation() == handler.operation()) {
                return Err(TodoError::DuplicateHandler {
                    operation: handler.operation(),
                });
            }
            table.push(handler);
        }

        Ok(Self {
            path: path.into(),
            handlers: table,
        })
    }

    /// Operations in traversal order.
    pub fn operations(&self) -> impl Iterator<Item = Operation> + '_ {
        self.handlers.iter().map(Handler::operation)
    }

    /// Whether every operation has a handler.
    #[must_use]
    pub fn is_total(&self) -> bool {
        Operation::ALL
            .iter()
            .all(|op| self.handlers.iter().any(|h| h.operation() == *op))
    }

    /// Route `request` to its handler.
    ///
    /// # Errors
    ///
    /// Returns `UnroutableRequest` if no handler is bound to the operation,
    /// or any error the matching handler propagates.
    pub fn handle(&self, request: Request) -> Result<Outcome> {
        debug!(operation = %request.operation, path = %self.path.display(), "Dispatching request");

        for handler in &self.handlers {
            if handler.matches(&request) {
                return handler.execute(&self.path, request);
            }
            trace!(handler = %handler.operation(), "Forwarding request");
        }

        Err(TodoError::UnroutableRequest {
            operation: request.operation,
        })
    }

    /// Shorthand for [`Dispatcher::handle`] on an `(operation, payload)` pair.
    ///
    /// # Errors
    ///
    /// See [`Dispatcher::handle`].
    pub fn dispatch(&self, operation: Operation, payload: Payload) -> Result<Outcome> {
        self.handle(Request::new(operation, payload))
    }
}
