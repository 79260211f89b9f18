//! `todo-lib` — In-process todo list library.
//!
//! Keeps a todo list in a single JSON file and applies one of four
//! operations to it through a [`Dispatcher`].
//!
//! # Quick Start
//!
//! ```no_run
//! use todo_lib::{Dispatcher, Outcome, Request};
//!
//! let dispatcher = Dispatcher::standard("todo.json");
//!
//! // Add
//! let outcome = dispatcher.handle(Request::add("buy milk")).unwrap();
//! assert!(matches!(outcome, Outcome::Added { id: 1, .. }));
//!
//! // Remove renumbers the remaining items
//! dispatcher.handle(Request::remove(1)).unwrap();
//!
//! // Show
//! assert_eq!(dispatcher.handle(Request::show()).unwrap(), Outcome::Empty);
//! ```

pub mod dispatch;
pub mod document;
pub mod error;
pub mod model;
pub mod store;

pub use dispatch::{Dispatcher, Handler, Operation, Outcome, Payload, Rejection, Request};
pub use error::{Result, TodoError};
pub use model::TodoItem;
pub use store::TodoList;
