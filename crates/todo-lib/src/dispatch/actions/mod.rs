//! Built-in actions, one module per operation.
//!
//! Every action loads the document, applies its change and saves only if
//! something changed. Missing files, malformed documents and unknown ids are
//! reported as [`Outcome::Rejected`]; everything else propagates.

pub mod add;
pub mod change;
pub mod remove;
pub mod show;

use super::outcome::{Outcome, Rejection};
use crate::error::{Result, TodoError};

/// Turn a reportable error into a rejection, propagating the rest.
fn reject(err: TodoError) -> Result<Outcome> {
    Rejection::try_from(err).map(Outcome::Rejected)
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::path::{Path, PathBuf};

    use crate::document;
    use crate::model::TodoItem;
    use crate::store::TodoList;

    pub fn seed(dir: &Path, texts: &[&str]) -> PathBuf {
        let path = dir.join("todo.json");
        let mut list = TodoList::new();
        for text in texts {
            list.add(*text);
        }
        document::save(&path, &list).unwrap();
        path
    }

    pub fn stored(path: &Path) -> Vec<TodoItem> {
        document::load(path).unwrap().into_items()
    }
}
