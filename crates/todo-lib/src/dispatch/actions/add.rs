//! Add action.

use std::path::Path;

use tracing::info;

use super::reject;
use crate::dispatch::outcome::Outcome;
use crate::dispatch::request::Request;
use crate::document;
use crate::error::{Result, TodoError};
use crate::store::TodoList;

/// Append `text` as the next item. A missing file starts a new list.
///
/// # Errors
///
/// Returns `WriteFailure` if the list cannot be saved, or any load error
/// other than a missing or malformed document.
pub fn execute(path: &Path, request: Request) -> Result<Outcome> {
    let text = request.into_text()?;

    let mut list = match document::load(path) {
        Ok(list) => list,
        Err(TodoError::NotFound { .. }) => {
            info!(path = %path.display(), "No todo file yet; starting a new list");
            TodoList::new()
        }
        Err(err) => return reject(err),
    };

    let id = list.add(text.clone());
    document::save(path, &list)?;

    Ok(Outcome::Added { id, text })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::actions::remove;
    use crate::dispatch::actions::test_support::{seed, stored};
    use crate::dispatch::outcome::Rejection;
    use crate::model::TodoItem;
    use std::fs;

    #[test]
    fn test_add_creates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("todo.json");

        let outcome = execute(&path, Request::add("buy milk")).unwrap();
        assert_eq!(
            outcome,
            Outcome::Added {
                id: 1,
                text: "buy milk".to_string()
            }
        );
        assert_eq!(stored(&path), vec![TodoItem::new(1, "buy milk")]);
    }

    #[test]
    fn test_add_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = seed(dir.path(), &["a", "b"]);

        let outcome = execute(&path, Request::add("c")).unwrap();
        assert!(matches!(outcome, Outcome::Added { id: 3, .. }));
        assert_eq!(stored(&path).len(), 3);
    }

    #[test]
    fn test_add_to_gapped_document_keeps_ids_unique() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("todo.json");
        fs::write(&path, r#"[{"id":1,"text":"a"},{"id":3,"text":"b"}]"#).unwrap();

        let outcome = execute(&path, Request::add("c")).unwrap();
        assert!(matches!(outcome, Outcome::Added { id: 3, .. }));
        assert_eq!(
            stored(&path),
            vec![
                TodoItem::new(1, "a"),
                TodoItem::new(2, "b"),
                TodoItem::new(3, "c")
            ]
        );

        let removed = remove::execute(&path, Request::remove(3)).unwrap();
        assert_eq!(
            removed,
            Outcome::Removed {
                item: TodoItem::new(3, "c")
            }
        );
    }

    #[test]
    fn test_add_to_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("todo.json");
        fs::write(&path, "").unwrap();

        let outcome = execute(&path, Request::add("first")).unwrap();
        assert!(matches!(outcome, Outcome::Added { id: 1, .. }));
    }

    #[test]
    fn test_add_rejects_malformed_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("todo.json");
        fs::write(&path, "{oops").unwrap();

        let outcome = execute(&path, Request::add("x")).unwrap();
        assert!(matches!(
            outcome,
            Outcome::Rejected(Rejection::InvalidDocument { .. })
        ));
        assert_eq!(fs::read_to_string(&path).unwrap(), "{oops");
    }

    #[test]
    fn test_add_write_failure_propagates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("todo.json");

        let result = execute(&path, Request::add("x"));
        assert!(matches!(result, Err(TodoError::WriteFailure { .. })));
    }
}
