//! JSON document I/O for the todo list.
//!
//! The file holds one JSON array of `{"id", "text"}` objects. Files written by
//! an old serializer wrapped that array in a JSON string; those are unwrapped
//! on read (one level only) and written back as a plain array.

use std::ffi::OsString;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{Result, TodoError};
use crate::model::TodoItem;
use crate::store::TodoList;

/// Load the todo list stored at `path`.
///
/// A file holding only whitespace loads as an empty list.
///
/// # Errors
///
/// Returns `NotFound` if the file does not exist, `MalformedDocument` if it
/// is not an item array, or `Io` for any other read failure.
pub fn load(path: &Path) -> Result<TodoList> {
    let raw = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => TodoError::NotFound {
            path: path.to_path_buf(),
        },
        ErrorKind::InvalidData => TodoError::malformed(path, e),
        _ => TodoError::Io(e),
    })?;
    debug!(path = %path.display(), bytes = raw.len(), "Loading todo document");
    parse(path, &raw)
}

/// Parse document text. `path` is only used for error reporting.
///
/// # Errors
///
/// Returns `MalformedDocument` if the text (or the string it wraps) is not a
/// JSON array of items.
pub fn parse(path: &Path, raw: &str) -> Result<TodoList> {
    if raw.trim().is_empty() {
        return Ok(TodoList::new());
    }

    let mut value: Value = serde_json::from_str(raw).map_err(|e| TodoError::malformed(path, e))?;
    if let Value::String(inner) = value {
        warn!(
            path = %path.display(),
            "Document is string-encoded; it will be rewritten as a plain array on next save"
        );
        value = serde_json::from_str(&inner).map_err(|e| TodoError::malformed(path, e))?;
    }

    if uses_task_key(&value) {
        warn!(path = %path.display(), "Document uses the legacy 'task' key");
    }

    let items: Vec<TodoItem> =
        serde_json::from_value(value).map_err(|e| TodoError::malformed(path, e))?;
    let list = TodoList::from_items(items);

    if !list.is_dense() {
        warn!(
            path = %path.display(),
            count = list.len(),
            "Item ids are not 1..N; they will be renumbered on the next add or removal"
        );
    }

    Ok(list)
}

/// Save the list to `path`, replacing any previous contents.
///
/// Writes to a sibling temp file and renames it over the target, so a failed
/// save leaves the old document in place.
///
/// # Errors
///
/// Returns `WriteFailure` if the file cannot be written.
pub fn save(path: &Path, list: &TodoList) -> Result<()> {
    let json = serde_json::to_string(list)?;
    let tmp_path = temp_path(path)?;

    if let Err(e) = write_file(&tmp_path, json.as_bytes()) {
        let _ = fs::remove_file(&tmp_path);
        return Err(TodoError::write_failure(path, e));
    }

    // Atomic rename
    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(TodoError::write_failure(path, e));
    }

    debug!(path = %path.display(), count = list.len(), "Saved todo document");
    Ok(())
}

fn write_file(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(contents)?;
    file.flush()
}

fn temp_path(path: &Path) -> Result<PathBuf> {
    let Some(name) = path.file_name() else {
        return Err(TodoError::write_failure(
            path,
            std::io::Error::new(ErrorKind::InvalidInput, "path has no file name"),
        ));
    };
    let mut tmp_name = OsString::from(name);
    tmp_name.push(".tmp");
    Ok(path.with_file_name(tmp_name))
}

fn uses_task_key(value: &Value) -> bool {
    value.as_array().is_some_and(|items| {
        items
            .iter()
            .any(|item| item.get("task").is_some() && item.get("text").is_none())
    })
}
