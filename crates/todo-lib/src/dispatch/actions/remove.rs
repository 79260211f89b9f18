//! Remove action.

use std::path::Path;

use super::reject;
use crate::dispatch::outcome::Outcome;
use crate::dispatch::request::Request;
use crate::document;
use crate::error::Result;

/// Delete the item with the requested id and renumber the rest.
///
/// # Errors
///
/// Returns `WriteFailure` if the list cannot be saved.
pub fn execute(path: &Path, request: Request) -> Result<Outcome> {
    let id = request.id()?;

    let mut list = match document::load(path) {
        Ok(list) => list,
        Err(err) => return reject(err),
    };

    let item = match list.remove(id) {
        Ok(item) => item,
        Err(err) => return reject(err),
    };
    document::save(path, &list)?;

    Ok(Outcome::Removed { item })
}
