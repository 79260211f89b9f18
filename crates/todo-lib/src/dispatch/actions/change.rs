//! Change action.

use std::path::Path;

use super::reject;
use crate::dispatch::outcome::Outcome;
use crate::dispatch::request::Request;
use crate::document;
use crate::error::Result;

/// Replace the text of the item with the requested id.
///
/// # Errors
///
/// Returns `WriteFailure` if the list cannot be saved.
pub fn execute(path: &Path, request: Request) -> Result<Outcome> {
    let id = request.id()?;
    let text = request.into_text()?;

    let mut list = match document::load(path) {
        Ok(list) => list,
        Err(err) => return reject(err),
    };

    let item = match list.change(id, text) {
        Ok(item) => item.clone(),
        Err(err) => return reject(err),
    };
    document::save(path, &list)?;

    Ok(Outcome::Changed { item })
}
