//! Show action.

use std::path::Path;

use super::reject;
use crate::dispatch::outcome::Outcome;
use crate::dispatch::request::Request;
use crate::document;
use crate::error::Result;

/// List every item. Never writes.
///
/// # Errors
///
/// Returns any load error other than a missing or malformed document.
pub fn execute(path: &Path, _request: Request) -> Result<Outcome> {
    let list = match document::load(path) {
        Ok(list) => list,
        Err(err) => return reject(err),
    };

    if list.is_empty() {
        return Ok(Outcome::Empty);
    }

    Ok(Outcome::Listing {
        items: list.into_items(),
    })
}
