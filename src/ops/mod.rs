//! User-facing operations over the entry store.
//!
//! One module per operation: record a new entry, list the collection, show
//! one entry in full, edit fields, delete. Each operation takes the opened
//! store (and any collaborators) and returns `AppResult`; rendering goes to
//! stdout.

pub mod add;
pub mod delete;
pub mod edit;
pub mod list;
pub mod show;

// Re-export commonly used functions
pub use add::{add_entry, AddRequest};
pub use delete::delete_entry;
pub use edit::{edit_entry, EditRequest};
pub use list::list_entries;
pub use show::show_entry;

use crate::errors::AppResult;
use crate::photo::Photo;
use std::fs;
use std::path::Path;

/// Reads an image file and normalizes it into a storable [`Photo`].
pub(crate) fn read_photo(path: &Path) -> AppResult<Photo> {
    let bytes = fs::read(path)?;
    Ok(Photo::from_bytes(&bytes)?)
}
