//! Record a new journal entry.

use crate::entry::{Coordinate, EntryDraft};
use crate::errors::AppResult;
use crate::store::EntryStore;
use chrono::NaiveDate;
use std::path::PathBuf;
use tracing::info;
use uuid::Uuid;

/// Fields collected at the editing boundary for a new entry.
///
/// Everything is optional except what [`EntryDraft::build`] requires: a
/// missing coordinate is rejected there, before the store is touched.
#[derive(Debug, Default)]
pub struct AddRequest {
    pub title: Option<String>,
    pub notes: Option<String>,
    pub date: Option<NaiveDate>,
    pub coordinate: Option<Coordinate>,
    pub photo: Option<PathBuf>,
}

/// Builds an entry from `request` and adds it to the store.
///
/// Returns the new entry's id.
///
/// # Errors
///
/// Returns a validation error for a request without a coordinate, a photo
/// error if the attached image cannot be read or decoded, or a store error
/// if the record cannot be written.
pub fn add_entry(store: &mut EntryStore, request: AddRequest) -> AppResult<Uuid> {
    let mut draft = EntryDraft::new();
    if let Some(title) = request.title {
        draft = draft.title(title);
    }
    if let Some(notes) = request.notes {
        draft = draft.notes(notes);
    }
    if let Some(date) = request.date {
        draft = draft.date(date);
    }
    if let Some(coordinate) = request.coordinate {
        draft = draft.coordinate(coordinate);
    }
    if let Some(path) = &request.photo {
        draft = draft.photo(super::read_photo(path)?);
    }

    let entry = draft.build()?;
    let id = entry.id();
    let subtitle = entry.subtitle();

    store.add(entry)?;
    info!("Recorded entry {}", id);
    println!("Added entry {} ({})", id, subtitle);
    Ok(id)
}
