//! Edit fields of an existing entry.

use crate::entry::Coordinate;
use crate::errors::{AppResult, StoreError};
use crate::store::EntryStore;
use chrono::NaiveDate;
use std::path::PathBuf;
use tracing::info;
use uuid::Uuid;

/// Field changes to apply to an entry. `None` leaves a field untouched.
#[derive(Debug, Default)]
pub struct EditRequest {
    pub title: Option<String>,
    pub notes: Option<String>,
    pub date: Option<NaiveDate>,
    pub coordinate: Option<Coordinate>,
    pub photo: Option<PathBuf>,
}

/// Applies `request` to the entry with `id` and re-saves it. The store
/// repositions the entry if its date changed.
///
/// # Errors
///
/// Returns `StoreError::UnknownEntry` for an unknown id, a photo error if
/// the replacement image cannot be read, or a store error if the record
/// cannot be rewritten.
pub fn edit_entry(store: &mut EntryStore, id: Uuid, request: EditRequest) -> AppResult<()> {
    let mut entry = store
        .get(id)
        .ok_or_else(|| StoreError::UnknownEntry { id: id.to_string() })?
        .clone();

    if let Some(title) = request.title {
        entry.title = title;
    }
    if let Some(notes) = request.notes {
        entry.notes = notes;
    }
    if let Some(date) = request.date {
        entry.date = date;
    }
    if let Some(coordinate) = request.coordinate {
        entry.coordinate = coordinate;
    }
    if let Some(path) = &request.photo {
        entry.photo = Some(super::read_photo(path)?);
    }

    store.update(entry)?;
    info!("Updated entry {}", id);
    println!("Updated entry {}", id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::EntryDraft;
    use crate::errors::AppError;
    use tempfile::tempdir;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_edit_unknown_id_is_an_error() {
        let tmp = tempdir().unwrap();
        let (mut store, _) = EntryStore::open(tmp.path().join("entries")).unwrap();
        let result = edit_entry(&mut store, Uuid::new_v4(), EditRequest::default());
        assert!(matches!(
            result,
            Err(AppError::Store(StoreError::UnknownEntry { .. }))
        ));
    }

    #[test]
    fn test_edit_changes_persist_across_reload() {
        let tmp = tempdir().unwrap();
        let dir = tmp.path().join("entries");
        let (mut store, _) = EntryStore::open(&dir).unwrap();

        let entry = EntryDraft::new()
            .title("Before")
            .date(ymd(2020, 1, 1))
            .coordinate(Coordinate::new(0.0, 0.0))
            .build()
            .unwrap();
        let id = entry.id();
        store.add(entry).unwrap();

        let request = EditRequest {
            title: Some("After".to_string()),
            date: Some(ymd(2020, 9, 9)),
            ..EditRequest::default()
        };
        edit_entry(&mut store, id, request).unwrap();

        let (reloaded, _) = EntryStore::open(&dir).unwrap();
        let entry = reloaded.get(id).unwrap();
        assert_eq!(entry.title, "After");
        assert_eq!(entry.date, ymd(2020, 9, 9));
    }

    #[test]
    fn test_empty_request_leaves_entry_unchanged() {
        let tmp = tempdir().unwrap();
        let (mut store, _) = EntryStore::open(tmp.path().join("entries")).unwrap();

        let entry = EntryDraft::new()
            .title("Same")
            .notes("Still the same.")
            .date(ymd(2020, 1, 1))
            .coordinate(Coordinate::new(5.0, 6.0))
            .build()
            .unwrap();
        let id = entry.id();
        store.add(entry).unwrap();

        edit_entry(&mut store, id, EditRequest::default()).unwrap();

        let entry = store.get(id).unwrap();
        assert_eq!(entry.title, "Same");
        assert_eq!(entry.notes, "Still the same.");
        assert_eq!(entry.date, ymd(2020, 1, 1));
    }
}
