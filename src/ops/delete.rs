//! Delete an entry.

use crate::errors::AppResult;
use crate::store::EntryStore;
use tracing::info;
use uuid::Uuid;

/// Removes the entry with `id` from the store and reports what was deleted.
///
/// # Errors
///
/// Returns `StoreError::UnknownEntry` for an id the store does not hold.
pub fn delete_entry(store: &mut EntryStore, id: Uuid) -> AppResult<()> {
    let removed = store.delete(id)?;
    info!("Deleted entry {}", id);
    println!("Deleted entry {} ({})", id, removed.title);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::{Coordinate, EntryDraft};
    use crate::errors::{AppError, StoreError};
    use tempfile::tempdir;

    #[test]
    fn test_delete_removes_entry() {
        let tmp = tempdir().unwrap();
        let dir = tmp.path().join("entries");
        let (mut store, _) = EntryStore::open(&dir).unwrap();

        let entry = EntryDraft::new()
            .coordinate(Coordinate::new(1.0, 2.0))
            .build()
            .unwrap();
        let id = entry.id();
        store.add(entry).unwrap();

        delete_entry(&mut store, id).unwrap();
        assert!(store.is_empty());

        let (reloaded, _) = EntryStore::open(&dir).unwrap();
        assert!(reloaded.is_empty());
    }

    #[test]
    fn test_delete_unknown_id_is_an_error() {
        let tmp = tempdir().unwrap();
        let (mut store, _) = EntryStore::open(tmp.path().join("entries")).unwrap();
        let result = delete_entry(&mut store, Uuid::new_v4());
        assert!(matches!(
            result,
            Err(AppError::Store(StoreError::UnknownEntry { .. }))
        ));
    }
}
