//! List entries, newest first.

use crate::entry::Entry;
use crate::errors::AppResult;
use crate::store::EntryStore;

/// Prints one row per entry in display order.
pub fn list_entries(store: &EntryStore) -> AppResult<()> {
    if store.is_empty() {
        println!("No entries yet.");
        return Ok(());
    }

    for entry in store.entries() {
        println!("{}", render_row(entry));
    }
    Ok(())
}

/// One listing row: id, subtitle, title, coordinate, photo marker.
fn render_row(entry: &Entry) -> String {
    let photo_marker = if entry.photo.is_some() { "  [photo]" } else { "" };
    format!(
        "{}  {:<18}  {}  ({:.4}, {:.4}){}",
        entry.id(),
        entry.subtitle(),
        entry.title,
        entry.coordinate.latitude,
        entry.coordinate.longitude,
        photo_marker
    )
}
