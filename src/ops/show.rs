//! Show a single entry in full.

use crate::entry::Entry;
use crate::errors::{AppResult, StoreError};
use crate::geocode::{Geocoder, PlaceResolver};
use crate::store::EntryStore;
use uuid::Uuid;

/// Prints the full detail view of one entry: title, subtitle, resolved place
/// name, coordinate, photo dimensions, and notes.
///
/// The place name comes from a reverse-geocode lookup through `geocoder`;
/// a failed lookup renders as "Unknown".
///
/// # Errors
///
/// Returns `StoreError::UnknownEntry` if no entry with `id` exists.
pub fn show_entry(store: &EntryStore, id: Uuid, geocoder: &dyn Geocoder) -> AppResult<()> {
    let entry = store
        .get(id)
        .ok_or_else(|| StoreError::UnknownEntry { id: id.to_string() })?;

    let mut resolver = PlaceResolver::new();
    let place = resolver.resolve(geocoder, entry.coordinate);

    print!("{}", render(entry, &place));
    Ok(())
}

/// Renders the detail view. The place line reads "@ <place>" when the
/// lookup resolved and "Unknown" otherwise.
fn render(entry: &Entry, place: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", entry.title));
    out.push_str(&format!("{}\n", entry.subtitle()));
    if place == crate::constants::UNKNOWN_PLACE {
        out.push_str("Unknown\n");
    } else {
        out.push_str(&format!("@ {}\n", place));
    }
    out.push_str(&format!(
        "({:.4}, {:.4})\n",
        entry.coordinate.latitude, entry.coordinate.longitude
    ));
    if let Some(photo) = &entry.photo {
        let (width, height) = photo.dimensions();
        out.push_str(&format!("Photo: {}x{}\n", width, height));
    }
    if !entry.notes.is_empty() {
        out.push_str(&format!("\n{}\n", entry.notes));
    }
    out
}
