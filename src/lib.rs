/*!
# Waymark

Waymark is a geotagged journal: dated, located, optionally photographed
entries ("waymarks") recorded from the command line, stored one record per
file, and kept sorted newest-first.

## Core Features

- Record entries with a title, notes, date, coordinate, and optional photo
- List entries newest first; show a single entry with its resolved place name
- Edit or delete entries; edits that change the date are repositioned
- Attached photos are normalized so their shorter side is 264 pixels
- One versioned JSON record per entry; unreadable records are skipped and
  reported, never fatal

## Architecture

The codebase follows a modular architecture with clear separation of concerns:

- `cli`: Command-line interface handling using clap
- `config`: Configuration loading and validation
- `errors`: Error handling infrastructure
- `entry`: The entry model and its ordering rules
- `photo`: Photo normalization
- `record`: The versioned on-disk record format
- `store`: The entry store (durable CRUD + ordered collection)
- `geocode`: Reverse geocoding seam with latest-request-wins sequencing
- `ops`: User-facing operations (add, list, show, edit, delete)

## Usage Example

```rust,no_run
use waymark::entry::{Coordinate, EntryDraft};
use waymark::store::EntryStore;
use waymark::{AppResult, Config};

fn main() -> AppResult<()> {
    // Load configuration
    let config = Config::load()?;
    config.validate()?;

    // Open the store (creates the directory on first use)
    let (mut store, _report) = EntryStore::open(&config.entries_dir)?;

    // Record an entry
    let entry = EntryDraft::new()
        .title("Kirstenbosch")
        .coordinate(Coordinate::new(-33.9875, 18.4327))
        .build()?;
    store.add(entry)?;
    Ok(())
}
```
*/

/// Command-line interface for parsing and handling user arguments
pub mod cli;
/// Configuration loading and management
pub mod config;
/// Centralized application constants
pub mod constants;
/// The entry model: records, drafts, ordering
pub mod entry;
/// Error types and utilities for error handling
pub mod errors;
/// Reverse geocoding seam and request sequencing
pub mod geocode;
/// User-facing operations over the store
pub mod ops;
/// Photo normalization for stored entries
pub mod photo;
/// Versioned on-disk record format
pub mod record;
/// The entry store: durable CRUD plus the ordered collection
pub mod store;

// Re-export important types for convenience
pub use cli::CliArgs;
pub use config::Config;
pub use entry::{Coordinate, Entry, EntryDraft};
pub use errors::{AppError, AppResult};
pub use photo::Photo;
pub use store::EntryStore;
