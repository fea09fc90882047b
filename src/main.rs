/*!
# Waymark - A Geotagged Journal

Waymark records dated, located, optionally photographed journal entries from
the command line. Entries live as one JSON record per file in a per-user
directory and are always presented newest first.

This file contains the main application flow, coordinating the various
components to implement the journal functionality.

## Usage

```
waymark <COMMAND>

Commands:
  add     Record a new entry
  list    List all entries, newest first
  show    Show a single entry in full
  edit    Edit fields of an existing entry
  delete  Delete an entry
```

## Configuration

The application can be configured with the following environment variables:
- `WAYMARK_DIR`: The directory to store entry records (defaults to
  "~/Documents/waymark")
*/

use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use waymark::cli::{self, CliArgs, Command};
use waymark::config::Config;
use waymark::entry::Coordinate;
use waymark::errors::{AppError, AppResult};
use waymark::geocode::UnavailableGeocoder;
use waymark::ops::{self, AddRequest, EditRequest};
use waymark::store::EntryStore;

/// The main entry point: runs the application and reports any error by its
/// display message rather than its debug form.
fn main() {
    if let Err(error) = run() {
        eprintln!("Error: {}", error);
        std::process::exit(1);
    }
}

/// The application flow:
/// 1. Parses command-line arguments
/// 2. Initializes logging
/// 3. Loads and validates configuration
/// 4. Opens the entry store (creating the directory on first use)
/// 5. Dispatches to the requested operation
///
/// # Errors
///
/// Returns configuration errors, store errors (directory or record I/O),
/// photo errors, and validation errors (bad date formats, entries without a
/// location).
fn run() -> AppResult<()> {
    let args = CliArgs::parse();

    // Logging goes to stderr so command output stays clean on stdout.
    let default_filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Starting waymark");

    let config = Config::load()?;
    config.validate()?;
    debug!("Configuration loaded: {:?}", config);

    let (mut store, report) = EntryStore::open(&config.entries_dir)?;
    debug!(
        "Store opened with {} entries ({} skipped)",
        report.loaded,
        report.skipped.len()
    );

    match args.command {
        Command::Add {
            title,
            notes,
            date,
            lat,
            lon,
            photo,
        } => {
            let request = AddRequest {
                title,
                notes,
                date: parse_date_arg(date.as_deref())?,
                coordinate: coordinate_from_args(lat, lon),
                photo,
            };
            ops::add_entry(&mut store, request)?;
        }
        Command::List => ops::list_entries(&store)?,
        Command::Show { id } => ops::show_entry(&store, id, &UnavailableGeocoder)?,
        Command::Edit {
            id,
            title,
            notes,
            date,
            lat,
            lon,
            photo,
        } => {
            let request = EditRequest {
                title,
                notes,
                date: parse_date_arg(date.as_deref())?,
                coordinate: coordinate_from_args(lat, lon),
                photo,
            };
            ops::edit_entry(&mut store, id, request)?;
        }
        Command::Delete { id } => ops::delete_entry(&mut store, id)?,
    }

    Ok(())
}

/// Parses an optional date argument, mapping parse failures to a validation
/// error naming the accepted formats.
fn parse_date_arg(date: Option<&str>) -> AppResult<Option<chrono::NaiveDate>> {
    date.map(|raw| {
        cli::parse_date(raw).map_err(|e| {
            AppError::Validation(format!(
                "Invalid date '{}': {}. Use YYYY-MM-DD or YYYYMMDD.",
                raw, e
            ))
        })
    })
    .transpose()
}

/// Combines the latitude/longitude arguments into a coordinate. Clap
/// guarantees the two flags come together or not at all.
fn coordinate_from_args(lat: Option<f64>, lon: Option<f64>) -> Option<Coordinate> {
    match (lat, lon) {
        (Some(latitude), Some(longitude)) => Some(Coordinate::new(latitude, longitude)),
        _ => None,
    }
}
