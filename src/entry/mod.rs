//! The entry model: a single journal record and its ordering rules.
//!
//! An [`Entry`] is a dated, located, optionally photographed journal record.
//! Entries are equal when their ids are equal; they are *ordered* by date,
//! newest first, with the id as a deterministic tie-break so that display
//! order is total and stable across loads.
//!
//! New entries are built through [`EntryDraft`], which applies the model's
//! defaults and enforces the one hard validation rule: an entry must have a
//! coordinate before it may be persisted.

use crate::constants::{DEFAULT_ENTRY_TITLE, SUBTITLE_DATE_FORMAT};
use crate::errors::{AppError, AppResult};
use crate::photo::Photo;
use chrono::{Local, NaiveDate};
use std::cmp::Ordering;
use uuid::Uuid;

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    /// Latitude in decimal degrees, north positive.
    pub latitude: f64,
    /// Longitude in decimal degrees, east positive.
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a coordinate from decimal degrees.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Coordinate {
            latitude,
            longitude,
        }
    }
}

/// A single journal entry.
///
/// The id is generated at creation and never changes; it doubles as the
/// record file name and as the entity equality key. All other fields may be
/// edited in place and re-saved through the store.
///
/// # Examples
///
/// ```
/// use waymark::entry::{Coordinate, EntryDraft};
/// use chrono::NaiveDate;
///
/// let entry = EntryDraft::new()
///     .title("Table Mountain")
///     .date(NaiveDate::from_ymd_opt(2016, 7, 11).unwrap())
///     .coordinate(Coordinate::new(-33.9628, 18.4098))
///     .build()
///     .unwrap();
///
/// assert_eq!(entry.subtitle(), "July 11, 2016");
/// ```
#[derive(Debug, Clone)]
pub struct Entry {
    id: Uuid,
    /// Entry title; never empty (defaults to "Untitled").
    pub title: String,
    /// Free-form notes body.
    pub notes: String,
    /// Calendar date of the entry; the sort key.
    pub date: NaiveDate,
    /// Where the entry was recorded.
    pub coordinate: Coordinate,
    /// Optional photo, already normalized for storage.
    pub photo: Option<Photo>,
}

impl Entry {
    /// Reconstructs an entry from its stored parts. Used by the record codec;
    /// new entries should go through [`EntryDraft`].
    pub(crate) fn from_parts(
        id: Uuid,
        title: String,
        notes: String,
        date: NaiveDate,
        coordinate: Coordinate,
        photo: Option<Photo>,
    ) -> Self {
        Entry {
            id,
            title: normalize_title(title),
            notes,
            date,
            coordinate,
            photo,
        }
    }

    /// The entry's unique, immutable identifier.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The derived display subtitle: the date formatted as "Month D, YYYY".
    ///
    /// Never stored; recomputed from `date` on demand.
    pub fn subtitle(&self) -> String {
        self.date.format(SUBTITLE_DATE_FORMAT).to_string()
    }

    /// Returns true if this entry's date is chronologically earlier than
    /// `other`'s.
    ///
    /// This is the model's ordering relation: for equal dates, neither entry
    /// precedes the other.
    pub fn precedes(&self, other: &Entry) -> bool {
        self.date < other.date
    }

    /// Total display ordering: date descending, then id ascending.
    ///
    /// The date comparison carries the meaning (newest first); the id
    /// comparison only breaks ties among same-date entries so that display
    /// order is deterministic across loads and insertion orders.
    pub fn display_order(&self, other: &Entry) -> Ordering {
        other
            .date
            .cmp(&self.date)
            .then_with(|| self.id.cmp(&other.id))
    }
}

impl PartialEq for Entry {
    /// Two entries are equal iff their ids match.
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Entry {}

/// Builder for new entries, applying defaults and validating at the editing
/// boundary.
///
/// Defaults: title "Untitled", empty notes, today's date. The coordinate has
/// no default — building a draft without one is an error, mirroring the rule
/// that an entry may not be persisted without a location.
#[derive(Debug, Default)]
pub struct EntryDraft {
    title: Option<String>,
    notes: Option<String>,
    date: Option<NaiveDate>,
    coordinate: Option<Coordinate>,
    photo: Option<Photo>,
}

impl EntryDraft {
    /// Creates an empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the title. An empty title falls back to the default at build time.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the notes body.
    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Sets the entry date. Defaults to today if never set.
    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Sets the coordinate. Required before `build` succeeds.
    pub fn coordinate(mut self, coordinate: Coordinate) -> Self {
        self.coordinate = Some(coordinate);
        self
    }

    /// Attaches an already-normalized photo.
    pub fn photo(mut self, photo: Photo) -> Self {
        self.photo = Some(photo);
        self
    }

    /// Builds the entry, generating a fresh id and applying defaults.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` if no coordinate has been set.
    pub fn build(self) -> AppResult<Entry> {
        let coordinate = self.coordinate.ok_or_else(|| {
            AppError::Validation("You cannot save an entry without a location.".to_string())
        })?;

        Ok(Entry {
            id: Uuid::new_v4(),
            title: normalize_title(self.title.unwrap_or_default()),
            notes: self.notes.unwrap_or_default(),
            date: self.date.unwrap_or_else(|| Local::now().date_naive()),
            coordinate,
            photo: self.photo,
        })
    }
}

/// Applies the title default: empty titles become "Untitled".
///
/// Applied both at the editing boundary and when decoding stored records, so
/// records written before the rule existed come back normalized too.
fn normalize_title(title: String) -> String {
    if title.is_empty() {
        DEFAULT_ENTRY_TITLE.to_string()
    } else {
        title
    }
}
