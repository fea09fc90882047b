//! The entry store: durable CRUD over per-record files plus the ordered
//! in-memory collection.
//!
//! An [`EntryStore`] owns its directory and a collection of entries kept
//! sorted in display order (newest first, id tie-break). Every mutation
//! writes through to disk first and then updates the collection, so after
//! any successful operation the two agree.
//!
//! One file per entry, named `<id>.json`, inside the store directory.
//! Loading skips records it cannot read and reports them in a
//! [`LoadReport`] instead of failing the whole load.

use crate::constants::RECORD_FILE_EXTENSION;
#[cfg(unix)]
use crate::constants::DEFAULT_DIR_PERMISSIONS;
use crate::entry::Entry;
use crate::errors::{SkipReason, StoreError};
use crate::record;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use uuid::Uuid;

/// Outcome of a store load: how many records loaded, and which files were
/// skipped and why.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Number of records successfully loaded.
    pub loaded: usize,
    /// Files that were present but could not be loaded.
    pub skipped: Vec<SkippedRecord>,
}

/// One record file the loader had to leave behind.
#[derive(Debug)]
pub struct SkippedRecord {
    /// Path of the file that was skipped.
    pub path: PathBuf,
    /// Why it could not be loaded.
    pub reason: SkipReason,
}

/// Durable store of journal entries.
///
/// # Examples
///
/// ```no_run
/// use waymark::entry::{Coordinate, EntryDraft};
/// use waymark::store::EntryStore;
///
/// fn demo() -> waymark::AppResult<()> {
///     let (mut store, report) = EntryStore::open("/home/me/Documents/waymark")?;
///     for skipped in &report.skipped {
///         eprintln!("skipped {}: {}", skipped.path.display(), skipped.reason);
///     }
///
///     let entry = EntryDraft::new()
///         .title("Harbour walk")
///         .coordinate(Coordinate::new(-33.906, 18.42))
///         .build()?;
///     store.add(entry)?;
///     Ok(())
/// }
/// ```
pub struct EntryStore {
    dir: PathBuf,
    /// Invariant: sorted by `Entry::display_order` at all times.
    entries: Vec<Entry>,
}

impl EntryStore {
    /// Opens the store rooted at `dir`, creating the directory if needed and
    /// loading every readable record.
    ///
    /// Records that fail to read or decode are skipped and reported in the
    /// returned [`LoadReport`]; the collection always comes back sorted in
    /// display order regardless of directory enumeration order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Directory` if the directory cannot be created or
    /// enumerated.
    pub fn open(dir: impl Into<PathBuf>) -> Result<(Self, LoadReport), StoreError> {
        let dir = dir.into();

        if !dir.exists() {
            fs::create_dir_all(&dir).map_err(|source| StoreError::Directory {
                path: dir.clone(),
                source,
            })?;

            // Entries are personal; keep the directory owner-only.
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                let permissions = fs::Permissions::from_mode(DEFAULT_DIR_PERMISSIONS);
                fs::set_permissions(&dir, permissions).map_err(|source| {
                    StoreError::Directory {
                        path: dir.clone(),
                        source,
                    }
                })?;
            }
            debug!("Created entries directory {:?}", dir);
        }

        let mut store = EntryStore {
            dir: dir.clone(),
            entries: Vec::new(),
        };
        let mut report = LoadReport::default();

        let listing = fs::read_dir(&dir).map_err(|source| StoreError::Directory {
            path: dir.clone(),
            source,
        })?;

        for dir_entry in listing {
            let path = match dir_entry {
                Ok(d) => d.path(),
                Err(source) => {
                    report.skipped.push(SkippedRecord {
                        path: dir.clone(),
                        reason: SkipReason::Io(source),
                    });
                    continue;
                }
            };
            if !path.is_file() {
                continue;
            }

            match load_record(&path) {
                Ok(entry) => store.entries.push(entry),
                Err(reason) => {
                    warn!("Skipping unreadable entry record {:?}: {}", path, reason);
                    report.skipped.push(SkippedRecord { path, reason });
                }
            }
        }

        store.entries.sort_by(|a, b| a.display_order(b));
        report.loaded = store.entries.len();
        debug!(
            "Loaded {} entries ({} skipped) from {:?}",
            report.loaded,
            report.skipped.len(),
            dir
        );

        Ok((store, report))
    }

    /// Adds a new entry: writes its record, then inserts it at its display
    /// position found by binary search (no full re-sort).
    ///
    /// Saving is overwrite-idempotent: re-adding an entry with an id already
    /// on disk simply rewrites that file.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Encode` or `StoreError::RecordIo` if the record
    /// cannot be written.
    pub fn add(&mut self, entry: Entry) -> Result<usize, StoreError> {
        debug_assert!(
            self.index_of(entry.id()).is_none(),
            "add called with an id already in the store"
        );

        self.persist(&entry)?;

        let index = self.insertion_index(&entry);
        self.entries.insert(index, entry);
        debug!("Added entry at display index {}", index);
        Ok(index)
    }

    /// Overwrites an existing entry's record and repositions it if its date
    /// changed, returning its (possibly new) display index.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::UnknownEntry` if no entry with this id is in the
    /// store, or a write error from persisting the record.
    pub fn update(&mut self, entry: Entry) -> Result<usize, StoreError> {
        let current = self
            .index_of(entry.id())
            .ok_or_else(|| StoreError::UnknownEntry {
                id: entry.id().to_string(),
            })?;

        self.persist(&entry)?;

        self.entries.remove(current);
        let index = self.insertion_index(&entry);
        self.entries.insert(index, entry);
        if index != current {
            debug!("Entry moved from display index {} to {}", current, index);
        }
        Ok(index)
    }

    /// Deletes an entry by id, removing its record file and its collection
    /// element, and returns the removed entry.
    ///
    /// A record file that is already gone counts as deleted: the requested
    /// end state holds. An id the store does not know is an error.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::UnknownEntry` for an unknown id, or
    /// `StoreError::RecordIo` if the file exists but cannot be removed.
    pub fn delete(&mut self, id: Uuid) -> Result<Entry, StoreError> {
        let index = self
            .index_of(id)
            .ok_or_else(|| StoreError::UnknownEntry { id: id.to_string() })?;

        let path = self.record_path(id);
        match fs::remove_file(&path) {
            Ok(()) => {}
            Err(source) if source.kind() == io::ErrorKind::NotFound => {
                debug!("Record file {:?} was already absent", path);
            }
            Err(source) => {
                return Err(StoreError::RecordIo {
                    action: "delete",
                    path,
                    source,
                });
            }
        }

        Ok(self.entries.remove(index))
    }

    /// Looks up an entry by id.
    pub fn get(&self, id: Uuid) -> Option<&Entry> {
        self.index_of(id).map(|index| &self.entries[index])
    }

    /// The entries in display order (newest first).
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Number of entries in the store.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The directory this store reads and writes.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Finds the display index at which `entry` belongs, by binary search
    /// over the sorted collection.
    ///
    /// Display order is total (date descending, id ascending), so the search
    /// lands on exactly one correct slot: index 0 for an entry newer than
    /// everything, `len()` for one older than everything, and the
    /// deterministic tie position among equal dates.
    pub fn insertion_index(&self, entry: &Entry) -> usize {
        match self
            .entries
            .binary_search_by(|probe| probe.display_order(entry))
        {
            Ok(index) | Err(index) => index,
        }
    }

    fn index_of(&self, id: Uuid) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id() == id)
    }

    fn record_path(&self, id: Uuid) -> PathBuf {
        self.dir.join(format!("{}.{}", id, RECORD_FILE_EXTENSION))
    }

    fn persist(&self, entry: &Entry) -> Result<(), StoreError> {
        let bytes = record::encode(entry).map_err(StoreError::Encode)?;
        let path = self.record_path(entry.id());
        fs::write(&path, bytes).map_err(|source| StoreError::RecordIo {
            action: "write",
            path,
            source,
        })
    }
}

fn load_record(path: &Path) -> Result<Entry, SkipReason> {
    let bytes = fs::read(path)?;
    Ok(record::decode(&bytes)?)
}
