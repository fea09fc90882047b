//! Constants used throughout the application.
//!
//! This module contains all constants used in the Waymark application,
//! organized into logical groups. Having constants centralized makes them
//! easier to find, modify, and reference consistently.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "waymark";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str =
    "A geotagged journal: dated, located, optionally photographed entries";

// Configuration Keys & Environment Variables
/// Environment variable for specifying the Waymark entries directory.
pub const ENV_VAR_WAYMARK_DIR: &str = "WAYMARK_DIR";
/// Standard environment variable for the user's home directory.
pub const ENV_VAR_HOME: &str = "HOME";
/// Default sub-directory for entry records within the user's home directory.
pub const DEFAULT_ENTRIES_SUBDIR: &str = "Documents/waymark";

// Entry Model Defaults
/// Title applied when an entry is created or decoded with an empty title.
pub const DEFAULT_ENTRY_TITLE: &str = "Untitled";
/// Place name rendered when reverse geocoding fails or is unavailable.
pub const UNKNOWN_PLACE: &str = "Unknown";

// Record Format
/// Current on-disk record schema version. Records with a newer version are
/// skipped on load rather than misread.
pub const RECORD_SCHEMA_VERSION: u32 = 1;
/// File extension for entry records.
pub const RECORD_FILE_EXTENSION: &str = "json";

// Photo Normalization
/// Target length in pixels of a stored photo's shorter side. Photos are
/// rescaled (in either direction) so the shorter side equals this value.
pub const PHOTO_SHORT_EDGE: u32 = 264;

// Date/Time Logic
/// Date format string for ISO date format (YYYY-MM-DD).
pub const DATE_FORMAT_ISO: &str = "%Y-%m-%d";
/// Date format string for compact date format (YYYYMMDD).
pub const DATE_FORMAT_COMPACT: &str = "%Y%m%d";
/// Date format used for the derived entry subtitle, e.g. "July 11, 2016".
pub const SUBTITLE_DATE_FORMAT: &str = "%B %-d, %Y";

// File System Parameters
/// Default POSIX permissions for the entries directory (owner read/write/execute).
#[cfg(unix)]
pub const DEFAULT_DIR_PERMISSIONS: u32 = 0o700;
