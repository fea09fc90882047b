//! Error handling utilities for the waymark application.
//!
//! This module provides the central error type `AppError` which represents all
//! possible error conditions that might occur in the application, as well as the
//! convenience type alias `AppResult` for functions that can return these errors.
//!
//! Failure domains get their own enums (`RecordError`, `PhotoError`,
//! `StoreError`, `GeocodeError`) so callers can match on the class of failure
//! they care about; everything converts into `AppError` at the top.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Represents failures to encode or decode a single on-disk entry record.
///
/// A `RecordError` is always scoped to one record file. During a store load,
/// records that fail to decode are skipped and reported; they never abort the
/// load of the remaining records.
///
/// # Examples
///
/// ```
/// use waymark::errors::RecordError;
///
/// let error = RecordError::UnsupportedSchema { found: 9, supported: 1 };
/// assert!(format!("{}", error).contains("schema version 9"));
/// ```
#[derive(Debug, Error)]
pub enum RecordError {
    /// The record's JSON could not be parsed or did not match the schema.
    #[error("Malformed entry record: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The record declares a schema version newer than this build understands.
    #[error(
        "Entry record uses schema version {found}, but this build supports up to version \
         {supported}. Upgrade waymark to read this record."
    )]
    UnsupportedSchema {
        /// Version number found in the record.
        found: u32,
        /// Newest version this build can read.
        supported: u32,
    },

    /// The embedded photo payload could not be decoded from base64.
    #[error("Invalid photo payload in entry record: {0}")]
    PhotoPayload(#[from] base64::DecodeError),

    /// The embedded photo bytes decoded but were not a readable image.
    #[error("Unreadable photo image in entry record: {0}")]
    PhotoImage(#[from] image::ImageError),
}

/// Why a record file was skipped during a store load.
///
/// Skips are non-fatal: the load continues with the remaining records and
/// reports what it left behind.
#[derive(Debug, Error)]
pub enum SkipReason {
    /// The file could not be read at all.
    #[error("unreadable file: {0}")]
    Io(#[from] io::Error),

    /// The file was read but its contents were not a usable record.
    #[error(transparent)]
    Record(#[from] RecordError),
}

/// Represents failures while normalizing a photo for storage.
#[derive(Debug, Error)]
pub enum PhotoError {
    /// The input bytes were not a decodable image in any supported format.
    #[error("Could not decode image: {0}. Supported formats include PNG and JPEG.")]
    Decode(#[source] image::ImageError),

    /// Re-encoding the normalized image failed.
    #[error("Could not encode normalized image: {0}")]
    Encode(#[source] image::ImageError),

    /// The image has a zero-length side and cannot be rescaled.
    #[error("Image has a zero-length side ({width}x{height}) and cannot be rescaled")]
    EmptyImage {
        /// Input width in pixels.
        width: u32,
        /// Input height in pixels.
        height: u32,
    },
}

/// Represents failures of entry store operations.
///
/// Store operations distinguish between problems with the store directory
/// (which affect every record) and problems with a single entry.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store directory could not be created or enumerated.
    #[error(
        "Could not access entries directory {path}: {source}. Check that the location is \
         writable, or point WAYMARK_DIR somewhere else."
    )]
    Directory {
        /// The directory that failed.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Reading or writing a single record file failed.
    #[error("Could not {action} entry record {path}: {source}")]
    RecordIo {
        /// What was being attempted ("read", "write", "delete").
        action: &'static str,
        /// The record file involved.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Encoding an entry into its record form failed.
    #[error("Could not encode entry: {0}")]
    Encode(#[source] serde_json::Error),

    /// The store was asked to operate on an id it has never loaded or added.
    #[error("No entry with id {id} exists in the store")]
    UnknownEntry {
        /// The id that was requested.
        id: String,
    },
}

/// Represents failures of reverse geocoding lookups.
#[derive(Debug, Error)]
pub enum GeocodeError {
    /// The lookup ran but found no place name for the coordinate.
    #[error("No place name found for coordinate")]
    NotFound,

    /// The geocoding backend was unreachable or failed outright.
    #[error("Geocoding lookup failed: {0}")]
    Lookup(String),
}

/// The central error type for the waymark application.
///
/// All errors that can occur within the application are represented
/// as variants of this enum, either directly or wrapped from the
/// domain-specific error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration errors (loading or validating configuration).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation errors raised at the editing boundary, before the store
    /// is touched (e.g. an entry draft with no coordinate).
    #[error("{0}")]
    Validation(String),

    /// I/O errors outside the store (e.g. reading a photo file to attach).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Errors from the entry store.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Errors from photo normalization.
    #[error("Photo error: {0}")]
    Photo(#[from] PhotoError),

    /// Errors from reverse geocoding.
    #[error("Geocoding error: {0}")]
    Geocode(#[from] GeocodeError),
}

/// A specialized Result type for waymark operations.
///
/// This type alias simplifies function signatures throughout the application.
pub type AppResult<T> = Result<T, AppError>;
