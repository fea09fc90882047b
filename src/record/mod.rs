//! The versioned on-disk record format for entries.
//!
//! Each entry is stored as one JSON document carrying an explicit `schema`
//! version number, so the format has an evolution path: a future version can
//! migrate old records, and an old build refuses records from the future
//! instead of misreading them.
//!
//! Schema version 1 layout:
//!
//! ```json
//! {
//!   "schema": 1,
//!   "id": "5d3f...",
//!   "title": "Table Mountain",
//!   "notes": "...",
//!   "date": "2016-07-11",
//!   "latitude": -33.9628,
//!   "longitude": 18.4098,
//!   "photo": "<base64 PNG, optional>"
//! }
//! ```

use crate::constants::RECORD_SCHEMA_VERSION;
use crate::entry::{Coordinate, Entry};
use crate::errors::RecordError;
use crate::photo::Photo;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Schema version 1 of the entry record.
#[derive(Debug, Serialize, Deserialize)]
struct EntryRecordV1 {
    schema: u32,
    id: Uuid,
    title: String,
    notes: String,
    date: NaiveDate,
    latitude: f64,
    longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    photo: Option<String>,
}

/// Minimal view of a record used to read the schema version before
/// committing to a full parse.
#[derive(Debug, Deserialize)]
struct SchemaProbe {
    schema: u32,
}

/// Encodes an entry into its on-disk record bytes.
///
/// # Errors
///
/// Returns the underlying `serde_json::Error` if serialization fails.
pub fn encode(entry: &Entry) -> Result<Vec<u8>, serde_json::Error> {
    let record = EntryRecordV1 {
        schema: RECORD_SCHEMA_VERSION,
        id: entry.id(),
        title: entry.title.clone(),
        notes: entry.notes.clone(),
        date: entry.date,
        latitude: entry.coordinate.latitude,
        longitude: entry.coordinate.longitude,
        photo: entry
            .photo
            .as_ref()
            .map(|photo| BASE64.encode(photo.as_png_bytes())),
    };
    serde_json::to_vec_pretty(&record)
}

/// Decodes record bytes back into an entry.
///
/// Records declaring a schema version newer than
/// [`RECORD_SCHEMA_VERSION`] are rejected with
/// `RecordError::UnsupportedSchema`; a store load reports and skips them
/// like any other undecodable record.
///
/// # Errors
///
/// Returns a `RecordError` describing why the record could not be read.
pub fn decode(bytes: &[u8]) -> Result<Entry, RecordError> {
    let probe: SchemaProbe = serde_json::from_slice(bytes)?;
    if probe.schema > RECORD_SCHEMA_VERSION {
        return Err(RecordError::UnsupportedSchema {
            found: probe.schema,
            supported: RECORD_SCHEMA_VERSION,
        });
    }

    let record: EntryRecordV1 = serde_json::from_slice(bytes)?;

    let photo = match record.photo {
        Some(encoded) => {
            let bytes = BASE64.decode(encoded)?;
            Some(Photo::from_stored(bytes)?)
        }
        None => None,
    };

    Ok(Entry::from_parts(
        record.id,
        record.title,
        record.notes,
        record.date,
        Coordinate::new(record.latitude, record.longitude),
        photo,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::EntryDraft;
    use image::{DynamicImage, ImageFormat};
    use std::io::Cursor;

    fn sample_entry() -> Entry {
        EntryDraft::new()
            .title("Lion's Head")
            .notes("Hiked up before sunrise.")
            .date(NaiveDate::from_ymd_opt(2016, 7, 12).unwrap())
            .coordinate(Coordinate::new(-33.935, 18.389))
            .build()
            .unwrap()
    }

    fn sample_photo() -> Photo {
        let img = DynamicImage::new_rgb8(400, 800);
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        Photo::from_bytes(&bytes).unwrap()
    }

    #[test]
    fn test_round_trip_preserves_fields() {
        let entry = sample_entry();
        let decoded = decode(&encode(&entry).unwrap()).unwrap();

        assert_eq!(decoded.id(), entry.id());
        assert_eq!(decoded.title, entry.title);
        assert_eq!(decoded.notes, entry.notes);
        assert_eq!(decoded.date, entry.date);
        assert_eq!(decoded.coordinate, entry.coordinate);
        assert!(decoded.photo.is_none());
    }

    #[test]
    fn test_round_trip_preserves_photo() {
        let mut entry = sample_entry();
        entry.photo = Some(sample_photo());

        let decoded = decode(&encode(&entry).unwrap()).unwrap();
        let photo = decoded.photo.expect("photo should survive the round trip");
        assert_eq!(photo.dimensions(), (264, 528));
        assert_eq!(Some(&photo), entry.photo.as_ref());
    }

    #[test]
    fn test_decode_redefaults_empty_title() {
        // Records written before the title rule may carry "".
        let json = r#"{
            "schema": 1,
            "id": "5d3f0af1-9d9c-4b11-a2f5-3b7a5ed7c921",
            "title": "",
            "notes": "",
            "date": "2020-01-01",
            "latitude": 0.0,
            "longitude": 0.0
        }"#;
        let entry = decode(json.as_bytes()).unwrap();
        assert_eq!(entry.title, "Untitled");
    }

    #[test]
    fn test_decode_rejects_newer_schema() {
        let json = r#"{"schema": 2, "unknown_field": true}"#;
        let result = decode(json.as_bytes());
        assert!(matches!(
            result,
            Err(RecordError::UnsupportedSchema {
                found: 2,
                supported: 1
            })
        ));
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(matches!(
            decode(b"not json"),
            Err(RecordError::Malformed(_))
        ));
    }

    #[test]
    fn test_decode_rejects_bad_photo_payload() {
        let json = r#"{
            "schema": 1,
            "id": "5d3f0af1-9d9c-4b11-a2f5-3b7a5ed7c921",
            "title": "x",
            "notes": "",
            "date": "2020-01-01",
            "latitude": 0.0,
            "longitude": 0.0,
            "photo": "@@not-base64@@"
        }"#;
        assert!(matches!(
            decode(json.as_bytes()),
            Err(RecordError::PhotoPayload(_))
        ));
    }

    #[test]
    fn test_decode_rejects_non_image_photo_bytes() {
        let payload = BASE64.encode(b"plainly not a PNG");
        let json = format!(
            r#"{{
                "schema": 1,
                "id": "5d3f0af1-9d9c-4b11-a2f5-3b7a5ed7c921",
                "title": "x",
                "notes": "",
                "date": "2020-01-01",
                "latitude": 0.0,
                "longitude": 0.0,
                "photo": "{payload}"
            }}"#
        );
        assert!(matches!(
            decode(json.as_bytes()),
            Err(RecordError::PhotoImage(_))
        ));
    }
}
