//! Roster persistence port and document codec.
//!
//! # Responsibility
//! - Define the `RosterStorage` port that reads and writes the raw document.
//! - Own the JSON encoding of `RosterDocument` for every backend.
//! - Turn unreadable or malformed documents into a recoverable
//!   `CorruptDataError` plus an empty roster.
//!
//! # Invariants
//! - Loading never fails: missing documents start empty, corrupt documents
//!   fall back to empty and report the cause.
//! - Saving always rewrites the whole document.
//! - Encoded documents use 2-space indentation and keep non-ASCII text
//!   unescaped.

use crate::model::roster::RosterDocument;
use log::{error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

mod json_file;
mod memory;

pub use json_file::{JsonFileStorage, DEFAULT_DATA_FILE};
pub use memory::InMemoryStorage;

pub type StorageResult<T> = Result<T, StorageError>;

/// Transport-level failure while reading or writing the roster document.
#[derive(Debug)]
pub enum StorageError {
    Io(std::io::Error),
    Encode(serde_json::Error),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "roster storage I/O failed: {err}"),
            Self::Encode(err) => write!(f, "roster document could not be encoded: {err}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// Persisted roster document could not be used; the roster restarted empty.
#[derive(Debug)]
pub enum CorruptDataError {
    /// The document exists but could not be read.
    Unreadable(StorageError),
    /// The document was read but is not a valid roster.
    Malformed(serde_json::Error),
}

impl Display for CorruptDataError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unreadable(err) => write!(f, "roster data is unreadable: {err}"),
            Self::Malformed(err) => write!(f, "roster data is corrupt: {err}"),
        }
    }
}

impl Error for CorruptDataError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Unreadable(err) => Some(err),
            Self::Malformed(err) => Some(err),
        }
    }
}

/// Backing store for the serialized roster document.
///
/// Implementations move opaque text; encoding lives in this module so every
/// backend persists the same shape.
pub trait RosterStorage {
    /// Short backend label used in log events (`file`, `memory`).
    fn mode(&self) -> &'static str;
    /// Returns the stored document, or `None` when nothing was persisted yet.
    fn read_document(&self) -> StorageResult<Option<String>>;
    /// Replaces the stored document with `contents`.
    fn write_document(&mut self, contents: &str) -> StorageResult<()>;
}

/// Result of loading a roster from storage.
#[derive(Debug)]
pub struct LoadedRoster {
    pub document: RosterDocument,
    /// Set when the persisted document was discarded.
    pub corruption: Option<CorruptDataError>,
}

/// Loads the roster document, falling back to an empty roster.
///
/// # Side effects
/// - Emits `roster_load` logging events with duration and record counts.
pub fn load_roster<S: RosterStorage + ?Sized>(storage: &S) -> LoadedRoster {
    let started_at = Instant::now();
    let mode = storage.mode();

    let raw = match storage.read_document() {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            info!(
                "event=roster_load module=storage status=ok mode={} source=empty duration_ms={}",
                mode,
                started_at.elapsed().as_millis()
            );
            return LoadedRoster {
                document: RosterDocument::default(),
                corruption: None,
            };
        }
        Err(err) => {
            warn!(
                "event=roster_load module=storage status=fallback mode={} error_code=roster_unreadable error={}",
                mode, err
            );
            return LoadedRoster {
                document: RosterDocument::default(),
                corruption: Some(CorruptDataError::Unreadable(err)),
            };
        }
    };

    match decode_document(&raw) {
        Ok(document) => {
            info!(
                "event=roster_load module=storage status=ok mode={} pets={} adopters={} adoptions={} duration_ms={}",
                mode,
                document.pets.len(),
                document.adopters.len(),
                document.adoptions.len(),
                started_at.elapsed().as_millis()
            );
            LoadedRoster {
                document,
                corruption: None,
            }
        }
        Err(err) => {
            warn!(
                "event=roster_load module=storage status=fallback mode={} error_code=roster_malformed line={} column={}",
                mode,
                err.line(),
                err.column()
            );
            LoadedRoster {
                document: RosterDocument::default(),
                corruption: Some(CorruptDataError::Malformed(err)),
            }
        }
    }
}

/// Encodes and writes the full roster document.
///
/// # Errors
/// - `StorageError::Encode` when serialization fails.
/// - `StorageError::Io` when the backend write fails.
pub fn save_roster<S: RosterStorage + ?Sized>(
    storage: &mut S,
    document: &RosterDocument,
) -> StorageResult<()> {
    let started_at = Instant::now();
    let mode = storage.mode();
    let result = encode_document(document).and_then(|encoded| storage.write_document(&encoded));

    match &result {
        Ok(()) => info!(
            "event=roster_save module=storage status=ok mode={} pets={} adopters={} adoptions={} duration_ms={}",
            mode,
            document.pets.len(),
            document.adopters.len(),
            document.adoptions.len(),
            started_at.elapsed().as_millis()
        ),
        Err(err) => error!(
            "event=roster_save module=storage status=error mode={} duration_ms={} error_code=roster_write_failed error={}",
            mode,
            started_at.elapsed().as_millis(),
            err
        ),
    }

    result
}

/// Serializes a roster document in its persisted text form.
pub fn encode_document(document: &RosterDocument) -> StorageResult<String> {
    serde_json::to_string_pretty(document).map_err(StorageError::Encode)
}

/// Parses a persisted roster document.
pub fn decode_document(raw: &str) -> Result<RosterDocument, serde_json::Error> {
    serde_json::from_str(raw)
}

#[cfg(test)]
mod tests {
    use super::{decode_document, encode_document, load_roster, CorruptDataError, InMemoryStorage};
    use crate::model::roster::RosterDocument;

    #[test]
    fn empty_document_encodes_all_three_keys() {
        let encoded = encode_document(&RosterDocument::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&encoded).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "pets": [], "adopters": [], "adoptions": [] })
        );
    }

    #[test]
    fn decode_tolerates_missing_collections() {
        let document = decode_document(r#"{ "pets": [] }"#).unwrap();
        assert!(document.is_empty());
    }

    #[test]
    fn load_reports_malformed_document() {
        let storage = InMemoryStorage::with_document("{ not json");
        let loaded = load_roster(&storage);
        assert!(loaded.document.is_empty());
        assert!(matches!(
            loaded.corruption,
            Some(CorruptDataError::Malformed(_))
        ));
    }

    #[test]
    fn load_reports_wrong_shape_as_malformed() {
        let storage = InMemoryStorage::with_document(r#"{ "pets": "nope" }"#);
        let loaded = load_roster(&storage);
        assert!(loaded.document.is_empty());
        assert!(loaded.corruption.is_some());
    }

    #[test]
    fn load_of_missing_document_is_empty_without_corruption() {
        let loaded = load_roster(&InMemoryStorage::new());
        assert!(loaded.document.is_empty());
        assert!(loaded.corruption.is_none());
    }
}
