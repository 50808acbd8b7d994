//! Persistence layer for the note collection.
//!
//! # Responsibility
//! - Define the storage contract used by the repository layer.
//! - Keep file-format and filesystem details inside this boundary.
//!
//! # Invariants
//! - `save` replaces the whole persisted collection in one atomic step.
//! - `load` never fails: missing or unreadable state yields an empty
//!   collection (first-run behavior).
//! - Target paths are explicit constructor state, never process globals.

use crate::model::note::Note;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod json_file;
mod memory;

pub use json_file::{JsonFileStore, NOTES_FILE_NAME};
pub use memory::MemoryStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure writing the note collection to persistent storage.
#[derive(Debug)]
pub enum StoreError {
    /// Filesystem failure (disk full, permission denied, invalid path).
    Io(std::io::Error),
    /// Collection could not be encoded into the persisted format.
    Serialize(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "storage i/o failure: {err}"),
            Self::Serialize(err) => write!(f, "storage encode failure: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

/// Storage contract for the full note collection.
///
/// Implementations persist and recover the collection wholesale; there is
/// no partial or incremental write path.
pub trait NoteStore {
    /// Replaces the persisted collection with `notes`.
    ///
    /// Must be atomic from the caller's perspective: a failed write leaves
    /// the previously persisted collection intact.
    fn save(&mut self, notes: &[Note]) -> StoreResult<()>;

    /// Recovers the persisted collection.
    ///
    /// Absent, unreadable or unparsable state yields an empty collection;
    /// read failures never propagate to the caller.
    fn load(&self) -> Vec<Note>;
}
