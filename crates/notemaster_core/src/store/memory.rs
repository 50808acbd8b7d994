//! In-memory note storage.
//!
//! # Responsibility
//! - Provide a [`NoteStore`] with no filesystem footprint for tests and
//!   ephemeral sessions.
//!
//! # Invariants
//! - `load` returns exactly what the last `save` persisted.

use super::{NoteStore, StoreResult};
use crate::model::note::Note;

/// Volatile [`NoteStore`] keeping the persisted collection in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    persisted: Vec<Note>,
}

impl MemoryStore {
    /// Creates an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl NoteStore for MemoryStore {
    fn save(&mut self, notes: &[Note]) -> StoreResult<()> {
        self.persisted = notes.to_vec();
        Ok(())
    }

    fn load(&self) -> Vec<Note> {
        self.persisted.clone()
    }
}
