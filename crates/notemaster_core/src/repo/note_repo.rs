//! Note repository over a pluggable storage backend.
//!
//! # Responsibility
//! - Hold the ordered note collection and expose upsert/remove/list/reload.
//! - Persist the full collection synchronously after every mutation.
//!
//! # Invariants
//! - Mutations apply in memory first; on a storage failure the in-memory
//!   collection remains the source of truth until the next successful save.
//! - A missing id is a semantic no-op for removal and lookup, not an error.
//! - `list` exposes no path to external mutation of repository state.

use crate::model::note::{Note, NoteId};
use crate::store::{NoteStore, StoreResult};
use log::info;

/// In-memory owner of the note collection, backed by a [`NoteStore`].
///
/// Create and update share one path: [`NoteRepository::upsert`] replaces the
/// note with a matching id or appends a new one. Every mutating call writes
/// the whole collection back to the store before returning, so the I/O cost
/// of a mutation grows with collection size. That ceiling is accepted for a
/// single-user local tool.
pub struct NoteRepository<S: NoteStore> {
    notes: Vec<Note>,
    store: S,
}

impl<S: NoteStore> NoteRepository<S> {
    /// Opens a repository, loading the persisted collection from `store`.
    ///
    /// A missing or unreadable persisted collection starts empty.
    pub fn open(store: S) -> Self {
        let notes = store.load();
        info!(
            "event=repo_open module=repo status=ok notes={}",
            notes.len()
        );
        Self { notes, store }
    }

    /// Inserts `note`, or replaces the existing note with the same id.
    ///
    /// Appends when the id is new, overwrites in place when it is already
    /// present (position in the collection is kept). Persists the full
    /// collection before returning.
    ///
    /// # Errors
    /// Returns the storage failure when the save does not complete. The
    /// in-memory mutation is already applied at that point and will be
    /// persisted by the next successful write.
    pub fn upsert(&mut self, note: Note) -> StoreResult<()> {
        let note_id = note.id;
        let replaced = match self.notes.iter_mut().find(|n| n.id == note_id) {
            Some(slot) => {
                *slot = note;
                true
            }
            None => {
                self.notes.push(note);
                false
            }
        };
        info!(
            "event=repo_upsert module=repo status=ok note_id={} replaced={} notes={}",
            note_id,
            replaced,
            self.notes.len()
        );
        self.store.save(&self.notes)
    }

    /// Removes the note with `id`, if present.
    ///
    /// Returns whether a note was removed. An absent id is a no-op, not an
    /// error; the collection is persisted either way.
    ///
    /// # Errors
    /// Returns the storage failure when the save does not complete.
    pub fn remove_by_id(&mut self, id: NoteId) -> StoreResult<bool> {
        let before = self.notes.len();
        self.notes.retain(|n| n.id != id);
        let removed = self.notes.len() < before;
        info!(
            "event=repo_remove module=repo status=ok note_id={} removed={} notes={}",
            id,
            removed,
            self.notes.len()
        );
        self.store.save(&self.notes)?;
        Ok(removed)
    }

    /// Looks up one note by id. A miss is `None`, never an error.
    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    /// Current collection in insertion order, as an immutable view.
    pub fn list(&self) -> &[Note] {
        &self.notes
    }

    /// Number of notes currently held.
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Discards the in-memory collection and reloads it from the store.
    ///
    /// Used to resynchronize after an external write to the persisted file.
    pub fn reload(&mut self) {
        self.notes = self.store.load();
        info!(
            "event=repo_reload module=repo status=ok notes={}",
            self.notes.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::NoteRepository;
    use crate::model::note::Note;
    use crate::store::MemoryStore;

    #[test]
    fn open_on_empty_store_starts_empty() {
        let repo = NoteRepository::open(MemoryStore::new());
        assert!(repo.is_empty());
        assert_eq!(repo.len(), 0);
    }

    #[test]
    fn get_returns_none_for_unknown_id() {
        let mut repo = NoteRepository::open(MemoryStore::new());
        repo.upsert(Note::new("a", "b")).unwrap();
        assert!(repo.get(uuid::Uuid::new_v4()).is_none());
    }
}
