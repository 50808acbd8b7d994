//! Repository layer owning the in-memory note collection.
//!
//! # Responsibility
//! - Mediate every read and mutation of the note collection.
//! - Delegate each mutation to an immediate whole-collection save.
//!
//! # Invariants
//! - Insertion order of the collection is preserved.
//! - Id uniqueness holds by construction; there is no title uniqueness.
//! - After a successful mutating call, memory and storage agree.

pub mod note_repo;
