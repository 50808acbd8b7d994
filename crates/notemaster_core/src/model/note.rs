//! Note domain model.
//!
//! # Responsibility
//! - Define the note record shared by repository, storage and shell layers.
//! - Provide the display projection (`render`) for read-only views.
//!
//! # Invariants
//! - `id` is stable for the lifetime of a note and never reused.
//! - `render` is a pure function of current note state.
//! - Titles carry no uniqueness guarantee; `id` is the only lookup key.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for every note.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type NoteId = Uuid;

/// Kind-specific payload of a note.
///
/// A closed sum type rather than an open hierarchy: adding a checklist or
/// sketch kind later means adding a variant here, with repository and
/// storage contracts unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "content", rename_all = "snake_case")]
pub enum NoteBody {
    /// Free-form plain text body.
    Text(String),
}

impl NoteBody {
    /// Human-readable label for this kind, used by `Note::render`.
    pub fn kind_label(&self) -> &'static str {
        match self {
            Self::Text(_) => "Text Note",
        }
    }

    /// Machine-stable kind tag matching the serialized form.
    pub fn kind_tag(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
        }
    }

    /// Payload text of this body.
    pub fn content(&self) -> &str {
        match self {
            Self::Text(text) => text.as_str(),
        }
    }
}

/// One user-authored note record.
///
/// The body is flattened into the serialized shape, so a persisted note
/// reads as `{"id", "title", "kind", "content"}` on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Stable id assigned once at creation. Never regenerated by edits.
    pub id: NoteId,
    /// Display label. Not unique across the collection.
    pub title: String,
    /// Kind tag plus kind-specific payload.
    #[serde(flatten)]
    pub body: NoteBody,
}

impl Note {
    /// Creates a new text note with a generated stable id.
    ///
    /// Construction always succeeds; callers validate non-emptiness of
    /// title and content before invoking.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), title, NoteBody::Text(content.into()))
    }

    /// Creates a note with a caller-provided stable id.
    ///
    /// Used by update paths where identity was issued earlier.
    pub fn with_id(id: NoteId, title: impl Into<String>, body: NoteBody) -> Self {
        Self {
            id,
            title: title.into(),
            body,
        }
    }

    /// Payload text of the note body.
    pub fn content(&self) -> &str {
        self.body.content()
    }

    /// Renders the note for read-only display.
    ///
    /// Fixed shape: kind label, title, then content, with a newline between
    /// title and content. No side effects.
    pub fn render(&self) -> String {
        format!(
            "{} - Title: {}\nContent: {}",
            self.body.kind_label(),
            self.title,
            self.body.content()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{Note, NoteBody};

    #[test]
    fn kind_labels_are_stable() {
        let body = NoteBody::Text("x".to_string());
        assert_eq!(body.kind_label(), "Text Note");
        assert_eq!(body.kind_tag(), "text");
    }

    #[test]
    fn render_joins_label_title_and_content() {
        let note = Note::new("Groceries", "milk, eggs");
        assert_eq!(
            note.render(),
            "Text Note - Title: Groceries\nContent: milk, eggs"
        );
    }
}
