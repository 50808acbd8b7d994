//! FFI use-case API for the graphical shell.
//!
//! # Responsibility
//! - Expose the four repository operations (save/delete/list/reload) plus
//!   the note display projection to the shell.
//! - Keep error semantics simple: failures come back as response envelopes.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Repository access is serialized behind one process-wide lock; no two
//!   mutating calls interleave their storage writes.
//! - List items carry note ids; the shell selects by id, never by title.

use log::info;
use notemaster_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    JsonFileStore, Note, NoteBody, NoteId, NoteRepository,
};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use uuid::Uuid;

struct NotesState {
    data_dir: PathBuf,
    repo: NoteRepository<JsonFileStore>,
}

// One lock guards binding and every repository call, so mutations cannot
// interleave their whole-collection writes.
static NOTES: Mutex<Option<NotesState>> = Mutex::new(None);

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path for rolling log files.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Idempotent for the same `level + log_dir`; conflicting reconfiguration
///   returns an error message.
/// - Never panics; returns empty string on success.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), Path::new(log_dir.trim())) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Binds note storage to `<data_dir>/notes.json` and loads the collection.
///
/// # FFI contract
/// - Sync call; creates the data directory and reads the notes file.
/// - Idempotent for the same `data_dir`; a different directory after the
///   first bind returns an error message.
/// - Never panics; returns empty string on success.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_init(data_dir: String) -> String {
    let dir = PathBuf::from(data_dir.trim());
    if !dir.is_absolute() {
        return format!("data_dir must be an absolute path, got `{}`", dir.display());
    }

    let mut state = lock_notes();
    if let Some(bound) = state.as_ref() {
        if bound.data_dir == dir {
            return String::new();
        }
        return format!(
            "notes storage already bound to `{}`; refusing to switch to `{}`",
            bound.data_dir.display(),
            dir.display()
        );
    }

    if let Err(err) = std::fs::create_dir_all(&dir) {
        return format!(
            "failed to create data directory `{}`: {err}",
            dir.display()
        );
    }

    let repo = NoteRepository::open(JsonFileStore::in_dir(&dir));
    info!(
        "event=notes_init module=ffi status=ok data_dir={} notes={}",
        dir.display(),
        repo.len()
    );
    *state = Some(NotesState {
        data_dir: dir,
        repo,
    });
    String::new()
}

/// List item handed to the shell.
///
/// Carries the stable id so selection, edit and delete flows address notes
/// by identity even when titles collide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteView {
    /// Stable note id in string form.
    pub id: String,
    /// Display label; may repeat across notes.
    pub title: String,
    /// Machine-stable kind tag (`text`).
    pub kind: String,
    /// Kind-specific payload text.
    pub content: String,
    /// Read-only display projection from `Note::render`.
    pub rendered: String,
}

/// List response envelope for enumerate/resync flows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteListResponse {
    /// Current collection in insertion order (empty when unbound).
    pub items: Vec<NoteView>,
    /// Human-readable response message for diagnostics.
    pub message: String,
}

/// Generic action response envelope for mutating flows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteActionResponse {
    /// Whether the operation succeeded, including its storage write.
    pub ok: bool,
    /// Id of the affected note, when one was resolved.
    pub note_id: Option<String>,
    /// Human-readable response message for diagnostics/UI notices.
    pub message: String,
}

impl NoteActionResponse {
    fn success(message: impl Into<String>, note_id: NoteId) -> Self {
        Self {
            ok: true,
            note_id: Some(note_id.to_string()),
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            note_id: None,
            message: message.into(),
        }
    }
}

/// Returns the current note collection in insertion order.
///
/// # FFI contract
/// - Sync call over the in-memory collection; no storage I/O.
/// - Never panics; an unbound store yields an empty list with a message.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_list() -> NoteListResponse {
    let state = lock_notes();
    match state.as_ref() {
        Some(bound) => list_response(&bound.repo),
        None => NoteListResponse {
            items: Vec::new(),
            message: UNBOUND_MESSAGE.to_string(),
        },
    }
}

/// Reloads the collection wholesale from disk, then returns it.
///
/// # FFI contract
/// - Sync call with storage read I/O.
/// - Never panics; an unreadable file yields an empty collection.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_reload() -> NoteListResponse {
    let mut state = lock_notes();
    match state.as_mut() {
        Some(bound) => {
            bound.repo.reload();
            list_response(&bound.repo)
        }
        None => NoteListResponse {
            items: Vec::new(),
            message: UNBOUND_MESSAGE.to_string(),
        },
    }
}

/// Creates or updates one note.
///
/// Input semantics:
/// - `note_id = None` creates a fresh note with a new id.
/// - `note_id = Some(id)` fully replaces the note with that id, keeping it.
///
/// # FFI contract
/// - Sync call; performs the whole-collection storage write.
/// - Empty title/content or a malformed id yields `ok=false`.
/// - A storage write failure yields `ok=false` with the note kept in
///   memory until the next successful write.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn note_save(note_id: Option<String>, title: String, content: String) -> NoteActionResponse {
    if title.trim().is_empty() || content.is_empty() {
        return NoteActionResponse::failure("Title and content must not be empty.");
    }

    let note = match note_id {
        Some(raw) => match parse_note_id(&raw) {
            Ok(id) => Note::with_id(id, title, NoteBody::Text(content)),
            Err(message) => return NoteActionResponse::failure(message),
        },
        None => Note::new(title, content),
    };
    let id = note.id;

    let mut state = lock_notes();
    let Some(bound) = state.as_mut() else {
        return NoteActionResponse::failure(UNBOUND_MESSAGE);
    };
    match bound.repo.upsert(note) {
        Ok(()) => NoteActionResponse::success("Note saved.", id),
        Err(err) => NoteActionResponse {
            ok: false,
            note_id: Some(id.to_string()),
            message: format!("Note kept in memory but not written to disk: {err}"),
        },
    }
}

/// Deletes one note by id.
///
/// # FFI contract
/// - Sync call; performs the whole-collection storage write.
/// - An id with no matching note still succeeds (distinct message).
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn note_delete(note_id: String) -> NoteActionResponse {
    let id = match parse_note_id(&note_id) {
        Ok(id) => id,
        Err(message) => return NoteActionResponse::failure(message),
    };

    let mut state = lock_notes();
    let Some(bound) = state.as_mut() else {
        return NoteActionResponse::failure(UNBOUND_MESSAGE);
    };
    match bound.repo.remove_by_id(id) {
        Ok(true) => NoteActionResponse::success("Note deleted.", id),
        Ok(false) => NoteActionResponse::success("No note with that id.", id),
        Err(err) => NoteActionResponse {
            ok: false,
            note_id: Some(id.to_string()),
            message: format!("Delete kept in memory but not written to disk: {err}"),
        },
    }
}

const UNBOUND_MESSAGE: &str = "notes storage not initialized; call notes_init first";

fn lock_notes() -> std::sync::MutexGuard<'static, Option<NotesState>> {
    NOTES
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
}

fn list_response(repo: &NoteRepository<JsonFileStore>) -> NoteListResponse {
    let items: Vec<NoteView> = repo.list().iter().map(to_note_view).collect();
    let message = if items.is_empty() {
        "No notes yet.".to_string()
    } else {
        format!("{} note(s).", items.len())
    };
    NoteListResponse { items, message }
}

fn to_note_view(note: &Note) -> NoteView {
    NoteView {
        id: note.id.to_string(),
        title: note.title.clone(),
        kind: note.body.kind_tag().to_string(),
        content: note.content().to_string(),
        rendered: note.render(),
    }
}

fn parse_note_id(raw: &str) -> Result<NoteId, String> {
    Uuid::parse_str(raw.trim()).map_err(|err| format!("invalid note id `{raw}`: {err}"))
}
