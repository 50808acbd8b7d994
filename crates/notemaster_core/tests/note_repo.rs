use notemaster_core::{JsonFileStore, MemoryStore, Note, NoteBody, NoteRepository};
use uuid::Uuid;

#[test]
fn upsert_then_list_contains_exactly_one_matching_note() {
    let mut repo = NoteRepository::open(MemoryStore::new());

    let note = Note::new("Groceries", "milk, eggs");
    let id = note.id;
    repo.upsert(note).unwrap();

    let matching: Vec<&Note> = repo.list().iter().filter(|n| n.id == id).collect();
    assert_eq!(matching.len(), 1);
    assert!(!matching[0].id.is_nil());
    assert_eq!(matching[0].title, "Groceries");
    assert_eq!(matching[0].content(), "milk, eggs");
}

#[test]
fn upsert_twice_with_same_id_keeps_one_note_and_second_call_wins() {
    let mut repo = NoteRepository::open(MemoryStore::new());

    let first = Note::new("draft", "v1");
    let id = first.id;
    repo.upsert(first).unwrap();
    repo.upsert(Note::with_id(id, "draft", NoteBody::Text("v2".to_string())))
        .unwrap();

    assert_eq!(repo.len(), 1);
    let stored = repo.get(id).unwrap();
    assert_eq!(stored.content(), "v2");
}

#[test]
fn editing_content_preserves_id_and_title() {
    let mut repo = NoteRepository::open(MemoryStore::new());

    let note = Note::new("Todo", "original");
    let id = note.id;
    repo.upsert(note).unwrap();
    repo.upsert(Note::with_id(
        id,
        "Todo",
        NoteBody::Text("updated".to_string()),
    ))
    .unwrap();

    let stored = repo.get(id).unwrap();
    assert_eq!(stored.id, id);
    assert_eq!(stored.title, "Todo");
    assert_eq!(stored.content(), "updated");
}

#[test]
fn remove_by_id_on_absent_id_is_a_noop() {
    let mut repo = NoteRepository::open(MemoryStore::new());
    repo.upsert(Note::new("kept", "body")).unwrap();

    let removed = repo.remove_by_id(Uuid::new_v4()).unwrap();

    assert!(!removed);
    assert_eq!(repo.len(), 1);
    assert_eq!(repo.list()[0].title, "kept");
}

#[test]
fn duplicate_titles_stay_distinct_and_removal_targets_one_id() {
    let mut repo = NoteRepository::open(MemoryStore::new());

    let first = Note::new("Todo", "buy milk");
    let second = Note::new("Todo", "call home");
    let first_id = first.id;
    let second_id = second.id;
    repo.upsert(first).unwrap();
    repo.upsert(second).unwrap();
    assert_eq!(repo.len(), 2);

    let removed = repo.remove_by_id(first_id).unwrap();
    assert!(removed);

    assert_eq!(repo.len(), 1);
    let survivor = repo.get(second_id).unwrap();
    assert_eq!(survivor.title, "Todo");
    assert_eq!(survivor.content(), "call home");
    assert!(repo.get(first_id).is_none());
}

#[test]
fn list_preserves_insertion_order_across_replacement() {
    let mut repo = NoteRepository::open(MemoryStore::new());

    let a = Note::new("a", "1");
    let b = Note::new("b", "2");
    let c = Note::new("c", "3");
    let b_id = b.id;
    repo.upsert(a).unwrap();
    repo.upsert(b).unwrap();
    repo.upsert(c).unwrap();

    repo.upsert(Note::with_id(b_id, "b", NoteBody::Text("2'".to_string())))
        .unwrap();

    let titles: Vec<&str> = repo.list().iter().map(|n| n.title.as_str()).collect();
    assert_eq!(titles, vec!["a", "b", "c"]);
    assert_eq!(repo.list()[1].content(), "2'");
}

#[test]
fn mutations_survive_reopen_from_the_same_file() {
    let dir = tempfile::tempdir().unwrap();

    let (kept_id, removed_id) = {
        let mut repo = NoteRepository::open(JsonFileStore::in_dir(dir.path()));
        let kept = Note::new("kept", "stays");
        let removed = Note::new("removed", "goes");
        let ids = (kept.id, removed.id);
        repo.upsert(kept).unwrap();
        repo.upsert(removed).unwrap();
        repo.remove_by_id(ids.1).unwrap();
        ids
    };

    let reopened = NoteRepository::open(JsonFileStore::in_dir(dir.path()));
    assert_eq!(reopened.len(), 1);
    let note = reopened.get(kept_id).unwrap();
    assert_eq!(note.title, "kept");
    assert_eq!(note.content(), "stays");
    assert!(reopened.get(removed_id).is_none());
}

#[test]
fn reload_resyncs_after_an_external_write() {
    let dir = tempfile::tempdir().unwrap();
    let mut repo = NoteRepository::open(JsonFileStore::in_dir(dir.path()));
    repo.upsert(Note::new("mine", "local")).unwrap();

    // Another writer replaces the persisted collection behind our back.
    let mut external = NoteRepository::open(JsonFileStore::in_dir(dir.path()));
    let external_note = Note::new("theirs", "external");
    let external_id = external_note.id;
    external.upsert(external_note).unwrap();

    repo.reload();
    assert_eq!(repo.len(), 2);
    assert!(repo.get(external_id).is_some());
}

#[test]
fn write_failure_keeps_the_in_memory_collection() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing_subdir").join("notes.json");
    let mut repo = NoteRepository::open(JsonFileStore::new(path));

    let note = Note::new("unsaved", "still visible");
    let id = note.id;
    repo.upsert(note).unwrap_err();

    assert_eq!(repo.len(), 1);
    assert_eq!(repo.get(id).unwrap().title, "unsaved");
}

#[test]
fn open_on_first_run_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let repo = NoteRepository::open(JsonFileStore::in_dir(dir.path()));
    assert!(repo.is_empty());
}
