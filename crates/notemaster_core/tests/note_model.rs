use notemaster_core::{Note, NoteBody};
use uuid::Uuid;

#[test]
fn new_note_gets_fresh_id_and_given_fields() {
    let note = Note::new("Groceries", "milk, eggs");

    assert!(!note.id.is_nil());
    assert_eq!(note.title, "Groceries");
    assert_eq!(note.content(), "milk, eggs");
    assert_eq!(note.body, NoteBody::Text("milk, eggs".to_string()));
}

#[test]
fn identical_titles_still_get_distinct_ids() {
    let first = Note::new("Todo", "one");
    let second = Note::new("Todo", "two");

    assert_ne!(first.id, second.id);
    assert_eq!(first.title, second.title);
}

#[test]
fn title_mutation_keeps_the_id() {
    let mut note = Note::new("draft", "body");
    let id = note.id;

    note.title = "final".to_string();
    assert_eq!(note.id, id);
    assert_eq!(note.title, "final");
}

#[test]
fn render_is_label_then_title_then_content() {
    let note = Note::new("Groceries", "milk, eggs");

    assert_eq!(
        note.render(),
        "Text Note - Title: Groceries\nContent: milk, eggs"
    );
}

#[test]
fn serialization_uses_expected_wire_fields() {
    let note_id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let note = Note::with_id(note_id, "Todo", NoteBody::Text("ship it".to_string()));

    let json = serde_json::to_value(&note).unwrap();
    assert_eq!(json["id"], note_id.to_string());
    assert_eq!(json["title"], "Todo");
    assert_eq!(json["kind"], "text");
    assert_eq!(json["content"], "ship it");

    let decoded: Note = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, note);
}
