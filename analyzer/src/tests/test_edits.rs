use crate::{
    ApplyResult, Document, DocumentEdits, EditError, Selection, Span, TextEdit,
    apply_text_edits_with_cursor,
};

#[test]
fn replace_word_places_caret_after_insert() {
    let mut doc = Document::new("hello world");
    let mut edits = DocumentEdits::new();
    edits.delete(6, 11);
    edits.insert(6, "rust");
    assert_eq!(edits.apply(&mut doc), Ok(Some(Selection::caret(10))));
    assert_eq!(doc.text(), "hello rust");
}

#[test]
fn explicit_cursor_is_rebased() {
    let mut doc = Document::new("abc");
    let mut edits = DocumentEdits::new();
    edits.insert(0, "XX");
    edits.move_cursor_to(2);
    assert_eq!(edits.apply(&mut doc), Ok(Some(Selection::caret(4))));
    assert_eq!(doc.text(), "XXabc");
}

#[test]
fn explicit_cursor_survives_later_inserts() {
    let doc = Document::new("abc");
    let mut edits = DocumentEdits::new();
    edits.move_cursor_to(1);
    edits.insert(3, "!");
    assert_eq!(
        edits.preview(&doc),
        Ok(ApplyResult {
            text: "abc!".to_string(),
            cursor: Some(1),
        })
    );
}

#[test]
fn cursor_inside_deleted_range_snaps_to_start() {
    let mut doc = Document::new("abcdef");
    let mut edits = DocumentEdits::new();
    edits.delete(1, 4);
    edits.move_cursor_to(2);
    assert_eq!(edits.apply(&mut doc), Ok(Some(Selection::caret(1))));
    assert_eq!(doc.text(), "aef");
}

#[test]
fn overlapping_edits_leave_document_unchanged() {
    let mut doc = Document::new("abcdef");
    let mut edits = DocumentEdits::new();
    edits.delete(1, 4);
    edits.insert(2, "x");
    assert_eq!(
        edits.apply(&mut doc),
        Err(EditError::OverlappingEdits { offset: 2 })
    );
    assert_eq!(doc.text(), "abcdef");
}

#[test]
fn out_of_range_edit_is_rejected() {
    let mut doc = Document::new("abc");
    let mut edits = DocumentEdits::new();
    edits.insert(10, "x");
    assert_eq!(
        edits.apply(&mut doc),
        Err(EditError::InvalidEditRange { start: 10, end: 10 })
    );
    assert_eq!(doc.text(), "abc");
}

#[test]
fn out_of_range_cursor_is_rejected() {
    let mut doc = Document::new("abc");
    let mut edits = DocumentEdits::new();
    edits.move_cursor_to(7);
    assert_eq!(
        edits.apply(&mut doc),
        Err(EditError::BadLocation { offset: 7, len: 3 })
    );
}

#[test]
fn empty_edits_do_nothing() {
    let mut doc = Document::new("abc");
    let edits = DocumentEdits::new();
    assert!(edits.is_empty());
    assert!(!edits.has_text_changes());
    assert_eq!(edits.apply(&mut doc), Ok(None));
    assert_eq!(doc.text(), "abc");
}

#[test]
fn empty_delete_is_dropped() {
    let mut edits = DocumentEdits::new();
    edits.delete(3, 3);
    assert!(edits.edits().is_empty());
}

#[test]
fn preview_does_not_touch_document() {
    let doc = Document::new("a: 1\n");
    let mut edits = DocumentEdits::new();
    edits.insert(5, "b: 2\n");
    let result = edits.preview(&doc).expect("valid edits");
    assert_eq!(result.text, "a: 1\nb: 2\n");
    assert_eq!(result.cursor, Some(10));
    assert_eq!(doc.text(), "a: 1\n");
}

#[test]
fn text_edits_apply_in_reverse_order() {
    let edits = [
        TextEdit::insert(0, "<"),
        TextEdit {
            range: Span::new(1, 2),
            new_text: "B".to_string(),
        },
        TextEdit::insert(3, ">"),
    ];
    let (text, cursor) = apply_text_edits_with_cursor("abc", &edits, 2);
    assert_eq!(text, "<aBc>");
    assert_eq!(cursor, 3);
}
