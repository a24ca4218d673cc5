//! Accumulates document edits and a cursor hint, then applies them in one step.

use crate::document::Document;
use crate::error::EditError;
use crate::span::Selection;
use crate::text_edit::{TextEdit, apply_text_edits_with_cursor};

/// Where the caret goes once the edits are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CursorHint {
    /// An offset in pre-edit coordinates.
    At(usize),
    /// Right after the text inserted at this (pre-edit) offset.
    AfterInsert(usize),
}

/// Insertions and deletions recorded against one document state.
///
/// Construction is pure; [`DocumentEdits::apply`] mutates the document and must not be
/// repeated on the already-edited document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentEdits {
    edits: Vec<TextEdit>,
    cursor: Option<CursorHint>,
}

/// Result payload for an edit preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyResult {
    pub text: String,
    pub cursor: Option<usize>,
}

impl DocumentEdits {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an insertion. Unless a cursor was set explicitly, the caret lands at the
    /// end of the last recorded insertion.
    pub fn insert(&mut self, offset: usize, text: impl Into<String>) {
        self.edits.push(TextEdit::insert(offset, text));
        if !matches!(self.cursor, Some(CursorHint::At(_))) {
            self.cursor = Some(CursorHint::AfterInsert(offset));
        }
    }

    pub fn delete(&mut self, start: usize, end: usize) {
        if start == end {
            return;
        }
        self.edits.push(TextEdit::delete(start, end));
    }

    /// Places the caret at `offset`, given in the coordinates of the unedited document.
    pub fn move_cursor_to(&mut self, offset: usize) {
        self.cursor = Some(CursorHint::At(offset));
    }

    pub fn edits(&self) -> &[TextEdit] {
        &self.edits
    }

    pub fn has_text_changes(&self) -> bool {
        !self.edits.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty() && self.cursor.is_none()
    }

    /// Computes the edited text and caret without touching `doc`.
    pub fn preview(&self, doc: &Document) -> Result<ApplyResult, EditError> {
        let source = doc.text();
        let mut edits = self.edits.clone();
        edits.sort_by(|a, b| {
            a.range
                .start
                .cmp(&b.range.start)
                .then(a.range.end.cmp(&b.range.end))
        });
        validate_sorted_non_overlapping_edits(source, &edits)?;

        let cursor = match self.cursor {
            Some(CursorHint::At(offset)) | Some(CursorHint::AfterInsert(offset)) => {
                validate_cursor(source, offset)?;
                Some(offset)
            }
            None => None,
        };

        let (text, cursor_after) = apply_text_edits_with_cursor(source, &edits, cursor.unwrap_or(0));
        Ok(ApplyResult {
            text,
            cursor: cursor.map(|_| cursor_after),
        })
    }

    /// Applies every edit to `doc` and returns the resulting selection.
    ///
    /// Validation happens before anything is written, so a failure leaves `doc`
    /// unchanged.
    pub fn apply(&self, doc: &mut Document) -> Result<Option<Selection>, EditError> {
        let result = self.preview(doc)?;
        if self.has_text_changes() {
            doc.set_text(result.text);
        }
        Ok(result.cursor.map(Selection::caret))
    }
}

fn validate_cursor(source: &str, cursor: usize) -> Result<(), EditError> {
    if cursor > source.len() || !source.is_char_boundary(cursor) {
        return Err(EditError::BadLocation {
            offset: cursor,
            len: source.len(),
        });
    }
    Ok(())
}

fn validate_sorted_non_overlapping_edits(source: &str, edits: &[TextEdit]) -> Result<(), EditError> {
    let mut prev_end = 0usize;

    for (index, edit) in edits.iter().enumerate() {
        let (start, end) = (edit.range.start, edit.range.end);
        if end < start || end > source.len() {
            return Err(EditError::InvalidEditRange { start, end });
        }

        if !source.is_char_boundary(start) || !source.is_char_boundary(end) {
            return Err(EditError::InvalidEditRange { start, end });
        }

        if index > 0 && start < prev_end {
            return Err(EditError::OverlappingEdits { offset: start });
        }

        prev_end = end;
    }

    Ok(())
}
