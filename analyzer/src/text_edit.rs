use crate::span::Span;

/// A single text edit in byte offsets. An empty `range` is a pure insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    pub range: Span,
    pub new_text: String,
}

impl TextEdit {
    pub fn insert(offset: usize, text: impl Into<String>) -> Self {
        Self {
            range: Span::at(offset),
            new_text: text.into(),
        }
    }

    pub fn delete(start: usize, end: usize) -> Self {
        Self {
            range: Span::new(start, end),
            new_text: String::new(),
        }
    }
}

/// Applies byte-offset text edits and rebases a byte cursor through them.
///
/// The caller must provide non-overlapping edits sorted by `(start, end)`.
/// Edits are applied in descending order to avoid shifting later offsets.
///
/// Cursor rules:
/// - edits ending at or before the cursor shift it by the byte delta
/// - a cursor strictly inside a replaced range snaps to the edit `start`
pub fn apply_text_edits_with_cursor(
    source: &str,
    edits: &[TextEdit],
    cursor: usize,
) -> (String, usize) {
    let mut updated = source.to_string();
    let mut cursor = cursor;

    for edit in edits.iter().rev() {
        let start = edit.range.start;
        let end = edit.range.end;
        let replaced_len = end.saturating_sub(start);
        let inserted_len = edit.new_text.len();

        // Rebase cursor in pre-edit coordinates through this edit.
        if end <= cursor {
            cursor = cursor + inserted_len - replaced_len;
        } else if start < cursor && cursor < end {
            cursor = start;
        }

        updated.replace_range(start..end, &edit.new_text);
    }

    (updated, cursor)
}
