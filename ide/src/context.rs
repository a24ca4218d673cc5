//! Cursor-context detection for completion.
//! All coordinates are UTF-8 byte offsets into the document text.

use analyzer::{Document, Span};

/// Coarse completion position derived from the text before the cursor on its line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PositionKind {
    /// Start of a key, possibly after `- ` markers.
    Key,
    /// After `key:`; `colon_offset` points at the `:`.
    Value { colon_offset: usize },
    None,
}

/// Full cursor context used by the completion session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CursorContext {
    pub(crate) position_kind: PositionKind,
    /// The typed query, replaced when a proposal is applied.
    pub(crate) replace: Span,
    pub(crate) query: String,
    /// Column of `replace.start` on its line.
    pub(crate) column: usize,
}

/// Detects the query and position kind for `cursor`.
///
/// The query is the run of characters before the cursor that are neither whitespace nor
/// `:`. The replaced range also covers the rest of that word after the cursor. Returns
/// `None` when `cursor` is not a valid offset.
pub(crate) fn detect_cursor_context(doc: &Document, cursor: usize) -> Option<CursorContext> {
    let before = doc.line_text_before(cursor).ok()?;
    let line_start = cursor - before.len();

    let query_start = before
        .char_indices()
        .rev()
        .find(|&(_, c)| is_word_break(c))
        .map(|(idx, c)| idx + c.len_utf8())
        .unwrap_or(0);
    let lead = &before[..query_start];
    let query = &before[query_start..];

    let position_kind = if query.starts_with('#') {
        PositionKind::None
    } else if is_key_lead(lead) {
        PositionKind::Key
    } else {
        let trimmed = lead.trim_end();
        match trimmed.strip_suffix(':') {
            Some(_) => PositionKind::Value {
                colon_offset: line_start + trimmed.len() - 1,
            },
            None => PositionKind::None,
        }
    };

    let word_end = doc.text().get(cursor..).map_or(cursor, |after| {
        cursor + after.find(is_word_break).unwrap_or(after.len())
    });

    Some(CursorContext {
        position_kind,
        replace: Span::new(line_start + query_start, word_end),
        query: query.to_string(),
        column: query_start,
    })
}

/// Blank, or only `- ` sequence markers.
fn is_key_lead(lead: &str) -> bool {
    let mut rest = lead.trim_start_matches(' ');
    while let Some(after_dash) = rest.strip_prefix('-') {
        if !(after_dash.is_empty() || after_dash.starts_with(' ')) {
            return false;
        }
        rest = after_dash.trim_start_matches(' ');
    }
    rest.is_empty()
}

fn is_word_break(c: char) -> bool {
    c.is_whitespace() || c == ':'
}
