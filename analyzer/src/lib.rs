//! YAML structural editing model.
//!
//! Pipeline: document → structure (`Root | Key | Seq | Raw` tree) → path edits → apply.
//! All offsets are UTF-8 byte offsets into the document text, ranges are `[start, end)`.

mod document;
mod edits;
mod error;
pub mod indent;
mod path;
mod path_edits;
mod span;
pub mod structure;
mod tests;
mod text_edit;

pub use document::{Document, LineInfo};
pub use edits::{ApplyResult, DocumentEdits};
pub use error::EditError;
pub use indent::{INDENT_BY, IndentUtil};
pub use path::{YamlPath, YamlPathSegment};
pub use path_edits::YamlPathEdits;
pub use span::{Selection, Span};
pub use structure::{NodeId, SNode, SNodeKind, YamlStructure, parse};
pub use text_edit::{TextEdit, apply_text_edits_with_cursor};

/// Parses `doc`, makes `path` exist and applies the result.
///
/// Returns the caret selection; on error `doc` is left unchanged.
pub fn ensure_path(
    doc: &mut Document,
    path: &YamlPath,
    append_text: &str,
) -> Result<Option<Selection>, EditError> {
    let structure = parse(doc);
    let edits = {
        let mut path_edits = YamlPathEdits::new(doc, &structure);
        path_edits.create_path(path, append_text)?;
        path_edits.into_edits()
    };
    edits.apply(doc)
}
