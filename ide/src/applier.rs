//! Deferred document edits carried by completion proposals.

use analyzer::{Document, DocumentEdits, EditError, Selection, Span, YamlPath, YamlPathEdits, parse};

/// Applies a proposal to the document and reports where the caret goes.
///
/// Implementations must leave `doc` unchanged when they return an error.
pub trait ProposalApplier: Send + Sync {
    fn apply(&self, doc: &mut Document) -> Result<Option<Selection>, EditError>;
}

/// Pre-computed edits, e.g. replacing the typed query with a value.
impl ProposalApplier for DocumentEdits {
    fn apply(&self, doc: &mut Document) -> Result<Option<Selection>, EditError> {
        DocumentEdits::apply(self, doc)
    }
}

/// Replaces the typed query with a property path, reusing keys that already exist.
///
/// The structure is re-parsed at apply time, so the applier stays valid as long as the
/// document still has the text it was created for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyPathApplier {
    /// The typed query, deleted on apply.
    pub query: Span,
    /// Column of the query start; selects the context node.
    pub column: usize,
    /// Path to emit, relative to the context node.
    pub relative_path: YamlPath,
    pub append_text: String,
}

impl ProposalApplier for PropertyPathApplier {
    fn apply(&self, doc: &mut Document) -> Result<Option<Selection>, EditError> {
        let structure = parse(doc);
        let context = structure.find_context(self.query.start, self.column);

        let edits = {
            let mut path_edits = YamlPathEdits::new(doc, &structure);
            path_edits.delete(self.query.start, self.query.end);
            // The key on the line being edited is rewritten, never reused.
            let reuses_existing_key = self
                .relative_path
                .segment(0)
                .and_then(|first| structure.find_child_for_key(context, first.to_prop_string()))
                .is_some_and(|existing| {
                    let node = structure.node(existing);
                    !(node.start <= self.query.start && self.query.start <= node.end)
                });
            if reuses_existing_key {
                path_edits.create_path_from(context, &self.relative_path, &self.append_text)?;
            } else {
                path_edits.create_path_in_place(
                    context,
                    &self.relative_path,
                    self.query.start,
                    &self.append_text,
                )?;
            }
            path_edits.into_edits()
        };
        tracing::trace!(path = %self.relative_path, ?edits, "applying property proposal");
        edits.apply(doc)
    }
}
