//! Builds the raw proposal list for a position.
//! Proposals are not sorted here (ordering happens in `ranking`).

use analyzer::{DocumentEdits, YamlPath, YamlStructure};

use crate::applier::PropertyPathApplier;
use crate::catalogue::{PropertyCatalogue, PropertyType};
use crate::completion::Proposal;
use crate::context::CursorContext;
use crate::fuzzy::match_score;
use crate::project::ProjectHandle;

/// Text placed after a completed key, by value shape.
fn append_text(ty: PropertyType) -> &'static str {
    match ty {
        PropertyType::Atomic => " ",
        PropertyType::Map => "\n",
        PropertyType::Sequence => "\n- ",
    }
}

/// Property proposals at a key position.
///
/// The key path of the enclosing context is prefixed to the query, and only properties
/// below that path are proposed, relative to it.
pub(crate) fn property_proposals(
    structure: &YamlStructure,
    catalogue: &PropertyCatalogue,
    cursor_ctx: &CursorContext,
    project: Option<&ProjectHandle>,
) -> Vec<Proposal> {
    let context = structure.find_context(cursor_ctx.replace.start, cursor_ctx.column);
    let Some(context_path) = structure.key_path(context) else {
        tracing::debug!("completion context is inside a sequence entry");
        return Vec::new();
    };

    let (pattern, id_prefix) = if context_path.is_empty() {
        (cursor_ctx.query.clone(), String::new())
    } else {
        let prefix = context_path.to_prop_string();
        (format!("{prefix}.{}", cursor_ctx.query), format!("{prefix}."))
    };
    tracing::trace!(%pattern, "property completion");

    catalogue
        .find(&pattern)
        .into_iter()
        .filter(|matched| matched.data.id.starts_with(&id_prefix))
        .filter_map(|matched| {
            let path = YamlPath::from_property(&matched.data.id);
            let relative_path = path.drop_prefix(&context_path)?;
            if relative_path.is_empty() {
                return None;
            }
            let applier = PropertyPathApplier {
                query: cursor_ctx.replace,
                column: cursor_ctx.column,
                relative_path,
                append_text: append_text(matched.data.property_type()).to_string(),
            };
            Some(Proposal::property(matched, applier, project.cloned()))
        })
        .collect()
}

/// Value proposals after `key:`: `true`/`false` for booleans, otherwise the
/// property's hints, filtered by the query.
pub(crate) fn value_proposals(
    structure: &YamlStructure,
    catalogue: &PropertyCatalogue,
    cursor_ctx: &CursorContext,
    colon_offset: usize,
) -> Vec<Proposal> {
    let Some(path) = structure
        .key_at_colon(colon_offset)
        .and_then(|key| structure.key_path(key))
    else {
        return Vec::new();
    };
    let Some(info) = catalogue.get(&path.to_prop_string()) else {
        tracing::debug!(%path, "no metadata for value completion");
        return Vec::new();
    };

    let values: Vec<String> = if info.is_boolean() {
        vec!["true".to_string(), "false".to_string()]
    } else {
        info.hints.clone()
    };

    values
        .into_iter()
        .enumerate()
        .filter(|(_, value)| match_score(&cursor_ctx.query, value) > 0.0)
        .map(|(sorting_order, value)| {
            let mut edits = DocumentEdits::new();
            edits.delete(cursor_ctx.replace.start, cursor_ctx.replace.end);
            edits.insert(cursor_ctx.replace.start, value.clone());
            Proposal::simple(value, sorting_order, edits)
        })
        .collect()
}
