//! Property completion for YAML configuration files.
//!
//! Coordinates are UTF-8 byte offsets (`[start, end)`), matching `analyzer`.

mod applier;
mod catalogue;
mod completion;
mod context;
mod display;
mod fuzzy;
mod project;

pub use applier::{PropertyPathApplier, ProposalApplier};
pub use catalogue::{
    CatalogueError, PropertyCatalogue, PropertyInfo, PropertyType, format_java_type,
};
pub use completion::{
    CompletionConfig, CompletionEngine, DEFAULT_MAX_PROPOSALS, Proposal, ProposalKind,
    compare_proposals, sort_proposals,
};
pub use display::{
    DisplaySegment, HoverInfo, format_default_value, hover_html, plain_text, property_segments,
    short_description,
};
pub use fuzzy::{FuzzyKey, FuzzyMap, Match, match_score};
pub use project::{DocumentContextFinder, ProjectHandle, StaticContextFinder};

#[cfg(test)]
mod tests;
