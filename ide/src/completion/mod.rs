//! Property completion for YAML configuration documents.
//! All coordinates are UTF-8 byte offsets into the document text.

use std::sync::Arc;

use analyzer::{Document, parse};

use crate::catalogue::PropertyCatalogue;
use crate::context::{self, PositionKind};
use crate::project::{DocumentContextFinder, ProjectHandle};

mod items;
mod proposal;
mod ranking;

pub use proposal::{Proposal, ProposalKind};
pub use ranking::{compare_proposals, sort_proposals};

/// Default for `CompletionConfig.max_proposals`.
pub const DEFAULT_MAX_PROPOSALS: usize = 200;

/// Configuration knobs for [`CompletionEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionConfig {
    /// Max number of proposals returned per query.
    pub max_proposals: usize,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            max_proposals: DEFAULT_MAX_PROPOSALS,
        }
    }
}

/// Computes ranked completion proposals for YAML property files.
pub struct CompletionEngine {
    finder: Arc<dyn DocumentContextFinder>,
    config: CompletionConfig,
}

impl CompletionEngine {
    pub fn new(finder: impl DocumentContextFinder + 'static) -> Self {
        Self::with_config(finder, CompletionConfig::default())
    }

    pub fn with_config(finder: impl DocumentContextFinder + 'static, config: CompletionConfig) -> Self {
        Self {
            finder: Arc::new(finder),
            config,
        }
    }

    pub fn config(&self) -> CompletionConfig {
        self.config
    }

    /// Proposals for `caret` (a UTF-8 byte offset into `doc`), best first.
    ///
    /// Never fails: an unloaded catalogue or an invalid caret yields no proposals.
    pub fn compute_proposals(&self, doc: &Document, caret: usize) -> Vec<Proposal> {
        let Some(catalogue) = self.finder.catalogue(doc) else {
            tracing::debug!("property catalogue not loaded");
            return Vec::new();
        };
        CompletionSession {
            doc,
            caret,
            catalogue,
            project: self.finder.project(doc),
            config: self.config,
        }
        .run()
    }
}

impl std::fmt::Debug for CompletionEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionEngine")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

struct CompletionSession<'a> {
    doc: &'a Document,
    caret: usize,
    catalogue: Arc<PropertyCatalogue>,
    project: Option<ProjectHandle>,
    config: CompletionConfig,
}

impl CompletionSession<'_> {
    fn run(self) -> Vec<Proposal> {
        // 1) Detect the query and position kind at the caret.
        let Some(cursor_ctx) = context::detect_cursor_context(self.doc, self.caret) else {
            tracing::debug!(caret = self.caret, "caret outside the document");
            return Vec::new();
        };

        // 2) Build raw proposals for the position kind.
        let structure = parse(self.doc);
        let mut proposals = match cursor_ctx.position_kind {
            PositionKind::Key => items::property_proposals(
                &structure,
                &self.catalogue,
                &cursor_ctx,
                self.project.as_ref(),
            ),
            PositionKind::Value { colon_offset } => {
                items::value_proposals(&structure, &self.catalogue, &cursor_ctx, colon_offset)
            }
            PositionKind::None => Vec::new(),
        };

        // 3) Rank.
        sort_proposals(&mut proposals);

        // 4) Cap the list.
        proposals.truncate(self.config.max_proposals);
        tracing::debug!(
            query = %cursor_ctx.query,
            proposals = proposals.len(),
            "computed completion proposals"
        );
        proposals
    }
}
