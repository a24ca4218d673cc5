use std::fmt;
use std::sync::{Arc, OnceLock};

use analyzer::{Document, Selection};

use crate::applier::ProposalApplier;
use crate::catalogue::PropertyInfo;
use crate::display::{self, DisplaySegment, HoverInfo};
use crate::fuzzy::Match;
use crate::project::ProjectHandle;

/// What a proposal offers. Sorting dispatches on this.
#[derive(Debug, Clone, PartialEq)]
pub enum ProposalKind {
    /// A catalogue property, ranked by match score.
    Property(Match<Arc<PropertyInfo>>),
    /// A plain value (enum constant, boolean, hint), ranked by `sorting_order`.
    Simple { value: String, sorting_order: usize },
}

/// One completion candidate: display text plus the edits that insert it.
pub struct Proposal {
    kind: ProposalKind,
    applier: Box<dyn ProposalApplier>,
    project: Option<ProjectHandle>,
    selection: OnceLock<Selection>,
}

impl Proposal {
    pub fn property(
        matched: Match<Arc<PropertyInfo>>,
        applier: impl ProposalApplier + 'static,
        project: Option<ProjectHandle>,
    ) -> Self {
        Self::new(ProposalKind::Property(matched), Box::new(applier), project)
    }

    pub fn simple(
        value: impl Into<String>,
        sorting_order: usize,
        applier: impl ProposalApplier + 'static,
    ) -> Self {
        Self::new(
            ProposalKind::Simple {
                value: value.into(),
                sorting_order,
            },
            Box::new(applier),
            None,
        )
    }

    fn new(
        kind: ProposalKind,
        applier: Box<dyn ProposalApplier>,
        project: Option<ProjectHandle>,
    ) -> Self {
        Self {
            kind,
            applier,
            project,
            selection: OnceLock::new(),
        }
    }

    pub fn kind(&self) -> &ProposalKind {
        &self.kind
    }

    /// The proposed property, for property proposals.
    pub fn property_info(&self) -> Option<&PropertyInfo> {
        match &self.kind {
            ProposalKind::Property(matched) => Some(&matched.data),
            ProposalKind::Simple { .. } => None,
        }
    }

    pub fn display_string(&self) -> String {
        display::plain_text(&self.styled_display_string())
    }

    pub fn styled_display_string(&self) -> Vec<DisplaySegment> {
        match &self.kind {
            ProposalKind::Property(matched) => display::property_segments(&matched.data),
            ProposalKind::Simple { value, .. } => vec![DisplaySegment::Name {
                text: value.clone(),
            }],
        }
    }

    /// Applies the proposal to `doc`.
    ///
    /// Failures are logged and swallowed: the document is left unchanged and `None` is
    /// returned.
    pub fn apply(&self, doc: &mut Document) -> Option<Selection> {
        match self.applier.apply(doc) {
            Ok(selection) => {
                if let Some(selection) = selection {
                    let _ = self.selection.set(selection);
                }
                selection
            }
            Err(err) => {
                tracing::warn!(proposal = %self, %err, "failed to apply completion proposal");
                None
            }
        }
    }

    /// Caret selection produced by the last successful [`Proposal::apply`].
    pub fn selection(&self) -> Option<Selection> {
        self.selection.get().copied()
    }

    /// HTML documentation for property proposals.
    pub fn additional_info(&self) -> Option<String> {
        self.property_info().map(display::hover_html)
    }

    pub fn hover_info(&self) -> Option<HoverInfo> {
        self.property_info().map(|property| HoverInfo {
            project: self.project.clone(),
            property: property.clone(),
        })
    }
}

impl fmt::Display for Proposal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ProposalKind::Property(matched) => f.write_str(&matched.data.id),
            ProposalKind::Simple { value, .. } => f.write_str(value),
        }
    }
}

impl fmt::Debug for Proposal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Proposal")
            .field("kind", &self.kind)
            .field("project", &self.project)
            .field("selection", &self.selection.get())
            .finish_non_exhaustive()
    }
}
