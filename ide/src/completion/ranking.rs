//! Proposal ordering.

use std::cmp::Ordering;

use super::{Proposal, ProposalKind};

/// Orders proposals from best to worst.
///
/// Priority (earlier is better):
/// 1) property proposals before simple ones
/// 2) properties: higher score, then id ascending
/// 3) simple proposals: lower `sorting_order`
pub fn compare_proposals(a: &Proposal, b: &Proposal) -> Ordering {
    match (a.kind(), b.kind()) {
        (ProposalKind::Property(ma), ProposalKind::Property(mb)) => mb
            .score
            .total_cmp(&ma.score)
            .then_with(|| ma.data.id.cmp(&mb.data.id)),
        (
            ProposalKind::Simple {
                sorting_order: oa, ..
            },
            ProposalKind::Simple {
                sorting_order: ob, ..
            },
        ) => oa.cmp(ob),
        (ProposalKind::Property(_), ProposalKind::Simple { .. }) => Ordering::Less,
        (ProposalKind::Simple { .. }, ProposalKind::Property(_)) => Ordering::Greater,
    }
}

/// Stable sort by [`compare_proposals`].
pub fn sort_proposals(proposals: &mut [Proposal]) {
    proposals.sort_by(compare_proposals);
}
