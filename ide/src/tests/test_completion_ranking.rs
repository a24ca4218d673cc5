use std::sync::Arc;

use analyzer::DocumentEdits;

use crate::tests::completion_dsl::t;
use crate::{Match, PropertyInfo, Proposal, ProposalKind, sort_proposals};

fn property(id: &str, score: f64) -> Proposal {
    Proposal::property(
        Match::new(Arc::new(PropertyInfo::new(id)), score),
        DocumentEdits::new(),
        None,
    )
}

fn simple(value: &str, sorting_order: usize) -> Proposal {
    Proposal::simple(value, sorting_order, DocumentEdits::new())
}

fn labels(proposals: &[Proposal]) -> Vec<String> {
    proposals.iter().map(Proposal::to_string).collect()
}

#[test]
fn ranking_shorter_id_wins_then_id_breaks_ties() {
    t("s$0").expect_labels(&[
        "server.port",
        "server.address",
        "server.ssl.enabled",
        "spring.profiles.active",
        "spring.main.banner-mode",
        "spring.profiles.include",
    ]);
}

#[test]
fn ranking_prefix_beats_word_start() {
    t("po$0")
        .catalogue(crate::PropertyCatalogue::new([
            PropertyInfo::new("abc.port"),
            PropertyInfo::new("port.abc"),
            PropertyInfo::new("apbocxyz"),
        ]))
        .expect_labels(&["port.abc", "abc.port", "apbocxyz"]);
}

#[test]
fn sort_properties_by_score_then_id() {
    let mut proposals = vec![
        property("b", 0.5),
        property("c", 0.9),
        property("a", 0.5),
    ];
    sort_proposals(&mut proposals);
    assert_eq!(labels(&proposals), ["c", "a", "b"]);
}

#[test]
fn sort_simple_by_sorting_order() {
    let mut proposals = vec![simple("off", 2), simple("console", 0), simple("log", 1)];
    sort_proposals(&mut proposals);
    assert_eq!(labels(&proposals), ["console", "log", "off"]);
}

#[test]
fn sort_mixed_puts_properties_first() {
    let mut proposals = vec![simple("x", 0), property("p", 0.1), simple("y", 1)];
    sort_proposals(&mut proposals);
    assert_eq!(labels(&proposals), ["p", "x", "y"]);
    assert!(matches!(proposals[0].kind(), ProposalKind::Property(_)));
}

#[test]
fn sort_is_deterministic() {
    let build = || {
        vec![
            property("server.port", 0.25),
            property("server.address", 0.25),
            property("debug", 1.0),
        ]
    };
    let mut first = build();
    let mut second = build();
    second.reverse();
    sort_proposals(&mut first);
    sort_proposals(&mut second);
    assert_eq!(labels(&first), labels(&second));
    assert_eq!(labels(&first), ["debug", "server.address", "server.port"]);
}
