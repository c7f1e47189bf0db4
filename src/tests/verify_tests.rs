// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::report::{VerificationReport, Violation, ViolationKind};
use crate::types::{MutationId, MutationRecord};
use crate::verify::verify;

fn id(s: &str) -> MutationId {
    MutationId::from(s)
}

fn kinds(report: &VerificationReport) -> Vec<&'static str> {
    report.violations().iter().map(|v| v.kind.name()).collect()
}

#[test]
fn test_linear_chain_verifies() {
    let history = vec![
        MutationRecord::root("a"),
        MutationRecord::child("b", "a"),
        MutationRecord::child("c", "b"),
    ];

    let report = verify(&history);
    assert_eq!(report, VerificationReport::Verified { node_count: 3 });
}

#[test]
fn test_branching_history_verifies() {
    // Two speculative branches off the root, then a collapse onto one of them.
    let history = vec![
        MutationRecord::root("r"),
        MutationRecord::child("left", "r"),
        MutationRecord::child("right", "r"),
        MutationRecord::child("left.1", "left"),
        MutationRecord::child("collapse", "left.1"),
    ];

    let report = verify(&history);
    assert!(report.is_verified());
    assert_eq!(report.node_count(), Some(history.len()));
}

#[test]
fn test_single_root_verifies() {
    let report = verify(&[MutationRecord::root("only")]);
    assert_eq!(report.node_count(), Some(1));
}

#[test]
fn test_root_with_parent_rejected() {
    let report = verify(&[MutationRecord::child("a", "x")]);

    assert_eq!(
        report.violations(),
        &[Violation::at(
            0,
            ViolationKind::RootHasParent {
                id: id("a"),
                parent: id("x"),
            }
        )]
    );
}

#[test]
fn test_missing_parent_rejected() {
    let history = vec![MutationRecord::root("a"), MutationRecord::child("c", "b")];
    let report = verify(&history);

    assert_eq!(
        report.first_violation(),
        Some(&Violation::at(
            1,
            ViolationKind::MissingParent {
                parent: id("b"),
                id: id("c"),
            }
        ))
    );
}

#[test]
fn test_forward_reference_rejected() {
    // "b" exists, but only after the record that points at it.
    let history = vec![
        MutationRecord::root("a"),
        MutationRecord::child("c", "b"),
        MutationRecord::child("b", "a"),
    ];
    let report = verify(&history);

    assert_eq!(kinds(&report), vec!["MissingParent"]);
    assert_eq!(report.violations()[0].position, Some(1));
}

#[test]
fn test_duplicate_id_reported_first() {
    let history = vec![MutationRecord::root("a"), MutationRecord::child("a", "a")];
    let report = verify(&history);

    assert_eq!(
        report.first_violation().map(|v| &v.kind),
        Some(&ViolationKind::DuplicateId {
            id: id("a"),
            first_seen: 0,
        })
    );
    // The same record is also a self-reference.
    assert_eq!(kinds(&report), vec!["DuplicateId", "SelfReference"]);
}

#[test]
fn test_duplicate_id_with_valid_parent() {
    let history = vec![
        MutationRecord::root("a"),
        MutationRecord::child("b", "a"),
        MutationRecord::child("b", "a"),
    ];
    let report = verify(&history);

    assert_eq!(
        report.violations(),
        &[Violation::at(
            2,
            ViolationKind::DuplicateId {
                id: id("b"),
                first_seen: 1,
            }
        )]
    );
}

#[test]
fn test_self_reference_on_unseen_id() {
    let history = vec![MutationRecord::root("a"), MutationRecord::child("z", "z")];
    let report = verify(&history);

    // Not reported as a missing parent.
    assert_eq!(
        report.violations(),
        &[Violation::at(1, ViolationKind::SelfReference { id: id("z") })]
    );
}

#[test]
fn test_self_referencing_first_record() {
    let report = verify(&[MutationRecord::child("a", "a")]);
    assert_eq!(kinds(&report), vec!["RootHasParent", "SelfReference"]);
}

#[test]
fn test_multiple_roots_rejected() {
    let history = vec![
        MutationRecord::root("a"),
        MutationRecord::child("b", "a"),
        MutationRecord::root("c"),
    ];
    let report = verify(&history);

    assert_eq!(
        report.violations(),
        &[Violation::at(
            2,
            ViolationKind::MultipleRoots {
                id: id("c"),
                root: id("a"),
            }
        )]
    );
}

#[test]
fn test_misplaced_root_rejected() {
    let history = vec![
        MutationRecord::child("b", "a"),
        MutationRecord::root("a"),
        MutationRecord::root("c"),
    ];
    let report = verify(&history);

    assert_eq!(
        kinds(&report),
        vec!["RootHasParent", "MisplacedRoot", "MultipleRoots"]
    );
    // Once a misplaced root is seen, later rootless records collide with it.
    assert_eq!(
        report.violations()[2].kind,
        ViolationKind::MultipleRoots {
            id: id("c"),
            root: id("a"),
        }
    );
}

#[test]
fn test_empty_history_rejected() {
    let report = verify(&[]);
    assert_eq!(
        report.violations(),
        &[Violation::global(ViolationKind::EmptyHistory)]
    );
}

#[test]
fn test_children_of_broken_record_still_resolve() {
    // "c" has a dangling parent but is still a known id for "d".
    let history = vec![
        MutationRecord::root("a"),
        MutationRecord::child("c", "ghost"),
        MutationRecord::child("d", "c"),
    ];
    let report = verify(&history);

    assert_eq!(kinds(&report), vec!["MissingParent"]);
}

#[test]
fn test_payload_is_ignored() {
    let mut payload = serde_json::Map::new();
    payload.insert("op".into(), serde_json::json!("collapse"));
    payload.insert("branch".into(), serde_json::json!(3));

    let history = vec![
        MutationRecord::root("a"),
        MutationRecord::child("b", "a").with_payload(payload),
    ];
    assert!(verify(&history).is_verified());
}

#[test]
fn test_long_chain_verifies() {
    let mut history = vec![MutationRecord::root("m0")];
    for i in 1..10_000 {
        history.push(MutationRecord::child(
            format!("m{}", i),
            format!("m{}", i - 1),
        ));
    }

    assert_eq!(verify(&history).node_count(), Some(10_000));
}

#[test]
fn test_self_reference_helper_matches_verdict() {
    let looped = MutationRecord::child("z", "z");
    assert!(looped.is_self_referencing());
    assert!(!MutationRecord::child("b", "a").is_self_referencing());
    assert!(!MutationRecord::root("a").is_self_referencing());

    let report = verify(&[MutationRecord::root("a"), looped]);
    assert_eq!(kinds(&report), vec!["SelfReference"]);
}
