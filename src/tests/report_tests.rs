// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::report::{VerificationReport, Violation, ViolationKind};
use crate::types::MutationId;

#[test]
fn test_from_violations_picks_verdict() {
    assert!(VerificationReport::from_violations(4, vec![]).is_verified());

    let failed = VerificationReport::from_violations(
        4,
        vec![Violation::global(ViolationKind::EmptyHistory)],
    );
    assert!(!failed.is_verified());
    assert_eq!(failed.node_count(), None);
}

#[test]
fn test_violation_messages_name_ids() {
    let v = Violation::at(
        7,
        ViolationKind::MissingParent {
            parent: MutationId::from("b"),
            id: MutationId::from("c"),
        },
    );
    assert_eq!(v.to_string(), "record 7: missing parent b for node c");

    let v = Violation::global(ViolationKind::EmptyHistory);
    assert_eq!(v.to_string(), "history contains no records");
}

#[test]
fn test_report_json_shape() {
    let report = VerificationReport::from_violations(
        2,
        vec![Violation::at(
            1,
            ViolationKind::SelfReference {
                id: MutationId::from("x"),
            },
        )],
    );

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["verdict"], "failed");
    assert_eq!(json["violations"][0]["kind"], "self_reference");
    assert_eq!(json["violations"][0]["position"], 1);
    assert_eq!(json["violations"][0]["id"], "x");

    let back: VerificationReport = serde_json::from_value(json).unwrap();
    assert_eq!(back, report);
}

#[test]
fn test_verified_display() {
    let report = VerificationReport::Verified { node_count: 3 };
    assert_eq!(report.to_string(), "verified: 3 nodes, no missing links");
}
