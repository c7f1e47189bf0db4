// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::error::Interrupted;
use crate::report::ViolationKind;
use crate::types::MutationRecord;
use crate::verify::{verify, verify_with_policy, Verifier, VerifyPolicy};
use core::sync::atomic::{AtomicBool, Ordering};

fn corrupt_history() -> Vec<MutationRecord> {
    vec![
        MutationRecord::root("a"),
        MutationRecord::child("b", "missing"),
        MutationRecord::child("a", "a"),
        MutationRecord::root("c"),
    ]
}

#[test]
fn test_collect_reports_everything() {
    let report = verify(&corrupt_history());
    let names: Vec<_> = report.violations().iter().map(|v| v.kind.name()).collect();

    assert_eq!(
        names,
        vec!["MissingParent", "DuplicateId", "SelfReference", "MultipleRoots"]
    );
}

#[test]
fn test_fail_fast_stops_at_first() {
    let history = corrupt_history();
    let fast = verify_with_policy(&history, VerifyPolicy::FailFast);
    let full = verify_with_policy(&history, VerifyPolicy::Collect);

    assert_eq!(fast.violations().len(), 1);
    assert_eq!(fast.first_violation(), full.first_violation());
}

#[test]
fn test_fail_fast_single_record_double_fault() {
    // Record 1 is both a duplicate and a self-reference; only one is kept.
    let history = vec![MutationRecord::root("a"), MutationRecord::child("a", "a")];
    let report = verify_with_policy(&history, VerifyPolicy::FailFast);

    assert_eq!(report.violations().len(), 1);
    assert!(matches!(
        report.violations()[0].kind,
        ViolationKind::DuplicateId { .. }
    ));
}

#[test]
fn test_policies_agree_on_valid_history() {
    let history = vec![MutationRecord::root("a"), MutationRecord::child("b", "a")];

    assert_eq!(
        verify_with_policy(&history, VerifyPolicy::FailFast),
        verify_with_policy(&history, VerifyPolicy::Collect)
    );
}

#[test]
fn test_default_policy_is_collect() {
    assert_eq!(VerifyPolicy::default(), VerifyPolicy::Collect);
    assert_eq!(Verifier::default().policy(), VerifyPolicy::Collect);
}

#[test]
fn test_interrupt_flag_stops_run() {
    let flag = AtomicBool::new(true);
    let history = vec![MutationRecord::root("a"), MutationRecord::child("b", "a")];

    let result = Verifier::new(VerifyPolicy::Collect)
        .interruptible(&flag)
        .run(&history);

    assert_eq!(result, Err(Interrupted { position: 0 }));
}

#[test]
fn test_unset_interrupt_flag_is_transparent() {
    let flag = AtomicBool::new(false);
    let history = vec![MutationRecord::root("a"), MutationRecord::child("b", "a")];

    let result = Verifier::new(VerifyPolicy::FailFast)
        .interruptible(&flag)
        .run(&history);

    assert_eq!(result.map(|r| r.node_count()), Ok(Some(2)));
    flag.store(true, Ordering::Relaxed);
    assert!(Verifier::default().interruptible(&flag).run(&history).is_err());
}

#[test]
fn test_checkpoint_reports_position() {
    let flag = AtomicBool::new(false);
    let verifier = Verifier::default().interruptible(&flag);

    assert_eq!(verifier.checkpoint(5), Ok(()));
    flag.store(true, Ordering::Relaxed);
    assert_eq!(verifier.checkpoint(5), Err(Interrupted { position: 5 }));
    assert_eq!(Verifier::default().checkpoint(5), Ok(()));
}
