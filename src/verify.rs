//! Mutation history integrity verification.

// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//!
//! A history is trusted as an audit trail only if it is a derivation chain
//! that could have been built append-only:
//! - record 0 is the only record without a parent
//! - every other record names a parent recorded strictly earlier
//! - ids are unique
//! - no record is its own parent
//!
//! Edges can only point backwards once the second rule holds, so a
//! self-reference is the only cycle left to rule out and no graph traversal
//! is needed. The whole check is one forward pass over the records.
use crate::error::{Interrupted, VerifyResult};
use crate::report::{VerificationReport, Violation, ViolationKind};
use crate::types::{MutationId, MutationRecord};
use core::convert::Infallible;
use core::sync::atomic::{AtomicBool, Ordering};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// What to do after the first violation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerifyPolicy {
    /// Keep scanning and report every violation in recorded order.
    #[default]
    Collect,
    /// Stop at the first violation.
    FailFast,
}

/// Verifies `history` with the default policy.
pub fn verify(history: &[MutationRecord]) -> VerificationReport {
    verify_with_policy(history, VerifyPolicy::default())
}

pub fn verify_with_policy(history: &[MutationRecord], policy: VerifyPolicy) -> VerificationReport {
    match scan::<Infallible>(history, policy, |_| Ok(())) {
        Ok(report) => report,
        Err(never) => match never {},
    }
}

/// Configurable verifier. Holds no state between runs.
#[derive(Clone, Copy, Debug, Default)]
pub struct Verifier<'a> {
    policy: VerifyPolicy,
    interrupt: Option<&'a AtomicBool>,
}

impl<'a> Verifier<'a> {
    pub fn new(policy: VerifyPolicy) -> Self {
        Self {
            policy,
            interrupt: None,
        }
    }

    /// Checks `flag` before each record and abandons the run once it is set.
    pub fn interruptible(mut self, flag: &'a AtomicBool) -> Self {
        self.interrupt = Some(flag);
        self
    }

    pub fn policy(&self) -> VerifyPolicy {
        self.policy
    }

    /// Fails with `Interrupted { position }` once the interrupt flag is set.
    /// Always passes for a verifier without a flag.
    pub fn checkpoint(&self, position: usize) -> VerifyResult<()> {
        match self.interrupt {
            Some(flag) if flag.load(Ordering::Relaxed) => Err(Interrupted { position }),
            _ => Ok(()),
        }
    }

    pub fn run(&self, history: &[MutationRecord]) -> VerifyResult<VerificationReport> {
        scan(history, self.policy, |position| self.checkpoint(position))
    }
}

fn scan<E>(
    history: &[MutationRecord],
    policy: VerifyPolicy,
    mut gate: impl FnMut(usize) -> Result<(), E>,
) -> Result<VerificationReport, E> {
    if history.is_empty() {
        return Ok(VerificationReport::from_violations(
            0,
            vec![Violation::global(ViolationKind::EmptyHistory)],
        ));
    }

    let mut pass = Pass::with_capacity(history.len());

    for (position, record) in history.iter().enumerate() {
        gate(position)?;
        pass.check(position, record);

        if policy == VerifyPolicy::FailFast && !pass.violations.is_empty() {
            // A single record can break two invariants at once.
            pass.violations.truncate(1);
            break;
        }
    }

    Ok(VerificationReport::from_violations(history.len(), pass.violations))
}

/// State of one forward pass. Borrows ids from the history being checked.
struct Pass<'h> {
    /// id -> position of its first occurrence
    seen: FxHashMap<&'h MutationId, usize>,
    root: Option<&'h MutationId>,
    violations: Vec<Violation>,
}

impl<'h> Pass<'h> {
    fn with_capacity(n: usize) -> Self {
        let mut seen = FxHashMap::default();
        seen.reserve(n);
        Self {
            seen,
            root: None,
            violations: Vec::new(),
        }
    }

    fn flag(&mut self, position: usize, kind: ViolationKind) {
        self.violations.push(Violation::at(position, kind));
    }

    fn check(&mut self, position: usize, record: &'h MutationRecord) {
        let id = &record.id;

        if let Some(&first_seen) = self.seen.get(id) {
            self.flag(
                position,
                ViolationKind::DuplicateId {
                    id: id.clone(),
                    first_seen,
                },
            );
        }

        match (&record.parent, position) {
            (None, 0) => self.root = Some(id),
            (Some(parent), 0) => {
                self.flag(
                    position,
                    ViolationKind::RootHasParent {
                        id: id.clone(),
                        parent: parent.clone(),
                    },
                );
                if record.is_self_referencing() {
                    self.flag(position, ViolationKind::SelfReference { id: id.clone() });
                }
            }
            (None, _) => {
                let kind = match self.root {
                    Some(root) => ViolationKind::MultipleRoots {
                        id: id.clone(),
                        root: root.clone(),
                    },
                    None => {
                        self.root = Some(id);
                        ViolationKind::MisplacedRoot { id: id.clone() }
                    }
                };
                self.flag(position, kind);
            }
            // Must precede the seen lookup: a duplicated id would otherwise
            // resolve its own parent reference.
            (Some(_), _) if record.is_self_referencing() => {
                self.flag(position, ViolationKind::SelfReference { id: id.clone() });
            }
            (Some(parent), _) => {
                if !self.seen.contains_key(parent) {
                    self.flag(
                        position,
                        ViolationKind::MissingParent {
                            parent: parent.clone(),
                            id: id.clone(),
                        },
                    );
                }
            }
        }

        self.seen.entry(id).or_insert(position);
    }
}
