//! Verification verdicts.

// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::types::id::MutationId;
use core::fmt;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The invariant a record broke, with the ids needed to find it.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViolationKind {
    #[error("first record {id} must not have a parent, found {parent}")]
    RootHasParent { id: MutationId, parent: MutationId },

    #[error("missing parent {parent} for node {id}")]
    MissingParent { parent: MutationId, id: MutationId },

    #[error("record {id} names itself as its parent")]
    SelfReference { id: MutationId },

    #[error("duplicate id {id}, first recorded at position {first_seen}")]
    DuplicateId { id: MutationId, first_seen: usize },

    #[error("record {id} has no parent but {root} is already the root")]
    MultipleRoots { id: MutationId, root: MutationId },

    #[error("record {id} has no parent but is not the first record")]
    MisplacedRoot { id: MutationId },

    #[error("history contains no records")]
    EmptyHistory,

    #[error("malformed record: {reason}")]
    MalformedRecord { reason: String },
}

impl ViolationKind {
    /// Stable short name, used as a table column and in logs.
    pub fn name(&self) -> &'static str {
        match self {
            ViolationKind::RootHasParent { .. } => "RootHasParent",
            ViolationKind::MissingParent { .. } => "MissingParent",
            ViolationKind::SelfReference { .. } => "SelfReference",
            ViolationKind::DuplicateId { .. } => "DuplicateId",
            ViolationKind::MultipleRoots { .. } => "MultipleRoots",
            ViolationKind::MisplacedRoot { .. } => "MisplacedRoot",
            ViolationKind::EmptyHistory => "EmptyHistory",
            ViolationKind::MalformedRecord { .. } => "MalformedRecord",
        }
    }
}

/// A located violation. `position` is the index in recorded order and is
/// `None` only for violations of the history as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub position: Option<usize>,
    #[serde(flatten)]
    pub kind: ViolationKind,
}

impl Violation {
    pub fn at(position: usize, kind: ViolationKind) -> Self {
        Self {
            position: Some(position),
            kind,
        }
    }

    pub fn global(kind: ViolationKind) -> Self {
        Self {
            position: None,
            kind,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.position {
            Some(p) => write!(f, "record {}: {}", p, self.kind),
            None => write!(f, "{}", self.kind),
        }
    }
}

/// Outcome of verifying one history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum VerificationReport {
    Verified { node_count: usize },
    /// Never constructed with an empty list.
    Failed { violations: Vec<Violation> },
}

impl VerificationReport {
    /// `Verified` when `violations` is empty, `Failed` otherwise.
    pub fn from_violations(node_count: usize, violations: Vec<Violation>) -> Self {
        if violations.is_empty() {
            VerificationReport::Verified { node_count }
        } else {
            VerificationReport::Failed { violations }
        }
    }

    pub fn is_verified(&self) -> bool {
        matches!(self, VerificationReport::Verified { .. })
    }

    pub fn node_count(&self) -> Option<usize> {
        match self {
            VerificationReport::Verified { node_count } => Some(*node_count),
            VerificationReport::Failed { .. } => None,
        }
    }

    pub fn violations(&self) -> &[Violation] {
        match self {
            VerificationReport::Verified { .. } => &[],
            VerificationReport::Failed { violations } => violations,
        }
    }

    pub fn first_violation(&self) -> Option<&Violation> {
        self.violations().first()
    }
}

impl fmt::Display for VerificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerificationReport::Verified { node_count } => {
                write!(f, "verified: {} nodes, no missing links", node_count)
            }
            VerificationReport::Failed { violations } => {
                write!(f, "failed: {} violation(s)", violations.len())?;
                for v in violations {
                    write!(f, "\n  {}", v)?;
                }
                Ok(())
            }
        }
    }
}
