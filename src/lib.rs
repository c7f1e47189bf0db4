// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.

//! fab-atom: integrity verification for recorded mutation histories.
//!
//! The atomizer records every speculative transformation it performs as a
//! mutation record pointing at the record it was derived from. This crate
//! decides whether such a recording is a well-formed derivation chain. It
//! does no I/O; loading files is `fab-atom-history`'s job.

pub mod config;
pub mod error;
pub mod types;
pub mod report;
pub mod verify;
pub mod proof;

pub use error::Interrupted;
pub use report::{VerificationReport, Violation, ViolationKind};
pub use types::{History, MutationId, MutationRecord};
pub use verify::{verify, verify_with_policy, Verifier, VerifyPolicy};

#[cfg(test)]
pub mod tests;
