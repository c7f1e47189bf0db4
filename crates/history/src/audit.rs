// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Read, hash, decode and verify a history file in one call.
use crate::error::Result;
use crate::history;
use fab_atom::config::DIGEST_LEN;
use fab_atom::proof::{history_digest, AuditCertificate};
use fab_atom::{VerificationReport, Verifier};
use std::path::Path;
use std::time::Instant;

/// Result of auditing one history file.
#[derive(Debug, Clone)]
pub struct AuditOutcome {
    pub report: VerificationReport,
    /// Entries in the file, including malformed ones.
    pub record_count: usize,
    /// BLAKE3 of the exact bytes that were verified.
    pub digest: [u8; DIGEST_LEN],
}

impl AuditOutcome {
    pub fn certificate(&self, verified_at: impl Into<String>) -> AuditCertificate {
        AuditCertificate::from_digest(
            self.digest,
            self.record_count,
            self.report.clone(),
            verified_at,
        )
    }
}

/// Audits the history at `path`.
///
/// # Errors
/// - the file cannot be read
/// - the file is not a JSON array
/// - `verifier` was interrupted
///
/// Malformed records and structural violations are not errors; they are in
/// the returned report.
pub fn verify_file(path: impl AsRef<Path>, verifier: &Verifier<'_>) -> Result<AuditOutcome> {
    let path = path.as_ref();
    let started = Instant::now();

    let bytes = history::read_bytes(path)?;
    let digest = history_digest(&bytes);
    let decoded = history::decode_with(&bytes, verifier)?;
    let report = decoded.verify(verifier)?;

    match &report {
        VerificationReport::Verified { node_count } => tracing::info!(
            "History {:?} verified: {} nodes in {:?}",
            path,
            node_count,
            started.elapsed()
        ),
        VerificationReport::Failed { violations } => tracing::warn!(
            "History {:?} failed verification with {} violation(s)",
            path,
            violations.len()
        ),
    }

    Ok(AuditOutcome {
        report,
        record_count: decoded.record_count(),
        digest,
    })
}
