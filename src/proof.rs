//! Audit certificate structures.

// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::config::{CERTIFICATE_SCHEMA_VERSION, DIGEST_LEN};
use crate::report::VerificationReport;
use serde::{Deserialize, Serialize};

/// BLAKE3 hash of the exact bytes a history was decoded from.
pub fn history_digest(history_bytes: &[u8]) -> [u8; DIGEST_LEN] {
    blake3::hash(history_bytes).into()
}

/// A receipt binding a verdict to the bytes it was computed from.
///
/// Downstream tools compare `history_digest` against the file they are about
/// to trust; a certificate says nothing about any other bytes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuditCertificate {
    pub schema_version: u64,

    /// Hex-encoded BLAKE3 digest of the history file.
    pub history_digest: String,

    /// Number of records decoded, whether or not they verified.
    pub record_count: usize,

    pub verdict: VerificationReport,

    /// RFC 3339, supplied by the caller.
    pub verified_at: String,
}

impl AuditCertificate {
    pub fn new(
        history_bytes: &[u8],
        record_count: usize,
        verdict: VerificationReport,
        verified_at: impl Into<String>,
    ) -> Self {
        Self::from_digest(history_digest(history_bytes), record_count, verdict, verified_at)
    }

    pub fn from_digest(
        digest: [u8; DIGEST_LEN],
        record_count: usize,
        verdict: VerificationReport,
        verified_at: impl Into<String>,
    ) -> Self {
        Self {
            schema_version: CERTIFICATE_SCHEMA_VERSION,
            history_digest: hex::encode(digest),
            record_count,
            verdict,
            verified_at: verified_at.into(),
        }
    }

    /// True when the certificate was issued for exactly these bytes.
    pub fn covers(&self, history_bytes: &[u8]) -> bool {
        self.history_digest == hex::encode(history_digest(history_bytes))
    }
}
