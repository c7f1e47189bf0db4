//! Error types.

// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use thiserror::Error;

/// Raised when a verification pass is cancelled through its interrupt flag.
///
/// Structural problems in a history are not errors; they are returned as
/// violations inside a [`crate::report::VerificationReport`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("verification interrupted before record {position}")]
pub struct Interrupted {
    /// Index of the first record that was not examined.
    pub position: usize,
}

pub type VerifyResult<T> = core::result::Result<T, Interrupted>;
