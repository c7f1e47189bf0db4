// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Configuration constants.

/// Schema version stamped into every audit certificate.
pub const CERTIFICATE_SCHEMA_VERSION: u64 = 1;

/// Length in bytes of a history digest.
pub const DIGEST_LEN: usize = 32;
