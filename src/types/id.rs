//! Identity types.

// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use core::fmt;
use serde::{Deserialize, Serialize};

/// Key of a mutation record inside one history.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MutationId(pub String);

impl MutationId {
    pub fn new(id: impl Into<String>) -> Self {
        MutationId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MutationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MutationId {
    fn from(s: &str) -> Self {
        MutationId(s.to_string())
    }
}

impl From<String> for MutationId {
    fn from(s: String) -> Self {
        MutationId(s)
    }
}
