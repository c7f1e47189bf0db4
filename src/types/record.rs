//! Mutation record definition.

// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::types::id::MutationId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One step of a recorded derivation.
///
/// `parent` is `None` only for the root. Everything the Atomizer wrote besides
/// `id` and `parent` lives in `payload` and is never interpreted here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MutationRecord {
    pub id: MutationId,
    pub parent: Option<MutationId>,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub payload: Map<String, Value>,
}

impl MutationRecord {
    /// A record with no parent.
    pub fn root(id: impl Into<MutationId>) -> Self {
        Self {
            id: id.into(),
            parent: None,
            payload: Map::new(),
        }
    }

    /// A record derived from `parent`.
    pub fn child(id: impl Into<MutationId>, parent: impl Into<MutationId>) -> Self {
        Self {
            id: id.into(),
            parent: Some(parent.into()),
            payload: Map::new(),
        }
    }

    pub fn with_payload(mut self, payload: Map<String, Value>) -> Self {
        self.payload = payload;
        self
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub fn is_self_referencing(&self) -> bool {
        self.parent.as_ref() == Some(&self.id)
    }
}
