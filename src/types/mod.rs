// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
pub mod id;
pub mod record;

pub use id::MutationId;
pub use record::MutationRecord;

/// Mutation records in the order they were recorded.
pub type History = Vec<MutationRecord>;
