// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use fab_atom::Interrupted;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures to acquire a history, as opposed to structural violations
/// inside one.
#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("Failed to read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Invalid history format: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("History must be a JSON array of records, found {found}")]
    NotAnArray { found: &'static str },
    #[error(transparent)]
    Interrupted(#[from] Interrupted),
}

impl HistoryError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        HistoryError::Io {
            path: path.into(),
            source,
        }
    }

    /// True when the file itself could not be read.
    pub fn is_io(&self) -> bool {
        matches!(self, HistoryError::Io { .. })
    }
}

pub type Result<T> = std::result::Result<T, HistoryError>;
