// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::error::{HistoryError, Result};
use std::fs;
use std::path::Path;

/// Reads a collapse-trace log for display. The content is never parsed;
/// invalid UTF-8 is replaced rather than rejected.
pub fn read_trace(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| HistoryError::io(path, e))?;
    tracing::debug!("Read {} bytes of collapse trace from {:?}", bytes.len(), path);
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Line count of a trace log, used by status reports.
pub fn count_lines(trace: &str) -> usize {
    trace.lines().count()
}
