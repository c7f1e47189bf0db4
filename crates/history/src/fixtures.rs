// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::error::{HistoryError, Result};
use crate::history;
use crate::layout;
use fab_atom::MutationRecord;
use serde_json::{json, Map, Value};

use std::fs;
use std::path::{Path, PathBuf};

pub struct TestPaths {
    pub history: PathBuf,
    pub trace: PathBuf,
    pub atomized: PathBuf,
}

fn payload(op: &str, branch: u64) -> Map<String, Value> {
    let mut map = Map::new();
    map.insert("op".to_string(), json!(op));
    map.insert("branch".to_string(), json!(branch));
    map
}

/// A well-formed run: split into two speculative branches, extend one,
/// collapse onto it. Six records.
pub fn valid_records() -> Vec<MutationRecord> {
    vec![
        MutationRecord::root("m0").with_payload(payload("atomize", 0)),
        MutationRecord::child("m1", "m0").with_payload(payload("split", 0)),
        MutationRecord::child("m2", "m0").with_payload(payload("split", 1)),
        MutationRecord::child("m3", "m1").with_payload(payload("rewrite", 0)),
        MutationRecord::child("m4", "m2").with_payload(payload("rewrite", 1)),
        MutationRecord::child("m5", "m3").with_payload(payload("collapse", 0)),
    ]
}

/// Breaks four invariants: a dangling parent (position 2), a duplicate id
/// (position 3), a self-reference (position 4) and a second root (position 5).
pub fn corrupt_records() -> Vec<MutationRecord> {
    vec![
        MutationRecord::root("m0"),
        MutationRecord::child("m1", "m0"),
        MutationRecord::child("m2", "m9"),
        MutationRecord::child("m1", "m0"),
        MutationRecord::child("m4", "m4"),
        MutationRecord::root("m5"),
    ]
}

fn write_artifacts(dir: &Path, records: &[MutationRecord]) -> Result<TestPaths> {
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| HistoryError::io(dir, e))?;
    }

    // 1. audit/dag.json
    let history_path = dir.join(layout::HISTORY_FILE);
    history::write_to(&history_path, records)?;

    // 2. audit/collapse_trace.log
    let trace_path = dir.join(layout::TRACE_FILE);
    let mut trace = String::new();
    for record in records {
        trace.push_str(&format!(
            "[collapse] {} <- {}\n",
            record.id,
            record.parent.as_ref().map_or("(root)", |p| p.as_str())
        ));
    }
    fs::write(&trace_path, trace).map_err(|e| HistoryError::io(&trace_path, e))?;

    // 3. build/atomized.json
    let atomized_path = dir.join(layout::ATOMIZED_OUTPUT);
    if let Some(parent) = atomized_path.parent() {
        fs::create_dir_all(parent).map_err(|e| HistoryError::io(parent, e))?;
    }
    let atoms = json!({ "atoms": records.len() });
    fs::write(&atomized_path, atoms.to_string())
        .map_err(|e| HistoryError::io(&atomized_path, e))?;

    Ok(TestPaths {
        history: history_path,
        trace: trace_path,
        atomized: atomized_path,
    })
}

/// Lays out a complete, valid atomization run under `dir`.
pub fn generate_test_scenario(dir: &Path) -> Result<TestPaths> {
    write_artifacts(dir, &valid_records())
}

/// Same layout as [`generate_test_scenario`] but with a corrupt history.
pub fn generate_corrupt_scenario(dir: &Path) -> Result<TestPaths> {
    write_artifacts(dir, &corrupt_records())
}

/// Valid layout whose history has a record without an id at position 1.
pub fn generate_malformed_scenario(dir: &Path) -> Result<TestPaths> {
    let paths = write_artifacts(dir, &valid_records())?;
    let body = json!([
        {"id": "m0", "parent": ""},
        {"parent": "m0", "op": "split"},
        {"id": "m2", "parent": "m0"}
    ]);
    fs::write(&paths.history, body.to_string()).map_err(|e| HistoryError::io(&paths.history, e))?;
    Ok(paths)
}
