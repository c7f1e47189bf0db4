// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Mutation history file format.
//!
//! On disk a history is a JSON array of objects. Each object carries an `id`
//! and a `parent` (`parentId` is accepted too); every other key is payload.
//! Both are required. The Atomizer writes `""` as the root's parent; a
//! missing or `null` parent is malformed, not a root. Ids may be strings or
//! integers; integers are keyed by their decimal rendering.
use crate::error::{HistoryError, Result};
use fab_atom::{
    History, MutationId, MutationRecord, VerificationReport, Verifier, VerifyPolicy, Violation,
    ViolationKind,
};
use serde_json::{Map, Value};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

const ID_KEY: &str = "id";
const PARENT_KEY: &str = "parent";
const PARENT_ALIAS_KEY: &str = "parentId";

/// Parent marker written for the root record.
pub const NO_PARENT: &str = "";

/// Records decoded from one history file.
///
/// Records that failed to decode are kept as `MalformedRecord` violations at
/// their original positions; `records` holds only the ones that decoded.
#[derive(Debug, Clone, Default)]
pub struct DecodedHistory {
    pub records: History,
    pub malformed: Vec<Violation>,
}

impl DecodedHistory {
    /// Number of entries in the file, decodable or not.
    pub fn record_count(&self) -> usize {
        self.records.len() + self.malformed.len()
    }

    pub fn is_well_formed(&self) -> bool {
        self.malformed.is_empty()
    }

    /// Runs `verifier` over the decoded records. Structural checks are
    /// skipped entirely when any record was malformed, since positions of
    /// the remaining records no longer line up with the file.
    pub fn verify(&self, verifier: &Verifier<'_>) -> Result<VerificationReport> {
        if !self.is_well_formed() {
            verifier.checkpoint(0)?;
            let mut violations = self.malformed.clone();
            if verifier.policy() == VerifyPolicy::FailFast {
                violations.truncate(1);
            }
            return Ok(VerificationReport::from_violations(
                self.record_count(),
                violations,
            ));
        }
        Ok(verifier.run(&self.records)?)
    }
}

/// Reads the raw bytes of a history file.
pub fn read_bytes(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| HistoryError::io(path, e))?;
    tracing::debug!("Read {} bytes of history from {:?}", bytes.len(), path);
    Ok(bytes)
}

/// Decodes history bytes. Only a syntax error or a non-array top level is
/// an `Err`; per-record problems are collected in the result.
pub fn decode(bytes: &[u8]) -> Result<DecodedHistory> {
    decode_with(bytes, &Verifier::default())
}

/// [`decode`], honouring `verifier`'s interrupt flag between records.
pub fn decode_with(bytes: &[u8], verifier: &Verifier<'_>) -> Result<DecodedHistory> {
    let items = match serde_json::from_slice::<Value>(bytes)? {
        Value::Array(items) => items,
        other => {
            return Err(HistoryError::NotAnArray {
                found: json_kind(&other),
            })
        }
    };

    let mut decoded = DecodedHistory {
        records: Vec::with_capacity(items.len()),
        malformed: Vec::new(),
    };

    for (position, item) in items.into_iter().enumerate() {
        verifier.checkpoint(position)?;
        match decode_record(item) {
            Ok(record) => decoded.records.push(record),
            Err(reason) => {
                tracing::warn!("Malformed mutation record at position {}: {}", position, reason);
                decoded
                    .malformed
                    .push(Violation::at(position, ViolationKind::MalformedRecord { reason }));
            }
        }
    }

    Ok(decoded)
}

/// Reads and decodes a history file.
pub fn load(path: impl AsRef<Path>) -> Result<DecodedHistory> {
    let bytes = read_bytes(path)?;
    decode(&bytes)
}

fn decode_record(value: Value) -> std::result::Result<MutationRecord, String> {
    let mut fields = match value {
        Value::Object(fields) => fields,
        other => return Err(format!("expected an object, found {}", json_kind(&other))),
    };

    let id = match fields.remove(ID_KEY) {
        None => return Err(format!("missing required field `{}`", ID_KEY)),
        Some(value) => match id_text(&value) {
            Some(text) if !text.is_empty() => MutationId(text),
            Some(_) => return Err(format!("field `{}` is empty", ID_KEY)),
            None => {
                return Err(format!(
                    "field `{}` must be a string or integer, found {}",
                    ID_KEY,
                    json_kind(&value)
                ))
            }
        },
    };

    let raw_parent = match (fields.remove(PARENT_KEY), fields.remove(PARENT_ALIAS_KEY)) {
        (Some(_), Some(_)) => {
            return Err(format!(
                "record {} sets both `{}` and `{}`",
                id, PARENT_KEY, PARENT_ALIAS_KEY
            ))
        }
        (parent, alias) => parent.or(alias),
    };

    let parent = match raw_parent {
        None | Some(Value::Null) => {
            return Err(format!("missing required field `{}`", PARENT_KEY))
        }
        Some(value) => match id_text(&value) {
            Some(text) if text == NO_PARENT => None,
            Some(text) => Some(MutationId(text)),
            None => {
                return Err(format!(
                    "parent of record {} must be a string or integer, found {}",
                    id,
                    json_kind(&value)
                ))
            }
        },
    };

    Ok(MutationRecord {
        id,
        parent,
        payload: fields,
    })
}

fn id_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.is_i64() || n.is_u64() => Some(n.to_string()),
        _ => None,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Renders records in the on-disk format, roots carrying the `""` marker.
pub fn encode(records: &[MutationRecord]) -> Value {
    let items = records
        .iter()
        .map(|record| {
            let mut fields = Map::new();
            fields.insert(ID_KEY.to_string(), Value::String(record.id.0.clone()));
            let parent = record
                .parent
                .as_ref()
                .map_or(NO_PARENT, MutationId::as_str);
            fields.insert(PARENT_KEY.to_string(), Value::String(parent.to_string()));
            for (key, value) in &record.payload {
                fields.insert(key.clone(), value.clone());
            }
            Value::Object(fields)
        })
        .collect();
    Value::Array(items)
}

/// Writes records to `path`, creating parent directories as needed.
pub fn write_to(path: impl AsRef<Path>, records: &[MutationRecord]) -> Result<()> {
    let path = path.as_ref();
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|e| HistoryError::io(dir, e))?;
    }

    let file = File::create(path).map_err(|e| HistoryError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &encode(records))
        .map_err(|e| HistoryError::io(path, e.into()))?;
    writer.flush().map_err(|e| HistoryError::io(path, e))?;
    Ok(())
}
