// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Commit record structure and canonical encoding
//!
//! Each record persists as one line of compact JSON. Object keys are
//! emitted in lexicographic order at every depth, so logically equal
//! records always encode to identical bytes:
//!
//! ```text
//! {"commit_id":"c1","metadata":{..},"payload":{..},"sequence_number":10}
//! ```
//!
//! `metadata` is omitted entirely when absent.

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Reasons a persisted line fails to decode into a [`CommitRecord`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntryError {
    #[error("entry is not valid UTF-8")]
    Encoding,
    #[error("entry is not valid JSON: {0}")]
    Syntax(String),
    #[error("expected a JSON object")]
    NotObject,
    #[error("{field} {expected}")]
    Field {
        field: &'static str,
        expected: &'static str,
    },
}

impl EntryError {
    fn field(field: &'static str, expected: &'static str) -> Self {
        Self::Field { field, expected }
    }
}

/// A single durable unit of change
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommitRecord {
    /// Caller-assigned identifier, never empty
    pub commit_id: String,
    /// Opaque annotations, stored but never interpreted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
    /// Application data
    pub payload: Map<String, Value>,
    /// Ordering marker, expected non-decreasing within a partition
    pub sequence_number: u64,
}

impl CommitRecord {
    pub fn new(
        commit_id: impl Into<String>,
        sequence_number: u64,
        payload: Map<String, Value>,
    ) -> Self {
        Self {
            commit_id: commit_id.into(),
            metadata: None,
            payload,
            sequence_number,
        }
    }

    pub fn with_metadata(mut self, metadata: Map<String, Value>) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Check the parts of the record contract the type system cannot express
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.commit_id.is_empty() {
            return Err(ValidationError::EmptyCommitId);
        }
        Ok(())
    }

    /// Encode as a single canonical JSON line (without the trailing newline)
    pub fn to_line(&self) -> String {
        let mut object = Map::new();
        object.insert("commit_id".to_string(), Value::String(self.commit_id.clone()));
        if let Some(metadata) = &self.metadata {
            object.insert("metadata".to_string(), canonical_object(metadata));
        }
        object.insert("payload".to_string(), canonical_object(&self.payload));
        object.insert(
            "sequence_number".to_string(),
            Value::from(self.sequence_number),
        );
        // Top-level keys are inserted in sorted order already
        Value::Object(object).to_string()
    }

    /// Decode and re-validate a persisted line
    ///
    /// The file is an external artifact, so every field is checked here
    /// independently of what the writer validated.
    pub fn from_line(line: &str) -> Result<Self, EntryError> {
        let value: Value =
            serde_json::from_str(line).map_err(|e| EntryError::Syntax(e.to_string()))?;
        Self::try_from(value)
    }

    /// Decode a persisted line from raw bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, EntryError> {
        let line = std::str::from_utf8(bytes).map_err(|_| EntryError::Encoding)?;
        Self::from_line(line.trim())
    }
}

impl TryFrom<Value> for CommitRecord {
    type Error = EntryError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let Value::Object(mut object) = value else {
            return Err(EntryError::NotObject);
        };

        let commit_id = match object.remove("commit_id") {
            Some(Value::String(id)) if !id.is_empty() => id,
            _ => return Err(EntryError::field("commit_id", "must be a non-empty string")),
        };

        let sequence_number = object
            .remove("sequence_number")
            .as_ref()
            .and_then(Value::as_u64)
            .ok_or_else(|| {
                EntryError::field("sequence_number", "must be a non-negative integer")
            })?;

        let payload = match object.remove("payload") {
            Some(Value::Object(payload)) => payload,
            _ => return Err(EntryError::field("payload", "must be an object")),
        };

        let metadata = match object.remove("metadata") {
            None | Some(Value::Null) => None,
            Some(Value::Object(metadata)) => Some(metadata),
            Some(_) => {
                return Err(EntryError::field(
                    "metadata",
                    "must be an object when provided",
                ))
            }
        };

        Ok(Self {
            commit_id,
            metadata,
            payload,
            sequence_number,
        })
    }
}

/// Rebuild an object with keys sorted at every depth
///
/// serde_json keeps insertion order when `preserve_order` is enabled
/// anywhere in the build, so sorting is done explicitly.
fn canonical_object(object: &Map<String, Value>) -> Value {
    let mut keys: Vec<&String> = object.keys().collect();
    keys.sort();
    let mut sorted = Map::new();
    for key in keys {
        if let Some(value) = object.get(key) {
            sorted.insert(key.clone(), canonical_value(value));
        }
    }
    Value::Object(sorted)
}

fn canonical_value(value: &Value) -> Value {
    match value {
        Value::Object(object) => canonical_object(object),
        Value::Array(items) => Value::Array(items.iter().map(canonical_value).collect()),
        other => other.clone(),
    }
}

#[cfg(test)]
#[path = "commit_tests.rs"]
mod tests;
