use std::time::SystemTime;

use serde::{Deserialize, Serialize};

/// A single stored student record.
///
/// The `id` is assigned by the store and never reused; `name` is held
/// trimmed and is unique case-insensitively across the store. The
/// timestamps are informational only.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: String,
    pub name: String,
    pub scores: Vec<f64>,
    pub added_at: SystemTime,
    /// Serialized unconditionally (null while unset): history snapshots
    /// use a non-self-describing encoding, so the field cannot be
    /// skipped without corrupting the round-trip.
    pub last_edited_at: Option<SystemTime>,
}

impl Student {
    pub(crate) fn new(id: String, name: String, scores: Vec<f64>) -> Self {
        Student {
            id,
            name,
            scores,
            added_at: SystemTime::now(),
            last_edited_at: None,
        }
    }
}
