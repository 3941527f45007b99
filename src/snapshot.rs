//! History snapshots and the bounded undo/redo stacks.

use std::collections::VecDeque;
use std::time::SystemTime;

use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::student::Student;

/// Default maximum number of undo snapshots retained.
pub const DEFAULT_HISTORY_CAPACITY: usize = 50;

/// An immutable deep copy of the full record list at a point in time,
/// labeled with the action that was about to change it.
///
/// The record list is held bitcode-encoded, so a snapshot can never alias
/// live records: mutating the store after capture cannot reach back into
/// history. A decode failure on restore surfaces as
/// [`StoreError::Corrupted`] rather than a panic.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Snapshot {
    action: String,
    timestamp: SystemTime,
    students: Vec<u8>,
}

impl Snapshot {
    /// Encode the given record list under an action label.
    pub fn capture(action: impl Into<String>, students: &[Student]) -> Result<Self, StoreError> {
        let data = bitcode::serialize(students)
            .map_err(|e| StoreError::Corrupted(format!("snapshot encode: {e}")))?;
        Ok(Snapshot {
            action: action.into(),
            timestamp: SystemTime::now(),
            students: data,
        })
    }

    /// Decode the captured record list into a fresh vec.
    pub fn restore(&self) -> Result<Vec<Student>, StoreError> {
        bitcode::deserialize(&self.students)
            .map_err(|e| StoreError::Corrupted(format!("snapshot decode: {e}")))
    }

    pub fn action(&self) -> &str {
        &self.action
    }

    pub fn timestamp(&self) -> SystemTime {
        self.timestamp
    }
}

#[cfg(test)]
impl Snapshot {
    /// A snapshot whose payload cannot decode, for failure-path tests.
    pub(crate) fn corrupt(action: &str) -> Self {
        Snapshot {
            action: action.into(),
            timestamp: SystemTime::now(),
            students: vec![0xFF, 0x01],
        }
    }
}

/// Bounded undo stack plus redo stack.
///
/// The undo side evicts its oldest entry past capacity; the redo side is
/// unbounded until cleared. When to clear redo is the store's decision,
/// not enforced here.
#[derive(Debug)]
pub struct History {
    undo: VecDeque<Snapshot>,
    redo: Vec<Snapshot>,
    capacity: usize,
}

impl History {
    pub fn new(capacity: usize) -> Self {
        History {
            undo: VecDeque::new(),
            redo: Vec::new(),
            capacity,
        }
    }

    /// Push an undo snapshot, evicting the oldest entries past capacity.
    pub fn push_undo(&mut self, snapshot: Snapshot) {
        self.undo.push_back(snapshot);
        while self.undo.len() > self.capacity {
            self.undo.pop_front();
        }
    }

    pub fn pop_undo(&mut self) -> Option<Snapshot> {
        self.undo.pop_back()
    }

    pub fn peek_undo(&self) -> Option<&Snapshot> {
        self.undo.back()
    }

    pub fn push_redo(&mut self, snapshot: Snapshot) {
        self.redo.push(snapshot);
    }

    pub fn pop_redo(&mut self) -> Option<Snapshot> {
        self.redo.pop()
    }

    pub fn peek_redo(&self) -> Option<&Snapshot> {
        self.redo.last()
    }

    pub fn clear_redo(&mut self) {
        self.redo.clear();
    }

    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }
}
