//! The owning record store: validated mutation plus undo/redo.

use std::fmt;

#[cfg(feature = "emitter")]
use event_emitter_rs::EventEmitter;
#[cfg(feature = "emitter")]
use serde::Serialize;

use crate::error::StoreError;
use crate::snapshot::{History, Snapshot, DEFAULT_HISTORY_CAPACITY};
use crate::student::Student;
use crate::validate::{normalize, validate_name, validate_scores};

/// In-memory store of student records with bounded undo/redo history.
///
/// The store owns every record and snapshot it holds. Queries hand out
/// clones, never references a caller could mutate to bypass validation.
/// There is no internal locking: a concurrent host must serialize
/// mutations externally.
///
/// With the `emitter` feature (on by default) the store emits
/// `StudentAdded`, `StudentRemoved`, and `StateRestored` events with
/// JSON payloads after each successful mutation.
pub struct GradeBook {
    students: Vec<Student>,
    history: History,
    next_id: u64,
    #[cfg(feature = "emitter")]
    event_emitter: EventEmitter,
}

impl fmt::Debug for GradeBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GradeBook")
            .field("students", &self.students)
            .field("history", &self.history)
            .field("next_id", &self.next_id)
            .finish()
    }
}

impl Default for GradeBook {
    fn default() -> Self {
        Self::new()
    }
}

impl GradeBook {
    pub fn new() -> Self {
        Self::with_history_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    /// Create a store that retains at most `capacity` undo snapshots;
    /// older checkpoints are evicted first.
    pub fn with_history_capacity(capacity: usize) -> Self {
        GradeBook {
            students: Vec::new(),
            history: History::new(capacity),
            next_id: 0,
            #[cfg(feature = "emitter")]
            event_emitter: EventEmitter::new(),
        }
    }

    /// Add a student after validating the name and scores.
    ///
    /// Validation failures and duplicate names leave the store and its
    /// history untouched. On success the pre-mutation state is pushed to
    /// the undo history and a clone of the stored record is returned.
    pub fn add_student(&mut self, name: &str, scores: &[f64]) -> Result<Student, StoreError> {
        let trimmed = validate_name(name)?;
        if self.find_index(&trimmed).is_some() {
            return Err(StoreError::DuplicateName(trimmed));
        }
        validate_scores(scores)?;

        self.checkpoint(format!("Added student: {trimmed}"))?;

        self.next_id += 1;
        let student = Student::new(format!("STU-{}", self.next_id), trimmed, scores.to_vec());
        self.students.push(student.clone());

        self.notify("StudentAdded", &student);
        Ok(student)
    }

    /// Remove the student matching `name` (case-insensitive), returning
    /// the removed record.
    pub fn remove_student(&mut self, name: &str) -> Result<Student, StoreError> {
        let index = self
            .find_index(name)
            .ok_or_else(|| StoreError::NotFound(name.trim().to_string()))?;

        self.checkpoint(format!("Removed student: {}", self.students[index].name))?;

        let removed = self.students.remove(index);
        self.notify("StudentRemoved", &removed);
        Ok(removed)
    }

    /// Revert to the state before the most recent mutation.
    ///
    /// The current state moves onto the redo stack so the step can be
    /// replayed. Returns the label of the undone action.
    pub fn undo(&mut self) -> Result<String, StoreError> {
        // both fallible steps run before the stacks change, so a bad
        // snapshot leaves the history intact
        let previous = self.history.peek_undo().ok_or(StoreError::NothingToUndo)?;
        let restored = previous.restore()?;
        let current = Snapshot::capture(previous.action(), &self.students)?;

        let previous = self.history.pop_undo().ok_or(StoreError::NothingToUndo)?;
        self.history.push_redo(current);
        self.students = restored;

        let action = previous.action().to_string();
        self.notify("StateRestored", &action);
        Ok(action)
    }

    /// Replay the most recently undone step.
    ///
    /// Restores exactly one undone state; the state being left becomes a
    /// single new undo checkpoint. Only fresh mutations invalidate the
    /// redo stack, so chains of undo/redo stay symmetric.
    pub fn redo(&mut self) -> Result<String, StoreError> {
        let next = self.history.peek_redo().ok_or(StoreError::NothingToRedo)?;
        let restored = next.restore()?;
        let current = Snapshot::capture(next.action(), &self.students)?;

        let next = self.history.pop_redo().ok_or(StoreError::NothingToRedo)?;
        self.history.push_undo(current);
        self.students = restored;

        let action = next.action().to_string();
        self.notify("StateRestored", &action);
        Ok(action)
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Clones of all stored records, in insertion order.
    pub fn students(&self) -> Vec<Student> {
        self.students.clone()
    }

    pub fn undo_depth(&self) -> usize {
        self.history.undo_depth()
    }

    pub fn redo_depth(&self) -> usize {
        self.history.redo_depth()
    }

    pub(crate) fn records(&self) -> &[Student] {
        &self.students
    }

    fn find_index(&self, name: &str) -> Option<usize> {
        let wanted = normalize(name);
        if wanted.is_empty() {
            return None;
        }
        self.students
            .iter()
            .position(|student| normalize(&student.name) == wanted)
    }

    // Pre-mutation checkpoint. A new mutation invalidates any redo branch.
    fn checkpoint(&mut self, action: String) -> Result<(), StoreError> {
        let snapshot = Snapshot::capture(action, &self.students)?;
        self.history.push_undo(snapshot);
        self.history.clear_redo();
        Ok(())
    }

    #[cfg(feature = "emitter")]
    fn notify<T: Serialize>(&mut self, event: &str, payload: &T) {
        if let Ok(data) = serde_json::to_string(payload) {
            self.event_emitter.emit(event, data);
        }
    }

    #[cfg(not(feature = "emitter"))]
    fn notify<T>(&mut self, _event: &str, _payload: &T) {}
}

#[cfg(feature = "emitter")]
impl GradeBook {
    /// Register a listener for a store event (`StudentAdded`,
    /// `StudentRemoved`, `StateRestored`). Payloads arrive as JSON
    /// strings.
    pub fn on<F>(&mut self, event: &str, listener: F)
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        self.event_emitter.on(event, listener);
    }
}
