//! In-memory student record store with validated mutation, derived grade
//! analytics, snapshot-based undo/redo, and CSV/report/JSON export.
//!
//! The store is single-threaded and synchronous: every operation runs to
//! completion, nothing blocks, and a concurrent host must serialize
//! mutations externally. All failures come back as [`StoreError`]
//! results; no operation panics or aborts.

mod analytics;
mod error;
mod export;
mod grade;
mod snapshot;
mod store;
mod student;
mod validate;

pub use analytics::{calculate_average, ClassStatistics, StudentWithGrade};
pub use error::{ErrorKind, StoreError};
pub use export::NO_DATA;
pub use grade::{Grade, GradeDistribution, Status, PASSING_AVERAGE};
pub use snapshot::{History, Snapshot, DEFAULT_HISTORY_CAPACITY};
pub use store::GradeBook;
pub use student::Student;
pub use validate::{
    validate_name, validate_scores, MAX_SCORES, NAME_MAX_LEN, NAME_MIN_LEN, SCORE_MAX, SCORE_MIN,
};

// Re-export the EventEmitter from the event_emitter_rs crate
#[cfg(feature = "emitter")]
pub use event_emitter_rs::EventEmitter;
