use std::fmt;

/// Broad classification of a [`StoreError`].
///
/// Every failure the store reports is recoverable; `Internal` covers
/// faults caught at the operation boundary (a snapshot that fails to
/// decode) and is surfaced as a result like everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Conflict,
    HistoryEmpty,
    Internal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Name failed a validation rule. The payload names the rule violated.
    InvalidName(String),
    /// Score list failed a validation rule.
    InvalidScores(String),
    /// A record with the same case-insensitive name already exists.
    DuplicateName(String),
    /// No record matches the given name.
    NotFound(String),
    NothingToUndo,
    NothingToRedo,
    /// A snapshot or export failed to encode or decode.
    Corrupted(String),
}

impl StoreError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            StoreError::InvalidName(_) | StoreError::InvalidScores(_) => ErrorKind::Validation,
            StoreError::DuplicateName(_) | StoreError::NotFound(_) => ErrorKind::Conflict,
            StoreError::NothingToUndo | StoreError::NothingToRedo => ErrorKind::HistoryEmpty,
            StoreError::Corrupted(_) => ErrorKind::Internal,
        }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::InvalidName(rule) => write!(f, "invalid name: {}", rule),
            StoreError::InvalidScores(rule) => write!(f, "invalid scores: {}", rule),
            StoreError::DuplicateName(name) => {
                write!(f, "student \"{}\" already exists", name)
            }
            StoreError::NotFound(name) => write!(f, "student \"{}\" not found", name),
            StoreError::NothingToUndo => write!(f, "nothing to undo"),
            StoreError::NothingToRedo => write!(f, "nothing to redo"),
            StoreError::Corrupted(message) => write!(f, "store fault: {}", message),
        }
    }
}

impl std::error::Error for StoreError {}
