use thiserror::Error;

/// Failures of the entry workflows.
///
/// Validation failures are signalled before any state is mutated. Out-of-range
/// time components never surface here: the entry form corrects them by
/// clamping, so by the time a canonical time reaches the store it either
/// parses or is rejected as `InvalidTime`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EntryError {
    #[error("a sewadar must be selected")]
    MissingSewadar,

    #[error("a counter must be given")]
    MissingCounter,

    #[error("sewadar '{0}' is not on the roster")]
    UnknownSewadar(String),

    #[error("'{0}' is not a valid HH:MM time")]
    InvalidTime(String),

    #[error("no attendance record with id {0}")]
    RecordNotFound(i64),

    #[error("record {0} is already marked out")]
    RecordAlreadyClosed(i64),
}
