use thiserror::Error;

/// Input rejected before anything is written. Always surfaced verbatim.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("service name must not be empty")]
    EmptyName,

    #[error("price must be a non-negative integer (got {0})")]
    InvalidPrice(i64),

    #[error("unknown category \"{0}\"")]
    UnknownCategory(String),

    #[error("offer title must not be empty")]
    EmptyTitle,

    #[error("offer title must be 50 characters or less (got {0})")]
    TitleTooLong(usize),

    #[error("offer description must not be empty")]
    EmptyBody,

    #[error("offer description must be 200 characters or less (got {0})")]
    BodyTooLong(usize),

    #[error("display delay must be between 1 and 10 minutes (got {0})")]
    DelayOutOfRange(i64),

    #[error("{0} is required")]
    MissingField(&'static str),
}

/// Persistence failure. Reads absorb these; writes surface them.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("store error: {0}")]
    Backend(#[from] rusqlite::Error),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("no platform data directory available")]
    NoDataDir,

    #[error("store lock poisoned")]
    LockPoisoned,
}

/// Umbrella for operations that can fail either way.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}
