//! Typed error kinds for the kayel data layer.
//!
//! Callers (the presentation shell) need to distinguish failure classes to
//! present specific feedback: a duplicate group name is a different user
//! message than an unreachable database. Every public operation in this crate
//! returns [`Result`] with one of these kinds.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// All failure kinds surfaced by the data layer.
///
/// Absence of a record is *not* an error for plain reads (those return
/// `Ok(None)`); it is an error only for operations that expect their target
/// to exist, such as seance adjustments.
#[derive(Debug, Error)]
pub enum Error {
    /// Input failed a shape or range check before any storage mutation.
    #[error("{0}")]
    Validation(String),

    /// A group with the same name already exists.
    #[error("group '{0}' already exists")]
    DuplicateName(String),

    /// A referenced group does not exist.
    #[error("group {0} not found")]
    GroupNotFound(i32),

    /// An operation targeted a student that does not exist.
    #[error("student {0} not found")]
    StudentNotFound(i32),

    /// The local database could not be opened or is from a newer,
    /// incompatible schema version.
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),

    /// An underlying SQLite failure not covered by a more specific kind.
    #[error(transparent)]
    Storage(#[from] rusqlite::Error),

    /// A backup document could not be serialized or deserialized.
    #[error("invalid backup document: {0}")]
    Codec(#[from] serde_json::Error),

    /// Filesystem failure while reading or writing a backup file.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
