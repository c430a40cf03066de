//! Error types for unixfiles
//!
//! Traversal problems (unreadable directories, entries that vanish before
//! they can be stat'd) are not errors here: the walker logs and counts them.
//! Only failures to produce output abort a run.

use thiserror::Error;

/// Errors that stop a listing run.
#[derive(Error, Debug)]
pub enum ListError {
    /// Writing to the output sink failed
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// A record could not be serialized
    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ListError>;
