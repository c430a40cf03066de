//! The per-file record emitted for every leaf entry

use std::fs::Metadata;
use std::os::unix::fs::MetadataExt;

use serde::Serialize;

/// Metadata for one non-directory entry.
///
/// Field order is the key order of the emitted JSON object.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileRecord {
    pub file: String,
    pub size: u64,
    pub atime: f64,
    pub ctime: f64,
    pub mtime: f64,
    pub user: String,
    pub group: String,
    /// Raw `st_mode`, file-type bits included.
    pub perms: u32,
    pub host: String,
}

impl FileRecord {
    /// Build a record from a stat result. Owner names and host are resolved by the caller.
    pub fn from_metadata(
        file: String,
        meta: &Metadata,
        user: String,
        group: String,
        host: &str,
    ) -> Self {
        Self {
            file,
            size: meta.size(),
            atime: epoch_seconds(meta.atime(), meta.atime_nsec()),
            ctime: epoch_seconds(meta.ctime(), meta.ctime_nsec()),
            mtime: epoch_seconds(meta.mtime(), meta.mtime_nsec()),
            user,
            group,
            perms: meta.mode(),
            host: host.to_string(),
        }
    }
}

/// Combine whole seconds and a nanosecond part into fractional seconds.
pub fn epoch_seconds(secs: i64, nsecs: i64) -> f64 {
    secs as f64 + nsecs as f64 / 1e9
}
