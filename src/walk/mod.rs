//! Directory traversal
//!
//! `Walker` drains a FIFO `WorkQueue` of directories, queueing
//! subdirectories and turning every other entry into a `FileRecord` that is
//! handed straight to a `RecordSink`. Nothing is accumulated between records.

mod config;
mod queue;
mod walker;

pub use config::WalkerConfig;
pub use queue::WorkQueue;
pub use walker::{RecordSink, WalkStats, Walker, join_child};
