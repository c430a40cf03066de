//! unixfiles - stream file metadata for whole directory trees as one JSON array

pub mod error;
pub mod identity;
pub mod output;
pub mod record;
pub mod walk;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{ListError, Result};
pub use identity::{NameResolver, short_hostname};
pub use output::{JsonArrayWriter, stdout_writer};
pub use record::FileRecord;
pub use walk::{RecordSink, WalkStats, Walker, WalkerConfig, WorkQueue};
