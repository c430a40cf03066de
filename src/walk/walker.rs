//! Walker - breadth-first traversal that streams leaf records to a sink

use std::ffi::{OsStr, OsString};
use std::fs::{self, Metadata};
use std::os::unix::fs::MetadataExt;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::Result;
use crate::identity::NameResolver;
use crate::record::FileRecord;

use super::config::WalkerConfig;
use super::queue::WorkQueue;

/// Receives records in the order the walker produces them.
pub trait RecordSink {
    fn accept(&mut self, record: FileRecord) -> Result<()>;
}

impl RecordSink for Vec<FileRecord> {
    fn accept(&mut self, record: FileRecord) -> Result<()> {
        self.push(record);
        Ok(())
    }
}

/// Counters for one walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkStats {
    /// Directories that were opened and listed
    pub dirs_visited: u64,
    /// Queued paths that could not be opened as directories
    pub dirs_skipped: u64,
    /// Records handed to the sink
    pub records: u64,
    /// Leaf entries dropped because their stat failed
    pub entries_skipped: u64,
}

/// Breadth-first walker.
///
/// Directories are classified from the listing's type hint and queued;
/// everything else is stat'd and emitted immediately. Memory stays
/// proportional to the queue, never to the number of records.
pub struct Walker {
    config: WalkerConfig,
    names: NameResolver,
}

impl Walker {
    pub fn new(config: WalkerConfig) -> Self {
        Self {
            config,
            names: NameResolver::new(),
        }
    }

    /// Walk every root and stream the leaf records into `sink`.
    ///
    /// Unreadable directories and unstat-able entries are skipped; only a
    /// failing sink ends the walk early.
    pub fn walk<S: RecordSink>(&self, sink: &mut S) -> Result<WalkStats> {
        let mut queue = WorkQueue::seeded(self.config.roots.iter().cloned());
        let mut stats = WalkStats::default();

        while let Some(dir) = queue.pop() {
            self.visit_dir(&dir, &mut queue, sink, &mut stats)?;
        }

        debug!(
            dirs = stats.dirs_visited,
            skipped_dirs = stats.dirs_skipped,
            records = stats.records,
            skipped_entries = stats.entries_skipped,
            "walk finished"
        );
        Ok(stats)
    }

    /// List one directory. The listing handle is dropped before returning.
    fn visit_dir<S: RecordSink>(
        &self,
        dir: &Path,
        queue: &mut WorkQueue,
        sink: &mut S,
        stats: &mut WalkStats,
    ) -> Result<()> {
        let entries = match fs::read_dir(dir) {
            Ok(e) => e,
            Err(err) => {
                warn!("opendir: {}", err);
                stats.dirs_skipped += 1;
                return Ok(());
            }
        };
        stats.dirs_visited += 1;
        debug!(dir = %dir.display(), pending = queue.len(), "listing directory");

        for entry in entries {
            let entry = match entry {
                Ok(e) => e,
                Err(err) => {
                    debug!(dir = %dir.display(), error = %err, "directory read stopped early");
                    break;
                }
            };

            let name = entry.file_name();
            if is_pseudo_entry(&name) {
                continue;
            }
            let child = join_child(dir, &name);

            // d_type from the listing; no extra stat for directories
            if entry.file_type().is_ok_and(|t| t.is_dir()) {
                queue.push(child);
                continue;
            }

            match fs::metadata(&child) {
                Ok(meta) => {
                    sink.accept(self.build_record(&child, &meta))?;
                    stats.records += 1;
                }
                Err(err) => {
                    debug!(path = %child.display(), error = %err, "stat failed, skipping");
                    stats.entries_skipped += 1;
                }
            }
        }

        Ok(())
    }

    fn build_record(&self, path: &Path, meta: &Metadata) -> FileRecord {
        FileRecord::from_metadata(
            path.to_string_lossy().into_owned(),
            meta,
            self.names.user_name(meta.uid()),
            self.names.group_name(meta.gid()),
            &self.config.host,
        )
    }
}

fn is_pseudo_entry(name: &OsStr) -> bool {
    name == OsStr::new(".") || name == OsStr::new("..")
}

/// `parent + "/" + name`, verbatim. A parent given with a trailing slash keeps it.
pub fn join_child(parent: &Path, name: &OsStr) -> PathBuf {
    let mut joined = OsString::with_capacity(parent.as_os_str().len() + name.len() + 1);
    joined.push(parent.as_os_str());
    joined.push("/");
    joined.push(name);
    PathBuf::from(joined)
}
