//! FIFO queue of directories waiting to be listed
//!
//! Roots go in first, in the order given; subdirectories are appended as
//! they are discovered. Popping from the front gives level-order traversal.

use std::collections::VecDeque;
use std::path::PathBuf;

#[derive(Debug, Default)]
pub struct WorkQueue {
    pending: VecDeque<PathBuf>,
}

impl WorkQueue {
    /// Seed the queue with root paths. No de-duplication or existence check.
    pub fn seeded<I>(roots: I) -> Self
    where
        I: IntoIterator<Item = PathBuf>,
    {
        Self {
            pending: roots.into_iter().collect(),
        }
    }

    pub fn push(&mut self, dir: PathBuf) {
        self.pending.push_back(dir);
    }

    pub fn pop(&mut self) -> Option<PathBuf> {
        self.pending.pop_front()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
