//! Configuration types for the walker

use std::path::PathBuf;

use crate::identity::{UNKNOWN_HOST, short_hostname};

/// What to walk and how to label the records.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Root directories, visited in this order
    pub roots: Vec<PathBuf>,
    /// Host name stamped on every record
    pub host: String,
}

impl WalkerConfig {
    /// Config for the given roots, labelled with this machine's short host name.
    pub fn from_roots(roots: Vec<PathBuf>) -> Self {
        Self {
            roots,
            host: short_hostname(),
        }
    }
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            roots: Vec::new(),
            host: UNKNOWN_HOST.to_string(),
        }
    }
}
