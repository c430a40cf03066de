//! JSON output to standard output

use std::io::{self, BufWriter, StdoutLock};

use super::streaming::JsonArrayWriter;

/// Array writer over a locked, buffered stdout.
///
/// The writer flushes after every element, so the buffer only ever holds
/// the record being written.
pub fn stdout_writer() -> JsonArrayWriter<BufWriter<StdoutLock<'static>>> {
    JsonArrayWriter::new(BufWriter::new(io::stdout().lock()))
}
