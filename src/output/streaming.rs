//! Streaming JSON array writer
//!
//! This module provides `JsonArrayWriter`, which writes records to its sink
//! as they arrive. Only the record currently being serialized is held in
//! memory; the array delimiters and separators are written by hand.

use std::io::{self, Write};

use crate::error::{ListError, Result};
use crate::record::FileRecord;
use crate::walk::RecordSink;

/// Writes one JSON array, element by element.
///
/// Call `begin` once, `emit` per record, then `end`. Any number of records
/// (including none) yields a well-formed array.
pub struct JsonArrayWriter<W: Write> {
    out: W,
    emitted: bool,
}

impl<W: Write> JsonArrayWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            emitted: false,
        }
    }

    /// Write the opening bracket.
    pub fn begin(&mut self) -> Result<()> {
        self.out.write_all(b"[")?;
        self.out.flush()?;
        Ok(())
    }

    /// Write one element, preceded by a separator unless it is the first.
    pub fn emit(&mut self, record: &FileRecord) -> Result<()> {
        if self.emitted {
            self.out.write_all(b",")?;
        }
        serde_json::to_writer(&mut self.out, record).map_err(from_json_error)?;
        self.emitted = true;
        self.out.flush()?;
        Ok(())
    }

    /// Write the closing bracket and a final newline.
    pub fn end(&mut self) -> Result<()> {
        self.out.write_all(b"]\n")?;
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RecordSink for JsonArrayWriter<W> {
    fn accept(&mut self, record: FileRecord) -> Result<()> {
        self.emit(&record)
    }
}

/// Sink failures surfaced by serde_json are reported as I/O errors.
fn from_json_error(err: serde_json::Error) -> ListError {
    if err.is_io() {
        ListError::Io(io::Error::from(err))
    } else {
        ListError::Serialize(err)
    }
}
