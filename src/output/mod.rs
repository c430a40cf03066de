//! Record output
//!
//! # Module Structure
//!
//! - `streaming` - JSON array writer that emits one record at a time
//! - `json` - stdout wiring for the writer

mod json;
mod streaming;

pub use json::stdout_writer;
pub use streaming::JsonArrayWriter;
