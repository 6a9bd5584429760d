//! Input/output adapters
//!
//! Extension-sniffed readers and writers for record sequences. Everything
//! here is thin glue around the core pipeline: readers produce an ordered
//! `Vec<String>` of records, the writer consumes the redacted sequence.

pub mod files;

pub use files::{read_records, write_records};
