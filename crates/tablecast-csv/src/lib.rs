//! # tablecast-csv
//!
//! CSV serialization for tablecast: renders a matrix of strings into CSV
//! text with minimal quoting and a byte-order-mark prefix, the shape
//! spreadsheet applications expect when opening a downloaded file.

mod error;
mod options;
mod writer;

pub use error::{CsvError, CsvResult};
pub use options::{CsvWriteOptions, LineTerminator};
pub use writer::CsvWriter;
