//! # tablecast
//!
//! Export a classified table to CSV text and deliver it: saved to disk, or
//! relayed to a whitelisted companion process.
//!
//! The pipeline runs table-to-matrix extraction with currency normalization,
//! optional spreadsheet aggregate-row synthesis, CSV serialization with a
//! byte-order mark, and whitelist-governed delivery selection.
//!
//! ## Example
//!
//! ```rust
//! use tablecast::prelude::*;
//!
//! let table = VecTable::from_rows(vec![
//!     vec![Cell::text("Header1"), Cell::text("Header2")],
//!     vec![Cell::numeric("$12.50"), Cell::text("Widget")],
//!     vec![Cell::numeric("$7.25"), Cell::text("Gadget")],
//! ]);
//!
//! let csv = tablecast::to_csv(&table, &ExportOptions::default()).unwrap();
//! assert_eq!(csv, "\u{FEFF}Header1,Header2\n12.50,Widget\n7.25,Gadget");
//! ```

pub mod exporter;
pub mod prelude;

pub use exporter::{to_csv, ExportError, ExportOptions, Exporter};

// Re-export core types
pub use tablecast_core::{
    extract_matrix, normalize_cell, summary_row, Cell, CellKind, Error, Result, TableSource,
    VecTable,
};

// Re-export serialization types
pub use tablecast_csv::{CsvError, CsvWriteOptions, CsvWriter, LineTerminator};

// Re-export delivery types
pub use tablecast_delivery::{
    DeliveryError, DeliveryOutcome, DeliverySelector, DirectorySink, FileSink, RelayTransport,
    SessionStore, SettingsReader, Whitelist, WithholdReason, EXPORT_FILENAME,
};
