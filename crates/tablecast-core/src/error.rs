//! Error types for tablecast-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while extracting or summarizing a table
#[derive(Debug, Error)]
pub enum Error {
    /// The table is too short to carry a summary classification template.
    ///
    /// The aggregate row takes its column classifications from the row at
    /// index 2, so any table with fewer than three rows cannot be exported
    /// in summary mode.
    #[error("summary template row missing: table has {rows} rows, need at least 3")]
    SummaryTemplateMissing { rows: usize },

    /// Column index past `Z` in a summary row.
    ///
    /// The aggregate convention uses single-letter column references only.
    #[error("column index {0} out of range for single-letter references (max 25)")]
    ColumnOutOfRange(usize),
}
