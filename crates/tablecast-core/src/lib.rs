//! # tablecast-core
//!
//! Core data structures and transformation steps for the tablecast export
//! pipeline.
//!
//! This crate provides the fundamental types used throughout tablecast:
//! - [`Cell`] and [`CellKind`] - a display string plus its numeric/text
//!   classification
//! - [`TableSource`] - the abstraction over any ordered, classified table
//!   (with [`VecTable`] as the in-memory implementation)
//! - [`extract_matrix`] - table-to-matrix extraction with per-cell
//!   normalization
//! - [`summary_row`] - synthesis of the spreadsheet aggregate row
//!
//! ## Example
//!
//! ```rust
//! use tablecast_core::{extract_matrix, Cell, VecTable};
//!
//! let table = VecTable::from_rows(vec![
//!     vec![Cell::text("Price"), Cell::text("Item")],
//!     vec![Cell::numeric("$12.50"), Cell::text("Widget")],
//! ]);
//!
//! let matrix = extract_matrix(&table, false);
//! assert_eq!(matrix[1], vec!["12.50", "Widget"]);
//! ```

pub mod cell;
pub mod error;
pub mod extract;
pub mod normalize;
pub mod summary;

// Re-exports for convenience
pub use cell::{Cell, CellKind, TableSource, VecTable};
pub use error::{Error, Result};
pub use extract::extract_matrix;
pub use normalize::normalize_cell;
pub use summary::{column_letter, summary_row};
