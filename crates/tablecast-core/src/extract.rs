//! Table-to-matrix extraction

use crate::cell::TableSource;
use crate::normalize::normalize_cell;

/// Extract a table into a matrix of normalized strings.
///
/// Walks every row in order, normalizing each cell per its classification.
/// When `summary_mode` is true the final source row is excluded; the caller
/// replaces it with the aggregate row from [`crate::summary_row`]. Missing
/// cells become the empty string.
pub fn extract_matrix(source: &dyn TableSource, summary_mode: bool) -> Vec<Vec<String>> {
    let mut row_count = source.row_count();
    if summary_mode {
        row_count = row_count.saturating_sub(1);
    }

    let mut matrix = Vec::with_capacity(row_count + usize::from(summary_mode));
    for i in 0..row_count {
        let cols = source.cell_count(i);
        let mut row = Vec::with_capacity(cols);
        for j in 0..cols {
            let value = match source.cell(i, j) {
                Some(cell) => normalize_cell(&cell.text, cell.kind),
                None => String::new(),
            };
            row.push(value);
        }
        matrix.push(row);
    }

    matrix
}
