//! Spreadsheet aggregate-row synthesis
//!
//! In summary mode the final source row is replaced by a row of `SUBTOTAL`
//! formulas: a sum over each numeric column, and an item count in the first
//! text column. `SUBTOTAL` is used rather than `SUM`/`COUNTA` so that rows
//! hidden by a spreadsheet filter drop out of the totals.

use crate::cell::{CellKind, TableSource};
use crate::error::{Error, Result};

/// Row index of the classification template for the aggregate row.
///
/// The template is always the third source row, on the fixed-header
/// convention that row 0 is the header and rows 1+ are uniformly classified
/// data. Tables with fewer than three rows cannot be summarized.
const TEMPLATE_ROW: usize = 2;

/// Single-letter spreadsheet column reference (0 = `A`, 25 = `Z`).
///
/// The aggregate convention only emits single-letter references; wider
/// tables are rejected with [`Error::ColumnOutOfRange`].
pub fn column_letter(col: usize) -> Result<char> {
    if col > 25 {
        return Err(Error::ColumnOutOfRange(col));
    }
    Ok((b'A' + col as u8) as char)
}

/// Synthesize the spreadsheet aggregate row for a table.
///
/// Column classifications come from the source row at index 2. For each
/// column: numeric columns get a filtered sum, the first text column gets a
/// labeled item count, and every later text column is left empty. The data
/// range in each formula spans sheet rows 2 through `row_count - 1` (1-based,
/// row 1 being the header; the excluded final source row does not count).
///
/// # Errors
///
/// Returns [`Error::SummaryTemplateMissing`] for tables with fewer than
/// three rows and [`Error::ColumnOutOfRange`] for template rows wider than
/// 26 columns.
pub fn summary_row(source: &dyn TableSource) -> Result<Vec<String>> {
    let rows = source.row_count();
    if rows <= TEMPLATE_ROW {
        return Err(Error::SummaryTemplateMissing { rows });
    }

    let last_data_row = rows - 1;
    let cols = source.cell_count(TEMPLATE_ROW);
    let mut row = Vec::with_capacity(cols);
    let mut count_column_open = true;

    for j in 0..cols {
        // Cells missing from the template behave like labels
        let kind = source
            .cell(TEMPLATE_ROW, j)
            .map_or(CellKind::Text, |c| c.kind);
        let col = column_letter(j)?;

        let formula = match kind {
            CellKind::Numeric => {
                format!("=SUBTOTAL(109,{col}2:{col}{last_data_row})")
            }
            CellKind::Text if count_column_open => {
                count_column_open = false;
                format!("=SUBTOTAL(103, {col}2:{col}{last_data_row}) & \" items\"")
            }
            CellKind::Text => String::new(),
        };
        row.push(formula);
    }

    Ok(row)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::{Cell, VecTable};
    use pretty_assertions::assert_eq;

    /// A table whose data rows are text/numeric/text/numeric, `total` rows
    /// deep including the header.
    fn mixed_table(total: usize) -> VecTable {
        let mut table = VecTable::new();
        table.push_row(vec![
            Cell::text("Item"),
            Cell::text("Price"),
            Cell::text("Tag"),
            Cell::text("Tax"),
        ]);
        for i in 1..total {
            table.push_row(vec![
                Cell::text(format!("item {i}")),
                Cell::numeric("$1.00"),
                Cell::text("misc"),
                Cell::numeric("$0.10"),
            ]);
        }
        table
    }

    #[test]
    fn test_column_letter() {
        assert_eq!(column_letter(0).unwrap(), 'A');
        assert_eq!(column_letter(1).unwrap(), 'B');
        assert_eq!(column_letter(25).unwrap(), 'Z');
        assert!(matches!(column_letter(26), Err(Error::ColumnOutOfRange(26))));
    }

    #[test]
    fn test_mixed_columns() {
        // Numeric columns {1,3}, text columns {0,2}, 10 source rows
        let row = summary_row(&mixed_table(10)).unwrap();

        assert_eq!(
            row,
            vec![
                "=SUBTOTAL(103, A2:A9) & \" items\"".to_string(),
                "=SUBTOTAL(109,B2:B9)".to_string(),
                String::new(),
                "=SUBTOTAL(109,D2:D9)".to_string(),
            ]
        );
    }

    #[test]
    fn test_only_first_text_column_counted() {
        let table = VecTable::from_rows(vec![
            vec![Cell::text("a"), Cell::text("b"), Cell::text("c")],
            vec![Cell::text("x"), Cell::text("y"), Cell::text("z")],
            vec![Cell::text("x"), Cell::text("y"), Cell::text("z")],
            vec![Cell::text("x"), Cell::text("y"), Cell::text("z")],
        ]);

        let row = summary_row(&table).unwrap();
        assert!(row[0].starts_with("=SUBTOTAL(103,"));
        assert_eq!(row[1], "");
        assert_eq!(row[2], "");
    }

    #[test]
    fn test_short_table_is_rejected() {
        let table = mixed_table(2);
        let err = summary_row(&table).unwrap_err();
        assert!(matches!(err, Error::SummaryTemplateMissing { rows: 2 }));
    }

    #[test]
    fn test_exactly_three_rows() {
        // Template row is the last source row; range still ends at row 2
        let row = summary_row(&mixed_table(3)).unwrap();
        assert_eq!(row[1], "=SUBTOTAL(109,B2:B2)");
    }

    #[test]
    fn test_template_width_bounds_the_row() {
        let table = VecTable::from_rows(vec![
            vec![Cell::text("a"), Cell::text("b")],
            vec![Cell::numeric("1"), Cell::numeric("2")],
            vec![Cell::numeric("1")],
            vec![Cell::numeric("1"), Cell::numeric("2")],
        ]);

        // Template has one cell, so the row is one column wide
        let row = summary_row(&table).unwrap();
        assert_eq!(row, vec!["=SUBTOTAL(109,A2:A3)".to_string()]);
    }

    #[test]
    fn test_wide_table_is_rejected() {
        let header: Vec<Cell> = (0..27).map(|i| Cell::text(format!("h{i}"))).collect();
        let data: Vec<Cell> = (0..27).map(|_| Cell::numeric("1")).collect();
        let table =
            VecTable::from_rows(vec![header, data.clone(), data.clone(), data]);

        assert!(matches!(
            summary_row(&table),
            Err(Error::ColumnOutOfRange(26))
        ));
    }
}
