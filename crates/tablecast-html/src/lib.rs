//! # tablecast-html
//!
//! An HTML `<table>` backed [`TableSource`] for tablecast.
//!
//! The export pipeline itself is UI-toolkit independent; this crate adapts
//! the one concrete source the format was designed around: a rendered DOM
//! table whose cells carry a class-based numeric-exemption marker.

use scraper::{Html, Selector};
use thiserror::Error;

use tablecast_core::{Cell, CellKind, TableSource, VecTable};

/// Class-attribute marker exempting a cell from numeric treatment.
///
/// Classification follows the DOM convention exactly: a cell is numeric
/// when it has a `class` attribute that does not contain this marker.
/// Cells without any `class` attribute are treated as text.
pub const NUMERIC_EXEMPT_MARKER: &str = "numeric-no";

/// Errors from HTML table parsing
#[derive(Debug, Error)]
pub enum HtmlError {
    /// The document contains no `<table>` element
    #[error("no <table> element found in document")]
    NoTable,
}

/// A classified table parsed from an HTML document.
#[derive(Debug, Clone)]
pub struct HtmlTable {
    rows: Vec<Vec<Cell>>,
}

impl HtmlTable {
    /// Parse the first `<table>` element of an HTML document.
    ///
    /// Walks every `<tr>` in document order, taking each `<th>`/`<td>`
    /// child's text content as the cell text and its `class` attribute as
    /// the classification marker.
    pub fn parse(html: &str) -> Result<Self, HtmlError> {
        let table_sel = Selector::parse("table").unwrap();
        let row_sel = Selector::parse("tr").unwrap();
        let cell_sel = Selector::parse("th, td").unwrap();

        let document = Html::parse_document(html);
        let table = document
            .select(&table_sel)
            .next()
            .ok_or(HtmlError::NoTable)?;

        let mut rows = Vec::new();
        for row in table.select(&row_sel) {
            let mut cells = Vec::new();
            for cell in row.select(&cell_sel) {
                let text: String = cell.text().collect();
                let kind = match cell.value().attr("class") {
                    Some(class) if !class.contains(NUMERIC_EXEMPT_MARKER) => CellKind::Numeric,
                    _ => CellKind::Text,
                };
                cells.push(Cell::new(text, kind));
            }
            rows.push(cells);
        }

        Ok(Self { rows })
    }

    /// Convert into an in-memory [`VecTable`]
    pub fn into_table(self) -> VecTable {
        VecTable::from_rows(self.rows)
    }
}

impl TableSource for HtmlTable {
    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn cell_count(&self, row: usize) -> usize {
        self.rows.get(row).map_or(0, Vec::len)
    }

    fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.rows.get(row)?.get(col).cloned()
    }
}
