//! Cell and table source types

/// Classification of a single cell, derived from a marker on the source
/// element.
///
/// Numeric cells are expected to be spreadsheet-computable: extraction strips
/// a leading currency marker from them. Text cells carry labels and pass
/// through extraction unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellKind {
    /// A currency/number column value
    Numeric,
    /// A label column value (the "numeric-exempt" classification)
    Text,
}

/// A single cell: display text plus its classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    /// The raw display text
    pub text: String,
    /// Numeric or text classification
    pub kind: CellKind,
}

impl Cell {
    /// Create a new cell
    pub fn new<S: Into<String>>(text: S, kind: CellKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }

    /// Create a numeric-classified cell
    pub fn numeric<S: Into<String>>(text: S) -> Self {
        Self::new(text, CellKind::Numeric)
    }

    /// Create a text-classified cell
    pub fn text<S: Into<String>>(text: S) -> Self {
        Self::new(text, CellKind::Text)
    }
}

/// An ordered, read-only table of classified cells.
///
/// The export pipeline reads each cell exactly once; implementations are free
/// to materialize cells lazily. Cell access is infallible: positions outside
/// the table yield `None` and extraction substitutes the empty string.
pub trait TableSource {
    /// Number of rows in the table
    fn row_count(&self) -> usize;

    /// Number of cells in the given row (0 for rows outside the table)
    fn cell_count(&self, row: usize) -> usize;

    /// The cell at (row, col), if present
    fn cell(&self, row: usize, col: usize) -> Option<Cell>;
}

/// An in-memory [`TableSource`] backed by a vector of rows.
#[derive(Debug, Clone, Default)]
pub struct VecTable {
    rows: Vec<Vec<Cell>>,
}

impl VecTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table from rows of cells
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        Self { rows }
    }

    /// Append a row of cells
    pub fn push_row(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }

    /// The rows of the table
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }
}

impl TableSource for VecTable {
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

impl From<Vec<Vec<Cell>>> for VecTable {
    fn from(rows: Vec<Vec<Cell>>) -> Self {
        Self::from_rows(rows)
    }
}
