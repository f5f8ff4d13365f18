//! The export pipeline

use thiserror::Error;

use tablecast_core::{extract_matrix, summary_row, TableSource};
use tablecast_csv::{CsvWriteOptions, CsvWriter};
use tablecast_delivery::{DeliveryOutcome, DeliverySelector};

/// Errors from a full export run
#[derive(Debug, Error)]
pub enum ExportError {
    /// Extraction or summary-row synthesis failed
    #[error(transparent)]
    Table(#[from] tablecast_core::Error),

    /// CSV serialization failed
    #[error(transparent)]
    Csv(#[from] tablecast_csv::CsvError),

    /// Save-path delivery failed
    #[error(transparent)]
    Delivery(#[from] tablecast_delivery::DeliveryError),
}

/// Options governing one export run
#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    /// Replace the final source row with a spreadsheet aggregate row
    pub summary_row: bool,
    /// CSV serialization options
    pub csv: CsvWriteOptions,
}

/// Run the transformation pipeline and return the CSV text.
///
/// Extraction, normalization, optional aggregate-row synthesis, and
/// serialization; stops short of delivery. The result is deterministic:
/// exporting an unchanged table twice yields byte-identical text.
pub fn to_csv(source: &dyn TableSource, options: &ExportOptions) -> Result<String, ExportError> {
    let mut matrix = extract_matrix(source, options.summary_row);
    if options.summary_row {
        matrix.push(summary_row(source)?);
    }
    Ok(CsvWriter::to_string(&matrix, &options.csv)?)
}

/// The full pipeline: transformation plus delivery.
pub struct Exporter<'a> {
    selector: DeliverySelector<'a>,
    options: ExportOptions,
}

impl<'a> Exporter<'a> {
    /// Create an exporter over a delivery selector
    pub fn new(selector: DeliverySelector<'a>, options: ExportOptions) -> Self {
        Self { selector, options }
    }

    /// The options this exporter runs with
    pub fn options(&self) -> &ExportOptions {
        &self.options
    }

    /// Export a table: serialize it and deliver the CSV text.
    ///
    /// # Errors
    ///
    /// Transformation errors and save-path delivery failures propagate;
    /// relay-path failures are reported through the [`DeliveryOutcome`].
    pub async fn export(&self, source: &dyn TableSource) -> Result<DeliveryOutcome, ExportError> {
        let csv_text = to_csv(source, &self.options)?;
        Ok(self.selector.deliver(&csv_text).await?)
    }
}
