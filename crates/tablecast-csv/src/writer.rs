//! CSV writer

use std::path::Path;

use crate::error::CsvResult;
use crate::options::{CsvWriteOptions, LineTerminator};

/// UTF-8 byte-order mark prepended so spreadsheet applications pick the
/// right encoding when opening the file.
const BOM: char = '\u{FEFF}';

/// CSV serializer for string matrices
pub struct CsvWriter;

impl CsvWriter {
    /// Serialize a matrix of strings to CSV text.
    ///
    /// Fields are quoted only when they contain the quote character, the
    /// delimiter, or a line break, with embedded quotes doubled. Rows are
    /// joined by the configured terminator with no trailing terminator, and
    /// the whole blob carries a byte-order-mark prefix unless disabled.
    /// Values are treated as opaque text; no numeric or locale formatting is
    /// applied.
    pub fn to_string(matrix: &[Vec<String>], options: &CsvWriteOptions) -> CsvResult<String> {
        let terminator = match options.line_terminator {
            LineTerminator::LF => csv::Terminator::Any(b'\n'),
            LineTerminator::CRLF => csv::Terminator::CRLF,
            LineTerminator::CR => csv::Terminator::Any(b'\r'),
        };

        let mut csv_writer = csv::WriterBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .quote_style(csv::QuoteStyle::Necessary)
            .terminator(terminator)
            .flexible(true)
            .from_writer(Vec::new());

        for row in matrix {
            csv_writer.write_record(row)?;
        }

        let buf = csv_writer
            .into_inner()
            .map_err(|e| e.into_error())?;
        let mut text = String::from_utf8(buf)?;

        // The csv writer terminates every record; the blob itself carries no
        // trailing terminator.
        let suffix = options.line_terminator.as_str();
        if let Some(stripped) = text.strip_suffix(suffix) {
            text.truncate(stripped.len());
        }

        if options.byte_order_mark {
            text.insert(0, BOM);
        }

        Ok(text)
    }

    /// Serialize a matrix and write it to a file
    pub fn write_file<P: AsRef<Path>>(
        matrix: &[Vec<String>],
        path: P,
        options: &CsvWriteOptions,
    ) -> CsvResult<()> {
        let text = Self::to_string(matrix, options)?;
        std::fs::write(path, text)?;
        Ok(())
    }
}
