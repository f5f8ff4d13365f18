//! CSV write options

/// Options for serializing a matrix to CSV text
#[derive(Debug, Clone)]
pub struct CsvWriteOptions {
    /// Field delimiter (default: comma)
    pub delimiter: u8,
    /// Quote character (default: double quote)
    pub quote: u8,
    /// Line terminator between rows (default: LF, no trailing terminator)
    pub line_terminator: LineTerminator,
    /// Prefix the output with a UTF-8 byte-order mark (default: true)
    pub byte_order_mark: bool,
}

impl Default for CsvWriteOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
            line_terminator: LineTerminator::LF,
            byte_order_mark: true,
        }
    }
}

/// Line terminator type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineTerminator {
    /// Unix-style (LF)
    LF,
    /// Windows-style (CRLF)
    CRLF,
    /// Mac classic (CR)
    CR,
}

impl LineTerminator {
    /// The terminator as a string slice
    pub fn as_str(self) -> &'static str {
        match self {
            LineTerminator::LF => "\n",
            LineTerminator::CRLF => "\r\n",
            LineTerminator::CR => "\r",
        }
    }
}
