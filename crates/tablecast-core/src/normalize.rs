//! Per-cell normalization

use once_cell::sync::Lazy;
use regex::Regex;

use crate::cell::CellKind;

/// Currency markers stripped from the start of numeric cells, with any
/// trailing spaces.
static CURRENCY_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(£|\$|CAD|EUR|GBP) *").unwrap());

/// Normalize one cell's text according to its classification.
///
/// Numeric cells lose a single leading currency symbol or code so the value
/// is spreadsheet-computable; text cells pass through unchanged. The
/// asymmetry is deliberate: label columns must preserve their original text.
///
/// # Examples
/// ```
/// use tablecast_core::{normalize_cell, CellKind};
///
/// assert_eq!(normalize_cell("$12.50", CellKind::Numeric), "12.50");
/// assert_eq!(normalize_cell("CAD 3.00", CellKind::Numeric), "3.00");
/// assert_eq!(normalize_cell("$12.50", CellKind::Text), "$12.50");
/// ```
pub fn normalize_cell(text: &str, kind: CellKind) -> String {
    match kind {
        CellKind::Numeric => CURRENCY_PREFIX.replace(text, "").into_owned(),
        CellKind::Text => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_strips_currency_symbols() {
        assert_eq!(normalize_cell("£9.99", CellKind::Numeric), "9.99");
        assert_eq!(normalize_cell("$12.50", CellKind::Numeric), "12.50");
        assert_eq!(normalize_cell("$ 12.50", CellKind::Numeric), "12.50");
    }

    #[test]
    fn test_strips_currency_codes() {
        assert_eq!(normalize_cell("CAD 19.00", CellKind::Numeric), "19.00");
        assert_eq!(normalize_cell("EUR 7.25", CellKind::Numeric), "7.25");
        assert_eq!(normalize_cell("GBP3.50", CellKind::Numeric), "3.50");
    }

    #[test]
    fn test_strips_only_leading_marker() {
        // Anchored at the start: embedded markers survive
        assert_eq!(normalize_cell("12.50 USD", CellKind::Numeric), "12.50 USD");
        assert_eq!(normalize_cell("a$b", CellKind::Numeric), "a$b");
        // Only one marker is removed
        assert_eq!(normalize_cell("$$5", CellKind::Numeric), "$5");
    }

    #[test]
    fn test_text_cells_pass_through() {
        assert_eq!(normalize_cell("$12.50", CellKind::Text), "$12.50");
        assert_eq!(normalize_cell("EUR total", CellKind::Text), "EUR total");
    }

    #[test]
    fn test_empty_stays_empty() {
        assert_eq!(normalize_cell("", CellKind::Numeric), "");
        assert_eq!(normalize_cell("", CellKind::Text), "");
    }

    #[test]
    fn test_unrecognized_prefix_untouched() {
        assert_eq!(normalize_cell("USD 5.00", CellKind::Numeric), "USD 5.00");
        assert_eq!(normalize_cell("¥100", CellKind::Numeric), "¥100");
    }
}
