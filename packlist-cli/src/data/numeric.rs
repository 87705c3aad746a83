//! Locale-aware numeric parsing for the shadow fields
//!
//! Weights and quantities in the source workbooks are frequently typed as
//! text in a locale where `.` groups thousands and `,` marks the decimal
//! point ("21.900,00"). The projector turns that text into `f64` for
//! aggregation; the display value is left untouched.

use calamine::Data;

use super::columns::MISSING_VALUE;

/// Parse display text that may use `.` as thousands separator and `,` as
/// decimal separator. Returns `None` for the missing-value marker and for
/// anything that still fails to parse after separator normalization.
pub fn parse_locale_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed == MISSING_VALUE {
        return None;
    }
    let normalized = trimmed.replace('.', "").replace(',', ".");
    normalized.parse::<f64>().ok()
}

/// Numeric shadow of a raw cell. Cells that arrive from the workbook as
/// genuine numbers are taken at face value; text goes through the locale
/// parse; everything else (blank, bool, date, error) has no numeric shadow.
pub fn cell_number(cell: &Data) -> Option<f64> {
    match cell {
        Data::Int(i) => Some(*i as f64),
        Data::Float(f) => Some(*f),
        Data::String(s) => parse_locale_number(s),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thousands_and_decimal_separators() {
        assert_eq!(parse_locale_number("21.900,00"), Some(21900.0));
        assert_eq!(parse_locale_number("1.234.567,89"), Some(1234567.89));
        assert_eq!(parse_locale_number("0,5"), Some(0.5));
    }

    #[test]
    fn test_plain_integers() {
        assert_eq!(parse_locale_number("5"), Some(5.0));
        assert_eq!(parse_locale_number(" 42 "), Some(42.0));
    }

    #[test]
    fn test_unparseable_text() {
        assert_eq!(parse_locale_number("abc"), None);
        assert_eq!(parse_locale_number("12x"), None);
        assert_eq!(parse_locale_number(""), None);
    }

    #[test]
    fn test_missing_marker_has_no_number() {
        assert_eq!(parse_locale_number(MISSING_VALUE), None);
    }

    #[test]
    fn test_typed_number_cells_taken_as_is() {
        assert_eq!(cell_number(&Data::Float(3.5)), Some(3.5));
        assert_eq!(cell_number(&Data::Int(7)), Some(7.0));
        assert_eq!(cell_number(&Data::String("7,5".into())), Some(7.5));
        assert_eq!(cell_number(&Data::Empty), None);
        assert_eq!(cell_number(&Data::Bool(true)), None);
    }
}
