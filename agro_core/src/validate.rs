//! # Numeric Input Validation
//!
//! Field-level validation helpers shared by all calculators. Raw form values
//! arrive as strings; [`numeric`] parses them and enforces optional inclusive
//! bounds, returning a structured [`CalcError::InvalidInput`] naming the
//! offending field. Zero is a valid value only when the lower bound permits it.
//!
//! Callers abort the calculation on the first invalid field via `?` — an
//! unparsable value never reaches arithmetic as NaN.

use crate::errors::{CalcError, CalcResult};

/// Parse `raw` as a finite floating-point number and check optional
/// inclusive bounds.
///
/// # Example
///
/// ```rust
/// use agro_core::validate::numeric;
///
/// let spacing = numeric("row_spacing_cm", "50", Some(1.0), None).unwrap();
/// assert_eq!(spacing, 50.0);
///
/// assert!(numeric("row_spacing_cm", "0.5", Some(1.0), None).is_err());
/// assert!(numeric("row_spacing_cm", "abc", None, None).is_err());
/// ```
pub fn numeric(field: &str, raw: &str, min: Option<f64>, max: Option<f64>) -> CalcResult<f64> {
    let value: f64 = raw.trim().parse().map_err(|_| {
        CalcError::invalid_input(field, raw, "Not a valid number")
    })?;
    if !value.is_finite() {
        return Err(CalcError::invalid_input(field, raw, "Not a finite number"));
    }
    in_range(field, value, min, max)
}

/// Check an already-numeric value against optional inclusive bounds.
pub fn in_range(field: &str, value: f64, min: Option<f64>, max: Option<f64>) -> CalcResult<f64> {
    if let Some(lo) = min {
        if value < lo {
            return Err(CalcError::invalid_input(
                field,
                value.to_string(),
                format!("Must be at least {}", lo),
            ));
        }
    }
    if let Some(hi) = max {
        if value > hi {
            return Err(CalcError::invalid_input(
                field,
                value.to_string(),
                format!("Must be at most {}", hi),
            ));
        }
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_valid_number() {
        assert_eq!(numeric("area", "12.5", None, None).unwrap(), 12.5);
        assert_eq!(numeric("area", "  3 ", None, None).unwrap(), 3.0);
    }

    #[test]
    fn test_rejects_unparsable() {
        let err = numeric("area", "twelve", None, None).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_rejects_non_finite() {
        assert!(numeric("area", "NaN", None, None).is_err());
        assert!(numeric("area", "inf", None, None).is_err());
    }

    #[test]
    fn test_lower_bound() {
        assert!(numeric("spacing", "0.5", Some(1.0), None).is_err());
        assert_eq!(numeric("spacing", "1", Some(1.0), None).unwrap(), 1.0);
    }

    #[test]
    fn test_upper_bound() {
        assert!(numeric("efficiency", "120", Some(1.0), Some(100.0)).is_err());
        assert_eq!(
            numeric("efficiency", "100", Some(1.0), Some(100.0)).unwrap(),
            100.0
        );
    }

    #[test]
    fn test_zero_valid_only_when_min_permits() {
        // Rates may legitimately be zero when the bound allows it
        assert_eq!(numeric("rate", "0", Some(0.0), None).unwrap(), 0.0);
        assert!(numeric("rate", "0", Some(0.01), None).is_err());
    }

    #[test]
    fn test_in_range_passthrough() {
        assert_eq!(in_range("x", 5.0, Some(0.0), Some(10.0)).unwrap(), 5.0);
        assert!(in_range("x", -1.0, Some(0.0), None).is_err());
    }
}
