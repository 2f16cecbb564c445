//! Presentation formatting for conversion results
//!
//! The resolver returns raw f64 values; the calculators display them with a
//! fixed number of decimals and trailing zeros trimmed.

/// Format a value with at most `decimals` fractional digits, trimming
/// trailing zeros and a dangling decimal point.
pub fn format_value(value: f64, decimals: usize) -> String {
    let fixed = format!("{:.*}", decimals, value);
    if !fixed.contains('.') {
        return fixed;
    }
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    // "-0" after trimming means the value rounded to zero
    if trimmed == "-0" {
        return "0".to_string();
    }
    trimmed.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_trailing_zeros() {
        assert_eq!(format_value(1.5, 2), "1.5");
        assert_eq!(format_value(2.0, 2), "2");
        assert_eq!(format_value(0.25, 4), "0.25");
    }

    #[test]
    fn test_rounds_to_decimals() {
        assert_eq!(format_value(1.0 / 3.0, 4), "0.3333");
        assert_eq!(format_value(24.221453, 2), "24.22");
    }

    #[test]
    fn test_negative_zero() {
        assert_eq!(format_value(-0.0001, 2), "0");
    }

    #[test]
    fn test_integers() {
        assert_eq!(format_value(85.0, 2), "85");
        assert_eq!(format_value(212.0, 6), "212");
    }
}
