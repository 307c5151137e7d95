//! Formatting utility functions.

/// Format an intensity value for the hover readout.
///
/// Four decimal places, with trailing zeros (and a trailing point) trimmed.
///
/// # Examples
/// ```
/// use sliceview::util::format::format_value;
/// assert_eq!(format_value(3.0), "3");
/// assert_eq!(format_value(0.25), "0.25");
/// ```
pub fn format_value(value: f32) -> String {
    let s = format!("{value:.4}");
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(0.0), "0");
        assert_eq!(format_value(3.0), "3");
        assert_eq!(format_value(-2.5), "-2.5");
        assert_eq!(format_value(0.1234), "0.1234");
        assert_eq!(format_value(1.00002), "1");
        assert_eq!(format_value(1234.5), "1234.5");
    }

    #[test]
    fn test_format_value_non_finite() {
        assert_eq!(format_value(f32::NAN), "NaN");
        assert_eq!(format_value(f32::INFINITY), "inf");
    }
}
