//! Unit conversion and lenient numeric input
//!
//! The model works in centimeters; the external record format uses meters.

/// Centimeters per meter
pub const CM_PER_M: f32 = 100.0;

/// Convert meters to centimeters
pub fn m_to_cm(meters: f32) -> f32 {
    meters * CM_PER_M
}

/// Convert centimeters to meters
pub fn cm_to_m(cm: f32) -> f32 {
    cm / CM_PER_M
}

/// Parse a dimension typed by the user. Unparseable or empty text falls back
/// to the supplied value instead of surfacing an error; a comma decimal
/// separator is accepted.
pub fn parse_dimension(text: &str, fallback: f32) -> f32 {
    let trimmed = text.trim().replace(',', ".");
    if trimmed.is_empty() {
        return fallback;
    }
    trimmed.parse::<f32>().ok().filter(|v| v.is_finite()).unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meter_centimeter_round_trip() {
        assert!((m_to_cm(2.4) - 240.0).abs() < 1e-3);
        assert!((cm_to_m(m_to_cm(1.9)) - 1.9).abs() < 1e-6);
    }

    #[test]
    fn test_parse_dimension_valid() {
        assert_eq!(parse_dimension("240", 0.0), 240.0);
        assert_eq!(parse_dimension(" 190.5 ", 0.0), 190.5);
        assert_eq!(parse_dimension("190,5", 0.0), 190.5);
    }

    #[test]
    fn test_parse_dimension_fallback() {
        assert_eq!(parse_dimension("", 240.0), 240.0);
        assert_eq!(parse_dimension("abc", 240.0), 240.0);
        assert_eq!(parse_dimension("NaN", 240.0), 240.0);
    }
}
