//! Numeric-to-string rendering for accessor values.
//!
//! Values cross the accessor boundary as strings, so the rendering here
//! is part of the device's external contract.

/// Render an integer value in decimal.
pub fn int_to_string(value: i64) -> String {
    value.to_string()
}

/// Render a float as `whole.fraction` with the given number of decimals.
///
/// The fraction is the difference between the value and its floor, both
/// scaled to the requested precision, and is not zero-padded: 12.34 at
/// one decimal renders as "12.3", 12.05 at two decimals as "12.5".
pub fn float_to_string(value: f32, decimals: u32) -> String {
    let whole = value.floor() as i64;
    let scale = 10f32.powi(decimals as i32);
    let scaled = (value * scale).round() as i64;
    let scaled_whole = (whole as f32 * scale).round() as i64;
    let fraction = scaled - scaled_whole;

    format!("{}.{}", whole, fraction)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_rendering() {
        assert_eq!(int_to_string(42), "42");
        assert_eq!(int_to_string(0), "0");
    }

    #[test]
    fn float_rendering_truncates_to_requested_decimals() {
        assert_eq!(float_to_string(12.34, 1), "12.3");
        assert_eq!(float_to_string(64.0, 1), "64.0");
        assert_eq!(float_to_string(0.32, 2), "0.32");
    }

    #[test]
    fn float_fraction_is_not_zero_padded() {
        assert_eq!(float_to_string(12.05, 2), "12.5");
    }
}
