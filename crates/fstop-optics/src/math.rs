//! Small numeric helpers shared by the aperture math.

/// Rounds a value to a fixed number of decimal places.
///
/// Used for display values only; model math keeps full precision.
///
/// # Example
///
/// ```rust
/// use fstop_optics::round_to;
///
/// assert_eq!(round_to(0.44444, 3), 0.444);
/// assert_eq!(round_to(2.8284, 2), 2.83);
/// ```
#[inline]
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(1.0 / 3.0, 3), 0.333);
        assert_eq!(round_to(2.0f64.sqrt(), 2), 1.41);
        assert_eq!(round_to(1.23456, 3), 1.235);
    }

    #[test]
    fn test_round_to_zero_decimals() {
        assert_eq!(round_to(2.5, 0), 3.0);
        assert_eq!(round_to(2.4, 0), 2.0);
    }
}
