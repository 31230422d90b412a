// MIT/Apache2 License

/// Round to the nearest integer, sending ties to the even neighbour.
///
/// Every turtle-space coordinate goes through this before it becomes a pixel, so `0.5` and `-0.5` both
/// land on `0` and `1.5` lands on `2`.
#[inline]
pub(crate) fn round_even(value: f64) -> f64 {
    value.round_ties_even()
}

/// Round to the given number of decimal places, ties to even.
#[inline]
pub(crate) fn round_places(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    let scaled = value * scale;
    if !scaled.is_finite() {
        return value;
    }
    round_even(scaled) / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ties_go_to_even() {
        assert_eq!(round_even(0.5), 0.0);
        assert_eq!(round_even(1.5), 2.0);
        assert_eq!(round_even(2.5), 2.0);
        assert_eq!(round_even(-0.5), 0.0);
        assert_eq!(round_even(-1.5), -2.0);
        assert_eq!(round_even(-1.2), -1.0);
    }

    #[test]
    fn places() {
        assert_eq!(round_places(-0.9999999999999999, 5), -1.0);
        assert_eq!(round_places(0.123456, 5), 0.12346);
        // huge slopes are left alone instead of overflowing to infinity
        assert_eq!(round_places(1e305, 5), 1e305);
    }
}
