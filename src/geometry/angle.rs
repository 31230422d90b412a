// MIT/Apache2 License

//! Trigonometry in degrees.
//!
//! Every function here is the standard library function with the input (or output) scaled by `π / 180`.
//! The scaling is done as `degrees / 180 * π` rather than with `to_radians`, so that exact boundary
//! values such as `tan(-45°)` come out bit-for-bit the same everywhere in the crate.

use num_traits::Float;
use std::f64::consts::PI;

#[inline]
fn radians(degrees: f64) -> f64 {
    degrees / 180.0 * PI
}

/// The angle of the vector `(dx, dy)`, counterclockwise from the positive X axis, in degrees.
///
/// The result lies in `(-180, 180]`.
#[inline]
pub fn atan2_deg(dx: f64, dy: f64) -> f64 {
    let degrees = dy.atan2(dx) * 180.0 / PI;
    // atan2 reports -180 for a negative zero `dy`
    if degrees == -180.0 {
        180.0
    } else {
        degrees
    }
}

/// Tangent of an angle given in degrees.
#[inline]
pub fn tan_deg(degrees: f64) -> f64 {
    radians(degrees).tan()
}

/// Sine of an angle given in degrees.
#[inline]
pub fn sin_deg(degrees: f64) -> f64 {
    radians(degrees).sin()
}

/// Cosine of an angle given in degrees.
#[inline]
pub fn cos_deg(degrees: f64) -> f64 {
    radians(degrees).cos()
}

/// Bring a heading into `(-180, 180]`.
///
/// The heading is first reduced into `[0, 360)` and then shifted down by a full turn if it is past 180,
/// so `180` stays `180` and `-180` becomes `180`.
#[inline]
pub fn normalize_heading(degrees: f64) -> f64 {
    // adding zero turns -0.0 into 0.0
    let reduced = degrees.rem_euclid(360.0) + 0.0;
    if reduced > 180.0 {
        reduced - 360.0
    } else {
        reduced
    }
}

/// The sign of a number: `-1`, `0` or `1`. Zero (of either sign) and NaN give `0`.
#[inline]
pub fn sign<N: Float>(number: N) -> i32 {
    if number > N::zero() {
        1
    } else if number < N::zero() {
        -1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn atan2_quadrants() {
        assert_abs_diff_eq!(atan2_deg(1.0, 0.0), 0.0);
        assert_abs_diff_eq!(atan2_deg(0.0, 1.0), 90.0);
        assert_abs_diff_eq!(atan2_deg(-1.0, 0.0), 180.0);
        assert_abs_diff_eq!(atan2_deg(-1.0, -0.0), 180.0);
        assert_abs_diff_eq!(atan2_deg(0.0, -1.0), -90.0);
        assert_abs_diff_eq!(atan2_deg(1.0, 1.0), 45.0, epsilon = 1e-12);
        assert_abs_diff_eq!(atan2_deg(-1.0, -1.0), -135.0, epsilon = 1e-12);
    }

    #[test]
    fn degree_trig() {
        assert_abs_diff_eq!(sin_deg(30.0), 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(cos_deg(60.0), 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(tan_deg(45.0), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(cos_deg(180.0), -1.0);
        assert_eq!(sin_deg(0.0), 0.0);
        // the straight-up heading yields a huge but finite slope
        assert!(tan_deg(-90.0).abs() > 1e15);
        assert!(tan_deg(-90.0).is_finite());
    }

    #[test]
    fn headings() {
        assert_eq!(normalize_heading(180.0), 180.0);
        assert_eq!(normalize_heading(-180.0), 180.0);
        assert_eq!(normalize_heading(450.0), 90.0);
        assert_eq!(normalize_heading(-270.0), 90.0);
        assert_eq!(normalize_heading(-90.0), -90.0);
        assert_eq!(normalize_heading(181.0), -179.0);
        assert_eq!(normalize_heading(720.0), 0.0);
        assert_eq!(normalize_heading(-360.0).to_bits(), 0f64.to_bits());
        // a tiny negative heading reduces to a full turn, which is shifted back to zero
        assert_eq!(normalize_heading(-1e-20), 0.0);

        for i in -2000..2000 {
            let h = i as f64 * 0.37;
            let n = normalize_heading(h);
            assert!(n > -180.0 && n <= 180.0, "{} normalized to {}", h, n);
            assert_abs_diff_eq!(normalize_heading(h + 360.0), n, epsilon = 1e-9);
        }
    }

    #[test]
    fn signs() {
        assert_eq!(sign(3.5f64), 1);
        assert_eq!(sign(-0.001f64), -1);
        assert_eq!(sign(0.0f64), 0);
        assert_eq!(sign(-0.0f32), 0);
        assert_eq!(sign(f64::NAN), 0);
    }
}
