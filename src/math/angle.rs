use std::f64::consts::PI;

use super::{Vector3, TOLERANCE};

/// Returns the unit vector of `v`, or the zero vector if `v` is degenerate.
#[must_use]
pub fn unit_or_zero(v: &Vector3) -> Vector3 {
    v.try_normalize(TOLERANCE).unwrap_or_else(Vector3::zeros)
}

/// Signed angle in the XY plane that rotates `from` onto `to`.
///
/// Counter-clockwise is positive. The result lies in `(-π, π)`: an exact
/// half turn is reduced by the trailing `% π` and reports `0.0`, which the
/// miter selection relies on for folded-back neighbours.
#[must_use]
pub fn signed_angle(from: &Vector3, to: &Vector3) -> f64 {
    let a = unit_or_zero(from);
    let b = unit_or_zero(to);

    let unsigned = a.dot(&b).clamp(-1.0, 1.0).acos();
    let turn = a.cross(&b).z.clamp(-1.0, 1.0).asin();

    let mut angle = if turn >= 0.0 { unsigned } else { 2.0 * PI - unsigned };
    if angle > PI {
        angle -= 2.0 * PI;
    }
    angle % PI
}

/// Sign of `x` with `sign(0) == 0`, unlike [`f64::signum`].
#[must_use]
pub fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Horizontal perpendicular of `direction` on the side selected by
/// `side_sign`: the unit vector of `(side_sign · Z) × direction`.
///
/// `+1` gives the left-hand normal when looking along `direction`.
#[must_use]
pub fn side_perpendicular(direction: &Vector3, side_sign: f64) -> Vector3 {
    let axis = Vector3::z() * side_sign;
    unit_or_zero(&axis.cross(direction))
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn quarter_turns_are_signed() {
        let x = Vector3::x();
        let y = Vector3::y();
        assert_relative_eq!(signed_angle(&x, &y), FRAC_PI_2, epsilon = 1e-12);
        assert_relative_eq!(signed_angle(&y, &x), -FRAC_PI_2, epsilon = 1e-12);
    }

    #[test]
    fn half_turn_reduces_to_zero() {
        let x = Vector3::x();
        assert_relative_eq!(signed_angle(&x, &(-x)), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn almost_half_turn_stays_large() {
        let from = Vector3::new(-0.01, -10.0, 0.0);
        let to = Vector3::y();
        let angle = signed_angle(&from, &to);
        assert!(angle < -3.1 && angle > -PI, "angle={angle}");
    }

    #[test]
    fn degenerate_input_is_zero_vector() {
        assert_eq!(unit_or_zero(&Vector3::zeros()), Vector3::zeros());
    }

    #[test]
    fn sign_of_zero_is_zero() {
        assert_eq!(sign(0.0), 0.0);
        assert_eq!(sign(-2.5), -1.0);
        assert_eq!(sign(3.0), 1.0);
    }

    #[test]
    fn left_perpendicular_of_x_is_y() {
        let left = side_perpendicular(&Vector3::x(), 1.0);
        let right = side_perpendicular(&Vector3::x(), -1.0);
        assert_relative_eq!(left, Vector3::y(), epsilon = 1e-12);
        assert_relative_eq!(right, -Vector3::y(), epsilon = 1e-12);
    }
}
