use std::f64::consts::FRAC_PI_2;

use crate::math::angle::{sign, unit_or_zero};
use crate::math::{Point3, Vector3};

/// Below this angle the free-end arc degenerates into a straight ramp.
const FLAT_ANGLE: f64 = 0.01;

/// Samples the deviated arc used on free-end sides.
///
/// The arc starts at `zero` and sweeps `angle` radians while travelling
/// `|y|` along `y`; it bends toward `x` (or straight up when `vertical`).
/// Odd samples are pushed off the arc by `max_deviation`, which gives the
/// saw-tooth edge. Fewer than 2 samples are raised to 2.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn deviated_arc(
    zero: Point3,
    x: &Vector3,
    y: &Vector3,
    angle: f64,
    n: usize,
    max_deviation: f64,
    vertical: bool,
) -> Vec<Point3> {
    let x_unit = if vertical { Vector3::z() } else { unit_or_zero(x) };
    let y_unit = unit_or_zero(y);
    let width = y.norm();
    let n = n.max(2);
    let last = (n - 1) as f64;

    if angle.abs() < FLAT_ANGLE {
        return (0..n)
            .map(|i| {
                let t = i as f64 / last;
                let deviation = (i % 2) as f64 * max_deviation;
                let swept = angle * t;
                zero + x_unit * (deviation * width * swept) + y_unit * (width * t)
            })
            .collect();
    }

    let radius = width / angle.clamp(-FRAC_PI_2, FRAC_PI_2).sin();
    (0..n)
        .map(|i| {
            let deviation = (i % 2) as f64 * max_deviation;
            let swept = angle * i as f64 / last;
            let across = radius * (1.0 - swept.cos()) - deviation * swept.cos();
            let along = (radius + deviation) * swept.sin();
            zero + x_unit * across + y_unit * along
        })
        .collect()
}

/// Samples a junction side: evenly spaced points from `zero` to `zero + y`.
///
/// With `vertical` the side is instead swept through `|angle|` radians and
/// lifted along Z by `radius * (1 - cos)`, on the side given by the sign of
/// `angle`. Fewer than 2 samples are raised to 2.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn straight(zero: Point3, y: &Vector3, n: usize, angle: f64, radius: f64, vertical: bool) -> Vec<Point3> {
    let n = n.max(2);
    let last = (n - 1) as f64;
    if vertical {
        let lift = Vector3::z() * (sign(angle) * radius);
        (0..n)
            .map(|i| {
                let swept = angle.abs() * i as f64 / last;
                zero + y * swept.sin() + lift * (1.0 - swept.cos())
            })
            .collect()
    } else {
        (0..n).map(|i| zero + y * (i as f64 / last)).collect()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn flat_arc_is_a_ramp() {
        let pts = deviated_arc(
            Point3::origin(),
            &Vector3::x(),
            &Vector3::new(0.0, 2.0, 0.0),
            0.0,
            5,
            0.3,
            false,
        );
        assert_eq!(pts.len(), 5);
        for (p, y) in pts.iter().zip([0.0, 0.5, 1.0, 1.5, 2.0]) {
            assert_relative_eq!(*p, Point3::new(0.0, y, 0.0), epsilon = 1e-12);
        }
    }

    #[test]
    fn small_angle_deviates_odd_samples() {
        let pts = deviated_arc(Point3::origin(), &Vector3::x(), &Vector3::y(), 0.005, 3, 0.5, false);
        assert_relative_eq!(pts[0].x, 0.0);
        // Odd sample: deviation * width * angle * t = 0.5 * 1 * 0.005 * 0.5.
        assert_relative_eq!(pts[1].x, 0.00125, epsilon = 1e-12);
        assert_relative_eq!(pts[2].x, 0.0);
    }

    #[test]
    fn quarter_arc_reaches_corner() {
        let pts = deviated_arc(
            Point3::origin(),
            &Vector3::new(3.0, 0.0, 0.0),
            &Vector3::y(),
            FRAC_PI_2,
            3,
            0.0,
            false,
        );
        let h = std::f64::consts::FRAC_1_SQRT_2;
        assert_relative_eq!(pts[1], Point3::new(1.0 - h, h, 0.0), epsilon = 1e-12);
        assert_relative_eq!(pts[2], Point3::new(1.0, 1.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn deviation_pushes_odd_samples_off_the_arc() {
        let pts = deviated_arc(
            Point3::origin(),
            &Vector3::x(),
            &Vector3::y(),
            FRAC_PI_2,
            3,
            0.2,
            false,
        );
        let h = std::f64::consts::FRAC_1_SQRT_2;
        assert_relative_eq!(pts[1].x, 1.0 - h - 0.2 * h, epsilon = 1e-12);
        assert_relative_eq!(pts[1].y, 1.2 * h, epsilon = 1e-12);
        assert_relative_eq!(pts[2], Point3::new(1.0, 1.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn vertical_arc_bends_up() {
        let pts = deviated_arc(
            Point3::origin(),
            &Vector3::x(),
            &Vector3::y(),
            FRAC_PI_2,
            2,
            0.0,
            true,
        );
        assert_relative_eq!(pts[1], Point3::new(0.0, 1.0, 1.0), epsilon = 1e-12);
    }

    #[test]
    fn short_sample_counts_give_both_ends() {
        for n in [0, 1] {
            let arc = deviated_arc(Point3::origin(), &Vector3::x(), &Vector3::y(), 0.5, n, 0.1, false);
            assert_eq!(arc.len(), 2);
            assert!(arc.iter().all(|p| p.iter().all(|c| c.is_finite())));
            assert_eq!(arc[0], Point3::origin());

            let line = straight(Point3::origin(), &Vector3::y(), n, 0.0, 1.0, false);
            assert_eq!(line, vec![Point3::origin(), Point3::new(0.0, 1.0, 0.0)]);
        }
    }

    #[test]
    fn straight_profile_ends_at_offset() {
        let pts = straight(Point3::new(1.0, 1.0, 0.0), &Vector3::new(0.0, 2.0, 0.0), 3, 0.7, 1.0, false);
        assert_relative_eq!(pts[1], Point3::new(1.0, 2.0, 0.0));
        assert_relative_eq!(pts[2], Point3::new(1.0, 3.0, 0.0));
    }

    #[test]
    fn vertical_straight_profile_lifts_by_radius() {
        let up = straight(Point3::origin(), &Vector3::y(), 3, FRAC_PI_2, 2.0, true);
        assert_relative_eq!(up[2], Point3::new(0.0, 1.0, 2.0), epsilon = 1e-12);

        let down = straight(Point3::origin(), &Vector3::y(), 3, -FRAC_PI_2, 2.0, true);
        assert_relative_eq!(down[2], Point3::new(0.0, 1.0, -2.0), epsilon = 1e-12);

        let flat = straight(Point3::origin(), &Vector3::y(), 3, 0.0, 2.0, true);
        assert!(flat.iter().all(|p| *p == Point3::origin()));
    }
}
