use crate::math::{Point3, Vector3};

/// A straight segment between two points.
///
/// Used for input lines, offset lines anchored at a vertex, and the
/// boundary curves emitted by the mesh filler.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point3,
    pub end: Point3,
}

impl Segment {
    /// Creates a segment from `start` to `end`.
    #[must_use]
    pub fn new(start: Point3, end: Point3) -> Self {
        Self { start, end }
    }

    /// Creates a segment starting at `origin` and displaced by `vector`.
    #[must_use]
    pub fn from_vector(origin: Point3, vector: Vector3) -> Self {
        Self {
            start: origin,
            end: origin + vector,
        }
    }

    /// Returns `end - start`.
    #[must_use]
    pub fn vector(&self) -> Vector3 {
        self.end - self.start
    }

    /// Returns the Euclidean length of the segment.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.vector().norm()
    }

    /// Returns the point at parameter `t`, where `t = 0` is `start` and
    /// `t = 1` is `end`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point3 {
        self.start + self.vector() * t
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn from_vector_keeps_displacement() {
        let s = Segment::from_vector(Point3::new(1.0, 2.0, 0.0), Vector3::new(0.0, 3.0, 4.0));
        assert_relative_eq!(s.end, Point3::new(1.0, 5.0, 4.0));
        assert_relative_eq!(s.length(), 5.0);
    }

    #[test]
    fn point_at_midpoint() {
        let s = Segment::new(Point3::origin(), Point3::new(2.0, 0.0, 0.0));
        assert_relative_eq!(s.point_at(0.5), Point3::new(1.0, 0.0, 0.0));
    }
}
