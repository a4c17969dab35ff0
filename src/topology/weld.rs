use crate::math::Point3;

/// Accumulates welded vertex positions.
///
/// A new point is merged into an existing vertex when their distance is
/// strictly below the tolerance. Lookup is a linear scan, and when several
/// vertices qualify the most recently added one wins.
#[derive(Debug)]
pub struct VertexWelder {
    tolerance: f64,
    points: Vec<Point3>,
}

impl VertexWelder {
    /// Creates an empty welder.
    #[must_use]
    pub fn new(tolerance: f64) -> Self {
        Self {
            tolerance,
            points: Vec::new(),
        }
    }

    /// Returns the vertex id for `point`, adding a new vertex if none is
    /// within tolerance.
    pub fn weld(&mut self, point: Point3) -> usize {
        if let Some(id) = self
            .points
            .iter()
            .rposition(|q| nalgebra::distance(q, &point) < self.tolerance)
        {
            return id;
        }
        self.points.push(point);
        self.points.len() - 1
    }

    /// Consumes the welder, returning the vertex positions indexed by id.
    #[must_use]
    pub fn into_points(self) -> Vec<Point3> {
        self.points
    }
}
