pub mod edge;
pub mod weld;

pub use edge::{EdgeEnds, EndRole};
pub use weld::VertexWelder;

use crate::error::TopologyError;
use crate::geometry::Segment;
use crate::math::Point3;

/// Welded connectivity of a line network.
///
/// Vertices and edges are addressed by plain indices: a vertex id is its
/// position in [`points`](Self::points) and an edge id is the index of the
/// input line it came from. The structure is immutable once built.
#[derive(Debug, Clone, Default)]
pub struct LineTopology {
    points: Vec<Point3>,
    line_vertices: Vec<EdgeEnds>,
    vertex_vertices: Vec<Vec<usize>>,
    vertex_lines: Vec<Vec<usize>>,
}

impl LineTopology {
    /// Welds the endpoints of `lines` and builds the adjacency tables.
    ///
    /// Endpoints closer than `tolerance` (strictly) share a vertex. Each line
    /// adds one neighbour entry to both of its vertices, so multi-edges show
    /// up as repeated neighbours.
    #[must_use]
    pub fn build(lines: &[Segment], tolerance: f64) -> Self {
        let mut welder = VertexWelder::new(tolerance);
        let line_vertices: Vec<EdgeEnds> = lines
            .iter()
            .map(|line| {
                let begin = welder.weld(line.start);
                let end = welder.weld(line.end);
                EdgeEnds::new(begin, end)
            })
            .collect();
        let points = welder.into_points();

        let mut vertex_vertices = vec![Vec::new(); points.len()];
        for ends in &line_vertices {
            vertex_vertices[ends.end].push(ends.begin);
            vertex_vertices[ends.begin].push(ends.end);
        }

        let mut vertex_lines = vec![Vec::new(); points.len()];
        for (line, ends) in line_vertices.iter().enumerate() {
            vertex_lines[ends.begin].push(line);
            vertex_lines[ends.end].push(line);
        }

        tracing::debug!(
            lines = lines.len(),
            vertices = points.len(),
            tolerance,
            "built line topology"
        );

        Self {
            points,
            line_vertices,
            vertex_vertices,
            vertex_lines,
        }
    }

    /// Welded vertex positions, indexed by vertex id.
    #[must_use]
    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    /// Vertex pair of every input line, indexed by edge id.
    #[must_use]
    pub fn line_vertices(&self) -> &[EdgeEnds] {
        &self.line_vertices
    }

    /// Neighbouring vertex ids of every vertex.
    #[must_use]
    pub fn vertex_vertices(&self) -> &[Vec<usize>] {
        &self.vertex_vertices
    }

    /// Incident edge ids of every vertex.
    #[must_use]
    pub fn vertex_lines(&self) -> &[Vec<usize>] {
        &self.vertex_lines
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.line_vertices.len()
    }

    /// Returns the position of a vertex.
    ///
    /// # Errors
    ///
    /// Returns an error if `vertex` is out of range.
    pub fn point(&self, vertex: usize) -> Result<&Point3, TopologyError> {
        self.points
            .get(vertex)
            .ok_or(TopologyError::VertexOutOfRange {
                vertex,
                count: self.points.len(),
            })
    }

    /// Returns the vertex pair of an edge.
    ///
    /// # Errors
    ///
    /// Returns an error if `edge` is out of range.
    pub fn edge(&self, edge: usize) -> Result<EdgeEnds, TopologyError> {
        self.line_vertices
            .get(edge)
            .copied()
            .ok_or(TopologyError::EdgeOutOfRange {
                edge,
                count: self.line_vertices.len(),
            })
    }

    /// Number of edge ends incident on `vertex`.
    ///
    /// # Errors
    ///
    /// Returns an error if `vertex` is out of range.
    pub fn degree(&self, vertex: usize) -> Result<usize, TopologyError> {
        self.vertex_vertices
            .get(vertex)
            .map(Vec::len)
            .ok_or(TopologyError::VertexOutOfRange {
                vertex,
                count: self.points.len(),
            })
    }

    /// Edge ids incident on `vertex`, in input order.
    ///
    /// # Errors
    ///
    /// Returns an error if `vertex` is out of range.
    pub fn incident_lines(&self, vertex: usize) -> Result<&[usize], TopologyError> {
        self.vertex_lines
            .get(vertex)
            .map(Vec::as_slice)
            .ok_or(TopologyError::VertexOutOfRange {
                vertex,
                count: self.points.len(),
            })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn seg(a: (f64, f64), b: (f64, f64)) -> Segment {
        Segment::new(Point3::new(a.0, a.1, 0.0), Point3::new(b.0, b.1, 0.0))
    }

    #[test]
    fn chain_shares_vertices() {
        let lines = vec![
            seg((0.0, 0.0), (1.0, 0.0)),
            seg((1.0, 0.0), (2.0, 0.0)),
            seg((2.0, 0.0), (3.0, 0.0)),
        ];
        let topo = LineTopology::build(&lines, 0.01);

        assert_eq!(topo.vertex_count(), 4);
        assert_eq!(topo.line_vertices()[1], EdgeEnds::new(1, 2));
        assert_eq!(topo.vertex_vertices()[1], vec![0, 2]);
        assert_eq!(topo.vertex_lines()[2], vec![1, 2]);
        assert_eq!(topo.degree(0).unwrap(), 1);
        assert_eq!(topo.degree(1).unwrap(), 2);
    }

    #[test]
    fn near_endpoints_weld() {
        let lines = vec![seg((0.0, 0.0), (1.0, 0.0)), seg((1.005, 0.0), (1.0, 1.0))];
        let topo = LineTopology::build(&lines, 0.01);
        assert_eq!(topo.vertex_count(), 3);
        assert_eq!(topo.line_vertices()[1].begin, 1);
    }

    #[test]
    fn distance_equal_to_tolerance_does_not_weld() {
        let lines = vec![seg((0.0, 0.0), (1.0, 0.0)), seg((1.5, 0.0), (2.0, 0.0))];
        let topo = LineTopology::build(&lines, 0.5);
        assert_eq!(topo.vertex_count(), 4);
    }

    #[test]
    fn star_vertex_collects_all_lines() {
        let lines = vec![
            seg((1.0, 0.0), (0.0, 0.0)),
            seg((0.0, 1.0), (0.0, 0.0)),
            seg((-1.0, 0.0), (0.0, 0.0)),
        ];
        let topo = LineTopology::build(&lines, 0.01);
        let center = topo.line_vertices()[0].end;
        assert_eq!(topo.incident_lines(center).unwrap(), &[0, 1, 2]);
        assert_eq!(topo.degree(center).unwrap(), 3);
    }

    #[test]
    fn multi_edges_repeat_neighbours() {
        let lines = vec![seg((0.0, 0.0), (1.0, 0.0)), seg((1.0, 0.0), (0.0, 0.0))];
        let topo = LineTopology::build(&lines, 0.01);
        assert_eq!(topo.vertex_vertices()[0], vec![1, 1]);
    }

    #[test]
    fn out_of_range_lookups_fail() {
        let topo = LineTopology::build(&[seg((0.0, 0.0), (1.0, 0.0))], 0.01);
        assert!(topo.point(5).is_err());
        assert!(topo.edge(1).is_err());
    }
}
