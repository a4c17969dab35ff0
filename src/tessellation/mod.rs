pub mod profile;
mod quad_grid;
mod tessellate_panel;

pub use quad_grid::{bridge_rows, QuadGrid};
pub use tessellate_panel::TessellatePanel;

use crate::geometry::Segment;
use crate::math::{Point2, Point3, Vector3};

/// Parameters controlling how panels are filled with quads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshParams {
    /// Vertices across the panel, from its first side to its second.
    pub n_u: usize,
    /// Vertices sampled outward along each side.
    pub n_v: usize,
    /// Sweep angle of free-end arcs, in radians.
    pub angle: f64,
    /// Saw-tooth displacement of odd free-end samples.
    pub deviation: f64,
    /// Bend profiles toward +Z instead of along the panel.
    pub vertical_blend: bool,
}

impl Default for MeshParams {
    fn default() -> Self {
        Self {
            n_u: 2,
            n_v: 2,
            angle: 0.0,
            deviation: 0.0,
            vertical_blend: false,
        }
    }
}

impl MeshParams {
    /// Returns a copy with both subdivision counts raised to at least 2.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            n_u: self.n_u.max(2),
            n_v: self.n_v.max(2),
            ..self
        }
    }
}

/// A quadrilateral mesh.
#[derive(Debug, Clone, Default)]
pub struct QuadMesh {
    /// Vertex positions.
    pub vertices: Vec<Point3>,
    /// Vertex normals.
    pub normals: Vec<Vector3>,
    /// Grid parameters of each vertex, both in `[0, 1]`.
    pub uvs: Vec<Point2>,
    /// Quad indices, each cell as `[i0, i1, i2, i3]` around the cell.
    pub faces: Vec<[usize; 4]>,
}

/// Mesh of one panel together with its boundary curves.
#[derive(Debug, Clone, Default)]
pub struct PanelMesh {
    pub mesh: QuadMesh,
    /// Cell edges running across the panel, keyed by grid row.
    pub u_curves: Vec<Vec<Segment>>,
    /// Cell edges running along the sides, keyed by grid row.
    pub v_curves: Vec<Vec<Segment>>,
    /// Samples of free-end sides; downstream relaxation must not move them.
    pub fixed_points: Vec<Point3>,
}
