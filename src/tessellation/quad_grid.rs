use crate::error::{Result, TessellationError};
use crate::geometry::Segment;
use crate::math::angle::unit_or_zero;
use crate::math::{Point2, Point3, Vector3};

use super::QuadMesh;

/// Quad grid spanned between two point rows, plus its cell edges.
#[derive(Debug, Clone, Default)]
pub struct QuadGrid {
    pub mesh: QuadMesh,
    /// Edges running between the rows' columns, keyed by row.
    pub u_curves: Vec<Vec<Segment>>,
    /// Edges running along the rows, keyed by the row they start on.
    pub v_curves: Vec<Vec<Segment>>,
}

/// Bridges `first[r]` and `second[r]` with `columns` evenly spaced vertices
/// for every row `r`.
///
/// Vertices are stored row-major (`index = column + row * columns`). Each
/// cell emits one quad and four boundary segments.
///
/// # Errors
///
/// Returns `TessellationError::InvalidParameters` if the rows differ in
/// length or if there are fewer than two rows or columns.
#[allow(clippy::cast_precision_loss)]
pub fn bridge_rows(first: &[Point3], second: &[Point3], columns: usize) -> Result<QuadGrid> {
    let rows = first.len();
    if second.len() != rows {
        return Err(TessellationError::InvalidParameters(format!(
            "point rows differ in length: {rows} vs {}",
            second.len()
        ))
        .into());
    }
    if rows < 2 || columns < 2 {
        return Err(TessellationError::InvalidParameters(format!(
            "grid needs at least 2x2 vertices, got {columns}x{rows}"
        ))
        .into());
    }

    let last_column = (columns - 1) as f64;
    let last_row = (rows - 1) as f64;
    let mut vertices = Vec::with_capacity(rows * columns);
    let mut uvs = Vec::with_capacity(rows * columns);
    for (r, (a, b)) in first.iter().zip(second).enumerate() {
        for c in 0..columns {
            let u = c as f64 / last_column;
            vertices.push(a + (b - a) * u);
            uvs.push(Point2::new(u, r as f64 / last_row));
        }
    }

    let mut faces = Vec::with_capacity((rows - 1) * (columns - 1));
    let mut u_curves = vec![Vec::new(); rows];
    let mut v_curves = vec![Vec::new(); rows - 1];
    let edge = |i: usize, j: usize| Segment::new(vertices[i], vertices[j]);

    for c in 0..columns - 1 {
        for r in 0..rows - 1 {
            let i0 = c + r * columns;
            let i1 = (c + 1) + r * columns;
            let i2 = (c + 1) + (r + 1) * columns;
            let i3 = c + (r + 1) * columns;
            faces.push([i0, i1, i2, i3]);
            u_curves[r].push(edge(i0, i1));
            v_curves[r].push(edge(i1, i2));
            u_curves[r + 1].push(edge(i2, i3));
            v_curves[r].push(edge(i3, i0));
        }
    }

    let normals = vertex_normals(&vertices, &faces);

    Ok(QuadGrid {
        mesh: QuadMesh {
            vertices,
            normals,
            uvs,
            faces,
        },
        u_curves,
        v_curves,
    })
}

/// Area-weighted vertex normals from the quads' diagonal cross products.
fn vertex_normals(vertices: &[Point3], faces: &[[usize; 4]]) -> Vec<Vector3> {
    let mut sums = vec![Vector3::zeros(); vertices.len()];
    for &[i0, i1, i2, i3] in faces {
        let n = (vertices[i2] - vertices[i0]).cross(&(vertices[i3] - vertices[i1]));
        for i in [i0, i1, i2, i3] {
            sums[i] += n;
        }
    }
    sums.iter().map(unit_or_zero).collect()
}
