#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::Result;
use crate::math::Point3;
use crate::operations::panels::{Panel, Side};

use super::profile;
use super::quad_grid::bridge_rows;
use super::{MeshParams, PanelMesh};

/// Fills panels with quad grids.
///
/// Free-end sides are sampled along a deviated arc and reported as fixed
/// points; junction sides are sampled along their straight offset.
#[derive(Debug, Clone, Copy)]
pub struct TessellatePanel {
    params: MeshParams,
}

impl TessellatePanel {
    /// Creates the operation. Subdivision counts below 2 are raised to 2.
    #[must_use]
    pub fn new(params: MeshParams) -> Self {
        Self {
            params: params.clamped(),
        }
    }

    /// Effective parameters after clamping.
    #[must_use]
    pub fn params(&self) -> &MeshParams {
        &self.params
    }

    /// Meshes a single panel.
    ///
    /// # Errors
    ///
    /// Returns an error if the grid cannot be built.
    pub fn execute(&self, panel: &Panel) -> Result<PanelMesh> {
        let mut fixed_points = Vec::new();
        let first = self.side_profile(&panel.first, &panel.second, &mut fixed_points);
        let second = self.side_profile(&panel.second, &panel.first, &mut fixed_points);

        let grid = bridge_rows(&first, &second, self.params.n_u)?;
        Ok(PanelMesh {
            mesh: grid.mesh,
            u_curves: grid.u_curves,
            v_curves: grid.v_curves,
            fixed_points,
        })
    }

    /// Meshes every panel, keeping panel order.
    ///
    /// # Errors
    ///
    /// Returns the first error encountered.
    pub fn execute_all(&self, panels: &[Panel]) -> Result<Vec<PanelMesh>> {
        #[cfg(feature = "parallel")]
        let meshes = panels
            .par_iter()
            .map(|panel| self.execute(panel))
            .collect::<Result<Vec<_>>>()?;

        #[cfg(not(feature = "parallel"))]
        let meshes = panels
            .iter()
            .map(|panel| self.execute(panel))
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(
            panels = panels.len(),
            n_u = self.params.n_u,
            n_v = self.params.n_v,
            "meshed panels"
        );
        Ok(meshes)
    }

    fn side_profile(&self, side: &Side, opposite: &Side, fixed: &mut Vec<Point3>) -> Vec<Point3> {
        let p = &self.params;
        if side.is_free_end {
            let points = profile::deviated_arc(
                side.point,
                &(opposite.point - side.point),
                &side.direction,
                p.angle,
                p.n_v,
                p.deviation,
                p.vertical_blend,
            );
            fixed.extend_from_slice(&points);
            points
        } else {
            profile::straight(
                side.point,
                &side.direction,
                p.n_v,
                p.angle,
                side.width,
                p.vertical_blend,
            )
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::geometry::Segment;
    use crate::operations::panels::{build_panels, PanelSet};
    use crate::operations::widths::WidthLists;
    use crate::topology::LineTopology;

    fn seg(a: (f64, f64), b: (f64, f64)) -> Segment {
        Segment::new(Point3::new(a.0, a.1, 0.0), Point3::new(b.0, b.1, 0.0))
    }

    fn panels_for(lines: &[Segment]) -> PanelSet {
        let topo = LineTopology::build(lines, 0.01);
        let widths = WidthLists::uniform(1.0).normalized(lines.len()).unwrap();
        build_panels(&topo, &widths).unwrap()
    }

    fn params(n_u: usize, n_v: usize) -> MeshParams {
        MeshParams {
            n_u,
            n_v,
            ..MeshParams::default()
        }
    }

    #[test]
    fn grid_size_follows_subdivisions() {
        let set = panels_for(&[seg((0.0, 0.0), (4.0, 0.0))]);
        let mesh = TessellatePanel::new(params(4, 6)).execute(&set.panels[0]).unwrap();
        assert_eq!(mesh.mesh.vertices.len(), 24);
        assert_eq!(mesh.mesh.faces.len(), 15);
    }

    #[test]
    fn small_counts_are_clamped() {
        let set = panels_for(&[seg((0.0, 0.0), (4.0, 0.0))]);
        let op = TessellatePanel::new(params(0, 1));
        assert_eq!(op.params().n_u, 2);
        assert_eq!(op.params().n_v, 2);
        let mesh = op.execute(&set.panels[0]).unwrap();
        assert_eq!(mesh.mesh.vertices.len(), 4);
        assert_eq!(mesh.mesh.faces.len(), 1);
    }

    #[test]
    fn isolated_line_panel_spans_its_strip() {
        let set = panels_for(&[seg((0.0, 0.0), (4.0, 0.0))]);
        let mesh = TessellatePanel::new(params(3, 3)).execute(&set.panels[0]).unwrap();
        let v = &mesh.mesh.vertices;
        // First side sits at the line end, second at the line begin.
        assert_relative_eq!(v[0], Point3::new(4.0, 0.0, 0.0));
        assert_relative_eq!(v[1], Point3::new(2.0, 0.0, 0.0));
        assert_relative_eq!(v[8], Point3::new(0.0, 1.0, 0.0), epsilon = 1e-12);
        // Both sides are free ends.
        assert_eq!(mesh.fixed_points.len(), 6);
    }

    #[test]
    fn junction_sides_are_not_fixed() {
        let set = panels_for(&[
            seg((0.0, 0.0), (1.0, 0.0)),
            seg((1.0, 0.0), (2.0, 0.0)),
            seg((2.0, 0.0), (3.0, 0.0)),
        ]);
        let op = TessellatePanel::new(params(2, 4));
        let meshes = op.execute_all(&set.panels).unwrap();
        assert_eq!(meshes.len(), 6);
        // Middle line: both ends are junctions.
        assert!(meshes[2].fixed_points.is_empty());
        assert!(meshes[3].fixed_points.is_empty());
        // Outer lines: one free end each.
        assert_eq!(meshes[0].fixed_points.len(), 4);
        assert_eq!(meshes[5].fixed_points.len(), 4);
    }

    #[test]
    fn free_end_arc_bends_toward_the_panel() {
        let set = panels_for(&[seg((0.0, 0.0), (4.0, 0.0))]);
        let p = MeshParams {
            n_u: 2,
            n_v: 3,
            angle: std::f64::consts::FRAC_PI_2,
            ..MeshParams::default()
        };
        let mesh = TessellatePanel::new(p).execute(&set.panels[0]).unwrap();
        // First side anchored at (4, 0) curls toward the begin vertex.
        let tip = mesh.fixed_points[2];
        assert_relative_eq!(tip, Point3::new(3.0, 1.0, 0.0), epsilon = 1e-12);
    }
}
