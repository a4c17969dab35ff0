use crate::error::{InputError, Result};
use crate::geometry::Segment;
use crate::math::Point3;
use crate::operations::panels::{build_panels, group_panels, PanelGroups, PanelSet};
use crate::operations::widths::WidthLists;
use crate::tessellation::{MeshParams, PanelMesh, TessellatePanel};
use crate::topology::LineTopology;

/// Scalar inputs of an envelope run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnvelopeParams {
    /// Endpoints closer than this share a vertex.
    pub tolerance: f64,
    /// Saw-tooth displacement of free-end arcs.
    pub deviation: f64,
    /// Sweep angle of free-end arcs, in radians.
    pub angle: f64,
    /// Vertices across each panel.
    pub n_u: usize,
    /// Vertices along each panel side.
    pub n_v: usize,
    /// Bend profiles toward +Z.
    pub vertical_blend: bool,
}

impl Default for EnvelopeParams {
    fn default() -> Self {
        Self {
            tolerance: 0.01,
            deviation: 0.0,
            angle: 0.0,
            n_u: 2,
            n_v: 2,
            vertical_blend: false,
        }
    }
}

impl EnvelopeParams {
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    #[must_use]
    pub fn with_deviation(mut self, deviation: f64) -> Self {
        self.deviation = deviation;
        self
    }

    #[must_use]
    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }

    #[must_use]
    pub fn with_subdivisions(mut self, n_u: usize, n_v: usize) -> Self {
        self.n_u = n_u;
        self.n_v = n_v;
        self
    }

    #[must_use]
    pub fn with_vertical_blend(mut self, vertical_blend: bool) -> Self {
        self.vertical_blend = vertical_blend;
        self
    }

    /// Mesh filler parameters, with subdivision counts clamped to 2.
    #[must_use]
    pub fn mesh_params(&self) -> MeshParams {
        MeshParams {
            n_u: self.n_u,
            n_v: self.n_v,
            angle: self.angle,
            deviation: self.deviation,
            vertical_blend: self.vertical_blend,
        }
        .clamped()
    }
}

/// Runs the whole pipeline over a line network: welding, offsets, panel
/// grouping and meshing.
#[derive(Debug, Clone)]
pub struct Envelope {
    lines: Vec<Segment>,
    widths: WidthLists,
    params: EnvelopeParams,
}

impl Envelope {
    /// Creates a run with default parameters.
    #[must_use]
    pub fn new(lines: Vec<Segment>, widths: WidthLists) -> Self {
        Self {
            lines,
            widths,
            params: EnvelopeParams::default(),
        }
    }

    /// Sets the scalar parameters.
    #[must_use]
    pub fn with_params(mut self, params: EnvelopeParams) -> Self {
        self.params = params;
        self
    }

    /// Executes every stage in order.
    ///
    /// # Errors
    ///
    /// Returns an `InputError` if there are no lines, the tolerance is not a
    /// positive finite number, or a width list is empty. No partial output
    /// is produced.
    #[tracing::instrument(level = "debug", skip(self), fields(lines = self.lines.len()))]
    pub fn execute(&self) -> Result<EnvelopeOutput> {
        if self.lines.is_empty() {
            return Err(InputError::NoLines.into());
        }
        let tolerance = self.params.tolerance;
        if !(tolerance.is_finite() && tolerance > 0.0) {
            return Err(InputError::InvalidTolerance(tolerance).into());
        }
        let widths = self.widths.clone().normalized(self.lines.len())?;

        let topology = LineTopology::build(&self.lines, tolerance);
        let panels = build_panels(&topology, &widths)?;
        let groups = group_panels(&panels.panels);
        let meshes = TessellatePanel::new(self.params.mesh_params()).execute_all(&panels.panels)?;

        tracing::debug!(
            vertices = topology.vertex_count(),
            panels = panels.len(),
            groups = groups.len(),
            "envelope complete"
        );

        Ok(EnvelopeOutput {
            topology,
            widths,
            panels,
            groups,
            meshes,
        })
    }
}

/// Everything one envelope run produces.
#[derive(Debug, Clone)]
pub struct EnvelopeOutput {
    pub topology: LineTopology,
    /// Width lists after padding to the line count.
    pub widths: WidthLists,
    pub panels: PanelSet,
    pub groups: PanelGroups,
    /// Mesh of every panel, indexed by panel.
    pub meshes: Vec<PanelMesh>,
}

impl EnvelopeOutput {
    /// Offset lines indexed by panel.
    #[must_use]
    pub fn offset_lines(&self) -> Vec<[Segment; 2]> {
        self.panels.offset_lines()
    }

    /// Offset lines anchored at free ends.
    #[must_use]
    pub fn free_end_lines(&self) -> Vec<Segment> {
        self.panels.free_end_lines()
    }

    /// Source line indices of every group.
    #[must_use]
    pub fn group_lines(&self) -> Vec<Vec<usize>> {
        self.groups.group_lines(&self.panels.panels)
    }

    /// Fixed points of all meshes, walking groups in order.
    #[must_use]
    pub fn fixed_points(&self) -> Vec<Point3> {
        self.groups
            .groups
            .iter()
            .flatten()
            .flat_map(|&panel| self.meshes[panel].fixed_points.iter().copied())
            .collect()
    }
}
