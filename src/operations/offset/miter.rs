use crate::error::Result;
use crate::geometry::Segment;
use crate::math::angle::{side_perpendicular, signed_angle};
use crate::math::{Point3, Vector3, TOLERANCE};
use crate::operations::widths::WidthLists;
use crate::topology::{EndRole, LineTopology};

/// Miter scales above this value fall back to the unscaled bisector.
///
/// The threshold is absolute, in model length units.
pub const MITER_SCALE_GUARD: f64 = 100.0;

/// Which of the two lateral offsets of an edge is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sense {
    /// `+1`: perpendicular is `Z × direction`.
    Positive,
    /// `-1`: perpendicular is `-Z × direction`.
    Negative,
}

impl Sense {
    #[must_use]
    pub fn sign(self) -> f64 {
        match self {
            Self::Positive => 1.0,
            Self::Negative => -1.0,
        }
    }
}

/// Offset computed for one (edge, endpoint, sense) triple.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OffsetLine {
    /// Vertex id the offset is anchored at.
    pub vertex: usize,
    /// Position of that vertex.
    pub anchor: Point3,
    /// Final offset, `scale * bisector`.
    pub vector: Vector3,
    /// Sum of the edge's perpendicular and the partner's perpendicular.
    pub bisector: Vector3,
    /// Multiplier applied to `bisector`.
    pub scale: f64,
    /// Signed angle between the partner perpendicular and the edge's own.
    pub angle: f64,
    /// Average of the edge's and the partner's width at the anchor.
    pub effective_width: f64,
    /// `true` when no other edge meets the anchor.
    pub is_free_end: bool,
    /// Edge the offset was mitered against.
    pub partner: Option<usize>,
    /// `true` when the miter scale exceeded [`MITER_SCALE_GUARD`].
    pub guarded: bool,
}

impl OffsetLine {
    /// The offset as a segment from the anchor.
    #[must_use]
    pub fn segment(&self) -> Segment {
        Segment::from_vector(self.anchor, self.vector)
    }

    /// Length of the final offset vector.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.vector.norm()
    }
}

#[derive(Debug, Clone, Copy)]
struct Partner {
    edge: usize,
    perpendicular: Vector3,
    width: f64,
    angle: f64,
}

/// Computes the mitered offset at one end of an edge.
///
/// At a free end the offset is the edge's own perpendicular scaled by its
/// width. At a junction every other incident edge is a candidate, and the
/// one whose perpendicular has the smallest signed angle to ours (largest
/// for [`Sense::Negative`]) is used to build the bisector.
#[derive(Debug, Clone, Copy)]
pub struct MiterOffset {
    edge: usize,
    role: EndRole,
    sense: Sense,
}

impl MiterOffset {
    /// Creates a new offset computation for `edge`, anchored at the
    /// endpoint playing `role`.
    #[must_use]
    pub fn new(edge: usize, role: EndRole, sense: Sense) -> Self {
        Self { edge, role, sense }
    }

    /// Executes the computation against a finished topology.
    ///
    /// # Errors
    ///
    /// Returns a `TopologyError` if the edge, its vertices, or a width
    /// entry is missing.
    pub fn execute(&self, topology: &LineTopology, widths: &WidthLists) -> Result<OffsetLine> {
        let ends = topology.edge(self.edge)?;
        let vertex = ends.vertex(self.role);
        let anchor = *topology.point(vertex)?;
        let other = *topology.point(ends.vertex(self.role.opposite()))?;
        let sign = self.sense.sign();

        let direction = anchor - other;
        if direction.norm() < TOLERANCE {
            tracing::warn!(edge = self.edge, vertex, "zero-length edge has no perpendicular");
        }
        let perpendicular = side_perpendicular(&direction, sign);
        let own_width = widths.at(self.edge, self.role)?;

        let partner = if topology.degree(vertex)? > 1 {
            self.select_partner(topology, widths, vertex, &anchor, &perpendicular)?
        } else {
            None
        };

        let (partner_perpendicular, partner_width, angle) = match partner {
            Some(p) => (p.perpendicular, p.width, p.angle),
            None => (perpendicular, own_width, 0.0),
        };

        let effective_width = (own_width + partner_width) / 2.0;
        let bisector = perpendicular + partner_perpendicular;
        let half = (angle / 2.0).cos();
        let mitered = effective_width / (2.0 * half * half);
        let guarded = mitered > MITER_SCALE_GUARD;
        let scale = if guarded {
            tracing::debug!(
                edge = self.edge,
                vertex,
                angle,
                mitered,
                "miter scale over guard, using unscaled bisector"
            );
            effective_width
        } else {
            mitered
        };

        tracing::trace!(
            edge = self.edge,
            vertex,
            free_end = partner.is_none(),
            angle,
            scale,
            "offset"
        );

        Ok(OffsetLine {
            vertex,
            anchor,
            vector: bisector * scale,
            bisector,
            scale,
            angle,
            effective_width,
            is_free_end: partner.is_none(),
            partner: partner.map(|p| p.edge),
            guarded,
        })
    }

    /// Picks the neighbouring edge with the extremal signed angle.
    ///
    /// Ties keep the first candidate in incidence order. Self-loops have no
    /// usable direction and are skipped, so a vertex whose other incidences
    /// are all loops yields `None` and is treated as a free end.
    fn select_partner(
        &self,
        topology: &LineTopology,
        widths: &WidthLists,
        vertex: usize,
        anchor: &Point3,
        perpendicular: &Vector3,
    ) -> Result<Option<Partner>> {
        let sign = self.sense.sign();
        let mut best: Option<Partner> = None;

        for &line in topology.incident_lines(vertex)? {
            if line == self.edge {
                continue;
            }
            let ends = topology.edge(line)?;
            if ends.is_loop() {
                continue;
            }
            let Some(role) = ends.role_of(vertex) else {
                continue;
            };
            let neighbour = topology.point(ends.vertex(role.opposite()))?;
            let candidate = side_perpendicular(&(neighbour - anchor), sign);
            let angle = signed_angle(&candidate, perpendicular);

            let better = match best {
                None => true,
                Some(b) if sign > 0.0 => angle < b.angle,
                Some(b) => angle > b.angle,
            };
            if better {
                best = Some(Partner {
                    edge: line,
                    perpendicular: candidate,
                    width: widths.at(line, role)?,
                    angle,
                });
            }
        }

        Ok(best)
    }
}
