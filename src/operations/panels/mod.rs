mod group;

pub use group::{group_panels, PanelGroups, TOUCH_TOLERANCE};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::Result;
use crate::geometry::Segment;
use crate::math::{Point3, Vector3};
use crate::operations::offset::{MiterOffset, OffsetLine, Sense};
use crate::operations::widths::WidthLists;
use crate::topology::{EndRole, LineTopology};

/// One long edge of a panel: an offset anchored at a network vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Side {
    /// Vertex id the side is anchored at.
    pub vertex: usize,
    /// Position of the anchor vertex.
    pub point: Point3,
    /// Offset vector from the anchor.
    pub direction: Vector3,
    pub is_free_end: bool,
    /// Effective (mitered) width.
    pub width: f64,
}

impl Side {
    /// The side as a segment from its anchor.
    #[must_use]
    pub fn segment(&self) -> Segment {
        Segment::from_vector(self.point, self.direction)
    }
}

impl From<&OffsetLine> for Side {
    fn from(offset: &OffsetLine) -> Self {
        Self {
            vertex: offset.vertex,
            point: offset.anchor,
            direction: offset.vector,
            is_free_end: offset.is_free_end,
            width: offset.effective_width,
        }
    }
}

/// One of the two lateral offset strips of an input line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Panel {
    pub first: Side,
    pub second: Side,
    /// Index of the source line.
    pub line: usize,
}

impl Panel {
    /// Both sides, first then second.
    #[must_use]
    pub fn sides(&self) -> [&Side; 2] {
        [&self.first, &self.second]
    }
}

/// Every panel of a network together with the offsets it was built from.
///
/// Panel `2 * e` lies left of line `e` (looking from begin to end) and
/// panel `2 * e + 1` lies right of it.
#[derive(Debug, Clone, Default)]
pub struct PanelSet {
    pub panels: Vec<Panel>,
    /// Offsets of each panel's first and second side.
    pub offsets: Vec<[OffsetLine; 2]>,
}

impl PanelSet {
    #[must_use]
    pub fn len(&self) -> usize {
        self.panels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    /// Offset lines indexed by panel.
    #[must_use]
    pub fn offset_lines(&self) -> Vec<[Segment; 2]> {
        self.offsets
            .iter()
            .map(|[a, b]| [a.segment(), b.segment()])
            .collect()
    }

    /// Offset lines anchored at free ends, in panel order.
    #[must_use]
    pub fn free_end_lines(&self) -> Vec<Segment> {
        self.offsets
            .iter()
            .flatten()
            .filter(|o| o.is_free_end)
            .map(OffsetLine::segment)
            .collect()
    }
}

/// Builds the two panels of every edge.
///
/// Each panel needs one offset at either end of its line; the offsets only
/// read the finished topology, so with the `parallel` feature they are
/// computed concurrently.
///
/// # Errors
///
/// Returns an error if a width entry is missing for some edge.
pub fn build_panels(topology: &LineTopology, widths: &WidthLists) -> Result<PanelSet> {
    let count = topology.edge_count() * 2;

    #[cfg(feature = "parallel")]
    let offsets = (0..count)
        .into_par_iter()
        .map(|panel| panel_offsets(topology, widths, panel))
        .collect::<Result<Vec<_>>>()?;

    #[cfg(not(feature = "parallel"))]
    let offsets = (0..count)
        .map(|panel| panel_offsets(topology, widths, panel))
        .collect::<Result<Vec<_>>>()?;

    let panels = offsets
        .iter()
        .enumerate()
        .map(|(index, [first, second])| Panel {
            first: Side::from(first),
            second: Side::from(second),
            line: index / 2,
        })
        .collect();

    tracing::debug!(
        panels = count,
        free_ends = offsets.iter().flatten().filter(|o| o.is_free_end).count(),
        "built panels"
    );

    Ok(PanelSet { panels, offsets })
}

fn panel_offsets(
    topology: &LineTopology,
    widths: &WidthLists,
    panel: usize,
) -> Result<[OffsetLine; 2]> {
    let edge = panel / 2;
    let (first, second) = if panel % 2 == 0 {
        (EndRole::End, EndRole::Begin)
    } else {
        (EndRole::Begin, EndRole::End)
    };
    Ok([
        MiterOffset::new(edge, first, Sense::Positive).execute(topology, widths)?,
        MiterOffset::new(edge, second, Sense::Negative).execute(topology, widths)?,
    ])
}
