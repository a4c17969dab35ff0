//! Offset panels for branching line networks.
//!
//! A network of line segments is welded into a vertex graph, every line end
//! gets a mitered offset on both sides, the resulting panels are grouped
//! into runs that share an offset, and each panel is filled with a quad
//! mesh. [`Envelope`] runs the whole pipeline.

pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod tessellation;
pub mod topology;

pub use error::{PanelnetError, Result};
pub use geometry::Segment;
pub use operations::{Envelope, EnvelopeOutput, EnvelopeParams, WidthLists};
