pub mod envelope;
pub mod offset;
pub mod panels;
pub mod widths;

pub use envelope::{Envelope, EnvelopeOutput, EnvelopeParams};
pub use offset::{MiterOffset, OffsetLine, Sense};
pub use panels::{build_panels, group_panels, Panel, PanelGroups, PanelSet, Side};
pub use widths::WidthLists;
