mod miter;

pub use miter::{MiterOffset, OffsetLine, Sense, MITER_SCALE_GUARD};
