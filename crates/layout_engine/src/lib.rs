//! Layout Engine - Segment derivation for panel layouts
//!
//! This crate derives the displayable structure of a panel from its door
//! list: an alternating sequence of plain sections and door openings tiling
//! the full panel width, plus the gap scan used when placing new doors.
//! Everything here is pure derivation; mutations live in `edit_engine`.

mod gaps;
mod segment;

pub use gaps::*;
pub use segment::*;
