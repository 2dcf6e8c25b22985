//! Panel Model - Core geometry model for vehicle panel layouts
//!
//! This crate provides the foundational value types for the panel layout
//! editor: doors with stable IDs, per-side panel state, the three-sided
//! vehicle aggregate, and the photo attachment tracked alongside (but
//! decoupled from) the geometry.

mod door;
mod door_id;
mod layout;
mod photo;
mod side;
mod units;

pub use door::*;
pub use door_id::*;
pub use layout::*;
pub use photo::*;
pub use side::*;
pub use units::*;
