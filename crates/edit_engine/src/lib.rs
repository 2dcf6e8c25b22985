//! Edit Engine - Commands, undo/redo, and sync guarding for panel layouts
//!
//! Every mutation of a [`panel_model::VehicleLayout`] is a [`Command`]:
//! adding and removing doors, resizing segments, adjusting heights, and
//! copying or mirroring whole sides. Commands clamp out-of-range input
//! silently and degrade to no-ops on missing targets; their inverses are
//! side-state snapshots, managed by the [`UndoManager`].

mod command;
mod copy_commands;
mod door_commands;
mod error;
mod executor;
mod panel_commands;
mod sync;
mod undo;

pub use command::*;
pub use copy_commands::*;
pub use door_commands::*;
pub use error::*;
pub use executor::*;
pub use panel_commands::*;
pub use sync::*;
pub use undo::*;
