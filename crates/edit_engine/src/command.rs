//! Command system for layout editing

use panel_model::{PanelSide, SideState, VehicleLayout};
use serde::{Deserialize, Serialize};
use std::any::Any;

/// Result of applying a command
#[derive(Debug)]
pub struct CommandResult {
    /// The new layout after the command
    pub layout: VehicleLayout,
    /// The inverse command (for undo)
    pub inverse: Box<dyn Command>,
    /// Sides whose state changed; drives re-emission to the host form.
    /// Empty when the command degraded to a no-op.
    pub changed: Vec<PanelSide>,
}

/// Trait for all layout editing commands
pub trait Command: std::fmt::Debug + Send + Sync {
    /// Apply this command to a layout
    fn apply(&self, layout: &VehicleLayout) -> crate::Result<CommandResult>;

    /// Try to merge this command with a newer one (for batching rapid
    /// slider/text edits into a single undo step)
    fn merge_with(&self, _other: &dyn Command) -> Option<Box<dyn Command>> {
        None
    }

    /// Get a display name for this command
    fn display_name(&self) -> &str;

    /// Clone this command into a box
    fn clone_box(&self) -> Box<dyn Command>;

    /// Downcasting hook used by `merge_with` implementations
    fn as_any(&self) -> &dyn Any;
}

/// Capture the current state of `sides` as a restore command, for use as the
/// inverse of a mutation touching those sides.
pub fn snapshot_sides(layout: &VehicleLayout, sides: &[PanelSide]) -> Box<dyn Command> {
    Box::new(RestoreSides {
        states: sides.iter().map(|&s| layout.side(s).clone()).collect(),
    })
}

/// Restore previously captured side states wholesale. Used as the inverse of
/// every mutating command; sides are small value objects, so snapshot
/// restore is cheaper and simpler than algebraic inverse commands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestoreSides {
    pub states: Vec<SideState>,
}

impl Command for RestoreSides {
    fn apply(&self, layout: &VehicleLayout) -> crate::Result<CommandResult> {
        let changed: Vec<PanelSide> = self.states.iter().map(|s| s.side).collect();
        let inverse = snapshot_sides(layout, &changed);

        let mut new_layout = layout.clone();
        for state in &self.states {
            new_layout.set_side(state.clone());
        }

        Ok(CommandResult {
            layout: new_layout,
            inverse,
            changed,
        })
    }

    fn display_name(&self) -> &str {
        "Restore Sides"
    }

    fn clone_box(&self) -> Box<dyn Command> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
