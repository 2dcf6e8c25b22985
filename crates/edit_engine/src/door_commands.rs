//! Door commands - adding, removing, and resizing door openings
//!
//! Door placement follows the editor's heuristic: the first door is
//! centered, the second redistributes both doors into thirds, and from the
//! third door on the widest free gap wins. The thirds special case is kept
//! distinct from the general gap scan on purpose; the two paths are not
//! unified.

use crate::{snapshot_sides, Command, CommandResult};
use layout_engine::largest_gap;
use panel_model::{
    Door, DoorId, PanelSide, SideState, VehicleLayout, DEFAULT_DOOR_HEIGHT, DEFAULT_DOOR_WIDTH,
};
use serde::{Deserialize, Serialize};
use std::any::Any;

fn no_op(layout: &VehicleLayout) -> CommandResult {
    CommandResult {
        layout: layout.clone(),
        inverse: snapshot_sides(layout, &[]),
        changed: Vec::new(),
    }
}

// =============================================================================
// Add Door
// =============================================================================

/// Add a door to a side, choosing a position that maximizes empty space
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddDoor {
    pub side: PanelSide,
}

impl AddDoor {
    pub fn new(side: PanelSide) -> Self {
        Self { side }
    }

    /// Pick a position for a new door of `width` cm, possibly repositioning
    /// existing doors. Returns None when no free span remains.
    fn place(state: &mut SideState, width: f32) -> Option<f32> {
        match state.doors.len() {
            // first door: dead center
            0 => Some((state.total_width / 2.0 - width / 2.0).round()),
            // second door: both doors redistributed into thirds, emitted as
            // one combined update
            1 => {
                let first = (state.total_width / 3.0 - width / 2.0).round();
                state.doors[0].position = first.max(0.0);
                Some((state.total_width * 2.0 / 3.0 - width / 2.0).round())
            }
            // third door onward: widest gap wins; a too-narrow gap is still
            // the best available position and gets used anyway
            _ => {
                let gap = largest_gap(&state.doors, state.total_width)?;
                Some(gap.centered_position(width).round())
            }
        }
    }
}

impl Command for AddDoor {
    fn apply(&self, layout: &VehicleLayout) -> crate::Result<CommandResult> {
        if !self.side.supports_doors() {
            return Ok(no_op(layout));
        }

        let inverse = snapshot_sides(layout, &[self.side]);
        let mut new_layout = layout.clone();
        let state = new_layout.side_mut(self.side);

        let width = DEFAULT_DOOR_WIDTH;
        let position = match Self::place(state, width) {
            Some(p) => p.clamp(0.0, (state.total_width - width).max(0.0)),
            None => return Ok(no_op(layout)),
        };

        let door_height = state.clamp_door_height(DEFAULT_DOOR_HEIGHT);
        state.doors.push(Door::new(position, width, door_height));
        state.sort_doors();

        Ok(CommandResult {
            layout: new_layout,
            inverse,
            changed: vec![self.side],
        })
    }

    fn display_name(&self) -> &str {
        "Add Door"
    }

    fn clone_box(&self) -> Box<dyn Command> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

// =============================================================================
// Remove Door
// =============================================================================

/// Remove a door; remaining doors keep their positions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoveDoor {
    pub side: PanelSide,
    pub door_id: DoorId,
}

impl RemoveDoor {
    pub fn new(side: PanelSide, door_id: DoorId) -> Self {
        Self { side, door_id }
    }
}

impl Command for RemoveDoor {
    fn apply(&self, layout: &VehicleLayout) -> crate::Result<CommandResult> {
        if layout.side(self.side).door(self.door_id).is_none() {
            return Ok(no_op(layout));
        }

        let inverse = snapshot_sides(layout, &[self.side]);
        let mut new_layout = layout.clone();
        let state = new_layout.side_mut(self.side);
        state.doors.retain(|d| d.id != self.door_id);

        Ok(CommandResult {
            layout: new_layout,
            inverse,
            changed: vec![self.side],
        })
    }

    fn display_name(&self) -> &str {
        "Remove Door"
    }

    fn clone_box(&self) -> Box<dyn Command> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

// =============================================================================
// Set Door Height
// =============================================================================

/// Change one door's height, clamped between the minimum and the panel height
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetDoorHeight {
    pub side: PanelSide,
    pub door_id: DoorId,
    pub height: f32,
}

impl SetDoorHeight {
    pub fn new(side: PanelSide, door_id: DoorId, height: f32) -> Self {
        Self {
            side,
            door_id,
            height,
        }
    }
}

impl Command for SetDoorHeight {
    fn apply(&self, layout: &VehicleLayout) -> crate::Result<CommandResult> {
        if layout.side(self.side).door(self.door_id).is_none() {
            return Ok(no_op(layout));
        }

        let inverse = snapshot_sides(layout, &[self.side]);
        let mut new_layout = layout.clone();
        let state = new_layout.side_mut(self.side);
        let clamped = state.clamp_door_height(self.height);
        if let Some(door) = state.door_mut(self.door_id) {
            door.door_height = clamped;
        }

        Ok(CommandResult {
            layout: new_layout,
            inverse,
            changed: vec![self.side],
        })
    }

    fn merge_with(&self, other: &dyn Command) -> Option<Box<dyn Command>> {
        let other = other.as_any().downcast_ref::<SetDoorHeight>()?;
        if other.side == self.side && other.door_id == self.door_id {
            Some(other.clone_box())
        } else {
            None
        }
    }

    fn display_name(&self) -> &str {
        "Set Door Height"
    }

    fn clone_box(&self) -> Box<dyn Command> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
