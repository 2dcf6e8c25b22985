//! Panel commands - height and segment width adjustments

use crate::{snapshot_sides, Command, CommandResult};
use layout_engine::compute_segments;
use panel_model::{
    PanelSide, SideState, VehicleLayout, MIN_PANEL_WIDTH, MIN_SEGMENT_WIDTH,
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
// Set Panel Height
// =============================================================================

/// Change a panel's height. Left and right heights are kept synchronized:
/// setting one also sets the other. The back panel is independent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetPanelHeight {
    pub side: PanelSide,
    pub height: f32,
}

impl SetPanelHeight {
    pub fn new(side: PanelSide, height: f32) -> Self {
        Self { side, height }
    }
}

impl Command for SetPanelHeight {
    fn apply(&self, layout: &VehicleLayout) -> crate::Result<CommandResult> {
        let clamped = SideState::clamp_height(self.height);

        let mut changed = vec![self.side];
        if let Some(partner) = self.side.height_partner() {
            changed.push(partner);
        }

        let inverse = snapshot_sides(layout, &changed);
        let mut new_layout = layout.clone();
        for &side in &changed {
            let state = new_layout.side_mut(side);
            state.height = clamped;
            state.reclamp_door_heights();
        }

        Ok(CommandResult {
            layout: new_layout,
            inverse,
            changed,
        })
    }

    fn merge_with(&self, other: &dyn Command) -> Option<Box<dyn Command>> {
        let other = other.as_any().downcast_ref::<SetPanelHeight>()?;
        if other.side == self.side {
            Some(other.clone_box())
        } else {
            None
        }
    }

    fn display_name(&self) -> &str {
        "Set Panel Height"
    }

    fn clone_box(&self) -> Box<dyn Command> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

// =============================================================================
// Set Segment Width
// =============================================================================

/// Resize one segment of a side's derived segment list.
///
/// The width delta propagates by segment kind: a door segment widens the
/// door itself, the trailing plain segment only widens the panel, and an
/// interior plain segment shifts every door at or beyond its right edge.
/// The panel width absorbs the delta in all three cases and never drops
/// below the minimum.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetSegmentWidth {
    pub side: PanelSide,
    pub segment_index: usize,
    pub width: f32,
}

impl SetSegmentWidth {
    pub fn new(side: PanelSide, segment_index: usize, width: f32) -> Self {
        Self {
            side,
            segment_index,
            width,
        }
    }
}

impl Command for SetSegmentWidth {
    fn apply(&self, layout: &VehicleLayout) -> crate::Result<CommandResult> {
        let state = layout.side(self.side);
        let segments = compute_segments(&state.doors, state.total_width);

        let segment = match segments.get(self.segment_index) {
            Some(s) => s.clone(),
            None => return Ok(no_op(layout)),
        };

        let new_width = self.width.max(MIN_SEGMENT_WIDTH);
        let diff = new_width - segment.width();
        if diff == 0.0 {
            return Ok(no_op(layout));
        }

        let inverse = snapshot_sides(layout, &[self.side]);
        let mut new_layout = layout.clone();
        let state = new_layout.side_mut(self.side);

        if let Some(resized) = &segment.door {
            if let Some(door) = state.door_mut(resized.id) {
                door.width += diff;
            }
        } else if self.segment_index + 1 < segments.len() {
            // interior plain segment: doors downstream of it slide over
            for door in &mut state.doors {
                if door.position >= segment.end {
                    door.position += diff;
                }
            }
        }
        // trailing plain segment: only the panel width changes

        state.total_width = (state.total_width + diff).max(MIN_PANEL_WIDTH);
        state.sort_doors();

        Ok(CommandResult {
            layout: new_layout,
            inverse,
            changed: vec![self.side],
        })
    }

    fn merge_with(&self, other: &dyn Command) -> Option<Box<dyn Command>> {
        let other = other.as_any().downcast_ref::<SetSegmentWidth>()?;
        if other.side == self.side && other.segment_index == self.segment_index {
            Some(other.clone_box())
        } else {
            None
        }
    }

    fn display_name(&self) -> &str {
        "Set Segment Width"
    }

    fn clone_box(&self) -> Box<dyn Command> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
