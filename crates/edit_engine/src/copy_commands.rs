//! Copy and mirror commands
//!
//! A whole side's configuration can be copied onto another side, either
//! as-is or mirrored (door positions reflected around the panel center).
//! Duplicated doors always get fresh IDs, and photo attachments are never
//! transferred with the geometry.

use crate::{snapshot_sides, Command, CommandResult};
use panel_model::{Door, PanelSide, VehicleLayout};
use serde::{Deserialize, Serialize};
use std::any::Any;

fn no_op(layout: &VehicleLayout) -> CommandResult {
    CommandResult {
        layout: layout.clone(),
        inverse: snapshot_sides(layout, &[]),
        changed: Vec::new(),
    }
}

/// Apply a copied configuration to the destination side.
/// `map_door` transforms each source door (identity for plain copy,
/// reflection for mirror); IDs are refreshed either way.
fn transfer(
    layout: &VehicleLayout,
    source: PanelSide,
    dest: PanelSide,
    map_door: impl Fn(&Door, f32) -> Door,
) -> crate::Result<CommandResult> {
    if source == dest {
        return Ok(no_op(layout));
    }

    let mut changed = vec![dest];
    if let Some(partner) = dest.height_partner() {
        if partner != source {
            changed.push(partner);
        }
    }

    let inverse = snapshot_sides(layout, &changed);
    let mut new_layout = layout.clone();

    let src = layout.side(source).clone();
    let state = new_layout.side_mut(dest);
    state.height = src.height;
    state.total_width = src.total_width;
    state.doors = if dest.supports_doors() {
        src.doors
            .iter()
            .map(|d| map_door(d, src.total_width).duplicate())
            .collect()
    } else {
        Vec::new()
    };
    state.sort_doors();

    // left/right heights stay synchronized
    if let Some(partner) = dest.height_partner() {
        if partner != source {
            let partner_state = new_layout.side_mut(partner);
            partner_state.height = src.height;
            partner_state.reclamp_door_heights();
        }
    }

    Ok(CommandResult {
        layout: new_layout,
        inverse,
        changed,
    })
}

// =============================================================================
// Copy Side
// =============================================================================

/// Copy one side's height, width, and doors onto another side
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CopySide {
    pub source: PanelSide,
    pub dest: PanelSide,
}

impl CopySide {
    pub fn new(source: PanelSide, dest: PanelSide) -> Self {
        Self { source, dest }
    }
}

impl Command for CopySide {
    fn apply(&self, layout: &VehicleLayout) -> crate::Result<CommandResult> {
        transfer(layout, self.source, self.dest, |door, _| door.clone())
    }

    fn display_name(&self) -> &str {
        "Copy Side"
    }

    fn clone_box(&self) -> Box<dyn Command> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

// =============================================================================
// Mirror Side
// =============================================================================

/// Copy one side onto another with door positions reflected horizontally
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MirrorSide {
    pub source: PanelSide,
    pub dest: PanelSide,
}

impl MirrorSide {
    pub fn new(source: PanelSide, dest: PanelSide) -> Self {
        Self { source, dest }
    }
}

impl Command for MirrorSide {
    fn apply(&self, layout: &VehicleLayout) -> crate::Result<CommandResult> {
        transfer(layout, self.source, self.dest, |door, total_width| {
            let mut mirrored = door.clone();
            mirrored.position = (total_width - door.end()).max(0.0);
            mirrored
        })
    }

    fn display_name(&self) -> &str {
        "Mirror Side"
    }

    fn clone_box(&self) -> Box<dyn Command> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
