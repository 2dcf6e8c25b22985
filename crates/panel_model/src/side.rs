//! Panel sides and per-side state
//!
//! A vehicle has three configurable surfaces: the left side, the right side,
//! and the back. Left and right carry door openings and keep their heights
//! synchronized; the back never has doors and its height is independent.

use crate::{Door, DoorId, MAX_PANEL_HEIGHT, MIN_DOOR_HEIGHT, MIN_PANEL_HEIGHT};
use serde::{Deserialize, Serialize};

// =============================================================================
// Panel Side
// =============================================================================

/// One of the three configurable panel surfaces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PanelSide {
    Left,
    Right,
    Back,
}

impl PanelSide {
    /// All sides, in emission order
    pub fn all() -> [PanelSide; 3] {
        [PanelSide::Left, PanelSide::Right, PanelSide::Back]
    }

    /// Get the side name for display
    pub fn display_name(&self) -> &'static str {
        match self {
            PanelSide::Left => "Left",
            PanelSide::Right => "Right",
            PanelSide::Back => "Back",
        }
    }

    /// Whether doors can be placed on this side
    pub fn supports_doors(&self) -> bool {
        !matches!(self, PanelSide::Back)
    }

    /// The side whose height is kept synchronized with this one
    pub fn height_partner(&self) -> Option<PanelSide> {
        match self {
            PanelSide::Left => Some(PanelSide::Right),
            PanelSide::Right => Some(PanelSide::Left),
            PanelSide::Back => None,
        }
    }

    /// Default panel height in cm
    pub fn default_height(&self) -> f32 {
        match self {
            PanelSide::Left | PanelSide::Right => 240.0,
            PanelSide::Back => 242.0,
        }
    }

    /// Default panel width in cm
    pub fn default_width(&self) -> f32 {
        match self {
            PanelSide::Left | PanelSide::Right => 800.0,
            PanelSide::Back => 242.0,
        }
    }
}

// =============================================================================
// Side State
// =============================================================================

/// The configurable state of one panel surface.
/// Dimensions are in centimeters; `doors` is kept ordered by position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SideState {
    /// Which surface this is
    pub side: PanelSide,
    /// Panel height in cm
    pub height: f32,
    /// Panel width in cm
    pub total_width: f32,
    /// Door openings, ordered by position (empty for the back panel)
    pub doors: Vec<Door>,
}

impl SideState {
    /// Create a side with its default dimensions and no doors
    pub fn new(side: PanelSide) -> Self {
        Self {
            side,
            height: side.default_height(),
            total_width: side.default_width(),
            doors: Vec::new(),
        }
    }

    /// Look up a door by ID
    pub fn door(&self, id: DoorId) -> Option<&Door> {
        self.doors.iter().find(|d| d.id == id)
    }

    /// Look up a door by ID for mutation
    pub fn door_mut(&mut self, id: DoorId) -> Option<&mut Door> {
        self.doors.iter_mut().find(|d| d.id == id)
    }

    /// Restore the ordered-by-position invariant after a position change
    pub fn sort_doors(&mut self) {
        self.doors
            .sort_by(|a, b| a.position.total_cmp(&b.position));
    }

    /// Clamp a panel height into the legal range
    pub fn clamp_height(height: f32) -> f32 {
        height.clamp(MIN_PANEL_HEIGHT, MAX_PANEL_HEIGHT)
    }

    /// Clamp a door height against this panel's current height
    pub fn clamp_door_height(&self, door_height: f32) -> f32 {
        door_height.clamp(MIN_DOOR_HEIGHT, self.height)
    }

    /// Re-clamp all door heights after the panel height changed
    pub fn reclamp_door_heights(&mut self) {
        let height = self.height;
        for door in &mut self.doors {
            door.door_height = door.door_height.clamp(MIN_DOOR_HEIGHT, height);
        }
    }
}
