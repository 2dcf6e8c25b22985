//! Door value object and dimension constants
//!
//! All dimensions are in centimeters. A door is positioned by the offset of
//! its left edge from the left edge of the panel, and its height is measured
//! upward from the bottom edge of the panel.

use crate::DoorId;
use serde::{Deserialize, Serialize};

// =============================================================================
// Dimension Constants (centimeters)
// =============================================================================

/// Minimum panel height
pub const MIN_PANEL_HEIGHT: f32 = 100.0;
/// Maximum panel height
pub const MAX_PANEL_HEIGHT: f32 = 400.0;
/// Minimum panel width
pub const MIN_PANEL_WIDTH: f32 = 100.0;
/// Minimum width of any segment (plain or door)
pub const MIN_SEGMENT_WIDTH: f32 = 50.0;
/// Minimum door height
pub const MIN_DOOR_HEIGHT: f32 = 50.0;
/// Width assigned to a newly placed door
pub const DEFAULT_DOOR_WIDTH: f32 = 100.0;
/// Height assigned to a newly placed door
pub const DEFAULT_DOOR_HEIGHT: f32 = 190.0;

// =============================================================================
// Door
// =============================================================================

/// A door opening in a side panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Door {
    /// Stable identifier
    pub id: DoorId,
    /// Offset from the panel's left edge to the door's left edge, in cm
    pub position: f32,
    /// Door width in cm (always positive)
    pub width: f32,
    /// Door height in cm, measured from the panel's bottom edge
    pub door_height: f32,
}

impl Door {
    /// Create a new door with a fresh ID
    pub fn new(position: f32, width: f32, door_height: f32) -> Self {
        Self {
            id: DoorId::new(),
            position,
            width,
            door_height,
        }
    }

    /// Create a door with a specific ID
    pub fn with_id(id: DoorId, position: f32, width: f32, door_height: f32) -> Self {
        Self {
            id,
            position,
            width,
            door_height,
        }
    }

    /// Offset of the door's right edge from the panel's left edge
    pub fn end(&self) -> f32 {
        self.position + self.width
    }

    /// Copy of this door with a fresh ID
    pub fn duplicate(&self) -> Self {
        Self {
            id: DoorId::new(),
            ..self.clone()
        }
    }
}
