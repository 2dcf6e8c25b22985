//! Vehicle layout aggregate

use crate::{PanelSide, SideState};
use serde::{Deserialize, Serialize};

/// The complete panel geometry of one vehicle: left, right, and back sides.
/// Photo attachments are tracked separately (see [`crate::PhotoAttachments`]);
/// this aggregate is geometry only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleLayout {
    pub left: SideState,
    pub right: SideState,
    pub back: SideState,
}

impl VehicleLayout {
    /// Create a layout with default side dimensions
    pub fn new() -> Self {
        Self {
            left: SideState::new(PanelSide::Left),
            right: SideState::new(PanelSide::Right),
            back: SideState::new(PanelSide::Back),
        }
    }

    /// Get a side's state
    pub fn side(&self, side: PanelSide) -> &SideState {
        match side {
            PanelSide::Left => &self.left,
            PanelSide::Right => &self.right,
            PanelSide::Back => &self.back,
        }
    }

    /// Get a side's state for mutation
    pub fn side_mut(&mut self, side: PanelSide) -> &mut SideState {
        match side {
            PanelSide::Left => &mut self.left,
            PanelSide::Right => &mut self.right,
            PanelSide::Back => &mut self.back,
        }
    }

    /// Replace a side's state wholesale
    pub fn set_side(&mut self, state: SideState) {
        let side = state.side;
        *self.side_mut(side) = state;
    }
}

impl Default for VehicleLayout {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_accessors() {
        let mut layout = VehicleLayout::new();
        assert_eq!(layout.side(PanelSide::Back).total_width, 242.0);

        layout.side_mut(PanelSide::Left).total_width = 650.0;
        assert_eq!(layout.left.total_width, 650.0);
        assert_eq!(layout.right.total_width, 800.0);
    }

    #[test]
    fn test_set_side_routes_by_side_key() {
        let mut layout = VehicleLayout::new();
        let mut replacement = SideState::new(PanelSide::Right);
        replacement.total_width = 720.0;
        layout.set_side(replacement);
        assert_eq!(layout.right.total_width, 720.0);
        assert_eq!(layout.left.total_width, 800.0);
    }
}
