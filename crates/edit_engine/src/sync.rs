//! Per-side sync guarding
//!
//! The host form stages each side's emitted record and saves it to the
//! backend asynchronously, while the backend may push refreshed state at any
//! time. Each side carries a small state machine guarding against lost
//! updates: an external refresh is only accepted while the side is idle, so
//! a pending local edit or an in-flight save is never clobbered. A separate
//! one-shot flag tracks whether the side's initial state has been emitted to
//! the host form at all.

use panel_model::PanelSide;
use serde::{Deserialize, Serialize};

/// Where a side currently is in its edit/save cycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SyncPhase {
    /// No local changes pending
    #[default]
    Idle,
    /// The user has edited the side since the last completed save
    Editing,
    /// A save of the side's state is in flight
    Saving,
}

/// Outcome of offering an external refresh to a side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshDecision {
    /// No local state at risk; the caller may apply the refreshed state
    Accepted,
    /// Local edits or an in-flight save take precedence; drop the refresh
    Rejected,
}

/// Sync state for one side
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SideSync {
    side: PanelSide,
    phase: SyncPhase,
    initial_emission_done: bool,
}

impl SideSync {
    pub fn new(side: PanelSide) -> Self {
        Self {
            side,
            phase: SyncPhase::Idle,
            initial_emission_done: false,
        }
    }

    pub fn phase(&self) -> SyncPhase {
        self.phase
    }

    /// The user changed this side's state
    pub fn edit_started(&mut self) {
        if self.phase == SyncPhase::Idle {
            tracing::debug!(side = self.side.display_name(), "side entered editing");
        }
        self.phase = SyncPhase::Editing;
    }

    /// The host began saving this side's emitted record
    pub fn save_started(&mut self) {
        self.phase = SyncPhase::Saving;
    }

    /// The save finished. On failure the side returns to editing so the
    /// unsaved changes keep shielding against refreshes.
    pub fn save_completed(&mut self, success: bool) {
        self.phase = if success {
            SyncPhase::Idle
        } else {
            SyncPhase::Editing
        };
        tracing::debug!(
            side = self.side.display_name(),
            success,
            "save completed"
        );
    }

    /// The backend pushed refreshed state for this side
    pub fn external_refresh(&mut self) -> RefreshDecision {
        match self.phase {
            SyncPhase::Idle => RefreshDecision::Accepted,
            SyncPhase::Editing | SyncPhase::Saving => {
                tracing::debug!(
                    side = self.side.display_name(),
                    phase = ?self.phase,
                    "external refresh rejected, local state pending"
                );
                RefreshDecision::Rejected
            }
        }
    }

    /// Whether the side's initial state still needs to be emitted to the
    /// host form
    pub fn needs_initial_emission(&self) -> bool {
        !self.initial_emission_done
    }

    /// Record that the initial emission happened
    pub fn mark_emitted(&mut self) {
        self.initial_emission_done = true;
    }
}

/// Sync state for all three sides
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncTracker {
    left: SideSync,
    right: SideSync,
    back: SideSync,
}

impl SyncTracker {
    pub fn new() -> Self {
        Self {
            left: SideSync::new(PanelSide::Left),
            right: SideSync::new(PanelSide::Right),
            back: SideSync::new(PanelSide::Back),
        }
    }

    pub fn side(&self, side: PanelSide) -> &SideSync {
        match side {
            PanelSide::Left => &self.left,
            PanelSide::Right => &self.right,
            PanelSide::Back => &self.back,
        }
    }

    pub fn side_mut(&mut self, side: PanelSide) -> &mut SideSync {
        match side {
            PanelSide::Left => &mut self.left,
            PanelSide::Right => &mut self.right,
            PanelSide::Back => &mut self.back,
        }
    }

    /// Mark every listed side as edited (the changed-sides list returned by
    /// the editor maps directly onto this)
    pub fn edits_applied(&mut self, sides: &[PanelSide]) {
        for &side in sides {
            self.side_mut(side).edit_started();
        }
    }
}

impl Default for SyncTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_accepts_refresh() {
        let mut sync = SideSync::new(PanelSide::Left);
        assert_eq!(sync.external_refresh(), RefreshDecision::Accepted);
    }

    #[test]
    fn test_editing_rejects_refresh() {
        let mut sync = SideSync::new(PanelSide::Left);
        sync.edit_started();
        assert_eq!(sync.phase(), SyncPhase::Editing);
        assert_eq!(sync.external_refresh(), RefreshDecision::Rejected);
    }

    #[test]
    fn test_saving_rejects_refresh() {
        let mut sync = SideSync::new(PanelSide::Left);
        sync.edit_started();
        sync.save_started();
        assert_eq!(sync.external_refresh(), RefreshDecision::Rejected);
    }

    #[test]
    fn test_successful_save_returns_to_idle() {
        let mut sync = SideSync::new(PanelSide::Left);
        sync.edit_started();
        sync.save_started();
        sync.save_completed(true);
        assert_eq!(sync.phase(), SyncPhase::Idle);
        assert_eq!(sync.external_refresh(), RefreshDecision::Accepted);
    }

    #[test]
    fn test_failed_save_keeps_shielding_edits() {
        let mut sync = SideSync::new(PanelSide::Left);
        sync.edit_started();
        sync.save_started();
        sync.save_completed(false);
        assert_eq!(sync.phase(), SyncPhase::Editing);
        assert_eq!(sync.external_refresh(), RefreshDecision::Rejected);
    }

    #[test]
    fn test_initial_emission_is_one_shot() {
        let mut sync = SideSync::new(PanelSide::Back);
        assert!(sync.needs_initial_emission());
        sync.mark_emitted();
        assert!(!sync.needs_initial_emission());
    }

    #[test]
    fn test_tracker_keeps_sides_independent() {
        let mut tracker = SyncTracker::new();
        tracker.edits_applied(&[PanelSide::Left, PanelSide::Right]);
        assert_eq!(tracker.side(PanelSide::Left).phase(), SyncPhase::Editing);
        assert_eq!(tracker.side(PanelSide::Right).phase(), SyncPhase::Editing);
        assert_eq!(
            tracker.side_mut(PanelSide::Back).external_refresh(),
            RefreshDecision::Accepted
        );
    }
}
