//! Command execution engine

use crate::{Command, Result, UndoManager};
use panel_model::{PanelSide, VehicleLayout};

/// The main editing engine that owns the layout state and runs commands
pub struct LayoutEditor {
    /// Current vehicle layout
    layout: VehicleLayout,
    /// Undo manager
    undo_manager: UndoManager,
}

impl LayoutEditor {
    /// Create a new editor with a default layout
    pub fn new() -> Self {
        Self {
            layout: VehicleLayout::new(),
            undo_manager: UndoManager::new(),
        }
    }

    /// Create an editor around an existing layout (e.g. loaded from a
    /// persisted record)
    pub fn with_layout(layout: VehicleLayout) -> Self {
        Self {
            layout,
            undo_manager: UndoManager::new(),
        }
    }

    /// Get the current layout
    pub fn layout(&self) -> &VehicleLayout {
        &self.layout
    }

    /// Replace the layout wholesale, e.g. after an accepted external
    /// refresh. Clears edit history, which refers to the old state.
    pub fn reset_layout(&mut self, layout: VehicleLayout) {
        self.layout = layout;
        self.undo_manager.clear();
    }

    /// Execute a command. Returns the sides whose state changed (empty when
    /// the command degraded to a no-op); no-ops leave the undo history
    /// untouched.
    pub fn execute(&mut self, command: Box<dyn Command>) -> Result<Vec<PanelSide>> {
        let result = command.apply(&self.layout)?;

        if result.changed.is_empty() {
            return Ok(Vec::new());
        }

        // Record for undo
        self.undo_manager.push(command, result.inverse);

        // Update state
        self.layout = result.layout;

        Ok(result.changed)
    }

    /// Undo the last command
    pub fn undo(&mut self) -> Result<Vec<PanelSide>> {
        let inverse = self.undo_manager.pop_undo()?;
        let result = inverse.apply(&self.layout)?;

        self.layout = result.layout;

        Ok(result.changed)
    }

    /// Redo the last undone command
    pub fn redo(&mut self) -> Result<Vec<PanelSide>> {
        let command = self.undo_manager.pop_redo()?;
        let result = command.apply(&self.layout)?;

        self.layout = result.layout;

        Ok(result.changed)
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        self.undo_manager.can_undo()
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        self.undo_manager.can_redo()
    }
}

impl Default for LayoutEditor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AddDoor, RemoveDoor, SetPanelHeight};
    use panel_model::DoorId;

    #[test]
    fn test_execute_reports_changed_sides() {
        let mut editor = LayoutEditor::new();
        let changed = editor
            .execute(Box::new(SetPanelHeight::new(PanelSide::Left, 300.0)))
            .unwrap();
        assert_eq!(changed, vec![PanelSide::Left, PanelSide::Right]);
        assert_eq!(editor.layout().left.height, 300.0);
    }

    #[test]
    fn test_no_op_commands_do_not_enter_history() {
        let mut editor = LayoutEditor::new();
        let changed = editor
            .execute(Box::new(RemoveDoor::new(PanelSide::Left, DoorId::new())))
            .unwrap();
        assert!(changed.is_empty());
        assert!(!editor.can_undo());
    }

    #[test]
    fn test_undo_redo_cycle() {
        let mut editor = LayoutEditor::new();
        editor.execute(Box::new(AddDoor::new(PanelSide::Left))).unwrap();
        assert_eq!(editor.layout().left.doors.len(), 1);

        editor.undo().unwrap();
        assert!(editor.layout().left.doors.is_empty());
        assert!(editor.can_redo());

        editor.redo().unwrap();
        assert_eq!(editor.layout().left.doors.len(), 1);
    }

    #[test]
    fn test_undo_restores_synced_heights() {
        let mut editor = LayoutEditor::new();
        editor
            .execute(Box::new(SetPanelHeight::new(PanelSide::Left, 300.0)))
            .unwrap();
        editor.undo().unwrap();
        assert_eq!(editor.layout().left.height, 240.0);
        assert_eq!(editor.layout().right.height, 240.0);
    }

    #[test]
    fn test_reset_layout_clears_history() {
        let mut editor = LayoutEditor::new();
        editor.execute(Box::new(AddDoor::new(PanelSide::Left))).unwrap();
        editor.reset_layout(VehicleLayout::new());
        assert!(!editor.can_undo());
        assert!(editor.layout().left.doors.is_empty());
    }
}
