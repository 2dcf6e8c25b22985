//! Undo/redo manager with command batching

use crate::{Command, EditError, Result};
use std::time::{Duration, Instant};

/// An entry in the undo stack
struct UndoEntry {
    /// The original command
    command: Box<dyn Command>,
    /// The inverse command (for undo)
    inverse: Box<dyn Command>,
    /// When this entry was created
    timestamp: Instant,
}

/// Manages undo and redo stacks
pub struct UndoManager {
    /// Stack of commands that can be undone
    undo_stack: Vec<UndoEntry>,
    /// Stack of commands that can be redone
    redo_stack: Vec<Box<dyn Command>>,
    /// Maximum number of undo entries
    max_entries: usize,
    /// Time threshold for batching (commands within this time are merged)
    batch_threshold: Duration,
}

impl UndoManager {
    /// Create a new undo manager
    pub fn new() -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_entries: 100,
            batch_threshold: Duration::from_millis(500),
        }
    }

    /// Create with custom limits
    pub fn with_limits(max_entries: usize, batch_threshold: Duration) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_entries,
            batch_threshold,
        }
    }

    /// Push a command onto the undo stack
    pub fn push(&mut self, command: Box<dyn Command>, inverse: Box<dyn Command>) {
        // Clear redo stack on new command
        self.redo_stack.clear();

        let now = Instant::now();

        // Try to merge with the previous command if within the batch
        // threshold. The existing inverse is kept: it restores the state
        // from before the whole batch, so one undo reverts every merged
        // step.
        if let Some(last) = self.undo_stack.last_mut() {
            if now.duration_since(last.timestamp) < self.batch_threshold {
                if let Some(merged) = last.command.merge_with(command.as_ref()) {
                    last.command = merged;
                    last.timestamp = now;
                    return;
                }
            }
        }

        // Add new entry
        self.undo_stack.push(UndoEntry {
            command,
            inverse,
            timestamp: now,
        });

        // Enforce max entries
        while self.undo_stack.len() > self.max_entries {
            self.undo_stack.remove(0);
        }
    }

    /// Pop the last command for undo
    pub fn pop_undo(&mut self) -> Result<Box<dyn Command>> {
        let entry = self.undo_stack.pop().ok_or(EditError::UndoStackEmpty)?;

        // Push to redo stack
        self.redo_stack.push(entry.command);

        Ok(entry.inverse)
    }

    /// Pop a command for redo
    pub fn pop_redo(&mut self) -> Result<Box<dyn Command>> {
        self.redo_stack.pop().ok_or(EditError::RedoStackEmpty)
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Clear all undo/redo history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

impl Default for UndoManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SetPanelHeight;
    use panel_model::PanelSide;

    fn boxed(height: f32) -> Box<dyn Command> {
        Box::new(SetPanelHeight::new(PanelSide::Left, height))
    }

    #[test]
    fn test_push_and_pop() {
        let mut undo = UndoManager::with_limits(10, Duration::ZERO);
        assert!(!undo.can_undo());

        undo.push(boxed(250.0), boxed(240.0));
        assert!(undo.can_undo());
        assert!(!undo.can_redo());

        let inverse = undo.pop_undo().unwrap();
        assert_eq!(inverse.display_name(), "Set Panel Height");
        assert!(undo.can_redo());
    }

    #[test]
    fn test_empty_stacks_error() {
        let mut undo = UndoManager::new();
        assert!(matches!(undo.pop_undo(), Err(EditError::UndoStackEmpty)));
        assert!(matches!(undo.pop_redo(), Err(EditError::RedoStackEmpty)));
    }

    #[test]
    fn test_rapid_edits_merge_into_one_entry() {
        let mut undo = UndoManager::new();
        undo.push(boxed(250.0), boxed(240.0));
        undo.push(boxed(260.0), boxed(250.0));
        undo.push(boxed(270.0), boxed(260.0));

        // merged: a single undo reverts the whole run of tweaks
        let inverse = undo.pop_undo().unwrap();
        let restored = inverse
            .as_any()
            .downcast_ref::<SetPanelHeight>()
            .unwrap();
        assert_eq!(restored.height, 240.0);
        assert!(!undo.can_undo());
    }

    #[test]
    fn test_zero_threshold_disables_merging() {
        let mut undo = UndoManager::with_limits(10, Duration::ZERO);
        undo.push(boxed(250.0), boxed(240.0));
        undo.push(boxed(260.0), boxed(250.0));
        undo.pop_undo().unwrap();
        assert!(undo.can_undo());
    }

    #[test]
    fn test_new_command_clears_redo() {
        let mut undo = UndoManager::with_limits(10, Duration::ZERO);
        undo.push(boxed(250.0), boxed(240.0));
        undo.pop_undo().unwrap();
        assert!(undo.can_redo());

        undo.push(boxed(300.0), boxed(240.0));
        assert!(!undo.can_redo());
    }

    #[test]
    fn test_max_entries_evicts_oldest() {
        let mut undo = UndoManager::with_limits(2, Duration::ZERO);
        undo.push(boxed(250.0), boxed(240.0));
        undo.push(boxed(260.0), boxed(250.0));
        undo.push(boxed(270.0), boxed(260.0));

        undo.pop_undo().unwrap();
        undo.pop_undo().unwrap();
        assert!(!undo.can_undo());
    }
}
