//! Undo/redo over editor snapshots.
//!
//! Snapshots are immutable, so history stores whole states rather than
//! inverse commands.

use crate::state::SidebarEditorState;

/// Bounded undo/redo stacks of editor snapshots.
#[derive(Debug, Clone)]
pub struct SnapshotHistory {
    /// Earlier states (most recent last).
    undo: Vec<SidebarEditorState>,
    /// Undone states (most recent last).
    redo: Vec<SidebarEditorState>,
    max_depth: usize,
}

impl SnapshotHistory {
    pub fn new(max_depth: usize) -> Self {
        Self {
            undo: Vec::new(),
            redo: Vec::new(),
            max_depth,
        }
    }

    /// Record the state that an action is about to replace.
    /// Clears the redo stack.
    pub fn push(&mut self, previous: SidebarEditorState) {
        self.redo.clear();
        self.undo.push(previous);
        if self.undo.len() > self.max_depth {
            self.undo.remove(0);
        }
    }

    /// Step back: returns the state to restore, saving `current` for redo.
    pub fn undo(&mut self, current: SidebarEditorState) -> Option<SidebarEditorState> {
        let previous = self.undo.pop()?;
        self.redo.push(current);
        Some(previous)
    }

    /// Step forward: returns the state to restore, saving `current` for undo.
    pub fn redo(&mut self, current: SidebarEditorState) -> Option<SidebarEditorState> {
        let next = self.redo.pop()?;
        self.undo.push(current);
        Some(next)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }

    pub fn undo_count(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_count(&self) -> usize {
        self.redo.len()
    }
}

impl Default for SnapshotHistory {
    fn default() -> Self {
        Self::new(100)
    }
}
