use crate::error::HistoryError;
use crate::surface::Surface;

/// Linear undo/redo over full surface snapshots.
///
/// Every stored snapshot is an independent clone. Any new checkpoint discards
/// the redo stack, so history never branches.
#[derive(Debug, Default, Clone)]
pub struct History {
    /// Snapshots taken before each committed edit
    undo_stack: Vec<Surface>,
    /// Snapshots displaced by undo
    redo_stack: Vec<Surface>,
}

impl History {
    /// Creates a new empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `surface` as it is before an edit is applied
    pub fn checkpoint(&mut self, surface: &Surface) {
        self.undo_stack.push(surface.clone());
        self.redo_stack.clear();
    }

    /// Step back one edit, returning the surface to make current
    pub fn undo(&mut self, current: &Surface) -> Result<Surface, HistoryError> {
        let previous = self.undo_stack.pop().ok_or(HistoryError::EmptyHistory)?;
        self.redo_stack.push(current.clone());
        Ok(previous)
    }

    /// Step forward one undone edit, returning the surface to make current
    pub fn redo(&mut self, current: &Surface) -> Result<Surface, HistoryError> {
        let next = self.redo_stack.pop().ok_or(HistoryError::EmptyHistory)?;
        self.undo_stack.push(current.clone());
        Ok(next)
    }

    /// Returns true if there are snapshots that can be undone
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Returns true if there are snapshots that can be redone
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    /// Snapshot that the next undo would restore
    pub fn peek_undo(&self) -> Option<&Surface> {
        self.undo_stack.last()
    }

    /// Drop both stacks
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
