//! The gesture state machine of a draw session.
//!
//! ```text
//!                pointer-down
//!   ┌────────┐ ───────────────► ┌────────────┐
//!   │  Idle  │                  │  Dragging  │ ◄─┐ pointer-move
//!   └────────┘ ◄─────────────── └────────────┘ ──┘ (preview only)
//!                pointer-up
//!               (commit shape)
//! ```
//!
//! Pointer-up in `Idle` and pointer-move in `Idle` are no-ops.

use crate::stroke::StrokeIntent;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DrawState {
    /// No gesture in progress
    #[default]
    Idle,
    /// The pointer is held down; the intent describes the shape being dragged
    Dragging(StrokeIntent),
}

impl DrawState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    pub fn intent(&self) -> Option<&StrokeIntent> {
        match self {
            Self::Dragging(intent) => Some(intent),
            Self::Idle => None,
        }
    }

    pub fn intent_mut(&mut self) -> Option<&mut StrokeIntent> {
        match self {
            Self::Dragging(intent) => Some(intent),
            Self::Idle => None,
        }
    }

    /// Leave `Dragging`, handing back the finished intent
    pub fn finish(&mut self) -> Option<StrokeIntent> {
        match std::mem::take(self) {
            Self::Dragging(intent) => Some(intent),
            Self::Idle => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Dragging(_) => "Dragging",
        }
    }
}
