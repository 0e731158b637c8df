//! Gesture state of the canvas.
//!
//! ```text
//!   ┌──────┐  pointer down  ┌─────────┐
//!   │ Idle ├───────────────►│ Pressed │
//!   │      │◄───────────────┤         │
//!   └──────┘   pointer up   └─────────┘
//! ```
//!
//! A second press cannot start before the first release, so there is never
//! more than one gesture in flight.

use egui::Pos2;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum EditorState {
    /// No button held
    #[default]
    Idle,
    /// Primary button held since `down` (canvas coordinates)
    Pressed { down: Pos2 },
}

impl EditorState {
    pub fn is_idle(&self) -> bool {
        matches!(self, EditorState::Idle)
    }

    /// Where the current gesture started, if one is in progress
    pub fn pressed_at(&self) -> Option<Pos2> {
        match self {
            EditorState::Pressed { down } => Some(*down),
            EditorState::Idle => None,
        }
    }
}
