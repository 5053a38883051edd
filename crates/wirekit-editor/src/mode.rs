//! Interaction mode state machine.
//!
//! Exactly one mode is active at any time. All transitions funnel through
//! [`ModeMachine::set`], so the facade has a single place to cancel the
//! outgoing mode's in-flight gesture before the new mode sees any input.

use std::fmt;

use tracing::debug;

/// The mutually exclusive interaction modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionMode {
    /// No gesture armed; clicks select, nothing mutates.
    #[default]
    Idle,
    /// Dragging the canvas itself (middle button or ctrl+primary).
    Pan,
    /// Component relocation armed.
    Move,
    /// Click-to-route wiring armed.
    Wire,
    /// Clicks delete the component or wire under the cursor.
    Delete,
}

impl fmt::Display for InteractionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InteractionMode::Idle => "idle",
            InteractionMode::Pan => "pan",
            InteractionMode::Move => "move",
            InteractionMode::Wire => "wire",
            InteractionMode::Delete => "delete",
        };
        write!(f, "{}", name)
    }
}

/// Holds the active mode and performs transitions.
#[derive(Debug, Clone, Default)]
pub struct ModeMachine {
    mode: InteractionMode,
}

impl ModeMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    pub fn is(&self, mode: InteractionMode) -> bool {
        self.mode == mode
    }

    /// Transitions to `target`. Returns the mode that was exited, or `None`
    /// when the machine was already in `target`. The caller cancels the
    /// exited mode's gesture state.
    pub fn set(&mut self, target: InteractionMode) -> Option<InteractionMode> {
        if self.mode == target {
            return None;
        }
        let exited = self.mode;
        debug!(from = %exited, to = %target, "mode transition");
        self.mode = target;
        Some(exited)
    }

    /// Keyboard toggle semantics: pressing the active mode's key returns to
    /// `Idle`, otherwise enters the mode. Returns the exited mode as [`set`]
    /// does.
    ///
    /// [`set`]: ModeMachine::set
    pub fn toggle(&mut self, target: InteractionMode) -> Option<InteractionMode> {
        if self.mode == target {
            self.set(InteractionMode::Idle)
        } else {
            self.set(target)
        }
    }
}
