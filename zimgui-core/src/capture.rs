//! Pointer-capture bookkeeping.
//!
//! Capture starts with the first held button and ends when the last one is
//! released, so a drag that leaves the window keeps delivering to it.

use crate::event::MouseButton;

/// What the backend must do after a button transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureChange {
    Begin,
    Release,
    Unchanged,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CaptureState {
    held: u32,
}

impl CaptureState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.held != 0
    }

    pub fn is_held(&self, button: MouseButton) -> bool {
        self.held & button.bit() != 0
    }

    pub fn press(&mut self, button: MouseButton) -> CaptureChange {
        let was_active = self.is_active();
        self.held |= button.bit();
        if was_active {
            CaptureChange::Unchanged
        } else {
            CaptureChange::Begin
        }
    }

    /// A release for a button that was never seen going down still ends
    /// capture if nothing else is held; the OS may have eaten the press.
    pub fn release(&mut self, button: MouseButton) -> CaptureChange {
        self.held &= !button.bit();
        if self.is_active() {
            CaptureChange::Unchanged
        } else {
            CaptureChange::Release
        }
    }

    /// The OS revoked capture; forget every held button.
    pub fn reset(&mut self) {
        self.held = 0;
    }
}
