//! The neutral event vocabulary every backend translates into.
//!
//! Backends turn native messages (`WM_*` codes, winit `WindowEvent`s) into
//! an [`Event`]; the dispatcher matches on it and forwards to the UI core.

use crate::geometry::{Point, Size};

/// One native window message, already decoded.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The window was created. Application state is attached by now.
    Created,
    /// The window is going away; the message pump should stop.
    Destroy,
    /// The OS wants the background erased before painting.
    EraseBackground,
    MouseDown { button: MouseButton, position: Point },
    MouseUp { button: MouseButton, position: Point },
    MouseMove { position: Point },
    /// Capture was taken away by the OS (another window grabbed it).
    CaptureLost,
    Paint,
    Resize(Size),
    Scroll(ScrollEvent),
    Key(KeyEvent),
    /// Committed text from an input method or plain character input.
    TextCommit(String),
    /// Anything the host does not translate; left to the OS default.
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Primary,
    Secondary,
    Middle,
    Other(u16),
}

impl MouseButton {
    /// First extended button (`XBUTTON1`, "back").
    pub const BACK: MouseButton = MouseButton::Other(3);
    /// Second extended button (`XBUTTON2`, "forward").
    pub const FORWARD: MouseButton = MouseButton::Other(4);

    /// Highest `Other` index with a capture bit of its own. Every button
    /// above it shares the top bit, so releasing one of them ends capture
    /// even if another is still down.
    pub const MAX_TRACKED_OTHER: u16 = 28;

    /// Bit used by the capture tracker.
    pub(crate) fn bit(self) -> u32 {
        match self {
            MouseButton::Primary => 1 << 0,
            MouseButton::Secondary => 1 << 1,
            MouseButton::Middle => 1 << 2,
            MouseButton::Other(n) => 1 << (3 + u32::from(n.min(Self::MAX_TRACKED_OTHER))),
        }
    }
}

// ════════════════════════════════════════════════════════════════════
// Scroll
// ════════════════════════════════════════════════════════════════════

/// Native scroll subtype. Discrete directions come from wheel "clicks" on
/// toolkits that report them; `Smooth` carries a continuous delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
    Left,
    Right,
    Smooth,
    /// A subtype the host does not know how to interpret.
    Unrecognized(u32),
}

impl From<u32> for ScrollDirection {
    /// Raw subtype numbering: 0 up, 1 down, 2 left, 3 right, 4 smooth.
    fn from(raw: u32) -> Self {
        match raw {
            0 => ScrollDirection::Up,
            1 => ScrollDirection::Down,
            2 => ScrollDirection::Left,
            3 => ScrollDirection::Right,
            4 => ScrollDirection::Smooth,
            other => ScrollDirection::Unrecognized(other),
        }
    }
}

/// A scroll notification as reported by the platform.
///
/// `delta_x`/`delta_y` are only meaningful for [`ScrollDirection::Smooth`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollEvent {
    pub direction: ScrollDirection,
    pub delta_x: f64,
    pub delta_y: f64,
}

impl ScrollEvent {
    pub fn discrete(direction: ScrollDirection) -> Self {
        Self {
            direction,
            delta_x: 0.0,
            delta_y: 0.0,
        }
    }

    pub fn smooth(delta_x: f64, delta_y: f64) -> Self {
        Self {
            direction: ScrollDirection::Smooth,
            delta_x,
            delta_y,
        }
    }

    /// Normalized delta. See [`scroll_delta`].
    pub fn delta(&self) -> Option<ScrollDelta> {
        scroll_delta(self)
    }
}

/// Scroll amount in lines. Positive `dy` scrolls down, positive `dx` right.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollDelta {
    pub dx: f64,
    pub dy: f64,
}

/// Fold the four discrete directions and the smooth variant into one
/// `(dx, dy)` pair. Returns `None` for unrecognized subtypes so the caller
/// can drop the event.
pub fn scroll_delta(event: &ScrollEvent) -> Option<ScrollDelta> {
    let (dx, dy) = match event.direction {
        ScrollDirection::Up => (0.0, -1.0),
        ScrollDirection::Down => (0.0, 1.0),
        ScrollDirection::Left => (-1.0, 0.0),
        ScrollDirection::Right => (1.0, 0.0),
        ScrollDirection::Smooth => (event.delta_x, event.delta_y),
        ScrollDirection::Unrecognized(_) => return None,
    };
    Some(ScrollDelta { dx, dy })
}

// ════════════════════════════════════════════════════════════════════
// Keyboard
// ════════════════════════════════════════════════════════════════════

/// Modifier bitmask forwarded with every key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers(pub u32);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const SHIFT: Modifiers = Modifiers(1 << 0);
    pub const CONTROL: Modifiers = Modifiers(1 << 1);
    pub const ALT: Modifiers = Modifiers(1 << 2);
    pub const SUPER: Modifiers = Modifiers(1 << 3);

    pub fn bits(self) -> u32 {
        self.0
    }

    pub fn contains(self, other: Modifiers) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn shift(self) -> bool {
        self.contains(Modifiers::SHIFT)
    }

    pub fn control(self) -> bool {
        self.contains(Modifiers::CONTROL)
    }

    pub fn alt(self) -> bool {
        self.contains(Modifiers::ALT)
    }
}

impl std::ops::BitOr for Modifiers {
    type Output = Modifiers;

    fn bitor(self, rhs: Modifiers) -> Modifiers {
        Modifiers(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for Modifiers {
    fn bitor_assign(&mut self, rhs: Modifiers) {
        self.0 |= rhs.0;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyState {
    Pressed,
    Released,
}

/// A key press or release.
///
/// `code` uses Win32 virtual-key numbering on every backend
/// (see [`crate::keymap`]); `0` means the key has no mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub code: u32,
    pub modifiers: Modifiers,
    pub state: KeyState,
    pub repeat: bool,
}

impl KeyEvent {
    pub fn pressed(code: u32, modifiers: Modifiers) -> Self {
        Self {
            code,
            modifiers,
            state: KeyState::Pressed,
            repeat: false,
        }
    }

    pub fn released(code: u32, modifiers: Modifiers) -> Self {
        Self {
            code,
            modifiers,
            state: KeyState::Released,
            repeat: false,
        }
    }

    pub fn is_pressed(&self) -> bool {
        self.state == KeyState::Pressed
    }
}
