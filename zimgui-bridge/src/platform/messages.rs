//! Win32 window-message decoding.
//!
//! Everything here works on the raw `(msg, wParam, lParam)` triple and needs
//! no window handle, so it builds (and is tested) on every platform. The
//! message numbers are the `WM_*` values from `winuser.h`.

use zimgui_core::{
    Disposition, Event, KeyEvent, KeyState, Modifiers, MouseButton, Point, ScrollEvent, Size,
};

/// Window message numbers handled by the Win32 backend.
pub mod wm {
    pub const CREATE: u32 = 0x0001;
    pub const DESTROY: u32 = 0x0002;
    pub const SIZE: u32 = 0x0005;
    pub const PAINT: u32 = 0x000F;
    pub const ERASEBKGND: u32 = 0x0014;

    pub const KEYDOWN: u32 = 0x0100;
    pub const KEYUP: u32 = 0x0101;
    pub const CHAR: u32 = 0x0102;
    pub const SYSKEYDOWN: u32 = 0x0104;
    pub const SYSKEYUP: u32 = 0x0105;

    pub const MOUSEMOVE: u32 = 0x0200;
    pub const LBUTTONDOWN: u32 = 0x0201;
    pub const LBUTTONUP: u32 = 0x0202;
    pub const RBUTTONDOWN: u32 = 0x0204;
    pub const RBUTTONUP: u32 = 0x0205;
    pub const MBUTTONDOWN: u32 = 0x0207;
    pub const MBUTTONUP: u32 = 0x0208;
    pub const MOUSEWHEEL: u32 = 0x020A;
    pub const XBUTTONDOWN: u32 = 0x020B;
    pub const XBUTTONUP: u32 = 0x020C;
    pub const MOUSEHWHEEL: u32 = 0x020E;
    pub const CAPTURECHANGED: u32 = 0x0215;
}

/// One wheel notch.
pub const WHEEL_DELTA: f64 = 120.0;

/// `HIWORD(wParam)` of an X-button message for the first extended button.
const XBUTTON1: u16 = 0x0001;

#[inline]
pub fn loword(v: usize) -> u16 {
    (v & 0xFFFF) as u16
}

#[inline]
pub fn hiword(v: usize) -> u16 {
    ((v >> 16) & 0xFFFF) as u16
}

/// Client coordinates from a mouse message. Signed: while captured the
/// pointer can be left of or above the window.
pub fn lparam_point(lparam: isize) -> Point {
    let x = loword(lparam as usize) as i16;
    let y = hiword(lparam as usize) as i16;
    Point::new(f32::from(x), f32::from(y))
}

/// New client size from `WM_SIZE`.
pub fn lparam_size(lparam: isize) -> Size {
    let packed = lparam as usize;
    Size::new(u32::from(loword(packed)), u32::from(hiword(packed)))
}

/// Signed notches from a wheel message; positive is away from the user
/// (or right, for the horizontal wheel).
pub fn wheel_notches(wparam: usize) -> f64 {
    f64::from(hiword(wparam) as i16) / WHEEL_DELTA
}

pub fn xbutton(wparam: usize) -> MouseButton {
    if hiword(wparam) == XBUTTON1 {
        MouseButton::BACK
    } else {
        MouseButton::FORWARD
    }
}

/// Bit 30 of a key message's `lParam`: the key was already down.
pub fn is_repeat(lparam: isize) -> bool {
    (lparam >> 30) & 1 != 0
}

/// Client size as signed window-rect extents, `None` if it does not fit.
pub fn client_extent(width: u32, height: u32) -> Option<(i32, i32)> {
    Some((i32::try_from(width).ok()?, i32::try_from(height).ok()?))
}

/// The window procedure's return value for a dispatched message, or `None`
/// when `DefWindowProcW` must answer.
pub fn message_result(msg: u32, disposition: Disposition) -> Option<isize> {
    match (msg, disposition) {
        // Alt+F4 and the system menu still need the default handling.
        (wm::SYSKEYDOWN | wm::SYSKEYUP, _) => None,
        (_, Disposition::Default) => None,
        // X-button messages report TRUE when processed.
        (wm::XBUTTONDOWN | wm::XBUTTONUP, Disposition::Handled) => Some(1),
        (_, Disposition::Handled) => Some(0),
        (_, Disposition::BackgroundErased) => Some(1),
    }
}

/// Turns window messages into [`Event`]s. Holds the one piece of state
/// decoding needs: the high half of a UTF-16 pair split across two
/// `WM_CHAR`s.
#[derive(Debug, Default)]
pub struct MessageDecoder {
    high_surrogate: Option<u16>,
}

impl MessageDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// `modifiers` is only called for key messages.
    pub fn decode(
        &mut self,
        msg: u32,
        wparam: usize,
        lparam: isize,
        modifiers: impl FnOnce() -> Modifiers,
    ) -> Event {
        match msg {
            wm::CREATE => Event::Created,
            wm::DESTROY => Event::Destroy,
            wm::ERASEBKGND => Event::EraseBackground,
            wm::PAINT => Event::Paint,
            wm::SIZE => Event::Resize(lparam_size(lparam)),

            wm::LBUTTONDOWN => button(MouseButton::Primary, true, lparam),
            wm::LBUTTONUP => button(MouseButton::Primary, false, lparam),
            wm::RBUTTONDOWN => button(MouseButton::Secondary, true, lparam),
            wm::RBUTTONUP => button(MouseButton::Secondary, false, lparam),
            wm::MBUTTONDOWN => button(MouseButton::Middle, true, lparam),
            wm::MBUTTONUP => button(MouseButton::Middle, false, lparam),
            wm::XBUTTONDOWN => button(xbutton(wparam), true, lparam),
            wm::XBUTTONUP => button(xbutton(wparam), false, lparam),
            wm::MOUSEMOVE => Event::MouseMove {
                position: lparam_point(lparam),
            },
            wm::CAPTURECHANGED => Event::CaptureLost,

            // Down is positive on the vertical axis.
            wm::MOUSEWHEEL => Event::Scroll(ScrollEvent::smooth(0.0, -wheel_notches(wparam))),
            wm::MOUSEHWHEEL => Event::Scroll(ScrollEvent::smooth(wheel_notches(wparam), 0.0)),

            wm::KEYDOWN | wm::SYSKEYDOWN => Event::Key(KeyEvent {
                code: wparam as u32,
                modifiers: modifiers(),
                state: KeyState::Pressed,
                repeat: is_repeat(lparam),
            }),
            wm::KEYUP | wm::SYSKEYUP => Event::Key(KeyEvent {
                code: wparam as u32,
                modifiers: modifiers(),
                state: KeyState::Released,
                repeat: false,
            }),
            wm::CHAR => self.char_input(wparam as u16),

            _ => Event::Other,
        }
    }

    fn char_input(&mut self, unit: u16) -> Event {
        if (0xD800..0xDC00).contains(&unit) {
            self.high_surrogate = Some(unit);
            return Event::Other;
        }

        let units = match self.high_surrogate.take() {
            Some(high) => vec![high, unit],
            None => vec![unit],
        };
        let text: String = char::decode_utf16(units)
            .filter_map(Result::ok)
            .filter(|c| !c.is_control())
            .collect();

        if text.is_empty() {
            Event::Other
        } else {
            Event::TextCommit(text)
        }
    }
}

fn button(button: MouseButton, pressed: bool, lparam: isize) -> Event {
    let position = lparam_point(lparam);
    if pressed {
        Event::MouseDown { button, position }
    } else {
        Event::MouseUp { button, position }
    }
}
