//! winit physical keys → Win32 virtual-key codes.
//!
//! The UI core sees one code space on every backend. Left/right variants of
//! Shift, Control and Alt collapse to the generic code, the way `WM_KEYDOWN`
//! reports them; the Windows keys keep their sides.

use winit::keyboard::{KeyCode, ModifiersState, PhysicalKey};

use zimgui_core::Modifiers;
use zimgui_core::keymap::vk;

/// Virtual-key code for a physical key, or `0` when there is no mapping.
pub fn virtual_key(key: PhysicalKey) -> u32 {
    match key {
        PhysicalKey::Code(code) => virtual_key_code(code).unwrap_or(0),
        PhysicalKey::Unidentified(_) => 0,
    }
}

pub fn virtual_key_code(code: KeyCode) -> Option<u32> {
    use KeyCode::*;

    let vk = match code {
        KeyA => vk::KEY_A,
        KeyB => vk::KEY_A + 1,
        KeyC => vk::KEY_A + 2,
        KeyD => vk::KEY_A + 3,
        KeyE => vk::KEY_A + 4,
        KeyF => vk::KEY_A + 5,
        KeyG => vk::KEY_A + 6,
        KeyH => vk::KEY_A + 7,
        KeyI => vk::KEY_A + 8,
        KeyJ => vk::KEY_A + 9,
        KeyK => vk::KEY_A + 10,
        KeyL => vk::KEY_A + 11,
        KeyM => vk::KEY_A + 12,
        KeyN => vk::KEY_A + 13,
        KeyO => vk::KEY_A + 14,
        KeyP => vk::KEY_A + 15,
        KeyQ => vk::KEY_A + 16,
        KeyR => vk::KEY_A + 17,
        KeyS => vk::KEY_A + 18,
        KeyT => vk::KEY_A + 19,
        KeyU => vk::KEY_A + 20,
        KeyV => vk::KEY_A + 21,
        KeyW => vk::KEY_A + 22,
        KeyX => vk::KEY_A + 23,
        KeyY => vk::KEY_A + 24,
        KeyZ => vk::KEY_A + 25,

        Digit0 => vk::KEY_0,
        Digit1 => vk::KEY_0 + 1,
        Digit2 => vk::KEY_0 + 2,
        Digit3 => vk::KEY_0 + 3,
        Digit4 => vk::KEY_0 + 4,
        Digit5 => vk::KEY_0 + 5,
        Digit6 => vk::KEY_0 + 6,
        Digit7 => vk::KEY_0 + 7,
        Digit8 => vk::KEY_0 + 8,
        Digit9 => vk::KEY_0 + 9,

        Numpad0 => vk::NUMPAD0,
        Numpad1 => vk::NUMPAD0 + 1,
        Numpad2 => vk::NUMPAD0 + 2,
        Numpad3 => vk::NUMPAD0 + 3,
        Numpad4 => vk::NUMPAD0 + 4,
        Numpad5 => vk::NUMPAD0 + 5,
        Numpad6 => vk::NUMPAD0 + 6,
        Numpad7 => vk::NUMPAD0 + 7,
        Numpad8 => vk::NUMPAD0 + 8,
        Numpad9 => vk::NUMPAD0 + 9,
        NumpadMultiply => vk::MULTIPLY,
        NumpadAdd => vk::ADD,
        NumpadSubtract => vk::SUBTRACT,
        NumpadDecimal => vk::DECIMAL,
        NumpadDivide => vk::DIVIDE,
        NumpadEnter => vk::RETURN,
        NumLock => vk::NUMLOCK,

        F1 => vk::F1,
        F2 => vk::F1 + 1,
        F3 => vk::F1 + 2,
        F4 => vk::F1 + 3,
        F5 => vk::F1 + 4,
        F6 => vk::F1 + 5,
        F7 => vk::F1 + 6,
        F8 => vk::F1 + 7,
        F9 => vk::F1 + 8,
        F10 => vk::F1 + 9,
        F11 => vk::F1 + 10,
        F12 => vk::F1 + 11,
        F13 => vk::F1 + 12,
        F14 => vk::F1 + 13,
        F15 => vk::F1 + 14,
        F16 => vk::F1 + 15,
        F17 => vk::F1 + 16,
        F18 => vk::F1 + 17,
        F19 => vk::F1 + 18,
        F20 => vk::F1 + 19,
        F21 => vk::F1 + 20,
        F22 => vk::F1 + 21,
        F23 => vk::F1 + 22,
        F24 => vk::F1 + 23,

        Backspace => vk::BACK,
        Tab => vk::TAB,
        Enter => vk::RETURN,
        Escape => vk::ESCAPE,
        Space => vk::SPACE,
        Pause => vk::PAUSE,
        CapsLock => vk::CAPITAL,
        PageUp => vk::PRIOR,
        PageDown => vk::NEXT,
        End => vk::END,
        Home => vk::HOME,
        ArrowLeft => vk::LEFT,
        ArrowUp => vk::UP,
        ArrowRight => vk::RIGHT,
        ArrowDown => vk::DOWN,
        PrintScreen => vk::SNAPSHOT,
        Insert => vk::INSERT,
        Delete => vk::DELETE,
        ScrollLock => vk::SCROLL,
        ContextMenu => vk::APPS,

        ShiftLeft | ShiftRight => vk::SHIFT,
        ControlLeft | ControlRight => vk::CONTROL,
        AltLeft | AltRight => vk::MENU,
        SuperLeft => vk::LWIN,
        SuperRight => vk::RWIN,

        Semicolon => vk::OEM_1,
        Equal => vk::OEM_PLUS,
        Comma => vk::OEM_COMMA,
        Minus => vk::OEM_MINUS,
        Period => vk::OEM_PERIOD,
        Slash => vk::OEM_2,
        Backquote => vk::OEM_3,
        BracketLeft => vk::OEM_4,
        Backslash => vk::OEM_5,
        BracketRight => vk::OEM_6,
        Quote => vk::OEM_7,

        _ => return None,
    };
    Some(vk)
}

pub fn modifiers(state: ModifiersState) -> Modifiers {
    let mut m = Modifiers::NONE;
    if state.shift_key() {
        m |= Modifiers::SHIFT;
    }
    if state.control_key() {
        m |= Modifiers::CONTROL;
    }
    if state.alt_key() {
        m |= Modifiers::ALT;
    }
    if state.super_key() {
        m |= Modifiers::SUPER;
    }
    m
}
