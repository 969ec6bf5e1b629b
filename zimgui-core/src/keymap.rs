//! Raw key codes.
//!
//! All backends report keys using Win32 virtual-key numbering so the UI core
//! sees one code space. Letters and digits use their ASCII uppercase value.

pub mod vk {
    pub const BACK: u32 = 0x08;
    pub const TAB: u32 = 0x09;
    pub const RETURN: u32 = 0x0D;
    pub const SHIFT: u32 = 0x10;
    pub const CONTROL: u32 = 0x11;
    pub const MENU: u32 = 0x12;
    pub const PAUSE: u32 = 0x13;
    pub const CAPITAL: u32 = 0x14;
    pub const ESCAPE: u32 = 0x1B;
    pub const SPACE: u32 = 0x20;
    pub const PRIOR: u32 = 0x21;
    pub const NEXT: u32 = 0x22;
    pub const END: u32 = 0x23;
    pub const HOME: u32 = 0x24;
    pub const LEFT: u32 = 0x25;
    pub const UP: u32 = 0x26;
    pub const RIGHT: u32 = 0x27;
    pub const DOWN: u32 = 0x28;
    pub const INSERT: u32 = 0x2D;
    pub const SNAPSHOT: u32 = 0x2C;
    pub const DELETE: u32 = 0x2E;
    pub const KEY_0: u32 = 0x30;
    pub const KEY_A: u32 = 0x41;
    pub const LWIN: u32 = 0x5B;
    pub const RWIN: u32 = 0x5C;
    pub const APPS: u32 = 0x5D;
    pub const NUMPAD0: u32 = 0x60;
    pub const MULTIPLY: u32 = 0x6A;
    pub const ADD: u32 = 0x6B;
    pub const SUBTRACT: u32 = 0x6D;
    pub const DECIMAL: u32 = 0x6E;
    pub const DIVIDE: u32 = 0x6F;
    pub const F1: u32 = 0x70;
    pub const NUMLOCK: u32 = 0x90;
    pub const SCROLL: u32 = 0x91;
    pub const LSHIFT: u32 = 0xA0;
    pub const RSHIFT: u32 = 0xA1;
    pub const LCONTROL: u32 = 0xA2;
    pub const RCONTROL: u32 = 0xA3;
    pub const LMENU: u32 = 0xA4;
    pub const RMENU: u32 = 0xA5;
    pub const OEM_1: u32 = 0xBA;
    pub const OEM_PLUS: u32 = 0xBB;
    pub const OEM_COMMA: u32 = 0xBC;
    pub const OEM_MINUS: u32 = 0xBD;
    pub const OEM_PERIOD: u32 = 0xBE;
    pub const OEM_2: u32 = 0xBF;
    pub const OEM_3: u32 = 0xC0;
    pub const OEM_4: u32 = 0xDB;
    pub const OEM_5: u32 = 0xDC;
    pub const OEM_6: u32 = 0xDD;
    pub const OEM_7: u32 = 0xDE;
}

/// Virtual-key code for an ASCII letter (either case). `None` otherwise.
pub fn letter(c: char) -> Option<u32> {
    c.is_ascii_alphabetic()
        .then(|| c.to_ascii_uppercase() as u32)
}

/// Virtual-key code for a top-row digit.
pub fn digit(d: u8) -> Option<u32> {
    (d <= 9).then(|| vk::KEY_0 + d as u32)
}

/// Virtual-key code for function key `F<n>` (1..=24).
pub fn function(n: u8) -> Option<u32> {
    (1..=24).contains(&n).then(|| vk::F1 + (n as u32 - 1))
}

pub fn is_modifier(code: u32) -> bool {
    matches!(
        code,
        vk::SHIFT
            | vk::CONTROL
            | vk::MENU
            | vk::LSHIFT
            | vk::RSHIFT
            | vk::LCONTROL
            | vk::RCONTROL
            | vk::LMENU
            | vk::RMENU
            | vk::LWIN
            | vk::RWIN
    )
}

/// Human-readable name for logging.
pub fn name(code: u32) -> String {
    match code {
        vk::BACK => "Backspace".into(),
        vk::TAB => "Tab".into(),
        vk::RETURN => "Enter".into(),
        vk::ESCAPE => "Escape".into(),
        vk::SPACE => "Space".into(),
        vk::LEFT => "Left".into(),
        vk::UP => "Up".into(),
        vk::RIGHT => "Right".into(),
        vk::DOWN => "Down".into(),
        vk::DELETE => "Delete".into(),
        0x30..=0x39 | 0x41..=0x5A => char::from(code as u8).to_string(),
        c if (vk::F1..vk::F1 + 24).contains(&c) => format!("F{}", c - vk::F1 + 1),
        c => format!("VK(0x{c:02X})"),
    }
}
