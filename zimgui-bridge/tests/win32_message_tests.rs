// zimgui-bridge/tests/win32_message_tests.rs
//
// Integration tests for the Win32 message decoding layer (builds on every
// platform; no window is created):
//   payloads      - WM_SIZE, signed mouse coordinates, wheel notches
//   buttons       - left/right/middle/X-button mapping
//   keys          - virtual-key code, repeat bit, modifiers
//   WM_CHAR       - surrogate pairing, control characters
//   results       - window-procedure return values, client extents
//   end to end    - decoded messages driven through a Dispatcher

use zimgui_bridge::platform::messages::{
    MessageDecoder, client_extent, lparam_point, message_result, wheel_notches, wm,
};
use zimgui_core::{
    Canvas, Dispatcher, Disposition, Event, KeyState, Modifiers, MouseButton, NativeWindow, Point,
    RenderContext, Rgba, ScrollDelta, ScrollEvent, Size, UiCore, WindowHandle,
};

/// `MAKELPARAM(lo, hi)`, zero-extended as a 64-bit window procedure sees it.
fn lparam(lo: i16, hi: i16) -> isize {
    ((u32::from(hi as u16) << 16) | u32::from(lo as u16)) as isize
}

/// Wheel message `wParam` with `delta` in the high word.
fn wheel(delta: i16) -> usize {
    usize::from(delta as u16) << 16
}

/// X-button message `wParam` naming `XBUTTON1` (1) or `XBUTTON2` (2).
fn xbutton(which: u16) -> usize {
    usize::from(which) << 16
}

fn no_modifiers() -> Modifiers {
    Modifiers::NONE
}

fn decode(msg: u32, wparam: usize, lparam: isize) -> Event {
    MessageDecoder::new().decode(msg, wparam, lparam, no_modifiers)
}

// ════════════════════════════════════════════════════════════════════
// Payloads
// ════════════════════════════════════════════════════════════════════

#[test]
fn test_size_unpacks_client_dimensions() {
    assert_eq!(
        decode(wm::SIZE, 0, lparam(800, 600)),
        Event::Resize(Size::new(800, 600))
    );
}

#[test]
fn test_size_words_are_unsigned() {
    assert_eq!(
        decode(wm::SIZE, 0, lparam(-1, -1)),
        Event::Resize(Size::new(0xFFFF, 0xFFFF))
    );
}

#[test]
fn test_mouse_coordinates_are_signed() {
    assert_eq!(
        decode(wm::MOUSEMOVE, 0, lparam(-5, -12)),
        Event::MouseMove {
            position: Point::new(-5.0, -12.0)
        }
    );
    // Same words, sign-extended the way a 32-bit LPARAM arrives.
    let sign_extended = lparam(-5, -12) as i32 as isize;
    assert_eq!(lparam_point(sign_extended), Point::new(-5.0, -12.0));
}

#[test]
fn test_wheel_away_from_user_scrolls_up() {
    assert_eq!(
        decode(wm::MOUSEWHEEL, wheel(120), 0),
        Event::Scroll(ScrollEvent::smooth(0.0, -1.0))
    );
    assert_eq!(
        decode(wm::MOUSEWHEEL, wheel(-120), 0),
        Event::Scroll(ScrollEvent::smooth(0.0, 1.0))
    );
}

#[test]
fn test_wheel_scales_by_wheel_delta() {
    assert_eq!(wheel_notches(wheel(240)), 2.0);
    assert_eq!(wheel_notches(wheel(-60)), -0.5);

    let Event::Scroll(ev) = decode(wm::MOUSEWHEEL, wheel(-360), 0) else {
        panic!("wheel must decode to a scroll");
    };
    assert_eq!(ev.delta(), Some(ScrollDelta { dx: 0.0, dy: 3.0 }));
}

#[test]
fn test_horizontal_wheel_right_is_positive() {
    assert_eq!(
        decode(wm::MOUSEHWHEEL, wheel(120), 0),
        Event::Scroll(ScrollEvent::smooth(1.0, 0.0))
    );
    assert_eq!(
        decode(wm::MOUSEHWHEEL, wheel(-120), 0),
        Event::Scroll(ScrollEvent::smooth(-1.0, 0.0))
    );
}

#[test]
fn test_lifecycle_messages() {
    assert_eq!(decode(wm::CREATE, 0, 0), Event::Created);
    assert_eq!(decode(wm::DESTROY, 0, 0), Event::Destroy);
    assert_eq!(decode(wm::PAINT, 0, 0), Event::Paint);
    assert_eq!(decode(wm::ERASEBKGND, 0, 0), Event::EraseBackground);
    assert_eq!(decode(wm::CAPTURECHANGED, 0, 0), Event::CaptureLost);
    // WM_USER
    assert_eq!(decode(0x0400, 0, 0), Event::Other);
}

// ════════════════════════════════════════════════════════════════════
// Buttons
// ════════════════════════════════════════════════════════════════════

#[test]
fn test_standard_buttons() {
    let at = lparam(7, 9);
    let pos = Point::new(7.0, 9.0);
    let cases = [
        (wm::LBUTTONDOWN, MouseButton::Primary, true),
        (wm::LBUTTONUP, MouseButton::Primary, false),
        (wm::RBUTTONDOWN, MouseButton::Secondary, true),
        (wm::RBUTTONUP, MouseButton::Secondary, false),
        (wm::MBUTTONDOWN, MouseButton::Middle, true),
        (wm::MBUTTONUP, MouseButton::Middle, false),
    ];
    for (msg, button, pressed) in cases {
        let expected = if pressed {
            Event::MouseDown {
                button,
                position: pos,
            }
        } else {
            Event::MouseUp {
                button,
                position: pos,
            }
        };
        assert_eq!(decode(msg, 0, at), expected, "message {msg:#06x}");
    }
}

#[test]
fn test_xbuttons_map_to_back_and_forward() {
    assert_eq!(
        decode(wm::XBUTTONDOWN, xbutton(1), lparam(1, 2)),
        Event::MouseDown {
            button: MouseButton::BACK,
            position: Point::new(1.0, 2.0)
        }
    );
    assert_eq!(
        decode(wm::XBUTTONUP, xbutton(2), lparam(1, 2)),
        Event::MouseUp {
            button: MouseButton::FORWARD,
            position: Point::new(1.0, 2.0)
        }
    );
}

// ════════════════════════════════════════════════════════════════════
// Keys
// ════════════════════════════════════════════════════════════════════

const REPEAT_BIT: isize = 1 << 30;

#[test]
fn test_keydown_carries_code_and_repeat_bit() {
    let Event::Key(first) = decode(wm::KEYDOWN, 0x41, 1) else {
        panic!("expected key event");
    };
    assert_eq!(first.code, 0x41);
    assert_eq!(first.state, KeyState::Pressed);
    assert!(!first.repeat);

    let Event::Key(held) = decode(wm::KEYDOWN, 0x41, REPEAT_BIT | 1) else {
        panic!("expected key event");
    };
    assert!(held.repeat);
}

#[test]
fn test_keyup_is_never_a_repeat() {
    // KEYUP always has bit 30 set.
    let Event::Key(up) = decode(wm::KEYUP, 0x41, REPEAT_BIT | 1) else {
        panic!("expected key event");
    };
    assert_eq!(up.state, KeyState::Released);
    assert!(!up.repeat);
}

#[test]
fn test_sys_keys_decode_as_keys() {
    let Event::Key(down) = decode(wm::SYSKEYDOWN, 0x73, 1 << 29) else {
        panic!("expected key event");
    };
    assert_eq!(down.code, 0x73);
    assert!(down.is_pressed());
    assert!(matches!(decode(wm::SYSKEYUP, 0x73, 0), Event::Key(k) if !k.is_pressed()));
}

#[test]
fn test_modifiers_read_only_for_key_messages() {
    let mut decoder = MessageDecoder::new();
    let Event::Key(key) = decoder.decode(wm::KEYDOWN, 0x53, 1, || {
        Modifiers::CONTROL | Modifiers::SHIFT
    }) else {
        panic!("expected key event");
    };
    assert_eq!(key.modifiers.bits(), 3);

    decoder.decode(wm::MOUSEMOVE, 0, 0, || -> Modifiers {
        unreachable!("mouse messages do not query the keyboard")
    });
}

// ════════════════════════════════════════════════════════════════════
// WM_CHAR
// ════════════════════════════════════════════════════════════════════

#[test]
fn test_char_commits_text() {
    assert_eq!(
        decode(wm::CHAR, 'é' as usize, 1),
        Event::TextCommit("é".to_string())
    );
}

#[test]
fn test_surrogate_pair_across_two_chars() {
    let mut decoder = MessageDecoder::new();
    // U+1F600
    assert_eq!(decoder.decode(wm::CHAR, 0xD83D, 1, no_modifiers), Event::Other);
    assert_eq!(
        decoder.decode(wm::CHAR, 0xDE00, 1, no_modifiers),
        Event::TextCommit("😀".to_string())
    );
    assert_eq!(
        decoder.decode(wm::CHAR, 'x' as usize, 1, no_modifiers),
        Event::TextCommit("x".to_string())
    );
}

#[test]
fn test_unpaired_surrogates_are_dropped() {
    let mut decoder = MessageDecoder::new();
    assert_eq!(decoder.decode(wm::CHAR, 0xDE00, 1, no_modifiers), Event::Other);

    decoder.decode(wm::CHAR, 0xD83D, 1, no_modifiers);
    assert_eq!(
        decoder.decode(wm::CHAR, 'b' as usize, 1, no_modifiers),
        Event::TextCommit("b".to_string())
    );
}

#[test]
fn test_control_chars_are_not_text() {
    for unit in [0x08usize, 0x0D, 0x1B, 0x7F] {
        assert_eq!(decode(wm::CHAR, unit, 1), Event::Other, "{unit:#04x}");
    }
}

// ════════════════════════════════════════════════════════════════════
// Window procedure results
// ════════════════════════════════════════════════════════════════════

#[test]
fn test_xbutton_messages_return_true() {
    assert_eq!(message_result(wm::XBUTTONDOWN, Disposition::Handled), Some(1));
    assert_eq!(message_result(wm::XBUTTONUP, Disposition::Handled), Some(1));
    assert_eq!(message_result(wm::LBUTTONDOWN, Disposition::Handled), Some(0));
}

#[test]
fn test_dispositions_map_to_native_results() {
    assert_eq!(message_result(wm::ERASEBKGND, Disposition::BackgroundErased), Some(1));
    assert_eq!(message_result(wm::SIZE, Disposition::Default), None);
    assert_eq!(message_result(wm::XBUTTONUP, Disposition::Default), None);
    assert_eq!(message_result(wm::CHAR, Disposition::Handled), Some(0));
}

#[test]
fn test_sys_keys_always_reach_default_handler() {
    assert_eq!(message_result(wm::SYSKEYDOWN, Disposition::Handled), None);
    assert_eq!(message_result(wm::SYSKEYUP, Disposition::Handled), None);
}

#[test]
fn test_client_extent_rejects_oversized_requests() {
    assert_eq!(client_extent(800, 600), Some((800, 600)));
    assert_eq!(client_extent(i32::MAX as u32, 1), Some((i32::MAX, 1)));
    assert_eq!(client_extent(u32::MAX, 600), None);
    assert_eq!(client_extent(800, 1 << 31), None);
}

// ════════════════════════════════════════════════════════════════════
// End to end: decoded messages through the dispatcher
// ════════════════════════════════════════════════════════════════════

#[derive(Default)]
struct Window {
    captured: bool,
    capture_changes: usize,
}

impl NativeWindow for Window {
    fn handle(&self) -> WindowHandle {
        WindowHandle(2)
    }

    fn client_size(&self) -> Size {
        Size::new(800, 600)
    }

    fn pointer_position(&self) -> Option<Point> {
        None
    }

    fn invalidate(&self) {}

    fn begin_capture(&mut self) {
        self.captured = true;
        self.capture_changes += 1;
    }

    fn release_capture(&mut self) {
        self.captured = false;
        self.capture_changes += 1;
    }

    fn request_exit(&mut self) {}

    fn present(&mut self, _frame: &Canvas) -> zimgui_core::Result<()> {
        Ok(())
    }
}

#[derive(Default)]
struct Recorder {
    sizes: Vec<Size>,
    clicks: Vec<(MouseButton, bool, Point)>,
}

impl UiCore for Recorder {
    fn on_paint(&mut self, _ctx: &mut RenderContext<'_>) {}

    fn on_resize(&mut self, _ctx: &mut RenderContext<'_>, size: Size) {
        self.sizes.push(size);
    }

    fn on_mouse_click(
        &mut self,
        _ctx: &mut RenderContext<'_>,
        button: MouseButton,
        pressed: bool,
        position: Point,
    ) {
        self.clicks.push((button, pressed, position));
    }
}

#[test]
fn test_size_message_reaches_on_resize() {
    let mut decoder = MessageDecoder::new();
    let mut window = Window::default();
    let mut dispatcher = Dispatcher::new(Recorder::default(), Rgba::WHITE);

    let event = decoder.decode(wm::SIZE, 0, lparam(800, 600), no_modifiers);
    let disposition = dispatcher.dispatch(&mut window, event);

    assert_eq!(dispatcher.core().sizes, vec![Size::new(800, 600)]);
    assert_eq!(message_result(wm::SIZE, disposition), None);
}

#[test]
fn test_captured_drag_left_of_window() {
    let mut decoder = MessageDecoder::new();
    let mut window = Window::default();
    let mut dispatcher = Dispatcher::new(Recorder::default(), Rgba::WHITE);

    let script = [
        (wm::XBUTTONDOWN, xbutton(1), lparam(20, 20)),
        (wm::MOUSEMOVE, 0, lparam(-40, 20)),
        (wm::XBUTTONUP, xbutton(1), lparam(-40, 20)),
    ];
    let mut results = Vec::new();
    for (msg, wparam, lparam) in script {
        let event = decoder.decode(msg, wparam, lparam, no_modifiers);
        if msg == wm::XBUTTONUP {
            assert!(window.captured, "capture held until release");
        }
        results.push(message_result(msg, dispatcher.dispatch(&mut window, event)));
    }

    assert_eq!(results, vec![Some(1), Some(0), Some(1)]);
    assert_eq!(
        dispatcher.core().clicks,
        vec![
            (MouseButton::BACK, true, Point::new(20.0, 20.0)),
            (MouseButton::BACK, false, Point::new(-40.0, 20.0)),
        ]
    );
    assert!(!window.captured);
    assert_eq!(window.capture_changes, 2);
}
