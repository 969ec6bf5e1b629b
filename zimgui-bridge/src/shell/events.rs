//! Winit event translation.
//!
//! Turns `WindowEvent`s into the neutral [`Event`] vocabulary:
//!   RedrawRequested            → Paint
//!   CloseRequested / Destroyed → Destroy
//!   Resized                    → Resize
//!   MouseInput / CursorMoved   → MouseDown, MouseUp, MouseMove
//!   MouseWheel                 → Scroll (smooth, down positive)
//!   KeyboardInput              → Key, then TextCommit for typed text
//!   Ime::Commit                → TextCommit
//!   Focused(false)             → CaptureLost

use winit::event::{ElementState, Ime, MouseScrollDelta, WindowEvent};
use winit::keyboard::PhysicalKey;

use zimgui_core::{Event, KeyEvent, KeyState, Modifiers, MouseButton, Point, ScrollEvent, Size};

use super::keys;

/// Per-window input state carried between events.
#[derive(Debug, Clone)]
pub struct InputTracker {
    pointer: Option<Point>,
    modifiers: Modifiers,
    composing: bool,
    pixels_per_line: f64,
}

impl InputTracker {
    pub fn new(pixels_per_line: f64) -> Self {
        Self {
            pointer: None,
            modifiers: Modifiers::NONE,
            composing: false,
            pixels_per_line,
        }
    }

    /// Last cursor position seen, in physical client pixels.
    pub fn pointer(&self) -> Option<Point> {
        self.pointer
    }

    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    pub fn set_modifiers(&mut self, modifiers: Modifiers) {
        self.modifiers = modifiers;
    }

    pub fn is_composing(&self) -> bool {
        self.composing
    }

    /// Translate one winit event. Most produce zero or one `Event`; a key
    /// press that types text produces two.
    pub fn translate(&mut self, event: WindowEvent) -> Vec<Event> {
        match event {
            WindowEvent::RedrawRequested => vec![Event::Paint],

            WindowEvent::CloseRequested | WindowEvent::Destroyed => vec![Event::Destroy],

            WindowEvent::Resized(size) => vec![Event::Resize(Size::new(size.width, size.height))],

            WindowEvent::Focused(false) => vec![Event::CaptureLost],

            WindowEvent::CursorMoved { position, .. } => {
                let position = Point::new(position.x as f32, position.y as f32);
                self.pointer = Some(position);
                vec![Event::MouseMove { position }]
            }

            WindowEvent::MouseInput { state, button, .. } => {
                vec![self.mouse_input(state, mouse_button(button))]
            }

            WindowEvent::MouseWheel { delta, .. } => {
                vec![Event::Scroll(scroll_event(delta, self.pixels_per_line))]
            }

            WindowEvent::ModifiersChanged(mods) => {
                self.modifiers = keys::modifiers(mods.state());
                Vec::new()
            }

            WindowEvent::KeyboardInput {
                event,
                is_synthetic,
                ..
            } => {
                if is_synthetic {
                    return Vec::new();
                }
                let key = self.key(event.physical_key, event.state, event.repeat);
                let mut out = vec![Event::Key(key)];
                if event.state == ElementState::Pressed && !self.composing {
                    if let Some(text) = event.text.as_deref().and_then(typed_text) {
                        out.push(Event::TextCommit(text));
                    }
                }
                out
            }

            WindowEvent::Ime(ime) => self.ime(ime).into_iter().collect(),

            _ => Vec::new(),
        }
    }

    /// Press or release at the last known pointer position.
    pub fn mouse_input(&self, state: ElementState, button: MouseButton) -> Event {
        let position = self.pointer.unwrap_or(Point::ZERO);
        match state {
            ElementState::Pressed => Event::MouseDown { button, position },
            ElementState::Released => Event::MouseUp { button, position },
        }
    }

    pub fn key(&self, key: PhysicalKey, state: ElementState, repeat: bool) -> KeyEvent {
        KeyEvent {
            code: keys::virtual_key(key),
            modifiers: self.modifiers,
            state: match state {
                ElementState::Pressed => KeyState::Pressed,
                ElementState::Released => KeyState::Released,
            },
            repeat,
        }
    }

    pub fn ime(&mut self, ime: Ime) -> Option<Event> {
        match ime {
            Ime::Preedit(text, _) => {
                self.composing = !text.is_empty();
                None
            }
            Ime::Commit(text) => {
                self.composing = false;
                Some(Event::TextCommit(text))
            }
            Ime::Enabled => None,
            Ime::Disabled => {
                self.composing = false;
                None
            }
        }
    }
}

pub fn mouse_button(button: winit::event::MouseButton) -> MouseButton {
    use winit::event::MouseButton as W;
    match button {
        W::Left => MouseButton::Primary,
        W::Right => MouseButton::Secondary,
        W::Middle => MouseButton::Middle,
        W::Back => MouseButton::BACK,
        W::Forward => MouseButton::FORWARD,
        W::Other(n) => MouseButton::Other(n),
    }
}

/// Wheel motion as a smooth delta in lines, positive down and right.
///
/// winit reports positive `y` for "content moves down" (wheel up), so both
/// axes are negated. Pixel deltas are converted with `pixels_per_line`.
pub fn scroll_event(delta: MouseScrollDelta, pixels_per_line: f64) -> ScrollEvent {
    match delta {
        MouseScrollDelta::LineDelta(x, y) => ScrollEvent::smooth(-x as f64, -y as f64),
        MouseScrollDelta::PixelDelta(pos) => {
            ScrollEvent::smooth(-pos.x / pixels_per_line, -pos.y / pixels_per_line)
        }
    }
}

/// Text a key press typed, if any. Control characters (Enter, Backspace,
/// Tab, Escape, Delete) arrive as key events only.
pub fn typed_text(text: &str) -> Option<String> {
    let printable: String = text.chars().filter(|c| !c.is_control()).collect();
    (!printable.is_empty()).then_some(printable)
}
