// zimgui-core/src/dispatch.rs
//! The window-procedure state machine.
//!
//! Each backend decodes one native message into an [`Event`] and calls
//! [`Dispatcher::dispatch`]. The dispatcher runs to completion before the
//! next message is fetched; nothing here is shared across threads.

use crate::canvas::Canvas;
use crate::capture::{CaptureChange, CaptureState};
use crate::color::Rgba;
use crate::context::RenderContext;
use crate::event::{Event, MouseButton};
use crate::geometry::Point;
use crate::handler::UiCore;
use crate::window::NativeWindow;

/// How the backend should answer the native message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Fully handled; return `0` where the platform expects a result.
    Handled,
    /// Background erase suppressed; return non-zero (`TRUE`).
    BackgroundErased,
    /// Hand the message to the OS default handler.
    Default,
}

/// Owns the UI core (the per-window application state) for one window.
pub struct Dispatcher<C> {
    core: C,
    capture: CaptureState,
    background: Rgba,
    frames: u64,
}

impl<C: UiCore> Dispatcher<C> {
    pub fn new(core: C, background: Rgba) -> Self {
        Self {
            core,
            capture: CaptureState::new(),
            background,
            frames: 0,
        }
    }

    pub fn core(&self) -> &C {
        &self.core
    }

    pub fn core_mut(&mut self) -> &mut C {
        &mut self.core
    }

    pub fn into_core(self) -> C {
        self.core
    }

    pub fn capture(&self) -> CaptureState {
        self.capture
    }

    pub fn background(&self) -> Rgba {
        self.background
    }

    /// Frames presented so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn dispatch(&mut self, window: &mut dyn NativeWindow, event: Event) -> Disposition {
        match event {
            Event::Created => {
                tracing::debug!(window = %window.handle(), "window created");
                Disposition::Default
            }

            Event::Destroy => {
                tracing::info!(window = %window.handle(), "window destroyed, stopping pump");
                window.request_exit();
                Disposition::Handled
            }

            // Every paint clears its own off-screen frame.
            Event::EraseBackground => Disposition::BackgroundErased,

            Event::MouseDown { button, position } => {
                self.mouse_button(window, button, true, position);
                Disposition::Handled
            }

            Event::MouseUp { button, position } => {
                self.mouse_button(window, button, false, position);
                Disposition::Handled
            }

            Event::MouseMove { position } => {
                let mut ctx = RenderContext::new(&*window);
                self.core.on_mouse_move(&mut ctx, position);
                Disposition::Handled
            }

            Event::CaptureLost => {
                if self.capture.is_active() {
                    tracing::debug!(window = %window.handle(), "capture revoked by OS");
                }
                self.capture.reset();
                Disposition::Default
            }

            Event::Paint => {
                self.paint(window);
                Disposition::Handled
            }

            Event::Resize(size) => {
                tracing::trace!(window = %window.handle(), ?size, "resize");
                let mut ctx = RenderContext::new(&*window);
                self.core.on_resize(&mut ctx, size);
                Disposition::Default
            }

            Event::Scroll(scroll) => {
                match scroll.delta() {
                    Some(delta) => {
                        let mut ctx = RenderContext::new(&*window);
                        self.core.on_scroll(&mut ctx, delta);
                    }
                    None => {
                        tracing::debug!(direction = ?scroll.direction, "unrecognized scroll subtype ignored");
                    }
                }
                Disposition::Handled
            }

            Event::Key(key) => {
                let mut ctx = RenderContext::new(&*window);
                self.core.on_key(&mut ctx, key);
                Disposition::Handled
            }

            Event::TextCommit(text) => {
                if !text.is_empty() {
                    let mut ctx = RenderContext::new(&*window);
                    self.core.on_text_commit(&mut ctx, &text);
                }
                Disposition::Handled
            }

            Event::Other => Disposition::Default,
        }
    }

    fn mouse_button(
        &mut self,
        window: &mut dyn NativeWindow,
        button: MouseButton,
        pressed: bool,
        position: Point,
    ) {
        if pressed {
            // Capture is already active when the core sees the press.
            if self.capture.press(button) == CaptureChange::Begin {
                window.begin_capture();
            }
        } else if self.capture.release(button) == CaptureChange::Release {
            window.release_capture();
        }

        let mut ctx = RenderContext::new(&*window);
        self.core.on_mouse_click(&mut ctx, button, pressed, position);
    }

    /// Allocate a client-sized frame, let the core draw, blit once, drop.
    fn paint(&mut self, window: &mut dyn NativeWindow) {
        let size = window.client_size();
        let mut canvas = Canvas::new(size, self.background);

        {
            let mut ctx = RenderContext::with_canvas(&*window, &mut canvas);
            self.core.on_paint(&mut ctx);
        }

        if size.is_empty() {
            tracing::trace!(window = %window.handle(), "minimized, nothing to present");
            return;
        }

        match window.present(&canvas) {
            Ok(()) => self.frames += 1,
            Err(e) => tracing::warn!(window = %window.handle(), "present failed: {e}"),
        }
    }
}
