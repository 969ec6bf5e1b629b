// Test doubles shared by the integration tests.
#![allow(dead_code)]

use std::cell::{Cell, RefCell};

use zimgui_core::{
    Canvas, HostError, KeyEvent, MouseButton, NativeWindow, Point, RenderContext, Result,
    ScrollDelta, Size, UiCore, WindowHandle,
};

/// Everything a `MockWindow` was asked to do, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum WindowCall {
    BeginCapture,
    ReleaseCapture,
    Invalidate,
    RequestExit,
    Present(Size),
}

pub struct MockWindow {
    pub handle: WindowHandle,
    pub size: Size,
    pub pointer: Option<Point>,
    pub calls: RefCell<Vec<WindowCall>>,
    pub captured: bool,
    pub exit_requested: bool,
    pub fail_present: bool,
    /// Pixels of the last presented frame (the "visible surface").
    pub surface: Vec<u32>,
    pub invalidations: Cell<usize>,
}

impl MockWindow {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            handle: WindowHandle(0xC0FFEE),
            size: Size::new(width, height),
            pointer: None,
            calls: RefCell::new(Vec::new()),
            captured: false,
            exit_requested: false,
            fail_present: false,
            surface: Vec::new(),
            invalidations: Cell::new(0),
        }
    }

    pub fn calls(&self) -> Vec<WindowCall> {
        self.calls.borrow().clone()
    }

    pub fn presents(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|c| matches!(c, WindowCall::Present(_)))
            .count()
    }
}

impl NativeWindow for MockWindow {
    fn handle(&self) -> WindowHandle {
        self.handle
    }

    fn client_size(&self) -> Size {
        self.size
    }

    fn pointer_position(&self) -> Option<Point> {
        self.pointer
    }

    fn invalidate(&self) {
        self.invalidations.set(self.invalidations.get() + 1);
        self.calls.borrow_mut().push(WindowCall::Invalidate);
    }

    fn begin_capture(&mut self) {
        self.captured = true;
        self.calls.borrow_mut().push(WindowCall::BeginCapture);
    }

    fn release_capture(&mut self) {
        self.captured = false;
        self.calls.borrow_mut().push(WindowCall::ReleaseCapture);
    }

    fn request_exit(&mut self) {
        self.exit_requested = true;
        self.calls.borrow_mut().push(WindowCall::RequestExit);
    }

    fn present(&mut self, frame: &Canvas) -> Result<()> {
        self.calls.borrow_mut().push(WindowCall::Present(frame.size()));
        if self.fail_present {
            return Err(HostError::Surface("device lost".to_string()));
        }
        self.surface = frame.pixels().to_vec();
        Ok(())
    }
}

/// What the core saw, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum CoreCall {
    Resize(Size),
    Paint { size: Size, first_pixel: Option<u32> },
    Click { button: MouseButton, pressed: bool, at: Point },
    Move(Point),
    Scroll(ScrollDelta),
    Key(KeyEvent),
    Text(String),
}

/// A UI core that records every callback and the address it was called on.
#[derive(Default)]
pub struct RecordingCore {
    pub calls: Vec<CoreCall>,
    pub self_addrs: Vec<usize>,
    /// Drawn in every paint, when set.
    pub paint_rect: Option<(zimgui_core::Rect, zimgui_core::Rgba)>,
    pub repaint_on_move: bool,
}

impl RecordingCore {
    fn note(&mut self) {
        self.self_addrs.push(self as *const Self as usize);
    }
}

impl UiCore for RecordingCore {
    fn on_resize(&mut self, _ctx: &mut RenderContext<'_>, size: Size) {
        self.note();
        self.calls.push(CoreCall::Resize(size));
    }

    fn on_paint(&mut self, ctx: &mut RenderContext<'_>) {
        self.note();
        let size = ctx.client_size();
        let first_pixel = ctx.canvas().and_then(|c| c.pixel(0, 0));
        self.calls.push(CoreCall::Paint { size, first_pixel });
        if let Some((rect, color)) = self.paint_rect {
            ctx.fill_rect(rect, color);
        }
    }

    fn on_mouse_click(
        &mut self,
        _ctx: &mut RenderContext<'_>,
        button: MouseButton,
        pressed: bool,
        at: Point,
    ) {
        self.note();
        self.calls.push(CoreCall::Click { button, pressed, at });
    }

    fn on_mouse_move(&mut self, ctx: &mut RenderContext<'_>, position: Point) {
        self.note();
        self.calls.push(CoreCall::Move(position));
        if self.repaint_on_move {
            ctx.request_repaint();
        }
    }

    fn on_scroll(&mut self, _ctx: &mut RenderContext<'_>, delta: ScrollDelta) {
        self.note();
        self.calls.push(CoreCall::Scroll(delta));
    }

    fn on_key(&mut self, _ctx: &mut RenderContext<'_>, key: KeyEvent) {
        self.note();
        self.calls.push(CoreCall::Key(key));
    }

    fn on_text_commit(&mut self, _ctx: &mut RenderContext<'_>, text: &str) {
        self.note();
        self.calls.push(CoreCall::Text(text.to_string()));
    }
}
