//! Per-event render context handed to the UI core.

use crate::canvas::{Canvas, Roundness};
use crate::color::Rgba;
use crate::geometry::{Point, Rect, Size};
use crate::texture::Texture;
use crate::window::{NativeWindow, WindowHandle};

/// The (window, optional frame) pair built fresh for every dispatched event.
///
/// The canvas is only present while a paint event is being handled; the
/// drawing helpers are no-ops otherwise. Never store a `RenderContext`
/// across events.
pub struct RenderContext<'a> {
    window: &'a dyn NativeWindow,
    canvas: Option<&'a mut Canvas>,
}

impl<'a> RenderContext<'a> {
    /// Context for a non-paint event.
    pub fn new(window: &'a dyn NativeWindow) -> Self {
        Self {
            window,
            canvas: None,
        }
    }

    /// Context for a paint event.
    pub fn with_canvas(window: &'a dyn NativeWindow, canvas: &'a mut Canvas) -> Self {
        Self {
            window,
            canvas: Some(canvas),
        }
    }

    pub fn handle(&self) -> WindowHandle {
        self.window.handle()
    }

    pub fn client_size(&self) -> Size {
        self.window.client_size()
    }

    pub fn is_painting(&self) -> bool {
        self.canvas.is_some()
    }

    /// The frame being painted, if this is a paint event.
    pub fn canvas(&mut self) -> Option<&mut Canvas> {
        self.canvas.as_deref_mut()
    }

    /// Invalidate the whole window without erasing it.
    pub fn request_repaint(&self) {
        self.window.invalidate();
    }

    pub fn pointer_position(&self) -> Option<Point> {
        self.window.pointer_position()
    }

    /// GDI-style rounded rectangle: edges in pixels, `rx`/`ry` are the
    /// corner ellipse width and height, `color` is a `COLORREF`.
    #[allow(clippy::too_many_arguments)]
    pub fn rounded_rect(
        &mut self,
        color: u32,
        left: i32,
        top: i32,
        right: i32,
        bottom: i32,
        rx: i32,
        ry: i32,
    ) {
        let rect = Rect::from_ltrb(left, top, right, bottom);
        self.draw(|c| {
            c.fill_rounded_rect(rect, rx as f32, ry as f32, Rgba::from_colorref(color))
        });
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        self.draw(|c| c.fill_rect(rect, color));
    }

    /// Rounded rectangle with a corner radius in pixels, drawn with the
    /// game-library segment approximation.
    pub fn draw_rectangle_rounded(&mut self, rect: Rect, radius: f32, color: Rgba) {
        let shape = Roundness::from_radius(rect, radius);
        self.draw(|c| c.fill_rounded_polygon(rect, shape, color));
    }

    pub fn draw_texture(
        &mut self,
        texture: &Texture,
        source: Rect,
        dest: Rect,
        origin: Point,
        rotation: f32,
        tint: Rgba,
    ) {
        self.draw(|c| c.draw_texture(texture, source, dest, origin, rotation, tint));
    }

    fn draw(&mut self, f: impl FnOnce(&mut Canvas)) {
        match self.canvas.as_deref_mut() {
            Some(canvas) => f(canvas),
            None => tracing::trace!(window = %self.window.handle(), "draw outside paint ignored"),
        }
    }
}
