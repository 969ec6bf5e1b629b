use crate::context::RenderContext;
use crate::event::{KeyEvent, MouseButton, ScrollDelta};
use crate::geometry::{Point, Size};

/// The callback surface of the UI core.
///
/// The implementor is the per-window application state: it is supplied
/// when the window is created and receives `&mut self` on every event for
/// the lifetime of that window. Only `on_paint` is required.
pub trait UiCore {
    fn on_resize(&mut self, _ctx: &mut RenderContext<'_>, _size: Size) {}

    /// Draw one frame into `ctx.canvas()`, which is already cleared.
    fn on_paint(&mut self, ctx: &mut RenderContext<'_>);

    fn on_mouse_click(
        &mut self,
        _ctx: &mut RenderContext<'_>,
        _button: MouseButton,
        _pressed: bool,
        _position: Point,
    ) {
    }

    fn on_mouse_move(&mut self, _ctx: &mut RenderContext<'_>, _position: Point) {}

    fn on_scroll(&mut self, _ctx: &mut RenderContext<'_>, _delta: ScrollDelta) {}

    fn on_key(&mut self, _ctx: &mut RenderContext<'_>, _key: KeyEvent) {}

    /// Text committed by an input method (or typed characters).
    fn on_text_commit(&mut self, _ctx: &mut RenderContext<'_>, _text: &str) {}
}

impl<T: UiCore + ?Sized> UiCore for Box<T> {
    fn on_resize(&mut self, ctx: &mut RenderContext<'_>, size: Size) {
        (**self).on_resize(ctx, size)
    }

    fn on_paint(&mut self, ctx: &mut RenderContext<'_>) {
        (**self).on_paint(ctx)
    }

    fn on_mouse_click(
        &mut self,
        ctx: &mut RenderContext<'_>,
        button: MouseButton,
        pressed: bool,
        position: Point,
    ) {
        (**self).on_mouse_click(ctx, button, pressed, position)
    }

    fn on_mouse_move(&mut self, ctx: &mut RenderContext<'_>, position: Point) {
        (**self).on_mouse_move(ctx, position)
    }

    fn on_scroll(&mut self, ctx: &mut RenderContext<'_>, delta: ScrollDelta) {
        (**self).on_scroll(ctx, delta)
    }

    fn on_key(&mut self, ctx: &mut RenderContext<'_>, key: KeyEvent) {
        (**self).on_key(ctx, key)
    }

    fn on_text_commit(&mut self, ctx: &mut RenderContext<'_>, text: &str) {
        (**self).on_text_commit(ctx, text)
    }
}
