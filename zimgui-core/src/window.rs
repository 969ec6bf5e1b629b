//! The narrow surface the dispatcher needs from a native window.

use crate::canvas::Canvas;
use crate::error::Result;
use crate::geometry::{Point, Size};

/// Opaque OS identifier of the top-level window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowHandle(pub u64);

impl std::fmt::Display for WindowHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "window#{:x}", self.0)
    }
}

/// Operations a backend exposes for one native window.
///
/// Read-only queries and repaint requests take `&self` so a
/// [`RenderContext`](crate::context::RenderContext) can hold a shared
/// reference while the UI core runs. State-changing calls take `&mut self`
/// and are only issued by the dispatcher between callbacks.
pub trait NativeWindow {
    fn handle(&self) -> WindowHandle;

    /// Current client-area size in pixels.
    fn client_size(&self) -> Size;

    /// Last known pointer position in client coordinates.
    fn pointer_position(&self) -> Option<Point>;

    /// Mark the whole window dirty without erasing its background.
    fn invalidate(&self);

    /// Route all pointer input to this window until released.
    fn begin_capture(&mut self);

    fn release_capture(&mut self);

    /// Ask the message pump to stop after the current message.
    fn request_exit(&mut self);

    /// Copy a finished frame to the visible surface in one operation.
    fn present(&mut self, frame: &Canvas) -> Result<()>;
}
