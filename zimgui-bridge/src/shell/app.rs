// zimgui-bridge/src/shell/app.rs
//! Host state and winit event loop.
//!
//! KEY ARCHITECTURAL NOTES:
//!   - One window, one `Dispatcher`. The UI core lives inside the dispatcher
//!     for the whole run and gets `&mut` access on every event.
//!   - The window and GPU state are created in `resumed()`; events arriving
//!     before that are dropped.
//!   - Exit is requested by the dispatcher (on `Destroy`) through
//!     `NativeWindow::request_exit`; the handler checks the flag after every
//!     dispatched event.

use std::sync::Arc;

use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use zimgui_core::{
    Canvas, Dispatcher, Event, HostConfig, HostError, NativeWindow, Point, Size, UiCore,
    WindowHandle,
};

use super::events::InputTracker;
use crate::gfx::GpuState;

// ════════════════════════════════════════════════════════════════════
// Native window
// ════════════════════════════════════════════════════════════════════

/// The winit window plus everything needed to put pixels on it.
pub struct WinitWindow {
    window: Arc<Window>,
    gpu: GpuState,
    pointer: Option<Point>,
    exit_requested: bool,
}

impl NativeWindow for WinitWindow {
    fn handle(&self) -> WindowHandle {
        WindowHandle(u64::from(self.window.id()))
    }

    fn client_size(&self) -> Size {
        let size = self.window.inner_size();
        Size::new(size.width, size.height)
    }

    fn pointer_position(&self) -> Option<Point> {
        self.pointer
    }

    fn invalidate(&self) {
        self.window.request_redraw();
    }

    // The OS grabs the pointer implicitly while a button is held, so
    // capture is bookkeeping only.
    fn begin_capture(&mut self) {
        tracing::trace!(window = %self.handle(), "capture begin");
    }

    fn release_capture(&mut self) {
        tracing::trace!(window = %self.handle(), "capture release");
    }

    fn request_exit(&mut self) {
        self.exit_requested = true;
    }

    fn present(&mut self, frame: &Canvas) -> zimgui_core::Result<()> {
        if self.gpu.present(frame)? {
            return Ok(());
        }
        self.window.request_redraw();
        Err(HostError::Surface(
            "surface reconfigured, frame dropped".to_string(),
        ))
    }
}

// ════════════════════════════════════════════════════════════════════
// Host state
// ════════════════════════════════════════════════════════════════════

/// Owns the dispatcher (and through it the UI core) for one window.
pub struct HostApp<C> {
    config: HostConfig,
    dispatcher: Dispatcher<C>,
    input: InputTracker,
    window: Option<WinitWindow>,
    error: Option<HostError>,
}

impl<C: UiCore> HostApp<C> {
    pub fn new(config: HostConfig, core: C) -> Self {
        let dispatcher = Dispatcher::new(core, config.background);
        let input = InputTracker::new(config.pixels_per_line);
        Self {
            config,
            dispatcher,
            input,
            window: None,
            error: None,
        }
    }

    pub fn dispatcher(&self) -> &Dispatcher<C> {
        &self.dispatcher
    }

    fn create_window(&self, event_loop: &ActiveEventLoop) -> Result<WinitWindow, HostError> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.as_str())
            .with_inner_size(PhysicalSize::new(self.config.width, self.config.height));

        let window = event_loop
            .create_window(attrs)
            .map(Arc::new)
            .map_err(|e| HostError::WindowCreation(e.to_string()))?;
        window.set_ime_allowed(true);

        let gpu = GpuState::new(window.clone())
            .map_err(|e| HostError::SurfaceSetup(format!("{e:#}")))?;

        Ok(WinitWindow {
            window,
            gpu,
            pointer: None,
            exit_requested: false,
        })
    }

    fn dispatch(&mut self, event_loop: &ActiveEventLoop, event: Event) {
        let Some(window) = self.window.as_mut() else {
            return;
        };
        window.pointer = self.input.pointer();
        self.dispatcher.dispatch(window, event);

        if window.exit_requested {
            event_loop.exit();
        }
    }
}

// ════════════════════════════════════════════════════════════════════
// ApplicationHandler (winit 0.30)
// ════════════════════════════════════════════════════════════════════

impl<C: UiCore> ApplicationHandler for HostApp<C> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        match self.create_window(event_loop) {
            Ok(window) => {
                tracing::info!(window = %window.handle(), title = %self.config.title, "window + GPU initialized");
                window.window.request_redraw();
                self.window = Some(window);
                self.dispatch(event_loop, Event::Created);
            }
            Err(e) => {
                tracing::error!("startup failed: {e}");
                self.error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if let WindowEvent::Resized(size) = event {
            if let Some(window) = self.window.as_mut() {
                window.gpu.resize(size);
                window.window.request_redraw();
            }
        }

        for ev in self.input.translate(event) {
            self.dispatch(event_loop, ev);
        }
    }
}

// ════════════════════════════════════════════════════════════════════
// Entry Point
// ════════════════════════════════════════════════════════════════════

/// Run the winit backend until the window is closed.
///
/// Returns the exit code (always `0`; winit has no quit payload) or the
/// startup error that stopped the loop.
pub fn run<C: UiCore>(config: HostConfig, core: C) -> Result<i32, HostError> {
    let event_loop = EventLoop::new().map_err(|e| HostError::EventLoop(e.to_string()))?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = HostApp::new(config, core);
    event_loop
        .run_app(&mut app)
        .map_err(|e| HostError::EventLoop(e.to_string()))?;

    if let Some(e) = app.error.take() {
        return Err(e);
    }

    tracing::info!(frames = app.dispatcher().frames(), "event loop finished");
    Ok(0)
}
