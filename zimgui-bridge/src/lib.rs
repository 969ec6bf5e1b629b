//! # zimgui bridge
//!
//! Native side of the window host: the backends that own a real window and
//! message pump and feed [`zimgui_core::Event`]s to a dispatcher.
//!
//! - `shell`    - portable winit backend, presenting through wgpu
//! - `platform` - raw Win32 backend (Windows only)
//! - `gfx`      - wgpu surface and frame upload
//! - `util`     - tracing setup for binaries

pub mod gfx;
pub mod platform;
pub mod shell;
pub mod util;

use zimgui_core::{HostConfig, HostError, UiCore};

/// Which native layer drives the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Winit,
    #[cfg(windows)]
    Win32,
}

impl Default for Backend {
    /// Win32 on Windows, winit everywhere else.
    fn default() -> Self {
        #[cfg(windows)]
        {
            Backend::Win32
        }
        #[cfg(not(windows))]
        {
            Backend::Winit
        }
    }
}

/// Run one top-level window on the default backend until it is closed.
///
/// `core` is the application state: it receives every event for the
/// lifetime of the window. Returns the message pump's exit code.
pub fn run<C: UiCore>(config: HostConfig, core: C) -> Result<i32, HostError> {
    run_on(Backend::default(), config, core)
}

pub fn run_on<C: UiCore>(backend: Backend, config: HostConfig, core: C) -> Result<i32, HostError> {
    tracing::debug!(?backend, title = %config.title, width = config.width, height = config.height, "starting host");
    match backend {
        Backend::Winit => shell::run(config, core),
        #[cfg(windows)]
        Backend::Win32 => platform::win32::run(config, core),
    }
}

/// Create the main window and block in its message pump.
///
/// Returns `0` if the window could not be set up, otherwise the pump's exit
/// code. Use [`run`] to get the error instead.
pub fn create_main_window<C: UiCore>(title: &str, width: u32, height: u32, core: C) -> i32 {
    let config = HostConfig::default().with_title(title).with_size(width, height);
    match run(config, core) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(startup = e.is_startup_failure(), "window host failed: {e}");
            0
        }
    }
}
