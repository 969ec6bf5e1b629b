use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the window host.
///
/// Only startup failures and setup of the presentation surface are fatal.
/// Failures while presenting an individual frame are logged by the
/// dispatcher and otherwise ignored.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("window class registration failed: {0}")]
    ClassRegistration(String),

    #[error("window creation failed: {0}")]
    WindowCreation(String),

    #[error("event loop error: {0}")]
    EventLoop(String),

    /// The GPU surface for a new window could not be set up.
    #[error("surface setup failed: {0}")]
    SurfaceSetup(String),

    #[error("presentation surface error: {0}")]
    Surface(String),

    #[error("texture error: {0}")]
    Texture(String),

    #[error("invalid config {}: {reason}", path.display())]
    Config { path: PathBuf, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl HostError {
    /// Whether this error prevented the window from ever being shown.
    pub fn is_startup_failure(&self) -> bool {
        matches!(
            self,
            HostError::ClassRegistration(_)
                | HostError::WindowCreation(_)
                | HostError::SurfaceSetup(_)
                | HostError::EventLoop(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, HostError>;
