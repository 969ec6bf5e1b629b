//! # zimgui core
//!
//! Platform-neutral half of the window host. A backend owns the native
//! window and message pump; for every native message it builds an
//! [`Event`] and hands it to a [`Dispatcher`], which forwards it to the
//! [`UiCore`] the caller supplied at window creation.
//!
//! Nothing in this crate talks to the OS, so all of it runs under
//! `cargo test` without a display.

pub mod canvas;
pub mod capture;
pub mod color;
pub mod config;
pub mod context;
pub mod dispatch;
pub mod error;
pub mod event;
pub mod geometry;
pub mod handler;
pub mod keymap;
pub mod texture;
pub mod window;

pub use canvas::{Canvas, Roundness};
pub use color::Rgba;
pub use config::HostConfig;
pub use context::RenderContext;
pub use dispatch::{Disposition, Dispatcher};
pub use error::{HostError, Result};
pub use event::{
    Event, KeyEvent, KeyState, Modifiers, MouseButton, ScrollDelta, ScrollDirection, ScrollEvent,
    scroll_delta,
};
pub use geometry::{Point, Rect, Size};
pub use handler::UiCore;
pub use texture::Texture;
pub use window::{NativeWindow, WindowHandle};
