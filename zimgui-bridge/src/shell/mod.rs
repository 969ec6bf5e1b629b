//! Portable shell: winit lifecycle and event translation.
//!
//! The shell owns the winit event loop. It translates platform events into
//! the core's `Event` vocabulary and hands them to the dispatcher.

pub(crate) mod app;
pub mod events;
pub mod keys;

pub use app::{HostApp, WinitWindow, run};
