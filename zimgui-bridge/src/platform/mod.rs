//! Native backends that talk to the OS directly instead of through winit.
//!
//! `messages` decodes raw Win32 window messages and builds everywhere;
//! `win32` is the backend itself.

pub mod messages;
#[cfg(windows)]
pub mod win32;
