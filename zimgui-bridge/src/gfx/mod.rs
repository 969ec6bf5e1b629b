//! GPU presentation.
//!
//! The UI core draws on the CPU; this module only moves finished frames to
//! the swapchain.
//!   renderer - wgpu device/surface lifecycle, frame upload

mod renderer;

pub use renderer::{GpuState, TexelOrder, encode_frame};
