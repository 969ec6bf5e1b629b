//! wgpu device/surface lifecycle and frame upload.
//!
//! GpuState owns the device, queue, surface, and config. A finished canvas
//! is copied straight into the swapchain texture with one
//! `Queue::write_texture`; no pipelines, no intermediate textures.

use std::sync::Arc;
use wgpu::{
    Backends, Device, DeviceDescriptor, Extent3d, Instance, InstanceDescriptor, Origin3d,
    PowerPreference, Queue, RequestAdapterOptions, Surface, SurfaceConfiguration,
    TexelCopyBufferLayout, TexelCopyTextureInfo, TextureAspect, TextureFormat, TextureUsages,
};
use winit::dpi::PhysicalSize;
use winit::window::Window;

use zimgui_core::color::unpack_pixel;
use zimgui_core::{Canvas, HostError};

/// Byte order the swapchain expects for one texel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TexelOrder {
    Bgra,
    Rgba,
}

impl TexelOrder {
    /// Formats a canvas can be copied into without a shader.
    pub fn for_format(format: TextureFormat) -> Option<TexelOrder> {
        match format {
            TextureFormat::Bgra8Unorm | TextureFormat::Bgra8UnormSrgb => Some(TexelOrder::Bgra),
            TextureFormat::Rgba8Unorm | TextureFormat::Rgba8UnormSrgb => Some(TexelOrder::Rgba),
            _ => None,
        }
    }
}

/// Encode canvas pixels for upload. Borrows the canvas bytes when they are
/// already in the right order, otherwise fills `scratch`.
pub fn encode_frame<'a>(
    frame: &'a Canvas,
    order: TexelOrder,
    scratch: &'a mut Vec<u8>,
) -> &'a [u8] {
    if order == TexelOrder::Bgra && cfg!(target_endian = "little") {
        return frame.as_bytes();
    }

    scratch.clear();
    scratch.reserve(frame.pixels().len() * 4);
    for &px in frame.pixels() {
        let [r, g, b, a] = unpack_pixel(px);
        match order {
            TexelOrder::Bgra => scratch.extend_from_slice(&[b, g, r, a]),
            TexelOrder::Rgba => scratch.extend_from_slice(&[r, g, b, a]),
        }
    }
    scratch
}

/// Owns all GPU state. Created once per window.
pub struct GpuState {
    pub surface: Surface<'static>,
    pub device: Device,
    pub queue: Queue,
    pub config: SurfaceConfiguration,
    pub format: TextureFormat,
    order: TexelOrder,
    scratch: Vec<u8>,
}

impl GpuState {
    /// Initialize wgpu with the given window. Blocks until the adapter is ready.
    pub fn new(window: Arc<Window>) -> anyhow::Result<Self> {
        let size = window.inner_size();
        let width = size.width.max(1);
        let height = size.height.max(1);

        let instance = Instance::new(&InstanceDescriptor {
            backends: Backends::all(),
            ..Default::default()
        });

        let surface = instance.create_surface(window.clone())?;

        let adapter = pollster::block_on(instance.request_adapter(&RequestAdapterOptions {
            power_preference: PowerPreference::LowPower,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .map_err(|e| anyhow::anyhow!("no suitable GPU adapter: {e}"))?;

        tracing::info!(
            "GPU adapter: {} ({:?})",
            adapter.get_info().name,
            adapter.get_info().backend
        );

        let (device, queue) = pollster::block_on(adapter.request_device(&DeviceDescriptor {
            label: Some("zimgui-device"),
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::downlevel_defaults(),
            ..Default::default()
        }))?;

        let surface_caps = surface.get_capabilities(&adapter);
        if !surface_caps.usages.contains(TextureUsages::COPY_DST) {
            anyhow::bail!("surface does not accept texture copies");
        }

        // Canvas bytes are already sRGB-encoded, so prefer a linear format
        // that stores them untouched; either kind displays the same bytes.
        let (format, order) = surface_caps
            .formats
            .iter()
            .filter(|f| !f.is_srgb())
            .chain(surface_caps.formats.iter())
            .find_map(|&f| TexelOrder::for_format(f).map(|o| (f, o)))
            .ok_or_else(|| {
                anyhow::anyhow!("no 8-bit RGBA/BGRA surface format in {:?}", surface_caps.formats)
            })?;

        tracing::debug!(?format, ?order, "surface format");

        let config = SurfaceConfiguration {
            usage: TextureUsages::RENDER_ATTACHMENT | TextureUsages::COPY_DST,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            format,
            order,
            scratch: Vec::new(),
        })
    }

    /// Handle window resize.
    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
    }

    /// Copy `frame` to the screen. Returns `Ok(true)` if a frame was
    /// presented, `Ok(false)` if the surface had to be reconfigured first.
    pub fn present(&mut self, frame: &Canvas) -> Result<bool, HostError> {
        if frame.width() != self.config.width || frame.height() != self.config.height {
            self.resize(PhysicalSize::new(frame.width(), frame.height()));
        }

        let output = match self.surface.get_current_texture() {
            Ok(tex) => tex,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.surface.configure(&self.device, &self.config);
                return Ok(false);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                return Err(HostError::Surface("GPU out of memory".to_string()));
            }
            Err(e) => return Err(HostError::Surface(format!("{e:?}"))),
        };

        let width = frame.width().min(output.texture.width());
        let height = frame.height().min(output.texture.height());
        let bytes = encode_frame(frame, self.order, &mut self.scratch);

        self.queue.write_texture(
            TexelCopyTextureInfo {
                texture: &output.texture,
                mip_level: 0,
                origin: Origin3d::ZERO,
                aspect: TextureAspect::All,
            },
            bytes,
            TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * frame.width()),
                rows_per_image: Some(frame.height()),
            },
            Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
        );

        // Flush the staged upload before the texture goes to the compositor.
        self.queue.submit(std::iter::empty());
        output.present();

        Ok(true)
    }
}
