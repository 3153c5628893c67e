use anyhow::{Context, Result};
use winit::dpi::PhysicalSize;
use winit::window::Window;

use super::surface::{apply_resize, choose_alpha_mode, choose_surface_format, classify_surface_error};
use super::{GpuInit, SurfaceErrorAction};

/// wgpu objects bound to one window.
///
/// The surface borrows the window for `'w`; the runtime keeps both in one
/// self-referencing entry so the window always outlives its `Gpu`.
pub struct Gpu<'w> {
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    /// Drawable size in physical pixels; may be 0x0 while minimized.
    size: PhysicalSize<u32>,
}

/// One acquired surface texture plus the encoder recording into it.
///
/// Presenting happens when the surface texture is dropped after submission,
/// so hold it only for the duration of a frame.
pub struct GpuFrame {
    pub surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}

impl<'w> Gpu<'w> {
    /// Creates the device stack for `window` and configures its surface.
    pub async fn new(window: &'w Window, init: GpuInit) -> Result<Self> {
        let size = window.inner_size();
        anyhow::ensure!(size.width > 0 && size.height > 0, "window has zero size");

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance
            .create_surface(window)
            .context("failed to create wgpu surface")?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .context("failed to find a suitable GPU adapter")?;

        log::info!("using adapter {:?}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("stellate device"),
                required_features: init.required_features,
                required_limits: init.required_limits,
                experimental_features: wgpu::ExperimentalFeatures::disabled(),
                memory_hints: wgpu::MemoryHints::Performance,
                trace: wgpu::Trace::Off,
            })
            .await
            .context("failed to create wgpu device/queue")?;

        let caps = surface.get_capabilities(&adapter);
        let format = choose_surface_format(&caps.formats, init.prefer_srgb)
            .context("surface reports no supported formats")?;

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width,
            height: size.height,
            present_mode: init.present_mode,
            alpha_mode: choose_alpha_mode(&caps.alpha_modes, init.alpha_mode),
            view_formats: vec![],
            desired_maximum_frame_latency: init.desired_maximum_frame_latency,
        };
        surface.configure(&device, &config);

        log::debug!("surface configured: {format:?} {}x{}", size.width, size.height);

        Ok(Self { surface, device, queue, config, size })
    }

    pub fn surface_format(&self) -> wgpu::TextureFormat {
        self.config.format
    }

    pub fn size(&self) -> PhysicalSize<u32> {
        self.size
    }

    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    pub fn queue(&self) -> &wgpu::Queue {
        &self.queue
    }

    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        apply_resize(&self.surface, &self.device, &mut self.config, &mut self.size, new_size);
    }

    /// Acquires the next surface texture and opens an encoder for it.
    pub fn begin_frame(&self) -> std::result::Result<GpuFrame, wgpu::SurfaceError> {
        let surface_texture = self.surface.get_current_texture()?;
        let view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("stellate frame encoder"),
            });

        Ok(GpuFrame { surface_texture, view, encoder })
    }

    /// Submits the frame's commands and presents it.
    pub fn submit(&self, frame: GpuFrame) {
        let GpuFrame { surface_texture, view, encoder } = frame;
        self.queue.submit(std::iter::once(encoder.finish()));
        drop(view);
        surface_texture.present();
    }

    /// Maps a frame acquisition failure to an action, reconfiguring the
    /// surface when it was lost or outdated.
    pub fn handle_surface_error(&mut self, err: wgpu::SurfaceError) -> SurfaceErrorAction {
        let action = classify_surface_error(&err);
        match action {
            SurfaceErrorAction::Reconfigured => {
                if self.size.width > 0 && self.size.height > 0 {
                    self.surface.configure(&self.device, &self.config);
                }
            }
            SurfaceErrorAction::SkipFrame => log::debug!("skipping frame: {err}"),
            SurfaceErrorAction::Fatal => log::error!("fatal surface error: {err}"),
        }
        action
    }
}
