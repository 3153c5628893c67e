use winit::window::Window;

use crate::coords::Viewport;
use crate::device::{Gpu, SurfaceErrorAction};
use crate::input::{InputFrame, InputState};
use crate::paint::Color;
use crate::render::{RenderCtx, RenderTarget};
use crate::time::FrameTime;
use crate::window::RuntimeCtx;

use super::app::AppControl;

/// Borrowed window handle.
pub struct WindowCtx<'a> {
    pub window: &'a Window,
}

impl<'a> WindowCtx<'a> {
    /// Inner size in logical pixels.
    pub fn logical_size(&self) -> (f32, f32) {
        let phys = self.window.inner_size();
        let logical: winit::dpi::LogicalSize<f64> = phys.to_logical(self.window.scale_factor());
        (logical.width as f32, logical.height as f32)
    }

    /// Updates the title bar; skips the platform call when unchanged.
    pub fn set_title(&self, title: &str) {
        if self.window.title() != title {
            self.window.set_title(title);
        }
    }
}

/// Per-frame context passed to [`App::on_frame`](super::App::on_frame).
///
/// `'a` spans the callback, `'w` is the window borrow held by `Gpu<'w>`.
pub struct FrameCtx<'a, 'w> {
    pub window: WindowCtx<'a>,
    pub gpu: &'a mut Gpu<'w>,
    pub input: &'a InputState,
    pub input_frame: &'a InputFrame,
    pub time: FrameTime,
    pub runtime: &'a mut RuntimeCtx,
}

impl<'a, 'w> FrameCtx<'a, 'w> {
    /// Logical drawable area.
    pub fn viewport(&self) -> Viewport {
        let (w, h) = self.window.logical_size();
        Viewport::new(w, h)
    }

    /// Clears the surface to `clear`, lets `draw` record into it, then
    /// presents.
    ///
    /// Surface loss is handled here: recoverable errors skip the frame,
    /// fatal ones return [`AppControl::Exit`].
    pub fn render<F>(&mut self, clear: Color, draw: F) -> AppControl
    where
        F: FnOnce(&RenderCtx<'_>, &mut RenderTarget<'_>),
    {
        let viewport = self.viewport();

        let mut frame = match self.gpu.begin_frame() {
            Ok(f) => f,
            Err(err) => {
                return match self.gpu.handle_surface_error(err) {
                    SurfaceErrorAction::Fatal => AppControl::Exit,
                    _ => AppControl::Continue,
                };
            }
        };

        // Dropped before the encoder moves into submit().
        {
            let _rpass = frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("stellate clear"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &frame.view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(clear.to_wgpu()),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });
        }

        let rctx = RenderCtx::new(
            self.gpu.device(),
            self.gpu.queue(),
            self.gpu.surface_format(),
            viewport,
        );
        {
            let mut target = RenderTarget::new(&mut frame.encoder, &frame.view);
            draw(&rctx, &mut target);
        }

        self.window.window.pre_present_notify();
        self.gpu.submit(frame);

        AppControl::Continue
    }
}
