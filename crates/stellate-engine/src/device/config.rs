/// Initialization parameters for the GPU layer.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Prefer an sRGB surface format, so linear shader output is encoded on
    /// write.
    pub prefer_srgb: bool,

    /// Swap behavior. FIFO is supported everywhere.
    pub present_mode: wgpu::PresentMode,

    /// Requested alpha mode; an unsupported request falls back to the first
    /// mode the surface offers.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,

    pub required_features: wgpu::Features,

    pub required_limits: wgpu::Limits,

    /// Hint only; honored as far as the backend allows.
    pub desired_maximum_frame_latency: u32,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb: true,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: None,
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
            desired_maximum_frame_latency: 2,
        }
    }
}
