use winit::dpi::PhysicalSize;

/// What the caller should do after a failed frame acquisition.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// Surface was reconfigured; the next frame can proceed.
    Reconfigured,
    /// Transient; drop this frame.
    SkipFrame,
    /// Unrecoverable (typically out of memory); shut down.
    Fatal,
}

/// Picks the surface format, preferring sRGB variants when asked to.
pub(crate) fn choose_surface_format(
    formats: &[wgpu::TextureFormat],
    prefer_srgb: bool,
) -> Option<wgpu::TextureFormat> {
    if prefer_srgb {
        if let Some(f) = formats.iter().copied().find(|f| f.is_srgb()) {
            return Some(f);
        }
    }
    formats.first().copied()
}

pub(crate) fn choose_alpha_mode(
    supported: &[wgpu::CompositeAlphaMode],
    requested: Option<wgpu::CompositeAlphaMode>,
) -> wgpu::CompositeAlphaMode {
    requested
        .filter(|m| supported.contains(m))
        .or_else(|| supported.first().copied())
        .unwrap_or(wgpu::CompositeAlphaMode::Auto)
}

/// Records the new size and reconfigures, unless the window is minimized
/// (wgpu rejects 0x0 surfaces; configuration waits for a real size).
pub(crate) fn apply_resize(
    surface: &wgpu::Surface<'_>,
    device: &wgpu::Device,
    config: &mut wgpu::SurfaceConfiguration,
    size: &mut PhysicalSize<u32>,
    new_size: PhysicalSize<u32>,
) {
    *size = new_size;
    if new_size.width == 0 || new_size.height == 0 {
        return;
    }
    config.width = new_size.width;
    config.height = new_size.height;
    surface.configure(device, config);
}

pub(crate) fn classify_surface_error(err: &wgpu::SurfaceError) -> SurfaceErrorAction {
    match err {
        wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => SurfaceErrorAction::Reconfigured,
        wgpu::SurfaceError::OutOfMemory => SurfaceErrorAction::Fatal,
        wgpu::SurfaceError::Timeout | wgpu::SurfaceError::Other => SurfaceErrorAction::SkipFrame,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wgpu::TextureFormat as F;

    #[test]
    fn srgb_preferred_when_available() {
        let formats = [F::Bgra8Unorm, F::Bgra8UnormSrgb];
        assert_eq!(choose_surface_format(&formats, true), Some(F::Bgra8UnormSrgb));
        assert_eq!(choose_surface_format(&formats, false), Some(F::Bgra8Unorm));
    }

    #[test]
    fn first_format_when_no_srgb() {
        assert_eq!(choose_surface_format(&[F::Rgba16Float], true), Some(F::Rgba16Float));
        assert_eq!(choose_surface_format(&[], true), None);
    }

    #[test]
    fn unsupported_alpha_request_falls_back() {
        use wgpu::CompositeAlphaMode as A;
        assert_eq!(choose_alpha_mode(&[A::Opaque], Some(A::PreMultiplied)), A::Opaque);
        assert_eq!(choose_alpha_mode(&[A::Opaque, A::PreMultiplied], Some(A::PreMultiplied)), A::PreMultiplied);
        assert_eq!(choose_alpha_mode(&[], None), A::Auto);
    }

    #[test]
    fn surface_errors_classified() {
        assert_eq!(classify_surface_error(&wgpu::SurfaceError::Lost), SurfaceErrorAction::Reconfigured);
        assert_eq!(classify_surface_error(&wgpu::SurfaceError::Timeout), SurfaceErrorAction::SkipFrame);
        assert_eq!(classify_surface_error(&wgpu::SurfaceError::OutOfMemory), SurfaceErrorAction::Fatal);
    }
}
