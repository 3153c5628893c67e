use stellate_star::Rgb;

/// Linear, premultiplied RGBA.
///
/// Surfaces are sRGB, so shaders output linear values and the hardware
/// encodes on write. Colors authored in sRGB go through
/// [`from_srgb`](Self::from_srgb).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    #[inline]
    pub const fn transparent() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0, a: 0.0 }
    }

    /// Components already linear and premultiplied.
    #[inline]
    pub const fn from_premul(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Linear straight-alpha components; premultiplies.
    #[inline]
    pub fn from_linear(r: f32, g: f32, b: f32, a: f32) -> Self {
        let a = a.clamp(0.0, 1.0);
        Self {
            r: r.clamp(0.0, 1.0) * a,
            g: g.clamp(0.0, 1.0) * a,
            b: b.clamp(0.0, 1.0) * a,
            a,
        }
    }

    /// sRGB-encoded straight-alpha components (what color pickers produce).
    pub fn from_srgb(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self::from_linear(srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b), a)
    }

    /// `0xRRGGBB` in sRGB, fully opaque.
    pub fn from_hex(hex: u32) -> Self {
        Rgb::from_hex(hex).into()
    }

    /// Same color at a different opacity.
    pub fn with_alpha(self, a: f32) -> Self {
        let (r, g, b) = self.straight_rgb();
        Self::from_linear(r, g, b, a)
    }

    fn straight_rgb(self) -> (f32, f32, f32) {
        if self.a <= 0.0 {
            (0.0, 0.0, 0.0)
        } else {
            (self.r / self.a, self.g / self.a, self.b / self.a)
        }
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub fn to_wgpu(self) -> wgpu::Color {
        wgpu::Color {
            r: self.r as f64,
            g: self.g as f64,
            b: self.b as f64,
            a: self.a as f64,
        }
    }
}

impl From<Rgb> for Color {
    fn from(c: Rgb) -> Self {
        Color::from_srgb(c.r, c.g, c.b, 1.0)
    }
}

/// sRGB transfer function, decoding direction.
pub fn srgb_to_linear(c: f32) -> f32 {
    let c = c.clamp(0.0, 1.0);
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn srgb_endpoints_are_fixed() {
        assert_eq!(srgb_to_linear(0.0), 0.0);
        assert!((srgb_to_linear(1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn srgb_midtone_is_darker_in_linear() {
        let mid = srgb_to_linear(0.5);
        assert!((mid - 0.214).abs() < 1e-3);
    }

    #[test]
    fn alpha_premultiplies() {
        let c = Color::from_linear(1.0, 0.5, 0.0, 0.5);
        assert_eq!(c.to_array(), [0.5, 0.25, 0.0, 0.5]);
        let back = c.with_alpha(1.0);
        assert_eq!(back.to_array(), [1.0, 0.5, 0.0, 1.0]);
    }

    #[test]
    fn star_color_converts_opaque() {
        let c: Color = Rgb::WHITE.into();
        assert!((c.r - 1.0).abs() < 1e-6);
        assert_eq!(c.a, 1.0);
    }
}
