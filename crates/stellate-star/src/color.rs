/// Straight (non-premultiplied) sRGB surface color, channels in `[0, 1]`.
///
/// Color-space conversion is the renderer's concern; this type only carries
/// what the user picked.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(1.0, 1.0, 1.0);

    #[inline]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Builds a color from a `0xRRGGBB` literal.
    pub fn from_hex(hex: u32) -> Self {
        let channel = |shift: u32| ((hex >> shift) & 0xff) as f32 / 255.0;
        Self::new(channel(16), channel(8), channel(0))
    }

    /// Packs the color back into `0xRRGGBB`, rounding each channel.
    pub fn to_hex(self) -> u32 {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u32;
        (channel(self.r) << 16) | (channel(self.g) << 8) | channel(self.b)
    }

    /// Returns `true` if every channel is finite and within `[0, 1]`.
    pub fn is_valid(self) -> bool {
        [self.r, self.g, self.b]
            .iter()
            .all(|c| c.is_finite() && (0.0..=1.0).contains(c))
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::WHITE
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_valid() {
            write!(f, "#{:06x}", self.to_hex())
        } else {
            write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_round_trips_through_channels() {
        let c = Rgb::from_hex(0xff8000);
        assert_eq!(c.r, 1.0);
        assert!((c.g - 128.0 / 255.0).abs() < 1e-6);
        assert_eq!(c.b, 0.0);
        assert_eq!(c.to_hex(), 0xff8000);
    }

    #[test]
    fn display_uses_css_hex() {
        assert_eq!(Rgb::WHITE.to_string(), "#ffffff");
        assert_eq!(Rgb::from_hex(0x00aa10).to_string(), "#00aa10");
    }

    #[test]
    fn out_of_range_channels_are_invalid() {
        assert!(!Rgb::new(1.5, 0.0, 0.0).is_valid());
        assert!(!Rgb::new(0.0, f32::NAN, 0.0).is_valid());
        assert!(Rgb::new(0.0, 0.5, 1.0).is_valid());
    }
}
