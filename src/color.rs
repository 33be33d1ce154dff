/// An RGBA color with 8-bit channels.
///
/// Meshes store colors in this form. The tessellator converts them to
/// normalized floats with [`Color::to_floats`] when filling render buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0x00, 0x00, 0x00);
    pub const WHITE: Self = Self::rgb(0xff, 0xff, 0xff);
    pub const GREY: Self = Self::rgb(0x93, 0x93, 0x93);
    pub const LIGHT_GREY: Self = Self::rgb(0xc0, 0xc0, 0xc0);
    pub const DARK_GREY: Self = Self::rgb(0x40, 0x40, 0x40);
    pub const RED: Self = Self::rgb(0xe5, 0x00, 0x00);
    pub const GREEN: Self = Self::rgb(0x15, 0xb0, 0x1a);
    pub const BLUE: Self = Self::rgb(0x03, 0x43, 0xdf);
    pub const YELLOW: Self = Self::rgb(0xff, 0xff, 0x14);
    pub const ORANGE: Self = Self::rgb(0xf9, 0x73, 0x06);
    pub const PURPLE: Self = Self::rgb(0x7e, 0x1e, 0x9c);
    pub const CYAN: Self = Self::rgb(0x00, 0xff, 0xff);
    pub const TEAL: Self = Self::rgb(0x02, 0x93, 0x86);

    /// Creates a color from all four channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a fully opaque color.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, u8::MAX)
    }

    /// The complementary color. Alpha is kept.
    #[must_use]
    pub const fn inverted(self) -> Self {
        Self::new(u8::MAX - self.r, u8::MAX - self.g, u8::MAX - self.b, self.a)
    }

    /// Interpolates towards `other` by `bias`, clamped to `0.0..=1.0`.
    #[must_use]
    pub fn tinted(self, other: Self, bias: f64) -> Self {
        let bias = bias.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| channel(f64::from(a) * (1.0 - bias) + f64::from(b) * bias);
        Self::new(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
            mix(self.a, other.a),
        )
    }

    /// Channels normalized to `0.0..=1.0`, in RGBA order.
    #[must_use]
    pub fn to_floats(self) -> [f32; 4] {
        let f = |c: u8| f32::from(c) / 255.0;
        [f(self.r), f(self.g), f(self.b), f(self.a)]
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn channel(v: f64) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}
