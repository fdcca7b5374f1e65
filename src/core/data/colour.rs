/// 8-bit-per-channel RGBA colour.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    pub const BLACK: Self = Self::opaque(0, 0, 0);
    pub const WHITE: Self = Self::opaque(255, 255, 255);

    #[must_use]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Builds an opaque colour from channels in `[0, 1]`. Values are clamped,
    /// then scaled by 255 and truncated.
    #[must_use]
    pub fn from_unit_rgb(r: f64, g: f64, b: f64) -> Self {
        Self::opaque(unit_to_byte(r), unit_to_byte(g), unit_to_byte(b))
    }

    #[must_use]
    pub fn to_unit_rgb(self) -> [f64; 3] {
        [
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        ]
    }
}

fn unit_to_byte(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0) as u8
}
