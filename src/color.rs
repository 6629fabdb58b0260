//! Display colours and linear blending.

/// RGB colour with channels in `[0, 255]`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    /// Colour drawn for a spring at its stress limit.
    pub const STRESS: Color = Color::rgb(255.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Color { r, g, b }
    }

    /// Blend toward `other` by `t` (0 = self, 1 = other). `t` is not clamped.
    pub fn lerp(self, other: Color, t: f32) -> Color {
        let keep = 1.0 - t;
        Color {
            r: self.r * keep + other.r * t,
            g: self.g * keep + other.g * t,
            b: self.b * keep + other.b * t,
        }
    }

    /// Channels rounded to bytes, saturating at the ends of the range.
    pub fn to_rgb8(self) -> [u8; 3] {
        let byte = |c: f32| libm::roundf(c.max(0.0).min(255.0)) as u8;
        [byte(self.r), byte(self.g), byte(self.b)]
    }
}
