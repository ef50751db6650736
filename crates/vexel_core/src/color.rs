//! RGBA color
//!
//! Normalized f32 components. Arithmetic is deliberately unclamped:
//! the Additive gradient blend mode sums channels and lets them exceed
//! 1.0, clamping only when converted to 8-bit at the renderer
//! boundary.

/// RGBA color with normalized f32 components
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    pub const YELLOW: Color = Color::rgb(1.0, 1.0, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    /// Linear interpolation per channel, `t` clamped to `[0, 1]`
    pub fn lerp(self, other: Color, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }

    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Saturating conversion to 8-bit channels
    pub fn to_rgba8(self) -> [u8; 4] {
        let quantize = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [
            quantize(self.r),
            quantize(self.g),
            quantize(self.b),
            quantize(self.a),
        ]
    }
}

impl std::ops::Add for Color {
    type Output = Color;

    /// Component-wise sum, unclamped (Additive blending)
    fn add(self, rhs: Color) -> Color {
        Color {
            r: self.r + rhs.r,
            g: self.g + rhs.g,
            b: self.b + rhs.b,
            a: self.a + rhs.a,
        }
    }
}

impl From<[f32; 4]> for Color {
    fn from(c: [f32; 4]) -> Self {
        Color::rgba(c[0], c[1], c[2], c[3])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn lerp_endpoints_and_midpoint() {
        let c = Color::BLACK.lerp(Color::WHITE, 0.5);
        assert_relative_eq!(c.r, 0.5);
        assert_eq!(Color::RED.lerp(Color::BLUE, 0.0), Color::RED);
        assert_eq!(Color::RED.lerp(Color::BLUE, 1.0), Color::BLUE);
        // t clamps
        assert_eq!(Color::RED.lerp(Color::BLUE, 2.0), Color::BLUE);
    }

    #[test]
    fn additive_sum_is_unclamped() {
        let c = Color::WHITE + Color::rgba(0.5, 0.0, 0.0, 0.5);
        assert_relative_eq!(c.r, 1.5);
        assert_relative_eq!(c.a, 1.5);
        // saturates only at the 8-bit boundary
        assert_eq!(c.to_rgba8()[0], 255);
    }

    #[test]
    fn hex_round_trip() {
        let c = Color::from_hex(0xFF8000);
        assert_eq!(c.to_rgba8(), [255, 128, 0, 255]);
    }
}
