//! Core 2D geometry types
//!
//! Positions are local to a host rectangle's frame: the host hands the
//! engine a pivot and a size, and every generator/effect works in the
//! resulting local space.

// ─────────────────────────────────────────────────────────────────────────────
// Point / Vec2 / Size
// ─────────────────────────────────────────────────────────────────────────────

/// 2D point in local rectangle space
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Offset the point by a vector
    pub fn offset(self, delta: Vec2) -> Self {
        Self::new(self.x + delta.x, self.y + delta.y)
    }
}

/// 2D vector
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };
    pub const X: Vec2 = Vec2 { x: 1.0, y: 0.0 };
    pub const Y: Vec2 = Vec2 { x: 0.0, y: 1.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len > 0.0 {
            Self::new(self.x / len, self.y / len)
        } else {
            Self::ZERO
        }
    }

    pub fn dot(&self, other: Vec2) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Clamp both components to `[-limit, limit]`
    pub fn clamp_abs(&self, limit: f32) -> Self {
        Self::new(self.x.clamp(-limit, limit), self.y.clamp(-limit, limit))
    }
}

impl std::ops::Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::ops::Mul<f32> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl std::ops::Div<f32> for Vec2 {
    type Output = Vec2;

    fn div(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x / rhs, self.y / rhs)
    }
}

impl From<Point> for Vec2 {
    fn from(p: Point) -> Self {
        Vec2::new(p.x, p.y)
    }
}

/// 2D size
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Shorter of the two dimensions
    pub fn min_side(&self) -> f32 {
        self.width.min(self.height)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// RectBounds
// ─────────────────────────────────────────────────────────────────────────────

/// Axis-aligned min/max corner pair in local rectangle space
///
/// Every gradient/remap computation runs against one of these. The
/// corners are normalized on construction so `min.x <= max.x` and
/// `min.y <= max.y` always hold.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RectBounds {
    pub min: Point,
    pub max: Point,
}

impl RectBounds {
    pub const ZERO: RectBounds = RectBounds {
        min: Point::ZERO,
        max: Point::ZERO,
    };

    /// Build from two arbitrary corners
    pub fn from_points(a: Point, b: Point) -> Self {
        Self {
            min: Point::new(a.x.min(b.x), a.y.min(b.y)),
            max: Point::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Build from a host rectangle's pivot and size
    ///
    /// The local frame puts the pivot at the origin, so the min corner
    /// sits at `-pivot * size` and the max corner at `size + min`.
    pub fn from_pivot_size(pivot: Point, size: Size) -> Self {
        let min = Point::new(-pivot.x * size.width, -pivot.y * size.height);
        let max = Point::new(size.width + min.x, size.height + min.y);
        Self { min, max }
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.min.x + self.max.x) * 0.5,
            (self.min.y + self.max.y) * 0.5,
        )
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Normalized position ratios of `pos` within the bounds, clamped
    /// to `[0, 1]`
    ///
    /// A degenerate (zero-extent) axis yields ratio 0 rather than
    /// dividing by zero.
    pub fn remap(&self, pos: Point) -> (f32, f32) {
        let x01 = if self.max.x == self.min.x {
            0.0
        } else {
            ((pos.x - self.min.x) / (self.max.x - self.min.x)).clamp(0.0, 1.0)
        };
        let y01 = if self.max.y == self.min.y {
            0.0
        } else {
            ((pos.y - self.min.y) / (self.max.y - self.min.y)).clamp(0.0, 1.0)
        };
        (x01, y01)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn pivot_size_bounds() {
        // Centered pivot: bounds symmetric around the origin.
        let b = RectBounds::from_pivot_size(Point::new(0.5, 0.5), Size::new(100.0, 40.0));
        assert_relative_eq!(b.min.x, -50.0);
        assert_relative_eq!(b.min.y, -20.0);
        assert_relative_eq!(b.max.x, 50.0);
        assert_relative_eq!(b.max.y, 20.0);

        // Bottom-left pivot: bounds start at the origin.
        let b = RectBounds::from_pivot_size(Point::ZERO, Size::new(10.0, 10.0));
        assert_eq!(b.min, Point::ZERO);
        assert_eq!(b.max, Point::new(10.0, 10.0));
    }

    #[test]
    fn from_points_normalizes() {
        let b = RectBounds::from_points(Point::new(5.0, -1.0), Point::new(-5.0, 3.0));
        assert!(b.min.x <= b.max.x && b.min.y <= b.max.y);
        assert_eq!(b.min, Point::new(-5.0, -1.0));
    }

    #[test]
    fn remap_clamps_and_centers() {
        let b = RectBounds::from_points(Point::new(0.0, 0.0), Point::new(10.0, 20.0));
        let (x, y) = b.remap(Point::new(5.0, 10.0));
        assert_relative_eq!(x, 0.5);
        assert_relative_eq!(y, 0.5);

        let (x, y) = b.remap(Point::new(-100.0, 100.0));
        assert_relative_eq!(x, 0.0);
        assert_relative_eq!(y, 1.0);
    }

    #[test]
    fn remap_degenerate_axis_is_zero() {
        let b = RectBounds::from_points(Point::new(3.0, 0.0), Point::new(3.0, 10.0));
        let (x, y) = b.remap(Point::new(3.0, 5.0));
        assert_eq!(x, 0.0);
        assert_relative_eq!(y, 0.5);

        let degenerate = RectBounds::ZERO;
        assert_eq!(degenerate.remap(Point::new(7.0, 7.0)), (0.0, 0.0));
    }

    #[test]
    fn vec2_normalize_zero_is_zero() {
        assert_eq!(Vec2::ZERO.normalize(), Vec2::ZERO);
        let v = Vec2::new(3.0, 4.0);
        assert_relative_eq!(v.length(), 5.0);
        assert_relative_eq!(v.normalize().length(), 1.0);
    }
}
