//! Corner-gradient remap
//!
//! Bilinear color interpolation across a rectangle using four corner
//! colors and a normalized position, with an asymmetric offset bias
//! and two base-combine modes. Shared by the vertex tint and drop
//! shadow effects.

use vexel_core::{Color, MeshBuilder, Point, RectBounds, Size, Vec2};

/// How a remapped gradient color combines with a base color
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BlendMode {
    /// Component-wise sum; channels may exceed 1.0 and saturate only
    /// at the 8-bit boundary
    #[default]
    Additive,
    /// Interpolate base toward the gradient by the gradient's alpha,
    /// keeping the higher of the two alphas
    Overlap,
}

/// Four corner colors plus offset bias and blend mode
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GradientSpec {
    pub top_left: Color,
    pub top_right: Color,
    pub bottom_left: Color,
    pub bottom_right: Color,
    /// Per-axis bias applied to the normalized position ratios.
    /// Positive components compress toward the min edge, negative
    /// components compress toward the max edge.
    pub offset: Vec2,
    pub blend: BlendMode,
}

impl Default for GradientSpec {
    fn default() -> Self {
        Self {
            top_left: Color::WHITE,
            top_right: Color::WHITE,
            bottom_left: Color::WHITE,
            bottom_right: Color::WHITE,
            offset: Vec2::ZERO,
            blend: BlendMode::Additive,
        }
    }
}

impl GradientSpec {
    /// Bilinear corner interpolation at `pos` within `bounds`
    ///
    /// Degenerate bounds force the ratios to 0 (bottom-left corner)
    /// rather than dividing by zero.
    pub fn remap(&self, bounds: RectBounds, pos: Point) -> Color {
        let (mut x01, mut y01) = bounds.remap(pos);
        x01 -= self.offset.x * if self.offset.x > 0.0 { x01 } else { 1.0 - x01 };
        y01 -= self.offset.y * if self.offset.y > 0.0 { y01 } else { 1.0 - y01 };

        self.bottom_left
            .lerp(self.bottom_right, x01)
            .lerp(self.top_left.lerp(self.top_right, x01), y01)
    }

    /// Remap and combine with `base` per the blend mode
    pub fn apply(&self, bounds: RectBounds, base: Color, pos: Point) -> Color {
        let gradient = self.remap(bounds, pos);
        match self.blend {
            BlendMode::Additive => gradient + base,
            BlendMode::Overlap => {
                let alpha = gradient.a.max(base.a);
                base.lerp(gradient, gradient.a).with_alpha(alpha)
            }
        }
    }
}

/// Per-vertex gradient tint
///
/// Rewrites every indexed vertex color of a populated builder in
/// place; no stream rebuild, no size change.
#[derive(Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VertexTint {
    pub enabled: bool,
    pub gradient: GradientSpec,
}

impl VertexTint {
    /// Tint a populated builder against the host rectangle's bounds
    pub fn populate_mesh(
        &self,
        builder: &mut MeshBuilder,
        pivot: Point,
        size: Size,
        base: Color,
    ) {
        if !self.enabled {
            return;
        }
        let bounds = RectBounds::from_pivot_size(pivot, size);
        for i in 0..builder.vertex_count() {
            if let Some(mut v) = builder.populate_vertex(i) {
                v.color = self.gradient.apply(bounds, base, v.position);
                builder.set_vertex(i, v);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use vexel_core::MeshVertex;

    fn corner_spec() -> GradientSpec {
        GradientSpec {
            top_left: Color::rgba(1.0, 0.0, 0.0, 1.0),
            top_right: Color::rgba(0.0, 1.0, 0.0, 1.0),
            bottom_left: Color::rgba(0.0, 0.0, 1.0, 1.0),
            bottom_right: Color::rgba(1.0, 1.0, 1.0, 1.0),
            ..Default::default()
        }
    }

    #[test]
    fn corners_return_their_colors() {
        let spec = corner_spec();
        let b = RectBounds::from_points(Point::new(0.0, 0.0), Point::new(10.0, 10.0));
        assert_eq!(spec.remap(b, Point::new(0.0, 10.0)), spec.top_left);
        assert_eq!(spec.remap(b, Point::new(10.0, 10.0)), spec.top_right);
        assert_eq!(spec.remap(b, Point::new(0.0, 0.0)), spec.bottom_left);
        assert_eq!(spec.remap(b, Point::new(10.0, 0.0)), spec.bottom_right);
    }

    #[test]
    fn center_is_bilinear_midpoint_when_offset_zero() {
        let spec = corner_spec();
        let b = RectBounds::from_points(Point::new(-5.0, -5.0), Point::new(5.0, 5.0));
        let c = spec.remap(b, b.center());
        // Average of the four corners.
        assert_relative_eq!(c.r, 0.5);
        assert_relative_eq!(c.g, 0.5);
        assert_relative_eq!(c.b, 0.5);
    }

    #[test]
    fn positive_offset_compresses_toward_min() {
        let spec = GradientSpec {
            offset: Vec2::new(0.5, 0.0),
            ..corner_spec()
        };
        let b = RectBounds::from_points(Point::new(0.0, 0.0), Point::new(10.0, 10.0));
        // x01 = 0.5 biased down: 0.5 - 0.5*0.5 = 0.25.
        let c = spec.remap(b, Point::new(5.0, 0.0));
        let expected = spec.bottom_left.lerp(spec.bottom_right, 0.25);
        assert_relative_eq!(c.r, expected.r);
        assert_relative_eq!(c.b, expected.b);
    }

    #[test]
    fn degenerate_bounds_pick_bottom_left() {
        let spec = corner_spec();
        let c = spec.remap(RectBounds::ZERO, Point::new(3.0, 4.0));
        assert_eq!(c, spec.bottom_left);
    }

    #[test]
    fn overlap_keeps_max_alpha() {
        let spec = GradientSpec {
            top_left: Color::rgba(1.0, 0.0, 0.0, 0.25),
            top_right: Color::rgba(1.0, 0.0, 0.0, 0.25),
            bottom_left: Color::rgba(1.0, 0.0, 0.0, 0.25),
            bottom_right: Color::rgba(1.0, 0.0, 0.0, 0.25),
            blend: BlendMode::Overlap,
            ..Default::default()
        };
        let b = RectBounds::from_points(Point::ZERO, Point::new(1.0, 1.0));
        let base = Color::rgba(0.0, 1.0, 0.0, 0.9);
        let c = spec.apply(b, base, Point::new(0.5, 0.5));
        assert_relative_eq!(c.a, 0.9);
        // base lerped a quarter of the way toward the gradient
        assert_relative_eq!(c.r, 0.25);
        assert_relative_eq!(c.g, 0.75);
    }

    #[test]
    fn additive_sums_with_base() {
        let spec = corner_spec();
        let b = RectBounds::from_points(Point::ZERO, Point::new(1.0, 1.0));
        let c = spec.apply(b, Color::rgba(0.5, 0.5, 0.5, 0.0), Point::new(0.0, 0.0));
        assert_relative_eq!(c.b, 1.5);
    }

    #[test]
    fn tint_rewrites_every_vertex_in_place() {
        let mut mb = MeshBuilder::new();
        for (x, y) in [(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)] {
            mb.add_vertex(MeshVertex::new(Point::new(x, y), Color::BLACK, Vec2::ZERO));
        }
        mb.add_triangle(0, 1, 2);

        let tint = VertexTint {
            enabled: true,
            gradient: GradientSpec {
                blend: BlendMode::Overlap,
                ..corner_spec()
            },
        };
        tint.populate_mesh(&mut mb, Point::ZERO, Size::new(10.0, 10.0), Color::BLACK);

        assert_eq!(mb.vertex_count(), 3);
        assert_eq!(mb.vertex(0).unwrap().color, Color::rgba(0.0, 0.0, 1.0, 1.0));
        assert_eq!(mb.vertex(2).unwrap().color, Color::rgba(0.0, 1.0, 0.0, 1.0));
    }

    #[test]
    fn disabled_tint_is_a_no_op() {
        let mut mb = MeshBuilder::new();
        mb.add_vertex(MeshVertex::new(Point::ZERO, Color::RED, Vec2::ZERO));
        let tint = VertexTint::default();
        tint.populate_mesh(&mut mb, Point::ZERO, Size::new(1.0, 1.0), Color::WHITE);
        assert_eq!(mb.vertex(0).unwrap().color, Color::RED);
    }
}
