//! Outline by duplication
//!
//! Produces an outline by emitting offset, recolored copies of the
//! existing geometry in the four diagonal directions rather than
//! extruding new geometry along edges.

use crate::stream::{duplicate_pass, MAX_EFFECT_OFFSET};
use vexel_core::{Color, MeshBuilder, Vec2};

/// Four-direction outline duplication effect
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OutlineDuplicate {
    pub enabled: bool,
    pub color: Color,
    /// Duplicate offset; each axis is clamped to ±600 units
    pub offset: Vec2,
}

impl Default for OutlineDuplicate {
    fn default() -> Self {
        Self {
            enabled: false,
            color: Color::BLACK.with_alpha(0.5),
            offset: Vec2::new(1.0, -1.0),
        }
    }
}

impl OutlineDuplicate {
    /// Duplicate the builder's entire geometry at the four diagonal
    /// offsets
    ///
    /// Each duplicate takes the outline color with
    /// `alpha = outline.a * original.a`; the originals end up last in
    /// the stream so they render on top. The result holds exactly 5x
    /// the original vertex count.
    pub fn populate_mesh(&self, builder: &mut MeshBuilder) {
        if !self.enabled || builder.vertex_count() == 0 {
            return;
        }

        let mut stream = builder.vertex_stream();
        let o = self.offset.clamp_abs(MAX_EFFECT_OFFSET);
        let directions = [
            Vec2::new(o.x, o.y),
            Vec2::new(o.x, -o.y),
            Vec2::new(-o.x, o.y),
            Vec2::new(-o.x, -o.y),
        ];

        let mut start = 0;
        let mut end = stream.len();
        for dir in directions {
            duplicate_pass(&mut stream, start, end, dir, |original, _| {
                self.color.with_alpha(self.color.a * original.color.a)
            });
            start = end;
            end = stream.len();
        }

        builder.add_vertex_triangle_stream(&stream);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use vexel_core::{MeshVertex, Point};

    fn triangle_builder(alpha: f32) -> MeshBuilder {
        let mut mb = MeshBuilder::new();
        let color = Color::WHITE.with_alpha(alpha);
        let a = mb.add_vertex(MeshVertex::new(Point::new(0.0, 0.0), color, Vec2::ZERO));
        let b = mb.add_vertex(MeshVertex::new(Point::new(4.0, 0.0), color, Vec2::ZERO));
        let c = mb.add_vertex(MeshVertex::new(Point::new(0.0, 4.0), color, Vec2::ZERO));
        mb.add_triangle(a, b, c);
        mb
    }

    #[test]
    fn four_diagonal_duplicates_plus_originals() {
        let mut mb = triangle_builder(1.0);
        let effect = OutlineDuplicate {
            enabled: true,
            color: Color::BLACK,
            offset: Vec2::new(1.0, -1.0),
        };
        effect.populate_mesh(&mut mb);

        // 3 original vertices -> 4 duplicate ranges + originals.
        assert_eq!(mb.vertex_count(), 15);

        // Each duplicate range sits at one diagonal offset from the
        // source triangle's first vertex (0, 0).
        let expected = [(1.0, -1.0), (1.0, 1.0), (-1.0, -1.0), (-1.0, 1.0)];
        for (range, (dx, dy)) in expected.iter().enumerate() {
            let v = mb.vertex(range * 3).unwrap();
            assert_relative_eq!(v.position.x, *dx);
            assert_relative_eq!(v.position.y, *dy);
            assert_eq!(v.color.r, 0.0);
        }

        // Originals last, untouched.
        let v = mb.vertex(12).unwrap();
        assert_eq!(v.position, Point::new(0.0, 0.0));
        assert_eq!(v.color, Color::WHITE);
    }

    #[test]
    fn duplicate_alpha_scales_by_original_alpha() {
        let mut mb = triangle_builder(0.5);
        let effect = OutlineDuplicate {
            enabled: true,
            color: Color::BLACK.with_alpha(0.8),
            offset: Vec2::new(2.0, 2.0),
        };
        effect.populate_mesh(&mut mb);
        assert_relative_eq!(mb.vertex(0).unwrap().color.a, 0.4);
    }

    #[test]
    fn offset_clamps_to_limit() {
        let mut mb = triangle_builder(1.0);
        let effect = OutlineDuplicate {
            enabled: true,
            color: Color::BLACK,
            offset: Vec2::new(10_000.0, -10_000.0),
        };
        effect.populate_mesh(&mut mb);
        assert_relative_eq!(mb.vertex(0).unwrap().position.x, 600.0);
        assert_relative_eq!(mb.vertex(0).unwrap().position.y, -600.0);
    }

    #[test]
    fn disabled_or_empty_is_a_no_op() {
        let mut mb = triangle_builder(1.0);
        OutlineDuplicate::default().populate_mesh(&mut mb);
        assert_eq!(mb.vertex_count(), 3);

        let mut empty = MeshBuilder::new();
        let effect = OutlineDuplicate {
            enabled: true,
            ..Default::default()
        };
        effect.populate_mesh(&mut empty);
        assert_eq!(empty.vertex_count(), 0);
    }
}
