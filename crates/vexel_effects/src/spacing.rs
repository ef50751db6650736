//! Glyph spacing adjustment
//!
//! Shifts laid-out glyph quads apart horizontally. Host text layout
//! emits each glyph quad as two triangles — six stream vertices — and
//! the indexed buffer keeps the quad's four unique corners. The walk
//! shifts stream groups of 6 and writes back only the four unique
//! corners through fixed modulo index-collapse rules.

use vexel_core::MeshBuilder;

/// Glyph spacing effect
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GlyphSpacing {
    pub enabled: bool,
    /// Horizontal shift added per glyph index, in local units
    pub spacing: f32,
}

impl Default for GlyphSpacing {
    fn default() -> Self {
        Self {
            enabled: false,
            spacing: 1.0,
        }
    }
}

impl GlyphSpacing {
    /// Shift glyph `k` rightward by `spacing * k`
    ///
    /// Glyph 0 is left untouched. Stream position `i` maps back into
    /// the indexed buffer as `i/6*4 + i%6` for `i % 6 <= 2` and
    /// `i/6*4 + 3` for `i % 6 == 4`; stream positions 3 and 5 are the
    /// quad's duplicate corner pair and are skipped.
    pub fn populate_mesh(&self, builder: &mut MeshBuilder) {
        if !self.enabled || builder.vertex_count() == 0 {
            return;
        }

        let stream = builder.vertex_stream();
        for (i, vertex) in stream.iter().enumerate().skip(6) {
            let glyph = i / 6;
            let mut v = *vertex;
            v.position.x += self.spacing * glyph as f32;

            match i % 6 {
                0..=2 => {
                    builder.set_vertex(glyph * 4 + i % 6, v);
                }
                4 => {
                    builder.set_vertex(glyph * 4 + 3, v);
                }
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use vexel_core::{Color, MeshVertex, Point, Vec2};

    /// Three glyph quads laid out left to right, 4 indexed corners and
    /// 2 triangles each (the layout a text host hands over).
    fn glyph_builder(glyphs: usize) -> MeshBuilder {
        let mut mb = MeshBuilder::new();
        for g in 0..glyphs {
            let x = g as f32 * 10.0;
            let base = mb.vertex_count() as u32;
            // TL, TR, BR, BL
            for (dx, dy) in [(0.0, 10.0), (8.0, 10.0), (8.0, 0.0), (0.0, 0.0)] {
                mb.add_vertex(MeshVertex::new(
                    Point::new(x + dx, dy),
                    Color::WHITE,
                    Vec2::ZERO,
                ));
            }
            mb.add_triangle(base, base + 1, base + 2);
            mb.add_triangle(base + 2, base + 3, base);
        }
        mb
    }

    #[test]
    fn glyph_zero_untouched_later_glyphs_shift_linearly() {
        let mut mb = glyph_builder(3);
        let effect = GlyphSpacing {
            enabled: true,
            spacing: 2.0,
        };
        effect.populate_mesh(&mut mb);

        // Glyph 0 stays put.
        assert_relative_eq!(mb.vertex(0).unwrap().position.x, 0.0);
        assert_relative_eq!(mb.vertex(3).unwrap().position.x, 0.0);
        // Glyph k shifts by spacing * k; corner order preserved.
        for glyph in 1..3 {
            let shift = 2.0 * glyph as f32;
            let left = glyph as f32 * 10.0;
            let corners = [left, left + 8.0, left + 8.0, left];
            for (corner, &base_x) in corners.iter().enumerate() {
                let v = mb.vertex(glyph * 4 + corner).unwrap();
                assert_relative_eq!(v.position.x, base_x + shift);
            }
        }
    }

    #[test]
    fn vertex_count_is_unchanged() {
        let mut mb = glyph_builder(4);
        let effect = GlyphSpacing {
            enabled: true,
            spacing: 3.0,
        };
        effect.populate_mesh(&mut mb);
        assert_eq!(mb.vertex_count(), 16);
        assert_eq!(mb.triangle_count(), 8);
    }

    #[test]
    fn disabled_or_empty_is_a_no_op() {
        let mut mb = glyph_builder(2);
        GlyphSpacing::default().populate_mesh(&mut mb);
        assert_relative_eq!(mb.vertex(5).unwrap().position.x, 18.0);

        let mut empty = MeshBuilder::new();
        let effect = GlyphSpacing {
            enabled: true,
            spacing: 2.0,
        };
        effect.populate_mesh(&mut empty);
        assert_eq!(empty.vertex_count(), 0);
    }
}
