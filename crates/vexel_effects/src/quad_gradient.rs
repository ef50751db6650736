//! Row-gradient glyph quad effect
//!
//! Rebuilds a builder's glyph quads with per-row colors. Two-color
//! quads keep their four corners; three-color quads are split into an
//! upper and lower half sharing a middle row, so the middle color gets
//! its own vertices. Optionally emits four offset copies of each quad
//! as a geometric outline behind the main quad.

use crate::extrude::MAX_OUTLINE_WIDTH;
use smallvec::SmallVec;
use vexel_core::{Color, MeshBuilder, MeshVertex, Vec2};

/// Minimum and maximum of the three-color middle-row position
const MIDDLE_OFFSET_RANGE: (f32, f32) = (0.1, 0.9);

const UV_AXIS_EPSILON: f32 = 1e-4;

/// Row color layout for one glyph quad
#[derive(Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum QuadGradient {
    /// Keep the quad's own vertex colors
    #[default]
    OneColor,
    /// Top row and bottom row colors, interpolated by the rasterizer
    TwoColor { top: Color, bottom: Color },
    /// Top, middle and bottom rows; the quad is split at `offset`
    /// (fraction of the way from the top row to the bottom row,
    /// clamped to [0.1, 0.9]) so the middle color sits on real
    /// vertices
    ThreeColor {
        top: Color,
        middle: Color,
        bottom: Color,
        offset: f32,
    },
}

/// Geometric outline settings for [`GradientQuad`]
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuadOutline {
    /// Offset distance of the outline copies, clamped to [0, 10]
    pub width: f32,
    pub color: Color,
    /// When set, no outline geometry is emitted here; the host is
    /// expected to run the triangle extruder over the rebuilt quads
    /// instead
    pub shader_extrusion: bool,
}

impl Default for QuadOutline {
    fn default() -> Self {
        Self {
            width: 1.0,
            color: Color::BLACK,
            shader_extrusion: false,
        }
    }
}

/// Glyph-quad gradient effect
#[derive(Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GradientQuad {
    pub enabled: bool,
    pub gradient: QuadGradient,
    pub outline: Option<QuadOutline>,
}

impl GradientQuad {
    /// Rebuild the builder's quads with row colors and optional
    /// outline copies
    ///
    /// Expects the indexed buffer to hold glyph quads as consecutive
    /// corner quadruples in TL, TR, BR, BL order, the layout a text
    /// host hands over. A trailing partial quadruple is dropped.
    pub fn populate_mesh(&self, builder: &mut MeshBuilder) {
        if !self.enabled || builder.vertex_count() == 0 {
            return;
        }

        let mut corners = Vec::with_capacity(builder.vertex_count());
        for i in 0..builder.vertex_count() {
            if let Some(v) = builder.populate_vertex(i) {
                corners.push(v);
            }
        }
        if corners.len() % 4 != 0 {
            tracing::warn!(
                vertices = corners.len(),
                "vertex count is not a multiple of 4, dropping trailing corners"
            );
            corners.truncate(corners.len() / 4 * 4);
        }

        builder.clear();
        for quad in corners.chunks_exact(4) {
            let emission = self.build_quad(quad);

            if let Some(outline) = self.outline {
                if !outline.shader_extrusion {
                    let w = outline.width.clamp(0.0, MAX_OUTLINE_WIDTH);
                    for (dx, dy) in [(-w, w), (w, w), (-w, -w), (w, -w)] {
                        let copy: SmallVec<[MeshVertex; 8]> = emission
                            .iter()
                            .map(|v| {
                                let mut c = *v;
                                c.position.x += dx;
                                c.position.y += dy;
                                c.color = outline.color;
                                c
                            })
                            .collect();
                        emit_quads(builder, &copy);
                    }
                }
            }

            emit_quads(builder, &emission);
        }
    }

    fn build_quad(&self, quad: &[MeshVertex]) -> SmallVec<[MeshVertex; 8]> {
        let (mut tl, mut tr, mut br, mut bl) = (quad[0], quad[1], quad[2], quad[3]);

        match self.gradient {
            QuadGradient::OneColor => SmallVec::from_slice(&[tl, tr, br, bl]),
            QuadGradient::TwoColor { top, bottom } => {
                tl.color = top;
                tr.color = top;
                br.color = bottom;
                bl.color = bottom;
                SmallVec::from_slice(&[tl, tr, br, bl])
            }
            QuadGradient::ThreeColor {
                top,
                middle,
                bottom,
                offset,
            } => {
                let t = offset.clamp(MIDDLE_OFFSET_RANGE.0, MIDDLE_OFFSET_RANGE.1);
                tl.color = top;
                tr.color = top;
                br.color = bottom;
                bl.color = bottom;

                let mut cr = tr;
                cr.position.y = lerp(tr.position.y, br.position.y, t);
                cr.uv = middle_uv(tr.uv, br.uv, t);
                cr.color = middle;
                let mut cl = tl;
                cl.position.y = lerp(tl.position.y, bl.position.y, t);
                cl.uv = middle_uv(tl.uv, bl.uv, t);
                cl.color = middle;

                SmallVec::from_slice(&[tl, tr, cr, cl, cl, cr, br, bl])
            }
        }
    }
}

/// UV of the middle row between a top and bottom corner
///
/// Glyph atlases sometimes rotate glyph rects; when the two UVs share
/// an x the glyph runs along the v axis, otherwise along u.
fn middle_uv(top: Vec2, bottom: Vec2, t: f32) -> Vec2 {
    if (top.x - bottom.x).abs() < UV_AXIS_EPSILON {
        Vec2::new(top.x, lerp(top.y, bottom.y, t))
    } else {
        Vec2::new(lerp(top.x, bottom.x, t), top.y)
    }
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Append corner quadruples (TL, TR, BR, BL) with their two triangles
fn emit_quads(builder: &mut MeshBuilder, vertices: &[MeshVertex]) {
    for quad in vertices.chunks_exact(4) {
        let base = builder.vertex_count() as u32;
        for v in quad {
            builder.add_vertex(*v);
        }
        builder.add_triangle(base, base + 1, base + 2);
        builder.add_triangle(base + 2, base + 3, base);
    }
}
