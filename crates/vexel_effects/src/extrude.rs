//! Triangle outline extruder
//!
//! Extrudes each triangle (or glyph-quad triangle pair) outward from
//! its local bounding-box center and records the outline color, width
//! and original UV box in the vertex's typed outline channels, so a
//! downstream shader can render a uniform-width outline without extra
//! draw calls. The raw-channel encoding happens at the
//! [`vexel_core::RawVertex`] boundary.

use vexel_core::{Color, MeshBuilder, MeshVertex, OutlineChannels, Point, Vec2};

/// Hard cap on the shader outline width
pub const MAX_OUTLINE_WIDTH: f32 = 10.0;

/// Edge lengths are capped at this when scaling UV offsets, keeping
/// the UV dilation meaningful for large glyphs
const MAX_UV_EDGE_LENGTH: f32 = 18.0;

/// Grouping mode for the extrusion walk
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExtrudeMode {
    /// Independent triangles, groups of 3
    #[default]
    Single,
    /// Paired triangles forming one glyph quad, groups of 6.
    ///
    /// Groups alternate between the upper and lower half of a
    /// two-row glyph quad by `(group_start % 12) < 6`, and each half
    /// extrudes only the vertices on its outer row. This assumes the
    /// host text layout emits glyph quads as two triangles in a fixed
    /// order; a host that changes glyph winding or emission order
    /// breaks the classification.
    ThreeColor,
}

/// Shader-outline extrusion effect
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OutlineExtrude {
    pub enabled: bool,
    /// Outline width, clamped to [0, 10]
    pub width: f32,
    pub color: Color,
    pub mode: ExtrudeMode,
}

impl Default for OutlineExtrude {
    fn default() -> Self {
        Self {
            enabled: false,
            width: 1.0,
            color: Color::BLACK,
            mode: ExtrudeMode::Single,
        }
    }
}

/// Dominant edge pair of one triangle, in position and UV space
///
/// `tri_x` is whichever of the two candidate edges is more aligned
/// with the horizontal axis; `tri_y` is the other.
#[derive(Clone, Copy, Debug)]
struct EdgeBasis {
    tri_x: Vec2,
    tri_y: Vec2,
    uv_x: Vec2,
    uv_y: Vec2,
}

impl EdgeBasis {
    fn of_triangle(v1: &MeshVertex, v2: &MeshVertex, v3: &MeshVertex) -> Self {
        let e12 = Vec2::from(v2.position) - Vec2::from(v1.position);
        let e23 = Vec2::from(v3.position) - Vec2::from(v2.position);
        let uv12 = v2.uv - v1.uv;
        let uv23 = v3.uv - v2.uv;

        if e12.normalize().dot(Vec2::X).abs() > e23.normalize().dot(Vec2::X).abs() {
            Self {
                tri_x: e12,
                tri_y: e23,
                uv_x: uv12,
                uv_y: uv23,
            }
        } else {
            Self {
                tri_x: e23,
                tri_y: e12,
                uv_x: uv23,
                uv_y: uv12,
            }
        }
    }
}

impl OutlineExtrude {
    /// Extrude the builder's triangles and write the outline channels
    pub fn populate_mesh(&self, builder: &mut MeshBuilder) {
        if !self.enabled || builder.vertex_count() == 0 {
            return;
        }

        let width = self.width.clamp(0.0, MAX_OUTLINE_WIDTH);
        let mut stream = builder.vertex_stream();

        match self.mode {
            ExtrudeMode::Single => {
                let mut i = 0;
                while i + 3 <= stream.len() {
                    let group = &mut stream[i..i + 3];
                    let basis = EdgeBasis::of_triangle(&group[0], &group[1], &group[2]);
                    extrude_group(group, width, self.color, &[basis, basis], &[true; 3]);
                    i += 3;
                }
            }
            ExtrudeMode::ThreeColor => {
                let mut i = 0;
                while i + 6 <= stream.len() {
                    let upper = i % 12 < 6;
                    let mask = if upper {
                        [true, true, false, false, false, true]
                    } else {
                        [false, false, true, true, true, false]
                    };
                    let group = &mut stream[i..i + 6];
                    let first = EdgeBasis::of_triangle(&group[0], &group[1], &group[2]);
                    let second = EdgeBasis::of_triangle(&group[3], &group[4], &group[5]);
                    extrude_group(group, width, self.color, &[first, second], &mask);
                    i += 6;
                }
            }
        }

        builder.add_vertex_triangle_stream(&stream);
    }
}

/// Extrude one vertex group outward from its bounding-box center
///
/// `bases[0]` covers vertices 0..3, `bases[1]` vertices 3..6. Masked
/// vertices keep their position and UV but still receive the outline
/// channels.
fn extrude_group(
    group: &mut [MeshVertex],
    width: f32,
    color: Color,
    bases: &[EdgeBasis; 2],
    mask: &[bool],
) {
    let center = position_box_center(group);
    let (uv_min, uv_max) = uv_box(group);

    for (j, v) in group.iter_mut().enumerate() {
        let basis = &bases[j / 3];

        if mask[j] {
            let dx = if v.position.x > center.x { width } else { -width };
            let dy = if v.position.y > center.y { width } else { -width };
            v.position.x += dx;
            v.position.y += dy;

            let len_x = basis.tri_x.length().min(MAX_UV_EDGE_LENGTH);
            if len_x > 0.0 {
                let sign = if basis.tri_x.dot(Vec2::X) > 0.0 { 1.0 } else { -1.0 };
                v.uv = v.uv + basis.uv_x / len_x * (dx * sign);
            }
            let len_y = basis.tri_y.length().min(MAX_UV_EDGE_LENGTH);
            if len_y > 0.0 {
                let sign = if basis.tri_y.dot(Vec2::Y) > 0.0 { 1.0 } else { -1.0 };
                v.uv = v.uv + basis.uv_y / len_y * (dy * sign);
            }
        }

        v.outline = OutlineChannels {
            uv_min,
            uv_max,
            color,
            width,
        };
    }
}

fn position_box_center(group: &[MeshVertex]) -> Point {
    let mut min = group[0].position;
    let mut max = group[0].position;
    for v in &group[1..] {
        min.x = min.x.min(v.position.x);
        min.y = min.y.min(v.position.y);
        max.x = max.x.max(v.position.x);
        max.y = max.y.max(v.position.y);
    }
    Point::new((min.x + max.x) * 0.5, (min.y + max.y) * 0.5)
}

fn uv_box(group: &[MeshVertex]) -> (Vec2, Vec2) {
    let mut min = group[0].uv;
    let mut max = group[0].uv;
    for v in &group[1..] {
        min.x = min.x.min(v.uv.x);
        min.y = min.y.min(v.uv.y);
        max.x = max.x.max(v.uv.x);
        max.y = max.y.max(v.uv.y);
    }
    (min, max)
}
