//! Rounded-rectangle mesh generator
//!
//! Builds a closed rectangle mesh with filleted corners: a 12-vertex
//! body covering the cross-shaped interior plus one quarter-circle
//! triangle fan per corner. UV coordinates are scaled by
//! `radius / edge length` so overlay-texture sampling stays locally
//! consistent across body and fans.

use smallvec::SmallVec;
use vexel_core::{Color, MeshBuilder, MeshVertex, Point, RectBounds, Vec2};

/// Hard cap on the per-corner fan resolution
pub const MAX_CORNER_RESOLUTION: u32 = 20;

/// Rounded-rectangle generator parameters
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundedRect {
    /// Corner fillet radius, clamped per call to half the shorter
    /// rectangle dimension
    pub radius: f32,
    /// Triangles per corner fan, clamped to [`MAX_CORNER_RESOLUTION`].
    /// 0 degenerates to a single radius point per corner (no fan).
    pub corner_resolution: u32,
}

impl Default for RoundedRect {
    fn default() -> Self {
        Self {
            radius: 20.0,
            corner_resolution: 5,
        }
    }
}

impl RoundedRect {
    /// Populate `builder` with the rounded-rect mesh
    ///
    /// `bounds` is the rectangle in local space, `uv` the overlay
    /// texture's UV rectangle (all-zero when untextured). The builder
    /// is cleared first; the generator owns the buffer for the pass.
    pub fn populate_mesh(
        &self,
        builder: &mut MeshBuilder,
        bounds: RectBounds,
        uv: RectBounds,
        color: Color,
    ) {
        builder.clear();

        let radius = self.radius.clamp(0.0, bounds.size().min_side() / 2.0);
        if radius != self.radius {
            tracing::trace!(radius, requested = self.radius, "corner radius clamped");
        }
        let resolution = self.corner_resolution.min(MAX_CORNER_RESOLUTION);

        // UV extent covered by one radius along each axis.
        let uv_radius = Vec2::new(
            if bounds.width() > 0.0 {
                radius / bounds.width() * uv.width()
            } else {
                0.0
            },
            if bounds.height() > 0.0 {
                radius / bounds.height() * uv.height()
            } else {
                0.0
            },
        );

        self.add_body(builder, bounds, uv, color, radius, uv_radius);
        self.add_corner_fans(builder, bounds, uv, color, radius, uv_radius, resolution);
    }

    /// Expected vertex count for a given resolution: body(12) plus
    /// four fans of `resolution + 1` arc vertices each
    pub fn vertex_count(resolution: u32) -> usize {
        12 + 4 * (resolution.min(MAX_CORNER_RESOLUTION) as usize + 1)
    }

    /// The two interior rectangles (a vertical band flanked by two
    /// side bands) that together cover everything but the corners
    #[allow(clippy::too_many_arguments)]
    fn add_body(
        &self,
        builder: &mut MeshBuilder,
        b: RectBounds,
        uv: RectBounds,
        color: Color,
        r: f32,
        uv_r: Vec2,
    ) {
        let verts = [
            (b.min.x, b.max.y - r, uv.min.x, uv.max.y - uv_r.y),
            (b.min.x, b.min.y + r, uv.min.x, uv.min.y + uv_r.y),
            (b.min.x + r, b.max.y, uv.min.x + uv_r.x, uv.max.y),
            (b.min.x + r, b.max.y - r, uv.min.x + uv_r.x, uv.max.y - uv_r.y),
            (b.min.x + r, b.min.y + r, uv.min.x + uv_r.x, uv.min.y + uv_r.y),
            (b.min.x + r, b.min.y, uv.min.x + uv_r.x, uv.min.y),
            (b.max.x - r, b.max.y, uv.max.x - uv_r.x, uv.max.y),
            (b.max.x - r, b.max.y - r, uv.max.x - uv_r.x, uv.max.y - uv_r.y),
            (b.max.x - r, b.min.y + r, uv.max.x - uv_r.x, uv.min.y + uv_r.y),
            (b.max.x - r, b.min.y, uv.max.x - uv_r.x, uv.min.y),
            (b.max.x, b.max.y - r, uv.max.x, uv.max.y - uv_r.y),
            (b.max.x, b.min.y + r, uv.max.x, uv.min.y + uv_r.y),
        ];
        for (x, y, u, v) in verts {
            builder.add_vertex(MeshVertex::new(Point::new(x, y), color, Vec2::new(u, v)));
        }

        const BODY_TRIANGLES: [(u32, u32, u32); 6] = [
            (1, 0, 3),
            (1, 3, 4),
            (5, 2, 6),
            (5, 6, 9),
            (8, 7, 10),
            (8, 10, 11),
        ];
        for (a, b, c) in BODY_TRIANGLES {
            builder.add_triangle(a, b, c);
        }
    }

    /// Quarter-circle fans, one per corner, swept counter-clockwise
    /// starting from the top-right corner. The sweep angle is
    /// cumulative: fan `i` covers `[i*PI/2, (i+1)*PI/2]`.
    #[allow(clippy::too_many_arguments)]
    fn add_corner_fans(
        &self,
        builder: &mut MeshBuilder,
        b: RectBounds,
        uv: RectBounds,
        color: Color,
        r: f32,
        uv_r: Vec2,
        resolution: u32,
    ) {
        let centers: SmallVec<[Point; 4]> = SmallVec::from_buf([
            Point::new(b.max.x - r, b.max.y - r),
            Point::new(b.min.x + r, b.max.y - r),
            Point::new(b.min.x + r, b.min.y + r),
            Point::new(b.max.x - r, b.min.y + r),
        ]);
        let uv_centers: SmallVec<[Vec2; 4]> = SmallVec::from_buf([
            Vec2::new(uv.max.x - uv_r.x, uv.max.y - uv_r.y),
            Vec2::new(uv.min.x + uv_r.x, uv.max.y - uv_r.y),
            Vec2::new(uv.min.x + uv_r.x, uv.min.y + uv_r.y),
            Vec2::new(uv.max.x - uv_r.x, uv.min.y + uv_r.y),
        ]);
        // Fan apexes are the body's four inner-corner vertices.
        const APEX: [u32; 4] = [7, 3, 4, 8];

        for corner in 0..4 {
            let first = builder.vertex_count() as u32;
            let start = corner as f32 * std::f32::consts::FRAC_PI_2;

            if resolution == 0 {
                // Degenerate fan: a single radius point, no triangles.
                let pos = Point::new(
                    centers[corner].x + start.cos() * r,
                    centers[corner].y + start.sin() * r,
                );
                let uv_pos = Vec2::new(
                    uv_centers[corner].x + start.cos() * uv_r.x,
                    uv_centers[corner].y + start.sin() * uv_r.y,
                );
                builder.add_vertex(MeshVertex::new(pos, color, uv_pos));
                continue;
            }

            let step = std::f32::consts::FRAC_PI_2 / resolution as f32;
            for j in 0..=resolution {
                let angle = start + j as f32 * step;
                let (sin, cos) = angle.sin_cos();
                let pos = Point::new(centers[corner].x + cos * r, centers[corner].y + sin * r);
                let uv_pos = Vec2::new(
                    uv_centers[corner].x + cos * uv_r.x,
                    uv_centers[corner].y + sin * uv_r.y,
                );
                builder.add_vertex(MeshVertex::new(pos, color, uv_pos));
            }
            for j in 0..resolution {
                builder.add_triangle(APEX[corner], first + j + 1, first + j);
            }
        }
    }
}
