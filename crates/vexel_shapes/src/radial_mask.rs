//! Radial mask generator and containment test
//!
//! Builds circular/sector discs and rings. The generator caches the
//! inner/outer boundary polygons it emitted so the companion hit-test
//! can answer "is this point inside the visible shape" — including
//! reporting the hole of a ring as outside.

use vexel_core::{Color, MeshBuilder, MeshVertex, Point, RectBounds, Size, Vec2};

/// Disc versus ring emission
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FillMode {
    /// Solid disc (or sector for partial fill), fan-triangulated from
    /// the center
    #[default]
    Disc,
    /// Ring of `ring_width`, emitted as a quad strip
    Ring,
}

/// Radial mask generator
///
/// Stateless per call except for the cached boundary rings, which are
/// replaced wholesale on every [`populate_mesh`](Self::populate_mesh)
/// and consumed by [`contains`](Self::contains).
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RadialMask {
    /// Fraction of the full circle swept, clamped to [0, 1]
    pub fill_percent: f32,
    pub mode: FillMode,
    /// Ring thickness, clamped per call to half the rectangle's
    /// shorter side
    pub ring_width: f32,
    /// Arc segment count, clamped to [3, 100]
    pub segments: u32,

    #[cfg_attr(feature = "serde", serde(skip))]
    inner_ring: Vec<Point>,
    #[cfg_attr(feature = "serde", serde(skip))]
    outer_ring: Vec<Point>,
}

impl Default for RadialMask {
    fn default() -> Self {
        Self {
            fill_percent: 1.0,
            mode: FillMode::Disc,
            ring_width: 5.0,
            segments: 20,
            inner_ring: Vec::new(),
            outer_ring: Vec::new(),
        }
    }
}

impl RadialMask {
    /// Generator with the given parameters and empty ring caches
    pub fn new(fill_percent: f32, mode: FillMode, ring_width: f32, segments: u32) -> Self {
        Self {
            fill_percent,
            mode,
            ring_width,
            segments,
            inner_ring: Vec::new(),
            outer_ring: Vec::new(),
        }
    }

    /// Boundary polygons captured by the last mesh rebuild
    pub fn rings(&self) -> (&[Point], &[Point]) {
        (&self.inner_ring, &self.outer_ring)
    }

    /// Populate `builder` with the disc/ring mesh
    ///
    /// The host rectangle arrives as pivot + size; the outer radius is
    /// the pivot-to-edge distance `pivot.x * size.width`. `uv` is the
    /// overlay texture's UV rectangle; vertex UVs map local positions
    /// through independent X/Y scale factors centered on the UV
    /// rectangle's midpoint.
    pub fn populate_mesh(
        &mut self,
        builder: &mut MeshBuilder,
        pivot: Point,
        size: Size,
        uv: RectBounds,
        color: Color,
    ) {
        builder.clear();
        self.inner_ring.clear();
        self.outer_ring.clear();

        let segments = self.segments.clamp(3, 100);
        let fill = self.fill_percent.clamp(0.0, 1.0);
        let ring_width = self.ring_width.clamp(0.0, size.min_side() / 2.0);
        if ring_width != self.ring_width {
            tracing::trace!(ring_width, requested = self.ring_width, "ring width clamped");
        }

        let outer_radius = pivot.x * size.width;
        let inner_radius = outer_radius - ring_width;

        let uv_center = uv.center();
        let uv_scale = Vec2::new(
            if size.width > 0.0 {
                uv.width() / size.width
            } else {
                0.0
            },
            if size.height > 0.0 {
                uv.height() / size.height
            } else {
                0.0
            },
        );
        let map_uv =
            |p: Point| Vec2::new(p.x * uv_scale.x + uv_center.x, p.y * uv_scale.y + uv_center.y);

        let step = 2.0 * std::f32::consts::PI / segments as f32;
        let active = (segments as f32 * fill) as u32;
        let closed = fill >= 1.0;

        match self.mode {
            FillMode::Disc => {
                builder.add_vertex(MeshVertex::new(Point::ZERO, color, map_uv(Point::ZERO)));

                for i in 0..active {
                    let (sin, cos) = (i as f32 * step).sin_cos();
                    let p = Point::new(cos * outer_radius, sin * outer_radius);
                    builder.add_vertex(MeshVertex::new(p, color, map_uv(p)));
                    self.outer_ring.push(p);
                }

                for i in 1..active {
                    builder.add_triangle(0, i, i + 1);
                }
                if closed && active > 0 {
                    builder.add_triangle(0, active, 1);
                }
            }
            FillMode::Ring => {
                for i in 0..active {
                    let (sin, cos) = (i as f32 * step).sin_cos();

                    let inner = Point::new(cos * inner_radius, sin * inner_radius);
                    builder.add_vertex(MeshVertex::new(inner, color, map_uv(inner)));
                    self.inner_ring.push(inner);

                    let outer = Point::new(cos * outer_radius, sin * outer_radius);
                    builder.add_vertex(MeshVertex::new(outer, color, map_uv(outer)));
                    self.outer_ring.push(outer);
                }

                for i in 0..active.saturating_sub(1) {
                    builder.add_triangle(i * 2 + 1, i * 2, i * 2 + 3);
                    builder.add_triangle(i * 2, i * 2 + 2, i * 2 + 3);
                }
                if closed && active > 0 {
                    builder.add_triangle(active * 2 - 1, active * 2 - 2, 1);
                    builder.add_triangle(active * 2 - 2, 0, 1);
                }
            }
        }
    }

    /// Hit-test a local point against the cached boundary rings
    pub fn contains(&self, p: Point) -> bool {
        contains(p, &self.inner_ring, &self.outer_ring)
    }
}

/// Even-odd containment test against a pair of boundary rings
///
/// Counts horizontal-ray crossings against both rings and sums the
/// parity: a point inside a ring's hole crosses the inner boundary
/// once and the outer boundary once — an even total, so it is outside,
/// even though the outer boundary alone would call it inside.
pub fn contains(p: Point, inner_ring: &[Point], outer_ring: &[Point]) -> bool {
    let crossings = ray_crossings(p, inner_ring) + ray_crossings(p, outer_ring);
    crossings % 2 == 1
}

/// Crossings of the rightward horizontal ray from `p` with a closed
/// polygon
///
/// Horizontal edges (`v1.y == v2.y`) satisfy neither half-open span
/// check and never register a crossing, which also keeps the
/// intersection divide well-defined.
fn ray_crossings(p: Point, vertices: &[Point]) -> u32 {
    let mut crossings = 0;
    for (i, &v1) in vertices.iter().enumerate() {
        let v2 = vertices[(i + 1) % vertices.len()];
        let spans = (v1.y <= p.y && v2.y > p.y) || (v1.y > p.y && v2.y <= p.y);
        if spans && p.x < v1.x + (p.y - v1.y) / (v2.y - v1.y) * (v2.x - v1.x) {
            crossings += 1;
        }
    }
    crossings
}
