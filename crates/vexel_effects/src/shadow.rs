//! Drop shadow by duplication
//!
//! A single-direction duplicate of the existing geometry whose color
//! comes from the corner-gradient remap instead of a flat color, so
//! the shadow itself can carry a gradient.

use crate::gradient::GradientSpec;
use crate::stream::{duplicate_pass, MAX_EFFECT_OFFSET};
use vexel_core::{MeshBuilder, Point, RectBounds, Size, Vec2};

/// Gradient drop-shadow effect
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DropShadow {
    pub enabled: bool,
    /// Corner colors for the shadow gradient; the blend mode is
    /// ignored — the shadow takes the pure remapped color
    pub gradient: GradientSpec,
    /// Shadow offset; each axis is clamped to ±600 units
    pub offset: Vec2,
}

impl Default for DropShadow {
    fn default() -> Self {
        Self {
            enabled: false,
            gradient: GradientSpec::default(),
            offset: Vec2::new(1.0, -1.0),
        }
    }
}

impl DropShadow {
    /// Duplicate the builder's geometry once at the shadow offset
    ///
    /// The duplicate's color is the gradient remap evaluated at the
    /// duplicate's offset position against the host rectangle's
    /// bounds. Originals end up after the shadow range, so the shadow
    /// renders behind.
    pub fn populate_mesh(&self, builder: &mut MeshBuilder, pivot: Point, size: Size) {
        if !self.enabled || builder.vertex_count() == 0 {
            return;
        }

        let bounds = RectBounds::from_pivot_size(pivot, size);
        let mut stream = builder.vertex_stream();
        let offset = self.offset.clamp_abs(MAX_EFFECT_OFFSET);

        let end = stream.len();
        duplicate_pass(&mut stream, 0, end, offset, |_, pos| {
            self.gradient.remap(bounds, pos)
        });

        builder.add_vertex_triangle_stream(&stream);
    }
}
