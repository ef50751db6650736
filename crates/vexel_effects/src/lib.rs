//! Vertex-stream post-processing effects
//!
//! Every effect here rewrites a populated [`vexel_core::MeshBuilder`]
//! in place: duplication-based outlines and drop shadows, per-vertex
//! gradient tints, glyph spacing, row-gradient quad rebuilds, and the
//! shader-outline triangle extruder.
//!
//! Effects compose by running in sequence over the same builder. When
//! [`QuadOutline::shader_extrusion`] is set, the intended order is the
//! quad gradient rebuild first and [`OutlineExtrude`] second, so the
//! extruder sees the rebuilt quads.

// ─────────────────────────────────────────────────────────────────────
// Modules
// ─────────────────────────────────────────────────────────────────────

mod extrude;
mod gradient;
mod outline;
mod quad_gradient;
mod shadow;
mod spacing;
mod stream;

// ─────────────────────────────────────────────────────────────────────
// Public API
// ─────────────────────────────────────────────────────────────────────

pub use extrude::{ExtrudeMode, OutlineExtrude, MAX_OUTLINE_WIDTH};
pub use gradient::{BlendMode, GradientSpec, VertexTint};
pub use outline::OutlineDuplicate;
pub use quad_gradient::{GradientQuad, QuadGradient, QuadOutline};
pub use shadow::DropShadow;
pub use spacing::GlyphSpacing;
pub use stream::MAX_EFFECT_OFFSET;
