//! Vexel core types
//!
//! The shared vocabulary of the Vexel mesh engine: a mutable
//! vertex/triangle buffer ([`MeshBuilder`]), the vertex model with its
//! typed outline side-channel ([`MeshVertex`], [`OutlineChannels`],
//! [`RawVertex`]), and the 2D geometry/color primitives every
//! generator and effect computes with.
//!
//! Everything here is pure, synchronous, call-and-return computation.
//! Nothing allocates outside the buffers the caller can see, nothing
//! blocks, and nothing errors: invalid configuration degrades to a
//! clamped or pass-through result (see the crate-level docs of
//! `vexel_shapes` and `vexel_effects`).

pub mod color;
pub mod geometry;
pub mod mesh;
pub mod vertex;

pub use color::Color;
pub use geometry::{Point, RectBounds, Size, Vec2};
pub use mesh::MeshBuilder;
pub use vertex::{pack_stream, MeshVertex, OutlineChannels, RawVertex};
