//! Vertex model
//!
//! The working representation (`MeshVertex`) keeps outline metadata in
//! a dedicated typed struct instead of scattering it across spare
//! texture-coordinate/tangent/normal channels. The channel smuggling
//! the shader depends on happens in exactly one place: the conversion
//! to [`RawVertex`], the interleaved layout handed to the renderer.

use crate::color::Color;
use crate::geometry::{Point, Vec2};

/// Outline metadata carried per vertex for shader-side extrusion
///
/// Written by the triangle outline extruder; all-zero on vertices no
/// extrusion pass has touched.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OutlineChannels {
    /// Min corner of the group's original UV bounding box
    pub uv_min: Vec2,
    /// Max corner of the group's original UV bounding box
    pub uv_max: Vec2,
    /// Outline color the shader samples
    pub color: Color,
    /// Outline width in local units
    pub width: f32,
}

/// A mesh vertex in local rectangle space
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeshVertex {
    pub position: Point,
    pub color: Color,
    /// Primary texture coordinate
    pub uv: Vec2,
    pub outline: OutlineChannels,
}

impl MeshVertex {
    pub fn new(position: Point, color: Color, uv: Vec2) -> Self {
        Self {
            position,
            color,
            uv,
            outline: OutlineChannels::default(),
        }
    }
}

/// Interleaved vertex layout uploaded to the renderer
///
/// This is the serialization boundary for the spare-channel contract.
/// Channel meanings are fixed by effect type — the outline shader
/// reads them positionally, so the mapping below is an invariant, not
/// a convention:
///
/// - `position`: xy in local rectangle space, z always 0
/// - `color`: vertex RGBA
/// - `uv0`: primary texture coordinate
/// - `uv1` / `uv2`: outline UV-bounds min / max
/// - `uv3`: outline color R, G
/// - `tangent`: (0, 0, outline color B, outline color A)
/// - `normal`: (0, 0, outline width)
#[derive(Clone, Copy, Debug, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct RawVertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
    pub uv0: [f32; 2],
    pub uv1: [f32; 2],
    pub uv2: [f32; 2],
    pub uv3: [f32; 2],
    pub tangent: [f32; 4],
    pub normal: [f32; 3],
}

impl From<MeshVertex> for RawVertex {
    fn from(v: MeshVertex) -> Self {
        let o = v.outline;
        Self {
            position: [v.position.x, v.position.y, 0.0],
            color: v.color.to_array(),
            uv0: [v.uv.x, v.uv.y],
            uv1: [o.uv_min.x, o.uv_min.y],
            uv2: [o.uv_max.x, o.uv_max.y],
            uv3: [o.color.r, o.color.g],
            tangent: [0.0, 0.0, o.color.b, o.color.a],
            normal: [0.0, 0.0, o.width],
        }
    }
}

/// Pack a whole vertex stream for upload
pub fn pack_stream(stream: &[MeshVertex]) -> Vec<RawVertex> {
    stream.iter().copied().map(RawVertex::from).collect()
}
