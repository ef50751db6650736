//! Mesh builder
//!
//! The shared vertex/triangle buffer every generator and effect reads
//! and writes. Generators populate it from scratch; effects either
//! mutate vertices in place by index or round-trip the whole buffer
//! through a flattened per-triangle vertex stream.

use crate::vertex::MeshVertex;

/// Mutable ordered vertex list plus triangle index list
///
/// Invariants:
/// - every stored index is < the vertex count at draw time (caller
///   precondition on [`add_triangle`](Self::add_triangle), checked
///   only in debug builds),
/// - [`clear`](Self::clear) resets both lists,
/// - after [`add_vertex_triangle_stream`](Self::add_vertex_triangle_stream)
///   the vertex count is a multiple of 3.
#[derive(Clone, Debug, Default)]
pub struct MeshBuilder {
    vertices: Vec<MeshVertex>,
    indices: Vec<u32>,
}

impl MeshBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty both buffers
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
    }

    /// Append a vertex, returning its index
    pub fn add_vertex(&mut self, v: MeshVertex) -> u32 {
        self.vertices.push(v);
        (self.vertices.len() - 1) as u32
    }

    /// Append a triangle as three vertex indices
    ///
    /// Indices must be in range by the time the mesh is consumed;
    /// this is a documented precondition, not a runtime check.
    pub fn add_triangle(&mut self, a: u32, b: u32, c: u32) {
        debug_assert!(
            (a as usize) < self.vertices.len()
                && (b as usize) < self.vertices.len()
                && (c as usize) < self.vertices.len(),
            "triangle index out of range"
        );
        self.indices.push(a);
        self.indices.push(b);
        self.indices.push(c);
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Borrow a vertex by index
    pub fn vertex(&self, i: usize) -> Option<&MeshVertex> {
        self.vertices.get(i)
    }

    /// Copy out a vertex by index
    pub fn populate_vertex(&self, i: usize) -> Option<MeshVertex> {
        self.vertices.get(i).copied()
    }

    /// Overwrite a vertex in place without changing buffer size
    ///
    /// Returns false (and leaves the buffer untouched) when the index
    /// is out of range.
    pub fn set_vertex(&mut self, i: usize, v: MeshVertex) -> bool {
        match self.vertices.get_mut(i) {
            Some(slot) => {
                *slot = v;
                true
            }
            None => false,
        }
    }

    /// Flatten all triangles into a per-triangle vertex sequence
    ///
    /// Each triangle's three vertices appear consecutively; vertices
    /// shared between triangles are duplicated.
    pub fn vertex_stream(&self) -> Vec<MeshVertex> {
        self.indices
            .iter()
            .map(|&i| self.vertices[i as usize])
            .collect()
    }

    /// Replace the buffer contents from a flattened triangle stream
    ///
    /// Consecutive vertex triples become triangles; the index list is
    /// rebuilt as 0..n. A trailing partial triple is dropped.
    pub fn add_vertex_triangle_stream(&mut self, stream: &[MeshVertex]) {
        let usable = stream.len() - stream.len() % 3;
        if usable < stream.len() {
            tracing::warn!(
                len = stream.len(),
                "vertex triangle stream is not a multiple of 3; dropping remainder"
            );
        }
        self.vertices.clear();
        self.vertices.extend_from_slice(&stream[..usable]);
        self.indices.clear();
        self.indices.extend(0..usable as u32);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::geometry::{Point, Vec2};

    fn vert(x: f32, y: f32) -> MeshVertex {
        MeshVertex::new(Point::new(x, y), Color::WHITE, Vec2::new(x, y))
    }

    fn quad_builder() -> MeshBuilder {
        let mut mb = MeshBuilder::new();
        let a = mb.add_vertex(vert(0.0, 0.0));
        let b = mb.add_vertex(vert(1.0, 0.0));
        let c = mb.add_vertex(vert(1.0, 1.0));
        let d = mb.add_vertex(vert(0.0, 1.0));
        mb.add_triangle(a, b, c);
        mb.add_triangle(c, d, a);
        mb
    }

    #[test]
    fn add_vertex_returns_sequential_indices() {
        let mut mb = MeshBuilder::new();
        assert_eq!(mb.add_vertex(vert(0.0, 0.0)), 0);
        assert_eq!(mb.add_vertex(vert(1.0, 0.0)), 1);
        assert_eq!(mb.vertex_count(), 2);
    }

    #[test]
    fn clear_resets_both_buffers() {
        let mut mb = quad_builder();
        mb.clear();
        assert_eq!(mb.vertex_count(), 0);
        assert_eq!(mb.index_count(), 0);
    }

    #[test]
    fn stream_duplicates_shared_vertices() {
        let mb = quad_builder();
        let stream = mb.vertex_stream();
        assert_eq!(stream.len(), 6);
        // Shared corners appear once per referencing triangle.
        assert_eq!(stream[2].position, stream[3].position);
        assert_eq!(stream[0].position, stream[5].position);
    }

    #[test]
    fn stream_round_trip_preserves_triangles() {
        let mb = quad_builder();
        let stream = mb.vertex_stream();

        let mut rebuilt = MeshBuilder::new();
        rebuilt.add_vertex_triangle_stream(&stream);
        assert_eq!(rebuilt.vertex_count(), 6);
        assert_eq!(rebuilt.triangle_count(), 2);
        assert_eq!(rebuilt.vertex_stream(), stream);
    }

    #[test]
    fn partial_triple_is_dropped() {
        let mut mb = MeshBuilder::new();
        let stream = vec![vert(0.0, 0.0); 8];
        mb.add_vertex_triangle_stream(&stream);
        assert_eq!(mb.vertex_count(), 6);
        assert_eq!(mb.vertex_count() % 3, 0);
    }

    #[test]
    fn set_vertex_is_in_place() {
        let mut mb = quad_builder();
        let count = mb.vertex_count();
        assert!(mb.set_vertex(1, vert(9.0, 9.0)));
        assert_eq!(mb.vertex_count(), count);
        assert_eq!(mb.vertex(1).unwrap().position, Point::new(9.0, 9.0));
        assert!(!mb.set_vertex(99, vert(0.0, 0.0)));
    }
}
