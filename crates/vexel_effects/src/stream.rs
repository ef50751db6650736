//! Stream duplication pass shared by the outline and shadow effects
//!
//! The pass walks a range of the stream that currently holds the
//! originals, appends a pristine copy of each vertex to the end, and
//! replaces the walked slot with the offset, recolored duplicate. The
//! originals therefore accumulate at the tail and are emitted last —
//! which is what makes them render on top of every duplicate range.

use vexel_core::{Color, MeshVertex, Vec2};

/// Maximum per-axis offset any duplication effect accepts
pub const MAX_EFFECT_OFFSET: f32 = 600.0;

/// Run one duplication pass over `stream[start..end]`
///
/// `recolor` receives the pristine original and the duplicate's
/// already-offset position, and returns the duplicate's color.
pub(crate) fn duplicate_pass<F>(
    stream: &mut Vec<MeshVertex>,
    start: usize,
    end: usize,
    offset: Vec2,
    mut recolor: F,
) where
    F: FnMut(&MeshVertex, vexel_core::Point) -> Color,
{
    stream.reserve(end - start);
    for i in start..end {
        let original = stream[i];
        stream.push(original);

        let mut duplicate = original;
        duplicate.position = original.position.offset(offset);
        duplicate.color = recolor(&original, duplicate.position);
        stream[i] = duplicate;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vexel_core::Point;

    #[test]
    fn pass_replaces_range_and_appends_originals() {
        let mut stream = vec![
            MeshVertex::new(Point::new(0.0, 0.0), Color::WHITE, Vec2::ZERO),
            MeshVertex::new(Point::new(1.0, 0.0), Color::WHITE, Vec2::ZERO),
            MeshVertex::new(Point::new(0.0, 1.0), Color::WHITE, Vec2::ZERO),
        ];
        duplicate_pass(&mut stream, 0, 3, Vec2::new(2.0, -2.0), |_, _| Color::RED);

        assert_eq!(stream.len(), 6);
        // Walked slots hold the offset duplicates...
        assert_eq!(stream[0].position, Point::new(2.0, -2.0));
        assert_eq!(stream[0].color, Color::RED);
        // ...and the pristine originals sit at the tail.
        assert_eq!(stream[3].position, Point::new(0.0, 0.0));
        assert_eq!(stream[3].color, Color::WHITE);
    }
}
