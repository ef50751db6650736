//! Ring mesh demo
//!
//! Builds a ring mask mesh, reports buffer sizes, and probes the
//! containment test the way a host would hit-test pointer events.
//!
//! Run with: cargo run -p vexel_shapes --example ring_demo

use vexel_core::{Color, MeshBuilder, Point, RectBounds, Size};
use vexel_shapes::{FillMode, RadialMask};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let mut mask = RadialMask::new(1.0, FillMode::Ring, 20.0, 40);

    let mut builder = MeshBuilder::new();
    mask.populate_mesh(
        &mut builder,
        Point::new(0.5, 0.5),
        Size::new(100.0, 100.0),
        RectBounds::from_points(Point::ZERO, Point::new(1.0, 1.0)),
        Color::WHITE,
    );

    tracing::info!(
        vertices = builder.vertex_count(),
        triangles = builder.triangle_count(),
        "ring mesh built"
    );

    for probe in [
        Point::new(0.0, 0.0),
        Point::new(40.0, 0.0),
        Point::new(60.0, 0.0),
    ] {
        tracing::info!(
            x = probe.x,
            y = probe.y,
            inside = mask.contains(probe),
            "hit test"
        );
    }
}
