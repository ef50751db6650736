//! Vexel shape generators
//!
//! Mesh generators that populate a [`vexel_core::MeshBuilder`] from
//! scratch for one host-driven rebuild pass:
//!
//! - [`RoundedRect`] — rectangle with filleted corners (body + four
//!   quarter-circle fans)
//! - [`RadialMask`] — circular/sector discs and rings, with an
//!   even-odd containment test against the cached boundary polygons
//!
//! Out-of-range parameters are clamped, never rejected: an invalid
//! configuration degrades to a visually-inert mesh rather than
//! failing the host's rendering pass.

pub mod radial_mask;
pub mod rounded_rect;

pub use radial_mask::{contains, FillMode, RadialMask};
pub use rounded_rect::{RoundedRect, MAX_CORNER_RESOLUTION};
