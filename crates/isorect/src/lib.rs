//! Measure and contour of a union of iso-oriented rectangles.
//!
//! For a fixed set of axis-aligned rectangles this crate computes the total
//! covered area ("measure") and the total boundary length of the union
//! ("contour") with a single balanced divide-and-conquer sweep over vertical
//! edges plus a second sweep over horizontal edges, in `O(n log n)`.
//!
//! Entry point: [`sweep::measure_and_contour`]. Input and output persistence
//! live in the `cli` crate; this crate performs no I/O.

pub mod geom;
pub mod rand;
pub mod sweep;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom::{Interval, Rect};
pub use sweep::{measure_and_contour, Segment, UnionReport};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom::{Edge, Interval, Rect, Side};
    pub use crate::rand::{draw_rects, GenCfg, ReplayToken};
    pub use crate::sweep::{measure_and_contour, Segment, UnionReport};
}
