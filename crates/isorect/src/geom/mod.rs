//! Geometry primitives for iso-oriented rectangles.
//!
//! Purpose
//! - Provide the small value types (`Interval`, `Rect`, `Edge`, `Side`) that
//!   both sweeps consume, with all coordinate normalization done at
//!   construction so the sweep code can rely on `lo <= hi` everywhere.
//!
//! References
//! - Code cross-refs: `sweep::stripes` (vertical sweep), `sweep::contour`
//!   (horizontal sweep).

mod types;

pub use types::{horizontal_edges, vertical_edges, Edge, Interval, Rect, Side};

#[cfg(test)]
mod tests;
