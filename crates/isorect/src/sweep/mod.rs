//! Rectangle-union measure and contour via divide-and-conquer sweeps.
//!
//! Purpose
//! - One vertical-edge sweep (`stripes::partition`) builds the final stripe
//!   list; `stripes::covered_area` reads the measure off it and
//!   `contour::contour_length` runs the horizontal-edge sweep against the
//!   per-stripe boundary trees for the perimeter.
//!
//! The whole pass is a pure deterministic computation: no I/O, no shared
//! state beyond the per-run tree arena, `O(n log n)` recursion.

pub mod contour;
pub mod ctree;
pub mod stripes;

pub use contour::Segment;
pub use stripes::{covered_area, Lrps, Stripe};

use crate::geom::{horizontal_edges, vertical_edges, Edge, Interval, Rect};
use ctree::TreeArena;

/// Result of one run over a fixed rectangle set.
#[derive(Clone, Debug)]
pub struct UnionReport {
    /// Total area covered by the union.
    pub measure: f64,
    /// Total boundary length of the union.
    pub contour: f64,
    /// Contour draw segments: `w == 0` for vertical pieces, `h == 0` for
    /// horizontal ones.
    pub segments: Vec<Segment>,
}

/// Measure and contour of the union of `rects`.
///
/// Rectangles must be normalized (see [`Rect::normalized`]); the empty set
/// yields zeros.
pub fn measure_and_contour(rects: &[Rect]) -> UnionReport {
    if rects.is_empty() {
        return UnionReport {
            measure: 0.0,
            contour: 0.0,
            segments: Vec::new(),
        };
    }

    let mut vert: Vec<Edge> = rects.iter().flat_map(vertical_edges).collect();
    vert.sort_by(|a, b| a.cmp_sweep(b));
    let mut horiz: Vec<Edge> = rects.iter().flat_map(horizontal_edges).collect();
    horiz.sort_by(|a, b| a.cmp_sweep(b));

    let mut arena = TreeArena::new();
    let frame = Interval::new(f64::NEG_INFINITY, f64::INFINITY);
    let lrps = stripes::partition(&mut arena, &vert, frame);

    let measure = covered_area(&lrps.stripes);
    let (contour, segments) = contour::contour_length(&arena, &lrps.stripes, &horiz);

    UnionReport {
        measure,
        contour,
        segments,
    }
}

#[cfg(test)]
mod tests;
