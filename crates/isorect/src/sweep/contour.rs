//! Contour extraction: second sweep over horizontal edges.
//!
//! Each final stripe's boundary tree flattens to a sorted leaf list bracketed
//! by ±∞; even-indexed consecutive pairs are the free (uncovered)
//! x-sub-intervals of that stripe. A horizontal rectangle edge is exposed
//! exactly where the stripe on its outer side is free, so the sweep matches
//! each edge against its adjacent stripe, clips the free intervals to the
//! edge span, coalesces same-row runs, and derives the vertical connector
//! pieces from where those runs start and stop.

use std::cmp::Ordering;

use super::ctree::TreeArena;
use super::stripes::Stripe;
use crate::geom::{Edge, Interval, Side};

/// Draw primitive for one contour piece: a degenerate rectangle with either
/// `w == 0` (vertical piece) or `h == 0` (horizontal piece).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

/// Raw horizontal contour piece before coalescing.
#[derive(Clone, Copy, Debug)]
struct Run {
    y: f64,
    x0: f64,
    x1: f64,
    side: Side,
}

/// Total contour length of the union plus its draw segments.
///
/// `stripes` is the final stripe list in ascending y order; `hedges` the
/// horizontal edges sorted by `Edge::cmp_sweep` (y, then bottom before top).
pub fn contour_length(
    arena: &TreeArena,
    stripes: &[Stripe],
    hedges: &[Edge],
) -> (f64, Vec<Segment>) {
    let leaves: Vec<Vec<f64>> = stripes
        .iter()
        .map(|s| {
            let mut lf = vec![f64::NEG_INFINITY];
            arena.collect_leaves(s.tree, &mut lf);
            lf.push(f64::INFINITY);
            lf
        })
        .collect();

    // Lock-step sweep: a bottom edge at height h is tested against the free
    // intervals of the stripe below it (y.hi == h), a top edge against the
    // stripe above (y.lo == h). Every edge height is a breakpoint copied
    // verbatim from the input, so the comparisons are exact.
    let mut runs: Vec<Run> = Vec::new();
    let (mut i, mut j) = (0usize, 0usize);
    while i < hedges.len() && j < stripes.len() {
        let e = &hedges[i];
        let boundary = match e.side {
            Side::Bottom => stripes[j].y.hi,
            Side::Top => stripes[j].y.lo,
            Side::Left | Side::Right => {
                debug_assert!(false, "vertical edge in contour sweep");
                i += 1;
                continue;
            }
        };
        match boundary.total_cmp(&e.coord) {
            Ordering::Less => j += 1,
            Ordering::Equal => {
                free_query(&e.span, &leaves[j], e.coord, e.side, &mut runs);
                i += 1;
            }
            Ordering::Greater => {
                // Geometry guarantees a match; reaching this is a logic bug.
                debug_assert!(false, "horizontal edge without matching stripe");
                i += 1;
            }
        }
    }
    if runs.is_empty() {
        return (0.0, Vec::new());
    }

    // Coalesce touching or overlapping runs of the same row and side.
    runs.sort_by(|a, b| {
        a.y.total_cmp(&b.y)
            .then_with(|| a.side.cmp(&b.side))
            .then_with(|| a.x0.total_cmp(&b.x0))
            .then_with(|| a.x1.total_cmp(&b.x1))
    });
    let mut total = 0.0;
    let mut segments: Vec<Segment> = Vec::new();
    let mut endpoints: Vec<(f64, f64)> = Vec::new();
    let mut cur = runs[0];
    for r in &runs[1..] {
        if r.y == cur.y && r.side == cur.side && cur.x1 >= r.x0 {
            cur.x1 = cur.x1.max(r.x1);
            continue;
        }
        total += flush_run(&cur, &mut segments, &mut endpoints);
        cur = *r;
    }
    total += flush_run(&cur, &mut segments, &mut endpoints);

    // Vertical connectors: adjacent run endpoints sharing an x pair up into
    // walls; exactly coincident pairs are two runs meeting at a point and
    // contribute no wall.
    endpoints.sort_by(|a, b| a.0.total_cmp(&b.0).then_with(|| a.1.total_cmp(&b.1)));
    let mut k = 0usize;
    while k + 1 < endpoints.len() {
        let (cx, cy) = endpoints[k];
        let (nx, ny) = endpoints[k + 1];
        if cx == nx && cy != ny {
            total += ny - cy;
            segments.push(Segment {
                x: cx,
                y: cy,
                w: 0.0,
                h: ny - cy,
            });
            k += 2;
        } else {
            k += 1;
        }
    }

    (total, segments)
}

/// Emit one coalesced horizontal run; returns its length.
fn flush_run(run: &Run, segments: &mut Vec<Segment>, endpoints: &mut Vec<(f64, f64)>) -> f64 {
    segments.push(Segment {
        x: run.x0,
        y: run.y,
        w: run.x1 - run.x0,
        h: 0.0,
    });
    endpoints.push((run.x0, run.y));
    endpoints.push((run.x1, run.y));
    run.x1 - run.x0
}

/// Push the free sub-intervals of `leaves` that intersect `span`, clipped to
/// it. `leaves` is sorted and ±∞-bracketed; free intervals sit at even
/// indices.
fn free_query(span: &Interval, leaves: &[f64], y: f64, side: Side, out: &mut Vec<Run>) {
    let n = leaves.len();
    let mut idx = leaves.partition_point(|&v| v < span.lo);
    if idx % 2 == 1 {
        idx -= 1;
    }
    let mut i = idx;
    while i + 1 < n {
        let cur = leaves[i];
        let nxt = leaves[i + 1];
        if cur >= span.hi {
            break;
        }
        // Duplicate leaves produce empty pairs; skip them.
        if cur < nxt && nxt > span.lo {
            out.push(Run {
                y,
                x0: cur.max(span.lo),
                x1: nxt.min(span.hi),
                side,
            });
        }
        i += 2;
    }
}
