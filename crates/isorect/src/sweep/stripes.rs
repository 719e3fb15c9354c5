//! Divide-and-conquer stripe partition over vertical edges.
//!
//! Purpose
//! - Recursively split the sorted vertical-edge list into balanced halves,
//!   solve each half for its x-frame, and merge the sibling results into one
//!   `Lrps` record per frame: escaping edges, y-breakpoints, and stripes with
//!   covered x-length plus boundary tree.
//!
//! Why this shape
//! - The duplicate-aware median split keeps the recursion depth logarithmic
//!   even when many edges share an x-coordinate; a plain midpoint split on the
//!   sorted list degrades to linear depth there.
//! - Escaping edges (partner outside the merged frame) are exactly the edges
//!   that fully cross the sibling half, which is what "blacken" consumes.
//!
//! References
//! - Code cross-refs: `ctree::TreeArena`, `contour::contour_length`.

use std::cmp::Ordering;

use super::ctree::{BoundKind, NodeId, TreeArena};
use crate::geom::{Edge, Interval, Side};

/// One horizontal band of the current frame: its x-frame, its y-cell, the
/// total x-length covered by rectangles inside it, and the boundary tree
/// recording where coverage toggles. `tree` is `None` iff no toggle point of
/// this frame falls inside the stripe.
#[derive(Clone, Copy, Debug)]
pub struct Stripe {
    pub x: Interval,
    pub y: Interval,
    pub cover: f64,
    pub tree: Option<NodeId>,
}

/// Result of solving one frame: `left`/`right` hold vertical edges whose
/// partner lies outside the frame, `ybreaks` the sorted de-duplicated
/// y-breakpoints bracketed by ±∞, and `stripes` one entry per breakpoint cell
/// in increasing y order.
#[derive(Debug, Default)]
pub struct Lrps {
    pub left: Vec<Edge>,
    pub right: Vec<Edge>,
    pub ybreaks: Vec<f64>,
    pub stripes: Vec<Stripe>,
}

/// Cells of a breakpoint list: consecutive pairs as intervals.
#[inline]
pub(crate) fn cells(ybreaks: &[f64]) -> impl Iterator<Item = Interval> + '_ {
    ybreaks.windows(2).map(|w| Interval::new(w[0], w[1]))
}

/// Solve `edges` (sorted by `Edge::cmp_sweep`, non-empty, all vertical, all
/// x-positions inside `frame`) for `frame`.
pub fn partition(arena: &mut TreeArena, edges: &[Edge], frame: Interval) -> Lrps {
    debug_assert!(!edges.is_empty());
    let out = if edges.len() == 1 {
        single_edge(arena, edges[0], frame)
    } else {
        let split = split_index(edges);
        let (v1, v2) = edges.split_at(split);
        // Frames meet halfway between the two boundary coordinates; the split
        // index guarantees those coordinates differ.
        let xm = (v1[v1.len() - 1].coord + v2[0].coord) / 2.0;
        let a = partition(arena, v1, Interval::new(frame.lo, xm));
        let b = partition(arena, v2, Interval::new(xm, frame.hi));
        merge(arena, a, b, frame, xm)
    };
    debug_assert_eq!(out.ybreaks.first().copied(), Some(f64::NEG_INFINITY));
    debug_assert_eq!(out.ybreaks.last().copied(), Some(f64::INFINITY));
    debug_assert_eq!(out.stripes.len(), out.ybreaks.len() - 1);
    out
}

/// Base case: one edge whose partner lies outside the frame by definition.
fn single_edge(arena: &mut TreeArena, e: Edge, frame: Interval) -> Lrps {
    let mut out = Lrps {
        ybreaks: vec![f64::NEG_INFINITY, e.span.lo, e.span.hi, f64::INFINITY],
        ..Lrps::default()
    };
    match e.side {
        Side::Left => out.left.push(e),
        Side::Right => out.right.push(e),
        Side::Bottom | Side::Top => {
            debug_assert!(false, "horizontal edge in vertical sweep")
        }
    }
    for y in cells(&out.ybreaks) {
        let stripe = if y == e.span {
            // A left edge covers from its position to the frame's right end,
            // a right edge from the frame's left end to its position.
            match e.side {
                Side::Left => Stripe {
                    x: frame,
                    y,
                    cover: frame.hi - e.coord,
                    tree: Some(arena.leaf(e.coord, BoundKind::Left)),
                },
                _ => Stripe {
                    x: frame,
                    y,
                    cover: e.coord - frame.lo,
                    tree: Some(arena.leaf(e.coord, BoundKind::Right)),
                },
            }
        } else {
            Stripe {
                x: frame,
                y,
                cover: 0.0,
                tree: None,
            }
        };
        out.stripes.push(stripe);
    }
    out
}

/// Split index for the recursive case (`edges.len() >= 2`).
///
/// Bisect the list, but when a run of equal x-coordinates straddles the
/// midpoint, compare the two splits that keep the whole run on one side and
/// take the one with the smaller size imbalance. A run touching either end of
/// the list forces the split that keeps it intact.
fn split_index(edges: &[Edge]) -> usize {
    let n = edges.len();
    let mid = n / 2 - 1;
    let x_mid = edges[mid].coord;
    if edges[0].coord == edges[n - 1].coord || x_mid != edges[mid + 1].coord {
        return mid + 1;
    }
    let mut c1 = 0usize;
    let mut i = mid;
    while i >= 1 && edges[i].coord == x_mid {
        c1 += 1;
        i -= 1;
    }
    let mut c2 = 0usize;
    let mut i = mid + 1;
    while i + 1 < n && edges[i].coord == x_mid {
        c2 += 1;
        i += 1;
    }
    let t1 = mid + c2 + 1; // run goes left
    let t3 = mid + 1 - c1; // run goes right
    let ch1 = (2 * t1 as isize - n as isize).unsigned_abs();
    let ch2 = (2 * t3 as isize - n as isize).unsigned_abs();
    if edges[n - 1].coord == x_mid {
        t3
    } else if edges[0].coord == x_mid {
        t1
    } else if ch1 <= ch2 {
        t1
    } else {
        t3
    }
}

/// Merge two sibling results split at `xm` into the result for `frame`.
fn merge(arena: &mut TreeArena, a: Lrps, b: Lrps, frame: Interval, xm: f64) -> Lrps {
    let Lrps {
        left: l1,
        right: r1,
        ybreaks: p1,
        stripes: s1,
    } = a;
    let Lrps {
        left: l2,
        right: r2,
        ybreaks: p2,
        stripes: s2,
    } = b;

    // Survivors of the left child's left-escapers: partner beyond the merged
    // frame. The rest closed inside the right half and are fully accounted
    // for there. Survivors are also the edges crossing the entire right half,
    // so they double as the blackening set for the right stripes. Symmetric
    // for the right child's right-escapers.
    let l1c: Vec<Edge> = l1.into_iter().filter(|e| e.partner > frame.hi).collect();
    let r2c: Vec<Edge> = r2.into_iter().filter(|e| e.partner < frame.lo).collect();

    let mut left = l1c.clone();
    left.extend(l2);
    let mut right = r1;
    right.extend(r2c.iter().copied());

    let ybreaks = union_sorted(&p1, &p2);
    let mut sl = regrid(s1, &ybreaks, Interval::new(frame.lo, xm));
    let mut sr = regrid(s2, &ybreaks, Interval::new(xm, frame.hi));
    blacken(&mut sl, &r2c);
    blacken(&mut sr, &l1c);
    let stripes = concat(arena, &sl, &sr, &ybreaks, frame);

    Lrps {
        left,
        right,
        ybreaks,
        stripes,
    }
}

/// Union of two sorted, de-duplicated breakpoint lists.
fn union_sorted(a: &[f64], b: &[f64]) -> Vec<f64> {
    let mut out = Vec::with_capacity(a.len() + b.len());
    let (mut i, mut j) = (0usize, 0usize);
    while i < a.len() && j < b.len() {
        match a[i].total_cmp(&b[j]) {
            Ordering::Less => {
                out.push(a[i]);
                i += 1;
            }
            Ordering::Greater => {
                out.push(b[j]);
                j += 1;
            }
            Ordering::Equal => {
                out.push(a[i]);
                i += 1;
                j += 1;
            }
        }
    }
    out.extend_from_slice(&a[i..]);
    out.extend_from_slice(&b[j..]);
    out
}

/// Re-grid `old` onto the refined breakpoints: every new cell contained in an
/// old stripe's y-interval inherits its cover and tree (trees are shared by
/// arena id when one old stripe maps to several cells); cells outside any old
/// stripe become zero-cover placeholders.
fn regrid(old: Vec<Stripe>, ybreaks: &[f64], frame: Interval) -> Vec<Stripe> {
    let mut out: Vec<Stripe> = cells(ybreaks)
        .map(|y| Stripe {
            x: frame,
            y,
            cover: 0.0,
            tree: None,
        })
        .collect();
    let (mut i, mut j) = (0usize, 0usize);
    while i < old.len() && j < out.len() {
        if old[i].y.contains(&out[j].y) {
            out[j].cover = old[i].cover;
            out[j].tree = old[i].tree;
            j += 1;
        } else {
            i += 1;
        }
    }
    out
}

/// Mark stripes whose full y-interval is crossed by one of `edges` as fully
/// covered: cover becomes the stripe's x-width and the boundary tree empties
/// (the covering rectangle's toggle points lie outside this frame).
///
/// Bottom-to-top sweep: stripes are in ascending y order, spans are sorted by
/// `(lo, hi)`; a stripe is crossed iff some span with `lo <= stripe.y.lo` has
/// `hi >= stripe.y.hi`, so the running maximum of opened tops suffices.
fn blacken(stripes: &mut [Stripe], edges: &[Edge]) {
    if edges.is_empty() {
        return;
    }
    let mut spans: Vec<Interval> = edges.iter().map(|e| e.span).collect();
    spans.sort_by(|a, b| a.cmp_lex(b));
    let mut i = 0usize;
    let mut max_top = f64::NEG_INFINITY;
    for s in stripes.iter_mut() {
        while i < spans.len() && spans[i].lo <= s.y.lo {
            max_top = max_top.max(spans[i].hi);
            i += 1;
        }
        if max_top >= s.y.hi {
            s.cover = s.x.width();
            s.tree = None;
        }
    }
}

/// Concatenate re-gridded sibling stripes cell by cell: covers add, trees
/// join under a merge node when both sides carry one (ownership of both
/// subtrees moves into the new node).
fn concat(
    arena: &mut TreeArena,
    sl: &[Stripe],
    sr: &[Stripe],
    ybreaks: &[f64],
    frame: Interval,
) -> Vec<Stripe> {
    debug_assert_eq!(sl.len(), sr.len());
    let mut out = Vec::with_capacity(sl.len());
    for ((a, b), y) in sl.iter().zip(sr).zip(cells(ybreaks)) {
        let tree = match (a.tree, b.tree) {
            (Some(l), Some(r)) => Some(arena.merge(l, r)),
            (t, None) => t,
            (None, t) => t,
        };
        out.push(Stripe {
            x: frame,
            y,
            cover: a.cover + b.cover,
            tree,
        });
    }
    out
}

/// Total covered area: Σ cover × cell height.
///
/// Exact-zero covers are skipped; the ±∞ border cells have zero cover and
/// infinite height, and `0 × ∞` is NaN.
pub fn covered_area(stripes: &[Stripe]) -> f64 {
    stripes
        .iter()
        .filter(|s| s.cover != 0.0)
        .map(|s| s.cover * s.y.width())
        .sum()
}
