//! Basic types for the rectangle-union sweep.
//!
//! - `Interval`: half-open-ish span on one axis with total-order comparison.
//! - `Rect`: normalized axis-aligned rectangle.
//! - `Edge`: one directed rectangle boundary edge plus its partner coordinate,
//!   the unit both sweeps (vertical for measure, horizontal for contour) run over.

use std::cmp::Ordering;

/// Span `[lo, hi]` on one coordinate axis, `lo <= hi`.
///
/// Immutable once constructed. Ordering is lexicographic on `(lo, hi)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval {
    pub lo: f64,
    pub hi: f64,
}

impl Interval {
    #[inline]
    pub fn new(lo: f64, hi: f64) -> Self {
        debug_assert!(lo <= hi);
        Self { lo, hi }
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.hi - self.lo
    }

    /// True iff `other` lies within `self`.
    #[inline]
    pub fn contains(&self, other: &Interval) -> bool {
        self.lo <= other.lo && other.hi <= self.hi
    }

    /// Lexicographic `(lo, hi)` comparison with total float ordering.
    #[inline]
    pub fn cmp_lex(&self, other: &Interval) -> Ordering {
        self.lo
            .total_cmp(&other.lo)
            .then_with(|| self.hi.total_cmp(&other.hi))
    }
}

/// Axis-aligned rectangle, normalized so `x_left < x_right` and `y_bot < y_top`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x_left: f64,
    pub x_right: f64,
    pub y_bot: f64,
    pub y_top: f64,
}

impl Rect {
    /// Normalize swapped coordinate pairs; `None` for degenerate (zero
    /// width or height) rectangles, which carry no area and no boundary.
    pub fn normalized(xl: f64, xr: f64, yb: f64, yt: f64) -> Option<Self> {
        if xl == xr || yb == yt {
            return None;
        }
        let (x_left, x_right) = if xl < xr { (xl, xr) } else { (xr, xl) };
        let (y_bot, y_top) = if yb < yt { (yb, yt) } else { (yt, yb) };
        Some(Self {
            x_left,
            x_right,
            y_bot,
            y_top,
        })
    }

    #[inline]
    pub fn x_span(&self) -> Interval {
        Interval::new(self.x_left, self.x_right)
    }

    #[inline]
    pub fn y_span(&self) -> Interval {
        Interval::new(self.y_bot, self.y_top)
    }

    #[inline]
    pub fn area(&self) -> f64 {
        (self.x_right - self.x_left) * (self.y_top - self.y_bot)
    }
}

/// Which rectangle side an edge belongs to.
///
/// Declaration order is the sweep tiebreak for edges sharing a coordinate:
/// left before right openers, bottom before top when a rectangle's top
/// touches another's bottom.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Side {
    Left,
    Right,
    Bottom,
    Top,
}

/// One rectangle boundary edge.
///
/// For vertical edges `span` is the rectangle's y-span, `coord` the edge's
/// x-position and `partner` the opposite vertical edge's x-position. For
/// horizontal edges the roles of x and y swap.
#[derive(Clone, Copy, Debug)]
pub struct Edge {
    pub span: Interval,
    pub coord: f64,
    pub partner: f64,
    pub side: Side,
}

impl Edge {
    #[inline]
    pub fn new(span: Interval, coord: f64, partner: f64, side: Side) -> Self {
        Self {
            span,
            coord,
            partner,
            side,
        }
    }

    /// Sweep order: by `coord`, ties broken by `side`.
    #[inline]
    pub fn cmp_sweep(&self, other: &Edge) -> Ordering {
        self.coord
            .total_cmp(&other.coord)
            .then_with(|| self.side.cmp(&other.side))
    }
}

/// Both vertical edges of `rect`, unsorted.
pub fn vertical_edges(rect: &Rect) -> [Edge; 2] {
    let span = rect.y_span();
    [
        Edge::new(span, rect.x_left, rect.x_right, Side::Left),
        Edge::new(span, rect.x_right, rect.x_left, Side::Right),
    ]
}

/// Both horizontal edges of `rect`, unsorted.
pub fn horizontal_edges(rect: &Rect) -> [Edge; 2] {
    let span = rect.x_span();
    [
        Edge::new(span, rect.y_bot, rect.y_top, Side::Bottom),
        Edge::new(span, rect.y_top, rect.y_bot, Side::Top),
    ]
}
