//! Random rectangle sets (replay tokens).
//!
//! Deterministic generator for test cases and benchmarks: draws are
//! reproducible and indexable via a `(seed, index)` replay token mixed into a
//! single RNG. Degenerate draws (zero width or height) are rejected and
//! redrawn, so the output always holds exactly `n` normalized rectangles.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geom::Rect;

/// Generator configuration.
#[derive(Clone, Copy, Debug)]
pub struct GenCfg {
    pub coord_min: f64,
    pub coord_max: f64,
    /// Snap coordinates to the integer lattice. Integer coordinates are exact
    /// in `f64`, which keeps cross-checks against reference computations free
    /// of rounding slack.
    pub integer: bool,
}

impl Default for GenCfg {
    fn default() -> Self {
        Self {
            coord_min: -10.0,
            coord_max: 10.0,
            integer: true,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw `n` random normalized rectangles.
pub fn draw_rects(n: usize, cfg: GenCfg, tok: ReplayToken) -> Vec<Rect> {
    let mut rng = tok.to_std_rng();
    let lo = cfg.coord_min.min(cfg.coord_max);
    let hi = cfg.coord_max.max(cfg.coord_min);
    let mut out = Vec::with_capacity(n);
    while out.len() < n {
        let a = draw_coord(&mut rng, lo, hi, cfg.integer);
        let b = draw_coord(&mut rng, lo, hi, cfg.integer);
        let c = draw_coord(&mut rng, lo, hi, cfg.integer);
        let d = draw_coord(&mut rng, lo, hi, cfg.integer);
        if let Some(r) = Rect::normalized(a, b, c, d) {
            out.push(r);
        }
    }
    out
}

#[inline]
fn draw_coord(rng: &mut StdRng, lo: f64, hi: f64, integer: bool) -> f64 {
    if integer {
        rng.gen_range(lo.floor() as i64..=hi.ceil() as i64) as f64
    } else {
        rng.gen_range(lo..hi)
    }
}
