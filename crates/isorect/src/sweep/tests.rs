use super::*;
use crate::geom::vertical_edges;
use crate::rand::{draw_rects, GenCfg, ReplayToken};
use proptest::prelude::*;

fn rects(spec: &[(f64, f64, f64, f64)]) -> Vec<Rect> {
    spec.iter()
        .map(|&(xl, xr, yb, yt)| Rect::normalized(xl, xr, yb, yt).unwrap())
        .collect()
}

/// Coordinate-compressed reference: measure as the sum of covered grid cells,
/// contour as the total length of cell sides between covered and uncovered.
fn brute_force(set: &[Rect]) -> (f64, f64) {
    if set.is_empty() {
        return (0.0, 0.0);
    }
    let mut xs: Vec<f64> = set.iter().flat_map(|r| [r.x_left, r.x_right]).collect();
    let mut ys: Vec<f64> = set.iter().flat_map(|r| [r.y_bot, r.y_top]).collect();
    xs.sort_by(f64::total_cmp);
    xs.dedup();
    ys.sort_by(f64::total_cmp);
    ys.dedup();
    let (nx, ny) = (xs.len() - 1, ys.len() - 1);
    let covered = |i: usize, j: usize| {
        set.iter().any(|r| {
            r.x_left <= xs[i] && xs[i + 1] <= r.x_right && r.y_bot <= ys[j] && ys[j + 1] <= r.y_top
        })
    };
    let mut measure = 0.0;
    let mut contour = 0.0;
    for i in 0..nx {
        for j in 0..ny {
            if !covered(i, j) {
                continue;
            }
            let w = xs[i + 1] - xs[i];
            let h = ys[j + 1] - ys[j];
            measure += w * h;
            if i == 0 || !covered(i - 1, j) {
                contour += h;
            }
            if i + 1 == nx || !covered(i + 1, j) {
                contour += h;
            }
            if j == 0 || !covered(i, j - 1) {
                contour += w;
            }
            if j + 1 == ny || !covered(i, j + 1) {
                contour += w;
            }
        }
    }
    (measure, contour)
}

fn assert_report(set: &[Rect], measure: f64, contour: f64) {
    let report = measure_and_contour(set);
    assert!(
        (report.measure - measure).abs() < 1e-12,
        "measure {} != {}",
        report.measure,
        measure
    );
    assert!(
        (report.contour - contour).abs() < 1e-12,
        "contour {} != {}",
        report.contour,
        contour
    );
    let seg_sum: f64 = report.segments.iter().map(|s| s.w + s.h).sum();
    assert!((seg_sum - contour).abs() < 1e-12);
}

#[test]
fn single_rectangle() {
    assert_report(&rects(&[(0.0, 2.0, 0.0, 3.0)]), 6.0, 10.0);
}

#[test]
fn two_disjoint_rectangles() {
    assert_report(&rects(&[(0.0, 1.0, 0.0, 1.0), (2.0, 3.0, 2.0, 3.0)]), 2.0, 8.0);
}

#[test]
fn two_identical_rectangles() {
    assert_report(&rects(&[(0.0, 2.0, 0.0, 2.0), (0.0, 2.0, 0.0, 2.0)]), 4.0, 8.0);
}

#[test]
fn edge_sharing_pair_forms_one_rectangle() {
    assert_report(&rects(&[(0.0, 1.0, 0.0, 1.0), (1.0, 2.0, 0.0, 1.0)]), 2.0, 6.0);
}

#[test]
fn corner_touching_pair() {
    assert_report(&rects(&[(0.0, 1.0, 0.0, 1.0), (1.0, 2.0, 1.0, 2.0)]), 2.0, 8.0);
}

#[test]
fn nested_rectangle_is_absorbed() {
    assert_report(&rects(&[(0.0, 4.0, 0.0, 4.0), (1.0, 3.0, 1.0, 3.0)]), 16.0, 16.0);
}

#[test]
fn ring_of_rectangles_counts_the_hole_boundary() {
    // Four bands forming a 4x4 square with a 2x2 hole: the contour includes
    // the inner boundary.
    let set = rects(&[
        (0.0, 4.0, 0.0, 1.0),
        (0.0, 4.0, 3.0, 4.0),
        (0.0, 1.0, 1.0, 3.0),
        (3.0, 4.0, 1.0, 3.0),
    ]);
    assert_report(&set, 12.0, 24.0);
}

#[test]
fn empty_input_yields_zeros() {
    let report = measure_and_contour(&[]);
    assert_eq!(report.measure, 0.0);
    assert_eq!(report.contour, 0.0);
    assert!(report.segments.is_empty());
}

#[test]
fn overlap_cross() {
    // Plus-shaped union of two overlapping bars.
    let set = rects(&[(0.0, 3.0, 1.0, 2.0), (1.0, 2.0, 0.0, 3.0)]);
    let (m, c) = brute_force(&set);
    assert_report(&set, m, c);
    assert_eq!(m, 5.0);
    assert_eq!(c, 12.0);
}

#[test]
fn duplicate_x_coordinates_stay_balanced_and_correct() {
    // Many edges sharing the same two x-positions exercise the tie-run split.
    let set = rects(&[
        (0.0, 2.0, 0.0, 1.0),
        (0.0, 2.0, 2.0, 3.0),
        (0.0, 2.0, 4.0, 5.0),
        (0.0, 2.0, 6.0, 7.0),
        (0.0, 2.0, 8.0, 9.0),
    ]);
    let (m, c) = brute_force(&set);
    assert_report(&set, m, c);
    assert_eq!(m, 10.0);
    assert_eq!(c, 30.0);
}

#[test]
fn permutation_invariance() {
    let base = draw_rects(12, GenCfg::default(), ReplayToken { seed: 7, index: 0 });
    let expect = measure_and_contour(&base);
    let mut reversed = base.clone();
    reversed.reverse();
    let mut rotated = base.clone();
    rotated.rotate_left(5);
    let mut interleaved: Vec<Rect> = base.iter().step_by(2).copied().collect();
    interleaved.extend(base.iter().skip(1).step_by(2));
    for permuted in [reversed, rotated, interleaved] {
        let report = measure_and_contour(&permuted);
        assert!((report.measure - expect.measure).abs() < 1e-9);
        assert!((report.contour - expect.contour).abs() < 1e-9);
    }
}

#[test]
fn measure_is_monotone_and_bounded_by_area_sum() {
    let set = draw_rects(16, GenCfg::default(), ReplayToken { seed: 3, index: 1 });
    let mut prev = 0.0;
    let mut area_sum = 0.0;
    for k in 1..=set.len() {
        let m = measure_and_contour(&set[..k]).measure;
        area_sum += set[k - 1].area();
        assert!(m >= prev - 1e-12);
        assert!(m <= area_sum + 1e-9);
        prev = m;
    }
}

#[test]
fn lrps_brackets_infinities() {
    let set = rects(&[
        (0.0, 2.0, 0.0, 3.0),
        (1.0, 4.0, 1.0, 5.0),
        (1.0, 4.0, -2.0, 0.5),
    ]);
    let mut vert: Vec<crate::geom::Edge> = set.iter().flat_map(vertical_edges).collect();
    vert.sort_by(|a, b| a.cmp_sweep(b));
    let mut arena = ctree::TreeArena::new();
    let frame = Interval::new(f64::NEG_INFINITY, f64::INFINITY);
    let lrps = stripes::partition(&mut arena, &vert, frame);
    assert_eq!(lrps.ybreaks.first(), Some(&f64::NEG_INFINITY));
    assert_eq!(lrps.ybreaks.last(), Some(&f64::INFINITY));
    assert_eq!(lrps.stripes.len(), lrps.ybreaks.len() - 1);
    // Nothing escapes the infinite frame.
    assert!(lrps.left.is_empty());
    assert!(lrps.right.is_empty());
    // Stripes tile the y axis in order.
    for w in lrps.stripes.windows(2) {
        assert_eq!(w[0].y.hi, w[1].y.lo);
    }
}

#[test]
fn matches_brute_force_on_generated_sets() {
    for index in 0..32 {
        let set = draw_rects(
            10,
            GenCfg {
                coord_min: -8.0,
                coord_max: 8.0,
                integer: true,
            },
            ReplayToken { seed: 11, index },
        );
        let (m, c) = brute_force(&set);
        assert_report(&set, m, c);
    }
}

proptest! {
    #[test]
    fn matches_brute_force(raw in proptest::collection::vec((0i32..13, 0i32..13, 0i32..13, 0i32..13), 1..9)) {
        // Degenerate records are discarded at ingestion, as in the public
        // input contract.
        let set: Vec<Rect> = raw
            .iter()
            .filter_map(|&(a, b, c, d)| Rect::normalized(a as f64, b as f64, c as f64, d as f64))
            .collect();
        let report = measure_and_contour(&set);
        let (m, c) = brute_force(&set);
        prop_assert!((report.measure - m).abs() < 1e-9, "measure {} != {}", report.measure, m);
        prop_assert!((report.contour - c).abs() < 1e-9, "contour {} != {}", report.contour, c);
        let seg_sum: f64 = report.segments.iter().map(|s| s.w + s.h).sum();
        prop_assert!((seg_sum - report.contour).abs() < 1e-9);
    }
}
