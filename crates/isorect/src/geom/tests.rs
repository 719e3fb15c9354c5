use super::*;
use std::cmp::Ordering;

#[test]
fn interval_order_contains_width() {
    let a = Interval::new(0.0, 2.0);
    let b = Interval::new(0.0, 3.0);
    let c = Interval::new(1.0, 1.5);
    assert_eq!(a.cmp_lex(&b), Ordering::Less);
    assert_eq!(b.cmp_lex(&a), Ordering::Greater);
    assert_eq!(a.cmp_lex(&a), Ordering::Equal);
    assert!(b.contains(&c));
    assert!(b.contains(&a));
    assert!(!c.contains(&a));
    assert!(a.contains(&a));
    assert_eq!(c.width(), 0.5);
}

#[test]
fn rect_normalizes_swapped_pairs() {
    let r = Rect::normalized(3.0, 1.0, 5.0, -2.0).unwrap();
    assert_eq!(r.x_left, 1.0);
    assert_eq!(r.x_right, 3.0);
    assert_eq!(r.y_bot, -2.0);
    assert_eq!(r.y_top, 5.0);
    assert_eq!(r.area(), 14.0);
}

#[test]
fn degenerate_rects_are_rejected() {
    assert!(Rect::normalized(1.0, 1.0, 0.0, 2.0).is_none());
    assert!(Rect::normalized(0.0, 2.0, 3.0, 3.0).is_none());
}

#[test]
fn edge_sweep_order_breaks_ties_by_side() {
    let span = Interval::new(0.0, 1.0);
    let left = Edge::new(span, 2.0, 5.0, Side::Left);
    let right = Edge::new(span, 2.0, 0.0, Side::Right);
    assert_eq!(left.cmp_sweep(&right), Ordering::Less);
    let bot = Edge::new(span, 2.0, 4.0, Side::Bottom);
    let top = Edge::new(span, 2.0, 0.0, Side::Top);
    assert_eq!(bot.cmp_sweep(&top), Ordering::Less);
    let far = Edge::new(span, 7.0, 9.0, Side::Left);
    assert_eq!(far.cmp_sweep(&left), Ordering::Greater);
}

#[test]
fn rect_edges_carry_partner_coordinates() {
    let r = Rect::normalized(0.0, 2.0, 1.0, 4.0).unwrap();
    let [l, rt] = vertical_edges(&r);
    assert_eq!((l.coord, l.partner, l.side), (0.0, 2.0, Side::Left));
    assert_eq!((rt.coord, rt.partner, rt.side), (2.0, 0.0, Side::Right));
    assert_eq!(l.span, r.y_span());
    let [b, t] = horizontal_edges(&r);
    assert_eq!((b.coord, b.partner, b.side), (1.0, 4.0, Side::Bottom));
    assert_eq!((t.coord, t.partner, t.side), (4.0, 1.0, Side::Top));
    assert_eq!(b.span, r.x_span());
}
