use super::*;

#[test]
fn merge_covers_both_spans() {
    let a = Span::new(4, 9);
    let b = Span::new(1, 6);
    assert_eq!(a.merge(b), Span::new(1, 9));
    assert_eq!(b.merge(a), Span::new(1, 9));
}

#[test]
fn point_is_empty() {
    let p = Span::point(12);
    assert!(p.is_empty());
    assert_eq!(p.len(), 0);
}

#[test]
fn range_round_trip() {
    let span = Span::from_range(3..8);
    assert_eq!(span.to_range(), 3..8);
    assert_eq!(span.len(), 5);
}

#[test]
fn debug_and_display_show_the_range() {
    let span = Span::new(2, 5);
    assert_eq!(format!("{span:?}"), "2..5");
    assert_eq!(span.to_string(), "2..5");
}
