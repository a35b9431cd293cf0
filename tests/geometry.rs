//! Property tests for the geometry predicates.

use glam::IVec2;
use proptest::prelude::*;

use matrix_arcade::geom::{
    Circle, Rect, Segment, circle_hits_segment, point_in_rect, points_coincide,
};

/// Independent float formulation of the circle/segment check: clamp the
/// center per axis, take the real Euclidean distance, compare to the radius.
fn float_reference(circle: Circle, segment: Segment) -> bool {
    let min = segment.a.min(segment.b);
    let max = segment.a.max(segment.b);
    let cx = circle.center.x.clamp(min.x, max.x) as f64;
    let cy = circle.center.y.clamp(min.y, max.y) as f64;
    let dx = circle.center.x as f64 - cx;
    let dy = circle.center.y as f64 - cy;
    (dx * dx + dy * dy).sqrt() <= circle.radius as f64
}

fn coord() -> impl Strategy<Value = i32> {
    -64..128i32
}

/// Axis-aligned segments only, matching how the games use the predicate
fn axis_aligned_segment() -> impl Strategy<Value = Segment> {
    (coord(), coord(), coord(), any::<bool>()).prop_map(|(fixed, start, end, vertical)| {
        if vertical {
            Segment::new(IVec2::new(fixed, start), IVec2::new(fixed, end))
        } else {
            Segment::new(IVec2::new(start, fixed), IVec2::new(end, fixed))
        }
    })
}

fn circle() -> impl Strategy<Value = Circle> {
    (coord(), coord(), 0..32i32).prop_map(|(x, y, r)| Circle::new(IVec2::new(x, y), r))
}

proptest! {
    #[test]
    fn integer_predicate_agrees_with_float_distance(
        c in circle(),
        s in axis_aligned_segment(),
    ) {
        prop_assert_eq!(circle_hits_segment(c, s), float_reference(c, s));
    }

    #[test]
    fn segment_endpoint_order_is_irrelevant(
        c in circle(),
        s in axis_aligned_segment(),
    ) {
        let flipped = Segment::new(s.b, s.a);
        prop_assert_eq!(circle_hits_segment(c, s), circle_hits_segment(c, flipped));
    }

    #[test]
    fn circle_segment_is_translation_invariant(
        c in circle(),
        s in axis_aligned_segment(),
        dx in -32..32i32,
        dy in -32..32i32,
    ) {
        let shift = IVec2::new(dx, dy);
        let moved_c = Circle::new(c.center + shift, c.radius);
        let moved_s = Segment::new(s.a + shift, s.b + shift);
        prop_assert_eq!(circle_hits_segment(c, s), circle_hits_segment(moved_c, moved_s));
    }

    #[test]
    fn growing_the_radius_never_loses_a_hit(
        c in circle(),
        s in axis_aligned_segment(),
    ) {
        if circle_hits_segment(c, s) {
            let bigger = Circle::new(c.center, c.radius + 1);
            prop_assert!(circle_hits_segment(bigger, s));
        }
    }

    #[test]
    fn point_in_rect_iff_clamping_is_a_fixed_point(
        px in coord(), py in coord(),
        rx in coord(), ry in coord(),
        w in 0..64i32, h in 0..64i32,
    ) {
        let point = IVec2::new(px, py);
        let rect = Rect::new(IVec2::new(rx, ry), w, h);
        let clamped = point.clamp(
            rect.origin,
            rect.origin + IVec2::new(rect.width, rect.height),
        );
        prop_assert_eq!(point_in_rect(point, rect), points_coincide(point, clamped));
    }
}
