//! Integer collision predicates
//!
//! Everything the games need: circle vs. axis-aligned segment (ball against
//! paddle), point vs. point (snake head against fruit and tail), point vs.
//! rectangle (bullet against ship). All comparisons stay in integer space;
//! the circle test compares squared distances, which over integer inputs is
//! exactly `distance <= radius`.

use glam::IVec2;

/// A circle with integer center and radius
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Circle {
    pub center: IVec2,
    pub radius: i32,
}

impl Circle {
    pub const fn new(center: IVec2, radius: i32) -> Self {
        Self { center, radius }
    }
}

/// A line segment between two integer points
///
/// Callers only ever pass axis-aligned segments (the paddle is a vertical
/// line), but the clamp below is endpoint-order agnostic either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub a: IVec2,
    pub b: IVec2,
}

impl Segment {
    pub const fn new(a: IVec2, b: IVec2) -> Self {
        Self { a, b }
    }
}

/// An axis-aligned rectangle given as origin plus extent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub origin: IVec2,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(origin: IVec2, width: i32, height: i32) -> Self {
        Self {
            origin,
            width,
            height,
        }
    }
}

/// True when the circle touches or overlaps the segment.
///
/// Clamps the circle center onto the segment's per-axis interval and compares
/// the squared distance from the clamped point against the squared radius.
/// For the axis-aligned segments the games use, the clamped point is the true
/// closest point.
pub fn circle_hits_segment(circle: Circle, segment: Segment) -> bool {
    let min = segment.a.min(segment.b);
    let max = segment.a.max(segment.b);
    let closest = circle.center.clamp(min, max);

    let d = circle.center - closest;
    d.length_squared() <= circle.radius * circle.radius
}

/// True when both points share the same cell.
pub fn points_coincide(a: IVec2, b: IVec2) -> bool {
    a == b
}

/// True when the point lies inside the rectangle, boundary inclusive.
pub fn point_in_rect(point: IVec2, rect: Rect) -> bool {
    let far = rect.origin + IVec2::new(rect.width, rect.height);
    rect.origin.x <= point.x && point.x <= far.x && rect.origin.y <= point.y && point.y <= far.y
}
