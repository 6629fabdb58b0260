//! Stateless 2D geometry helpers: distance, direction, line side and
//! segment intersection.

use crate::float::Float;
use crate::vec::Vec2;

/// A line segment from `start` to `end`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment<F: Float> {
    pub start: Vec2<F>,
    pub end: Vec2<F>,
}

impl<F: Float> Segment<F> {
    pub fn new(start: Vec2<F>, end: Vec2<F>) -> Self {
        Segment { start, end }
    }

    /// Direction vector `end - start` (not normalized).
    pub fn delta(&self) -> Vec2<F> {
        self.end - self.start
    }

    pub fn length(&self) -> F {
        self.delta().length()
    }
}

/// Euclidean distance between `p` and `q`.
pub fn distance<F: Float>(p: Vec2<F>, q: Vec2<F>) -> F {
    p.distance(q)
}

/// Angle of the vector from `p` to `q`, in (-pi, pi].
pub fn direction<F: Float>(p: Vec2<F>, q: Vec2<F>) -> F {
    F::atan2(q.y - p.y, q.x - p.x)
}

/// Which side of `segment` the point lies on.
///
/// True when the cross product of the segment direction and
/// `point - segment.start` is positive; `flip_normal` inverts the result.
/// Points exactly on the line report false (before flipping).
pub fn side_of_line<F: Float>(point: Vec2<F>, segment: &Segment<F>, flip_normal: bool) -> bool {
    let side = segment.delta().cross(point - segment.start) > F::zero();
    side != flip_normal
}

/// Intersection point of two segments, if any.
///
/// Returns `None` when the determinant is exactly zero (parallel or
/// collinear) or when either segment parameter lies outside `[0, 1]`.
/// Both parameter ranges are closed, so touching endpoints intersect.
pub fn segment_intersection<F: Float>(a: &Segment<F>, b: &Segment<F>) -> Option<Vec2<F>> {
    let (x1, y1, x2, y2) = (a.start.x, a.start.y, a.end.x, a.end.y);
    let (x3, y3, x4, y4) = (b.start.x, b.start.y, b.end.x, b.end.y);

    let denominator = (x1 - x2) * (y3 - y4) - (y1 - y2) * (x3 - x4);
    if denominator == F::zero() {
        return None;
    }

    let t = ((x1 - x3) * (y3 - y4) - (y1 - y3) * (x3 - x4)) / denominator;
    let u = -((x1 - x2) * (y1 - y3) - (y1 - y2) * (x1 - x3)) / denominator;

    let unit = |v: F| v >= F::zero() && v <= F::one();
    if unit(t) && unit(u) {
        Some(a.start.lerp(a.end, t))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(x1: f64, y1: f64, x2: f64, y2: f64) -> Segment<f64> {
        Segment::new(Vec2::new(x1, y1), Vec2::new(x2, y2))
    }

    #[test]
    fn direction_range() {
        let o = Vec2::new(0.0f64, 0.0);
        assert!((direction(o, Vec2::new(1.0, 0.0))).abs() < 1e-12);
        let left = direction(o, Vec2::new(-1.0, 0.0));
        assert!((left - core::f64::consts::PI).abs() < 1e-12, "left = {}", left);
        let up = direction(o, Vec2::new(0.0, -1.0));
        assert!((up + core::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn side_flips_across_line() {
        let s = seg(0.0, 0.0, 10.0, 0.0);
        let above = side_of_line(Vec2::new(5.0, -1.0), &s, false);
        let below = side_of_line(Vec2::new(5.0, 1.0), &s, false);
        assert_ne!(above, below);
        assert_eq!(side_of_line(Vec2::new(5.0, 1.0), &s, true), !below);
    }

    #[test]
    fn crossing_segments_meet_in_middle() {
        let p = segment_intersection(&seg(0.0, 0.0, 10.0, 10.0), &seg(0.0, 10.0, 10.0, 0.0));
        let p = p.expect("diagonals cross");
        assert!((p.x - 5.0).abs() < 1e-12 && (p.y - 5.0).abs() < 1e-12);
    }

    #[test]
    fn shared_endpoint_intersects() {
        let p = segment_intersection(&seg(0.0, 0.0, 4.0, 0.0), &seg(4.0, 0.0, 4.0, 7.0));
        assert_eq!(p, Some(Vec2::new(4.0, 0.0)));
    }

    #[test]
    fn parallel_and_collinear_do_not_intersect() {
        assert_eq!(segment_intersection(&seg(0.0, 0.0, 4.0, 0.0), &seg(0.0, 1.0, 4.0, 1.0)), None);
        assert_eq!(segment_intersection(&seg(0.0, 0.0, 4.0, 0.0), &seg(2.0, 0.0, 6.0, 0.0)), None);
    }

    #[test]
    fn lines_crossing_outside_segments() {
        assert_eq!(segment_intersection(&seg(0.0, 0.0, 1.0, 0.0), &seg(5.0, -1.0, 5.0, 1.0)), None);
    }
}
