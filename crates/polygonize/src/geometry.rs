//! Exact integer predicates on points and segments.
//!
//! All functions are exact for points inside `MAX_COORD`, which `PointSet`
//! enforces at ingestion.

use nalgebra::Vector2;

use crate::point::Point;

/// Segment between two tour points. Direction only matters to the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment {
    pub a: Point,
    pub b: Point,
}

impl Segment {
    #[inline]
    pub fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }
}

/// `(a.x-b.x)² + (a.y-b.y)²`.
#[inline]
pub fn squared_distance(a: &Point, b: &Point) -> i64 {
    let d = a.pos - b.pos;
    d.dot(&d)
}

/// 2D cross product of two vectors from the origin.
#[inline]
pub fn cross_product(p: Vector2<i64>, q: Vector2<i64>) -> i64 {
    p.x * q.y - q.x * p.y
}

/// Cross product of `(p3 - p1)` and `(p2 - p1)`; zero means collinear.
#[inline]
pub fn orientation(p1: &Point, p2: &Point, p3: &Point) -> i64 {
    cross_product(p3.pos - p1.pos, p2.pos - p1.pos)
}

/// Whether `p3` lies in the closed axis-aligned box spanned by `p1`, `p2`.
#[inline]
pub fn on_segment_box(p1: &Point, p2: &Point, p3: &Point) -> bool {
    p1.x().min(p2.x()) <= p3.x()
        && p3.x() <= p1.x().max(p2.x())
        && p1.y().min(p2.y()) <= p3.y()
        && p3.y() <= p1.y().max(p2.y())
}

/// Straddle test plus collinear overlap.
///
/// A shared endpoint counts as contact; tours never ask about adjacent edges.
pub fn segments_intersect(s1: &Segment, s2: &Segment) -> bool {
    let (a, b, c, d) = (&s1.a, &s1.b, &s2.a, &s2.b);
    let d1 = orientation(a, b, c).signum();
    let d2 = orientation(a, b, d).signum();
    let d3 = orientation(c, d, a).signum();
    let d4 = orientation(c, d, b).signum();
    if d1 * d2 < 0 && d3 * d4 < 0 {
        return true;
    }
    (d1 == 0 && on_segment_box(a, b, c))
        || (d2 == 0 && on_segment_box(a, b, d))
        || (d3 == 0 && on_segment_box(c, d, a))
        || (d4 == 0 && on_segment_box(c, d, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn p(x: i64, y: i64) -> Point {
        Point::new(x, y, 0)
    }
    fn seg(a: (i64, i64), b: (i64, i64)) -> Segment {
        Segment::new(p(a.0, a.1), p(b.0, b.1))
    }

    #[test]
    fn distance_and_orientation_basics() {
        assert_eq!(squared_distance(&p(0, 0), &p(3, 4)), 25);
        assert_eq!(squared_distance(&p(3, 4), &p(0, 0)), 25);
        assert_eq!(cross_product(Vector2::new(1, 0), Vector2::new(0, 1)), 1);
        // (2,0) lies on the line through (0,0) and (1,0)
        assert_eq!(orientation(&p(0, 0), &p(1, 0), &p(2, 0)), 0);
        let left = orientation(&p(0, 0), &p(1, 0), &p(0, 1));
        let right = orientation(&p(0, 0), &p(1, 0), &p(0, -1));
        assert!(left * right < 0);
    }

    #[test]
    fn extreme_coordinates_stay_exact() {
        let m = crate::point::MAX_COORD;
        assert_eq!(squared_distance(&p(-m, -m), &p(m, m)), 1 << 61);
        assert_eq!(orientation(&p(-m, -m), &p(m, -m), &p(-m, m)), -(1 << 60));
        assert!(segments_intersect(&seg((-m, -m), (m, m)), &seg((m, -m), (-m, m))));
    }

    #[test]
    fn proper_crossing_detected() {
        assert!(segments_intersect(
            &seg((0, 0), (10, 10)),
            &seg((10, 0), (0, 10))
        ));
        assert!(!segments_intersect(
            &seg((0, 0), (10, 0)),
            &seg((0, 5), (10, 5))
        ));
        assert!(!segments_intersect(
            &seg((10, 10), (10, 0)),
            &seg((0, 10), (0, 0))
        ));
    }

    #[test]
    fn collinear_overlap_reported_collinear_gap_not() {
        assert!(segments_intersect(&seg((0, 0), (4, 0)), &seg((2, 0), (6, 0))));
        assert!(!segments_intersect(&seg((0, 0), (2, 0)), &seg((3, 0), (6, 0))));
        // T-junction: endpoint of one in the interior of the other
        assert!(segments_intersect(&seg((0, 0), (4, 0)), &seg((2, 0), (2, 5))));
    }

    #[test]
    fn shared_endpoint_is_contact() {
        // Adjacent tour edges share a vertex; the predicate reports it, which is
        // why the neighborhood never tests adjacent pairs.
        assert!(segments_intersect(&seg((0, 0), (4, 0)), &seg((4, 0), (4, 4))));
        assert!(on_segment_box(&p(0, 0), &p(4, 0), &p(4, 0)));
    }

    proptest! {
        #[test]
        fn intersection_is_symmetric(
            ax in -20i64..20, ay in -20i64..20, bx in -20i64..20, by in -20i64..20,
            cx in -20i64..20, cy in -20i64..20, dx in -20i64..20, dy in -20i64..20,
        ) {
            let s1 = seg((ax, ay), (bx, by));
            let s2 = seg((cx, cy), (dx, dy));
            prop_assert_eq!(segments_intersect(&s1, &s2), segments_intersect(&s2, &s1));
            let s1r = seg((bx, by), (ax, ay));
            prop_assert_eq!(segments_intersect(&s1, &s2), segments_intersect(&s1r, &s2));
        }

        #[test]
        fn squared_distance_non_negative(
            ax in -1000i64..1000, ay in -1000i64..1000, bx in -1000i64..1000, by in -1000i64..1000,
        ) {
            prop_assert!(squared_distance(&p(ax, ay), &p(bx, by)) >= 0);
        }
    }
}
