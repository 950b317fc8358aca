use std::cmp::Ordering;
use std::fmt;

use crate::error::{ConstructionError, IntersectionError, Result};
use crate::math::distance_2d::offset_along_2d;
use crate::math::INCIDENCE_TOLERANCE;

use super::line::{canonical_pair, on_support};
use super::{Line, Point};

/// A bounded piece of a line between two distinct endpoints.
///
/// Endpoints are stored in canonical order, like [`Line`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    a: Point,
    b: Point,
}

impl Segment {
    /// Creates the segment between `p1` and `p2`.
    ///
    /// # Errors
    ///
    /// Returns an error if the two points coincide.
    pub fn new(p1: Point, p2: Point) -> Result<Self> {
        if p1.distance(&p2) == 0.0 {
            return Err(ConstructionError::Degenerate(format!(
                "a segment needs two different endpoints, got {p1} twice"
            ))
            .into());
        }
        Ok(Self::spanning(p1, p2))
    }

    pub(crate) fn spanning(p1: Point, p2: Point) -> Self {
        let (a, b) = canonical_pair(p1, p2);
        Self { a, b }
    }

    /// The canonically lower endpoint.
    #[must_use]
    pub fn a(&self) -> &Point {
        &self.a
    }

    /// The canonically upper endpoint.
    #[must_use]
    pub fn b(&self) -> &Point {
        &self.b
    }

    /// Length of the segment, rounded.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.a.distance(&self.b)
    }

    /// The segment extended to a full line.
    #[must_use]
    pub fn support_line(&self) -> Line {
        Line::spanning(self.a, self.b)
    }

    /// Height of the segment at `x`; `None` outside `[a.x, b.x]` or when the
    /// segment is vertical.
    #[must_use]
    pub fn y(&self, x: f64) -> Option<f64> {
        if x < self.a.x() || x > self.b.x() {
            return None;
        }
        self.support_line().y(x)
    }

    /// Abscissa of the segment at `y`; `None` outside the segment's y-range or
    /// when the segment is horizontal.
    #[must_use]
    pub fn x(&self, y: f64) -> Option<f64> {
        let (low, high) = if self.a.y() <= self.b.y() {
            (self.a.y(), self.b.y())
        } else {
            (self.b.y(), self.a.y())
        };
        if y < low || y > high {
            return None;
        }
        self.support_line().x(y)
    }

    /// Whether `point` lies on the segment, endpoints included.
    #[must_use]
    pub fn contains(&self, point: &Point) -> bool {
        if !on_support(&self.a, &self.b, point) {
            return false;
        }
        let offset = offset_along_2d(&self.a.coords(), &self.b.coords(), &point.coords());
        offset >= -INCIDENCE_TOLERANCE && offset <= self.length() + INCIDENCE_TOLERANCE
    }

    /// Merges two collinear segments that touch or overlap into their union.
    ///
    /// # Errors
    ///
    /// Returns [`IntersectionError::NonCollinearJoin`] if `other` is not on
    /// this segment's support line and [`IntersectionError::DisjointJoin`] if
    /// the two segments leave a gap.
    pub fn join(&self, other: &Segment) -> Result<Segment> {
        if !on_support(&self.a, &self.b, &other.a) || !on_support(&self.a, &self.b, &other.b) {
            return Err(IntersectionError::NonCollinearJoin.into());
        }
        let start = later(self.a, other.a);
        let end = earlier(self.b, other.b);
        if start.canonical_cmp(&end) == Ordering::Greater && !start.coincides(&end) {
            return Err(IntersectionError::DisjointJoin.into());
        }
        Ok(Self::spanning(
            earlier(self.a, other.a),
            later(self.b, other.b),
        ))
    }
}

/// The canonically smaller of two points.
pub(crate) fn earlier(p: Point, q: Point) -> Point {
    if q.canonical_cmp(&p) == Ordering::Less {
        q
    } else {
        p
    }
}

/// The canonically larger of two points.
pub(crate) fn later(p: Point, q: Point) -> Point {
    if q.canonical_cmp(&p) == Ordering::Greater {
        q
    } else {
        p
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Segment: ({}, {})", self.a, self.b)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::PlanimetryError;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y).unwrap()
    }

    fn seg(x1: f64, y1: f64, x2: f64, y2: f64) -> Segment {
        Segment::new(p(x1, y1), p(x2, y2)).unwrap()
    }

    #[test]
    fn degenerate_segment_is_rejected() {
        let err = Segment::new(p(2.0, 2.0), p(2.0, 2.0)).unwrap_err();
        assert!(matches!(err, PlanimetryError::Construction(ConstructionError::Degenerate(_))));
    }

    #[test]
    fn endpoints_are_canonical() {
        let s = seg(4.0, 0.0, 1.0, 7.0);
        assert_eq!(*s.a(), p(1.0, 7.0));
        let v = seg(0.0, 9.0, 0.0, 1.0);
        assert_eq!(*v.a(), p(0.0, 1.0));
    }

    #[test]
    fn length_is_rounded() {
        assert_eq!(seg(0.0, 0.0, 3.0, 4.0).length(), 5.0);
        assert_eq!(seg(0.0, 0.0, 1.0, 1.0).length(), 1.414_214);
    }

    #[test]
    fn evaluation_is_bounded() {
        let s = seg(0.0, 0.0, 10.0, 5.0);
        assert_eq!(s.y(4.0), Some(2.0));
        assert_eq!(s.y(11.0), None);
        assert_eq!(s.x(5.0), Some(10.0));
        assert_eq!(s.x(-1.0), None);
        let falling = seg(0.0, 5.0, 10.0, 0.0);
        assert_eq!(falling.x(1.0), Some(8.0));
        assert_eq!(falling.x(6.0), None);
    }

    #[test]
    fn containment_respects_ends() {
        let s = seg(0.0, 0.0, 4.0, 4.0);
        assert!(s.contains(&p(0.0, 0.0)));
        assert!(s.contains(&p(4.0, 4.0)));
        assert!(s.contains(&p(2.5, 2.5)));
        assert!(!s.contains(&p(5.0, 5.0)));
        assert!(!s.contains(&p(-0.1, -0.1)));
        assert!(!s.contains(&p(2.0, 1.0)));
    }

    #[test]
    fn join_overlapping() {
        let joined = seg(0.0, 0.0, 5.0, 0.0).join(&seg(3.0, 0.0, 9.0, 0.0)).unwrap();
        assert_eq!(joined, seg(0.0, 0.0, 9.0, 0.0));
    }

    #[test]
    fn join_touching_and_contained() {
        let joined = seg(0.0, 0.0, 0.0, 2.0).join(&seg(0.0, 2.0, 0.0, 5.0)).unwrap();
        assert_eq!(joined, seg(0.0, 0.0, 0.0, 5.0));
        let outer = seg(-1.0, -1.0, 6.0, 6.0);
        assert_eq!(outer.join(&seg(1.0, 1.0, 2.0, 2.0)).unwrap(), outer);
    }

    #[test]
    fn join_rejects_non_collinear() {
        let err = seg(0.0, 0.0, 5.0, 0.0).join(&seg(0.0, 1.0, 5.0, 1.0)).unwrap_err();
        assert!(matches!(err, PlanimetryError::Intersection(IntersectionError::NonCollinearJoin)));
    }

    #[test]
    fn join_rejects_gap() {
        let err = seg(0.0, 0.0, 1.0, 0.0).join(&seg(2.0, 0.0, 3.0, 0.0)).unwrap_err();
        assert!(matches!(err, PlanimetryError::Intersection(IntersectionError::DisjointJoin)));
    }

    #[test]
    fn display_form() {
        assert_eq!(seg(1.0, 0.0, 0.0, 0.0).to_string(), "Segment: ([0, 0], [1, 0])");
    }
}
