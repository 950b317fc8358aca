//! Pairwise intersection engine.
//!
//! [`get_intersect`] ranks the two kinds, puts the lower-ranked shape first and
//! matches the ordered pair, so every handler is written for a single argument
//! order and callers may pass the shapes either way round.

mod circle;
pub(crate) mod linear;
mod point;
mod polygon;

use std::cmp::Ordering;
use std::fmt;

use tracing::{debug, trace};

use crate::error::{IntersectionError, PlanimetryError, Result};
use crate::geometry::{Circle, Line, Point, Polygon, Ray, Segment, ShapeKind, ShapeRef, Triangle};

/// What two primitives have in common.
///
/// `None` in the surrounding `Option` means they do not meet.
#[derive(Debug, Clone, PartialEq)]
pub enum Intersection {
    Point(Point),
    /// Two distinct points, ascending by x then y.
    Pair(Point, Point),
    Segment(Segment),
    Ray(Ray),
    Line(Line),
    Circle(Circle),
    Polygon(Polygon),
    Triangle(Triangle),
    /// Several disjoint pieces, in boundary traversal order.
    Pieces(Vec<Piece>),
}

/// One connected part of a multi-part intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Piece {
    Point(Point),
    Segment(Segment),
}

impl Intersection {
    /// Collapses a list of points, dropping coincident repeats.
    pub(crate) fn from_points(points: impl IntoIterator<Item = Point>) -> Option<Self> {
        let mut unique: Vec<Point> = Vec::new();
        for p in points {
            if !unique.iter().any(|q| q.coincides(&p)) {
                unique.push(p);
            }
        }
        Self::from_pieces(unique.into_iter().map(Piece::Point).collect())
    }

    /// Wraps already consolidated pieces in the narrowest variant.
    pub(crate) fn from_pieces(pieces: Vec<Piece>) -> Option<Self> {
        match pieces.as_slice() {
            [] => None,
            [Piece::Point(p)] => Some(Self::Point(*p)),
            [Piece::Segment(s)] => Some(Self::Segment(*s)),
            [Piece::Point(p), Piece::Point(q)] => {
                let (p, q) = if q.canonical_cmp(p) == Ordering::Less {
                    (*q, *p)
                } else {
                    (*p, *q)
                };
                Some(Self::Pair(p, q))
            }
            _ => Some(Self::Pieces(pieces)),
        }
    }

    /// The single point, if this is a point result.
    #[must_use]
    pub fn as_point(&self) -> Option<&Point> {
        match self {
            Self::Point(p) => Some(p),
            _ => None,
        }
    }

    /// Splits a point or segment result into pieces.
    ///
    /// # Errors
    ///
    /// Hands `self` back for results made of unbounded or closed shapes, which
    /// only whole-shape overlaps produce.
    pub fn into_pieces(self) -> std::result::Result<Vec<Piece>, Self> {
        match self {
            Self::Point(p) => Ok(vec![Piece::Point(p)]),
            Self::Pair(p, q) => Ok(vec![Piece::Point(p), Piece::Point(q)]),
            Self::Segment(s) => Ok(vec![Piece::Segment(s)]),
            Self::Pieces(pieces) => Ok(pieces),
            other @ (Self::Ray(_)
            | Self::Line(_)
            | Self::Circle(_)
            | Self::Polygon(_)
            | Self::Triangle(_)) => Err(other),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Piece::Point(p) => write!(f, "{p}"),
            Piece::Segment(s) => write!(f, "{s}"),
        }
    }
}

impl fmt::Display for Intersection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Point(p) => write!(f, "{p}"),
            Self::Pair(p, q) => write!(f, "{p}, {q}"),
            Self::Segment(s) => write!(f, "{s}"),
            Self::Ray(r) => write!(f, "{r}"),
            Self::Line(l) => write!(f, "{l}"),
            Self::Circle(c) => write!(f, "{c}"),
            Self::Polygon(p) => write!(f, "{p}"),
            Self::Triangle(t) => write!(f, "{t}"),
            Self::Pieces(pieces) => {
                for (i, piece) in pieces.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{piece}")?;
                }
                Ok(())
            }
        }
    }
}

/// Error for a pair, or a sub-result of a pair, that no handler covers.
pub(crate) fn undefined(first: ShapeKind, second: ShapeKind) -> PlanimetryError {
    debug!(%first, %second, "no intersection handler for pair");
    IntersectionError::Undefined { first, second }.into()
}

/// Error for a sub-result the calling handler cannot interpret.
pub(crate) fn unclassified(first: ShapeKind, second: ShapeKind, found: &Intersection) -> PlanimetryError {
    debug!(%first, %second, ?found, "unexpected intermediate intersection");
    IntersectionError::Undefined { first, second }.into()
}

/// Intersection of two primitives of any kinds.
///
/// # Errors
///
/// Returns [`IntersectionError::Undefined`] when the pair, or a sub-result
/// computed for it, cannot be classified.
pub fn get_intersect(first: ShapeRef<'_>, second: ShapeRef<'_>) -> Result<Option<Intersection>> {
    let (a, b) = if second.kind() < first.kind() {
        (second, first)
    } else {
        (first, second)
    };
    trace!(first = %a.kind(), second = %b.kind(), "intersect");

    match (a, b) {
        (ShapeRef::Point(p), ShapeRef::Point(q)) => Ok(point::point_point(p, q)),
        (ShapeRef::Point(p), ShapeRef::Line(l)) => Ok(point::point_line(p, l)),
        (ShapeRef::Point(p), ShapeRef::Ray(r)) => Ok(point::point_ray(p, r)),
        (ShapeRef::Point(p), ShapeRef::Segment(s)) => Ok(point::point_segment(p, s)),
        (ShapeRef::Point(p), ShapeRef::Circle(c)) => Ok(point::point_circle(p, c)),
        (ShapeRef::Point(p), ShapeRef::Polygon(poly)) => Ok(point::point_polygon(p, poly)),
        (ShapeRef::Point(p), ShapeRef::Triangle(t)) => Ok(point::point_polygon(p, t.as_polygon())),

        (ShapeRef::Line(l), ShapeRef::Line(m)) => linear::line_line(l, m),
        (ShapeRef::Line(l), ShapeRef::Ray(r)) => linear::ray_line(r, l),
        (ShapeRef::Line(l), ShapeRef::Segment(s)) => linear::segment_line(s, l),
        (ShapeRef::Line(l), ShapeRef::Circle(c)) => circle::circle_line(c, l),
        (ShapeRef::Line(l), ShapeRef::Polygon(poly)) => polygon::polygon_line(poly, l),
        (ShapeRef::Line(l), ShapeRef::Triangle(t)) => polygon::polygon_line(t.as_polygon(), l),

        (ShapeRef::Ray(r), ShapeRef::Ray(q)) => linear::ray_ray(r, q),
        (ShapeRef::Ray(r), ShapeRef::Segment(s)) => linear::ray_segment(r, s),
        (ShapeRef::Ray(r), ShapeRef::Circle(c)) => circle::circle_ray(c, r),
        (ShapeRef::Ray(r), ShapeRef::Polygon(poly)) => polygon::polygon_ray(poly, r),
        (ShapeRef::Ray(r), ShapeRef::Triangle(t)) => polygon::polygon_ray(t.as_polygon(), r),

        (ShapeRef::Segment(s), ShapeRef::Segment(u)) => linear::segment_segment(s, u),
        (ShapeRef::Segment(s), ShapeRef::Circle(c)) => circle::circle_segment(c, s),
        (ShapeRef::Segment(s), ShapeRef::Polygon(poly)) => polygon::polygon_segment(poly, s),
        (ShapeRef::Segment(s), ShapeRef::Triangle(t)) => {
            polygon::polygon_segment(t.as_polygon(), s)
        }

        (ShapeRef::Circle(c), ShapeRef::Circle(d)) => circle::circle_circle(c, d),
        (ShapeRef::Circle(c), ShapeRef::Polygon(poly)) => polygon::polygon_circle(poly, c),
        (ShapeRef::Circle(c), ShapeRef::Triangle(t)) => polygon::polygon_circle(t.as_polygon(), c),

        (ShapeRef::Polygon(p), ShapeRef::Polygon(q)) => polygon::polygon_polygon(p, q),
        (ShapeRef::Polygon(p), ShapeRef::Triangle(t)) => polygon::polygon_polygon(p, t.as_polygon()),

        (ShapeRef::Triangle(t), ShapeRef::Triangle(u)) => polygon::triangle_triangle(t, u),

        (a, b) => Err(undefined(a.kind(), b.kind())),
    }
}

/// Whether two primitives meet.
///
/// # Errors
///
/// Same as [`get_intersect`].
pub fn intersects(first: ShapeRef<'_>, second: ShapeRef<'_>) -> Result<bool> {
    get_intersect(first, second).map(|found| found.is_some())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::{Intersectable, Shape};

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y).unwrap()
    }

    fn samples() -> Vec<Shape> {
        vec![
            p(0.0, 0.0).into(),
            p(5.0, 0.0).into(),
            p(3.0, 4.0).into(),
            Line::new(p(-1.0, 0.0), p(1.0, 0.0)).unwrap().into(),
            Line::new(p(0.0, -3.0), p(0.0, 3.0)).unwrap().into(),
            Line::new(p(0.0, 1.0), p(1.0, 2.0)).unwrap().into(),
            Line::new(p(-4.0, -3.0), p(4.0, 3.0)).unwrap().into(),
            Ray::new(p(0.0, 0.0), p(1.0, 1.0)).unwrap().into(),
            Ray::new(p(6.0, 0.0), p(2.0, 0.0)).unwrap().into(),
            Ray::new(p(-2.0, 0.0), p(7.0, 0.0)).unwrap().into(),
            Segment::new(p(-5.0, 0.0), p(5.0, 0.0)).unwrap().into(),
            Segment::new(p(2.0, -6.0), p(2.0, 6.0)).unwrap().into(),
            Segment::new(p(1.0, 0.0), p(9.0, 0.0)).unwrap().into(),
            Circle::new(p(0.0, 0.0), 5.0).unwrap().into(),
            Circle::new(p(10.0, 0.0), 5.0).unwrap().into(),
            Circle::new(p(4.0, 1.0), 2.5).unwrap().into(),
            Polygon::new(vec![p(-10.0, 0.0), p(0.0, -10.0), p(10.0, 0.0), p(0.0, 10.0)])
                .unwrap()
                .into(),
            Polygon::new(vec![p(0.0, 0.0), p(6.0, 0.0), p(6.0, 4.0), p(0.0, 4.0)])
                .unwrap()
                .into(),
            Triangle::new(p(0.0, 0.0), p(8.0, 0.0), p(0.0, 6.0)).unwrap().into(),
            Triangle::new(p(-3.0, -3.0), p(3.0, -3.0), p(0.0, 5.0)).unwrap().into(),
        ]
    }

    #[test]
    fn every_kind_pair_is_handled() {
        let shapes = samples();
        for kind in ShapeKind::ALL {
            assert!(shapes.iter().any(|s| s.kind() == kind), "no sample of {kind}");
        }
        for a in &shapes {
            for b in &shapes {
                assert!(a.get_intersect(b).is_ok(), "{:?} x {:?}", a.kind(), b.kind());
            }
        }
    }

    #[test]
    fn intersection_is_symmetric() {
        let shapes = samples();
        for a in &shapes {
            for b in &shapes {
                let ab = a.get_intersect(b).unwrap();
                let ba = b.get_intersect(a).unwrap();
                assert_eq!(ab, ba, "{a:?} x {b:?}");
                assert_eq!(a.intersects(b).unwrap(), b.intersects(a).unwrap());
            }
        }
    }

    #[test]
    fn every_shape_meets_itself() {
        for shape in samples() {
            assert!(shape.intersects(&shape).unwrap(), "{shape:?}");
        }
    }

    #[test]
    fn self_intersection_returns_the_shape() {
        let l = Line::new(p(0.0, 0.0), p(1.0, 1.0)).unwrap();
        assert_eq!(l.get_intersect(&l).unwrap(), Some(Intersection::Line(l)));
        let s = Segment::new(p(0.0, 0.0), p(3.0, 1.0)).unwrap();
        assert_eq!(s.get_intersect(&s).unwrap(), Some(Intersection::Segment(s)));
        let c = Circle::new(p(1.0, 1.0), 2.0).unwrap();
        assert_eq!(c.get_intersect(&c).unwrap(), Some(Intersection::Circle(c)));
        let t = Triangle::new(p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0)).unwrap();
        assert_eq!(t.get_intersect(&t).unwrap(), Some(Intersection::Triangle(t.clone())));
    }

    #[test]
    fn point_pairs_are_sorted() {
        let found = Intersection::from_points([p(3.0, 1.0), p(-1.0, 2.0)]).unwrap();
        assert_eq!(found, Intersection::Pair(p(-1.0, 2.0), p(3.0, 1.0)));
    }

    #[test]
    fn coincident_points_collapse() {
        let found = Intersection::from_points([p(1.0, 1.0), p(1.000_001, 1.0), p(1.0, 1.0)]);
        assert_eq!(found, Some(Intersection::Point(p(1.0, 1.0))));
        assert_eq!(Intersection::from_points(Vec::new()), None);
    }

    #[test]
    fn three_points_become_pieces() {
        let found = Intersection::from_points([p(0.0, 0.0), p(1.0, 0.0), p(2.0, 0.0)]).unwrap();
        assert_eq!(found.into_pieces().unwrap().len(), 3);
    }

    #[test]
    fn reversed_pair_is_undefined() {
        let err = undefined(ShapeKind::Circle, ShapeKind::Point);
        assert!(matches!(
            err,
            PlanimetryError::Intersection(IntersectionError::Undefined {
                first: ShapeKind::Circle,
                second: ShapeKind::Point
            })
        ));
    }

    #[test]
    fn display_lists_pieces() {
        let found = Intersection::from_pieces(vec![
            Piece::Point(p(0.0, 0.0)),
            Piece::Segment(Segment::new(p(1.0, 0.0), p(2.0, 0.0)).unwrap()),
        ])
        .unwrap();
        assert_eq!(found.to_string(), "[0, 0], Segment: ([1, 0], [2, 0])");
    }
}
