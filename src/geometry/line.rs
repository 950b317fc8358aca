use std::cmp::Ordering;
use std::fmt;

use crate::error::{ConstructionError, Result};
use crate::intersect::{linear::line_line, Intersection};
use crate::math::distance_2d::{evaluate_x_2d, evaluate_y_2d, is_shallow_2d};
use crate::math::{coordinates_match, round_coordinate, Polynom, Vector2};

use super::Point;

/// An infinite straight line through two distinct points.
///
/// The defining points are stored in canonical order: `a` has the smaller x,
/// or the smaller y when the line is vertical.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    a: Point,
    b: Point,
}

impl Line {
    /// Creates the line through `p1` and `p2`.
    ///
    /// # Errors
    ///
    /// Returns an error if the two points coincide.
    pub fn new(p1: Point, p2: Point) -> Result<Self> {
        if p1.distance(&p2) == 0.0 {
            return Err(ConstructionError::Degenerate(format!(
                "a line needs two different points, got {p1} twice"
            ))
            .into());
        }
        Ok(Self::spanning(p1, p2))
    }

    /// Builds the line through two points already known to differ.
    pub(crate) fn spanning(p1: Point, p2: Point) -> Self {
        let (a, b) = canonical_pair(p1, p2);
        Self { a, b }
    }

    /// The canonically lower defining point.
    #[must_use]
    pub fn a(&self) -> &Point {
        &self.a
    }

    /// The canonically upper defining point.
    #[must_use]
    pub fn b(&self) -> &Point {
        &self.b
    }

    /// Direction vector `b - a`.
    #[must_use]
    pub fn direction(&self) -> Vector2 {
        self.b.coords() - self.a.coords()
    }

    /// Whether the line is parallel to the y axis.
    #[must_use]
    pub fn is_vertical(&self) -> bool {
        self.a.x() == self.b.x()
    }

    /// Height of the line at `x`. `None` for a vertical line.
    #[must_use]
    pub fn y(&self, x: f64) -> Option<f64> {
        evaluate_y_2d(&self.a.coords(), &self.b.coords(), x).map(round_coordinate)
    }

    /// Abscissa of the line at `y`. `None` for a horizontal line.
    #[must_use]
    pub fn x(&self, y: f64) -> Option<f64> {
        evaluate_x_2d(&self.a.coords(), &self.b.coords(), y).map(round_coordinate)
    }

    /// Rounded slope `(b.y - a.y) / (b.x - a.x)`. `None` for a vertical line.
    #[must_use]
    pub fn slope(&self) -> Option<f64> {
        if self.is_vertical() {
            return None;
        }
        Some(round_coordinate(
            (self.b.y() - self.a.y()) / (self.b.x() - self.a.x()),
        ))
    }

    /// Rounded y-intercept `(b.y·a.x - a.y·b.x) / (a.x - b.x)`. `None` for a
    /// vertical line.
    #[must_use]
    pub fn intercept(&self) -> Option<f64> {
        if self.is_vertical() {
            return None;
        }
        Some(round_coordinate(
            (self.b.y() * self.a.x() - self.a.y() * self.b.x()) / (self.a.x() - self.b.x()),
        ))
    }

    /// The line as the degree-1 polynomial `slope·x + intercept`.
    ///
    /// `None` for a vertical line, which is not a function of x.
    #[must_use]
    pub fn line_polynom(&self) -> Option<Polynom> {
        Some(Polynom::linear(self.slope()?, self.intercept()?))
    }

    /// Whether `point` lies on the line.
    #[must_use]
    pub fn contains(&self, point: &Point) -> bool {
        on_support(&self.a, &self.b, point)
    }

    /// The line through `point` perpendicular to this one.
    ///
    /// A point off the line is first carried over to the parallel through it.
    #[must_use]
    pub fn perpendicular(&self, point: &Point) -> Line {
        if !self.contains(point) {
            return self.parallel(point).perpendicular(point);
        }
        let d = self.direction();
        let turned = Vector2::new(-d.y, d.x);
        Self::spanning(*point, Point::from_vector(&(point.coords() + turned)))
    }

    /// The line through `point` parallel to this one; `self` when `point`
    /// already lies on it.
    #[must_use]
    pub fn parallel(&self, point: &Point) -> Line {
        if self.contains(point) {
            return *self;
        }
        Self::spanning(*point, Point::from_vector(&(point.coords() + self.direction())))
    }

    /// Foot of the perpendicular dropped from `point`.
    ///
    /// Falls back to `point` itself when the perpendicular does not cross the
    /// line at a single point.
    #[must_use]
    pub fn foot_of(&self, point: &Point) -> Point {
        match line_line(&self.perpendicular(point), self) {
            Ok(Some(Intersection::Point(foot))) => foot,
            _ => *point,
        }
    }

    /// Perpendicular distance from `point`.
    #[must_use]
    pub fn distance(&self, point: &Point) -> f64 {
        point.distance_to_line(self)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line: ({}, {})", self.a, self.b)
    }
}

/// Orders two points canonically (ascending x, then ascending y).
pub(crate) fn canonical_pair(p1: Point, p2: Point) -> (Point, Point) {
    if p1.canonical_cmp(&p2) == Ordering::Greater {
        (p2, p1)
    } else {
        (p1, p2)
    }
}

/// Whether `point` lies on the support line through `a` and `b`.
///
/// Evaluates `y(x)` for shallow lines and `x(y)` for steep ones, so vertical
/// and horizontal lines need no separate branch and the comparison is made
/// along the better-conditioned axis.
pub(crate) fn on_support(a: &Point, b: &Point, point: &Point) -> bool {
    let (av, bv) = (a.coords(), b.coords());
    if is_shallow_2d(&av, &bv) {
        evaluate_y_2d(&av, &bv, point.x())
            .is_some_and(|y| coordinates_match(round_coordinate(y), point.y()))
    } else {
        evaluate_x_2d(&av, &bv, point.y())
            .is_some_and(|x| coordinates_match(round_coordinate(x), point.x()))
    }
}
