use std::fmt;

use crate::error::{ConstructionError, Result};
use crate::math::distance_2d::offset_along_2d;
use crate::math::{Vector2, INCIDENCE_TOLERANCE};

use super::line::on_support;
use super::{Line, Point};

/// A half-line starting at `a` and running through `b` to infinity.
///
/// Unlike [`Line`], the points keep the order they were given in: `a` is the
/// boundary of the ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    a: Point,
    b: Point,
}

impl Ray {
    /// Creates the ray starting at `origin` and passing through `through`.
    ///
    /// # Errors
    ///
    /// Returns an error if the two points coincide.
    pub fn new(origin: Point, through: Point) -> Result<Self> {
        if origin.distance(&through) == 0.0 {
            return Err(ConstructionError::Degenerate(format!(
                "a ray needs a direction point different from its origin {origin}"
            ))
            .into());
        }
        Ok(Self {
            a: origin,
            b: through,
        })
    }

    /// The fixed end of the ray.
    #[must_use]
    pub fn origin(&self) -> &Point {
        &self.a
    }

    /// The point fixing the direction.
    #[must_use]
    pub fn through(&self) -> &Point {
        &self.b
    }

    /// Direction vector `b - a`.
    #[must_use]
    pub fn direction(&self) -> Vector2 {
        self.b.coords() - self.a.coords()
    }

    /// The ray extended to a full line.
    #[must_use]
    pub fn support_line(&self) -> Line {
        Line::spanning(self.a, self.b)
    }

    /// Height of the ray at `x`; `None` when `x` lies behind the origin or the
    /// ray is vertical.
    #[must_use]
    pub fn y(&self, x: f64) -> Option<f64> {
        if (self.b.x() > self.a.x() && x < self.a.x())
            || (self.b.x() < self.a.x() && x > self.a.x())
        {
            return None;
        }
        self.support_line().y(x)
    }

    /// Abscissa of the ray at `y`; `None` when `y` lies behind the origin or
    /// the ray is horizontal.
    #[must_use]
    pub fn x(&self, y: f64) -> Option<f64> {
        if (self.b.y() > self.a.y() && y < self.a.y())
            || (self.b.y() < self.a.y() && y > self.a.y())
        {
            return None;
        }
        self.support_line().x(y)
    }

    /// Whether `point` lies on the ray, origin included.
    #[must_use]
    pub fn contains(&self, point: &Point) -> bool {
        on_support(&self.a, &self.b, point)
            && offset_along_2d(&self.a.coords(), &self.b.coords(), &point.coords())
                >= -INCIDENCE_TOLERANCE
    }
}

impl fmt::Display for Ray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ray: ({}, {})", self.a, self.b)
    }
}
