use std::cmp::Ordering;
use std::f64::consts::TAU;
use std::fmt;

use crate::error::{ensure_finite, ConstructionError, Result};
use crate::math::{coordinates_match, round_coordinate};

use super::Point;

/// A circle given by its center and a non-negative radius.
///
/// The radius is rounded to coordinate precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    center: Point,
    r: f64,
}

impl Circle {
    /// Creates a circle.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is negative, NaN or infinite.
    pub fn new(center: Point, radius: f64) -> Result<Self> {
        let radius = ensure_finite("radius", radius)?;
        if radius < 0.0 {
            return Err(ConstructionError::NegativeRadius(radius).into());
        }
        Ok(Self {
            center,
            r: round_coordinate(radius),
        })
    }

    /// Center of the circle.
    #[must_use]
    pub fn center(&self) -> &Point {
        &self.center
    }

    /// Radius of the circle.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.r
    }

    /// Circumference `2πr`.
    #[must_use]
    pub fn circumference(&self) -> f64 {
        round_coordinate(TAU * self.r)
    }

    /// Whether `point` lies on the circle line, up to
    /// [`INCIDENCE_TOLERANCE`](crate::math::INCIDENCE_TOLERANCE).
    #[must_use]
    pub fn contains(&self, point: &Point) -> bool {
        coordinates_match(point.distance(&self.center), self.r)
    }

    /// Total order by center (canonical point order), then radius.
    pub(crate) fn canonical_cmp(&self, other: &Circle) -> Ordering {
        self.center
            .canonical_cmp(&other.center)
            .then_with(|| self.r.total_cmp(&other.r))
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Circle({}, {})", self.r, self.center)
    }
}
