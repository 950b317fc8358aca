use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::{ensure_finite, ConstructionError, PlanimetryError, Result};
use crate::math::{coordinates_match, round_coordinate, Vector2};

use super::Line;

/// A point in the plane with coordinates rounded to coordinate precision.
///
/// Equality is exact equality of the rounded coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// The origin `[0, 0]`.
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    /// Creates a point, rounding both coordinates.
    ///
    /// # Errors
    ///
    /// Returns an error if either coordinate is NaN or infinite.
    pub fn new(x: f64, y: f64) -> Result<Self> {
        let x = ensure_finite("x coordinate", x)?;
        let y = ensure_finite("y coordinate", y)?;
        Ok(Self::rounded(x, y))
    }

    /// Rounds already-validated coordinates.
    pub(crate) fn rounded(x: f64, y: f64) -> Self {
        Self {
            x: round_coordinate(x),
            y: round_coordinate(y),
        }
    }

    pub(crate) fn from_vector(v: &Vector2) -> Self {
        Self::rounded(v.x, v.y)
    }

    /// The x coordinate.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.x
    }

    /// The y coordinate.
    #[must_use]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Position vector of this point.
    #[must_use]
    pub fn coords(&self) -> Vector2 {
        Vector2::new(self.x, self.y)
    }

    /// `[x, y]` array form.
    #[must_use]
    pub fn to_array(&self) -> [f64; 2] {
        [self.x, self.y]
    }

    /// Distance from the origin.
    #[must_use]
    pub fn absolute(&self) -> f64 {
        round_coordinate(self.x.hypot(self.y))
    }

    /// Euclidean distance to `other`, rounded.
    #[must_use]
    pub fn distance(&self, other: &Point) -> f64 {
        round_coordinate((self.x - other.x).hypot(self.y - other.y))
    }

    /// Perpendicular distance to `line`: the distance to the foot of the
    /// perpendicular dropped from this point.
    #[must_use]
    pub fn distance_to_line(&self, line: &Line) -> f64 {
        self.distance(&line.foot_of(self))
    }

    /// Point reflection (half-turn) about `center`.
    #[must_use]
    pub fn reflect_about_point(&self, center: &Point) -> Point {
        Self::rounded(2.0 * center.x - self.x, 2.0 * center.y - self.y)
    }

    /// Mirror image across `line`.
    #[must_use]
    pub fn reflect_about_line(&self, line: &Line) -> Point {
        self.reflect_about_point(&line.foot_of(self))
    }

    /// Whether both coordinates agree within the incidence tolerance.
    ///
    /// Used to recognise the same vertex reached through different
    /// computations; [`PartialEq`] stays exact.
    #[must_use]
    pub fn coincides(&self, other: &Point) -> bool {
        coordinates_match(self.x, other.x) && coordinates_match(self.y, other.y)
    }

    /// Orders by ascending x, then ascending y.
    ///
    /// This is the canonical order of line and segment endpoints: along any
    /// non-vertical support line it is the order by x, along a vertical one
    /// the order by y.
    #[must_use]
    pub fn canonical_cmp(&self, other: &Point) -> Ordering {
        self.x
            .total_cmp(&other.x)
            .then_with(|| self.y.total_cmp(&other.y))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.x, self.y)
    }
}

impl FromStr for Point {
    type Err = PlanimetryError;

    /// Parses the `[x, y]` form produced by [`Display`](fmt::Display).
    fn from_str(s: &str) -> Result<Self> {
        let parse_error = || ConstructionError::Parse(s.to_owned());
        let inner = s
            .trim()
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .ok_or_else(parse_error)?;
        let (x, y) = inner.split_once(',').ok_or_else(parse_error)?;
        let x = x.trim().parse::<f64>().map_err(|_| parse_error())?;
        let y = y.trim().parse::<f64>().map_err(|_| parse_error())?;
        Self::new(x, y)
    }
}

impl From<Point> for nalgebra::Point2<f64> {
    fn from(p: Point) -> Self {
        nalgebra::Point2::new(p.x, p.y)
    }
}

impl TryFrom<nalgebra::Point2<f64>> for Point {
    type Error = PlanimetryError;

    fn try_from(p: nalgebra::Point2<f64>) -> Result<Self> {
        Self::new(p.x, p.y)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y).unwrap()
    }

    #[test]
    fn coordinates_are_rounded() {
        let a = p(0.1 + 0.2, 1.000_000_4);
        assert_eq!(a.x(), 0.3);
        assert_eq!(a.y(), 1.0);
        assert_eq!(a, p(0.3, 1.0));
    }

    #[test]
    fn non_finite_is_rejected() {
        assert!(Point::new(f64::NAN, 0.0).is_err());
        assert!(Point::new(0.0, f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn distance_and_absolute() {
        assert_eq!(p(0.0, 0.0).distance(&p(3.0, 4.0)), 5.0);
        assert_eq!(p(-3.0, 4.0).absolute(), 5.0);
        assert_eq!(p(1.0, 1.0).distance(&p(2.0, 2.0)), 1.414_214);
    }

    #[test]
    fn distance_to_horizontal_and_vertical_lines() {
        let horizontal = Line::new(p(-5.0, 2.0), p(5.0, 2.0)).unwrap();
        assert_eq!(p(1.0, -1.0).distance_to_line(&horizontal), 3.0);
        let vertical = Line::new(p(4.0, 0.0), p(4.0, 1.0)).unwrap();
        assert_eq!(p(1.0, 7.0).distance_to_line(&vertical), 3.0);
    }

    #[test]
    fn distance_to_slanted_line() {
        let diagonal = Line::new(p(0.0, 0.0), p(1.0, 1.0)).unwrap();
        assert_eq!(p(0.0, 2.0).distance_to_line(&diagonal), 1.414_214);
        assert_eq!(p(3.0, 3.0).distance_to_line(&diagonal), 0.0);
    }

    #[test]
    fn point_reflection() {
        assert_eq!(p(1.0, 2.0).reflect_about_point(&p(0.0, 0.0)), p(-1.0, -2.0));
        assert_eq!(p(1.0, 2.0).reflect_about_point(&p(3.0, 3.0)), p(5.0, 4.0));
    }

    #[test]
    fn mirror_reflection() {
        let diagonal = Line::new(p(0.0, 0.0), p(2.0, 2.0)).unwrap();
        assert_eq!(p(3.0, 1.0).reflect_about_line(&diagonal), p(1.0, 3.0));
        let vertical = Line::new(p(1.0, 0.0), p(1.0, 5.0)).unwrap();
        assert_eq!(p(4.0, 2.0).reflect_about_line(&vertical), p(-2.0, 2.0));
    }

    #[test]
    fn display_form() {
        assert_eq!(p(5.0, -0.25).to_string(), "[5, -0.25]");
        assert_eq!(p(-0.0, 0.0).to_string(), "[0, 0]");
    }

    #[test]
    fn text_round_trip() {
        for q in [p(0.0, 0.0), p(-12.5, 3.141_593), p(1e-6, -987_654.321), p(1.0 / 3.0, 2.0 / 3.0)] {
            assert_eq!(q.to_string().parse::<Point>().unwrap(), q);
        }
    }

    #[test]
    fn malformed_text_is_rejected() {
        for text in ["1, 2", "[1 2]", "[a, 2]", "[1, 2", "[]", "[1, inf]"] {
            assert!(text.parse::<Point>().is_err(), "{text}");
        }
    }

    #[test]
    fn nalgebra_conversion() {
        let q: nalgebra::Point2<f64> = p(1.5, -2.0).into();
        assert_eq!(Point::try_from(q).unwrap(), p(1.5, -2.0));
    }

    #[test]
    fn canonical_order_is_x_then_y() {
        assert_eq!(p(0.0, 5.0).canonical_cmp(&p(1.0, -5.0)), Ordering::Less);
        assert_eq!(p(1.0, 5.0).canonical_cmp(&p(1.0, -5.0)), Ordering::Greater);
    }
}
