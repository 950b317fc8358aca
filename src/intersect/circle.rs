//! Pairs with a circle.

use std::cmp::Ordering;

use crate::error::Result;
use crate::geometry::{Circle, Line, Point, Ray, Segment, ShapeKind};
use crate::math::intersect_2d::{
    chord_endpoints_2d, circle_circle_points_2d, external_tangent_point_2d,
    internal_tangent_point_2d,
};
use crate::math::round_coordinate;

use super::{unclassified, undefined, Intersection};

/// Classifies by the rounded center distance `d` against `r1 + r2` and
/// `|r1 - r2|`.
pub(crate) fn circle_circle(c1: &Circle, c2: &Circle) -> Result<Option<Intersection>> {
    let (c1, c2) = if c1.canonical_cmp(c2) == Ordering::Greater {
        (c2, c1)
    } else {
        (c1, c2)
    };
    let (r1, r2) = (c1.radius(), c2.radius());
    let d = c1.center().distance(c2.center());
    if d == 0.0 {
        return Ok((r1 == r2).then_some(Intersection::Circle(*c1)));
    }

    let outer = round_coordinate(r1 + r2);
    let inner = round_coordinate((r1 - r2).abs());
    if d > outer || d < inner {
        return Ok(None);
    }

    let (m1, m2) = (c1.center().coords(), c2.center().coords());
    if d == outer {
        let touch = external_tangent_point_2d(&m1, r1, &m2, r2);
        return Ok(Some(Intersection::Point(Point::from_vector(&touch))));
    }
    if d == inner {
        let touch = internal_tangent_point_2d(&m1, r1, &m2, r2)
            .ok_or_else(|| undefined(ShapeKind::Circle, ShapeKind::Circle))?;
        return Ok(Some(Intersection::Point(Point::from_vector(&touch))));
    }

    let (p, q) = circle_circle_points_2d(&m1, r1, &m2, r2)
        .ok_or_else(|| undefined(ShapeKind::Circle, ShapeKind::Circle))?;
    Ok(Intersection::from_points([
        Point::from_vector(&p),
        Point::from_vector(&q),
    ]))
}

/// Compares the distance from the center to the foot of the perpendicular
/// with the radius; a secant's points sit `±√(r² − d²)` from the foot.
pub(crate) fn circle_line(circle: &Circle, line: &Line) -> Result<Option<Intersection>> {
    let foot = line.foot_of(circle.center());
    let d = circle.center().distance(&foot);
    let r = circle.radius();
    if d > r {
        return Ok(None);
    }
    if d == r {
        return Ok(Some(Intersection::Point(foot)));
    }

    let half_chord = (r * r - d * d).sqrt();
    let (p, q) = chord_endpoints_2d(&foot.coords(), &line.direction(), half_chord)
        .ok_or_else(|| undefined(ShapeKind::Circle, ShapeKind::Line))?;
    Ok(Intersection::from_points([
        Point::from_vector(&p),
        Point::from_vector(&q),
    ]))
}

pub(crate) fn circle_ray(circle: &Circle, ray: &Ray) -> Result<Option<Intersection>> {
    let found = circle_line(circle, &ray.support_line())?;
    keep_points(found, ShapeKind::Ray, |p| ray.contains(p))
}

pub(crate) fn circle_segment(circle: &Circle, segment: &Segment) -> Result<Option<Intersection>> {
    let found = circle_line(circle, &segment.support_line())?;
    keep_points(found, ShapeKind::Segment, |p| segment.contains(p))
}

/// Filters the points of a circle/support-line result.
fn keep_points(
    found: Option<Intersection>,
    second: ShapeKind,
    keep: impl Fn(&Point) -> bool,
) -> Result<Option<Intersection>> {
    let points = match found {
        None => return Ok(None),
        Some(Intersection::Point(p)) => vec![p],
        Some(Intersection::Pair(p, q)) => vec![p, q],
        Some(other) => return Err(unclassified(ShapeKind::Circle, second, &other)),
    };
    Ok(Intersection::from_points(points.into_iter().filter(keep)))
}
