//! Pairs with a point: the point itself when it lies on the other shape.

use crate::geometry::{Circle, Line, Point, Polygon, Ray, Segment};

use super::Intersection;

fn on(point: &Point, hit: bool) -> Option<Intersection> {
    hit.then_some(Intersection::Point(*point))
}

pub(crate) fn point_point(p: &Point, q: &Point) -> Option<Intersection> {
    on(p, p == q)
}

pub(crate) fn point_line(p: &Point, line: &Line) -> Option<Intersection> {
    on(p, line.contains(p))
}

pub(crate) fn point_ray(p: &Point, ray: &Ray) -> Option<Intersection> {
    on(p, ray.contains(p))
}

pub(crate) fn point_segment(p: &Point, segment: &Segment) -> Option<Intersection> {
    on(p, segment.contains(p))
}

pub(crate) fn point_circle(p: &Point, circle: &Circle) -> Option<Intersection> {
    on(p, circle.contains(p))
}

/// Boundary only: a point strictly inside the polygon does not meet it.
pub(crate) fn point_polygon(p: &Point, polygon: &Polygon) -> Option<Intersection> {
    on(p, polygon.boundary_contains(p))
}
