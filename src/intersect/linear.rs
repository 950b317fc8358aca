//! Pairs of straight primitives: lines, rays and segments.
//!
//! Every pair goes through [`line_line`] on the support lines first and then
//! clips the crossing point or the shared line to the bounded shapes.

use std::cmp::Ordering;

use crate::error::Result;
use crate::geometry::{earlier, later, Line, Point, Ray, Segment, ShapeKind};
use crate::math::intersect_2d::line_line_point_2d;

use super::{unclassified, undefined, Intersection};

/// Lines are compared through their rounded slope/intercept polynomials;
/// vertical lines have none and are substituted directly.
pub(crate) fn line_line(l1: &Line, l2: &Line) -> Result<Option<Intersection>> {
    let found = match (l1.line_polynom(), l2.line_polynom()) {
        (None, None) => {
            (l1.a().x() == l2.a().x()).then(|| Intersection::Line(first_line(l1, l2)))
        }
        (None, Some(_)) => vertical_crossing(l1, l2),
        (Some(_), None) => vertical_crossing(l2, l1),
        (Some(f), Some(g)) => {
            if f.linear_coefficient() == g.linear_coefficient() {
                (f.absolute_coefficient() == g.absolute_coefficient())
                    .then(|| Intersection::Line(first_line(l1, l2)))
            } else {
                let crossing = line_line_point_2d(
                    &l1.a().coords(),
                    &l1.b().coords(),
                    &l2.a().coords(),
                    &l2.b().coords(),
                )
                .ok_or_else(|| undefined(ShapeKind::Line, ShapeKind::Line))?;
                Some(Intersection::Point(Point::from_vector(&crossing)))
            }
        }
    };
    Ok(found)
}

fn vertical_crossing(vertical: &Line, other: &Line) -> Option<Intersection> {
    let x = vertical.a().x();
    other
        .y(x)
        .map(|y| Intersection::Point(Point::rounded(x, y)))
}

/// Of two coincident lines, the one with canonically smaller defining points.
fn first_line(l1: &Line, l2: &Line) -> Line {
    let order = l1
        .a()
        .canonical_cmp(l2.a())
        .then_with(|| l1.b().canonical_cmp(l2.b()));
    if order == Ordering::Greater {
        *l2
    } else {
        *l1
    }
}

/// The span between two points on a common line, collapsing to a point when
/// they coincide.
fn span(p: Point, q: Point) -> Intersection {
    if p.coincides(&q) {
        Intersection::Point(earlier(p, q))
    } else {
        Intersection::Segment(Segment::spanning(p, q))
    }
}

pub(crate) fn segment_segment(s1: &Segment, s2: &Segment) -> Result<Option<Intersection>> {
    match line_line(&s1.support_line(), &s2.support_line())? {
        None => Ok(None),
        Some(Intersection::Point(p)) => {
            Ok((s1.contains(&p) && s2.contains(&p)).then_some(Intersection::Point(p)))
        }
        Some(Intersection::Line(_)) => {
            let start = later(*s1.a(), *s2.a());
            let end = earlier(*s1.b(), *s2.b());
            if start.coincides(&end) || start.canonical_cmp(&end) == Ordering::Less {
                Ok(Some(span(start, end)))
            } else {
                Ok(None)
            }
        }
        Some(found) => Err(unclassified(ShapeKind::Segment, ShapeKind::Segment, &found)),
    }
}

pub(crate) fn segment_line(segment: &Segment, line: &Line) -> Result<Option<Intersection>> {
    match line_line(&segment.support_line(), line)? {
        None => Ok(None),
        Some(Intersection::Point(p)) => Ok(segment.contains(&p).then_some(Intersection::Point(p))),
        Some(Intersection::Line(_)) => Ok(Some(Intersection::Segment(*segment))),
        Some(found) => Err(unclassified(ShapeKind::Segment, ShapeKind::Line, &found)),
    }
}

pub(crate) fn ray_line(ray: &Ray, line: &Line) -> Result<Option<Intersection>> {
    match line_line(&ray.support_line(), line)? {
        None => Ok(None),
        Some(Intersection::Point(p)) => Ok(ray.contains(&p).then_some(Intersection::Point(p))),
        Some(Intersection::Line(_)) => Ok(Some(Intersection::Ray(*ray))),
        Some(found) => Err(unclassified(ShapeKind::Ray, ShapeKind::Line, &found)),
    }
}

pub(crate) fn ray_segment(ray: &Ray, segment: &Segment) -> Result<Option<Intersection>> {
    match line_line(&ray.support_line(), &segment.support_line())? {
        None => Ok(None),
        Some(Intersection::Point(p)) => {
            Ok((ray.contains(&p) && segment.contains(&p)).then_some(Intersection::Point(p)))
        }
        Some(Intersection::Line(_)) => {
            let (a, b) = (*segment.a(), *segment.b());
            let clipped = match (ray.contains(&a), ray.contains(&b)) {
                (true, true) => Some(Intersection::Segment(*segment)),
                (true, false) => Some(span(*ray.origin(), a)),
                (false, true) => Some(span(*ray.origin(), b)),
                (false, false) => None,
            };
            Ok(clipped)
        }
        Some(found) => Err(unclassified(ShapeKind::Ray, ShapeKind::Segment, &found)),
    }
}

/// Collinear rays heading the same way share the one starting further ahead;
/// facing rays share the stretch between their origins.
pub(crate) fn ray_ray(r1: &Ray, r2: &Ray) -> Result<Option<Intersection>> {
    match line_line(&r1.support_line(), &r2.support_line())? {
        None => Ok(None),
        Some(Intersection::Point(p)) => {
            Ok((r1.contains(&p) && r2.contains(&p)).then_some(Intersection::Point(p)))
        }
        Some(Intersection::Line(_)) => {
            let (o1, o2) = (*r1.origin(), *r2.origin());
            if r1.direction().dot(&r2.direction()) > 0.0 {
                // With a shared origin the smaller direction point wins.
                let r2_ahead = r1.contains(&o2)
                    && (!r2.contains(&o1)
                        || r2.through().canonical_cmp(r1.through()) == Ordering::Less);
                let ahead = if r2_ahead { *r2 } else { *r1 };
                Ok(Some(Intersection::Ray(ahead)))
            } else {
                Ok(r1.contains(&o2).then(|| span(o1, o2)))
            }
        }
        Some(found) => Err(unclassified(ShapeKind::Ray, ShapeKind::Ray, &found)),
    }
}
