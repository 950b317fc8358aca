//! Pairs with a polygon or triangle, computed edge by edge.
//!
//! Edge results are flattened into pieces in edge order and consolidated:
//! overlapping collinear segments are joined until none can be, then points
//! already covered by a segment or by an earlier point are dropped.

use std::cmp::Ordering;

use crate::error::Result;
use crate::geometry::{Circle, Line, Polygon, Ray, Segment, ShapeKind, Triangle};

use super::circle::circle_segment;
use super::linear::{ray_segment, segment_line, segment_segment};
use super::{unclassified, Intersection, Piece};

/// Runs `per_edge` on every edge and flattens the results.
fn edge_pieces<F>(polygon: &Polygon, second: ShapeKind, mut per_edge: F) -> Result<Vec<Piece>>
where
    F: FnMut(&Segment) -> Result<Option<Intersection>>,
{
    let mut pieces = Vec::new();
    for edge in polygon.edges() {
        if let Some(found) = per_edge(edge)? {
            let split = found
                .into_pieces()
                .map_err(|found| unclassified(ShapeKind::Polygon, second, &found))?;
            pieces.extend(split);
        }
    }
    Ok(pieces)
}

/// First pair of segments (by position) that [`Segment::join`] accepts.
fn find_join(pieces: &[Piece]) -> Option<(usize, usize, Segment)> {
    pieces.iter().enumerate().find_map(|(i, first)| {
        let Piece::Segment(first) = first else {
            return None;
        };
        pieces
            .iter()
            .enumerate()
            .skip(i + 1)
            .find_map(|(j, second)| match second {
                Piece::Segment(second) => first.join(second).ok().map(|joined| (i, j, joined)),
                Piece::Point(_) => None,
            })
    })
}

fn consolidate(mut pieces: Vec<Piece>) -> Vec<Piece> {
    while let Some((i, j, joined)) = find_join(&pieces) {
        pieces[i] = Piece::Segment(joined);
        pieces.remove(j);
    }

    let segments: Vec<Segment> = pieces
        .iter()
        .filter_map(|piece| match piece {
            Piece::Segment(s) => Some(*s),
            Piece::Point(_) => None,
        })
        .collect();

    let mut kept: Vec<Piece> = Vec::with_capacity(pieces.len());
    for piece in pieces {
        if let Piece::Point(p) = piece {
            let covered = segments.iter().any(|s| s.contains(&p));
            let repeated = kept
                .iter()
                .any(|k| matches!(k, Piece::Point(q) if q.coincides(&p)));
            if covered || repeated {
                continue;
            }
        }
        kept.push(piece);
    }
    kept
}

pub(crate) fn polygon_line(polygon: &Polygon, line: &Line) -> Result<Option<Intersection>> {
    let pieces = edge_pieces(polygon, ShapeKind::Line, |edge| segment_line(edge, line))?;
    Ok(Intersection::from_pieces(consolidate(pieces)))
}

pub(crate) fn polygon_ray(polygon: &Polygon, ray: &Ray) -> Result<Option<Intersection>> {
    let pieces = edge_pieces(polygon, ShapeKind::Ray, |edge| ray_segment(ray, edge))?;
    Ok(Intersection::from_pieces(consolidate(pieces)))
}

pub(crate) fn polygon_segment(polygon: &Polygon, segment: &Segment) -> Result<Option<Intersection>> {
    let pieces = edge_pieces(polygon, ShapeKind::Segment, |edge| {
        segment_segment(edge, segment)
    })?;
    Ok(Intersection::from_pieces(consolidate(pieces)))
}

/// Every edge is tested against the circle, so crossings between vertices
/// are found as well as vertices touching the circle.
pub(crate) fn polygon_circle(polygon: &Polygon, circle: &Circle) -> Result<Option<Intersection>> {
    let pieces = edge_pieces(polygon, ShapeKind::Circle, |edge| circle_segment(circle, edge))?;
    Ok(Intersection::from_pieces(consolidate(pieces)))
}

/// Two polygons with the same vertex sequence are the same polygon, and the
/// first one is returned whole.
pub(crate) fn polygon_polygon(a: &Polygon, b: &Polygon) -> Result<Option<Intersection>> {
    if a.vertices() == b.vertices() {
        return Ok(Some(Intersection::Polygon(a.clone())));
    }
    Ok(Intersection::from_pieces(boundary_overlap(a, b)?))
}

pub(crate) fn triangle_triangle(t: &Triangle, u: &Triangle) -> Result<Option<Intersection>> {
    if t == u {
        return Ok(Some(Intersection::Triangle(t.clone())));
    }
    Ok(Intersection::from_pieces(boundary_overlap(
        t.as_polygon(),
        u.as_polygon(),
    )?))
}

/// Lexicographic order of the vertex sequences, shorter first on a tie.
fn vertex_order(a: &Polygon, b: &Polygon) -> Ordering {
    a.vertices()
        .iter()
        .zip(b.vertices())
        .map(|(p, q)| p.canonical_cmp(q))
        .find(|order| order.is_ne())
        .unwrap_or_else(|| a.vertices().len().cmp(&b.vertices().len()))
}

/// Each edge of one polygon against the whole other polygon.
///
/// The operands are put in vertex order first so the pieces come out the
/// same whichever polygon the caller passed first.
fn boundary_overlap(a: &Polygon, b: &Polygon) -> Result<Vec<Piece>> {
    let (a, b) = if vertex_order(a, b) == Ordering::Greater {
        (b, a)
    } else {
        (a, b)
    };
    let mut pieces = Vec::new();
    for edge in a.edges() {
        if let Some(found) = polygon_segment(b, edge)? {
            let split = found
                .into_pieces()
                .map_err(|found| unclassified(ShapeKind::Polygon, ShapeKind::Polygon, &found))?;
            pieces.extend(split);
        }
    }
    Ok(consolidate(pieces))
}
