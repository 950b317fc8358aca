use std::fmt;

use crate::error::{ConstructionError, Result};

use super::{Point, Segment};

/// A closed polygon given by its boundary vertices in traversal order.
///
/// The last vertex connects back to the first. `edges()[i]` joins
/// `vertices()[i]` with the vertex before it, so there are exactly as many
/// edges as vertices. Simplicity (no self-crossing edges) is assumed by the
/// intersection engine but not checked here.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point>,
    edges: Vec<Segment>,
}

impl Polygon {
    /// Creates a polygon and derives its edges.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than three vertices are given or two
    /// consecutive vertices coincide.
    pub fn new(vertices: Vec<Point>) -> Result<Self> {
        let n = vertices.len();
        if n < 3 {
            return Err(ConstructionError::Degenerate(format!(
                "a polygon needs at least 3 vertices, got {n}"
            ))
            .into());
        }
        let edges = (0..n)
            .map(|i| Segment::new(vertices[i], vertices[(i + n - 1) % n]))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { vertices, edges })
    }

    /// Boundary vertices in traversal order.
    #[must_use]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Edges; `edges()[i]` ends at `vertices()[i]`.
    #[must_use]
    pub fn edges(&self) -> &[Segment] {
        &self.edges
    }

    /// Whether `point` lies on the boundary.
    ///
    /// Interior points are not on the boundary.
    #[must_use]
    pub fn boundary_contains(&self, point: &Point) -> bool {
        self.edges.iter().any(|edge| edge.contains(point))
    }
}

/// Writes `(v0, v1, ...)`.
pub(crate) fn write_vertices(f: &mut fmt::Formatter<'_>, vertices: &[Point]) -> fmt::Result {
    f.write_str("(")?;
    for (i, vertex) in vertices.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{vertex}")?;
    }
    f.write_str(")")
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Polygon: ")?;
        write_vertices(f, &self.vertices)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y).unwrap()
    }

    fn diamond() -> Polygon {
        Polygon::new(vec![p(-10.0, 0.0), p(0.0, -10.0), p(10.0, 0.0), p(0.0, 10.0)]).unwrap()
    }

    #[test]
    fn edges_close_the_boundary() {
        let poly = diamond();
        assert_eq!(poly.edges().len(), poly.vertices().len());
        assert_eq!(poly.edges()[0], Segment::new(p(-10.0, 0.0), p(0.0, 10.0)).unwrap());
        assert_eq!(poly.edges()[2], Segment::new(p(10.0, 0.0), p(0.0, -10.0)).unwrap());
    }

    #[test]
    fn too_few_vertices() {
        assert!(Polygon::new(vec![p(0.0, 0.0), p(1.0, 0.0)]).is_err());
    }

    #[test]
    fn repeated_vertex_is_rejected() {
        assert!(Polygon::new(vec![p(0.0, 0.0), p(0.0, 0.0), p(1.0, 1.0)]).is_err());
    }

    #[test]
    fn boundary_only() {
        let poly = diamond();
        assert!(poly.boundary_contains(&p(5.0, 5.0)));
        assert!(poly.boundary_contains(&p(-10.0, 0.0)));
        assert!(!poly.boundary_contains(&p(0.0, 0.0)));
    }

    #[test]
    fn display_form() {
        let poly = Polygon::new(vec![p(-100.0, 0.0), p(0.0, -100.0), p(100.0, 0.0)]).unwrap();
        assert_eq!(poly.to_string(), "Polygon: ([-100, 0], [0, -100], [100, 0])");
    }
}
