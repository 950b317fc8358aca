use std::fmt;

use crate::error::{ConstructionError, Result};
use crate::math::round_angle;

use super::line::on_support;
use super::polygon::write_vertices;
use super::{Point, Polygon, Segment};

/// A triangle: a three-vertex [`Polygon`] with named vertices and edges.
///
/// Vertices are `A`, `B`, `C`; edge `a` is the one opposite `A` (`BC`),
/// `b` is opposite `B` (`AC`) and `c` is opposite `C` (`AB`).
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    polygon: Polygon,
}

// Polygon edge `i` ends at vertex `i` and starts at the one before it:
// edges = [CA, AB, BC] for vertices [A, B, C].
const EDGE_A: usize = 2;
const EDGE_B: usize = 0;
const EDGE_C: usize = 1;

impl Triangle {
    /// Creates the triangle `ABC`.
    ///
    /// # Errors
    ///
    /// Returns an error if two vertices coincide or all three are collinear.
    pub fn new(a: Point, b: Point, c: Point) -> Result<Self> {
        if a.distance(&b) == 0.0 || a.distance(&c) == 0.0 || b.distance(&c) == 0.0 {
            return Err(
                ConstructionError::Degenerate("triangle vertices must differ".into()).into(),
            );
        }
        if on_support(&a, &b, &c) {
            return Err(ConstructionError::Degenerate(format!(
                "triangle vertices {a}, {b}, {c} are collinear"
            ))
            .into());
        }
        Ok(Self {
            polygon: Polygon::new(vec![a, b, c])?,
        })
    }

    /// The triangle viewed as a general polygon.
    #[must_use]
    pub fn as_polygon(&self) -> &Polygon {
        &self.polygon
    }

    /// Vertex `A`.
    #[must_use]
    pub fn vertex_a(&self) -> &Point {
        &self.polygon.vertices()[0]
    }

    /// Vertex `B`.
    #[must_use]
    pub fn vertex_b(&self) -> &Point {
        &self.polygon.vertices()[1]
    }

    /// Vertex `C`.
    #[must_use]
    pub fn vertex_c(&self) -> &Point {
        &self.polygon.vertices()[2]
    }

    /// Edge `a = BC`, opposite `A`.
    #[must_use]
    pub fn edge_a(&self) -> &Segment {
        &self.polygon.edges()[EDGE_A]
    }

    /// Edge `b = AC`, opposite `B`.
    #[must_use]
    pub fn edge_b(&self) -> &Segment {
        &self.polygon.edges()[EDGE_B]
    }

    /// Edge `c = AB`, opposite `C`.
    #[must_use]
    pub fn edge_c(&self) -> &Segment {
        &self.polygon.edges()[EDGE_C]
    }

    /// Interior angle at `A`, in radians.
    #[must_use]
    pub fn alpha(&self) -> f64 {
        let (a, b, c) = self.side_lengths();
        angle_opposite(a, b, c)
    }

    /// Interior angle at `B`, in radians.
    #[must_use]
    pub fn beta(&self) -> f64 {
        let (a, b, c) = self.side_lengths();
        angle_opposite(b, a, c)
    }

    /// Interior angle at `C`, in radians.
    #[must_use]
    pub fn gamma(&self) -> f64 {
        let (a, b, c) = self.side_lengths();
        angle_opposite(c, a, b)
    }

    fn side_lengths(&self) -> (f64, f64, f64) {
        (
            self.edge_a().length(),
            self.edge_b().length(),
            self.edge_c().length(),
        )
    }
}

/// Law of cosines: the angle facing side `opposite` between sides `s1`, `s2`.
///
/// The cosine is clamped to `[-1, 1]` so rounding residue cannot leave the
/// domain of `acos`.
fn angle_opposite(opposite: f64, s1: f64, s2: f64) -> f64 {
    let cos = (s1 * s1 + s2 * s2 - opposite * opposite) / (2.0 * s1 * s2);
    round_angle(cos.clamp(-1.0, 1.0).acos())
}

impl AsRef<Polygon> for Triangle {
    fn as_ref(&self) -> &Polygon {
        &self.polygon
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Triangle: ")?;
        write_vertices(f, self.polygon.vertices())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_3, FRAC_PI_4, PI};

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y).unwrap()
    }

    fn tri(a: (f64, f64), b: (f64, f64), c: (f64, f64)) -> Triangle {
        Triangle::new(p(a.0, a.1), p(b.0, b.1), p(c.0, c.1)).unwrap()
    }

    #[test]
    fn named_edges_face_their_vertices() {
        let t = tri((0.0, 0.0), (4.0, 0.0), (0.0, 3.0));
        assert_eq!(*t.edge_a(), Segment::new(*t.vertex_b(), *t.vertex_c()).unwrap());
        assert_eq!(*t.edge_b(), Segment::new(*t.vertex_a(), *t.vertex_c()).unwrap());
        assert_eq!(*t.edge_c(), Segment::new(*t.vertex_a(), *t.vertex_b()).unwrap());
        assert_eq!(t.edge_a().length(), 5.0);
    }

    #[test]
    fn right_triangle_angles() {
        let t = tri((0.0, 0.0), (4.0, 0.0), (0.0, 4.0));
        assert_abs_diff_eq!(t.alpha(), FRAC_PI_2, epsilon = 1e-6);
        assert_abs_diff_eq!(t.beta(), FRAC_PI_4, epsilon = 1e-6);
        assert_abs_diff_eq!(t.gamma(), FRAC_PI_4, epsilon = 1e-6);
    }

    #[test]
    fn equilateral_angles() {
        let t = tri((0.0, 0.0), (2.0, 0.0), (1.0, 3.0_f64.sqrt()));
        for angle in [t.alpha(), t.beta(), t.gamma()] {
            assert_abs_diff_eq!(angle, FRAC_PI_3, epsilon = 1e-6);
        }
    }

    #[test]
    fn angles_sum_to_pi() {
        let triangles = [
            tri((0.0, 0.0), (4.0, 0.0), (0.0, 3.0)),
            tri((-3.2, 1.7), (5.9, -0.4), (2.2, 8.8)),
            tri((0.0, 0.0), (100.0, 0.0), (50.0, 0.001)),
            tri((1.0, 1.0), (1.0, 9.0), (-7.5, 4.25)),
        ];
        for t in triangles {
            assert_abs_diff_eq!(t.alpha() + t.beta() + t.gamma(), PI, epsilon = 1e-12);
        }
    }

    #[test]
    fn collinear_vertices_are_rejected() {
        assert!(Triangle::new(p(0.0, 0.0), p(1.0, 1.0), p(5.0, 5.0)).is_err());
        assert!(Triangle::new(p(2.0, 0.0), p(2.0, 1.0), p(2.0, -7.0)).is_err());
    }

    #[test]
    fn coincident_vertices_are_rejected() {
        assert!(Triangle::new(p(0.0, 0.0), p(0.0, 0.0), p(1.0, 0.0)).is_err());
    }

    #[test]
    fn display_form() {
        let t = tri((0.0, 0.0), (1.0, 0.0), (0.0, 1.0));
        assert_eq!(t.to_string(), "Triangle: ([0, 0], [1, 0], [0, 1])");
    }
}
