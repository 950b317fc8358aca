use super::Vector2;

/// Crossing point of the line through `a1`, `b1` with the line through `a2`, `b2`.
///
/// Each line is written as `cross(d, p) = cross(d, a)` with `d = b - a` and the
/// 2×2 system is solved by Cramer's rule. Swapping the two lines negates both
/// numerators and the determinant, so the result is bit-identical in either
/// order. Returns `None` for parallel or degenerate input.
#[must_use]
pub fn line_line_point_2d(
    a1: &Vector2,
    b1: &Vector2,
    a2: &Vector2,
    b2: &Vector2,
) -> Option<Vector2> {
    let d1 = b1 - a1;
    let d2 = b2 - a2;
    let det = d1.x * d2.y - d1.y * d2.x;
    if det == 0.0 || !det.is_finite() {
        return None;
    }
    let c1 = d1.x * a1.y - d1.y * a1.x;
    let c2 = d2.x * a2.y - d2.y * a2.x;
    let x = (c1 * d2.x - c2 * d1.x) / det;
    let y = (c1 * d2.y - c2 * d1.y) / det;
    Some(Vector2::new(x, y))
}

/// The two points at distance `half_chord` on either side of `foot`, along
/// `direction` (which need not be normalized).
///
/// Returns `None` for a zero direction.
#[must_use]
pub fn chord_endpoints_2d(
    foot: &Vector2,
    direction: &Vector2,
    half_chord: f64,
) -> Option<(Vector2, Vector2)> {
    let len = direction.norm();
    if len == 0.0 || !len.is_finite() {
        return None;
    }
    let offset = direction * (half_chord / len);
    Some((foot + offset, foot - offset))
}

/// Secant points of two circles whose centers are `dist` apart, with
/// `|r1 - r2| < dist < r1 + r2`.
///
/// Law of cosines gives the distance `a` from `c1` to the radical line along
/// the center line; the chord half-length `h` is then offset perpendicular to
/// it. Returns `None` for coincident centers or a non-real chord.
#[must_use]
pub fn circle_circle_points_2d(
    c1: &Vector2,
    r1: f64,
    c2: &Vector2,
    r2: f64,
) -> Option<(Vector2, Vector2)> {
    let delta = c2 - c1;
    let dist_sq = delta.norm_squared();
    let dist = dist_sq.sqrt();
    if dist == 0.0 {
        return None;
    }

    let a = (r1 * r1 - r2 * r2 + dist_sq) / (2.0 * dist);
    let h_sq = r1 * r1 - a * a;
    if h_sq < 0.0 || !h_sq.is_finite() {
        return None;
    }
    let h = h_sq.sqrt();

    let unit = delta / dist;
    let mid = c1 + unit * a;
    let perp = Vector2::new(-unit.y, unit.x);
    Some((mid + perp * h, mid - perp * h))
}

/// Touching point of two externally tangent circles: the point dividing the
/// center line in the ratio `r1 : r2`.
#[must_use]
pub fn external_tangent_point_2d(c1: &Vector2, r1: f64, c2: &Vector2, r2: f64) -> Vector2 {
    let total = r1 + r2;
    if total == 0.0 {
        return *c1;
    }
    c1 + (c2 - c1) * (r1 / total)
}

/// Touching point of two internally tangent circles: on the ray from the
/// larger circle's center through the smaller one's, at the larger radius.
#[must_use]
pub fn internal_tangent_point_2d(c1: &Vector2, r1: f64, c2: &Vector2, r2: f64) -> Option<Vector2> {
    let (big, big_r, small) = if r1 >= r2 { (c1, r1, c2) } else { (c2, r2, c1) };
    let delta = small - big;
    let dist = delta.norm();
    if dist == 0.0 {
        return None;
    }
    Some(big + delta * (big_r / dist))
}
