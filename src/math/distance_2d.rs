use super::Vector2;

/// Height at `x` of the line through `a` and `b`, unrounded.
///
/// `None` for a vertical line.
#[must_use]
pub fn evaluate_y_2d(a: &Vector2, b: &Vector2, x: f64) -> Option<f64> {
    let dx = b.x - a.x;
    if dx == 0.0 {
        return None;
    }
    Some(a.y + (x - a.x) * (b.y - a.y) / dx)
}

/// Abscissa at `y` of the line through `a` and `b`, unrounded.
///
/// `None` for a horizontal line.
#[must_use]
pub fn evaluate_x_2d(a: &Vector2, b: &Vector2, y: f64) -> Option<f64> {
    let dy = b.y - a.y;
    if dy == 0.0 {
        return None;
    }
    Some(a.x + (y - a.y) * (b.x - a.x) / dy)
}

/// Signed distance from `a`, measured along the direction `a → b`, of the
/// projection of `p` onto the line through `a` and `b`.
///
/// Zero when `a == b`.
#[must_use]
pub fn offset_along_2d(a: &Vector2, b: &Vector2, p: &Vector2) -> f64 {
    let d = b - a;
    let len = d.norm();
    if len == 0.0 {
        return 0.0;
    }
    (p - a).dot(&d) / len
}

/// Whether the line through `a` and `b` rises more slowly than it runs, so
/// that `y(x)` is the better-conditioned evaluation.
#[must_use]
pub fn is_shallow_2d(a: &Vector2, b: &Vector2) -> bool {
    (b.x - a.x).abs() >= (b.y - a.y).abs()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn v(x: f64, y: f64) -> Vector2 {
        Vector2::new(x, y)
    }

    #[test]
    fn evaluate_both_axes() {
        let (a, b) = (v(0.0, 1.0), v(2.0, 5.0));
        assert_abs_diff_eq!(evaluate_y_2d(&a, &b, 1.0).unwrap(), 3.0);
        assert_abs_diff_eq!(evaluate_x_2d(&a, &b, 3.0).unwrap(), 1.0);
    }

    #[test]
    fn vertical_has_no_height_function() {
        assert!(evaluate_y_2d(&v(1.0, 0.0), &v(1.0, 4.0), 1.0).is_none());
        assert_abs_diff_eq!(evaluate_x_2d(&v(1.0, 0.0), &v(1.0, 4.0), 9.0).unwrap(), 1.0);
    }

    #[test]
    fn horizontal_has_no_abscissa_function() {
        assert!(evaluate_x_2d(&v(0.0, 2.0), &v(3.0, 2.0), 2.0).is_none());
    }

    #[test]
    fn offset_is_signed() {
        let (a, b) = (v(0.0, 0.0), v(3.0, 4.0));
        assert_abs_diff_eq!(offset_along_2d(&a, &b, &v(3.0, 4.0)), 5.0);
        assert_abs_diff_eq!(offset_along_2d(&a, &b, &v(-3.0, -4.0)), -5.0);
        // Off-line points project onto the line.
        assert_abs_diff_eq!(offset_along_2d(&a, &b, &v(4.0, -3.0)), 0.0);
    }

    #[test]
    fn steepness_selects_axis() {
        assert!(is_shallow_2d(&v(0.0, 0.0), &v(2.0, 1.0)));
        assert!(!is_shallow_2d(&v(0.0, 0.0), &v(1.0, 2.0)));
    }
}
