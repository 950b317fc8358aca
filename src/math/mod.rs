pub mod distance_2d;
pub mod intersect_2d;
pub mod polynom;
pub mod round;

pub use polynom::Polynom;
pub use round::{round, round_angle, round_coordinate, RoundingKind};

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Decimal places kept for coordinates, slopes, radii and distances.
pub const COORDINATE_DECIMALS: i32 = 6;

/// Decimal places kept for angles in radians.
pub const ANGLE_DECIMALS: i32 = 15;

/// Slack for incidence tests between rounded values: two units of the last
/// retained coordinate decimal.
///
/// Only "does this point lie on that primitive" and "are these the same
/// vertex" use it. Classification (parallel, tangent, disjoint) compares
/// rounded values exactly.
pub const INCIDENCE_TOLERANCE: f64 = 2e-6;

/// Returns whether two rounded coordinates are equal up to [`INCIDENCE_TOLERANCE`].
#[must_use]
pub fn coordinates_match(a: f64, b: f64) -> bool {
    (a - b).abs() <= INCIDENCE_TOLERANCE
}
