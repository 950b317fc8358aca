use std::fmt;
use std::str::FromStr;

use super::{ANGLE_DECIMALS, COORDINATE_DECIMALS};
use crate::error::PlanimetryError;

/// Which rounding policy a value follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundingKind {
    /// Coordinates, slopes, intercepts, radii and distances.
    Coordinate,
    /// Angles in radians.
    Angle,
}

impl RoundingKind {
    /// Number of decimal places kept for this kind.
    #[must_use]
    pub const fn decimals(self) -> i32 {
        match self {
            Self::Coordinate => COORDINATE_DECIMALS,
            Self::Angle => ANGLE_DECIMALS,
        }
    }
}

impl fmt::Display for RoundingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Coordinate => f.write_str("coordinate"),
            Self::Angle => f.write_str("angle"),
        }
    }
}

impl FromStr for RoundingKind {
    type Err = PlanimetryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "coordinate" => Ok(Self::Coordinate),
            "angle" => Ok(Self::Angle),
            other => Err(PlanimetryError::UnsupportedRoundingKind(other.to_owned())),
        }
    }
}

/// Scaled magnitude (2^50) above which an `f64` keeps too few fractional
/// bits for rounding to be stable.
const EXACT_INTEGER_LIMIT: f64 = 1_125_899_906_842_624.0;

/// Rounds `x` to the decimal places of `kind`, half away from zero.
///
/// Negative zero comes back as positive zero so rounded values print and
/// compare uniformly. Values too large to carry the requested decimals, and
/// non-finite values, are returned unchanged.
#[must_use]
pub fn round(x: f64, kind: RoundingKind) -> f64 {
    let factor = 10f64.powi(kind.decimals());
    let scaled = x * factor;
    if !scaled.is_finite() || scaled.abs() >= EXACT_INTEGER_LIMIT {
        return x + 0.0;
    }
    scaled.round() / factor + 0.0
}

/// Shorthand for `round(x, RoundingKind::Coordinate)`.
#[must_use]
pub fn round_coordinate(x: f64) -> f64 {
    round(x, RoundingKind::Coordinate)
}

/// Shorthand for `round(x, RoundingKind::Angle)`.
///
/// At fifteen decimals the scaled value reaches the pass-through limit from
/// about 1.126 rad upward, so larger angles (right and obtuse ones included)
/// come back unchanged. They differ from their fifteen-decimal rounding by
/// less than `1e-15`.
#[must_use]
pub fn round_angle(x: f64) -> f64 {
    round(x, RoundingKind::Angle)
}
