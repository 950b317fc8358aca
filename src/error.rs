use thiserror::Error;

use crate::geometry::ShapeKind;

/// Top-level error type for the planimetry library.
#[derive(Debug, Error)]
pub enum PlanimetryError {
    #[error(transparent)]
    Construction(#[from] ConstructionError),

    #[error(transparent)]
    Intersection(#[from] IntersectionError),

    #[error("unsupported rounding kind: {0:?}")]
    UnsupportedRoundingKind(String),
}

/// Errors raised while constructing a primitive from caller input.
///
/// A failed construction never yields a partially built value.
#[derive(Debug, Error)]
pub enum ConstructionError {
    #[error("invalid construction: {0}")]
    Degenerate(String),

    #[error("invalid construction: {what} must be finite, got {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("invalid construction: radius must be non-negative, got {0}")]
    NegativeRadius(f64),

    #[error("invalid construction: cannot parse point from {0:?}")]
    Parse(String),
}

/// Errors raised by the intersection engine and segment merging.
#[derive(Debug, Error)]
pub enum IntersectionError {
    #[error("intersection between {first} and {second} is not defined")]
    Undefined { first: ShapeKind, second: ShapeKind },

    #[error("segments do not share a support line")]
    NonCollinearJoin,

    #[error("segments neither touch nor overlap")]
    DisjointJoin,
}

/// Convenience type alias for results using [`PlanimetryError`].
pub type Result<T> = std::result::Result<T, PlanimetryError>;

/// Fails with [`ConstructionError::NonFinite`] unless `value` is finite.
pub(crate) fn ensure_finite(what: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConstructionError::NonFinite { what, value }.into())
    }
}
