pub mod error;
pub mod geometry;
pub mod intersect;
pub mod math;

pub use error::{PlanimetryError, Result};
pub use geometry::{
    Circle, Intersectable, Line, Point, Polygon, Ray, Segment, Shape, ShapeKind, ShapeRef,
    Triangle,
};
pub use intersect::{get_intersect, intersects, Intersection, Piece};
