mod circle;
mod line;
mod point;
mod polygon;
mod ray;
mod segment;
mod triangle;

use std::fmt;

pub use circle::Circle;
pub use line::Line;
pub use point::Point;
pub use polygon::Polygon;
pub use ray::Ray;
pub use segment::Segment;
pub use triangle::Triangle;

pub(crate) use segment::{earlier, later};

use crate::error::Result;
use crate::intersect::{self, Intersection};

/// Tag naming which primitive a value is.
///
/// The derived order is the ranking used to normalize a pair of kinds
/// before dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ShapeKind {
    Point,
    Line,
    Ray,
    Segment,
    Circle,
    Polygon,
    Triangle,
}

impl ShapeKind {
    /// Every kind, in rank order.
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::Point,
        ShapeKind::Line,
        ShapeKind::Ray,
        ShapeKind::Segment,
        ShapeKind::Circle,
        ShapeKind::Polygon,
        ShapeKind::Triangle,
    ];

    /// Human-readable name of the kind.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Point => "Point",
            ShapeKind::Line => "Line",
            ShapeKind::Ray => "Ray",
            ShapeKind::Segment => "Segment",
            ShapeKind::Circle => "Circle",
            ShapeKind::Polygon => "Polygon",
            ShapeKind::Triangle => "Triangle",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An owned primitive of any kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Point(Point),
    Line(Line),
    Ray(Ray),
    Segment(Segment),
    Circle(Circle),
    Polygon(Polygon),
    Triangle(Triangle),
}

impl Shape {
    /// Kind tag of this shape.
    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        self.view().kind()
    }

    /// Borrowed view of this shape.
    #[must_use]
    pub fn view(&self) -> ShapeRef<'_> {
        match self {
            Shape::Point(p) => ShapeRef::Point(p),
            Shape::Line(l) => ShapeRef::Line(l),
            Shape::Ray(r) => ShapeRef::Ray(r),
            Shape::Segment(s) => ShapeRef::Segment(s),
            Shape::Circle(c) => ShapeRef::Circle(c),
            Shape::Polygon(p) => ShapeRef::Polygon(p),
            Shape::Triangle(t) => ShapeRef::Triangle(t),
        }
    }
}

/// A borrowed primitive of any kind; what the intersection engine dispatches on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeRef<'a> {
    Point(&'a Point),
    Line(&'a Line),
    Ray(&'a Ray),
    Segment(&'a Segment),
    Circle(&'a Circle),
    Polygon(&'a Polygon),
    Triangle(&'a Triangle),
}

impl ShapeRef<'_> {
    /// Kind tag of the viewed shape.
    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        match self {
            ShapeRef::Point(_) => ShapeKind::Point,
            ShapeRef::Line(_) => ShapeKind::Line,
            ShapeRef::Ray(_) => ShapeKind::Ray,
            ShapeRef::Segment(_) => ShapeKind::Segment,
            ShapeRef::Circle(_) => ShapeKind::Circle,
            ShapeRef::Polygon(_) => ShapeKind::Polygon,
            ShapeRef::Triangle(_) => ShapeKind::Triangle,
        }
    }
}

/// Capability shared by every primitive: intersecting with any other one.
pub trait Intersectable {
    /// Borrowed, kind-tagged view of `self`.
    fn shape_ref(&self) -> ShapeRef<'_>;

    /// Intersection of `self` with `other`; `None` when they do not meet.
    ///
    /// # Errors
    ///
    /// Returns [`IntersectionError::Undefined`](crate::error::IntersectionError::Undefined)
    /// if the pair cannot be classified.
    fn get_intersect<T: Intersectable + ?Sized>(&self, other: &T) -> Result<Option<Intersection>> {
        intersect::get_intersect(self.shape_ref(), other.shape_ref())
    }

    /// Whether `self` and `other` meet.
    ///
    /// # Errors
    ///
    /// Same as [`Intersectable::get_intersect`].
    fn intersects<T: Intersectable + ?Sized>(&self, other: &T) -> Result<bool> {
        intersect::intersects(self.shape_ref(), other.shape_ref())
    }
}

macro_rules! impl_shape {
    ($($kind:ident),* $(,)?) => {
        $(
            impl From<$kind> for Shape {
                fn from(value: $kind) -> Self {
                    Shape::$kind(value)
                }
            }

            impl<'a> From<&'a $kind> for ShapeRef<'a> {
                fn from(value: &'a $kind) -> Self {
                    ShapeRef::$kind(value)
                }
            }

            impl Intersectable for $kind {
                fn shape_ref(&self) -> ShapeRef<'_> {
                    ShapeRef::$kind(self)
                }
            }
        )*
    };
}

impl_shape!(Point, Line, Ray, Segment, Circle, Polygon, Triangle);

impl Intersectable for Shape {
    fn shape_ref(&self) -> ShapeRef<'_> {
        self.view()
    }
}

impl Intersectable for ShapeRef<'_> {
    fn shape_ref(&self) -> ShapeRef<'_> {
        *self
    }
}
