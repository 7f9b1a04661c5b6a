mod circle;
mod line;

pub use circle::Circle;
pub use line::Line;

use crate::math::Point2;

/// Points produced by every geometric query.
pub type Point = Point2;

/// Either primitive, for callers that intersect shapes without knowing
/// their kinds up front.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Line(Line),
    Circle(Circle),
}

impl Shape {
    /// Intersection points of two shapes.
    ///
    /// A segment-segment hit is returned as a single-element vector.
    #[must_use]
    pub fn intersection(&self, other: &Shape) -> Option<Vec<Point2>> {
        tracing::trace!(lhs = self.kind(), rhs = other.kind(), "intersecting shapes");
        match (self, other) {
            (Shape::Line(a), Shape::Line(b)) => a.segment_intersection(b).map(|p| vec![p]),
            (Shape::Line(line), Shape::Circle(circle))
            | (Shape::Circle(circle), Shape::Line(line)) => circle.line_intersection(line),
            (Shape::Circle(a), Shape::Circle(b)) => a.circle_intersection(b),
        }
    }

    /// Returns whether the point lies on the shape.
    #[must_use]
    pub fn has_point(&self, x: f64, y: f64) -> bool {
        match self {
            Shape::Line(line) => line.has_point(x, y),
            Shape::Circle(circle) => circle.has_point(x, y),
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Shape::Line(_) => "line",
            Shape::Circle(_) => "circle",
        }
    }
}

impl From<Line> for Shape {
    fn from(line: Line) -> Self {
        Shape::Line(line)
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Shape::Circle(circle)
    }
}
