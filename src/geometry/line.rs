use crate::math::{compare, is_between, trim9, CompareOp, Point2, BOUNDS_PRECISION};

use super::Circle;

/// A bounded segment from `(x1, y1)` to `(x2, y2)`.
///
/// All four coordinates are trimmed to [`DECIMALS`](crate::math::DECIMALS) fractional digits when
/// stored. The endpoint order only matters as the corners of the bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

impl Line {
    /// Creates a new segment.
    #[must_use]
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            x1: trim9(x1),
            y1: trim9(y1),
            x2: trim9(x2),
            y2: trim9(y2),
        }
    }

    /// Creates a segment between two points.
    #[must_use]
    pub fn from_points(start: Point2, end: Point2) -> Self {
        Self::new(start.x, start.y, end.x, end.y)
    }

    /// Returns the x coordinate of the first endpoint.
    #[must_use]
    pub fn x1(&self) -> f64 {
        self.x1
    }

    /// Returns the y coordinate of the first endpoint.
    #[must_use]
    pub fn y1(&self) -> f64 {
        self.y1
    }

    /// Returns the x coordinate of the second endpoint.
    #[must_use]
    pub fn x2(&self) -> f64 {
        self.x2
    }

    /// Returns the y coordinate of the second endpoint.
    #[must_use]
    pub fn y2(&self) -> f64 {
        self.y2
    }

    /// Returns the first endpoint.
    #[must_use]
    pub fn start(&self) -> Point2 {
        Point2::new(self.x1, self.y1)
    }

    /// Returns the second endpoint.
    #[must_use]
    pub fn end(&self) -> Point2 {
        Point2::new(self.x2, self.y2)
    }

    /// Replaces the x coordinate of the first endpoint, trimmed like the constructor.
    pub fn set_x1(&mut self, x: f64) {
        self.x1 = trim9(x);
    }

    /// Replaces the y coordinate of the first endpoint, trimmed like the constructor.
    pub fn set_y1(&mut self, y: f64) {
        self.y1 = trim9(y);
    }

    /// Replaces the x coordinate of the second endpoint, trimmed like the constructor.
    pub fn set_x2(&mut self, x: f64) {
        self.x2 = trim9(x);
    }

    /// Replaces the y coordinate of the second endpoint, trimmed like the constructor.
    pub fn set_y2(&mut self, y: f64) {
        self.y2 = trim9(y);
    }

    /// Returns the x coordinate at which the supporting line crosses height `y`.
    ///
    /// Returns `None` for horizontal segments, or when the result falls outside
    /// the segment's x range.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn point_at_y(&self, y: f64) -> Option<f64> {
        if self.y2 == self.y1 {
            return None;
        }
        let x = trim9((y - self.y1) * (self.x2 - self.x1) / (self.y2 - self.y1) + self.x1);
        is_between(x, self.x1, self.x2, BOUNDS_PRECISION).then_some(x)
    }

    /// Returns the y coordinate at which the supporting line crosses `x`.
    ///
    /// Returns `None` for vertical segments, or when the result falls outside
    /// the segment's y range.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn point_at_x(&self, x: f64) -> Option<f64> {
        if self.x2 == self.x1 {
            return None;
        }
        let y = trim9((x - self.x1) * (self.y2 - self.y1) / (self.x2 - self.x1) + self.y1);
        is_between(y, self.y1, self.y2, BOUNDS_PRECISION).then_some(y)
    }

    /// Returns whether `(x, y)` lies inside the segment's bounding box.
    #[must_use]
    pub fn bounds_have_point(&self, x: f64, y: f64) -> bool {
        is_between(x, self.x1, self.x2, BOUNDS_PRECISION)
            && is_between(y, self.y1, self.y2, BOUNDS_PRECISION)
    }

    /// Returns whether `(x, y)` lies on the segment.
    ///
    /// Off-axis segments compare the trimmed slope from the first endpoint to
    /// the point against the segment's own trimmed slope.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn has_point(&self, x: f64, y: f64) -> bool {
        if !self.bounds_have_point(x, y) {
            return false;
        }

        let same = |a: f64, b: f64| compare(a, b, CompareOp::Eq, BOUNDS_PRECISION);

        // Axis-aligned (or zero-length) segments: the bounding box is the segment.
        if self.x1 == self.x2 {
            return same(x, self.x1);
        }
        if self.y1 == self.y2 {
            return same(y, self.y1);
        }
        if x == self.x1 {
            return same(y, self.y1);
        }

        let m = trim9((self.y2 - self.y1) / (self.x2 - self.x1));
        trim9((y - self.y1) / (x - self.x1)) == m
    }

    /// Intersection point of two segments.
    ///
    /// Parallel and coincident segments report no intersection.
    #[must_use]
    pub fn segment_intersection(&self, other: &Line) -> Option<Point2> {
        let denom = (self.x1 - self.x2) * (other.y1 - other.y2)
            - (self.y1 - self.y2) * (other.x1 - other.x2);
        if compare(denom, 0.0, CompareOp::Eq, BOUNDS_PRECISION) {
            return None;
        }

        let det_self = self.x1 * self.y2 - self.y1 * self.x2;
        let det_other = other.x1 * other.y2 - other.y1 * other.x2;

        let x = trim9((det_self * (other.x1 - other.x2) - (self.x1 - self.x2) * det_other) / denom);
        let y = trim9((det_self * (other.y1 - other.y2) - (self.y1 - self.y2) * det_other) / denom);

        (self.bounds_have_point(x, y) && other.bounds_have_point(x, y)).then(|| Point2::new(x, y))
    }

    /// Intersection points of this segment with an arc.
    ///
    /// Same as [`Circle::line_intersection`].
    #[must_use]
    pub fn circle_intersection(&self, circle: &Circle) -> Option<Vec<Point2>> {
        circle.line_intersection(self)
    }
}
