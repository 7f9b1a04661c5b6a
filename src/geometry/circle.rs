use std::f64::consts::TAU;

use crate::error::{GeometryError, Result};
use crate::math::{is_between, trim, trim9, Point2, RoundingMode, Vector2, BOUNDS_PRECISION, DECIMALS};

use super::Line;

fn trim_point(p: Point2) -> Point2 {
    Point2::new(trim9(p.x), trim9(p.y))
}

/// A circular arc with center `(x, y)`, radius `r` and the angular range
/// spanned by `rad1` and `rad2` (radians, either order).
///
/// A range of at least one full turn makes a full circle. Bounds may lie
/// outside `[-2π, 2π]` and may span several turns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    x: f64,
    y: f64,
    r: f64,
    rad1: f64,
    rad2: f64,
}

impl Circle {
    /// Creates a new arc.
    ///
    /// Coordinates and radius are trimmed to [`DECIMALS`] digits. Of the two
    /// angle bounds the larger is floored and the smaller ceiled, so the
    /// stored range never grows past the requested one.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NegativeRadius`] if `r` is negative.
    pub fn new(x: f64, y: f64, r: f64, rad1: f64, rad2: f64) -> Result<Self> {
        if r < 0.0 {
            tracing::debug!(radius = r, "rejecting circle with negative radius");
            return Err(GeometryError::NegativeRadius { radius: r }.into());
        }

        let (rad1, rad2) = if rad1 > rad2 {
            (
                trim(rad1, DECIMALS, RoundingMode::Floor),
                trim(rad2, DECIMALS, RoundingMode::Ceil),
            )
        } else {
            (
                trim(rad1, DECIMALS, RoundingMode::Ceil),
                trim(rad2, DECIMALS, RoundingMode::Floor),
            )
        };

        Ok(Self {
            x: trim9(x),
            y: trim9(y),
            r: trim9(r),
            rad1,
            rad2,
        })
    }

    /// Creates a full circle covering `[0, 2π]`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NegativeRadius`] if `r` is negative.
    pub fn full(x: f64, y: f64, r: f64) -> Result<Self> {
        Self::new(x, y, r, 0.0, TAU)
    }

    /// Returns the x coordinate of the center.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Returns the y coordinate of the center.
    #[must_use]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Returns the radius of the circle.
    #[must_use]
    pub fn r(&self) -> f64 {
        self.r
    }

    /// Returns the first angle bound, as stored.
    #[must_use]
    pub fn rad1(&self) -> f64 {
        self.rad1
    }

    /// Returns the second angle bound, as stored.
    #[must_use]
    pub fn rad2(&self) -> f64 {
        self.rad2
    }

    /// Returns the center of the circle.
    #[must_use]
    pub fn center(&self) -> Point2 {
        Point2::new(self.x, self.y)
    }

    /// Returns whether the angular range covers a full turn.
    #[must_use]
    pub fn is_full(&self) -> bool {
        // Trimming may have pulled each bound in by one unit of the last digit.
        let slack = 2.0 * 10f64.powi(-DECIMALS);
        (self.rad2 - self.rad1).abs() + slack >= TAU
    }

    fn contains_angle(&self, rad: f64) -> bool {
        is_between(rad, self.rad1, self.rad2, BOUNDS_PRECISION)
    }

    /// Returns the x coordinate at angle `rad`, or `None` outside the arc.
    #[must_use]
    pub fn x_at_angle(&self, rad: f64) -> Option<f64> {
        self.contains_angle(trim9(rad))
            .then(|| trim9(self.r * rad.cos() + self.x))
    }

    /// Returns the y coordinate at angle `rad`, or `None` outside the arc.
    #[must_use]
    pub fn y_at_angle(&self, rad: f64) -> Option<f64> {
        self.contains_angle(trim9(rad))
            .then(|| trim9(self.r * rad.sin() + self.y))
    }

    /// Returns the point at angle `rad`, or `None` outside the arc.
    #[must_use]
    pub fn point_at_angle(&self, rad: f64) -> Option<Point2> {
        self.contains_angle(trim9(rad)).then(|| {
            trim_point(Point2::new(
                self.r * rad.cos() + self.x,
                self.r * rad.sin() + self.y,
            ))
        })
    }

    /// Recovers the angle of `(x, y)` as seen from the center.
    ///
    /// The raw `atan2` angle is returned when it lies in the arc's range.
    /// Otherwise it is shifted by whole turns onto the first turn at or above
    /// the lower bound, and that unwrapped angle is returned if it lies in
    /// range. On a full turn every point but the center gets an angle.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn angle_at_point(&self, x: f64, y: f64) -> Option<f64> {
        let offset = Point2::new(x, y) - self.center();
        if offset.x == 0.0 && offset.y == 0.0 {
            return None;
        }

        let rad = offset.y.atan2(offset.x);
        if rad.is_nan() {
            return None;
        }
        if self.contains_angle(rad) {
            return Some(rad);
        }

        let low = self.rad1.min(self.rad2);
        let turns = ((low - rad) / TAU).ceil();
        // The turn below is kept for candidates that land within epsilon of `low`.
        let found = [turns - 1.0, turns]
            .into_iter()
            .map(|k| trim9(rad + k * TAU))
            .find(|&candidate| self.contains_angle(candidate));

        // Inward-biased bounds leave a sliver uncovered on a full turn.
        if found.is_none() && self.is_full() {
            return Some(trim9(rad + turns * TAU));
        }
        found
    }

    /// Returns whether the angle of `(x, y)` lies in the arc's range.
    ///
    /// The distance to the center is not checked; callers pass points already
    /// known to be on the circle.
    #[must_use]
    pub fn has_point(&self, x: f64, y: f64) -> bool {
        self.angle_at_point(x, y).is_some()
    }

    /// Intersection points of two arcs.
    ///
    /// Tangent circles yield a single point. Concentric circles never
    /// intersect.
    #[must_use]
    pub fn circle_intersection(&self, other: &Circle) -> Option<Vec<Point2>> {
        let axis = other.center() - self.center();
        let d = axis.norm();

        if d == 0.0 || d > self.r + other.r || d < (self.r - other.r).abs() {
            return None;
        }

        // Distance from our center to the radical line, and half chord length.
        let a = (self.r.powi(2) - other.r.powi(2) + d.powi(2)) / (2.0 * d);
        let h = (self.r.powi(2) - a.powi(2)).max(0.0).sqrt();

        let mid = self.center() + axis * (a / d);
        let perp = Vector2::new(-axis.y, axis.x) * (h / d);

        let mut points = vec![trim_point(mid + perp), trim_point(mid - perp)];
        points.dedup();
        points.retain(|p| self.has_point(p.x, p.y) && other.has_point(p.x, p.y));

        (!points.is_empty()).then_some(points)
    }

    /// Intersection points of this arc with a segment.
    ///
    /// Candidates must lie both in the segment's bounding box and in the
    /// arc's angular range. A tangent segment yields a single point.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn line_intersection(&self, line: &Line) -> Option<Vec<Point2>> {
        // Work relative to the center.
        let p1 = line.start() - self.center();
        let p2 = line.end() - self.center();
        let dir = p2 - p1;
        let len_sq = dir.norm_squared();
        if len_sq == 0.0 {
            return None;
        }

        let cross = p1.x * p2.y - p2.x * p1.y;
        let delta = self.r.powi(2) * len_sq - cross.powi(2);
        if delta < 0.0 {
            return None;
        }

        let root = delta.sqrt();
        let sign = if dir.y < 0.0 { -1.0 } else { 1.0 };
        let foot = Vector2::new(cross * dir.y, -cross * dir.x) / len_sq;
        let spread = Vector2::new(sign * dir.x * root, dir.y.abs() * root) / len_sq;

        let base = self.center() + foot;
        let mut points = vec![trim_point(base + spread), trim_point(base - spread)];
        points.dedup();
        points.retain(|p| line.bounds_have_point(p.x, p.y) && self.has_point(p.x, p.y));

        (!points.is_empty()).then_some(points)
    }
}
