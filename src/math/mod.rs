pub mod numeric;

pub use numeric::{compare, is_between, modulo, trim, CompareOp, NumericExt, Precision, RoundingMode};

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Number of fractional digits every stored and derived value is trimmed to.
pub const DECIMALS: i32 = 9;

/// Rounds `value` to [`DECIMALS`] digits, nearest.
#[must_use]
pub fn trim9(value: f64) -> f64 {
    trim(value, DECIMALS, RoundingMode::Round)
}

/// Slack used by [`Precision::Fixed`] comparisons.
pub const EPSILON: f64 = f64::EPSILON;

/// Precision used for bounding-box and angular-range membership checks.
pub const BOUNDS_PRECISION: Precision = Precision::Fixed;
