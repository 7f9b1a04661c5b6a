//! Floating-point rounding and tolerant comparison.
//!
//! Every geometric predicate in the kernel goes through these helpers so that
//! values near tangency or segment endpoints compare the same way everywhere.

use std::fmt;
use std::str::FromStr;

use crate::error::TokenError;

use super::EPSILON;

/// Rounding applied by [`trim`] once the value is scaled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundingMode {
    /// Nearest integer, halves away from zero.
    #[default]
    Round,
    /// Towards positive infinity.
    Ceil,
    /// Towards negative infinity.
    Floor,
}

/// Comparison operator accepted by [`compare`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    /// `<`
    Lt,
    /// `<=`
    Le,
    /// `>`
    Gt,
    /// `>=`
    Ge,
    /// `==`
    Eq,
}

/// How strict a comparison is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Precision {
    /// Raw float comparison.
    #[default]
    Exact,
    /// Machine epsilon of slack on the relevant side.
    Fixed,
    /// Both operands rounded to the nearest integer first.
    Pixel,
}

/// Rounds `value` to `decimals` fractional digits using `mode`.
///
/// ```
/// use arcseg::math::{trim, RoundingMode};
///
/// assert_eq!(trim(12.12345, 3, RoundingMode::Ceil), 12.124);
/// ```
#[must_use]
pub fn trim(value: f64, decimals: i32, mode: RoundingMode) -> f64 {
    let scale = 10f64.powi(decimals);
    let scaled = value * scale;
    let rounded = match mode {
        RoundingMode::Round => scaled.round(),
        RoundingMode::Ceil => scaled.ceil(),
        RoundingMode::Floor => scaled.floor(),
    };
    rounded / scale
}

/// Non-negative floating modulo, e.g. `modulo(-803.0, 800.0) == 797.0`.
#[must_use]
pub fn modulo(value: f64, modulus: f64) -> f64 {
    ((value % modulus) + modulus) % modulus
}

/// Compares `a` against `b` with `op` under the given `precision`.
///
/// Under [`Precision::Fixed`] and [`Precision::Pixel`] the strict operators
/// behave like their inclusive counterparts.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn compare(a: f64, b: f64, op: CompareOp, precision: Precision) -> bool {
    match precision {
        Precision::Exact => match op {
            CompareOp::Lt => a < b,
            CompareOp::Le => a <= b,
            CompareOp::Gt => a > b,
            CompareOp::Ge => a >= b,
            CompareOp::Eq => a == b,
        },
        Precision::Fixed => match op {
            CompareOp::Lt | CompareOp::Le => a <= b + EPSILON,
            CompareOp::Gt | CompareOp::Ge => a >= b - EPSILON,
            CompareOp::Eq => (a - b).abs() <= EPSILON,
        },
        Precision::Pixel => {
            let (a, b) = (a.round(), b.round());
            match op {
                CompareOp::Lt | CompareOp::Le => a <= b,
                CompareOp::Gt | CompareOp::Ge => a >= b,
                CompareOp::Eq => a == b,
            }
        }
    }
}

/// Returns whether `value` lies in the closed range spanned by the two bounds,
/// in either order.
#[must_use]
pub fn is_between(value: f64, bound1: f64, bound2: f64, precision: Precision) -> bool {
    compare(value, bound1.min(bound2), CompareOp::Ge, precision)
        && compare(value, bound1.max(bound2), CompareOp::Le, precision)
}

/// Chaining form of the numeric helpers, e.g. `rad.trimmed(9, Round).is_between(a, b, Fixed)`.
pub trait NumericExt: Sized {
    #[must_use]
    fn trimmed(self, decimals: i32, mode: RoundingMode) -> Self;

    #[must_use]
    fn modulo(self, modulus: Self) -> Self;

    fn is_between(self, bound1: Self, bound2: Self, precision: Precision) -> bool;

    fn compare_to(self, other: Self, op: CompareOp, precision: Precision) -> bool;
}

impl NumericExt for f64 {
    fn trimmed(self, decimals: i32, mode: RoundingMode) -> Self {
        trim(self, decimals, mode)
    }

    fn modulo(self, modulus: Self) -> Self {
        modulo(self, modulus)
    }

    fn is_between(self, bound1: Self, bound2: Self, precision: Precision) -> bool {
        is_between(self, bound1, bound2, precision)
    }

    fn compare_to(self, other: Self, op: CompareOp, precision: Precision) -> bool {
        compare(self, other, op, precision)
    }
}

impl FromStr for RoundingMode {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "round" => Ok(Self::Round),
            "ceil" => Ok(Self::Ceil),
            "floor" => Ok(Self::Floor),
            other => Err(TokenError::RoundingMode(other.to_owned())),
        }
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Round => "round",
            Self::Ceil => "ceil",
            Self::Floor => "floor",
        })
    }
}

impl FromStr for CompareOp {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "<" => Ok(Self::Lt),
            "<=" => Ok(Self::Le),
            ">" => Ok(Self::Gt),
            ">=" => Ok(Self::Ge),
            "==" => Ok(Self::Eq),
            other => Err(TokenError::Operator(other.to_owned())),
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Lt => "<",
            Self::Le => "<=",
            Self::Gt => ">",
            Self::Ge => ">=",
            Self::Eq => "==",
        })
    }
}

impl FromStr for Precision {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "exact" => Ok(Self::Exact),
            "fixed" | "f" => Ok(Self::Fixed),
            "pixel" | "px" => Ok(Self::Pixel),
            other => Err(TokenError::Precision(other.to_owned())),
        }
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Exact => "exact",
            Self::Fixed => "fixed",
            Self::Pixel => "pixel",
        })
    }
}
