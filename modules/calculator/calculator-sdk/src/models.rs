//! Public models for the calculator module.
//!
//! Operands and results are plain values. Nothing here carries identity or
//! is retained between calls.

use std::fmt;

/// Floats at or above this magnitude are printed without a forced `.0`.
const FLOAT_FIXED_LIMIT: f64 = 1e16;

/// A numeric operand or result.
///
/// Integer arithmetic stays integral. Mixing in a float promotes the result
/// to [`Number::Float`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    /// Returns the value as a float.
    #[must_use]
    // Callers only convert range-checked operands, which fit in an f64 mantissa.
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Int(v) => v as f64,
            Self::Float(v) => v,
        }
    }

    /// Returns `true` for integer zero and for both signed float zeros.
    #[must_use]
    pub fn is_zero(self) -> bool {
        match self {
            Self::Int(v) => v == 0,
            Self::Float(v) => v == 0.0,
        }
    }

    #[must_use]
    pub fn is_float(self) -> bool {
        matches!(self, Self::Float(_))
    }
}

impl From<i32> for Number {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<i64> for Number {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<u32> for Number {
    fn from(v: u32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<f32> for Number {
    fn from(v: f32) -> Self {
        Self::Float(f64::from(v))
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) if v.is_nan() => f.write_str("nan"),
            Self::Float(v) if v.is_infinite() => {
                f.write_str(if v.is_sign_negative() { "-inf" } else { "inf" })
            }
            Self::Float(v) if v.fract() == 0.0 && v.abs() < FLOAT_FIXED_LIMIT => {
                write!(f, "{v:.1}")
            }
            Self::Float(v) => write!(f, "{v}"),
        }
    }
}

/// Closed interval every operand must lie within.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidRange {
    min: i32,
    max: i32,
}

impl ValidRange {
    pub const MIN_VALUE: i32 = -1_000_000;
    pub const MAX_VALUE: i32 = 1_000_000;

    /// `[-1_000_000, 1_000_000]`
    pub const DEFAULT: Self = Self {
        min: Self::MIN_VALUE,
        max: Self::MAX_VALUE,
    };

    /// Builds a range, or `None` when `min > max`.
    #[must_use]
    pub const fn new(min: i32, max: i32) -> Option<Self> {
        if min > max {
            return None;
        }
        Some(Self { min, max })
    }

    #[must_use]
    pub const fn min(&self) -> i32 {
        self.min
    }

    #[must_use]
    pub const fn max(&self) -> i32 {
        self.max
    }

    /// Inclusive membership test. NaN is never contained.
    #[must_use]
    pub fn contains(&self, value: Number) -> bool {
        match value {
            Number::Int(v) => i64::from(self.min) <= v && v <= i64::from(self.max),
            Number::Float(v) => f64::from(self.min) <= v && v <= f64::from(self.max),
        }
    }
}

impl Default for ValidRange {
    fn default() -> Self {
        Self::DEFAULT
    }
}
