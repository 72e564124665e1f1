//! Domain service for calculator
//!
//! Contains the range check and the four arithmetic operations.

use calculator_sdk::{CalculatorError, Number, ValidRange};
use tracing::debug;

use crate::config::{CalculatorConfig, ConfigError};

/// Domain service that performs range-checked arithmetic.
///
/// The service holds nothing but its immutable bounds, so a single instance
/// can be shared freely across threads.
#[derive(Debug, Clone, Default)]
pub struct Service {
    range: ValidRange,
}

impl Service {
    /// Create a service with the default `[-1_000_000, 1_000_000]` bounds.
    #[must_use]
    pub fn new() -> Self {
        Self::with_range(ValidRange::DEFAULT)
    }

    #[must_use]
    pub fn with_range(range: ValidRange) -> Self {
        Self { range }
    }

    /// Create a service from module configuration.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvertedBounds`] if the configured bounds are inverted.
    pub fn from_config(cfg: &CalculatorConfig) -> Result<Self, ConfigError> {
        let range = cfg.valid_range()?;
        debug!(
            min = range.min(),
            max = range.max(),
            "calculator bounds configured"
        );
        Ok(Self::with_range(range))
    }

    #[must_use]
    pub fn range(&self) -> ValidRange {
        self.range
    }

    /// Add two numbers and return the sum.
    ///
    /// # Errors
    /// Returns [`CalculatorError::InvalidInput`] if an operand is out of range.
    pub fn add(
        &self,
        a: impl Into<Number>,
        b: impl Into<Number>,
    ) -> Result<Number, CalculatorError> {
        let (a, b) = self.validate(a.into(), b.into())?;
        let sum = combine(a, b, |x, y| x + y, |x, y| x + y);
        debug!(%a, %b, %sum, "performing addition");
        Ok(sum)
    }

    /// Subtract `b` from `a`.
    ///
    /// # Errors
    /// Returns [`CalculatorError::InvalidInput`] if an operand is out of range.
    pub fn subtract(
        &self,
        a: impl Into<Number>,
        b: impl Into<Number>,
    ) -> Result<Number, CalculatorError> {
        let (a, b) = self.validate(a.into(), b.into())?;
        let difference = combine(a, b, |x, y| x - y, |x, y| x - y);
        debug!(%a, %b, %difference, "performing subtraction");
        Ok(difference)
    }

    /// Multiply two numbers.
    ///
    /// # Errors
    /// Returns [`CalculatorError::InvalidInput`] if an operand is out of range.
    pub fn multiply(
        &self,
        a: impl Into<Number>,
        b: impl Into<Number>,
    ) -> Result<Number, CalculatorError> {
        let (a, b) = self.validate(a.into(), b.into())?;
        let product = combine(a, b, |x, y| x * y, |x, y| x * y);
        debug!(%a, %b, %product, "performing multiplication");
        Ok(product)
    }

    /// Divide `a` by `b`, always producing a floating-point quotient.
    ///
    /// The range check runs before the zero check, so an out-of-range
    /// operand is reported even when `b` is zero.
    ///
    /// # Errors
    /// Returns [`CalculatorError::InvalidInput`] if an operand is out of range,
    /// then [`CalculatorError::DivisionByZero`] if `b` is zero.
    pub fn divide(
        &self,
        a: impl Into<Number>,
        b: impl Into<Number>,
    ) -> Result<f64, CalculatorError> {
        let (a, b) = self.validate(a.into(), b.into())?;
        if b.is_zero() {
            return Err(CalculatorError::DivisionByZero);
        }
        let quotient = a.as_f64() / b.as_f64();
        debug!(%a, %b, quotient, "performing division");
        Ok(quotient)
    }

    /// Checks `a`, then `b`. The first out-of-range operand is reported.
    fn validate(&self, a: Number, b: Number) -> Result<(Number, Number), CalculatorError> {
        if !self.range.contains(a) {
            return Err(CalculatorError::InvalidInput { value: a });
        }
        if !self.range.contains(b) {
            return Err(CalculatorError::InvalidInput { value: b });
        }
        Ok((a, b))
    }
}

/// Applies `int_op` when both operands are integers, `float_op` otherwise.
///
/// Operands must already be range-checked: bounds are `i32`, so no `i64`
/// sum, difference or product of two of them can overflow.
fn combine(
    a: Number,
    b: Number,
    int_op: impl FnOnce(i64, i64) -> i64,
    float_op: impl FnOnce(f64, f64) -> f64,
) -> Number {
    match (a, b) {
        (Number::Int(x), Number::Int(y)) => Number::Int(int_op(x, y)),
        _ => Number::Float(float_op(a.as_f64(), b.as_f64())),
    }
}
