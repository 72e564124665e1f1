//! Calculator API trait
//!
//! Contract trait for the calculator service.

use crate::error::CalculatorError;
use crate::models::Number;

/// Calculator API trait
///
/// Every operation checks both operands against the service's
/// [`ValidRange`](crate::ValidRange) before computing anything. The left
/// operand is checked first and the first violation wins.
pub trait CalculatorClient: Send + Sync {
    /// Add two numbers and return the sum.
    ///
    /// # Errors
    /// Returns [`CalculatorError::InvalidInput`] if an operand is out of range.
    fn add(&self, a: Number, b: Number) -> Result<Number, CalculatorError>;

    /// Subtract `b` from `a`.
    ///
    /// # Errors
    /// Returns [`CalculatorError::InvalidInput`] if an operand is out of range.
    fn subtract(&self, a: Number, b: Number) -> Result<Number, CalculatorError>;

    /// Multiply two numbers.
    ///
    /// # Errors
    /// Returns [`CalculatorError::InvalidInput`] if an operand is out of range.
    fn multiply(&self, a: Number, b: Number) -> Result<Number, CalculatorError>;

    /// Divide `a` by `b`. The quotient is always floating-point.
    ///
    /// # Errors
    /// Returns [`CalculatorError::InvalidInput`] if an operand is out of range,
    /// otherwise [`CalculatorError::DivisionByZero`] if `b` is zero.
    fn divide(&self, a: Number, b: Number) -> Result<f64, CalculatorError>;
}
