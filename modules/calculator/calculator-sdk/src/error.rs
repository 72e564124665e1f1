//! Error types for the calculator module.

use thiserror::Error;

use crate::models::Number;

/// Errors that can occur when using the calculator API.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalculatorError {
    /// An operand lies outside the valid range.
    #[error("Invalid input: {value}")]
    InvalidInput {
        /// The first offending operand.
        value: Number,
    },

    /// The denominator of a division was zero.
    #[error("Cannot divide by zero")]
    DivisionByZero,
}
