//! Calculator SDK
//!
//! This crate provides the public API for the `calculator` module:
//!
//! - [`CalculatorClient`] - Public API trait for consumers
//! - [`Number`], [`ValidRange`] - Operand and bounds models
//! - [`CalculatorError`] - Error types
//!
//! ## Usage
//!
//! ```ignore
//! use calculator_sdk::{CalculatorClient, CalculatorError, Number};
//!
//! fn total(client: &dyn CalculatorClient) -> Result<Number, CalculatorError> {
//!     let sum = client.add(Number::Int(5), Number::Int(3))?;
//!     client.multiply(sum, Number::Float(0.5))
//! }
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod api;
pub mod error;
pub mod models;

// Re-export main types at crate root
pub use api::CalculatorClient;
pub use error::CalculatorError;
pub use models::{Number, ValidRange};
