//! Calculator Module
//!
//! Range-checked arithmetic over integer and floating-point operands.
//!
//! ## Architecture
//!
//! - `domain/service.rs` - Validation and the four operations
//! - `domain/local_client.rs` - In-process `CalculatorClient` implementation
//! - `config.rs` - Operand bounds configuration
//!
//! Consumers that only need the contract should depend on `calculator-sdk`.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod config;
pub mod domain;

pub use config::{CalculatorConfig, ConfigError};
pub use domain::{LocalCalculatorClient, Service};

pub use calculator_sdk::{CalculatorClient, CalculatorError, Number, ValidRange};
