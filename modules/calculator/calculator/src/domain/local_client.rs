//! Local (in-process) client for the calculator module.

use std::sync::Arc;

use calculator_sdk::{CalculatorClient, CalculatorError, Number};

use super::Service;

/// Local client wrapping the calculator service.
///
/// Lets consumers hold a `dyn CalculatorClient` without depending on the
/// domain crate's concrete types.
#[derive(Debug, Clone)]
pub struct LocalCalculatorClient {
    svc: Arc<Service>,
}

impl LocalCalculatorClient {
    #[must_use]
    pub fn new(svc: Arc<Service>) -> Self {
        Self { svc }
    }
}

impl CalculatorClient for LocalCalculatorClient {
    fn add(&self, a: Number, b: Number) -> Result<Number, CalculatorError> {
        self.svc.add(a, b)
    }

    fn subtract(&self, a: Number, b: Number) -> Result<Number, CalculatorError> {
        self.svc.subtract(a, b)
    }

    fn multiply(&self, a: Number, b: Number) -> Result<Number, CalculatorError> {
        self.svc.multiply(a, b)
    }

    fn divide(&self, a: Number, b: Number) -> Result<f64, CalculatorError> {
        self.svc.divide(a, b)
    }
}
