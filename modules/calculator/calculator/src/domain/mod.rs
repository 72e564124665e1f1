//! Domain layer for the calculator module.

pub mod local_client;
pub mod service;

pub use local_client::LocalCalculatorClient;
pub use service::Service;
