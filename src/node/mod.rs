pub mod config;
pub mod context;
pub mod controller;

pub use config::{FetchMode, GetTelemetryConfig};
pub use context::{NodeContext, Routed};
pub use controller::GetTelemetryNode;

#[cfg(test)]
mod config_tests;
