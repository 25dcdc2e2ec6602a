//! # Linkstack Telemetry
//!
//! Crate for logging and metrics around stack traffic.

pub mod logging;
pub mod metrics;

pub use logging::EventLogger;
pub use metrics::StackMetrics;
