/// Shared utilities and types used across all layers
///
/// This module contains:
/// - Wire constants (paths, headers, messages)
/// - Prometheus metrics

pub mod constants;
pub mod metrics;

pub use constants::{paths, USERNAME_HEADER};
pub use metrics::METRICS;
