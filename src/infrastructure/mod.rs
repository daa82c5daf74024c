/// Infrastructure Layer - Technical Implementations
///
/// This layer contains all technical implementations that interact with
/// external systems: storage and telemetry.
///
/// The infrastructure layer depends on the domain layer but the domain
/// layer does not depend on infrastructure (dependency inversion).
///
/// ## Modules
/// - `persistence`: `UserRepository` backends (memory, MongoDB)
/// - `observability`: health checks and the Prometheus endpoint

pub mod observability;
pub mod persistence;

// Re-export key types
pub use observability::{HealthChecker, HealthStatus};
pub use persistence::InMemoryUserRepository;
