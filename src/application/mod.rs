/// Application Layer - Use Cases and Services
///
/// This layer orchestrates domain logic to implement the account use cases.
/// It depends on the domain layer but is independent of storage and HTTP
/// details (the repository is injected as `Arc<dyn UserRepository>`).
///
/// ## Modules
/// - `services`: `UserService`
/// - `dto`: Data Transfer Objects for the HTTP API
/// - `audit`: change log for mutating operations

pub mod audit;
pub mod dto;
pub mod services;

// Re-export key services
pub use dto::{MoneyRequest, MoneyResponse, UserRequest, UserResponse};
pub use services::UserService;
