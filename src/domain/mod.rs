/// Domain Layer - Core Business Logic
///
/// Pure account rules with no I/O: the `User` entity and its balance
/// arithmetic, request validation, errors and the storage trait.
///
/// ## Modules
/// - `user`: the `User` entity
/// - `money`: balance scale and rounding
/// - `validation`: request validation rules
/// - `errors`: domain and storage errors
/// - `repository`: the `UserRepository` trait

pub mod errors;
pub mod money;
pub mod repository;
pub mod user;
pub mod validation;

// Re-export key types
pub use errors::{RepositoryError, UserError, ValidationErrors};
pub use repository::UserRepository;
pub use user::User;
pub use validation::{Amount, Profile, RequestValidator};
