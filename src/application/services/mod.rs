/// Application Services
///
/// Services coordinate domain logic to implement application workflows.

pub mod user_service;

pub use user_service::UserService;
