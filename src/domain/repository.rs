/// UserRepository Trait - Domain Layer Abstraction
///
/// Storage seam for [`User`] accounts. The application layer only talks to
/// this trait, so the in-memory and MongoDB backends are interchangeable.
///
/// ## Implementations
/// - `InMemoryUserRepository`: default, process-local
/// - `MongoUserRepository`: document store (cargo feature `mongo`)

use async_trait::async_trait;

use super::errors::RepositoryError;
use super::user::User;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Looks an account up by its unique username
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError>;

    /// Returns up to `limit` accounts after skipping `skip`, in storage order
    async fn find_page(&self, skip: u64, limit: u32) -> Result<Vec<User>, RepositoryError>;

    /// Inserts a new account
    ///
    /// # Errors
    /// * `RepositoryError::DuplicateUsername` if the username is taken
    async fn insert(&self, user: &User) -> Result<(), RepositoryError>;

    /// Replaces the stored account with the same id.
    /// Returns `false` when no such account exists.
    async fn update(&self, user: &User) -> Result<bool, RepositoryError>;

    /// Returns `false` when nothing was deleted
    async fn delete_by_username(&self, username: &str) -> Result<bool, RepositoryError>;

    /// Number of stored accounts
    async fn count(&self) -> Result<u64, RepositoryError>;

    /// Removes every account (used by test set-up and tooling)
    async fn delete_all(&self) -> Result<(), RepositoryError>;

    /// Cheap connectivity check for readiness probes
    async fn ping(&self) -> Result<(), RepositoryError> {
        Ok(())
    }

    /// Backend name shown in health output
    fn backend(&self) -> &'static str;
}
