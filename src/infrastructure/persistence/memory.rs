//! In-memory user repository
//!
//! Accounts are kept in insertion order, which is also the page order.

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::domain::{RepositoryError, User, UserRepository};

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.users.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.read().is_empty()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    #[tracing::instrument(skip(self))]
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError> {
        Ok(self
            .users
            .read()
            .iter()
            .find(|u| u.username == username)
            .cloned())
    }

    #[tracing::instrument(skip(self))]
    async fn find_page(&self, skip: u64, limit: u32) -> Result<Vec<User>, RepositoryError> {
        let skip = usize::try_from(skip).unwrap_or(usize::MAX);
        Ok(self
            .users
            .read()
            .iter()
            .skip(skip)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    #[tracing::instrument(skip(self, user), fields(username = %user.username))]
    async fn insert(&self, user: &User) -> Result<(), RepositoryError> {
        let mut users = self.users.write();
        if users.iter().any(|u| u.username == user.username) {
            return Err(RepositoryError::DuplicateUsername {
                username: user.username.clone(),
            });
        }
        users.push(user.clone());
        Ok(())
    }

    #[tracing::instrument(skip(self, user), fields(username = %user.username))]
    async fn update(&self, user: &User) -> Result<bool, RepositoryError> {
        let mut users = self.users.write();
        match users.iter_mut().find(|u| u.id == user.id) {
            Some(stored) => {
                *stored = user.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        Ok(self.users.read().len() as u64)
    }

    #[tracing::instrument(skip(self))]
    async fn delete_by_username(&self, username: &str) -> Result<bool, RepositoryError> {
        let mut users = self.users.write();
        let before = users.len();
        users.retain(|u| u.username != username);
        Ok(users.len() != before)
    }

    async fn delete_all(&self) -> Result<(), RepositoryError> {
        self.users.write().clear();
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn user(id: &str, username: &str) -> User {
        User {
            id: id.into(),
            username: username.into(),
            name: "Name".into(),
            surname: "Surname".into(),
            balance: Decimal::ZERO,
        }
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let repo = InMemoryUserRepository::new();
        repo.insert(&user("id1", "alice")).await.unwrap();

        let found = repo.find_by_username("alice").await.unwrap().unwrap();
        assert_eq!(found.id, "id1");
        assert!(repo.find_by_username("bob").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_username_rejected() {
        let repo = InMemoryUserRepository::new();
        repo.insert(&user("id1", "alice")).await.unwrap();

        let err = repo.insert(&user("id2", "alice")).await.unwrap_err();
        assert_eq!(
            err,
            RepositoryError::DuplicateUsername {
                username: "alice".into()
            }
        );
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn test_update_by_id() {
        let repo = InMemoryUserRepository::new();
        repo.insert(&user("id1", "alice")).await.unwrap();

        let mut changed = user("id1", "alice");
        changed.balance = Decimal::from(42);
        assert!(repo.update(&changed).await.unwrap());
        assert!(!repo.update(&user("missing", "ghost")).await.unwrap());

        let found = repo.find_by_username("alice").await.unwrap().unwrap();
        assert_eq!(found.balance, Decimal::from(42));
    }

    #[tokio::test]
    async fn test_page_in_insertion_order() {
        let repo = InMemoryUserRepository::new();
        for i in 0..4 {
            repo.insert(&user(&format!("id{i}"), &format!("u{i}"))).await.unwrap();
        }

        let page = repo.find_page(1, 2).await.unwrap();
        let names: Vec<_> = page.iter().map(|u| u.username.as_str()).collect();
        assert_eq!(names, vec!["u1", "u2"]);
        assert!(repo.find_page(10, 2).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = InMemoryUserRepository::new();
        repo.insert(&user("id1", "alice")).await.unwrap();
        repo.insert(&user("id2", "bob")).await.unwrap();

        assert!(repo.delete_by_username("alice").await.unwrap());
        assert!(!repo.delete_by_username("alice").await.unwrap());

        repo.delete_all().await.unwrap();
        assert!(repo.is_empty());
    }
}
