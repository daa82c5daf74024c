//! Change log for mutating use cases
//!
//! Wraps an operation that returns the updated [`UserResponse`]: the stored
//! account is read first, the operation runs, and the field-level
//! differences are emitted as one `info` event. A missing account fails the
//! call before the operation runs; a failed operation logs nothing.

use std::future::Future;

use tracing::info;

use super::dto::UserResponse;
use crate::domain::{UserError, UserRepository};

/// Renders every differing field as `field: old -> new`, joined by `"; "`.
/// Returns an empty string when both sides are equal.
pub fn describe_differences(old: &UserResponse, new: &UserResponse) -> String {
    old.field_values()
        .into_iter()
        .zip(new.field_values())
        .filter(|((_, before), (_, after))| before != after)
        .map(|((field, before), (_, after))| format!("{}: {} -> {}", field, before, after))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Runs `operation` and logs what it changed for `username`
pub async fn log_differences<F, Fut>(
    repository: &dyn UserRepository,
    username: &str,
    operation: F,
) -> Result<UserResponse, UserError>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<UserResponse, UserError>>,
{
    let before = repository
        .find_by_username(username)
        .await?
        .map(UserResponse::from)
        .ok_or_else(|| UserError::NotFound {
            username: username.to_string(),
        })?;

    let after = operation().await?;

    info!(
        "Changes detected for user '{}': {}",
        after.username,
        describe_differences(&before, &after)
    );

    Ok(after)
}
