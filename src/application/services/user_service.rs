/// User Service - account use cases
///
/// Orchestrates validation, the `User` entity rules and the repository.
/// Every public method is one HTTP operation.
///
/// ## Responsibilities
/// - Validate raw request DTOs
/// - Enforce username uniqueness and balance rules
/// - Serialise writes so concurrent credit/debit cannot lose updates
/// - Log field changes of update/credit/debit
/// - Record per-operation metrics

use rust_decimal::prelude::ToPrimitive;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, error, info};

use crate::application::audit::log_differences;
use crate::application::dto::{MoneyRequest, MoneyResponse, UserRequest, UserResponse};
use crate::domain::{Amount, RequestValidator, User, UserError, UserRepository};
use crate::shared::metrics::METRICS;

pub struct UserService {
    repository: Arc<dyn UserRepository>,
    validator: RequestValidator,
    // read-modify-write sequences must not interleave
    write_lock: Mutex<()>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self::with_validator(repository, RequestValidator::new())
    }

    pub fn with_validator(repository: Arc<dyn UserRepository>, validator: RequestValidator) -> Self {
        Self {
            repository,
            validator,
            write_lock: Mutex::new(()),
        }
    }

    pub fn repository(&self) -> Arc<dyn UserRepository> {
        self.repository.clone()
    }

    /// Lists one page of accounts. `offset` is the zero-based page index.
    pub async fn get_users(&self, offset: u32, limit: u32) -> Result<Vec<UserResponse>, UserError> {
        measured("get_users", async {
            self.validator.validate_page(limit)?;
            let skip = u64::from(offset) * u64::from(limit);
            let users = self.repository.find_page(skip, limit).await?;
            Ok(users.into_iter().map(UserResponse::from).collect())
        })
        .await
    }

    pub async fn get_user(&self, username: &str) -> Result<UserResponse, UserError> {
        measured("get_user", async {
            let user = self.get_user_if_exists(username).await?;
            Ok(UserResponse::from(user))
        })
        .await
    }

    pub async fn create_user(
        &self,
        username: &str,
        request: UserRequest,
    ) -> Result<UserResponse, UserError> {
        measured("create_user", async {
            let profile = self
                .validator
                .validate_profile(request.name.as_deref(), request.surname.as_deref())?;

            let _guard = self.write_lock.lock().await;
            self.check_username_uniqueness(username).await?;

            let user = User::register(username, profile);
            self.repository.insert(&user).await?;
            METRICS.users_registered.inc();
            info!(username = %user.username, id = %user.id, "User created");

            Ok(UserResponse::from(user))
        })
        .await
    }

    pub async fn update_user(
        &self,
        username: &str,
        request: UserRequest,
    ) -> Result<UserResponse, UserError> {
        measured("update_user", async {
            let profile = self
                .validator
                .validate_profile(request.name.as_deref(), request.surname.as_deref())?;

            let profile = &profile;
            let _guard = self.write_lock.lock().await;
            log_differences(self.repository.as_ref(), username, move || async move {
                let mut user = self.get_user_if_exists(username).await?;
                user.apply_profile(profile);
                self.save(&user).await?;
                Ok(UserResponse::from(user))
            })
            .await
        })
        .await
    }

    pub async fn delete_user(&self, username: &str) -> Result<(), UserError> {
        measured("delete_user", async {
            let _guard = self.write_lock.lock().await;
            if !self.repository.delete_by_username(username).await? {
                return Err(not_found(username));
            }
            METRICS.users_registered.dec();
            info!(username = %username, "User deleted");
            Ok(())
        })
        .await
    }

    pub async fn credit_money(
        &self,
        username: &str,
        request: MoneyRequest,
    ) -> Result<UserResponse, UserError> {
        measured("credit_money", async {
            let amount = self.validator.validate_amount(request.amount)?;

            let _guard = self.write_lock.lock().await;
            let response = log_differences(self.repository.as_ref(), username, move || async move {
                let mut user = self.get_user_if_exists(username).await?;
                user.credit(amount);
                self.save(&user).await?;
                Ok(UserResponse::from(user))
            })
            .await?;

            record_movement("credit", amount);
            Ok(response)
        })
        .await
    }

    pub async fn debit_money(
        &self,
        username: &str,
        request: MoneyRequest,
    ) -> Result<UserResponse, UserError> {
        measured("debit_money", async {
            let amount = self.validator.validate_amount(request.amount)?;

            let _guard = self.write_lock.lock().await;
            let response = log_differences(self.repository.as_ref(), username, move || async move {
                let mut user = self.get_user_if_exists(username).await?;
                user.debit(amount)?;
                self.save(&user).await?;
                Ok(UserResponse::from(user))
            })
            .await?;

            record_movement("debit", amount);
            Ok(response)
        })
        .await
    }

    pub async fn get_balance(&self, username: &str) -> Result<MoneyResponse, UserError> {
        measured("get_balance", async {
            let user = self.get_user_if_exists(username).await?;
            Ok(MoneyResponse::from(&user))
        })
        .await
    }

    async fn get_user_if_exists(&self, username: &str) -> Result<User, UserError> {
        self.repository
            .find_by_username(username)
            .await?
            .ok_or_else(|| not_found(username))
    }

    async fn check_username_uniqueness(&self, username: &str) -> Result<(), UserError> {
        match self.repository.find_by_username(username).await? {
            Some(_) => Err(UserError::AlreadyExists {
                username: username.to_string(),
            }),
            None => Ok(()),
        }
    }

    async fn save(&self, user: &User) -> Result<(), UserError> {
        // deleted by another process between read and write
        if !self.repository.update(user).await? {
            return Err(not_found(&user.username));
        }
        Ok(())
    }
}

fn not_found(username: &str) -> UserError {
    UserError::NotFound {
        username: username.to_string(),
    }
}

fn record_movement(direction: &str, amount: Amount) {
    METRICS
        .balance_movement
        .with_label_values(&[direction])
        .inc_by(amount.value().to_f64().unwrap_or(0.0));
}

/// Times the operation and counts it by outcome
async fn measured<T, Fut>(operation: &'static str, fut: Fut) -> Result<T, UserError>
where
    Fut: Future<Output = Result<T, UserError>>,
{
    let timer = METRICS
        .operation_duration
        .with_label_values(&[operation])
        .start_timer();
    let result = fut.await;
    timer.observe_duration();

    let outcome = match &result {
        Ok(_) => "ok",
        Err(e) => e.kind(),
    };
    METRICS
        .operations_total
        .with_label_values(&[operation, outcome])
        .inc();

    match &result {
        Err(e @ UserError::Repository(_)) => error!(operation, error = %e, "Operation failed"),
        Err(e) => debug!(operation, error = %e, "Operation rejected"),
        Ok(_) => {}
    }

    result
}
