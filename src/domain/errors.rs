//! User domain errors

use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

use super::money::to_balance_scale;

/// Errors produced by the user use cases
#[derive(Error, Debug)]
pub enum UserError {
    #[error("User not found: username = {username}")]
    NotFound { username: String },

    #[error("User already exists: username = {username}")]
    AlreadyExists { username: String },

    #[error("The amount should be less than {}", to_balance_scale(*balance))]
    InsufficientFunds { balance: Decimal },

    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    #[error(transparent)]
    Repository(RepositoryError),
}

impl UserError {
    /// Short label used for metrics and log fields
    pub fn kind(&self) -> &'static str {
        match self {
            UserError::NotFound { .. } => "not_found",
            UserError::AlreadyExists { .. } | UserError::InsufficientFunds { .. } => "conflict",
            UserError::Validation(_) => "invalid",
            UserError::Repository(_) => "error",
        }
    }
}

impl From<RepositoryError> for UserError {
    fn from(err: RepositoryError) -> Self {
        match err {
            // unique index hit between our existence check and the insert
            RepositoryError::DuplicateUsername { username } => UserError::AlreadyExists { username },
            other => UserError::Repository(other),
        }
    }
}

/// Storage-level failures
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RepositoryError {
    #[error("Duplicate username: {username}")]
    DuplicateUsername { username: String },

    #[error("Storage error: {message}")]
    Storage { message: String },
}

/// Field name to message map collected during request validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    fields: BTreeMap<String, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a message for a field. The first message per field wins.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.fields.entry(field.into()).or_insert_with(|| message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn fields(&self) -> &BTreeMap<String, String> {
        &self.fields
    }

    /// `Ok(value)` when nothing was recorded
    pub fn into_result<T>(self, value: T) -> Result<T, ValidationErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Validation failed")?;
        for (i, (field, message)) in self.fields.iter().enumerate() {
            let sep = if i == 0 { ": " } else { "; " };
            write!(f, "{}{}: {}", sep, field, message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}
