//! Data Transfer Objects
//!
//! JSON shapes of the HTTP API and the mapping from the `User` entity.
//! Request fields are optional so that a missing field is reported by the
//! validator with its own message instead of a generic parse error.
//! Response balances are JSON numbers that keep their two decimals.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::money::to_balance_scale;
use crate::domain::User;

/// Body of create and update requests
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRequest {
    pub name: Option<String>,
    pub surname: Option<String>,
}

impl UserRequest {
    pub fn new(name: impl Into<String>, surname: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            surname: Some(surname.into()),
        }
    }
}

/// Body of credit and debit requests
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoneyRequest {
    pub amount: Option<Decimal>,
}

impl MoneyRequest {
    pub fn new(amount: Decimal) -> Self {
        Self { amount: Some(amount) }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub name: String,
    pub surname: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub balance: Decimal,
}

impl UserResponse {
    /// Field names and rendered values in declaration order
    pub fn field_values(&self) -> [(&'static str, String); 5] {
        [
            ("id", self.id.clone()),
            ("username", self.username.clone()),
            ("name", self.name.clone()),
            ("surname", self.surname.clone()),
            ("balance", self.balance.to_string()),
        ]
    }
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            username: user.username.clone(),
            name: user.name.clone(),
            surname: user.surname.clone(),
            balance: to_balance_scale(user.balance),
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            balance: to_balance_scale(user.balance),
            id: user.id,
            username: user.username,
            name: user.name,
            surname: user.surname,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoneyResponse {
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub balance: Decimal,
}

impl From<&User> for MoneyResponse {
    fn from(user: &User) -> Self {
        Self {
            balance: to_balance_scale(user.balance),
        }
    }
}
