//! User entity

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::UserError;
use super::validation::{Amount, Profile};

/// A player account, stored in the `user` collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub name: String,
    pub surname: String,
    pub balance: Decimal,
}

impl User {
    /// Creates a fresh account with a zero balance
    pub fn register(username: impl Into<String>, profile: Profile) -> Self {
        Self {
            id: Uuid::new_v4().simple().to_string(),
            username: username.into(),
            name: profile.name().to_string(),
            surname: profile.surname().to_string(),
            balance: Decimal::ZERO,
        }
    }

    /// Replaces name and surname; identity and balance are untouched
    pub fn apply_profile(&mut self, profile: &Profile) {
        self.name = profile.name().to_string();
        self.surname = profile.surname().to_string();
    }

    pub fn credit(&mut self, amount: Amount) {
        self.balance += amount.value();
    }

    /// Fails without touching the balance when it would go negative
    pub fn debit(&mut self, amount: Amount) -> Result<(), UserError> {
        if self.balance < amount.value() {
            return Err(UserError::InsufficientFunds { balance: self.balance });
        }
        self.balance -= amount.value();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::validation::RequestValidator;
    use std::str::FromStr;

    fn amount(s: &str) -> Amount {
        RequestValidator::new()
            .validate_amount(Some(Decimal::from_str(s).unwrap()))
            .unwrap()
    }

    fn alice() -> User {
        let profile = RequestValidator::new()
            .validate_profile(Some("Alice"), Some("Smith"))
            .unwrap();
        User::register("alice123", profile)
    }

    #[test]
    fn test_register_starts_at_zero() {
        let user = alice();
        assert_eq!(user.username, "alice123");
        assert_eq!(user.balance, Decimal::ZERO);
        assert_eq!(user.id.len(), 32);
    }

    #[test]
    fn test_register_generates_distinct_ids() {
        assert_ne!(alice().id, alice().id);
    }

    #[test]
    fn test_credit_then_debit() {
        let mut user = alice();
        user.credit(amount("100.50"));
        user.debit(amount("50.25")).unwrap();
        assert_eq!(user.balance, Decimal::from_str("50.25").unwrap());
    }

    #[test]
    fn test_debit_whole_balance() {
        let mut user = alice();
        user.credit(amount("10"));
        user.debit(amount("10")).unwrap();
        assert!(user.balance.is_zero());
    }

    #[test]
    fn test_debit_more_than_balance_fails() {
        let mut user = alice();
        user.credit(amount("5"));

        let err = user.debit(amount("6")).unwrap_err();
        assert!(matches!(err, UserError::InsufficientFunds { .. }));
        assert_eq!(user.balance, Decimal::from(5));
    }

    #[test]
    fn test_apply_profile_keeps_balance() {
        let mut user = alice();
        user.credit(amount("7"));
        let profile = RequestValidator::new()
            .validate_profile(Some("Bob"), Some("Johnson"))
            .unwrap();

        user.apply_profile(&profile);
        assert_eq!(user.name, "Bob");
        assert_eq!(user.surname, "Johnson");
        assert_eq!(user.balance, Decimal::from(7));
    }
}
