/// Request Validator - Business Rule Validation
///
/// This module checks raw request input before it reaches the use cases and
/// turns it into validated domain values ([`Profile`], [`Amount`]).
///
/// ## Validation Rules
/// - Name and surname must not be blank
/// - Amount must be present
/// - Amount must lie within `[min_amount, max_amount]` (3 and 400 by default)
/// - Page size must be at least 1
///
/// ## Usage
/// ```rust
/// use user_service::domain::validation::RequestValidator;
///
/// let validator = RequestValidator::new();
/// let profile = validator.validate_profile(Some("Alice"), Some("Smith")).unwrap();
/// assert_eq!(profile.name(), "Alice");
/// ```

use rust_decimal::Decimal;

use super::errors::ValidationErrors;
use crate::shared::constants::validation as messages;

/// Validated name and surname pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    name: String,
    surname: String,
}

impl Profile {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn surname(&self) -> &str {
        &self.surname
    }
}

/// Validated credit/debit amount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Amount(Decimal);

impl Amount {
    pub fn value(&self) -> Decimal {
        self.0
    }
}

/// Request validation configuration
#[derive(Debug, Clone)]
pub struct ValidationConfig {
    /// Minimum amount (inclusive)
    pub min_amount: Decimal,

    /// Maximum amount (inclusive)
    pub max_amount: Decimal,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_amount: Decimal::from(3),
            max_amount: Decimal::from(400),
        }
    }
}

/// Request validator
///
/// Collects every violated rule instead of stopping at the first one, so a
/// client sees all field errors at once.
#[derive(Debug, Clone, Default)]
pub struct RequestValidator {
    config: ValidationConfig,
}

impl RequestValidator {
    /// Creates a new validator with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new validator with custom configuration
    pub fn with_config(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Validates the body of a create/update request
    pub fn validate_profile(
        &self,
        name: Option<&str>,
        surname: Option<&str>,
    ) -> Result<Profile, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if is_blank(name) {
            errors.add("name", messages::NAME_NOT_BLANK);
        }
        if is_blank(surname) {
            errors.add("surname", messages::SURNAME_NOT_BLANK);
        }

        errors.into_result(Profile {
            name: name.unwrap_or_default().to_string(),
            surname: surname.unwrap_or_default().to_string(),
        })
    }

    /// Validates the body of a credit/debit request
    ///
    /// # Returns
    /// * `Ok(Amount)` if the amount is present and within bounds
    /// * `Err(ValidationErrors)` with a single `amount` entry otherwise
    pub fn validate_amount(&self, amount: Option<Decimal>) -> Result<Amount, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        match amount {
            None => errors.add("amount", messages::AMOUNT_NOT_NULL),
            Some(value) if value < self.config.min_amount => {
                errors.add("amount", messages::AMOUNT_MIN)
            }
            Some(value) if value > self.config.max_amount => {
                errors.add("amount", messages::AMOUNT_MAX)
            }
            Some(_) => {}
        }

        errors.into_result(Amount(amount.unwrap_or_default()))
    }

    /// Validates list pagination
    pub fn validate_page(&self, limit: u32) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if limit == 0 {
            errors.add("limit", messages::LIMIT_POSITIVE);
        }
        errors.into_result(())
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}
