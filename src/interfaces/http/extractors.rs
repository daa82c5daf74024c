//! Request extractors for Axum

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

use super::error::ApiError;
use crate::shared::USERNAME_HEADER;

/// Username of the caller, taken from the gateway-provided header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUsername(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for AuthUsername
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let missing = || {
            ApiError::BadRequest(format!(
                "Required request header '{}' is not present",
                USERNAME_HEADER
            ))
        };

        let value = parts
            .headers
            .get(USERNAME_HEADER)
            .ok_or_else(missing)?
            .to_str()
            .map_err(|_| ApiError::BadRequest(format!("Header '{}' is not valid text", USERNAME_HEADER)))?;

        // 原样使用，不做裁剪
        if value.is_empty() {
            return Err(missing());
        }

        Ok(AuthUsername(value.to_string()))
    }
}
