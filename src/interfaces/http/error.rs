//! Mapping of service errors to HTTP responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::domain::UserError;

/// Body of every non-validation error
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Reason phrase in `SCREAMING_SNAKE_CASE`, e.g. `NOT_FOUND`
    pub status: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status: status_name(status),
            message: message.into(),
        }
    }
}

fn status_name(status: StatusCode) -> String {
    status
        .canonical_reason()
        .unwrap_or("UNKNOWN")
        .to_ascii_uppercase()
        .replace(' ', "_")
}

#[derive(Debug)]
pub enum ApiError {
    User(UserError),
    /// Malformed input rejected before reaching the service
    BadRequest(String),
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        ApiError::User(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::User(UserError::Validation(errors)) => {
                return (StatusCode::BAD_REQUEST, Json(errors.fields().clone())).into_response();
            }
            ApiError::User(err @ UserError::NotFound { .. }) => (StatusCode::NOT_FOUND, err.to_string()),
            ApiError::User(err @ (UserError::AlreadyExists { .. } | UserError::InsufficientFunds { .. })) => {
                (StatusCode::CONFLICT, err.to_string())
            }
            ApiError::User(err @ UserError::Repository(_)) => {
                error!("请求处理失败: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
        };

        (status, Json(ErrorResponse::new(status, message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{RepositoryError, ValidationErrors};

    #[test]
    fn test_status_name() {
        assert_eq!(status_name(StatusCode::NOT_FOUND), "NOT_FOUND");
        assert_eq!(status_name(StatusCode::CONFLICT), "CONFLICT");
        assert_eq!(status_name(StatusCode::INTERNAL_SERVER_ERROR), "INTERNAL_SERVER_ERROR");
    }

    #[test]
    fn test_status_codes() {
        let cases = vec![
            (UserError::NotFound { username: "a".into() }, StatusCode::NOT_FOUND),
            (UserError::AlreadyExists { username: "a".into() }, StatusCode::CONFLICT),
            (
                UserError::InsufficientFunds { balance: Default::default() },
                StatusCode::CONFLICT,
            ),
            (UserError::Validation(ValidationErrors::new()), StatusCode::BAD_REQUEST),
            (
                UserError::Repository(RepositoryError::Storage { message: "down".into() }),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(ApiError::from(err).into_response().status(), expected);
        }
        assert_eq!(
            ApiError::BadRequest("bad".into()).into_response().status(),
            StatusCode::BAD_REQUEST
        );
    }
}
