//! REST API
//!
//! Routes under `/api/v1/users` plus the observability endpoints.
//!
//! | method | path                               |
//! |--------|------------------------------------|
//! | GET    | `/api/v1/users?offset=&limit=`     |
//! | GET    | `/api/v1/users/me`                 |
//! | POST   | `/api/v1/users`                    |
//! | PUT    | `/api/v1/users`                    |
//! | DELETE | `/api/v1/users`                    |
//! | POST   | `/api/v1/users/credit`             |
//! | POST   | `/api/v1/users/debit`              |
//! | GET    | `/api/v1/users/:username/balance`  |

pub mod error;
pub mod extractors;
pub mod handlers;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::application::UserService;
use crate::infrastructure::observability::{observability_router, HealthChecker, ObservabilityState};
use crate::shared::paths;

pub use error::{ApiError, ErrorResponse};

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<UserService>,
}

/// Builds the user API router
pub fn user_router(service: Arc<UserService>) -> Router {
    let routes = Router::new()
        .route(
            "/",
            get(handlers::get_users)
                .post(handlers::create_user)
                .put(handlers::update_user)
                .delete(handlers::delete_user),
        )
        .route(paths::ME, get(handlers::get_user))
        .route(paths::CREDIT, post(handlers::credit_money))
        .route(paths::DEBIT, post(handlers::debit_money))
        .route(paths::BALANCE_BY_USERNAME, get(handlers::get_balance))
        .with_state(AppState { service });

    Router::new().nest(paths::USER_BASE_URL, routes)
}

/// Builds the full application: user API and observability endpoints
pub fn create_router(service: Arc<UserService>, health_checker: Arc<HealthChecker>) -> Router {
    let observability = observability_router(ObservabilityState {
        health_checker,
        repository: service.repository(),
    });

    user_router(service).merge(observability)
}
