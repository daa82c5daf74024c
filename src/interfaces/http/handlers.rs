//! User REST handlers
//!
//! Thin adapters: extract, call `UserService`, map the result.

use axum::{
    extract::{rejection::JsonRejection, rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use super::error::ApiError;
use super::extractors::AuthUsername;
use super::AppState;
use crate::application::dto::{MoneyRequest, MoneyResponse, UserRequest, UserResponse};
use crate::shared::constants::{DEFAULT_LIMIT, DEFAULT_OFFSET};

/// Query parameters of `GET /api/v1/users`
#[derive(Debug, Clone, Deserialize)]
pub struct PageParams {
    #[serde(default = "default_offset")]
    pub offset: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_offset() -> u32 {
    DEFAULT_OFFSET
}

fn default_limit() -> u32 {
    DEFAULT_LIMIT
}

fn body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    payload
        .map(|Json(value)| value)
        .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))
}

pub async fn get_users(
    State(state): State<AppState>,
    params: Result<Query<PageParams>, QueryRejection>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let Query(params) = params.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    let users = state.service.get_users(params.offset, params.limit).await?;
    Ok(Json(users))
}

pub async fn get_user(
    State(state): State<AppState>,
    AuthUsername(username): AuthUsername,
) -> Result<Json<UserResponse>, ApiError> {
    Ok(Json(state.service.get_user(&username).await?))
}

pub async fn create_user(
    State(state): State<AppState>,
    AuthUsername(username): AuthUsername,
    payload: Result<Json<UserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let request = body(payload)?;
    let created = state.service.create_user(&username, request).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_user(
    State(state): State<AppState>,
    AuthUsername(username): AuthUsername,
    payload: Result<Json<UserRequest>, JsonRejection>,
) -> Result<Json<UserResponse>, ApiError> {
    let request = body(payload)?;
    Ok(Json(state.service.update_user(&username, request).await?))
}

pub async fn delete_user(
    State(state): State<AppState>,
    AuthUsername(username): AuthUsername,
) -> Result<StatusCode, ApiError> {
    state.service.delete_user(&username).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn credit_money(
    State(state): State<AppState>,
    AuthUsername(username): AuthUsername,
    payload: Result<Json<MoneyRequest>, JsonRejection>,
) -> Result<Json<UserResponse>, ApiError> {
    let request = body(payload)?;
    Ok(Json(state.service.credit_money(&username, request).await?))
}

pub async fn debit_money(
    State(state): State<AppState>,
    AuthUsername(username): AuthUsername,
    payload: Result<Json<MoneyRequest>, JsonRejection>,
) -> Result<Json<UserResponse>, ApiError> {
    let request = body(payload)?;
    Ok(Json(state.service.debit_money(&username, request).await?))
}

pub async fn get_balance(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<MoneyResponse>, ApiError> {
    Ok(Json(state.service.get_balance(&username).await?))
}
