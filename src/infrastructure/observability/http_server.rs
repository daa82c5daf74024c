//! HTTP Observability Routes
//!
//! 提供Prometheus metrics和健康检查端点，挂载在主HTTP服务上
//!
//! ## 端点
//! - `GET /metrics` - Prometheus格式的指标
//! - `GET /health` - 健康检查
//! - `GET /health/ready` - 就绪检查
//! - `GET /health/live` - 存活检查

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::sync::Arc;
use tracing::error;

use super::health::{HealthChecker, HealthDetails, HealthStatus};
use crate::domain::UserRepository;
use crate::shared::metrics::METRICS;

/// 可观测性路由状态
#[derive(Clone)]
pub struct ObservabilityState {
    pub health_checker: Arc<HealthChecker>,
    pub repository: Arc<dyn UserRepository>,
}

/// 构建可观测性路由
pub fn observability_router(state: ObservabilityState) -> Router {
    Router::new()
        .route("/metrics", get(metrics_handler))
        .route("/health", get(health_handler))
        .route("/health/ready", get(readiness_handler))
        .route("/health/live", get(liveness_handler))
        .with_state(state)
}

/// Prometheus metrics端点
async fn metrics_handler() -> Response {
    match METRICS.export() {
        Ok(metrics) => (StatusCode::OK, metrics).into_response(),
        Err(e) => {
            error!("指标导出失败: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// 从存储读取用户数，并同步用户数指标
async fn stored_users(repository: &dyn UserRepository) -> Option<u64> {
    match repository.count().await {
        Ok(count) => {
            METRICS
                .users_registered
                .set(i64::try_from(count).unwrap_or(i64::MAX));
            Some(count)
        }
        Err(e) => {
            error!("存储不可达: {}", e);
            None
        }
    }
}

async fn storage_reachable(repository: &dyn UserRepository) -> bool {
    match repository.ping().await {
        Ok(()) => true,
        Err(e) => {
            error!("存储不可达: {}", e);
            false
        }
    }
}

/// 健康检查端点
async fn health_handler(State(state): State<ObservabilityState>) -> Response {
    let users_registered = stored_users(state.repository.as_ref()).await;
    let details = HealthDetails {
        storage_backend: state.repository.backend().to_string(),
        storage_reachable: users_registered.is_some(),
        users_registered,
    };

    let response = state.health_checker.check_health_detailed(details);

    let status_code = match response.status {
        HealthStatus::Healthy | HealthStatus::Degraded => StatusCode::OK,
        HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
    };

    (status_code, Json(response)).into_response()
}

/// 就绪检查端点（用于Kubernetes readiness probe）
async fn readiness_handler(State(state): State<ObservabilityState>) -> StatusCode {
    let reachable = storage_reachable(state.repository.as_ref()).await;
    if state.health_checker.check_readiness(reachable) {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}

/// 存活检查端点（用于Kubernetes liveness probe）
async fn liveness_handler(State(state): State<ObservabilityState>) -> StatusCode {
    if state.health_checker.check_liveness() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}
