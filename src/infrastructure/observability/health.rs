//! Health Check
//!
//! 提供服务健康状态检查，用于负载均衡器和监控系统
//!
//! ## 健康检查端点
//! - `/health` - 详细健康信息（含存储状态）
//! - `/health/ready` - 就绪检查（服务和存储都可用）
//! - `/health/live` - 存活检查（进程是否仍在运行）
//!
//! ## 响应格式
//! ```json
//! {
//!   "status": "healthy",
//!   "uptime_seconds": 3600,
//!   "version": "0.1.0",
//!   "timestamp": 1234567890,
//!   "details": { "storage_backend": "memory", "storage_reachable": true, "users_registered": 3 }
//! }
//! ```

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::time::{Instant, SystemTime, UNIX_EPOCH};

/// 健康状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// 健康
    Healthy,
    /// 降级（存储不可达）
    Degraded,
    /// 不健康（正在关闭）
    Unhealthy,
}

/// 健康检查响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub uptime_seconds: u64,
    pub version: String,
    pub timestamp: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HealthDetails>,
}

/// 详细健康信息
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthDetails {
    /// 存储后端名称 (memory/mongodb)
    pub storage_backend: String,
    /// 存储是否可达
    pub storage_reachable: bool,
    /// 存储中的用户数（存储不可达时省略）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub users_registered: Option<u64>,
}

/// 健康检查器
pub struct HealthChecker {
    start_time: Instant,
    status: RwLock<HealthStatus>,
    version: String,
}

impl HealthChecker {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            start_time: Instant::now(),
            status: RwLock::new(HealthStatus::Healthy),
            version: version.into(),
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    fn current_timestamp() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    }

    pub fn set_status(&self, status: HealthStatus) {
        *self.status.write() = status;
    }

    pub fn get_status(&self) -> HealthStatus {
        *self.status.read()
    }

    pub fn check_health(&self) -> HealthResponse {
        HealthResponse {
            status: self.get_status(),
            uptime_seconds: self.uptime_seconds(),
            version: self.version.clone(),
            timestamp: Self::current_timestamp(),
            details: None,
        }
    }

    /// 生成详细健康检查响应
    ///
    /// An unreachable store downgrades a healthy service to `Degraded`.
    pub fn check_health_detailed(&self, details: HealthDetails) -> HealthResponse {
        let mut response = self.check_health();
        if !details.storage_reachable && response.status == HealthStatus::Healthy {
            response.status = HealthStatus::Degraded;
        }
        response.details = Some(details);
        response
    }

    /// 存活检查（liveness probe）
    pub fn check_liveness(&self) -> bool {
        // 只要能返回就说明还活着
        true
    }

    /// 就绪检查（readiness probe）
    pub fn check_readiness(&self, storage_reachable: bool) -> bool {
        storage_reachable && matches!(self.get_status(), HealthStatus::Healthy)
    }
}

impl Default for HealthChecker {
    fn default() -> Self {
        Self::new(env!("CARGO_PKG_VERSION"))
    }
}
