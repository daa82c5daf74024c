//! Prometheus Metrics Module
//!
//! 提供用户服务的核心指标监控
//!
//! ## 指标类型
//! - **Counter**: 操作总数（按结果）、余额变动总额
//! - **Histogram**: 操作延迟
//! - **Gauge**: 已注册用户数（进程内观测）
//!
//! ## 使用示例
//! ```rust,ignore
//! use user_service::shared::metrics::METRICS;
//!
//! METRICS.operations_total.with_label_values(&["credit", "ok"]).inc();
//!
//! let timer = METRICS.operation_duration.with_label_values(&["credit"]).start_timer();
//! // ... 执行操作 ...
//! timer.observe_duration();
//! ```

use lazy_static::lazy_static;
use prometheus::{
    register_counter_vec, register_histogram_vec, register_int_gauge, CounterVec,
    HistogramVec, IntGauge, TextEncoder,
};

lazy_static! {
    /// 全局Metrics实例
    pub static ref METRICS: Metrics = Metrics::new();
}

/// 用户服务核心指标
pub struct Metrics {
    /// 操作总数 (按操作名和结果: ok/not_found/conflict/invalid/error)
    pub operations_total: CounterVec,

    /// 操作延迟分布 (秒)
    pub operation_duration: HistogramVec,

    /// 余额变动总额 (按方向: credit/debit)
    pub balance_movement: CounterVec,

    /// 已注册用户数（启动时按存储计数初始化）
    pub users_registered: IntGauge,
}

impl Metrics {
    /// 创建新的Metrics实例
    ///
    /// Registration only fails on duplicate metric names, which would be a
    /// programming error in this module.
    pub fn new() -> Self {
        Self {
            operations_total: register_counter_vec!(
                "user_service_operations_total",
                "Total number of user operations by outcome",
                &["operation", "outcome"]
            )
            .expect("operations_total metric registers once"),

            operation_duration: register_histogram_vec!(
                "user_service_operation_duration_seconds",
                "User operation duration in seconds",
                &["operation"],
                vec![0.0005, 0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0]
            )
            .expect("operation_duration metric registers once"),

            balance_movement: register_counter_vec!(
                "user_service_balance_movement_total",
                "Sum of credited and debited amounts",
                &["direction"]
            )
            .expect("balance_movement metric registers once"),

            users_registered: register_int_gauge!(
                "user_service_users_registered",
                "Accounts currently stored"
            )
            .expect("users_registered metric registers once"),
        }
    }

    /// 导出Prometheus格式的指标
    pub fn export(&self) -> Result<String, prometheus::Error> {
        let metric_families = prometheus::gather();
        TextEncoder::new().encode_to_string(&metric_families)
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
