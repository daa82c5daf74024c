/// CLI Interface Module
///
/// This module provides the command-line entry point of the user service.
///
/// ## Responsibilities
/// - Parse command-line arguments (with `USER_SERVICE_*` environment fallbacks)
/// - Initialize logging
/// - Build the repository, the service and the HTTP router
/// - Serve until Ctrl-C / SIGTERM and shut down gracefully

use clap::{Parser, ValueEnum};
use std::error::Error;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use crate::application::UserService;
use crate::domain::UserRepository;
use crate::infrastructure::observability::{HealthChecker, HealthStatus};
use crate::infrastructure::persistence::InMemoryUserRepository;
use crate::interfaces::http::create_router;
use crate::shared::metrics::METRICS;

/// 存储后端类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageBackend {
    /// 进程内存储（重启后数据丢失）
    Memory,
    /// MongoDB（需要 `mongo` 特性）
    Mongodb,
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageBackend::Memory => write!(f, "memory"),
            StorageBackend::Mongodb => write!(f, "mongodb"),
        }
    }
}

/// 用户服务命令行配置
#[derive(Parser, Debug, Clone)]
#[command(name = "user-service")]
#[command(version)]
#[command(about = "Player account and balance service", long_about = None)]
pub struct CliConfig {
    /// 服务器监听地址
    #[arg(short = 'H', long, env = "USER_SERVICE_HOST", default_value = "127.0.0.1")]
    pub host: IpAddr,

    /// 服务器监听端口
    #[arg(short, long, env = "USER_SERVICE_PORT", default_value_t = 8080)]
    pub port: u16,

    /// 存储后端
    #[arg(short = 's', long, env = "USER_SERVICE_STORAGE", value_enum, default_value_t = StorageBackend::Memory)]
    pub storage: StorageBackend,

    /// MongoDB连接串
    #[arg(long, env = "USER_SERVICE_MONGODB_URI", default_value = "mongodb://localhost:27017")]
    pub mongodb_uri: String,

    /// MongoDB数据库名
    #[arg(long, env = "USER_SERVICE_MONGODB_DATABASE", default_value = "user_service")]
    pub mongodb_database: String,

    /// 日志级别
    #[arg(short = 'l', long, env = "USER_SERVICE_LOG_LEVEL", default_value = "info", value_parser = ["trace", "debug", "info", "warn", "error"])]
    pub log_level: String,

    /// 仅显示配置不启动服务器（用于调试）
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}

impl CliConfig {
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Rejects combinations that cannot start
    pub fn validate(&self) -> Result<(), String> {
        if self.storage == StorageBackend::Mongodb {
            if !cfg!(feature = "mongo") {
                return Err("storage 'mongodb' requires building with the `mongo` feature".to_string());
            }
            if self.mongodb_database.trim().is_empty() {
                return Err("--mongodb-database must not be empty".to_string());
            }
        }
        Ok(())
    }
}

/// Runs the CLI application
///
/// Parses command-line arguments and serves the HTTP API until shutdown.
pub async fn run() -> Result<(), Box<dyn Error>> {
    let config = CliConfig::parse();

    init_logging(&config.log_level);

    tracing::info!("用户服务启动");
    tracing::info!("配置: {:?}", config);

    config.validate()?;

    if config.dry_run {
        println!("========================================");
        println!("  user-service v{}", env!("CARGO_PKG_VERSION"));
        println!("========================================");
        println!("监听地址:     {}", config.listen_addr());
        println!("存储后端:     {}", config.storage);
        if config.storage == StorageBackend::Mongodb {
            println!("MongoDB:      {} / {}", config.mongodb_uri, config.mongodb_database);
        }
        println!("日志级别:     {}", config.log_level);
        println!("========================================");
        println!("\nDry-run 模式 - 不启动服务器");
        return Ok(());
    }

    let repository = build_repository(&config).await?;
    let registered = repository.count().await?;
    METRICS
        .users_registered
        .set(i64::try_from(registered).unwrap_or(i64::MAX));
    tracing::info!("存储后端 {} 中已有 {} 个用户", repository.backend(), registered);
    let service = Arc::new(UserService::new(repository));
    let health_checker = Arc::new(HealthChecker::default());
    let app = create_router(service, health_checker.clone());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    tracing::info!("HTTP服务监听于 {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(health_checker))
        .await?;

    tracing::info!("用户服务已关闭");
    Ok(())
}

async fn build_repository(config: &CliConfig) -> Result<Arc<dyn UserRepository>, Box<dyn Error>> {
    match config.storage {
        StorageBackend::Memory => Ok(Arc::new(InMemoryUserRepository::new())),
        #[cfg(feature = "mongo")]
        StorageBackend::Mongodb => {
            let repository = crate::infrastructure::persistence::MongoUserRepository::connect(
                &config.mongodb_uri,
                &config.mongodb_database,
            )
            .await?;
            Ok(Arc::new(repository))
        }
        #[cfg(not(feature = "mongo"))]
        StorageBackend::Mongodb => Err("MongoDB support is not compiled in".into()),
    }
}

/// Waits for Ctrl-C or SIGTERM, then marks the service unhealthy so
/// readiness probes fail while in-flight requests drain.
async fn shutdown_signal(health_checker: Arc<HealthChecker>) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("无法监听Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("无法监听SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("收到关闭信号，开始优雅关闭");
    health_checker.set_status(HealthStatus::Unhealthy);
}

/// 初始化日志系统
fn init_logging(level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
