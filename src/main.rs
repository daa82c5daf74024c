//! Main entry point for the user service
//!
//! This serves as a thin wrapper that delegates to the interfaces layer.
//! The actual application logic is implemented in `interfaces::cli`.

// 全局内存分配器：使用 jemalloc
#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use user_service::interfaces::cli;

#[tokio::main]
async fn main() {
    if let Err(e) = cli::run().await {
        eprintln!("user-service: {}", e);
        std::process::exit(1);
    }
}
