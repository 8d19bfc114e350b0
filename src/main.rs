//! Order Middleware service
//!
//! ```text
//! ┌──────────┐    ┌───────────┐    ┌────────────┐    ┌─────────┐
//! │  Client  │───▶│  Logging  │───▶│  Latency   │───▶│ Handler │──▶ Redis
//! └──────────┘    └───────────┘    └────────────┘    └─────────┘
//! ```
//!
//! Usage: `order_middleware [--env dev] [--port 3002]`

use order_middleware::config::AppConfig;
use order_middleware::gateway;

/// Value following the first of `flags` on the command line
fn arg_value(args: &[String], flags: &[&str]) -> Option<String> {
    args.windows(2)
        .find(|pair| flags.contains(&pair[0].as_str()))
        .map(|pair| pair[1].clone())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let env = arg_value(&args, &["--env", "-e"]).unwrap_or_else(|| "dev".to_string());
    let mut app_config = AppConfig::load(&env)?;
    if let Some(port) = arg_value(&args, &["--port"]).and_then(|p| p.parse().ok()) {
        app_config.server.port = port;
    }
    let _log_guard = order_middleware::logging::init_logging(&app_config);

    tracing::info!(
        env = %env,
        git = env!("GIT_HASH"),
        store = ?app_config.store.backend,
        redis = %app_config.redis.url,
        "Starting middleware service"
    );

    let store = gateway::build_store(&app_config)?;
    let state = gateway::build_state(&app_config, store).await;

    gateway::run_server(&app_config.server.host, app_config.server.port, state).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_arg_value() {
        let argv = args(&["order_middleware", "-e", "local", "--port", "4000"]);
        assert_eq!(arg_value(&argv, &["--env", "-e"]).as_deref(), Some("local"));
        assert_eq!(arg_value(&argv, &["--port"]).as_deref(), Some("4000"));
        assert_eq!(arg_value(&argv, &["--missing"]), None);

        // Trailing flag without a value
        assert_eq!(arg_value(&args(&["order_middleware", "--port"]), &["--port"]), None);
    }
}
