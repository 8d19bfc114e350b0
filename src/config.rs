use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Environment variable overriding the listening port
pub const PORT_ENV: &str = "PORT";
/// Environment variable overriding the Redis address
pub const REDIS_URL_ENV: &str = "REDIS_URL";

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub log_level: String,
    pub log_dir: String,
    pub log_file: String,
    pub use_json: bool,
    pub rotation: String,
    /// Emit the per-request `Started`/`Completed` lines (target `http`)
    pub log_requests: bool,
    pub server: ServerConfig,
    pub redis: RedisConfig,
    pub store: StoreConfig,
    pub latency: LatencyConfig,
    pub inventory: InventoryConfig,
    /// Seed for the shared random source. Unset means OS entropy.
    pub random_seed: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_dir: "./logs".to_string(),
            log_file: "middleware.log".to_string(),
            use_json: false,
            rotation: "daily".to_string(),
            log_requests: true,
            server: ServerConfig::default(),
            redis: RedisConfig::default(),
            store: StoreConfig::default(),
            latency: LatencyConfig::default(),
            inventory: InventoryConfig::default(),
            random_seed: None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3002,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct RedisConfig {
    /// Either a full `redis://` URL or a bare `host:port`
    pub url: String,
    /// Upper bound for a single store command; exceeding it counts as unavailable
    pub timeout_ms: u64,
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            url: "localhost:6379".to_string(),
            timeout_ms: 500,
        }
    }
}

impl RedisConfig {
    /// Connection URL with the `redis://` scheme filled in for bare addresses
    pub fn connection_url(&self) -> String {
        if self.url.contains("://") {
            self.url.clone()
        } else {
            format!("redis://{}", self.url)
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    #[default]
    Redis,
    Memory,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct StoreConfig {
    pub backend: StoreBackend,
}

/// Synthetic latency injected for observability demos
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LatencyConfig {
    pub enabled: bool,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct InventoryConfig {
    /// Items whose counters are created at startup when absent
    pub seed_items: Vec<String>,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            seed_items: [
                "nebula-latte",
                "supernova-espresso",
                "galaxy-mocha",
                "asteroid-americano",
                "lunar-cappuccino",
                "starlight-frappe",
                "comet-cold-brew",
                "rocket-fuel",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

impl AppConfig {
    /// Load `config/<env>.yaml` (defaults when the file is absent), then apply
    /// `PORT` / `REDIS_URL` from the process environment.
    pub fn load(env: &str) -> anyhow::Result<Self> {
        let config_path = format!("config/{}.yaml", env);
        let mut config = Self::from_file(&config_path)?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_yaml(&content)
            .with_context(|| format!("Failed to parse config yaml: {}", path.display()))
    }

    pub fn from_yaml(content: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Apply environment overrides through `lookup` so tests need not touch
    /// the real process environment.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> anyhow::Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup(PORT_ENV).filter(|v| !v.is_empty()) {
            self.server.port = port
                .parse()
                .with_context(|| format!("{} is not a valid port: {}", PORT_ENV, port))?;
        }
        if let Some(url) = lookup(REDIS_URL_ENV).filter(|v| !v.is_empty()) {
            self.redis.url = url;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_match_documented_values() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 3002);
        assert_eq!(config.redis.url, "localhost:6379");
        assert_eq!(config.store.backend, StoreBackend::Redis);
        assert_eq!(config.inventory.seed_items.len(), 8);
        assert!(config.latency.enabled);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = AppConfig::from_yaml("log_level: debug\nstore:\n  backend: memory\n").unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.store.backend, StoreBackend::Memory);
        assert_eq!(config.server.port, 3002);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = AppConfig::from_file("config/does-not-exist.yaml").unwrap();
        assert_eq!(config.server.port, 3002);
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> =
            [(PORT_ENV, "8088"), (REDIS_URL_ENV, "redis:6380")].into_iter().collect();
        let mut config = AppConfig::default();
        config
            .apply_overrides(|k| vars.get(k).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(config.server.port, 8088);
        assert_eq!(config.redis.url, "redis:6380");
    }

    #[test]
    fn test_empty_env_values_are_ignored() {
        let mut config = AppConfig::default();
        config.apply_overrides(|_| Some(String::new())).unwrap();
        assert_eq!(config.server.port, 3002);
        assert_eq!(config.redis.url, "localhost:6379");
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let mut config = AppConfig::default();
        let result = config.apply_overrides(|k| (k == PORT_ENV).then(|| "abc".to_string()));
        assert!(result.is_err());
    }

    #[test]
    fn test_connection_url_adds_scheme() {
        let mut redis = RedisConfig::default();
        assert_eq!(redis.connection_url(), "redis://localhost:6379");
        redis.url = "redis://cache:6379/1".to_string();
        assert_eq!(redis.connection_url(), "redis://cache:6379/1");
    }
}
