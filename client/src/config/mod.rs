//! Configuration management for the Nutrition Tracker client
//!
//! Configuration is loaded hierarchically:
//! 1. Default values (in code)
//! 2. TOML config files (config/development.toml or config/production.toml)
//! 3. Environment variables (prefix: NT__)

use anyhow::Result;
use nutrition_tracker_shared::progress::{GoalPolicy, DEFAULT_SANE_GOAL_CEILING};
use secrecy::Secret;
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api: ApiConfig,
    #[serde(default)]
    pub timeouts: TimeoutConfig,
    #[serde(default)]
    pub retry: RetryConfig,
    #[serde(default)]
    pub progress: ProgressConfig,
}

/// Backend connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub user_agent: String,
    /// Bearer token; never written back out
    #[serde(default, skip_serializing)]
    pub token: Option<Secret<String>>,
}

/// Per-endpoint request timeouts in milliseconds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeoutConfig {
    pub progress_ms: u64,
    pub streaks_ms: u64,
    pub profile_ms: u64,
    pub goal_ms: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            progress_ms: 10_000,
            streaks_ms: 6_000,
            profile_ms: 8_000,
            goal_ms: 6_000,
        }
    }
}

/// Transient failures are retried at most once
pub const MAX_RETRIES: u32 = 1;

/// Retry policy for transient failures
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    pub max_retries: u32,
    pub backoff_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: MAX_RETRIES,
            backoff_ms: 500,
        }
    }
}

impl RetryConfig {
    pub fn backoff(&self) -> Duration {
        Duration::from_millis(self.backoff_ms)
    }
}

/// Progress aggregation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressConfig {
    pub sane_goal_ceiling: f64,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            sane_goal_ceiling: DEFAULT_SANE_GOAL_CEILING,
        }
    }
}

impl ProgressConfig {
    pub fn goal_policy(&self) -> GoalPolicy {
        GoalPolicy::new(self.sane_goal_ceiling)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "http://localhost:8080/api".to_string(),
                user_agent: format!("nutrition-tracker/{}", env!("CARGO_PKG_VERSION")),
                token: None,
            },
            timeouts: TimeoutConfig::default(),
            retry: RetryConfig::default(),
            progress: ProgressConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from files and environment
    ///
    /// Loading order (later sources override earlier):
    /// 1. Default values
    /// 2. Config file based on RUST_ENV (development.toml or production.toml)
    /// 3. Environment variables with NT__ prefix
    pub fn load() -> Result<Self> {
        // Load environment variables from .env file
        dotenvy::dotenv().ok();

        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let config_file = format!("config/{}.toml", env);

        let config = config::Config::builder()
            // Start with defaults
            .add_source(config::Config::try_from(&AppConfig::default())?)
            // Load from environment-specific config file
            .add_source(config::File::with_name(&config_file).required(false))
            // Override with environment variables (NT__ prefix)
            // e.g., NT__API__BASE_URL=https://... sets api.base_url
            .add_source(config::Environment::with_prefix("NT").separator("__"))
            .build()?;

        let config: AppConfig = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Check if running in production mode
    pub fn is_production() -> bool {
        env::var("RUST_ENV")
            .map(|v| v == "production")
            .unwrap_or(false)
    }

    /// Reject settings that would make every request fail
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();

        if !(self.api.base_url.starts_with("http://") || self.api.base_url.starts_with("https://")) {
            errors.push("api.base_url must be an http(s) URL");
        }
        if Self::is_production() && !self.api.base_url.starts_with("https://") {
            errors.push("api.base_url must use https in production");
        }
        let t = &self.timeouts;
        if [t.progress_ms, t.streaks_ms, t.profile_ms, t.goal_ms].contains(&0) {
            errors.push("timeouts must be greater than zero");
        }
        if self.retry.max_retries > MAX_RETRIES {
            errors.push("retry.max_retries must be 0 or 1");
        }
        if !(self.progress.sane_goal_ceiling > 0.0) {
            errors.push("progress.sane_goal_ceiling must be positive");
        }

        if !errors.is_empty() {
            for err in &errors {
                tracing::error!("Configuration error: {}", err);
            }
            anyhow::bail!("Invalid configuration: {}", errors.join("; "));
        }

        Ok(())
    }
}
