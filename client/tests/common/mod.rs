//! Common test utilities for integration tests
//!
//! Each test gets its own mock backend and a client pointed at it.

#![allow(dead_code)]

use nutrition_tracker_client::config::{AppConfig, RetryConfig, TimeoutConfig};
use nutrition_tracker_client::ApiClient;
use uuid::Uuid;
use wiremock::MockServer;

/// Request timeout used by tests, short enough to exercise retries quickly
pub const TEST_TIMEOUT_MS: u64 = 300;

/// Mock backend plus a client configured for it
pub struct TestBackend {
    pub server: MockServer,
    pub client: ApiClient,
    pub user: Uuid,
}

impl TestBackend {
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        let client = ApiClient::new(&test_config(&server.uri())).expect("client builds");
        Self {
            server,
            client,
            user: Uuid::new_v4(),
        }
    }
}

pub fn test_config(base_url: &str) -> AppConfig {
    let mut config = AppConfig::default();
    config.api.base_url = base_url.to_string();
    config.timeouts = TimeoutConfig {
        progress_ms: TEST_TIMEOUT_MS,
        streaks_ms: TEST_TIMEOUT_MS,
        profile_ms: TEST_TIMEOUT_MS,
        goal_ms: TEST_TIMEOUT_MS,
    };
    config.retry = RetryConfig {
        max_retries: 1,
        backoff_ms: 10,
    };
    config
}

/// Client pointed at a port nothing listens on
pub fn unreachable_client() -> ApiClient {
    ApiClient::new(&test_config("http://127.0.0.1:9")).expect("client builds")
}
