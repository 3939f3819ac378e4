//! Client state shared by the screens of a host application
//!
//! All fields are cheap to clone so the state can be handed to every task
//! that needs to talk to the backend.

use crate::api::{ApiClient, TrackerApi};
use crate::config::AppConfig;
use crate::error::ClientResult;
use crate::services::StreakService;
use nutrition_tracker_shared::progress::GoalPolicy;
use std::sync::Arc;

/// Shared client state
#[derive(Clone)]
pub struct ClientState {
    /// Backend API, `ApiClient` outside of tests
    pub api: Arc<dyn TrackerApi>,
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Streak badge state, shared so refreshes are serialized app-wide
    pub streaks: Arc<StreakService>,
}

impl ClientState {
    /// Build the state with an HTTP client for the configured backend
    pub fn new(config: AppConfig) -> ClientResult<Self> {
        let api = ApiClient::new(&config)?;
        Ok(Self::with_api(config, Arc::new(api)))
    }

    /// Build the state around any `TrackerApi` implementation
    pub fn with_api(config: AppConfig, api: Arc<dyn TrackerApi>) -> Self {
        Self {
            api,
            config: Arc::new(config),
            streaks: Arc::new(StreakService::new()),
        }
    }

    #[inline]
    pub fn api(&self) -> &dyn TrackerApi {
        self.api.as_ref()
    }

    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Goal sanity policy from the progress settings
    pub fn goal_policy(&self) -> GoalPolicy {
        self.config.progress.goal_policy()
    }
}
