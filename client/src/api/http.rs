//! `reqwest` implementation of [`TrackerApi`]

use super::{Endpoint, GoalResponse, StartDateResponse, TrackerApi};
use crate::config::{AppConfig, RetryConfig, TimeoutConfig, MAX_RETRIES};
use crate::error::{ClientError, ClientResult};
use async_trait::async_trait;
use chrono::NaiveDate;
use nutrition_tracker_shared::progress::{DateWindow, RawProgress};
use nutrition_tracker_shared::{ProfileUpdate, StreakData};
use reqwest::{Method, RequestBuilder};
use secrecy::{ExposeSecret, Secret};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use uuid::Uuid;
use validator::Validate;

/// HTTP client for the tracker backend
///
/// Cloning is cheap; the underlying connection pool is shared.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<Secret<String>>,
    timeouts: TimeoutConfig,
    retry: RetryConfig,
}

impl ApiClient {
    pub fn new(config: &AppConfig) -> ClientResult<Self> {
        let http = reqwest::Client::builder()
            .user_agent(config.api.user_agent.as_str())
            .build()
            .map_err(|e| ClientError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.api.base_url.trim_end_matches('/').to_string(),
            token: config.api.token.clone(),
            timeouts: config.timeouts.clone(),
            retry: RetryConfig {
                max_retries: config.retry.max_retries.min(MAX_RETRIES),
                backoff_ms: config.retry.backoff_ms,
            },
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, endpoint: Endpoint, path: &str) -> RequestBuilder {
        let builder = self
            .http
            .request(method, format!("{}{}", self.base_url, path))
            .timeout(endpoint.timeout(&self.timeouts));

        match &self.token {
            Some(token) => builder.bearer_auth(token.expose_secret()),
            None => builder,
        }
    }

    /// Send the request built by `build`, retrying transient failures.
    ///
    /// `build` is called once per attempt since a `RequestBuilder` is
    /// consumed by `send`.
    async fn execute<F>(&self, endpoint: Endpoint, build: F) -> ClientResult<Vec<u8>>
    where
        F: Fn() -> RequestBuilder + Send + Sync,
    {
        let name = endpoint.as_str();
        let mut attempt: u32 = 0;

        loop {
            metrics::counter!("tracker_api_requests_total", "endpoint" => name).increment(1);

            match Self::send_once(endpoint, build()).await {
                Ok(body) => {
                    debug!(endpoint = name, attempt, bytes = body.len(), "Request succeeded");
                    return Ok(body);
                }
                Err(err) if err.is_retryable() && attempt < self.retry.max_retries => {
                    attempt += 1;
                    metrics::counter!("tracker_api_retries_total", "endpoint" => name).increment(1);
                    warn!(endpoint = name, attempt, error = %err, "Transient failure, retrying");
                    tokio::time::sleep(self.retry.backoff()).await;
                }
                Err(err) => {
                    metrics::counter!("tracker_api_failures_total", "endpoint" => name)
                        .increment(1);
                    warn!(endpoint = name, attempt, error = %err, "Request failed");
                    return Err(err);
                }
            }
        }
    }

    async fn send_once(endpoint: Endpoint, request: RequestBuilder) -> ClientResult<Vec<u8>> {
        let name = endpoint.as_str();
        let response = request
            .send()
            .await
            .map_err(|e| ClientError::from_transport(name, e))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ClientError::Status {
                endpoint: name,
                status: status.as_u16(),
                message,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| ClientError::from_transport(name, e))?;
        Ok(body.to_vec())
    }

    async fn get_json<T, F>(&self, endpoint: Endpoint, build: F) -> ClientResult<T>
    where
        T: DeserializeOwned,
        F: Fn() -> RequestBuilder + Send + Sync,
    {
        let body = self.execute(endpoint, build).await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl TrackerApi for ApiClient {
    async fn fetch_raw_progress(&self, user: Uuid, window: &DateWindow) -> ClientResult<RawProgress> {
        let query = [
            ("user", user.to_string()),
            ("start", window.start.to_string()),
            ("end", window.end.to_string()),
        ];
        self.get_json(Endpoint::RawProgress, || {
            self.request(Method::GET, Endpoint::RawProgress, "/progress/raw")
                .query(&query)
        })
        .await
    }

    async fn fetch_start_date(&self, user: Uuid) -> ClientResult<Option<NaiveDate>> {
        let path = format!("/user/{}/start-date", user);
        let response: StartDateResponse = self
            .get_json(Endpoint::StartDate, || {
                self.request(Method::GET, Endpoint::StartDate, &path)
            })
            .await?;
        Ok(response.start_date)
    }

    async fn fetch_streaks(&self, user: Uuid) -> ClientResult<Vec<StreakData>> {
        let query = [("user", user.to_string())];
        self.get_json(Endpoint::Streaks, || {
            self.request(Method::GET, Endpoint::Streaks, "/streaks")
                .query(&query)
        })
        .await
    }

    async fn fetch_goal(&self, user: Uuid, date: Option<NaiveDate>) -> ClientResult<GoalResponse> {
        let mut query = vec![("user", user.to_string())];
        if let Some(date) = date {
            query.push(("date", date.to_string()));
        }
        self.get_json(Endpoint::Goal, || {
            self.request(Method::GET, Endpoint::Goal, "/goal")
                .query(&query)
        })
        .await
    }

    async fn update_profile(&self, user: Uuid, update: &ProfileUpdate) -> ClientResult<()> {
        update.validate()?;
        let path = format!("/user/{}", user);
        self.execute(Endpoint::Profile, || {
            self.request(Method::PUT, Endpoint::Profile, &path)
                .json(update)
        })
        .await?;
        Ok(())
    }
}
