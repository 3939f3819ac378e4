//! Backend API access
//!
//! Services talk to the backend only through [`TrackerApi`], so they can be
//! tested against an in-memory implementation.

mod http;

pub use http::ApiClient;

use crate::config::TimeoutConfig;
use crate::error::ClientResult;
use async_trait::async_trait;
use chrono::NaiveDate;
use nutrition_tracker_shared::progress::{types::parse_timestamp, DateWindow, RawProgress};
use nutrition_tracker_shared::{ProfileUpdate, StreakData};
use serde::{Deserialize, Deserializer, Serialize};
use std::time::Duration;
use uuid::Uuid;

/// Backend endpoints, used for timeouts, logs and metric labels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    RawProgress,
    StartDate,
    Streaks,
    Profile,
    Goal,
}

impl Endpoint {
    pub fn as_str(&self) -> &'static str {
        match self {
            Endpoint::RawProgress => "progress_raw",
            Endpoint::StartDate => "start_date",
            Endpoint::Streaks => "streaks",
            Endpoint::Profile => "profile",
            Endpoint::Goal => "goal",
        }
    }

    /// Start date is a user-profile read and shares the profile budget
    pub fn timeout(&self, timeouts: &TimeoutConfig) -> Duration {
        let ms = match self {
            Endpoint::RawProgress => timeouts.progress_ms,
            Endpoint::Streaks => timeouts.streaks_ms,
            Endpoint::StartDate | Endpoint::Profile => timeouts.profile_ms,
            Endpoint::Goal => timeouts.goal_ms,
        };
        Duration::from_millis(ms)
    }
}

/// `GET /user/{id}/start-date`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StartDateResponse {
    #[serde(default, deserialize_with = "deserialize_loose_date")]
    pub start_date: Option<NaiveDate>,
}

/// `GET /goal`
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GoalResponse {
    #[serde(default)]
    pub goal: Option<f64>,
    #[serde(default)]
    pub exercise_goal: Option<f64>,
}

/// Accepts a bare date or a full timestamp; anything unparseable is `None`
fn deserialize_loose_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_timestamp).map(|ts| ts.date()))
}

#[async_trait]
pub trait TrackerApi: Send + Sync {
    /// Raw nutrition and exercise entries inside `window`
    async fn fetch_raw_progress(&self, user: Uuid, window: &DateWindow) -> ClientResult<RawProgress>;

    /// First day the user tracked anything
    async fn fetch_start_date(&self, user: Uuid) -> ClientResult<Option<NaiveDate>>;

    async fn fetch_streaks(&self, user: Uuid) -> ClientResult<Vec<StreakData>>;

    /// Goal in effect on `date`, or the live goal when `date` is `None`
    async fn fetch_goal(&self, user: Uuid, date: Option<NaiveDate>) -> ClientResult<GoalResponse>;

    async fn update_profile(&self, user: Uuid, update: &ProfileUpdate) -> ClientResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Endpoint::RawProgress, 10_000)]
    #[case(Endpoint::Streaks, 6_000)]
    #[case(Endpoint::Profile, 8_000)]
    #[case(Endpoint::StartDate, 8_000)]
    #[case(Endpoint::Goal, 6_000)]
    fn test_default_timeouts(#[case] endpoint: Endpoint, #[case] ms: u64) {
        assert_eq!(
            endpoint.timeout(&TimeoutConfig::default()),
            Duration::from_millis(ms)
        );
    }

    #[test]
    fn test_start_date_shapes() {
        let parsed: StartDateResponse =
            serde_json::from_str(r#"{"start_date":"2026-03-14"}"#).unwrap();
        assert_eq!(parsed.start_date, NaiveDate::from_ymd_opt(2026, 3, 14));

        let parsed: StartDateResponse =
            serde_json::from_str(r#"{"start_date":"2026-03-14T09:30:00Z"}"#).unwrap();
        assert_eq!(parsed.start_date, NaiveDate::from_ymd_opt(2026, 3, 14));

        let parsed: StartDateResponse = serde_json::from_str(r#"{"start_date":null}"#).unwrap();
        assert_eq!(parsed.start_date, None);

        let parsed: StartDateResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.start_date, None);
    }

    proptest::proptest! {
        #[test]
        fn prop_start_date_accepts_date_or_timestamp(days in 0i64..20_000, hour in 0u32..24) {
            let date = NaiveDate::from_ymd_opt(1990, 1, 1).unwrap() + chrono::Duration::days(days);
            let bare = format!(r#"{{"start_date":"{}"}}"#, date);
            let stamped = format!(r#"{{"start_date":"{}T{:02}:00:00"}}"#, date, hour);

            let bare: StartDateResponse = serde_json::from_str(&bare).unwrap();
            let stamped: StartDateResponse = serde_json::from_str(&stamped).unwrap();
            proptest::prop_assert_eq!(bare.start_date, Some(date));
            proptest::prop_assert_eq!(stamped.start_date, Some(date));
        }
    }

    #[test]
    fn test_goal_response_optional_fields() {
        let parsed: GoalResponse = serde_json::from_str(r#"{"goal":2100}"#).unwrap();
        assert_eq!(parsed.goal, Some(2100.0));
        assert_eq!(parsed.exercise_goal, None);
    }
}
