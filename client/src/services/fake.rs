//! In-memory `TrackerApi` for service tests

use crate::api::{GoalResponse, TrackerApi};
use crate::error::{ClientError, ClientResult};
use async_trait::async_trait;
use chrono::NaiveDate;
use nutrition_tracker_shared::progress::{DateWindow, RawProgress};
use nutrition_tracker_shared::{ProfileUpdate, StreakData};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use tokio::sync::Notify;
use uuid::Uuid;

#[derive(Default)]
pub struct FakeApi {
    pub raw: Option<RawProgress>,
    pub start_date: Option<NaiveDate>,
    pub start_date_fails: bool,
    pub streaks: Option<Vec<StreakData>>,
    pub current_goal: Option<f64>,
    pub exercise_goal: Option<f64>,
    pub historical_goals: HashMap<NaiveDate, f64>,
    pub goal_fails: bool,
    pub profile_fails: bool,
    /// When set, `fetch_streaks` waits for `release` before answering
    pub streak_gate: Option<Notify>,
    pub windows: Mutex<Vec<DateWindow>>,
    pub profile_updates: Mutex<Vec<ProfileUpdate>>,
    pub streak_calls: AtomicUsize,
}

fn unavailable(endpoint: &'static str) -> ClientError {
    ClientError::Status {
        endpoint,
        status: 503,
        message: "unavailable".to_string(),
    }
}

impl FakeApi {
    pub fn release(&self) {
        if let Some(gate) = &self.streak_gate {
            gate.notify_one();
        }
    }

    pub fn requested_windows(&self) -> Vec<DateWindow> {
        self.windows.lock().unwrap().clone()
    }

    pub fn saved_profiles(&self) -> Vec<ProfileUpdate> {
        self.profile_updates.lock().unwrap().clone()
    }
}

#[async_trait]
impl TrackerApi for FakeApi {
    async fn fetch_raw_progress(&self, _user: Uuid, window: &DateWindow) -> ClientResult<RawProgress> {
        self.windows.lock().unwrap().push(*window);
        self.raw
            .clone()
            .ok_or(ClientError::Timeout { endpoint: "progress_raw" })
    }

    async fn fetch_start_date(&self, _user: Uuid) -> ClientResult<Option<NaiveDate>> {
        if self.start_date_fails {
            return Err(unavailable("start_date"));
        }
        Ok(self.start_date)
    }

    async fn fetch_streaks(&self, _user: Uuid) -> ClientResult<Vec<StreakData>> {
        self.streak_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.streak_gate {
            gate.notified().await;
        }
        self.streaks.clone().ok_or_else(|| unavailable("streaks"))
    }

    async fn fetch_goal(&self, _user: Uuid, date: Option<NaiveDate>) -> ClientResult<GoalResponse> {
        if self.goal_fails {
            return Err(unavailable("goal"));
        }
        let goal = match date {
            Some(date) => self.historical_goals.get(&date).copied(),
            None => self.current_goal,
        };
        Ok(GoalResponse {
            goal,
            exercise_goal: self.exercise_goal,
        })
    }

    async fn update_profile(&self, _user: Uuid, update: &ProfileUpdate) -> ClientResult<()> {
        if self.profile_fails {
            return Err(unavailable("profile"));
        }
        self.profile_updates.lock().unwrap().push(update.clone());
        Ok(())
    }
}
