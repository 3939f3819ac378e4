//! Streak badge refresh

use crate::api::TrackerApi;
use nutrition_tracker_shared::{select_streak, StreakData};
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;
use tracing::{debug, warn};
use uuid::Uuid;

/// Outcome of one refresh request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreakRefresh {
    /// Another refresh was still in flight
    Skipped,
    Loaded,
    /// Fetch failed; the previous result is kept
    Failed(String),
}

/// Holds the latest streaks and serializes refreshes.
///
/// A refresh started while another is pending is skipped rather than queued
/// or cancelling the first, so results are applied in request order.
#[derive(Debug, Default)]
pub struct StreakService {
    in_flight: AtomicBool,
    latest: RwLock<Option<Vec<StreakData>>>,
}

/// Clears the in-flight flag when the refresh ends, including on early return
struct InFlightGuard<'a>(&'a AtomicBool);

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl StreakService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_refreshing(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    pub async fn refresh(&self, api: &dyn TrackerApi, user: Uuid) -> StreakRefresh {
        let Some(_guard) = InFlightGuard::acquire(&self.in_flight) else {
            debug!("Streak refresh already in flight, skipping");
            return StreakRefresh::Skipped;
        };

        match api.fetch_streaks(user).await {
            Ok(streaks) => {
                debug!(count = streaks.len(), "Streaks loaded");
                *self.latest.write().await = Some(streaks);
                StreakRefresh::Loaded
            }
            Err(err) => {
                warn!(error = %err, "Failed to load streaks");
                StreakRefresh::Failed(err.to_string())
            }
        }
    }

    /// Every streak from the last successful refresh
    pub async fn latest(&self) -> Option<Vec<StreakData>> {
        self.latest.read().await.clone()
    }

    /// Streak to show on the badge; `None` renders the zero state
    pub async fn selected(&self) -> Option<StreakData> {
        self.latest
            .read()
            .await
            .as_deref()
            .and_then(select_streak)
            .cloned()
    }
}
