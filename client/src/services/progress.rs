//! Progress screen data

use crate::api::TrackerApi;
use chrono::NaiveDate;
use nutrition_tracker_shared::progress::{
    aggregate, resolve_goal, summarize_progress, summarize_single_date, DateWindow,
    GoalPolicy, GraphDataPoint, ProgressData, SingleDateSummary, TimeRange,
};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Figures shown above the chart
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ProgressSummary {
    /// Nothing could be loaded, or the window is empty
    Empty,
    /// Daily, weekly or monthly series
    MultiDay(ProgressData),
    /// Meal breakdown for one day, compared against its goal
    SingleDate(SingleDateSummary),
    /// Meal breakdown for a custom multi-day range
    Breakdown { total: f64 },
}

/// Everything the progress screen renders for one range
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressView {
    pub range: TimeRange,
    pub window: DateWindow,
    pub points: Vec<GraphDataPoint>,
    pub exercise_points: Option<Vec<GraphDataPoint>>,
    pub summary: ProgressSummary,
}

impl ProgressView {
    pub fn empty(range: TimeRange, window: DateWindow) -> Self {
        Self {
            range,
            window,
            points: Vec::new(),
            exercise_points: None,
            summary: ProgressSummary::Empty,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Progress loading service
pub struct ProgressService;

impl ProgressService {
    /// Load the view for `range` as of `today`.
    ///
    /// Never fails: a failed fetch of the raw logs yields an empty view.
    /// Start-date and goal lookups are best-effort and only drop the clamp
    /// or the goal when they fail.
    pub async fn load(
        api: &dyn TrackerApi,
        policy: &GoalPolicy,
        user: Uuid,
        range: TimeRange,
        today: NaiveDate,
    ) -> ProgressView {
        let tracking_start = if range.is_custom() {
            None
        } else {
            Self::tracking_start(api, user).await
        };

        let window = DateWindow::derive(range, today, tracking_start);
        if window.is_empty() {
            debug!(range = range.as_str(), "Window is empty, nothing to fetch");
            return ProgressView::empty(range, window);
        }

        let raw = match api.fetch_raw_progress(user, &window).await {
            Ok(raw) => raw,
            Err(err) => {
                warn!(
                    range = range.as_str(),
                    start = %window.start,
                    end = %window.end,
                    error = %err,
                    "Failed to load progress, showing empty chart"
                );
                metrics::counter!("tracker_progress_degraded_total").increment(1);
                return ProgressView::empty(range, window);
            }
        };

        let points = aggregate(&raw.calories, &window, range);

        let (exercise_points, summary) = match range {
            TimeRange::Custom { .. } => match range.single_date() {
                Some(date) => {
                    let (historical, current) = tokio::join!(
                        Self::goal(api, user, Some(date)),
                        Self::goal(api, user, None)
                    );
                    let goal = resolve_goal(
                        date,
                        today,
                        historical.and_then(|g| g.0),
                        current.and_then(|g| g.0),
                        policy,
                    );
                    let summary = summarize_single_date(date, &points, goal);
                    (None, ProgressSummary::SingleDate(summary))
                }
                None => {
                    let total = points.iter().map(|p| p.value).sum();
                    (None, ProgressSummary::Breakdown { total })
                }
            },
            _ => {
                let exercise_points =
                    (!raw.exercise.is_empty()).then(|| aggregate(&raw.exercise, &window, range));

                let (calorie_goal, exercise_goal) =
                    Self::goal(api, user, None).await.unwrap_or((None, None));
                let mut goals = BTreeMap::new();
                if let Some(goal) = policy.sanitize(exercise_goal) {
                    goals.insert("exercise".to_string(), goal);
                }

                let data = summarize_progress(
                    &points,
                    exercise_points.as_deref(),
                    calorie_goal,
                    goals,
                    policy,
                );
                (exercise_points, ProgressSummary::MultiDay(data))
            }
        };

        info!(
            range = range.as_str(),
            buckets = points.len(),
            entries = raw.calories.len(),
            "Progress loaded"
        );

        ProgressView {
            range,
            window,
            points,
            exercise_points,
            summary,
        }
    }

    async fn tracking_start(api: &dyn TrackerApi, user: Uuid) -> Option<NaiveDate> {
        match api.fetch_start_date(user).await {
            Ok(date) => date,
            Err(err) => {
                warn!(error = %err, "Could not load tracking start date, window not clamped");
                None
            }
        }
    }

    /// `(calorie goal, exercise goal)`, or `None` when the lookup failed
    async fn goal(
        api: &dyn TrackerApi,
        user: Uuid,
        date: Option<NaiveDate>,
    ) -> Option<(Option<f64>, Option<f64>)> {
        match api.fetch_goal(user, date).await {
            Ok(goal) => Some((goal.goal, goal.exercise_goal)),
            Err(err) => {
                warn!(date = ?date, error = %err, "Could not load goal");
                None
            }
        }
    }
}
