//! Summary statistics over bucketed series

use super::types::{GraphDataPoint, MetricSummary, ProgressData};
use crate::theme::Tone;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Goals above this are assumed to be bad data (e.g. a weekly total stored
/// as a daily goal)
pub const DEFAULT_SANE_GOAL_CEILING: f64 = 5000.0;

/// Which goal values are trusted for comparisons
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalPolicy {
    pub sane_goal_ceiling: f64,
}

impl Default for GoalPolicy {
    fn default() -> Self {
        Self {
            sane_goal_ceiling: DEFAULT_SANE_GOAL_CEILING,
        }
    }
}

impl GoalPolicy {
    pub fn new(sane_goal_ceiling: f64) -> Self {
        Self { sane_goal_ceiling }
    }

    pub fn is_sane(&self, goal: f64) -> bool {
        goal.is_finite() && goal > 0.0 && goal <= self.sane_goal_ceiling
    }

    /// Drop goals that fail the sanity check
    pub fn sanitize(&self, goal: Option<f64>) -> Option<f64> {
        goal.filter(|g| self.is_sane(*g))
    }
}

// ============================================================================
// Multi-day mode
// ============================================================================

/// Average, latest value and change for a series of bucket values.
///
/// Change is measured against the goal when a sane one exists, otherwise
/// against the previous bucket.
pub fn summarize_series(values: &[f64], goal: Option<f64>, policy: &GoalPolicy) -> MetricSummary {
    let goal = policy.sanitize(goal);
    let Some(&current) = values.last() else {
        return MetricSummary {
            goal,
            ..MetricSummary::default()
        };
    };

    let average = values.iter().sum::<f64>() / values.len() as f64;
    let change = match goal {
        Some(goal) => current - goal,
        None if values.len() >= 2 => current - values[values.len() - 2],
        None => 0.0,
    };

    MetricSummary {
        current,
        average,
        change,
        goal,
    }
}

fn values_of(points: &[GraphDataPoint]) -> Vec<f64> {
    points.iter().map(|p| p.value).collect()
}

/// Build the multi-day summary for the calorie series and, when present,
/// the exercise series. `goals` holds secondary-metric goals by name.
pub fn summarize_progress(
    calories: &[GraphDataPoint],
    exercise: Option<&[GraphDataPoint]>,
    calorie_goal: Option<f64>,
    goals: BTreeMap<String, f64>,
    policy: &GoalPolicy,
) -> ProgressData {
    let calorie_summary = summarize_series(&values_of(calories), calorie_goal, policy);
    let exercise_summary = exercise.map(|points| {
        summarize_series(&values_of(points), goals.get("exercise").copied(), policy)
    });

    ProgressData {
        calories: calorie_summary,
        exercise: exercise_summary,
        goals,
    }
}

// ============================================================================
// Goal resolution
// ============================================================================

/// Where a resolved goal came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalSource {
    Historical,
    Current,
}

/// Subtitle wording for the goal; never affects the numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalLabel {
    CurrentGoal,
    DailyTarget,
}

impl GoalLabel {
    pub fn text(&self) -> &'static str {
        match self {
            GoalLabel::CurrentGoal => "current goal",
            GoalLabel::DailyTarget => "daily target",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedGoal {
    pub value: f64,
    pub source: GoalSource,
    pub label: GoalLabel,
}

/// Whether `date` counts as recent (today or yesterday)
pub fn is_recent(date: NaiveDate, today: NaiveDate) -> bool {
    (today - date).num_days() <= 1
}

/// Pick the goal that applied on `date`.
///
/// The goal recorded for that day wins, the live goal is the fallback.
/// Recency only picks the label.
pub fn resolve_goal(
    date: NaiveDate,
    today: NaiveDate,
    historical: Option<f64>,
    current: Option<f64>,
    policy: &GoalPolicy,
) -> Option<ResolvedGoal> {
    let historical = policy.sanitize(historical).map(|v| (v, GoalSource::Historical));
    let current = policy.sanitize(current).map(|v| (v, GoalSource::Current));

    let label = if is_recent(date, today) {
        GoalLabel::CurrentGoal
    } else {
        GoalLabel::DailyTarget
    };

    historical.or(current).map(|(value, source)| ResolvedGoal {
        value,
        source,
        label,
    })
}

// ============================================================================
// Single-date mode
// ============================================================================

/// Position of a day's total relative to its goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GoalBalance {
    Remaining,
    Over,
}

impl GoalBalance {
    pub fn label(&self) -> &'static str {
        match self {
            GoalBalance::Remaining => "REMAINING",
            GoalBalance::Over => "OVER",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            GoalBalance::Remaining => Tone::Success,
            GoalBalance::Over => Tone::Error,
        }
    }
}

/// Summary of a single-day meal breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SingleDateSummary {
    pub date: NaiveDate,
    pub total: f64,
    pub goal: Option<ResolvedGoal>,
    /// `|total - goal|`, present when a goal is known
    pub difference: Option<f64>,
    pub balance: Option<GoalBalance>,
}

/// Total the meal points for a day and compare against the resolved goal
pub fn summarize_single_date(
    date: NaiveDate,
    points: &[GraphDataPoint],
    goal: Option<ResolvedGoal>,
) -> SingleDateSummary {
    let total: f64 = points.iter().map(|p| p.value).sum();
    let (difference, balance) = match goal {
        Some(goal) => {
            let balance = if total < goal.value {
                GoalBalance::Remaining
            } else {
                GoalBalance::Over
            };
            (Some((total - goal.value).abs()), Some(balance))
        }
        None => (None, None),
    };

    SingleDateSummary {
        date,
        total,
        goal,
        difference,
        balance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_change_against_sane_goal() {
        let summary = summarize_series(&[1500.0, 1800.0], Some(2000.0), &GoalPolicy::default());
        assert_eq!(summary.current, 1800.0);
        assert_eq!(summary.change, -200.0);
        assert_eq!(summary.goal, Some(2000.0));
        assert_eq!(summary.average, 1650.0);
    }

    #[test]
    fn test_change_falls_back_to_previous_bucket_when_goal_insane() {
        let summary = summarize_series(&[1500.0, 1800.0], Some(6000.0), &GoalPolicy::default());
        assert_eq!(summary.change, 300.0);
        assert_eq!(summary.goal, None);
    }

    #[test]
    fn test_single_bucket_without_goal_has_no_change() {
        let summary = summarize_series(&[1800.0], None, &GoalPolicy::default());
        assert_eq!(summary.change, 0.0);
        assert_eq!(summary.average, 1800.0);
    }

    #[test]
    fn test_empty_series() {
        let summary = summarize_series(&[], Some(2000.0), &GoalPolicy::default());
        assert_eq!(summary.current, 0.0);
        assert_eq!(summary.average, 0.0);
        assert_eq!(summary.change, 0.0);
    }

    #[test]
    fn test_zero_and_negative_goals_are_not_sane() {
        let policy = GoalPolicy::default();
        assert!(!policy.is_sane(0.0));
        assert!(!policy.is_sane(-100.0));
        assert!(policy.is_sane(5000.0));
        assert!(!policy.is_sane(5000.1));
        assert!(!policy.is_sane(f64::NAN));
    }

    #[test]
    fn test_ceiling_is_configurable() {
        let policy = GoalPolicy::new(8000.0);
        let summary = summarize_series(&[1500.0, 1800.0], Some(6000.0), &policy);
        assert_eq!(summary.change, -4200.0);
    }

    #[test]
    fn test_summarize_progress_uses_exercise_goal() {
        let day = d(2026, 10, 1);
        let calories = vec![GraphDataPoint::new(day, 1900.0, "Thu")];
        let exercise = vec![GraphDataPoint::new(day, 250.0, "Thu")];
        let mut goals = BTreeMap::new();
        goals.insert("exercise".to_string(), 300.0);

        let data = summarize_progress(
            &calories,
            Some(&exercise),
            Some(2000.0),
            goals,
            &GoalPolicy::default(),
        );

        assert_eq!(data.calories.change, -100.0);
        assert_eq!(data.exercise.unwrap().change, -50.0);
        assert_eq!(data.goals["exercise"], 300.0);
    }

    #[test]
    fn test_resolve_goal_prefers_historical_for_old_dates() {
        let today = d(2026, 10, 18);
        let goal = resolve_goal(d(2026, 10, 10), today, Some(1800.0), Some(2200.0), &GoalPolicy::default())
            .unwrap();
        assert_eq!(goal.value, 1800.0);
        assert_eq!(goal.source, GoalSource::Historical);
        assert_eq!(goal.label.text(), "daily target");
    }

    #[test]
    fn test_resolve_goal_recency_only_changes_label() {
        let today = d(2026, 10, 18);
        let policy = GoalPolicy::default();
        let recent = resolve_goal(d(2026, 10, 17), today, Some(1800.0), Some(2200.0), &policy).unwrap();
        let older = resolve_goal(d(2026, 10, 1), today, Some(1800.0), Some(2200.0), &policy).unwrap();

        assert_eq!(recent.value, older.value);
        assert_eq!(recent.value, 1800.0);
        assert_eq!(recent.source, GoalSource::Historical);
        assert_eq!(recent.label, GoalLabel::CurrentGoal);
        assert_eq!(older.label, GoalLabel::DailyTarget);

        let today_only_live = resolve_goal(today, today, None, Some(2200.0), &policy).unwrap();
        assert_eq!(today_only_live.value, 2200.0);
        assert_eq!(today_only_live.source, GoalSource::Current);
    }

    #[test]
    fn test_resolve_goal_falls_back_and_filters_insane() {
        let today = d(2026, 10, 18);
        let policy = GoalPolicy::default();

        let goal = resolve_goal(d(2026, 10, 1), today, Some(9000.0), Some(2100.0), &policy).unwrap();
        assert_eq!(goal.source, GoalSource::Current);
        assert_eq!(goal.label, GoalLabel::DailyTarget);

        assert!(resolve_goal(today, today, None, Some(7000.0), &policy).is_none());
    }

    #[test]
    fn test_single_date_remaining() {
        let day = d(2026, 10, 12);
        let points = vec![
            GraphDataPoint::new(day, 300.0, "Breakfast"),
            GraphDataPoint::new(day, 500.0, "Dinner"),
        ];
        let goal = ResolvedGoal {
            value: 2000.0,
            source: GoalSource::Historical,
            label: GoalLabel::DailyTarget,
        };

        let summary = summarize_single_date(day, &points, Some(goal));

        assert_eq!(summary.total, 800.0);
        assert_eq!(summary.difference, Some(1200.0));
        assert_eq!(summary.balance, Some(GoalBalance::Remaining));
        assert_eq!(summary.balance.unwrap().tone(), Tone::Success);
    }

    #[test]
    fn test_single_date_over_and_exact() {
        let day = d(2026, 10, 12);
        let goal = ResolvedGoal {
            value: 2000.0,
            source: GoalSource::Current,
            label: GoalLabel::CurrentGoal,
        };

        let over = summarize_single_date(day, &[GraphDataPoint::new(day, 2300.0, "Lunch")], Some(goal));
        assert_eq!(over.difference, Some(300.0));
        assert_eq!(over.balance.unwrap().label(), "OVER");
        assert_eq!(over.balance.unwrap().tone(), Tone::Error);

        let exact = summarize_single_date(day, &[GraphDataPoint::new(day, 2000.0, "Lunch")], Some(goal));
        assert_eq!(exact.balance, Some(GoalBalance::Over));
        assert_eq!(exact.difference, Some(0.0));
    }

    #[test]
    fn test_single_date_without_goal() {
        let day = d(2026, 10, 12);
        let summary = summarize_single_date(day, &[GraphDataPoint::new(day, 900.0, "Lunch")], None);
        assert_eq!(summary.total, 900.0);
        assert!(summary.balance.is_none());
        assert!(summary.difference.is_none());
    }
}
