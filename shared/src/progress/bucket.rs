//! Bucketing of raw log entries into chart series

use super::range::{month_start, next_month_start, DateWindow};
use super::types::{GraphDataPoint, RawLogEntry, TimeRange};
use crate::meals::MealType;
use chrono::{Duration, NaiveDate};
use std::collections::BTreeMap;

/// Per-day calorie sum and entry count
#[derive(Debug, Clone, Copy, Default)]
struct DayTotal {
    calories: f64,
    entries: u32,
}

fn daily_totals(entries: &[RawLogEntry], window: &DateWindow) -> BTreeMap<NaiveDate, DayTotal> {
    let mut totals: BTreeMap<NaiveDate, DayTotal> = BTreeMap::new();
    for entry in entries.iter().filter(|e| window.contains(e.date())) {
        let day = totals.entry(entry.date()).or_default();
        day.calories += entry.calories;
        day.entries += 1;
    }
    totals
}

fn sum_between(
    totals: &BTreeMap<NaiveDate, DayTotal>,
    start: NaiveDate,
    end: NaiveDate,
) -> (f64, u32) {
    totals
        .range(start..=end)
        .fold((0.0, 0), |(cal, n), (_, day)| (cal + day.calories, n + day.entries))
}

/// One point per calendar day, zero-filled
pub fn bucket_daily(entries: &[RawLogEntry], window: &DateWindow) -> Vec<GraphDataPoint> {
    let totals = daily_totals(entries, window);
    window
        .days()
        .map(|day| {
            let total = totals.get(&day).copied().unwrap_or_default();
            GraphDataPoint::new(day, total.calories, day.format("%a").to_string())
                .with_meta("entries", total.entries)
        })
        .collect()
}

/// Consecutive 7-day windows from the window start; the last may be short
pub fn bucket_weekly(entries: &[RawLogEntry], window: &DateWindow) -> Vec<GraphDataPoint> {
    let totals = daily_totals(entries, window);
    let mut points = Vec::new();
    let mut week_start = window.start;

    while week_start <= window.end {
        let week_end = (week_start + Duration::days(6)).min(window.end);
        let (calories, count) = sum_between(&totals, week_start, week_end);
        let label = format!(
            "{} - {}",
            week_start.format("%b %-d"),
            week_end.format("%b %-d")
        );
        points.push(
            GraphDataPoint::new(week_start, calories, label)
                .with_meta("start", week_start.to_string())
                .with_meta("end", week_end.to_string())
                .with_meta("entries", count),
        );
        week_start = week_end + Duration::days(1);
    }

    points
}

/// Calendar-month buckets; the first and last may be partial months
pub fn bucket_monthly(entries: &[RawLogEntry], window: &DateWindow) -> Vec<GraphDataPoint> {
    let totals = daily_totals(entries, window);
    let mut points = Vec::new();
    let mut cursor = month_start(window.start);

    while cursor <= window.end {
        let Some(next) = next_month_start(cursor) else {
            break;
        };
        let bucket_start = cursor.max(window.start);
        let bucket_end = (next - Duration::days(1)).min(window.end);
        let (calories, count) = sum_between(&totals, bucket_start, bucket_end);
        points.push(
            GraphDataPoint::new(bucket_start, calories, cursor.format("%b").to_string())
                .with_meta("month", cursor.format("%Y-%m").to_string())
                .with_meta("entries", count),
        );
        cursor = next;
    }

    points
}

/// Calories per meal category, in display order.
///
/// Meals with nothing logged are left out, but the result is never empty:
/// an all-zero day yields a single zero `Other` point so "nothing eaten" is
/// distinguishable from "nothing fetched".
pub fn meal_breakdown(entries: &[RawLogEntry], window: &DateWindow) -> Vec<GraphDataPoint> {
    let mut per_meal: BTreeMap<MealType, f64> = BTreeMap::new();
    for entry in entries.iter().filter(|e| window.contains(e.date())) {
        *per_meal.entry(entry.meal()).or_insert(0.0) += entry.calories;
    }

    let mut points: Vec<GraphDataPoint> = MealType::ORDERED
        .iter()
        .filter_map(|meal| {
            let calories = per_meal.get(meal).copied().unwrap_or(0.0);
            (calories > 0.0).then(|| meal_point(window.start, *meal, calories))
        })
        .collect();

    if points.is_empty() {
        points.push(meal_point(window.start, MealType::Other, 0.0));
    }

    points
}

fn meal_point(date: NaiveDate, meal: MealType, calories: f64) -> GraphDataPoint {
    GraphDataPoint::new(date, calories, meal.display_name())
        .with_meta("meal_type", meal.key())
        .with_meta("calories", calories)
}

/// Pick the bucketing strategy for a range
pub fn aggregate(entries: &[RawLogEntry], window: &DateWindow, range: TimeRange) -> Vec<GraphDataPoint> {
    if window.is_empty() {
        return Vec::new();
    }
    match range {
        TimeRange::Daily => bucket_daily(entries, window),
        TimeRange::Weekly => bucket_weekly(entries, window),
        TimeRange::Monthly => bucket_monthly(entries, window),
        TimeRange::Custom { .. } => meal_breakdown(entries, window),
    }
}
