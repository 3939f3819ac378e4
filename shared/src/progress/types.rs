//! Progress data types

use crate::meals::{normalize_meal_type, MealType};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// One logged nutrition or exercise event as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawLogEntry {
    /// Local wall-clock time of the entry
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub timestamp: NaiveDateTime,
    #[serde(default, deserialize_with = "deserialize_calories")]
    pub calories: f64,
    #[serde(default, alias = "mealType")]
    pub meal_type: Option<String>,
}

impl RawLogEntry {
    pub fn new(timestamp: NaiveDateTime, calories: f64, meal_type: Option<&str>) -> Self {
        Self {
            timestamp,
            calories,
            meal_type: meal_type.map(str::to_string),
        }
    }

    /// Calendar day the entry belongs to
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    /// Normalized meal category
    pub fn meal(&self) -> MealType {
        normalize_meal_type(self.meal_type.as_deref().unwrap_or_default())
    }
}

/// Accepts RFC 3339 timestamps (the offset's local time is kept), naive
/// ISO-8601 date-times, and bare dates.
fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {}", raw)))
}

/// Parse a backend timestamp string
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return Some(with_offset.naive_local());
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, pattern) {
            return Some(naive);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CaloriesField {
    Number(f64),
    Text(String),
    Other(#[allow(dead_code)] serde::de::IgnoredAny),
}

/// Missing, null, non-numeric or unparseable calories count as zero
fn deserialize_calories<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<CaloriesField>::deserialize(deserializer)?;
    Ok(match value {
        Some(CaloriesField::Number(n)) if n.is_finite() => n,
        Some(CaloriesField::Text(s)) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    })
}

/// Raw progress payload: `{ calories: [...], exercise: [...] }`
///
/// Entries that do not parse are dropped one by one; the rest of the list
/// is kept.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawProgress {
    #[serde(default, deserialize_with = "deserialize_entries")]
    pub calories: Vec<RawLogEntry>,
    #[serde(default, deserialize_with = "deserialize_entries")]
    pub exercise: Vec<RawLogEntry>,
}

/// Entry list where malformed entries are dropped instead of failing the list
pub fn deserialize_entries<'de, D>(deserializer: D) -> Result<Vec<RawLogEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Vec<serde_json::Value>>::deserialize(deserializer)?.unwrap_or_default();
    let total = raw.len();
    let entries: Vec<RawLogEntry> = raw
        .into_iter()
        .filter_map(|value| serde_json::from_value(value).ok())
        .collect();

    if entries.len() < total {
        tracing::warn!(
            skipped = total - entries.len(),
            kept = entries.len(),
            "Dropped malformed progress entries"
        );
    }
    Ok(entries)
}

impl RawProgress {
    pub fn is_empty(&self) -> bool {
        self.calories.is_empty() && self.exercise.is_empty()
    }
}

/// One bucketed value ready for charting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphDataPoint {
    /// Representative (first) date of the bucket
    pub date: NaiveDate,
    pub value: f64,
    pub label: String,
    #[serde(default)]
    pub metadata: BTreeMap<String, serde_json::Value>,
}

impl GraphDataPoint {
    pub fn new(date: NaiveDate, value: f64, label: impl Into<String>) -> Self {
        Self {
            date,
            value,
            label: label.into(),
            metadata: BTreeMap::new(),
        }
    }

    pub fn with_meta(mut self, key: &str, value: impl Into<serde_json::Value>) -> Self {
        self.metadata.insert(key.to_string(), value.into());
        self
    }
}

/// Requested aggregation granularity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TimeRange {
    Daily,
    Weekly,
    Monthly,
    /// Explicit bounds; `start == end` is a single-day drill-down
    Custom { start: NaiveDate, end: NaiveDate },
}

impl TimeRange {
    /// Drill-down into one day
    pub fn single_day(date: NaiveDate) -> Self {
        TimeRange::Custom {
            start: date,
            end: date,
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, TimeRange::Custom { .. })
    }

    /// The date of a single-day drill-down
    pub fn single_date(&self) -> Option<NaiveDate> {
        match self {
            TimeRange::Custom { start, end } if start == end => Some(*start),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeRange::Daily => "daily",
            TimeRange::Weekly => "weekly",
            TimeRange::Monthly => "monthly",
            TimeRange::Custom { .. } => "custom",
        }
    }
}

/// Summary statistics for one metric over a bucketed series
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MetricSummary {
    pub current: f64,
    pub average: f64,
    pub change: f64,
    /// Goal used for `change`, present only when it passed the sanity check
    pub goal: Option<f64>,
}

/// Aggregate result for a daily, weekly or monthly range
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProgressData {
    pub calories: MetricSummary,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exercise: Option<MetricSummary>,
    /// Goals for secondary metrics, keyed by metric name
    #[serde(default)]
    pub goals: BTreeMap<String, f64>,
}
