//! Progress data aggregation
//!
//! Turns the flat list of logged entries for a query window into chart
//! buckets and the summary figures shown above the chart.

pub mod bucket;
pub mod format;
pub mod range;
pub mod summary;
pub mod types;

pub use bucket::{aggregate, bucket_daily, bucket_monthly, bucket_weekly, meal_breakdown};
pub use format::format_value;
pub use range::DateWindow;
pub use summary::{
    resolve_goal, summarize_progress, summarize_series, summarize_single_date, GoalBalance,
    GoalLabel, GoalPolicy, GoalSource, ResolvedGoal, SingleDateSummary,
    DEFAULT_SANE_GOAL_CEILING,
};
pub use types::{GraphDataPoint, MetricSummary, ProgressData, RawLogEntry, RawProgress, TimeRange};
