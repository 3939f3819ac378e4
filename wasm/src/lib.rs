//! Nutrition Tracker WASM Module
//!
//! WebAssembly bindings over the shared domain logic so the browser build
//! converts, filters and aggregates exactly like the native client.

use chrono::NaiveDate;
use nutrition_tracker_shared::formatters::{FEET_FORMATTER, INCHES_FORMATTER};
use nutrition_tracker_shared::progress::{self, DateWindow, RawLogEntry, TimeRange};
use nutrition_tracker_shared::{units, DecimalInputFormatter, InputFormatter};
use serde::Deserialize;
use wasm_bindgen::prelude::*;

/// Abbreviated chart/summary number, e.g. `1.5K` or `+200`
#[wasm_bindgen]
pub fn format_value(value: f64, show_sign: bool) -> String {
    progress::format_value(value, show_sign)
}

#[wasm_bindgen]
pub fn feet_inches_to_cm(feet: f64, inches: f64) -> f64 {
    units::feet_inches_to_cm(feet, inches)
}

/// Returns `[feet, inches]`
#[wasm_bindgen]
pub fn cm_to_feet_inches(cm: f64) -> Vec<f64> {
    let split = units::cm_to_feet_inches(cm);
    vec![split.feet as f64, split.inches]
}

#[wasm_bindgen]
pub fn lbs_to_kg(lbs: f64) -> f64 {
    units::lbs_to_kg(lbs)
}

#[wasm_bindgen]
pub fn kg_to_lbs(kg: f64) -> f64 {
    units::kg_to_lbs(kg)
}

/// Canonical meal key for a free-text meal label
#[wasm_bindgen]
pub fn normalize_meal_type(raw: &str) -> String {
    nutrition_tracker_shared::normalize_meal_type(raw)
        .key()
        .to_string()
}

#[wasm_bindgen]
pub fn filter_decimal_input(old_value: &str, new_value: &str, max_decimals: usize) -> String {
    DecimalInputFormatter::new(max_decimals).apply(old_value, new_value)
}

#[wasm_bindgen]
pub fn filter_feet_input(old_value: &str, new_value: &str) -> String {
    FEET_FORMATTER.apply(old_value, new_value)
}

#[wasm_bindgen]
pub fn filter_inches_input(old_value: &str, new_value: &str) -> String {
    INCHES_FORMATTER.apply(old_value, new_value)
}

#[derive(Deserialize)]
struct AggregateRequest {
    range: TimeRange,
    today: NaiveDate,
    #[serde(default)]
    tracking_start: Option<NaiveDate>,
    #[serde(deserialize_with = "progress::types::deserialize_entries")]
    entries: Vec<RawLogEntry>,
}

fn aggregate_json(request: &str) -> Result<String, String> {
    let request: AggregateRequest =
        serde_json::from_str(request).map_err(|e| format!("Invalid request: {}", e))?;
    let window = DateWindow::derive(request.range, request.today, request.tracking_start);
    let points = progress::aggregate(&request.entries, &window, request.range);
    serde_json::to_string(&points).map_err(|e| format!("Serialization failed: {}", e))
}

/// Bucket raw entries into chart points.
///
/// Takes `{range, today, tracking_start?, entries}` as JSON and returns the
/// point list as JSON.
#[wasm_bindgen]
pub fn aggregate_progress(request: &str) -> Result<String, JsValue> {
    aggregate_json(request).map_err(|e| JsValue::from_str(&e))
}
