//! Input validation functions
//!
//! Field-level checks used by the onboarding forms. Each returns the inline
//! error text to show under the field.

use crate::units::{round_display, WeightUnit};
use serde::Serialize;

/// Tolerance applied to range bounds after a unit round trip
const BOUND_EPSILON: f64 = 1e-6;

/// Valid height range in cm
pub const HEIGHT_RANGE_CM: (f64, f64) = (50.0, 250.0);

/// Valid weight range in kg. The floor sits just under 44 lbs (19.958 kg)
/// so the pound minimum passes whichever unit is showing.
pub const WEIGHT_RANGE_KG: (f64, f64) = (19.95, 300.0);

fn ensure_finite(value: f64, what: &str) -> Result<(), String> {
    if value.is_nan() || value.is_infinite() {
        return Err(format!("{} must be a valid number", what));
    }
    Ok(())
}

/// Validate height value (in cm)
pub fn validate_height_cm(height_cm: f64) -> Result<(), String> {
    ensure_finite(height_cm, "Height")?;
    let (min, max) = HEIGHT_RANGE_CM;
    if height_cm < min - BOUND_EPSILON {
        return Err(format!("Height must be at least {} cm", min));
    }
    if height_cm > max + BOUND_EPSILON {
        return Err(format!("Height must be at most {} cm", max));
    }
    Ok(())
}

/// Validate a weight (in kg). `unit` only picks the unit the message uses.
pub fn validate_weight(weight_kg: f64, unit: WeightUnit) -> Result<(), String> {
    ensure_finite(weight_kg, "Weight")?;
    let (min, max) = WEIGHT_RANGE_KG;
    if weight_kg < min - BOUND_EPSILON {
        let shown = round_display(unit.from_kg(min));
        return Err(format!("Weight must be at least {} {}", shown, unit));
    }
    if weight_kg > max + BOUND_EPSILON {
        let shown = round_display(unit.from_kg(max));
        return Err(format!("Weight must be at most {} {}", shown, unit));
    }
    Ok(())
}

/// Validate a target weight relative to the current weight (both kg)
pub fn validate_target_weight(target_kg: f64, current_kg: f64) -> Result<(), String> {
    if target_kg >= current_kg {
        return Err("Target must be less than current weight".to_string());
    }
    Ok(())
}

/// Validate number of meals per day
pub fn validate_meals_per_day(meals: u8) -> Result<(), String> {
    if !(1..=8).contains(&meals) {
        return Err("Meals per day must be between 1 and 8".to_string());
    }
    Ok(())
}

// ============================================================================
// User-Friendly Field Labels
// ============================================================================

/// Map technical field names to user-friendly display labels
pub fn get_field_display_label(field_name: &str) -> &str {
    match field_name {
        "gender" => "Gender",
        "goal" => "Goal",
        "height" | "height_cm" => "Height",
        "weight" | "weight_kg" => "Current Weight",
        "target_weight" | "target_weight_kg" => "Target Weight",
        "activity_level" => "Activity Level",
        "mood" => "Mood",
        "energy_level" => "Energy Level",
        "meals_per_day" => "Meals per Day",
        _ => field_name,
    }
}

/// Validation error with field context
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub display_label: String,
}

impl ValidationError {
    pub fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
            display_label: get_field_display_label(field).to_string(),
        }
    }

    /// Format as user-friendly error message
    pub fn user_message(&self) -> String {
        format!("{}: {}", self.display_label, self.message)
    }
}
