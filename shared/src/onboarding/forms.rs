//! Per-step onboarding forms
//!
//! Each form is the private state of one wizard screen. Forms expose their
//! inline errors and whether the advance action is enabled; the flow
//! controller re-checks both before accepting a submission.

use super::answers::OnboardingAnswers;
use crate::errors::OnboardingError;
use crate::profile::{ActivityLevel, EnergyLevel, Gender, GoalType, Mood};
use crate::units::{
    feet_inches_to_cm, project_height, project_weight, DisplayHeight, DisplayWeight, HeightUnit,
    WeightUnit,
};
use crate::validation::{
    validate_height_cm, validate_meals_per_day, validate_target_weight, validate_weight,
    ValidationError,
};

// ============================================================================
// Goals
// ============================================================================

/// Gender and goal selection
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GoalsForm {
    gender: Option<Gender>,
    goal: Option<GoalType>,
}

impl GoalsForm {
    pub fn from_answers(answers: &OnboardingAnswers) -> Self {
        Self {
            gender: answers.gender,
            goal: answers.goal,
        }
    }

    pub fn gender(&self) -> Option<Gender> {
        self.gender
    }

    pub fn goal(&self) -> Option<GoalType> {
        self.goal
    }

    pub fn select_gender(&mut self, gender: Gender) {
        self.gender = Some(gender);
    }

    /// Choosing a goal is blocked until a gender has been picked
    pub fn select_goal(&mut self, goal: GoalType) -> Result<(), OnboardingError> {
        if self.gender.is_none() {
            return Err(OnboardingError::GenderRequired);
        }
        self.goal = Some(goal);
        Ok(())
    }

    pub fn errors(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        if self.gender.is_none() {
            errors.push(ValidationError::new("gender", "Please select your gender"));
        }
        if self.goal.is_none() {
            errors.push(ValidationError::new("goal", "Please select a goal"));
        }
        errors
    }

    pub fn can_advance(&self) -> bool {
        self.errors().is_empty()
    }
}

// ============================================================================
// Physical
// ============================================================================

/// Height, weight and (for weight loss) target weight.
///
/// Values are stored in cm and kg. The unit toggles only change how values
/// are entered and projected for display.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhysicalForm {
    pub(crate) goal: Option<GoalType>,
    height_cm: Option<f64>,
    weight_kg: Option<f64>,
    target_weight_kg: Option<f64>,
    height_unit: HeightUnit,
    weight_unit: WeightUnit,
}

impl PhysicalForm {
    pub fn from_answers(answers: &OnboardingAnswers) -> Self {
        Self {
            goal: answers.goal,
            height_cm: answers.height_cm,
            weight_kg: answers.weight_kg,
            target_weight_kg: answers.target_weight_kg,
            ..Self::default()
        }
    }

    pub fn requires_target_weight(&self) -> bool {
        self.goal.map(|g| g.requires_target_weight()).unwrap_or(false)
    }

    pub fn height_unit(&self) -> HeightUnit {
        self.height_unit
    }

    pub fn weight_unit(&self) -> WeightUnit {
        self.weight_unit
    }

    pub fn set_height_unit(&mut self, unit: HeightUnit) {
        self.height_unit = unit;
    }

    pub fn set_weight_unit(&mut self, unit: WeightUnit) {
        self.weight_unit = unit;
    }

    pub fn set_height_cm(&mut self, cm: Option<f64>) {
        self.height_cm = cm;
    }

    pub fn set_height_feet_inches(&mut self, feet: f64, inches: f64) {
        self.height_cm = Some(feet_inches_to_cm(feet, inches));
    }

    /// Set current weight in the selected weight unit
    pub fn set_weight(&mut self, value: Option<f64>) {
        self.weight_kg = value.map(|v| self.weight_unit.to_kg(v));
    }

    /// Set target weight in the selected weight unit
    pub fn set_target_weight(&mut self, value: Option<f64>) {
        self.target_weight_kg = value.map(|v| self.weight_unit.to_kg(v));
    }

    pub fn height_cm(&self) -> Option<f64> {
        self.height_cm
    }

    pub fn weight_kg(&self) -> Option<f64> {
        self.weight_kg
    }

    pub fn target_weight_kg(&self) -> Option<f64> {
        self.target_weight_kg
    }

    pub fn display_height(&self) -> Option<DisplayHeight> {
        self.height_cm.map(|cm| project_height(cm, self.height_unit))
    }

    pub fn display_weight(&self) -> Option<DisplayWeight> {
        self.weight_kg.map(|kg| project_weight(kg, self.weight_unit))
    }

    pub fn display_target_weight(&self) -> Option<DisplayWeight> {
        self.target_weight_kg
            .map(|kg| project_weight(kg, self.weight_unit))
    }

    pub fn errors(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        match self.height_cm {
            None => errors.push(ValidationError::new("height_cm", "Height is required")),
            Some(cm) => {
                if let Err(msg) = validate_height_cm(cm) {
                    errors.push(ValidationError::new("height_cm", &msg));
                }
            }
        }

        match self.weight_kg {
            None => errors.push(ValidationError::new("weight_kg", "Weight is required")),
            Some(kg) => {
                if let Err(msg) = validate_weight(kg, self.weight_unit) {
                    errors.push(ValidationError::new("weight_kg", &msg));
                }
            }
        }

        if self.requires_target_weight() {
            match self.target_weight_kg {
                None => errors.push(ValidationError::new(
                    "target_weight_kg",
                    "Target weight is required",
                )),
                Some(target) => {
                    let check = validate_weight(target, self.weight_unit).and_then(|_| {
                        match self.weight_kg {
                            Some(current) => validate_target_weight(target, current),
                            None => Ok(()),
                        }
                    });
                    if let Err(msg) = check {
                        errors.push(ValidationError::new("target_weight_kg", &msg));
                    }
                }
            }
        }

        errors
    }

    pub fn can_advance(&self) -> bool {
        self.errors().is_empty()
    }
}

// ============================================================================
// Lifestyle
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LifestyleForm {
    pub activity_level: Option<ActivityLevel>,
    pub mood: Option<Mood>,
    pub energy_level: Option<EnergyLevel>,
}

impl LifestyleForm {
    pub fn from_answers(answers: &OnboardingAnswers) -> Self {
        Self {
            activity_level: answers.activity_level,
            mood: answers.mood,
            energy_level: answers.energy_level,
        }
    }

    pub fn errors(&self) -> Vec<ValidationError> {
        if self.activity_level.is_none() {
            vec![ValidationError::new(
                "activity_level",
                "Please select your activity level",
            )]
        } else {
            Vec::new()
        }
    }

    pub fn can_advance(&self) -> bool {
        self.errors().is_empty()
    }
}

// ============================================================================
// Preferences
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreferencesForm {
    pub dietary_preferences: Vec<String>,
    pub meals_per_day: Option<u8>,
}

impl PreferencesForm {
    pub fn from_answers(answers: &OnboardingAnswers) -> Self {
        Self {
            dietary_preferences: answers.dietary_preferences.clone(),
            meals_per_day: answers.meals_per_day,
        }
    }

    /// Add the preference if absent, remove it if present
    pub fn toggle_preference(&mut self, preference: &str) {
        let preference = preference.trim().to_lowercase();
        if preference.is_empty() {
            return;
        }
        if let Some(pos) = self.dietary_preferences.iter().position(|p| *p == preference) {
            self.dietary_preferences.remove(pos);
        } else {
            self.dietary_preferences.push(preference);
        }
    }

    pub fn errors(&self) -> Vec<ValidationError> {
        match self.meals_per_day.map(validate_meals_per_day) {
            Some(Err(msg)) => vec![ValidationError::new("meals_per_day", &msg)],
            _ => Vec::new(),
        }
    }

    pub fn can_advance(&self) -> bool {
        self.errors().is_empty()
    }
}
