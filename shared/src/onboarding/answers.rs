//! Accumulated onboarding answers and the profile payloads built from them

use crate::profile::{ActivityLevel, EnergyLevel, Gender, GoalType, Mood};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use validator::Validate;

/// Answers collected so far, keyed by field.
///
/// Unknown keys received from a persisted profile are kept in `extra` so a
/// later save does not drop them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OnboardingAnswers {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<GoalType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_weight_kg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_level: Option<ActivityLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood: Option<Mood>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub energy_level: Option<EnergyLevel>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dietary_preferences: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meals_per_day: Option<u8>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// Body sent to the profile update endpoint.
///
/// Range checks mirror the form validation so a payload that slipped past the
/// UI is still caught before it leaves the device. The weight floor sits a
/// little under 20 kg because 44 lbs converts to 19.96 kg.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sex: Option<Gender>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 50.0, max = 250.0))]
    pub height_cm: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 19.95, max = 300.0))]
    pub weight_kg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<GoalType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 19.95, max = 300.0))]
    pub target_weight_kg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_level: Option<ActivityLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood: Option<Mood>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub energy_level: Option<EnergyLevel>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dietary_preferences: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, max = 8))]
    pub meals_per_day: Option<u8>,
}

impl ProfileUpdate {
    /// Fields saved right after the physical step
    pub fn partial(answers: &OnboardingAnswers) -> Self {
        Self {
            sex: answers.gender,
            height_cm: answers.height_cm,
            weight_kg: answers.weight_kg,
            goal: answers.goal,
            ..Self::default()
        }
    }

    /// Everything collected by the wizard
    pub fn complete(answers: &OnboardingAnswers) -> Self {
        Self {
            target_weight_kg: answers.target_weight_kg,
            activity_level: answers.activity_level,
            mood: answers.mood,
            energy_level: answers.energy_level,
            dietary_preferences: answers.dietary_preferences.clone(),
            meals_per_day: answers.meals_per_day,
            ..Self::partial(answers)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers() -> OnboardingAnswers {
        OnboardingAnswers {
            goal: Some(GoalType::LoseWeight),
            gender: Some(Gender::Female),
            height_cm: Some(165.0),
            weight_kg: Some(70.0),
            target_weight_kg: Some(62.0),
            activity_level: Some(ActivityLevel::Sedentary),
            meals_per_day: Some(3),
            ..OnboardingAnswers::default()
        }
    }

    #[test]
    fn test_partial_payload_wire_names() {
        let json = serde_json::to_value(ProfileUpdate::partial(&answers())).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "sex": "female",
                "height_cm": 165.0,
                "weight_kg": 70.0,
                "goal": "lose_weight"
            })
        );
    }

    #[test]
    fn test_complete_payload_includes_later_steps() {
        let update = ProfileUpdate::complete(&answers());
        assert_eq!(update.target_weight_kg, Some(62.0));
        assert_eq!(update.activity_level, Some(ActivityLevel::Sedentary));
        assert!(update.validate().is_ok());
    }

    #[test]
    fn test_payload_range_checks() {
        let mut update = ProfileUpdate::partial(&answers());
        update.height_cm = Some(20.0);
        assert!(update.validate().is_err());

        update.height_cm = Some(165.0);
        update.meals_per_day = Some(0);
        assert!(update.validate().is_err());
    }

    #[test]
    fn test_unknown_keys_survive_round_trip() {
        let json = r#"{"gender":"male","height_cm":180.0,"favourite_colour":"green"}"#;
        let parsed: OnboardingAnswers = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.gender, Some(Gender::Male));
        assert_eq!(
            parsed.extra.get("favourite_colour"),
            Some(&serde_json::json!("green"))
        );

        let back = serde_json::to_value(&parsed).unwrap();
        assert_eq!(back["favourite_colour"], "green");
    }
}
