//! Profile vocabulary collected during onboarding

use serde::{Deserialize, Serialize};
use std::fmt;

/// Gender as selected on the first onboarding screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }
}

impl std::str::FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            "other" | "non_binary" | "nonbinary" => Ok(Gender::Other),
            _ => Err(format!("Unknown gender: {}", s)),
        }
    }
}

/// Primary goal the user is working towards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalType {
    LoseWeight,
    MaintainWeight,
    GainWeight,
    BuildMuscle,
}

impl GoalType {
    /// Whether a target weight must be collected for this goal
    pub fn requires_target_weight(&self) -> bool {
        matches!(self, GoalType::LoseWeight)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GoalType::LoseWeight => "lose_weight",
            GoalType::MaintainWeight => "maintain_weight",
            GoalType::GainWeight => "gain_weight",
            GoalType::BuildMuscle => "build_muscle",
        }
    }
}

impl fmt::Display for GoalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Activity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    #[default]
    LightlyActive,
    /// Moderate exercise 3-5 days/week
    ModeratelyActive,
    /// Hard exercise 6-7 days/week
    VeryActive,
    /// Very hard exercise, physical job
    ExtraActive,
}

impl ActivityLevel {
    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Little or no exercise",
            ActivityLevel::LightlyActive => "Light exercise 1-3 days/week",
            ActivityLevel::ModeratelyActive => "Moderate exercise 3-5 days/week",
            ActivityLevel::VeryActive => "Hard exercise 6-7 days/week",
            ActivityLevel::ExtraActive => "Very hard exercise or physical job",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Great,
    Good,
    Okay,
    Low,
    Stressed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnergyLevel {
    Low,
    Moderate,
    High,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_wire_names() {
        assert_eq!(
            serde_json::to_string(&GoalType::LoseWeight).unwrap(),
            "\"lose_weight\""
        );
        let goal: GoalType = serde_json::from_str("\"build_muscle\"").unwrap();
        assert_eq!(goal, GoalType::BuildMuscle);
    }

    #[test]
    fn test_only_weight_loss_needs_target() {
        assert!(GoalType::LoseWeight.requires_target_weight());
        assert!(!GoalType::GainWeight.requires_target_weight());
        assert!(!GoalType::MaintainWeight.requires_target_weight());
    }

    #[test]
    fn test_gender_parsing() {
        assert_eq!("Female".parse::<Gender>().unwrap(), Gender::Female);
        assert_eq!(" m ".parse::<Gender>().unwrap(), Gender::Male);
        assert!("robot".parse::<Gender>().is_err());
    }
}
