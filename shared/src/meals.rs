//! Meal categories
//!
//! Logged entries carry whatever meal label the logging screen or an import
//! produced. Everything downstream works on the fixed five-way taxonomy below.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed meal taxonomy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snacks,
    Other,
}

impl MealType {
    /// Display order used for meal breakdowns
    pub const ORDERED: [MealType; 5] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snacks,
        MealType::Other,
    ];

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            MealType::Breakfast => "Breakfast",
            MealType::Lunch => "Lunch",
            MealType::Dinner => "Dinner",
            MealType::Snacks => "Snacks",
            MealType::Other => "Other",
        }
    }

    /// Wire key used in graph metadata
    pub fn key(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snacks => "snacks",
            MealType::Other => "other",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Map a free-text meal label onto the fixed taxonomy.
///
/// Substring checks run in a fixed priority order, so a label containing
/// both "lunch" and "snack" is a lunch.
pub fn normalize_meal_type(raw: &str) -> MealType {
    let label = raw.trim().to_lowercase();

    if label.is_empty() || label == "unspecified" || label == "unknown" {
        return MealType::Other;
    }

    if label.contains("breakfast") {
        MealType::Breakfast
    } else if label.contains("lunch") {
        MealType::Lunch
    } else if label.contains("dinner") || label.contains("supper") {
        MealType::Dinner
    } else if label.contains("snack") {
        MealType::Snacks
    } else {
        MealType::Other
    }
}
