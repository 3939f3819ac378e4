//! Unit conversion for body measurements
//!
//! Height and weight are always held in metric (cm, kg). Imperial values only
//! exist as projections computed on demand for display, so the unit toggle on
//! a form can never drift away from the stored value.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kilograms per pound
pub const KG_PER_LB: f64 = 0.453592;

/// Centimeters per inch
pub const CM_PER_INCH: f64 = 2.54;

/// Convert feet and inches to centimeters
pub fn feet_inches_to_cm(feet: f64, inches: f64) -> f64 {
    (feet * 12.0 + inches) * CM_PER_INCH
}

/// Convert centimeters to whole feet plus remaining inches
pub fn cm_to_feet_inches(cm: f64) -> FeetInchesHeight {
    FeetInchesHeight::from_cm(cm)
}

/// Convert pounds to kilograms
pub fn lbs_to_kg(lbs: f64) -> f64 {
    lbs * KG_PER_LB
}

/// Convert kilograms to pounds
pub fn kg_to_lbs(kg: f64) -> f64 {
    kg / KG_PER_LB
}

/// Round to two decimal places, the precision shown in unit fields
pub fn round_display(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ============================================================================
// Weight Units
// ============================================================================

/// Weight unit toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    #[default]
    Kg,
    Lbs,
}

impl WeightUnit {
    /// Convert from this unit to kilograms
    pub fn to_kg(&self, value: f64) -> f64 {
        match self {
            WeightUnit::Kg => value,
            WeightUnit::Lbs => lbs_to_kg(value),
        }
    }

    /// Convert from kilograms to this unit
    pub fn from_kg(&self, kg: f64) -> f64 {
        match self {
            WeightUnit::Kg => kg,
            WeightUnit::Lbs => kg_to_lbs(kg),
        }
    }

    /// Get the unit abbreviation
    pub fn abbreviation(&self) -> &'static str {
        match self {
            WeightUnit::Kg => "kg",
            WeightUnit::Lbs => "lbs",
        }
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

impl std::str::FromStr for WeightUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "kg" | "kilogram" | "kilograms" => Ok(WeightUnit::Kg),
            "lbs" | "lb" | "pound" | "pounds" => Ok(WeightUnit::Lbs),
            _ => Err(format!("Unknown weight unit: {}", s)),
        }
    }
}

// ============================================================================
// Height Units
// ============================================================================

/// Height unit toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum HeightUnit {
    #[default]
    Cm,
    FeetInches,
}

impl HeightUnit {
    /// Get the unit abbreviation
    pub fn abbreviation(&self) -> &'static str {
        match self {
            HeightUnit::Cm => "cm",
            HeightUnit::FeetInches => "ft/in",
        }
    }
}

impl fmt::Display for HeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

impl std::str::FromStr for HeightUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cm" | "centimeter" | "centimeters" => Ok(HeightUnit::Cm),
            "ft" | "feet" | "ft/in" | "feet/inches" => Ok(HeightUnit::FeetInches),
            _ => Err(format!("Unknown height unit: {}", s)),
        }
    }
}

// ============================================================================
// Feet/Inches Helper
// ============================================================================

/// Height split into whole feet and fractional inches
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeetInchesHeight {
    pub feet: i32,
    pub inches: f64,
}

impl FeetInchesHeight {
    /// Create from total inches
    pub fn from_total_inches(total_inches: f64) -> Self {
        let feet = (total_inches / 12.0).floor() as i32;
        let inches = total_inches - feet as f64 * 12.0;
        Self { feet, inches }
    }

    /// Convert to total inches
    pub fn to_total_inches(&self) -> f64 {
        (self.feet as f64 * 12.0) + self.inches
    }

    /// Create from centimeters
    pub fn from_cm(cm: f64) -> Self {
        Self::from_total_inches(cm / CM_PER_INCH)
    }

    /// Convert to centimeters
    pub fn to_cm(&self) -> f64 {
        feet_inches_to_cm(self.feet as f64, self.inches)
    }
}

impl fmt::Display for FeetInchesHeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}'{:.0}\"", self.feet, self.inches)
    }
}

// ============================================================================
// Display Projections
// ============================================================================

/// Height as shown in a form field for the selected unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "unit", rename_all = "snake_case")]
pub enum DisplayHeight {
    Cm { value: f64 },
    FeetInches { feet: i32, inches: f64 },
}

/// Weight as shown in a form field for the selected unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DisplayWeight {
    pub value: f64,
    pub unit: WeightUnit,
}

/// Project a metric height into the display unit
pub fn project_height(cm: f64, unit: HeightUnit) -> DisplayHeight {
    match unit {
        HeightUnit::Cm => DisplayHeight::Cm {
            value: round_display(cm),
        },
        HeightUnit::FeetInches => {
            let split = cm_to_feet_inches(cm);
            DisplayHeight::FeetInches {
                feet: split.feet,
                inches: round_display(split.inches),
            }
        }
    }
}

/// Project a metric weight into the display unit
pub fn project_weight(kg: f64, unit: WeightUnit) -> DisplayWeight {
    DisplayWeight {
        value: round_display(unit.from_kg(kg)),
        unit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // =========================================================================
    // Weight Unit Tests
    // =========================================================================

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: Weight conversion round-trip preserves value
        #[test]
        fn prop_weight_roundtrip_kg(kg in 20.0f64..300.0) {
            let back = kg_to_lbs(lbs_to_kg(kg));
            prop_assert!((kg - back).abs() < 0.0001,
                "Round-trip failed: {} -> {}", kg, back);
        }

        #[test]
        fn prop_weight_roundtrip_lbs(lbs in 44.0f64..661.0) {
            let kg = WeightUnit::Lbs.to_kg(lbs);
            let back_to_lbs = WeightUnit::Lbs.from_kg(kg);
            prop_assert!((lbs - back_to_lbs).abs() < 0.0001,
                "Round-trip failed: {} -> {} -> {}", lbs, kg, back_to_lbs);
        }

        #[test]
        fn prop_kg_identity(kg in 20.0f64..300.0) {
            prop_assert_eq!(WeightUnit::Kg.to_kg(kg), kg);
            prop_assert_eq!(WeightUnit::Kg.from_kg(kg), kg);
        }
    }

    #[test]
    fn test_known_weight_conversions() {
        // 1 kg = 2.20462 lbs
        assert!((kg_to_lbs(1.0) - 2.20462).abs() < 0.001);

        // 100 lbs = 45.3592 kg
        assert!((lbs_to_kg(100.0) - 45.3592).abs() < 0.001);
    }

    // =========================================================================
    // Height Tests
    // =========================================================================

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// Property: cm -> ft/in -> cm stays within 0.1 cm
        #[test]
        fn prop_height_roundtrip_cm(cm in 50.0f64..=250.0) {
            let split = cm_to_feet_inches(cm);
            let back = feet_inches_to_cm(split.feet as f64, split.inches);
            prop_assert!((cm - back).abs() < 0.1,
                "Round-trip failed: {} -> {:?} -> {}", cm, split, back);
        }

        /// Property: ft/in -> cm -> ft/in recovers the input at display precision
        #[test]
        fn prop_feet_inches_roundtrip(feet in 1i32..8, inches in 0.0f64..11.99) {
            let cm = feet_inches_to_cm(feet as f64, inches);
            let back = cm_to_feet_inches(cm);
            let total_in = feet as f64 * 12.0 + inches;
            prop_assert!((back.to_total_inches() - total_in).abs() < 0.01);
            prop_assert!(back.inches >= 0.0 && back.inches < 12.0);
        }
    }

    #[test]
    fn test_feet_inches_conversion() {
        // 5'10" = 70 inches = 177.8 cm
        let cm = feet_inches_to_cm(5.0, 10.0);
        assert!((cm - 177.8).abs() < 0.001);

        let back = cm_to_feet_inches(cm);
        assert_eq!(back.feet, 5);
        assert!((back.inches - 10.0).abs() < 0.01);
    }

    #[test]
    fn test_feet_inches_display() {
        let height = FeetInchesHeight { feet: 6, inches: 2.0 };
        assert_eq!(format!("{}", height), "6'2\"");
    }

    #[test]
    fn test_project_height_follows_toggle() {
        let cm = feet_inches_to_cm(5.0, 10.0);
        assert_eq!(project_height(cm, HeightUnit::Cm), DisplayHeight::Cm { value: 177.8 });
        assert_eq!(
            project_height(cm, HeightUnit::FeetInches),
            DisplayHeight::FeetInches { feet: 5, inches: 10.0 }
        );
    }

    #[test]
    fn test_project_weight_rounds_to_two_places() {
        let shown = project_weight(80.0, WeightUnit::Lbs);
        assert_eq!(shown.unit, WeightUnit::Lbs);
        assert_eq!(shown.value, 176.37);
        assert_eq!(project_weight(80.0, WeightUnit::Kg).value, 80.0);
    }

    // =========================================================================
    // String Parsing Tests
    // =========================================================================

    #[test]
    fn test_unit_parsing() {
        assert_eq!("kg".parse::<WeightUnit>().unwrap(), WeightUnit::Kg);
        assert_eq!("pounds".parse::<WeightUnit>().unwrap(), WeightUnit::Lbs);
        assert_eq!("ft".parse::<HeightUnit>().unwrap(), HeightUnit::FeetInches);
        assert!("stone".parse::<WeightUnit>().is_err());
    }
}
