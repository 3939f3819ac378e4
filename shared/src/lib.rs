//! Nutrition Tracker Shared Library
//!
//! Pure domain logic used by the client and the WASM bindings: unit
//! conversion, input filtering, meal classification, progress aggregation,
//! streak selection, the onboarding state machine and theming.

pub mod errors;
pub mod formatters;
pub mod layout;
pub mod meals;
pub mod onboarding;
pub mod profile;
pub mod progress;
pub mod streaks;
pub mod theme;
pub mod units;
pub mod validation;

// Re-export commonly used items
pub use errors::*;
pub use formatters::{BoundedIntegerFormatter, DecimalInputFormatter, InputFormatter};
pub use layout::{responsive_value, Breakpoint, Responsive};
pub use meals::{normalize_meal_type, MealType};
pub use onboarding::{
    GoalsForm, LifestyleForm, OnboardingAnswers, OnboardingFlow, OnboardingStep, PhysicalForm,
    PreferencesForm, ProfileUpdate, StepSubmission,
};
pub use profile::*;
pub use streaks::{select_streak, StreakData};
pub use theme::{Theme, Tone};
pub use units::*;
pub use validation::ValidationError;
