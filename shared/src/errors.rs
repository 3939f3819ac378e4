//! Error types for the shared domain logic

use crate::onboarding::OnboardingStep;
use crate::validation::ValidationError;
use thiserror::Error;

/// Onboarding flow errors
///
/// None of these are fatal; each maps to a blocking prompt or inline field
/// errors and the user can correct the input and try again.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OnboardingError {
    #[error("Please select your gender before choosing a goal")]
    GenderRequired,

    #[error("Expected input for the {expected:?} step, got {got:?}")]
    StepMismatch {
        expected: OnboardingStep,
        got: OnboardingStep,
    },

    #[error("Onboarding is already complete")]
    AlreadyComplete,

    #[error("Onboarding is not finished, still on the {0:?} step")]
    NotComplete(OnboardingStep),

    #[error("{} field(s) need attention", .0.len())]
    Invalid(Vec<ValidationError>),
}

impl OnboardingError {
    /// Inline field errors, empty for non-field failures
    pub fn field_errors(&self) -> &[ValidationError] {
        match self {
            OnboardingError::Invalid(errors) => errors,
            _ => &[],
        }
    }
}
