//! Onboarding wizard state machine
//!
//! Goals -> Physical -> Lifestyle -> Preferences -> Complete. A step is only
//! left forward when its form validates; going back never loses answers.

mod answers;
mod forms;

pub use answers::{OnboardingAnswers, ProfileUpdate};
pub use forms::{GoalsForm, LifestyleForm, PhysicalForm, PreferencesForm};

use crate::errors::OnboardingError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingStep {
    Goals,
    Physical,
    Lifestyle,
    Preferences,
    Complete,
}

impl OnboardingStep {
    pub fn next(&self) -> Self {
        match self {
            OnboardingStep::Goals => OnboardingStep::Physical,
            OnboardingStep::Physical => OnboardingStep::Lifestyle,
            OnboardingStep::Lifestyle => OnboardingStep::Preferences,
            OnboardingStep::Preferences | OnboardingStep::Complete => OnboardingStep::Complete,
        }
    }

    /// Previous step. `Goals` and `Complete` stay where they are.
    pub fn previous(&self) -> Self {
        match self {
            OnboardingStep::Goals | OnboardingStep::Physical => OnboardingStep::Goals,
            OnboardingStep::Lifestyle => OnboardingStep::Physical,
            OnboardingStep::Preferences => OnboardingStep::Lifestyle,
            OnboardingStep::Complete => OnboardingStep::Complete,
        }
    }

    /// Zero-based position for progress indicators
    pub fn index(&self) -> usize {
        match self {
            OnboardingStep::Goals => 0,
            OnboardingStep::Physical => 1,
            OnboardingStep::Lifestyle => 2,
            OnboardingStep::Preferences => 3,
            OnboardingStep::Complete => 4,
        }
    }
}

/// A validated-on-submit form for one step
#[derive(Debug, Clone, PartialEq)]
pub enum StepSubmission {
    Goals(GoalsForm),
    Physical(PhysicalForm),
    Lifestyle(LifestyleForm),
    Preferences(PreferencesForm),
}

impl StepSubmission {
    pub fn step(&self) -> OnboardingStep {
        match self {
            StepSubmission::Goals(_) => OnboardingStep::Goals,
            StepSubmission::Physical(_) => OnboardingStep::Physical,
            StepSubmission::Lifestyle(_) => OnboardingStep::Lifestyle,
            StepSubmission::Preferences(_) => OnboardingStep::Preferences,
        }
    }
}

/// Current step plus everything answered so far
#[derive(Debug, Clone, PartialEq)]
pub struct OnboardingFlow {
    step: OnboardingStep,
    answers: OnboardingAnswers,
}

impl Default for OnboardingFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl OnboardingFlow {
    pub fn new() -> Self {
        Self {
            step: OnboardingStep::Goals,
            answers: OnboardingAnswers::default(),
        }
    }

    /// Resume from previously saved answers at the first step
    pub fn with_answers(answers: OnboardingAnswers) -> Self {
        Self {
            step: OnboardingStep::Goals,
            answers,
        }
    }

    pub fn step(&self) -> OnboardingStep {
        self.step
    }

    pub fn answers(&self) -> &OnboardingAnswers {
        &self.answers
    }

    pub fn is_complete(&self) -> bool {
        self.step == OnboardingStep::Complete
    }

    pub fn goals_form(&self) -> GoalsForm {
        GoalsForm::from_answers(&self.answers)
    }

    pub fn physical_form(&self) -> PhysicalForm {
        PhysicalForm::from_answers(&self.answers)
    }

    pub fn lifestyle_form(&self) -> LifestyleForm {
        LifestyleForm::from_answers(&self.answers)
    }

    pub fn preferences_form(&self) -> PreferencesForm {
        PreferencesForm::from_answers(&self.answers)
    }

    /// Validate the form for the current step, merge it and advance.
    ///
    /// On error the step and the stored answers are left untouched.
    pub fn submit(&mut self, submission: StepSubmission) -> Result<OnboardingStep, OnboardingError> {
        if self.is_complete() {
            return Err(OnboardingError::AlreadyComplete);
        }
        if submission.step() != self.step {
            return Err(OnboardingError::StepMismatch {
                expected: self.step,
                got: submission.step(),
            });
        }

        match submission {
            StepSubmission::Goals(form) => {
                check(form.errors())?;
                let goal_changed = self.answers.goal != form.goal();
                self.answers.gender = form.gender();
                self.answers.goal = form.goal();
                let needs_target = self
                    .answers
                    .goal
                    .map(|g| g.requires_target_weight())
                    .unwrap_or(false);
                if goal_changed && !needs_target {
                    self.answers.target_weight_kg = None;
                }
            }
            StepSubmission::Physical(mut form) => {
                // validate against the committed goal, not a stale copy
                form.goal = self.answers.goal;
                check(form.errors())?;
                self.answers.height_cm = form.height_cm();
                self.answers.weight_kg = form.weight_kg();
                self.answers.target_weight_kg = if form.requires_target_weight() {
                    form.target_weight_kg()
                } else {
                    None
                };
            }
            StepSubmission::Lifestyle(form) => {
                check(form.errors())?;
                self.answers.activity_level = form.activity_level;
                self.answers.mood = form.mood;
                self.answers.energy_level = form.energy_level;
            }
            StepSubmission::Preferences(form) => {
                check(form.errors())?;
                self.answers.dietary_preferences = form.dietary_preferences;
                self.answers.meals_per_day = form.meals_per_day;
            }
        }

        self.step = self.step.next();
        Ok(self.step)
    }

    /// Step back one screen, keeping all answers
    pub fn back(&mut self) -> OnboardingStep {
        self.step = self.step.previous();
        self.step
    }

    /// Payload for the best-effort save after the physical step
    pub fn partial_profile(&self) -> ProfileUpdate {
        ProfileUpdate::partial(&self.answers)
    }

    /// Full payload, only available once every step has been submitted
    pub fn completed_profile(&self) -> Option<ProfileUpdate> {
        self.is_complete()
            .then(|| ProfileUpdate::complete(&self.answers))
    }
}

fn check(errors: Vec<crate::validation::ValidationError>) -> Result<(), OnboardingError> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(OnboardingError::Invalid(errors))
    }
}
