//! Onboarding persistence

use crate::api::TrackerApi;
use crate::error::ClientResult;
use nutrition_tracker_shared::{
    OnboardingError, OnboardingFlow, OnboardingStep, ProfileUpdate, StepSubmission,
};
use tracing::{info, warn};
use uuid::Uuid;

/// Onboarding service
pub struct OnboardingService;

impl OnboardingService {
    /// Submit the current step and advance the flow.
    ///
    /// Confirming the physical step also saves the basic profile so it
    /// survives an abandoned wizard. That save is best-effort: a failure is
    /// logged and the flow continues.
    pub async fn submit(
        api: &dyn TrackerApi,
        flow: &mut OnboardingFlow,
        user: Uuid,
        submission: StepSubmission,
    ) -> ClientResult<OnboardingStep> {
        let submitted = submission.step();
        let next = flow.submit(submission)?;

        if submitted == OnboardingStep::Physical {
            let partial = flow.partial_profile();
            match api.update_profile(user, &partial).await {
                Ok(()) => info!(user_id = %user, "Saved basic profile"),
                Err(err) => warn!(
                    user_id = %user,
                    error = %err,
                    "Could not save basic profile, continuing onboarding"
                ),
            }
        }

        Ok(next)
    }

    /// Save the completed profile. Unlike the partial save, failures here
    /// are returned so the caller can offer a retry.
    pub async fn finish(
        api: &dyn TrackerApi,
        flow: &OnboardingFlow,
        user: Uuid,
    ) -> ClientResult<ProfileUpdate> {
        let update = flow
            .completed_profile()
            .ok_or(OnboardingError::NotComplete(flow.step()))?;

        api.update_profile(user, &update).await?;
        info!(user_id = %user, "Onboarding complete");
        Ok(update)
    }
}
