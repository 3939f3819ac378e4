//! Services layer
//!
//! Combines backend fetches with the shared domain logic and applies the
//! failure policy for each screen.

pub mod onboarding;
pub mod progress;
pub mod streaks;

#[cfg(test)]
pub(crate) mod fake;

pub use onboarding::OnboardingService;
pub use progress::{ProgressService, ProgressSummary, ProgressView};
pub use streaks::{StreakRefresh, StreakService};
