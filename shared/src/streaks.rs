//! Streaks as reported by the streak service

use serde::{Deserialize, Serialize};

/// One streak per tracked activity type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakData {
    pub streak_type: String,
    #[serde(default)]
    pub current_streak: u32,
    #[serde(default)]
    pub longest_streak: u32,
}

impl StreakData {
    /// Zero state shown when no streak exists yet
    pub fn none() -> Self {
        Self {
            streak_type: String::new(),
            current_streak: 0,
            longest_streak: 0,
        }
    }

    fn is_type(&self, kind: &str) -> bool {
        self.streak_type.trim().eq_ignore_ascii_case(kind)
    }
}

/// Pick the streak to display: calories first, exercise as a fallback.
/// `None` means "no streak yet", not an error.
pub fn select_streak(streaks: &[StreakData]) -> Option<&StreakData> {
    streaks
        .iter()
        .find(|s| s.is_type("calories"))
        .or_else(|| streaks.iter().find(|s| s.is_type("exercise")))
}
