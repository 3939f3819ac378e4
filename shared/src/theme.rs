//! Gender-conditioned theme
//!
//! Screens compute a `Theme` once from the profile and pass it down to the
//! widgets that need it. Nothing here is global.

use crate::profile::Gender;
use serde::Serialize;

/// Semantic color role for status figures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Success,
    Error,
    Neutral,
}

/// Colors and icons for one screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Theme {
    pub primary: &'static str,
    pub accent: &'static str,
    pub success: &'static str,
    pub error: &'static str,
    pub neutral: &'static str,
    pub avatar_icon: &'static str,
}

const SUCCESS: &str = "#2E7D32";
const ERROR: &str = "#C62828";
const NEUTRAL: &str = "#757575";

impl Theme {
    pub fn for_gender(gender: Option<Gender>) -> Self {
        let (primary, accent, avatar_icon) = match gender {
            Some(Gender::Male) => ("#1565C0", "#64B5F6", "male"),
            Some(Gender::Female) => ("#AD1457", "#F06292", "female"),
            Some(Gender::Other) | None => ("#00796B", "#4DB6AC", "person"),
        };
        Self {
            primary,
            accent,
            success: SUCCESS,
            error: ERROR,
            neutral: NEUTRAL,
            avatar_icon,
        }
    }

    pub fn tone_color(&self, tone: Tone) -> &'static str {
        match tone {
            Tone::Success => self.success,
            Tone::Error => self.error,
            Tone::Neutral => self.neutral,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::for_gender(None)
    }
}
