//! Screen-size breakpoints

use serde::{Deserialize, Serialize};

/// Logical width breakpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    Xs,
    Sm,
    Md,
}

impl Breakpoint {
    /// Classify a logical screen width in pixels
    pub fn from_width(width: f64) -> Self {
        if width < 360.0 {
            Breakpoint::Xs
        } else if width < 600.0 {
            Breakpoint::Sm
        } else {
            Breakpoint::Md
        }
    }
}

/// One value per breakpoint
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Responsive<T> {
    pub xs: T,
    pub sm: T,
    pub md: T,
}

impl<T> Responsive<T> {
    pub const fn new(xs: T, sm: T, md: T) -> Self {
        Self { xs, sm, md }
    }
}

/// Select the value for a breakpoint
pub fn responsive_value<T: Clone>(breakpoint: Breakpoint, values: &Responsive<T>) -> T {
    match breakpoint {
        Breakpoint::Xs => values.xs.clone(),
        Breakpoint::Sm => values.sm.clone(),
        Breakpoint::Md => values.md.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoints() {
        assert_eq!(Breakpoint::from_width(320.0), Breakpoint::Xs);
        assert_eq!(Breakpoint::from_width(360.0), Breakpoint::Sm);
        assert_eq!(Breakpoint::from_width(599.0), Breakpoint::Sm);
        assert_eq!(Breakpoint::from_width(768.0), Breakpoint::Md);
    }

    #[test]
    fn test_responsive_value() {
        const PADDING: Responsive<f64> = Responsive::new(8.0, 12.0, 16.0);
        assert_eq!(responsive_value(Breakpoint::Xs, &PADDING), 8.0);
        assert_eq!(responsive_value(Breakpoint::from_width(400.0), &PADDING), 12.0);
        assert_eq!(responsive_value(Breakpoint::Md, &PADDING), 16.0);
    }
}
