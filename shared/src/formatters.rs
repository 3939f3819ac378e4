//! Keystroke-level input filters for numeric text fields
//!
//! A formatter sees the previous accepted text and the text the user just
//! produced. It returns the new text when it matches the field's pattern and
//! the previous text otherwise, so a rejected keystroke simply does nothing.

use once_cell::sync::Lazy;
use regex_lite::Regex;

static DECIMAL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d*(\.\d*)?$").expect("decimal pattern is valid"));

static INTEGER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d*$").expect("integer pattern is valid"));

/// Filters a text edit into an accepted value
pub trait InputFormatter {
    fn apply(&self, old_value: &str, new_value: &str) -> String;
}

/// Digits with at most one decimal point and a bounded fraction
#[derive(Debug, Clone, Copy)]
pub struct DecimalInputFormatter {
    pub max_decimals: usize,
}

impl DecimalInputFormatter {
    pub fn new(max_decimals: usize) -> Self {
        Self { max_decimals }
    }

    fn accepts(&self, value: &str) -> bool {
        if !DECIMAL_PATTERN.is_match(value) {
            return false;
        }
        match value.split_once('.') {
            Some((_, fraction)) => self.max_decimals > 0 && fraction.len() <= self.max_decimals,
            None => true,
        }
    }
}

impl Default for DecimalInputFormatter {
    fn default() -> Self {
        Self::new(2)
    }
}

impl InputFormatter for DecimalInputFormatter {
    fn apply(&self, old_value: &str, new_value: &str) -> String {
        if new_value.is_empty() || self.accepts(new_value) {
            new_value.to_string()
        } else {
            old_value.to_string()
        }
    }
}

/// Integer-only field with a digit limit and an upper bound
#[derive(Debug, Clone, Copy)]
pub struct BoundedIntegerFormatter {
    pub max_digits: usize,
    pub max_value: u32,
}

impl BoundedIntegerFormatter {
    fn accepts(&self, value: &str) -> bool {
        if !INTEGER_PATTERN.is_match(value) || value.len() > self.max_digits {
            return false;
        }
        value
            .parse::<u32>()
            .map(|n| n <= self.max_value)
            .unwrap_or(false)
    }
}

impl InputFormatter for BoundedIntegerFormatter {
    fn apply(&self, old_value: &str, new_value: &str) -> String {
        if new_value.is_empty() || self.accepts(new_value) {
            new_value.to_string()
        } else {
            old_value.to_string()
        }
    }
}

/// Feet part of an imperial height: a single digit up to 8
pub const FEET_FORMATTER: BoundedIntegerFormatter = BoundedIntegerFormatter {
    max_digits: 1,
    max_value: 8,
};

/// Inches part of an imperial height: up to two digits, at most 11
pub const INCHES_FORMATTER: BoundedIntegerFormatter = BoundedIntegerFormatter {
    max_digits: 2,
    max_value: 11,
};
