//! Compact number formatting for progress cards

/// Format an aggregate for display.
///
/// Values of magnitude 1000 or more are shown in thousands with a `K`
/// suffix (one decimal below 10K). Smaller values are truncated to an
/// integer. `show_sign` adds a leading `+` to positive values and is meant
/// for change-type figures only. A negative value keeps its `-` whatever
/// `show_sign` says.
pub fn format_value(value: f64, show_sign: bool) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }

    let magnitude = value.abs();
    let body = if magnitude >= 1000.0 {
        let thousands = magnitude / 1000.0;
        if thousands < 10.0 {
            format!("{:.1}K", thousands)
        } else {
            format!("{:.0}K", thousands)
        }
    } else {
        format!("{}", magnitude.trunc() as i64)
    };

    let is_zero = body == "0";
    if value < 0.0 && !is_zero {
        format!("-{}", body)
    } else if show_sign && value > 0.0 && !is_zero {
        format!("+{}", body)
    } else {
        body
    }
}
