//! Small formatting helpers shared by the upload and failure views.
//!
//! Percentages are rendered with Rust's `{:.1}` formatting of the `f64`
//! value `100 * amount / total`: correctly rounded from the exact binary
//! value, with exact ties going to the even digit.

/// `amount / total` as a percentage with one decimal place, e.g. `"50.0%"`.
/// `None` when `total` is zero.
pub fn format_percentage(amount: u64, total: u64) -> Option<String> {
    if total == 0 {
        return None;
    }
    let percentage = 100.0 * amount as f64 / total as f64;
    Some(format!("{percentage:.1}%"))
}

/// `" (25.0%)"` for appending to a count, or `""` when `total` is zero.
pub fn format_percentage_as_count_suffix(amount: u64, total: u64) -> String {
    format_percentage(amount, total)
        .map(|percentage| format!(" ({percentage})"))
        .unwrap_or_default()
}
