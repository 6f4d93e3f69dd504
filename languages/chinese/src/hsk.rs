/// Shown when a record carries no proficiency level
pub const UNCLASSIFIED: &str = "N/A";

/// The trimmed label, or `N/A` when blank
pub fn level_label(raw: &str) -> &str {
    let label = raw.trim();
    if label.is_empty() { UNCLASSIFIED } else { label }
}

/// Bare tier numbers such as `3` or `7-9`
fn is_numeric_tier(label: &str) -> bool {
    label.starts_with(|c: char| c.is_ascii_digit())
        && label.chars().all(|c| c.is_ascii_digit() || c == '-')
}

/// Badge for a card: numeric tiers get an `HSK` prefix, anything else is
/// shown as written
pub fn badge(raw: &str) -> String {
    let label = level_label(raw);
    if is_numeric_tier(label) {
        format!("HSK {label}")
    } else {
        label.to_string()
    }
}
