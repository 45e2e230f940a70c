//! Normalization of the loosely formatted numbers and dates found in statements

use chrono::NaiveDate;

/// Characters used as cosmetic digit grouping ("1,234" / "1 234")
const GROUP_SEPARATORS: [char; 3] = [',', ' ', '\u{00A0}'];

/// Parse an amount such as `-1,234,567.89` or `-1 234 567.89`.
///
/// Grouping separators are dropped before conversion.
pub fn parse_grouped_amount(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| !GROUP_SEPARATORS.contains(c))
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse().ok()
}

/// Parse the date half of a `YYYY.MM.DD HH:MM` timestamp.
pub fn parse_dotted_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y.%m.%d").ok()
}
