//! Year display formatting for date-like values

use chrono::Datelike;
use regex::Regex;
use std::sync::LazyLock;

static FOUR_DIGITS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{4}$").unwrap());
static LEADING_YEAR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\d{4})").unwrap());

/// Date formats accepted by the generic parsing fallback
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%B %d, %Y", "%b %d, %Y", "%d %B %Y"];

/// Render a date-like value as a 4-digit year for display.
///
/// Missing values become "N/A". A bare 4-digit year passes through, a value
/// starting with 4 digits (ISO dates included) is reduced to them, and
/// anything else is run through date parsing. Values that resist all of the
/// above are returned trimmed but otherwise unchanged; this never fails.
pub fn format_year(value: Option<&str>) -> String {
    let Some(raw) = value else {
        return "N/A".to_string();
    };
    if raw.is_empty() {
        return "N/A".to_string();
    }

    let text = raw.trim();
    if FOUR_DIGITS_RE.is_match(text) {
        return text.to_string();
    }
    if let Some(caps) = LEADING_YEAR_RE.captures(text) {
        return caps[1].to_string();
    }
    if let Some(year) = parse_year(text) {
        return format!("{:04}", year);
    }

    text.to_string()
}

fn parse_year(text: &str) -> Option<i32> {
    if let Ok(parsed) = chrono::DateTime::parse_from_rfc3339(text) {
        return Some(parsed.year());
    }
    if let Ok(parsed) = chrono::DateTime::parse_from_rfc2822(text) {
        return Some(parsed.year());
    }
    for format in DATE_FORMATS {
        if let Ok(parsed) = chrono::NaiveDate::parse_from_str(text, format) {
            return Some(parsed.year());
        }
    }
    None
}
