//! Common display utilities and helpers

use chrono::{DateTime, Utc};

/// Truncate string to max length with ellipsis
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        format!("{}...", &s[..max_len.saturating_sub(3)])
    }
}

/// Placeholder for missing values in table cells
pub fn or_dash(s: &str) -> String {
    if s.is_empty() { "--".to_string() } else { s.to_string() }
}

/// Render an optional timestamp as a calendar date
pub fn format_date(timestamp: Option<DateTime<Utc>>) -> String {
    match timestamp {
        Some(dt) => dt.format("%Y-%m-%d").to_string(),
        None => "--".to_string(),
    }
}

/// Render a boolean as a yes/no cell
pub fn yes_no(value: bool) -> String {
    if value { "yes" } else { "no" }.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_string() {
        assert_eq!(truncate_string("short", 10), "short");
        assert_eq!(truncate_string("a rather long title", 10), "a rathe...");
    }

    #[test]
    fn test_or_dash() {
        assert_eq!(or_dash(""), "--");
        assert_eq!(or_dash("value"), "value");
    }

    #[test]
    fn test_format_date() {
        let dt = "2026-03-01T10:30:00Z".parse::<DateTime<Utc>>().unwrap();
        assert_eq!(format_date(Some(dt)), "2026-03-01");
        assert_eq!(format_date(None), "--");
    }

    #[test]
    fn test_yes_no() {
        assert_eq!(yes_no(true), "yes");
        assert_eq!(yes_no(false), "no");
    }
}
