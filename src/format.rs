//! Text formatting for terminal output.

use chrono::{DateTime, NaiveDate};

/// Renders a server date as `"Oct 15, 2023"`.
///
/// Accepts `YYYY-MM-DD` and RFC 3339 timestamps. Anything else is returned
/// unchanged.
pub fn format_date(date: &str) -> String {
    let trimmed = date.trim();
    let parsed = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(trimmed).ok().map(|d| d.date_naive()));

    match parsed {
        Some(d) => d.format("%b %-d, %Y").to_string(),
        None => date.to_string(),
    }
}

/// Cuts `text` to `max_len` characters and appends `...` when it was longer.
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max_len).collect();
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_plain_date() {
        assert_eq!(format_date("2023-10-15"), "Oct 15, 2023");
        assert_eq!(format_date("2024-03-05"), "Mar 5, 2024");
    }

    #[test]
    fn test_format_rfc3339() {
        assert_eq!(format_date("2024-12-10T00:00:00.000Z"), "Dec 10, 2024");
    }

    #[test]
    fn test_format_unparseable_passthrough() {
        assert_eq!(format_date("next week"), "next week");
        assert_eq!(format_date(""), "");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate_text("Mathematics", 20), "Mathematics");
        assert_eq!(truncate_text("Mathematics", 4), "Math...");
        assert_eq!(truncate_text("Mathematics", 11), "Mathematics");
        assert_eq!(truncate_text("éèêë", 2), "éè...");
    }
}
