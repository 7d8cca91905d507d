//! Date shape detection for type inference.
//!
//! Recognizes the common spreadsheet date layouts: ISO (with or without a
//! time suffix), slash and dash numeric dates, and month-name dates like
//! "Jan 1, 2024". Candidates are validated with chrono so that strings
//! such as "9999-99-99" do not pass as dates.

use chrono::NaiveDate;

/// True if `text` starts with a plausible calendar date.
pub fn looks_like_date(text: &str) -> bool {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return false;
    }

    // ISO 8601 prefix, tolerating a trailing time component.
    if trimmed.len() >= 10
        && trimmed.is_char_boundary(10)
        && NaiveDate::parse_from_str(&trimmed[..10], "%Y-%m-%d").is_ok()
    {
        return true;
    }

    // Slash/dash numeric dates; only the first token matters so that
    // "1/2/2024 10:30" still counts.
    let first_token = trimmed.split_whitespace().next().unwrap_or(trimmed);
    const NUMERIC_FORMATS: [&str; 4] = ["%m/%d/%Y", "%m/%d/%y", "%d-%m-%Y", "%d-%m-%y"];
    if NUMERIC_FORMATS
        .iter()
        .any(|fmt| NaiveDate::parse_from_str(first_token, fmt).is_ok())
    {
        return true;
    }

    // Month-name dates: "Jan 1, 2024", "January 1 2024".
    const NAMED_FORMATS: [&str; 4] = ["%b %d, %Y", "%B %d, %Y", "%b %d %Y", "%B %d %Y"];
    NAMED_FORMATS
        .iter()
        .any(|fmt| NaiveDate::parse_from_str(trimmed, fmt).is_ok())
}

#[cfg(test)]
mod tests {
    use super::looks_like_date;

    #[test]
    fn recognizes_common_layouts() {
        assert!(looks_like_date("2024-03-15"));
        assert!(looks_like_date("2024-03-15T10:30:00Z"));
        assert!(looks_like_date("3/15/2024"));
        assert!(looks_like_date("1/2/24 10:30"));
        assert!(looks_like_date("15-03-2024"));
        assert!(looks_like_date("Jan 1, 2024"));
        assert!(looks_like_date("January 1 2024"));
    }

    #[test]
    fn rejects_non_dates() {
        assert!(!looks_like_date("9999-99-99"));
        assert!(!looks_like_date("1234"));
        assert!(!looks_like_date("north region"));
        assert!(!looks_like_date(""));
        assert!(!looks_like_date("12.5"));
    }
}
