// ABOUTME: Flexible date parsing for RSS pubDate and dc:date values.
// ABOUTME: Tries RFC 3339 and RFC 2822 via chrono, then falls back to the dateparser crate.

use chrono::{DateTime, Utc};

use crate::error::FeedError;

/// Parses a feed date string into UTC.
///
/// RFC 3339 (dc:date) and RFC 2822 (pubDate, including obsolete zone names
/// like `MST`) are tried first. Anything else goes through `dateparser`,
/// with naive timestamps taken as UTC.
pub fn parse_flexible_time(value: &str) -> Result<DateTime<Utc>, FeedError> {
    let s = value.trim();
    if s.is_empty() {
        return Err(FeedError::invalid_date(value, "empty date"));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    dateparser::parse_with_timezone(s, &Utc).map_err(|err| FeedError::invalid_date(value, err))
}
