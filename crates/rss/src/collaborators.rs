// ABOUTME: Seams for the pure functions the normalizer delegates to.
// ABOUTME: Date parsing, content hashing, tag stripping, URL resolution and the clock, with defaults.

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};

use crate::error::FeedError;
use crate::html_utils::strip_tags;
use crate::time_parse::parse_flexible_time;
use crate::url_utils::absolute_url;

/// Turns a feed date string into a timestamp.
pub trait DateParser: Send + Sync {
    fn parse(&self, value: &str) -> Result<DateTime<Utc>, FeedError>;
}

impl<F> DateParser for F
where
    F: Fn(&str) -> Result<DateTime<Utc>, FeedError> + Send + Sync,
{
    fn parse(&self, value: &str) -> Result<DateTime<Utc>, FeedError> {
        self(value)
    }
}

/// Deterministic digest used as an entry's identity.
pub trait ContentHasher: Send + Sync {
    fn hash(&self, value: &str) -> String;
}

impl<F> ContentHasher for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn hash(&self, value: &str) -> String {
        self(value)
    }
}

/// Removes markup from a string.
pub trait MarkupStripper: Send + Sync {
    fn strip_tags(&self, value: &str) -> String;
}

/// Anchors a possibly relative reference to a base URL.
pub trait UrlResolver: Send + Sync {
    fn absolute(&self, base: &str, reference: &str) -> Result<String, FeedError>;
}

impl<F> UrlResolver for F
where
    F: Fn(&str, &str) -> Result<String, FeedError> + Send + Sync,
{
    fn absolute(&self, base: &str, reference: &str) -> Result<String, FeedError> {
        self(base, reference)
    }
}

/// Source of "now" for entries without a usable date.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

impl<F> Clock for F
where
    F: Fn() -> DateTime<Utc> + Send + Sync,
{
    fn now(&self) -> DateTime<Utc> {
        self()
    }
}

/// [`parse_flexible_time`] as a collaborator.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlexibleDateParser;

impl DateParser for FlexibleDateParser {
    fn parse(&self, value: &str) -> Result<DateTime<Utc>, FeedError> {
        parse_flexible_time(value)
    }
}

/// Lowercase hex SHA-256.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Hasher;

impl ContentHasher for Sha256Hasher {
    fn hash(&self, value: &str) -> String {
        format!("{:x}", Sha256::digest(value.as_bytes()))
    }
}

/// [`strip_tags`] as a collaborator.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlTagStripper;

impl MarkupStripper for HtmlTagStripper {
    fn strip_tags(&self, value: &str) -> String {
        strip_tags(value)
    }
}

/// [`absolute_url`] as a collaborator.
#[derive(Debug, Clone, Copy, Default)]
pub struct JoinUrlResolver;

impl UrlResolver for JoinUrlResolver {
    fn absolute(&self, base: &str, reference: &str) -> Result<String, FeedError> {
        absolute_url(base, reference)
    }
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn sha256_hex_digest() {
        assert_eq!(
            Sha256Hasher.hash("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn closures_act_as_collaborators() {
        let fixed = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        let clock = move || fixed;
        assert_eq!(Clock::now(&clock), fixed);

        let parser = |value: &str| -> Result<DateTime<Utc>, FeedError> {
            Err(FeedError::invalid_date(value, "never"))
        };
        assert!(DateParser::parse(&parser, "2020-01-01").is_err());
    }
}
