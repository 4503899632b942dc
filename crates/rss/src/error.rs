// ABOUTME: Error types for the collaborators the RSS normalizer calls into.
// ABOUTME: Provides FeedError with InvalidDate and InvalidUrl variants.

use std::fmt;
use thiserror::Error;

/// Errors reported by date parsers and URL resolvers.
///
/// None of these reach the caller of [`crate::Normalizer`]; the normalizer
/// substitutes a default and moves on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedError {
    /// A date string matched none of the known formats.
    #[error("invalid date {value:?}: {reason}")]
    InvalidDate { value: String, reason: String },

    /// A URL (base or reference) could not be parsed or joined.
    #[error("invalid URL {input:?}: {reason}")]
    InvalidUrl { input: String, reason: String },
}

impl FeedError {
    /// Creates an InvalidDate error from any displayable cause.
    pub fn invalid_date(value: impl Into<String>, reason: impl fmt::Display) -> Self {
        FeedError::InvalidDate {
            value: value.into(),
            reason: reason.to_string(),
        }
    }

    /// Creates an InvalidUrl error from any displayable cause.
    pub fn invalid_url(input: impl Into<String>, reason: impl fmt::Display) -> Self {
        FeedError::InvalidUrl {
            input: input.into(),
            reason: reason.to_string(),
        }
    }
}
