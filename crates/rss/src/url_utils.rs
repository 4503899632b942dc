// ABOUTME: URL helpers for anchoring relative entry links to a feed's site.

use url::{ParseError, Url};

use crate::error::FeedError;

/// Resolves `reference` against `base`.
///
/// An already absolute reference is returned verbatim (no normalization).
pub fn absolute_url(base: &str, reference: &str) -> Result<String, FeedError> {
    match Url::parse(reference) {
        Ok(_) => Ok(reference.to_string()),
        Err(ParseError::RelativeUrlWithoutBase) => {
            let base_url = Url::parse(base).map_err(|err| FeedError::invalid_url(base, err))?;
            let joined = base_url
                .join(reference)
                .map_err(|err| FeedError::invalid_url(reference, err))?;
            Ok(joined.to_string())
        }
        Err(err) => Err(FeedError::invalid_url(reference, err)),
    }
}
