// ABOUTME: The Normalizer value holding injected collaborators, plus its fluent builder.
// ABOUTME: Item and feed transforms live in item.rs and feed.rs as impl blocks on Normalizer.

use std::fmt;
use std::sync::Arc;

use crate::collaborators::{
    Clock, ContentHasher, DateParser, FlexibleDateParser, HtmlTagStripper, JoinUrlResolver,
    MarkupStripper, Sha256Hasher, SystemClock, UrlResolver,
};
use crate::diagnostics::{DiagnosticLog, TracingLog};
use crate::models::Feed;
use crate::raw::RawFeed;

/// Turns decoded RSS documents into canonical feeds.
///
/// Holds no mutable state; one instance can normalize many feeds,
/// concurrently if needed.
pub struct Normalizer {
    pub(crate) dates: Box<dyn DateParser>,
    pub(crate) hasher: Box<dyn ContentHasher>,
    pub(crate) stripper: Box<dyn MarkupStripper>,
    pub(crate) resolver: Box<dyn UrlResolver>,
    pub(crate) clock: Box<dyn Clock>,
    pub(crate) log: Arc<dyn DiagnosticLog>,
}

impl Normalizer {
    /// A normalizer with the default collaborators.
    pub fn new() -> Self {
        Self {
            dates: Box::new(FlexibleDateParser),
            hasher: Box::new(Sha256Hasher),
            stripper: Box::new(HtmlTagStripper),
            resolver: Box::new(JoinUrlResolver),
            clock: Box::new(SystemClock),
            log: Arc::new(TracingLog),
        }
    }

    pub fn builder() -> NormalizerBuilder {
        NormalizerBuilder::new()
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Normalizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Normalizer").finish_non_exhaustive()
    }
}

/// Builder for [`Normalizer`]; unset collaborators keep their defaults.
#[derive(Debug, Default)]
pub struct NormalizerBuilder {
    inner: Normalizer,
}

impl NormalizerBuilder {
    pub fn new() -> Self {
        Self {
            inner: Normalizer::new(),
        }
    }

    /// Set the date parser used for pubDate / dc:date.
    pub fn date_parser(mut self, parser: impl DateParser + 'static) -> Self {
        self.inner.dates = Box::new(parser);
        self
    }

    /// Set the entry hash function.
    pub fn hasher(mut self, hasher: impl ContentHasher + 'static) -> Self {
        self.inner.hasher = Box::new(hasher);
        self
    }

    /// Set the markup stripper applied to authors.
    pub fn markup_stripper(mut self, stripper: impl MarkupStripper + 'static) -> Self {
        self.inner.stripper = Box::new(stripper);
        self
    }

    /// Set the resolver anchoring entry URLs to the site URL.
    pub fn url_resolver(mut self, resolver: impl UrlResolver + 'static) -> Self {
        self.inner.resolver = Box::new(resolver);
        self
    }

    /// Set the clock used when an entry has no usable date.
    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.inner.clock = Box::new(clock);
        self
    }

    /// Set the sink for recoverable diagnostics.
    pub fn log(mut self, log: Arc<dyn DiagnosticLog>) -> Self {
        self.inner.log = log;
        self
    }

    pub fn build(self) -> Normalizer {
        self.inner
    }
}

/// Normalizes a feed with the default collaborators.
pub fn normalize(raw: &RawFeed) -> Feed {
    Normalizer::new().transform_feed(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn normalizer_is_shareable() {
        assert_send_sync::<Normalizer>();
    }

    #[test]
    fn builder_overrides_hasher() {
        struct Upper;
        impl ContentHasher for Upper {
            fn hash(&self, value: &str) -> String {
                value.to_uppercase()
            }
        }
        let normalizer = Normalizer::builder().hasher(Upper).build();
        assert_eq!(normalizer.hasher.hash("guid-1"), "GUID-1");
    }
}
