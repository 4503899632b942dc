// ABOUTME: RSS normalization library for feedcanon.
// ABOUTME: Turns decoded RSS documents into canonical, deduplicated feeds and entries.

pub mod collaborators;
pub mod diagnostics;
pub mod enclosures;
pub mod error;
pub mod fallback;
pub mod feed;
pub mod html_utils;
pub mod item;
pub mod link_rel;
pub mod media;
pub mod models;
pub mod normalizer;
pub mod raw;
pub mod time_parse;
pub mod url_utils;

pub use collaborators::{
    Clock, ContentHasher, DateParser, FlexibleDateParser, HtmlTagStripper, JoinUrlResolver,
    MarkupStripper, Sha256Hasher, SystemClock, UrlResolver,
};
pub use diagnostics::{Diagnostic, DiagnosticLog, MemoryLog, TracingLog};
pub use enclosures::aggregate_enclosures;
pub use error::FeedError;
pub use fallback::first_non_empty;
pub use html_utils::strip_tags;
pub use link_rel::is_valid_link_relation;
pub use media::{MediaContent, MediaExtensions, MediaGroup, MediaPeerLink, MediaThumbnail};
pub use models::{Enclosure, Entry, Feed};
pub use normalizer::{normalize, Normalizer, NormalizerBuilder};
pub use raw::{
    RawAuthor, RawCommentLink, RawEnclosure, RawFeed, RawItem, RawLink, ATOM_NAMESPACE,
    CONTENT_NAMESPACE, DUBLIN_CORE_NAMESPACE, FEEDBURNER_NAMESPACE, ITUNES_NAMESPACE,
};
pub use time_parse::parse_flexible_time;
pub use url_utils::absolute_url;
