// ABOUTME: Per-item normalization: URL, comments URL, date, author, content, title, hash, enclosures.
// ABOUTME: Each field is resolved from an ordered list of candidate sources.

use std::iter;

use chrono::{DateTime, Utc};

use crate::diagnostics::Diagnostic;
use crate::enclosures::aggregate_enclosures;
use crate::error::FeedError;
use crate::fallback::first_non_empty;
use crate::link_rel::is_valid_link_relation;
use crate::models::Entry;
use crate::normalizer::Normalizer;
use crate::raw::RawItem;

impl Normalizer {
    /// Normalizes one item. Feed-level finishing (author fallback, URL
    /// anchoring, title fallback) is applied by [`Normalizer::transform_feed`].
    pub fn transform_item(&self, item: &RawItem) -> Entry {
        let url = item_url(item);
        Entry {
            comments_url: comments_url(item),
            date: self.published_date(item),
            author: item_author(item).to_string(),
            hash: self.item_hash(item, &url),
            content: item_content(item).to_string(),
            title: item.title.trim().to_string(),
            enclosures: aggregate_enclosures(item),
            url,
        }
    }

    fn published_date(&self, item: &RawItem) -> DateTime<Utc> {
        let Some(value) = date_source(item) else {
            return self.clock.now();
        };

        match self.dates.parse(value) {
            Ok(date) => date,
            Err(err) => {
                let reason = match err {
                    FeedError::InvalidDate { reason, .. } => reason,
                    other => other.to_string(),
                };
                self.log.record(Diagnostic::InvalidDate {
                    value: value.to_string(),
                    reason,
                });
                self.clock.now()
            }
        }
    }

    fn item_hash(&self, item: &RawItem, url: &str) -> String {
        first_non_empty([item.guid.as_str(), url])
            .map(|value| self.hasher.hash(value))
            .unwrap_or_default()
    }
}

/// Item URL: feedburner origLink, else the first link that is either an
/// Atom link with a usable href or a plain link with a body.
pub fn item_url(item: &RawItem) -> String {
    let links = item.links.iter().flat_map(|link| {
        let atom_href = if link.is_atom() && is_valid_link_relation(&link.rel) {
            link.href.as_str()
        } else {
            ""
        };
        [atom_href, link.data.as_str()]
    });

    first_non_empty(iter::once(item.original_link.as_str()).chain(links))
        .map(str::trim)
        .unwrap_or_default()
        .to_string()
}

/// First `<comments>` in the default namespace.
pub fn comments_url(item: &RawItem) -> String {
    item.comment_links
        .iter()
        .find(|link| link.namespace.is_empty())
        .map(|link| link.data.trim())
        .unwrap_or_default()
        .to_string()
}

/// dc:date wins over pubDate.
pub fn date_source(item: &RawItem) -> Option<&str> {
    first_non_empty([item.date.as_str(), item.pub_date.as_str()])
}

/// First author name or inner markup, then dc:creator. Not yet stripped.
pub fn item_author(item: &RawItem) -> &str {
    let from_authors = item
        .authors
        .iter()
        .flat_map(|author| [author.name.as_str(), author.inner.as_str()]);

    first_non_empty(from_authors.chain(iter::once(item.creator.as_str()))).unwrap_or_default()
}

/// content:encoded, else description.
pub fn item_content(item: &RawItem) -> &str {
    first_non_empty([item.encoded_content.as_str(), item.description.as_str()]).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::MemoryLog;
    use crate::raw::{RawAuthor, RawCommentLink, RawLink, ATOM_NAMESPACE};
    use chrono::TimeZone;
    use std::sync::Arc;

    fn plain_link(data: &str) -> RawLink {
        RawLink {
            data: data.into(),
            ..Default::default()
        }
    }

    fn atom_link(href: &str, rel: &str) -> RawLink {
        RawLink {
            namespace: ATOM_NAMESPACE.into(),
            href: href.into(),
            rel: rel.into(),
            ..Default::default()
        }
    }

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn url_prefers_feedburner_original_link() {
        let item = RawItem {
            original_link: " https://origin.example/post ".into(),
            links: vec![plain_link("https://proxy.example/post")],
            ..Default::default()
        };
        assert_eq!(item_url(&item), "https://origin.example/post");
    }

    #[test]
    fn url_skips_atom_links_with_invalid_relation() {
        let item = RawItem {
            links: vec![
                atom_link("https://hub.example/", "hub"),
                atom_link("https://example.com/a", "alternate"),
            ],
            ..Default::default()
        };
        assert_eq!(item_url(&item), "https://example.com/a");
    }

    #[test]
    fn url_checks_links_in_document_order() {
        let item = RawItem {
            links: vec![
                plain_link("\n  https://example.com/plain  \n"),
                atom_link("https://example.com/atom", ""),
            ],
            ..Default::default()
        };
        assert_eq!(item_url(&item), "https://example.com/plain");
    }

    #[test]
    fn url_empty_without_links() {
        assert_eq!(item_url(&RawItem::default()), "");
    }

    #[test]
    fn comments_url_uses_default_namespace() {
        let item = RawItem {
            comment_links: vec![
                RawCommentLink {
                    namespace: "http://purl.org/rss/1.0/modules/slash/".into(),
                    data: "12".into(),
                },
                RawCommentLink {
                    namespace: String::new(),
                    data: " https://example.com/a#comments ".into(),
                },
            ],
            ..Default::default()
        };
        assert_eq!(comments_url(&item), "https://example.com/a#comments");
    }

    #[test]
    fn author_prefers_name_then_inner_then_creator() {
        let mut item = RawItem {
            authors: vec![
                RawAuthor::default(),
                RawAuthor {
                    inner: "<name>Inner</name>".into(),
                    ..Default::default()
                },
            ],
            creator: "Creator".into(),
            ..Default::default()
        };
        assert_eq!(item_author(&item), "<name>Inner</name>");

        item.authors[0].name = "Named".into();
        assert_eq!(item_author(&item), "Named");

        item.authors.clear();
        assert_eq!(item_author(&item), "Creator");
    }

    #[test]
    fn content_prefers_encoded() {
        let mut item = RawItem {
            description: "summary".into(),
            encoded_content: "<p>full</p>".into(),
            ..Default::default()
        };
        assert_eq!(item_content(&item), "<p>full</p>");
        item.encoded_content.clear();
        assert_eq!(item_content(&item), "summary");
    }

    #[test]
    fn dublin_core_date_wins() {
        let item = RawItem {
            date: "2024-01-02T03:04:05Z".into(),
            pub_date: "Mon, 01 Jan 2024 00:00:00 +0000".into(),
            ..Default::default()
        };
        let entry = Normalizer::new().transform_item(&item);
        assert_eq!(entry.date, Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap());
    }

    #[test]
    fn unparsable_date_is_logged_and_defaults_to_now() {
        let log = Arc::new(MemoryLog::new());
        let normalizer = Normalizer::builder()
            .clock(fixed_now)
            .log(log.clone())
            .build();
        let item = RawItem {
            pub_date: "the day before yesterday".into(),
            ..Default::default()
        };

        let entry = normalizer.transform_item(&item);
        assert_eq!(entry.date, fixed_now());

        let records = log.records();
        assert_eq!(records.len(), 1);
        match &records[0] {
            Diagnostic::InvalidDate { value, .. } => {
                assert_eq!(value, "the day before yesterday")
            }
        }
    }

    #[test]
    fn missing_date_defaults_to_now_without_logging() {
        let log = Arc::new(MemoryLog::new());
        let normalizer = Normalizer::builder()
            .clock(fixed_now)
            .log(log.clone())
            .build();
        let entry = normalizer.transform_item(&RawItem::default());
        assert_eq!(entry.date, fixed_now());
        assert!(log.records().is_empty());
    }

    #[test]
    fn hash_uses_guid_then_url() {
        let normalizer = Normalizer::builder()
            .hasher(|value: &str| format!("h({value})"))
            .build();

        let with_guid = RawItem {
            guid: "guid-1".into(),
            links: vec![plain_link("https://example.com/a")],
            ..Default::default()
        };
        assert_eq!(normalizer.transform_item(&with_guid).hash, "h(guid-1)");

        let url_only = RawItem {
            links: vec![plain_link("https://example.com/a")],
            ..Default::default()
        };
        assert_eq!(
            normalizer.transform_item(&url_only).hash,
            "h(https://example.com/a)"
        );

        assert_eq!(normalizer.transform_item(&RawItem::default()).hash, "");
    }

    #[test]
    fn title_is_trimmed_but_not_filled() {
        let item = RawItem {
            title: "  Hello  ".into(),
            ..Default::default()
        };
        assert_eq!(Normalizer::new().transform_item(&item).title, "Hello");
        assert_eq!(Normalizer::new().transform_item(&RawItem::default()).title, "");
    }
}
