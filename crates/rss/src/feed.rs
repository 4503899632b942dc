// ABOUTME: Feed-level normalization: site URL, feed URL, title, and per-entry finishing steps.
// ABOUTME: Applies iTunes author fallback, author tag stripping, URL anchoring and title fallback.

use crate::models::{Entry, Feed};
use crate::normalizer::Normalizer;
use crate::raw::RawFeed;

impl Normalizer {
    /// Normalizes a whole document. Entries keep document order.
    pub fn transform_feed(&self, raw: &RawFeed) -> Feed {
        let site_url = site_url(raw);
        let title = match raw.title.trim() {
            "" => site_url.clone(),
            title => title.to_string(),
        };

        let entries = raw
            .items
            .iter()
            .map(|item| self.finish_entry(self.transform_item(item), raw, &site_url))
            .collect();

        Feed {
            title,
            feed_url: feed_url(raw),
            site_url,
            entries,
        }
    }

    fn finish_entry(&self, mut entry: Entry, raw: &RawFeed, site_url: &str) -> Entry {
        if entry.author.is_empty() && !raw.itunes_author.is_empty() {
            entry.author = raw.itunes_author.clone();
        }
        entry.author = self.stripper.strip_tags(&entry.author).trim().to_string();

        if entry.url.is_empty() {
            entry.url = site_url.to_string();
        } else if let Ok(absolute) = self.resolver.absolute(site_url, &entry.url) {
            entry.url = absolute;
        }

        if entry.title.is_empty() {
            entry.title = entry.url.clone();
        }

        entry
    }
}

/// Body of the first plain `<link>`.
pub fn site_url(raw: &RawFeed) -> String {
    raw.links
        .iter()
        .find(|link| link.is_plain())
        .map(|link| link.data.trim())
        .unwrap_or_default()
        .to_string()
}

/// Href of the first `<atom:link>`, whatever its relation.
pub fn feed_url(raw: &RawFeed) -> String {
    raw.links
        .iter()
        .find(|link| link.is_atom())
        .map(|link| link.href.trim())
        .unwrap_or_default()
        .to_string()
}
