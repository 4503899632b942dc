// ABOUTME: Merges media thumbnails, RSS enclosures, media contents and peer links.
// ABOUTME: Deduplicates by URL across all sources, keeping the first occurrence in priority order.

use std::collections::HashSet;

use crate::models::Enclosure;
use crate::raw::RawItem;

/// Builds the enclosure list for an item.
///
/// Sources, in priority order:
/// 1. media thumbnails
/// 2. `<enclosure>` elements (feedburner redirects undone)
/// 3. media contents
/// 4. media peer links
///
/// A URL already emitted by an earlier source (or earlier in the same
/// source) is skipped.
pub fn aggregate_enclosures(item: &RawItem) -> Vec<Enclosure> {
    let mut collector = EnclosureCollector::default();

    for thumbnail in item.media.thumbnails() {
        collector.push(&thumbnail.url, thumbnail.mime_type(), thumbnail.size());
    }

    for enclosure in &item.enclosures {
        let url = original_enclosure_url(&enclosure.url, &item.original_enclosure_link);
        collector.push(url, &enclosure.mime_type, enclosure.size());
    }

    for content in item.media.contents() {
        collector.push(&content.url, content.mime_type(), content.size());
    }

    for peer_link in item.media.peer_links() {
        collector.push(&peer_link.url, peer_link.mime_type(), peer_link.size());
    }

    collector.enclosures
}

#[derive(Default)]
struct EnclosureCollector {
    enclosures: Vec<Enclosure>,
    seen: HashSet<String>,
}

impl EnclosureCollector {
    fn push(&mut self, url: &str, mime_type: &str, size: u64) {
        if self.seen.insert(url.to_string()) {
            self.enclosures.push(Enclosure {
                url: url.to_string(),
                mime_type: mime_type.to_string(),
                size,
            });
        }
    }
}

/// Swaps a feedburner proxy URL for the original link when the proxy URL
/// contains the original's file name.
fn original_enclosure_url<'a>(url: &'a str, original: &'a str) -> &'a str {
    if !original.is_empty() && url.contains(path_base(original)) {
        original
    } else {
        url
    }
}

/// Last slash-separated element of `path`, ignoring trailing slashes.
fn path_base(path: &str) -> &str {
    if path.is_empty() {
        return ".";
    }
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return "/";
    }
    match trimmed.rfind('/') {
        Some(idx) => &trimmed[idx + 1..],
        None => trimmed,
    }
}
