// ABOUTME: Canonical, dialect-independent feed models produced by the normalizer.
// ABOUTME: Feed, Entry and Enclosure are plain owned values handed to storage untouched.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A media attachment referenced by an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enclosure {
    pub url: String,
    pub mime_type: String,
    pub size: u64,
}

/// One normalized feed item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub url: String,
    pub comments_url: String,
    pub date: DateTime<Utc>,
    pub author: String,
    /// Content-address of the guid (or URL); empty when both are empty.
    pub hash: String,
    pub content: String,
    pub title: String,
    pub enclosures: Vec<Enclosure>,
}

/// A normalized feed with its entries in document order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Feed {
    pub title: String,
    pub site_url: String,
    pub feed_url: String,
    pub entries: Vec<Entry>,
}
