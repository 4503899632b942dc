// ABOUTME: Decoded-but-unnormalized RSS document types handed over by the XML decoder.
// ABOUTME: Mirrors channel/item fields, link variants, authors and enclosures with their namespaces.

use serde::{Deserialize, Serialize};

use crate::media::MediaExtensions;

/// Namespace of `<atom:link>` elements embedded in RSS.
pub const ATOM_NAMESPACE: &str = "http://www.w3.org/2005/Atom";
/// Namespace of iTunes podcast elements (`<itunes:author>`).
pub const ITUNES_NAMESPACE: &str = "http://www.itunes.com/dtds/podcast-1.0.dtd";
/// Namespace of Dublin Core elements (`<dc:date>`, `<dc:creator>`).
pub const DUBLIN_CORE_NAMESPACE: &str = "http://purl.org/dc/elements/1.1/";
/// Namespace of feedburner elements (`<feedburner:origLink>`).
pub const FEEDBURNER_NAMESPACE: &str = "http://rssnamespace.org/feedburner/ext/1.0";
/// Namespace of `<content:encoded>`.
pub const CONTENT_NAMESPACE: &str = "http://purl.org/rss/1.0/modules/content/";

/// A decoded `<rss>` document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawFeed {
    pub version: String,
    pub title: String,
    pub links: Vec<RawLink>,
    pub language: String,
    pub description: String,
    pub pub_date: String,
    /// Channel-level `<itunes:author>`.
    pub itunes_author: String,
    pub items: Vec<RawItem>,
}

/// A `<link>` element. Plain RSS links carry their URL in `data` with an
/// empty namespace; Atom links carry it in `href`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawLink {
    pub namespace: String,
    pub data: String,
    pub href: String,
    pub rel: String,
}

impl RawLink {
    pub fn is_plain(&self) -> bool {
        self.namespace.is_empty()
    }

    pub fn is_atom(&self) -> bool {
        self.namespace == ATOM_NAMESPACE
    }
}

/// A `<comments>` element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawCommentLink {
    pub namespace: String,
    pub data: String,
}

/// An `<author>` element, either RSS free text or Atom-style with `<name>`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawAuthor {
    pub namespace: String,
    pub data: String,
    pub name: String,
    /// Raw inner markup of the element.
    pub inner: String,
}

/// An `<enclosure url type length>` element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawEnclosure {
    pub url: String,
    #[serde(rename = "type")]
    pub mime_type: String,
    pub length: String,
}

impl RawEnclosure {
    /// Byte size from the `length` attribute; 0 when empty or unparsable.
    pub fn size(&self) -> u64 {
        parse_size(&self.length)
    }
}

/// An `<item>` element.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawItem {
    pub guid: String,
    pub title: String,
    pub links: Vec<RawLink>,
    /// `<feedburner:origLink>`.
    pub original_link: String,
    pub comment_links: Vec<RawCommentLink>,
    pub description: String,
    /// `<content:encoded>`.
    pub encoded_content: String,
    pub pub_date: String,
    /// `<dc:date>`.
    pub date: String,
    pub authors: Vec<RawAuthor>,
    /// `<dc:creator>`.
    pub creator: String,
    pub enclosures: Vec<RawEnclosure>,
    /// `<feedburner:origEnclosureLink>`.
    pub original_enclosure_link: String,
    pub media: MediaExtensions,
}

/// Parses a decimal byte count, treating anything unparsable as 0.
pub(crate) fn parse_size(value: &str) -> u64 {
    value.trim().parse::<u64>().unwrap_or(0)
}
