// ABOUTME: Media RSS extension elements (media:thumbnail, media:content, media:peerLink).
// ABOUTME: Exposes flattened accessors over direct elements and media:group children.

use serde::{Deserialize, Serialize};

use crate::raw::parse_size;

const OCTET_STREAM: &str = "application/octet-stream";

/// `<media:thumbnail url width height>`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaThumbnail {
    pub url: String,
    pub width: String,
    pub height: String,
}

impl MediaThumbnail {
    /// Guessed from the file extension; thumbnails carry no type attribute.
    pub fn mime_type(&self) -> &'static str {
        if self.url.ends_with(".png") {
            "image/png"
        } else if self.url.ends_with(".gif") {
            "image/gif"
        } else {
            "image/jpeg"
        }
    }

    pub fn size(&self) -> u64 {
        0
    }
}

/// `<media:content url type medium fileSize>`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaContent {
    pub url: String,
    #[serde(rename = "type")]
    pub mime_type: String,
    pub medium: String,
    pub file_size: String,
}

impl MediaContent {
    /// Explicit type first, then a wildcard derived from `medium`.
    pub fn mime_type(&self) -> &str {
        if !self.mime_type.is_empty() {
            return &self.mime_type;
        }
        match self.medium.as_str() {
            "image" => "image/*",
            "video" => "video/*",
            "audio" => "audio/*",
            _ => OCTET_STREAM,
        }
    }

    pub fn size(&self) -> u64 {
        parse_size(&self.file_size)
    }
}

/// `<media:peerLink type href>`, e.g. a torrent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaPeerLink {
    pub url: String,
    #[serde(rename = "type")]
    pub mime_type: String,
}

impl MediaPeerLink {
    pub fn mime_type(&self) -> &str {
        if self.mime_type.is_empty() {
            OCTET_STREAM
        } else {
            &self.mime_type
        }
    }

    pub fn size(&self) -> u64 {
        0
    }
}

/// `<media:group>`: a bundle of alternative renditions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaGroup {
    pub thumbnails: Vec<MediaThumbnail>,
    pub contents: Vec<MediaContent>,
    pub peer_links: Vec<MediaPeerLink>,
}

/// All media extension elements attached to one item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaExtensions {
    pub thumbnails: Vec<MediaThumbnail>,
    pub contents: Vec<MediaContent>,
    pub peer_links: Vec<MediaPeerLink>,
    pub groups: Vec<MediaGroup>,
}

impl MediaExtensions {
    /// Direct thumbnails followed by those of each group.
    pub fn thumbnails(&self) -> impl Iterator<Item = &MediaThumbnail> {
        self.thumbnails
            .iter()
            .chain(self.groups.iter().flat_map(|g| g.thumbnails.iter()))
    }

    /// Direct contents followed by those of each group.
    pub fn contents(&self) -> impl Iterator<Item = &MediaContent> {
        self.contents
            .iter()
            .chain(self.groups.iter().flat_map(|g| g.contents.iter()))
    }

    /// Direct peer links followed by those of each group.
    pub fn peer_links(&self) -> impl Iterator<Item = &MediaPeerLink> {
        self.peer_links
            .iter()
            .chain(self.groups.iter().flat_map(|g| g.peer_links.iter()))
    }
}
