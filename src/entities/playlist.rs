//! Playlist entity

use super::{
    opt_count, opt_str, opt_thumbnails, opt_timestamp, require_str, FromRaw, Thumbnails,
};
use crate::error::Result;
use crate::logging::Logger;
use chrono::{DateTime, Utc};
use serde_json::Value;

/// A playlist resource
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    /// Playlist ID
    pub id: String,
    /// Playlist title
    pub title: String,
    /// Playlist description, empty if not set
    pub description: String,
    /// Owning channel ID
    pub channel_id: Option<String>,
    /// Creation time
    pub published_at: Option<DateTime<Utc>>,
    /// Thumbnail renditions
    pub thumbnails: Option<Thumbnails>,
    /// Privacy status: `public`, `unlisted` or `private`
    pub privacy_status: Option<String>,
    /// Number of items in the playlist
    pub item_count: Option<u64>,
}

impl FromRaw for Playlist {
    fn from_raw(raw: &Value, logger: &Logger) -> Result<Self> {
        Ok(Self {
            id: require_str(raw, "id")?,
            title: require_str(raw, "snippet.title")?,
            description: opt_str(raw, "snippet.description").unwrap_or_default(),
            channel_id: opt_str(raw, "snippet.channelId"),
            published_at: opt_timestamp(raw, "snippet.publishedAt")?,
            thumbnails: opt_thumbnails(raw, logger),
            privacy_status: opt_str(raw, "status.privacyStatus"),
            item_count: opt_count(raw, "contentDetails.itemCount"),
        })
    }
}
