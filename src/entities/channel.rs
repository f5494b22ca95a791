//! Channel entity

use super::{opt_count, opt_str, opt_thumbnails, opt_timestamp, require_str, FromRaw, Thumbnails};
use crate::error::Result;
use crate::logging::Logger;
use chrono::{DateTime, Utc};
use serde_json::Value;

/// A channel resource
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Channel {
    /// Channel ID
    pub id: String,
    /// Channel title
    pub title: String,
    /// Channel description, empty if not set
    pub description: String,
    /// Vanity URL handle, e.g. `@somechannel`
    pub custom_url: Option<String>,
    /// Channel creation time
    pub published_at: Option<DateTime<Utc>>,
    /// Thumbnail renditions
    pub thumbnails: Option<Thumbnails>,
    /// Subscriber count; hidden channels omit it
    pub subscriber_count: Option<u64>,
    /// Number of public videos
    pub video_count: Option<u64>,
    /// Lifetime view count
    pub view_count: Option<u64>,
    /// ID of the channel's uploads playlist
    pub uploads_playlist_id: Option<String>,
}

impl FromRaw for Channel {
    fn from_raw(raw: &Value, logger: &Logger) -> Result<Self> {
        Ok(Self {
            id: require_str(raw, "id")?,
            title: require_str(raw, "snippet.title")?,
            description: opt_str(raw, "snippet.description").unwrap_or_default(),
            custom_url: opt_str(raw, "snippet.customUrl"),
            published_at: opt_timestamp(raw, "snippet.publishedAt")?,
            thumbnails: opt_thumbnails(raw, logger),
            subscriber_count: opt_count(raw, "statistics.subscriberCount"),
            video_count: opt_count(raw, "statistics.videoCount"),
            view_count: opt_count(raw, "statistics.viewCount"),
            uploads_playlist_id: opt_str(raw, "contentDetails.relatedPlaylists.uploads"),
        })
    }
}
