//! Video entity

use super::{
    opt_count, opt_str, opt_str_list, opt_thumbnails, opt_timestamp, require_str, FromRaw,
    Thumbnails,
};
use crate::error::Result;
use crate::logging::Logger;
use chrono::{DateTime, Utc};
use serde_json::Value;

/// A video resource
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Video {
    /// Video ID
    pub id: String,
    /// Video title
    pub title: String,
    /// Video description, empty if not set
    pub description: String,
    /// Owning channel ID
    pub channel_id: Option<String>,
    /// Publication time
    pub published_at: Option<DateTime<Utc>>,
    /// Thumbnail renditions
    pub thumbnails: Option<Thumbnails>,
    /// Video tags
    pub tags: Vec<String>,
    /// ISO 8601 duration, e.g. `PT4M13S`
    pub duration: Option<String>,
    /// View count
    pub view_count: Option<u64>,
    /// Like count; hidden ratings omit it
    pub like_count: Option<u64>,
    /// Privacy status: `public`, `unlisted` or `private`
    pub privacy_status: Option<String>,
}

impl FromRaw for Video {
    fn from_raw(raw: &Value, logger: &Logger) -> Result<Self> {
        Ok(Self {
            id: require_str(raw, "id")?,
            title: require_str(raw, "snippet.title")?,
            description: opt_str(raw, "snippet.description").unwrap_or_default(),
            channel_id: opt_str(raw, "snippet.channelId"),
            published_at: opt_timestamp(raw, "snippet.publishedAt")?,
            thumbnails: opt_thumbnails(raw, logger),
            tags: opt_str_list(raw, "snippet.tags"),
            duration: opt_str(raw, "contentDetails.duration"),
            view_count: opt_count(raw, "statistics.viewCount"),
            like_count: opt_count(raw, "statistics.likeCount"),
            privacy_status: opt_str(raw, "status.privacyStatus"),
        })
    }
}
