//! Playlist item entity

use super::{opt_count, opt_str, opt_thumbnails, opt_timestamp, require_str, FromRaw, Thumbnails};
use crate::error::{Error, Result};
use crate::logging::Logger;
use chrono::{DateTime, Utc};
use serde_json::Value;

/// One entry of a playlist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistItem {
    /// Playlist item ID (distinct from the video ID)
    pub id: String,
    /// Playlist this item belongs to
    pub playlist_id: Option<String>,
    /// The referenced video
    pub video_id: String,
    /// Video title as cached on the item
    pub title: String,
    /// Video description as cached on the item
    pub description: String,
    /// Zero-based position within the playlist
    pub position: Option<u64>,
    /// Time the item was added
    pub published_at: Option<DateTime<Utc>>,
    /// Thumbnail renditions
    pub thumbnails: Option<Thumbnails>,
}

impl FromRaw for PlaylistItem {
    fn from_raw(raw: &Value, logger: &Logger) -> Result<Self> {
        // The video ID lives under snippet.resourceId for list responses and
        // under contentDetails for some part combinations; accept either.
        let video_id = opt_str(raw, "snippet.resourceId.videoId")
            .or_else(|| opt_str(raw, "contentDetails.videoId"))
            .ok_or_else(|| {
                Error::validation("snippet.resourceId.videoId", "missing required field")
            })?;

        Ok(Self {
            id: require_str(raw, "id")?,
            playlist_id: opt_str(raw, "snippet.playlistId"),
            video_id,
            title: require_str(raw, "snippet.title")?,
            description: opt_str(raw, "snippet.description").unwrap_or_default(),
            position: opt_count(raw, "snippet.position"),
            published_at: opt_timestamp(raw, "snippet.publishedAt")?,
            thumbnails: opt_thumbnails(raw, logger),
        })
    }
}
