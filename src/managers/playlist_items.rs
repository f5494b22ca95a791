//! Playlist items endpoint

use super::join_ids;
use crate::entities::{FromRaw, PlaylistItem};
use crate::error::Result;
use crate::http::{HttpClient, RequestConfig};
use crate::logging::Logger;
use crate::pagination::{ListQuery, PageRequest, Paginated};
use reqwest::Method;
use serde_json::{json, Value};
use std::sync::Arc;

const PARTS: &str = "snippet,contentDetails";

/// Filter parameters for listing playlist items
#[derive(Debug, Clone, Default)]
pub struct ListPlaylistItems {
    /// Items of one playlist, in playlist order
    pub playlist_id: Option<String>,
    /// Specific playlist item IDs
    pub ids: Vec<String>,
    /// Restrict to items referencing this video
    pub video_id: Option<String>,
    /// Page size hint (the provider caps this at 50)
    pub max_results: Option<u32>,
}

impl ListPlaylistItems {
    /// Create an empty filter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Scope to one playlist's items
    #[must_use]
    pub fn playlist_id(mut self, playlist_id: impl Into<String>) -> Self {
        self.playlist_id = Some(playlist_id.into());
        self
    }

    /// Add a playlist item ID to fetch
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.ids.push(id.into());
        self
    }

    /// Restrict to items referencing this video
    #[must_use]
    pub fn video_id(mut self, video_id: impl Into<String>) -> Self {
        self.video_id = Some(video_id.into());
        self
    }

    /// Set the page size hint
    #[must_use]
    pub fn max_results(mut self, max_results: u32) -> Self {
        self.max_results = Some(max_results);
        self
    }

    fn into_page_request(self) -> PageRequest {
        let mut request = PageRequest::new("playlistItems").param("part", PARTS);
        if let Some(playlist_id) = self.playlist_id {
            request = request.param("playlistId", playlist_id);
        }
        if !self.ids.is_empty() {
            request = request.param("id", join_ids(&self.ids));
        }
        if let Some(video_id) = self.video_id {
            request = request.param("videoId", video_id);
        }
        if let Some(max_results) = self.max_results {
            request = request.param("maxResults", max_results.to_string());
        }
        request
    }
}

/// Writable playlist item fields for insert and update
#[derive(Debug, Clone)]
pub struct PlaylistItemDraft {
    /// Playlist to add the video to
    pub playlist_id: String,
    /// Video to reference
    pub video_id: String,
    /// Zero-based position; appended at the end if unset
    pub position: Option<u64>,
}

impl PlaylistItemDraft {
    /// Create a draft adding `video_id` to `playlist_id`
    pub fn new(playlist_id: impl Into<String>, video_id: impl Into<String>) -> Self {
        Self {
            playlist_id: playlist_id.into(),
            video_id: video_id.into(),
            position: None,
        }
    }

    /// Set the position within the playlist
    #[must_use]
    pub fn position(mut self, position: u64) -> Self {
        self.position = Some(position);
        self
    }

    fn into_body(self, id: Option<&str>) -> Value {
        let mut snippet = json!({
            "playlistId": self.playlist_id,
            "resourceId": {
                "kind": "youtube#video",
                "videoId": self.video_id,
            }
        });
        if let Some(position) = self.position {
            snippet["position"] = json!(position);
        }
        let mut body = json!({"snippet": snippet});
        if let Some(id) = id {
            body["id"] = Value::String(id.to_string());
        }
        body
    }
}

/// Manager for the playlist items endpoint
#[derive(Debug)]
pub struct PlaylistItemsManager {
    client: Arc<HttpClient>,
    logger: Logger,
}

impl PlaylistItemsManager {
    pub(crate) fn new(client: Arc<HttpClient>, logger: &Logger) -> Self {
        Self {
            client,
            logger: logger.child("playlist_items"),
        }
    }

    /// List playlist items matching the given filters
    pub async fn list(&self, params: ListPlaylistItems) -> Result<Paginated<Vec<PlaylistItem>>> {
        ListQuery::new(
            Arc::clone(&self.client),
            params.into_page_request(),
            self.logger.clone(),
        )
        .first_page()
        .await
    }

    /// Add a video to a playlist
    pub async fn insert(&self, draft: PlaylistItemDraft) -> Result<PlaylistItem> {
        let config = RequestConfig::new()
            .query("part", PARTS)
            .json(draft.into_body(None));
        let raw: Value = self
            .client
            .request_json(Method::POST, "playlistItems", config)
            .await?;
        let item = PlaylistItem::from_raw(&raw, &self.logger)?;
        self.logger.debug(&format!(
            "inserted video {} into playlist {}",
            item.video_id,
            item.playlist_id.as_deref().unwrap_or("?")
        ));
        Ok(item)
    }

    /// Replace a playlist item's writable fields (e.g. its position)
    pub async fn update(&self, id: &str, draft: PlaylistItemDraft) -> Result<PlaylistItem> {
        let config = RequestConfig::new()
            .query("part", PARTS)
            .json(draft.into_body(Some(id)));
        let raw: Value = self
            .client
            .request_json(Method::PUT, "playlistItems", config)
            .await?;
        PlaylistItem::from_raw(&raw, &self.logger)
    }

    /// Remove an item from its playlist
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.client
            .delete("playlistItems", RequestConfig::new().query("id", id))
            .await?;
        self.logger.debug(&format!("deleted playlist item {id}"));
        Ok(())
    }
}
