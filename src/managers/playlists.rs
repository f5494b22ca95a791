//! Playlists endpoint

use super::join_ids;
use crate::entities::{FromRaw, Playlist};
use crate::error::Result;
use crate::http::{HttpClient, RequestConfig};
use crate::logging::Logger;
use crate::pagination::{ListQuery, PageRequest, Paginated};
use reqwest::Method;
use serde_json::{json, Value};
use std::sync::Arc;

const PARTS: &str = "snippet,status,contentDetails";

/// Filter parameters for listing playlists
///
/// Exactly one of `ids`, `channel_id` or `mine` selects the scope, per the
/// provider's API; the client re-supplies whichever was set on every page.
#[derive(Debug, Clone, Default)]
pub struct ListPlaylists {
    /// Specific playlist IDs
    pub ids: Vec<String>,
    /// All playlists of one channel
    pub channel_id: Option<String>,
    /// Playlists owned by the authenticated channel
    pub mine: bool,
    /// Page size hint (the provider caps this at 50)
    pub max_results: Option<u32>,
}

impl ListPlaylists {
    /// Create an empty filter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a playlist ID to fetch
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.ids.push(id.into());
        self
    }

    /// Scope to one channel's playlists
    #[must_use]
    pub fn channel_id(mut self, channel_id: impl Into<String>) -> Self {
        self.channel_id = Some(channel_id.into());
        self
    }

    /// Scope to the authenticated channel's playlists
    #[must_use]
    pub fn mine(mut self) -> Self {
        self.mine = true;
        self
    }

    /// Set the page size hint
    #[must_use]
    pub fn max_results(mut self, max_results: u32) -> Self {
        self.max_results = Some(max_results);
        self
    }

    fn into_page_request(self) -> PageRequest {
        let mut request = PageRequest::new("playlists").param("part", PARTS);
        if !self.ids.is_empty() {
            request = request.param("id", join_ids(&self.ids));
        }
        if let Some(channel_id) = self.channel_id {
            request = request.param("channelId", channel_id);
        }
        if self.mine {
            request = request.param("mine", "true");
        }
        if let Some(max_results) = self.max_results {
            request = request.param("maxResults", max_results.to_string());
        }
        request
    }
}

/// Writable playlist fields for insert and update
#[derive(Debug, Clone, Default)]
pub struct PlaylistDraft {
    /// Playlist title (required by the provider)
    pub title: String,
    /// Playlist description
    pub description: Option<String>,
    /// Privacy status: `public`, `unlisted` or `private`
    pub privacy_status: Option<String>,
}

impl PlaylistDraft {
    /// Create a draft with the given title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Set the description
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the privacy status
    #[must_use]
    pub fn privacy_status(mut self, status: impl Into<String>) -> Self {
        self.privacy_status = Some(status.into());
        self
    }

    fn into_body(self, id: Option<&str>) -> Value {
        let mut snippet = json!({"title": self.title});
        if let Some(description) = self.description {
            snippet["description"] = Value::String(description);
        }
        let mut body = json!({"snippet": snippet});
        if let Some(id) = id {
            body["id"] = Value::String(id.to_string());
        }
        if let Some(status) = self.privacy_status {
            body["status"] = json!({"privacyStatus": status});
        }
        body
    }
}

/// Manager for the playlists endpoint
#[derive(Debug)]
pub struct PlaylistsManager {
    client: Arc<HttpClient>,
    logger: Logger,
}

impl PlaylistsManager {
    pub(crate) fn new(client: Arc<HttpClient>, logger: &Logger) -> Self {
        Self {
            client,
            logger: logger.child("playlists"),
        }
    }

    /// List playlists matching the given filters
    ///
    /// Returns the first page; further pages are reached through the
    /// [`Paginated`] snapshot and re-run the same filters.
    pub async fn list(&self, params: ListPlaylists) -> Result<Paginated<Vec<Playlist>>> {
        ListQuery::new(
            Arc::clone(&self.client),
            params.into_page_request(),
            self.logger.clone(),
        )
        .first_page()
        .await
    }

    /// Create a playlist
    pub async fn insert(&self, draft: PlaylistDraft) -> Result<Playlist> {
        let config = RequestConfig::new()
            .query("part", PARTS)
            .json(draft.into_body(None));
        let raw: Value = self
            .client
            .request_json(Method::POST, "playlists", config)
            .await?;
        let playlist = Playlist::from_raw(&raw, &self.logger)?;
        self.logger.debug(&format!("created playlist {}", playlist.id));
        Ok(playlist)
    }

    /// Replace a playlist's writable fields
    pub async fn update(&self, id: &str, draft: PlaylistDraft) -> Result<Playlist> {
        let config = RequestConfig::new()
            .query("part", PARTS)
            .json(draft.into_body(Some(id)));
        let raw: Value = self
            .client
            .request_json(Method::PUT, "playlists", config)
            .await?;
        Playlist::from_raw(&raw, &self.logger)
    }

    /// Delete a playlist
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.client
            .delete("playlists", RequestConfig::new().query("id", id))
            .await?;
        self.logger.debug(&format!("deleted playlist {id}"));
        Ok(())
    }
}
