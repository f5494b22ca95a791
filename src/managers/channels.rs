//! Channels endpoint
//!
//! Channels are read-only through this client.

use super::join_ids;
use crate::entities::Channel;
use crate::error::Result;
use crate::http::HttpClient;
use crate::logging::Logger;
use crate::pagination::{ListQuery, PageRequest, Paginated};
use std::sync::Arc;

const PARTS: &str = "snippet,statistics,contentDetails";

/// Filter parameters for listing channels
#[derive(Debug, Clone, Default)]
pub struct ListChannels {
    /// Specific channel IDs
    pub ids: Vec<String>,
    /// Look a channel up by its `@handle`
    pub for_handle: Option<String>,
    /// The authenticated user's channel
    pub mine: bool,
    /// Page size hint (the provider caps this at 50)
    pub max_results: Option<u32>,
}

impl ListChannels {
    /// Create an empty filter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a channel ID to fetch
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.ids.push(id.into());
        self
    }

    /// Look a channel up by handle
    #[must_use]
    pub fn for_handle(mut self, handle: impl Into<String>) -> Self {
        self.for_handle = Some(handle.into());
        self
    }

    /// Scope to the authenticated user's channel
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
        let mut request = PageRequest::new("channels").param("part", PARTS);
        if !self.ids.is_empty() {
            request = request.param("id", join_ids(&self.ids));
        }
        if let Some(handle) = self.for_handle {
            request = request.param("forHandle", handle);
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

/// Manager for the channels endpoint
#[derive(Debug)]
pub struct ChannelsManager {
    client: Arc<HttpClient>,
    logger: Logger,
}

impl ChannelsManager {
    pub(crate) fn new(client: Arc<HttpClient>, logger: &Logger) -> Self {
        Self {
            client,
            logger: logger.child("channels"),
        }
    }

    /// List channels matching the given filters
    pub async fn list(&self, params: ListChannels) -> Result<Paginated<Vec<Channel>>> {
        ListQuery::new(
            Arc::clone(&self.client),
            params.into_page_request(),
            self.logger.clone(),
        )
        .first_page()
        .await
    }
}
