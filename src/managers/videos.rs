//! Videos endpoint

use super::join_ids;
use crate::entities::{FromRaw, Video};
use crate::error::Result;
use crate::http::{HttpClient, RequestConfig};
use crate::logging::Logger;
use crate::pagination::{ListQuery, PageRequest, Paginated};
use reqwest::Method;
use serde_json::{json, Value};
use std::sync::Arc;

const PARTS: &str = "snippet,contentDetails,statistics,status";

/// Filter parameters for listing videos
#[derive(Debug, Clone, Default)]
pub struct ListVideos {
    /// Specific video IDs
    pub ids: Vec<String>,
    /// A chart, e.g. `mostPopular`
    pub chart: Option<String>,
    /// Videos the authenticated user rated: `like` or `dislike`
    pub my_rating: Option<String>,
    /// Page size hint (the provider caps this at 50)
    pub max_results: Option<u32>,
}

impl ListVideos {
    /// Create an empty filter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a video ID to fetch
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.ids.push(id.into());
        self
    }

    /// Fetch a chart instead of explicit IDs
    #[must_use]
    pub fn chart(mut self, chart: impl Into<String>) -> Self {
        self.chart = Some(chart.into());
        self
    }

    /// Fetch videos the authenticated user rated
    #[must_use]
    pub fn my_rating(mut self, rating: impl Into<String>) -> Self {
        self.my_rating = Some(rating.into());
        self
    }

    /// Set the page size hint
    #[must_use]
    pub fn max_results(mut self, max_results: u32) -> Self {
        self.max_results = Some(max_results);
        self
    }

    fn into_page_request(self) -> PageRequest {
        let mut request = PageRequest::new("videos").param("part", PARTS);
        if !self.ids.is_empty() {
            request = request.param("id", join_ids(&self.ids));
        }
        if let Some(chart) = self.chart {
            request = request.param("chart", chart);
        }
        if let Some(my_rating) = self.my_rating {
            request = request.param("myRating", my_rating);
        }
        if let Some(max_results) = self.max_results {
            request = request.param("maxResults", max_results.to_string());
        }
        request
    }
}

/// Writable video fields for update
///
/// The provider replaces the whole snippet on update, so `title` and
/// `category_id` are required even when only the description changes.
#[derive(Debug, Clone)]
pub struct VideoUpdate {
    /// Video title
    pub title: String,
    /// Video category ID (required by the provider on snippet updates)
    pub category_id: String,
    /// Video description
    pub description: Option<String>,
    /// Video tags
    pub tags: Vec<String>,
    /// Privacy status: `public`, `unlisted` or `private`
    pub privacy_status: Option<String>,
}

impl VideoUpdate {
    /// Create an update with the required snippet fields
    pub fn new(title: impl Into<String>, category_id: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            category_id: category_id.into(),
            description: None,
            tags: Vec::new(),
            privacy_status: None,
        }
    }

    /// Set the description
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the tags
    #[must_use]
    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Set the privacy status
    #[must_use]
    pub fn privacy_status(mut self, status: impl Into<String>) -> Self {
        self.privacy_status = Some(status.into());
        self
    }

    fn into_body(self, id: &str) -> Value {
        let mut snippet = json!({
            "title": self.title,
            "categoryId": self.category_id,
        });
        if let Some(description) = self.description {
            snippet["description"] = Value::String(description);
        }
        if !self.tags.is_empty() {
            snippet["tags"] = json!(self.tags);
        }
        let mut body = json!({"id": id, "snippet": snippet});
        if let Some(status) = self.privacy_status {
            body["status"] = json!({"privacyStatus": status});
        }
        body
    }
}

/// Rating applied to a video
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rating {
    /// Like the video
    Like,
    /// Dislike the video
    Dislike,
    /// Remove any rating
    None,
}

impl Rating {
    /// The wire value the provider expects
    pub fn as_str(self) -> &'static str {
        match self {
            Rating::Like => "like",
            Rating::Dislike => "dislike",
            Rating::None => "none",
        }
    }
}

/// Manager for the videos endpoint
#[derive(Debug)]
pub struct VideosManager {
    client: Arc<HttpClient>,
    logger: Logger,
}

impl VideosManager {
    pub(crate) fn new(client: Arc<HttpClient>, logger: &Logger) -> Self {
        Self {
            client,
            logger: logger.child("videos"),
        }
    }

    /// List videos matching the given filters
    pub async fn list(&self, params: ListVideos) -> Result<Paginated<Vec<Video>>> {
        ListQuery::new(
            Arc::clone(&self.client),
            params.into_page_request(),
            self.logger.clone(),
        )
        .first_page()
        .await
    }

    /// Replace a video's writable fields
    pub async fn update(&self, id: &str, update: VideoUpdate) -> Result<Video> {
        let config = RequestConfig::new()
            .query("part", "snippet,status")
            .json(update.into_body(id));
        let raw: Value = self
            .client
            .request_json(Method::PUT, "videos", config)
            .await?;
        Video::from_raw(&raw, &self.logger)
    }

    /// Rate a video, or clear the rating with [`Rating::None`]
    pub async fn rate(&self, id: &str, rating: Rating) -> Result<()> {
        self.client
            .post(
                "videos/rate",
                RequestConfig::new()
                    .query("id", id)
                    .query("rating", rating.as_str()),
            )
            .await?;
        self.logger
            .debug(&format!("rated video {id}: {}", rating.as_str()));
        Ok(())
    }

    /// Delete a video
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.client
            .delete("videos", RequestConfig::new().query("id", id))
            .await?;
        self.logger.debug(&format!("deleted video {id}"));
        Ok(())
    }
}
