//! Endpoint managers
//!
//! One manager per API resource, each holding a shared transport and a child
//! logger. List operations return a [`Paginated`] snapshot; create and update
//! operations return the converted entity; delete operations return
//! `Result<()>` like every other fallible operation.
//!
//! [`Paginated`]: crate::pagination::Paginated

mod channels;
mod playlist_items;
mod playlists;
mod videos;

pub use channels::{ChannelsManager, ListChannels};
pub use playlist_items::{ListPlaylistItems, PlaylistItemDraft, PlaylistItemsManager};
pub use playlists::{ListPlaylists, PlaylistDraft, PlaylistsManager};
pub use videos::{ListVideos, Rating, VideoUpdate, VideosManager};

use crate::http::{Credentials, HttpClient, HttpClientConfig};
use crate::logging::Logger;
use std::sync::Arc;

#[cfg(test)]
mod tests;

/// Entry point to the API: hands out per-resource managers
///
/// All managers share one transport (and thus one rate-limit bucket) and
/// derive their loggers from the logger injected here.
#[derive(Debug)]
pub struct Client {
    http: Arc<HttpClient>,
    logger: Logger,
}

impl Client {
    /// Create a client from transport config, credentials and a root logger
    pub fn new(config: HttpClientConfig, credentials: Credentials, logger: Logger) -> Self {
        Self {
            http: Arc::new(HttpClient::with_credentials(config, credentials)),
            logger,
        }
    }

    /// Create a client with default transport config and an API key
    pub fn with_api_key(key: impl Into<String>) -> Self {
        Self::new(
            HttpClientConfig::default(),
            Credentials::ApiKey(key.into()),
            Logger::new("tubekit"),
        )
    }

    /// Create a client with default transport config and a bearer token
    pub fn with_bearer_token(token: impl Into<String>) -> Self {
        Self::new(
            HttpClientConfig::default(),
            Credentials::BearerToken(token.into()),
            Logger::new("tubekit"),
        )
    }

    /// Playlists endpoint
    pub fn playlists(&self) -> PlaylistsManager {
        PlaylistsManager::new(Arc::clone(&self.http), &self.logger)
    }

    /// Playlist items endpoint
    pub fn playlist_items(&self) -> PlaylistItemsManager {
        PlaylistItemsManager::new(Arc::clone(&self.http), &self.logger)
    }

    /// Channels endpoint
    pub fn channels(&self) -> ChannelsManager {
        ChannelsManager::new(Arc::clone(&self.http), &self.logger)
    }

    /// Videos endpoint
    pub fn videos(&self) -> VideosManager {
        VideosManager::new(Arc::clone(&self.http), &self.logger)
    }
}

/// Join a list of IDs into the comma-separated form the API expects
pub(crate) fn join_ids(ids: &[String]) -> String {
    ids.join(",")
}
