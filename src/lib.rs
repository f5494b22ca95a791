//! # tubekit
//!
//! A typed, async client for the YouTube Data API v3.
//!
//! ## Features
//!
//! - **Typed Resources**: Playlists, playlist items, channels, and videos as
//!   plain Rust structs, converted and validated per record
//! - **Cursor Pagination**: Every list call returns an immutable page
//!   snapshot that can fetch any other page of the same query
//! - **Explicit Errors**: All fallible operations return `Result<T, Error>`;
//!   nothing throws, including deletes
//! - **Transport Care**: Retries with backoff and token-bucket rate limiting,
//!   confined to the HTTP layer
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tubekit::{Client, ListPlaylists, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = Client::with_api_key("AIza...");
//!
//!     let mut page = client
//!         .playlists()
//!         .list(ListPlaylists::new().channel_id("UC123").max_results(50))
//!         .await?;
//!
//!     loop {
//!         for playlist in page.data() {
//!             println!("{}: {}", playlist.id, playlist.title);
//!         }
//!         match page.next_page().await? {
//!             Some(next) => page = next,
//!             None => break,
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                          Client                             │
//! │  playlists()   playlist_items()   channels()   videos()     │
//! └─────────────────────────────────────────────────────────────┘
//!                               │
//! ┌────────────┬────────────────┴─────────────┬────────────────┐
//! │  Managers  │          Pagination          │    Entities    │
//! ├────────────┼──────────────────────────────┼────────────────┤
//! │ list       │ RawPage → validate items     │ FromRaw        │
//! │ insert     │ Paginated<T> snapshot        │ fail-fast      │
//! │ update     │ go_to_page / next / prev     │ per-record     │
//! │ delete     │ PageRequest re-dispatch      │ validation     │
//! └────────────┴──────────────────────────────┴────────────────┘
//!                               │
//!                  ┌────────────┴────────────┐
//!                  │       HttpClient        │
//!                  │ retry · backoff · rate  │
//!                  │ limit · credentials     │
//!                  └─────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Explicitly injected, component-scoped logging
pub mod logging;

/// HTTP transport with retry and rate limiting
pub mod http;

/// Cursor pagination: raw pages and the Paginated container
pub mod pagination;

/// Entity types and raw-record conversion
pub mod entities;

/// Per-endpoint managers and the Client facade
pub mod managers;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use logging::Logger;

pub use entities::{Channel, Playlist, PlaylistItem, Thumbnail, Thumbnails, Video};
pub use http::{Credentials, HttpClientConfig};
pub use managers::{
    Client, ListChannels, ListPlaylistItems, ListPlaylists, ListVideos, PlaylistDraft,
    PlaylistItemDraft, Rating, VideoUpdate,
};
pub use pagination::{PageInfo, Paginated, RawPage};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
