//! Tests for endpoint managers
//!
//! These run against a wiremock server and cover the full
//! fetch → validate → convert → wrap path, including re-pagination.

use super::*;
use crate::error::Error;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(uri: &str) -> Client {
    let config = HttpClientConfig::builder()
        .base_url(uri)
        .max_retries(0)
        .no_rate_limit()
        .build();
    Client::new(
        config,
        Credentials::ApiKey("test-key".to_string()),
        Logger::new("test"),
    )
}

fn playlist_record(id: &str) -> serde_json::Value {
    json!({
        "kind": "youtube#playlist",
        "id": id,
        "snippet": {"title": format!("Playlist {id}"), "channelId": "UC123"}
    })
}

// ============================================================================
// List round-trip
// ============================================================================

#[tokio::test]
async fn test_list_playlists_wraps_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/playlists"))
        .and(query_param("part", "snippet,status,contentDetails"))
        .and(query_param("channelId", "UC123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [playlist_record("PL-A"), playlist_record("PL-B")],
            "nextPageToken": "T2",
            "pageInfo": {"resultsPerPage": 2, "totalResults": 5}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let page = client
        .playlists()
        .list(ListPlaylists::new().channel_id("UC123"))
        .await
        .unwrap();

    // Entities in provider order, tokens copied verbatim
    let ids: Vec<&str> = page.data().iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["PL-A", "PL-B"]);
    assert_eq!(page.next_token(), Some("T2"));
    assert_eq!(page.prev_token(), None);
    assert_eq!(page.results_per_page(), Some(2));
    assert_eq!(page.total_results(), Some(5));
}

#[tokio::test]
async fn test_list_playlists_empty_page_is_ok() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/playlists"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let page = client
        .playlists()
        .list(ListPlaylists::new().mine())
        .await
        .unwrap();

    assert!(page.data().is_empty());
    assert!(!page.has_next());
    assert!(!page.has_prev());
}

#[tokio::test]
async fn test_list_playlists_missing_items_is_likely_bug() {
    let mock_server = MockServer::start().await;

    // 200 response without any items field
    Mock::given(method("GET"))
        .and(path("/playlists"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "kind": "youtube#playlistListResponse"
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let err = client
        .playlists()
        .list(ListPlaylists::new().mine())
        .await
        .unwrap_err();

    match err {
        Error::LikelyBug { message } => assert!(message.contains("items")),
        other => panic!("Expected LikelyBug, got {other:?}"),
    }
}

#[tokio::test]
async fn test_list_playlists_invalid_record_fails_whole_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/playlists"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [playlist_record("PL-A"), {"snippet": {"title": "no id"}}]
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let err = client
        .playlists()
        .list(ListPlaylists::new().mine())
        .await
        .unwrap_err();

    match err {
        Error::Validation { field, .. } => assert_eq!(field, "id"),
        other => panic!("Expected Validation, got {other:?}"),
    }
}

// ============================================================================
// Re-pagination preserves the original query
// ============================================================================

#[tokio::test]
async fn test_next_page_reissues_original_filters() {
    let mock_server = MockServer::start().await;

    // Page 1: no pageToken
    Mock::given(method("GET"))
        .and(path("/playlists"))
        .and(query_param("channelId", "UC123"))
        .and(query_param("maxResults", "2"))
        .and(query_param_is_missing("pageToken"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [playlist_record("PL-A"), playlist_record("PL-B")],
            "nextPageToken": "T2"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    // Page 2: same filters plus the token
    Mock::given(method("GET"))
        .and(path("/playlists"))
        .and(query_param("channelId", "UC123"))
        .and(query_param("maxResults", "2"))
        .and(query_param("pageToken", "T2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [playlist_record("PL-C")],
            "prevPageToken": "T1"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let first = client
        .playlists()
        .list(ListPlaylists::new().channel_id("UC123").max_results(2))
        .await
        .unwrap();

    let second = first.next_page().await.unwrap().unwrap();

    let ids: Vec<&str> = second.data().iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["PL-C"]);
    assert_eq!(second.prev_token(), Some("T1"));
    assert_eq!(second.next_token(), None);

    // And the last page is terminal
    assert!(second.next_page().await.unwrap().is_none());

    // First snapshot is still intact
    assert_eq!(first.data().len(), 2);
    assert_eq!(first.next_token(), Some("T2"));
}

#[tokio::test]
async fn test_every_page_is_revalidated() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/playlists"))
        .and(query_param_is_missing("pageToken"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [playlist_record("PL-A")],
            "nextPageToken": "T2"
        })))
        .mount(&mock_server)
        .await;

    // The second page violates the contract
    Mock::given(method("GET"))
        .and(path("/playlists"))
        .and(query_param("pageToken", "T2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let first = client
        .playlists()
        .list(ListPlaylists::new().mine())
        .await
        .unwrap();

    let err = first.next_page().await.unwrap_err();
    assert!(matches!(err, Error::LikelyBug { .. }));
}

// ============================================================================
// Playlist write operations
// ============================================================================

#[tokio::test]
async fn test_insert_playlist() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/playlists"))
        .and(body_partial_json(json!({
            "snippet": {"title": "Mix", "description": "d"},
            "status": {"privacyStatus": "private"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "PL-NEW",
            "snippet": {"title": "Mix", "description": "d"},
            "status": {"privacyStatus": "private"}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let playlist = client
        .playlists()
        .insert(
            PlaylistDraft::new("Mix")
                .description("d")
                .privacy_status("private"),
        )
        .await
        .unwrap();

    assert_eq!(playlist.id, "PL-NEW");
    assert_eq!(playlist.title, "Mix");
    assert_eq!(playlist.privacy_status.as_deref(), Some("private"));
}

#[tokio::test]
async fn test_update_playlist_carries_id_in_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/playlists"))
        .and(body_partial_json(json!({"id": "PL1", "snippet": {"title": "Renamed"}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "PL1",
            "snippet": {"title": "Renamed"}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let playlist = client
        .playlists()
        .update("PL1", PlaylistDraft::new("Renamed"))
        .await
        .unwrap();

    assert_eq!(playlist.title, "Renamed");
}

#[tokio::test]
async fn test_delete_playlist_returns_result() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/playlists"))
        .and(query_param("id", "PL1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    client.playlists().delete("PL1").await.unwrap();
}

#[tokio::test]
async fn test_delete_playlist_surfaces_http_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/playlists"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let err = client.playlists().delete("PL-GONE").await.unwrap_err();

    match err {
        Error::HttpStatus { status, .. } => assert_eq!(status, 404),
        other => panic!("Expected HttpStatus, got {other:?}"),
    }
}

// ============================================================================
// Playlist items
// ============================================================================

#[tokio::test]
async fn test_list_playlist_items() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/playlistItems"))
        .and(query_param("playlistId", "PL1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{
                "id": "PLI1",
                "snippet": {
                    "title": "A video",
                    "playlistId": "PL1",
                    "position": 0,
                    "resourceId": {"kind": "youtube#video", "videoId": "v1"}
                }
            }]
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let page = client
        .playlist_items()
        .list(ListPlaylistItems::new().playlist_id("PL1"))
        .await
        .unwrap();

    assert_eq!(page.data().len(), 1);
    assert_eq!(page.data()[0].video_id, "v1");
}

#[tokio::test]
async fn test_insert_playlist_item_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/playlistItems"))
        .and(body_partial_json(json!({
            "snippet": {
                "playlistId": "PL1",
                "resourceId": {"kind": "youtube#video", "videoId": "v1"},
                "position": 2
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "PLI-NEW",
            "snippet": {
                "title": "A video",
                "playlistId": "PL1",
                "position": 2,
                "resourceId": {"kind": "youtube#video", "videoId": "v1"}
            }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let item = client
        .playlist_items()
        .insert(PlaylistItemDraft::new("PL1", "v1").position(2))
        .await
        .unwrap();

    assert_eq!(item.id, "PLI-NEW");
    assert_eq!(item.position, Some(2));
}

// ============================================================================
// Channels and videos
// ============================================================================

#[tokio::test]
async fn test_list_channels_by_handle() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/channels"))
        .and(query_param("forHandle", "@achannel"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{
                "id": "UC123",
                "snippet": {"title": "A channel"},
                "statistics": {"subscriberCount": "10"}
            }]
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let page = client
        .channels()
        .list(ListChannels::new().for_handle("@achannel"))
        .await
        .unwrap();

    assert_eq!(page.data()[0].id, "UC123");
    assert_eq!(page.data()[0].subscriber_count, Some(10));
}

#[tokio::test]
async fn test_rate_video() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/videos/rate"))
        .and(query_param("id", "v1"))
        .and(query_param("rating", "like"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    client.videos().rate("v1", Rating::Like).await.unwrap();
}

#[tokio::test]
async fn test_update_video_snippet() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/videos"))
        .and(body_partial_json(json!({
            "id": "v1",
            "snippet": {"title": "New title", "categoryId": "22"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "v1",
            "snippet": {"title": "New title"}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let video = client
        .videos()
        .update("v1", VideoUpdate::new("New title", "22"))
        .await
        .unwrap();

    assert_eq!(video.title, "New title");
}
