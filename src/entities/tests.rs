//! Tests for entity conversion

use super::*;
use crate::error::Error;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use test_case::test_case;

fn logger() -> Logger {
    Logger::new("test")
}

fn playlist_record(id: &str) -> Value {
    json!({
        "kind": "youtube#playlist",
        "id": id,
        "snippet": {
            "title": format!("Playlist {id}"),
            "description": "desc",
            "channelId": "UC123",
            "publishedAt": "2024-03-01T12:00:00Z",
            "thumbnails": {
                "default": {"url": "https://i.ytimg.com/d.jpg", "width": 120, "height": 90},
                "high": {"url": "https://i.ytimg.com/h.jpg", "width": 480, "height": 360}
            }
        },
        "status": {"privacyStatus": "public"},
        "contentDetails": {"itemCount": 7}
    })
}

// ============================================================================
// Playlist
// ============================================================================

#[test]
fn test_playlist_from_raw_full_record() {
    let playlist = Playlist::from_raw(&playlist_record("PL1"), &logger()).unwrap();

    assert_eq!(playlist.id, "PL1");
    assert_eq!(playlist.title, "Playlist PL1");
    assert_eq!(playlist.description, "desc");
    assert_eq!(playlist.channel_id.as_deref(), Some("UC123"));
    assert_eq!(
        playlist.published_at.unwrap().to_rfc3339(),
        "2024-03-01T12:00:00+00:00"
    );
    assert_eq!(playlist.privacy_status.as_deref(), Some("public"));
    assert_eq!(playlist.item_count, Some(7));

    let thumbnails = playlist.thumbnails.unwrap();
    assert_eq!(thumbnails.best().unwrap().url, "https://i.ytimg.com/h.jpg");
}

#[test]
fn test_playlist_from_raw_minimal_record() {
    let raw = json!({"id": "PL1", "snippet": {"title": "t"}});
    let playlist = Playlist::from_raw(&raw, &logger()).unwrap();

    assert_eq!(playlist.id, "PL1");
    assert_eq!(playlist.description, "");
    assert_eq!(playlist.channel_id, None);
    assert_eq!(playlist.published_at, None);
    assert_eq!(playlist.thumbnails, None);
    assert_eq!(playlist.item_count, None);
}

#[test_case(json!({"snippet": {"title": "t"}}), "id" ; "missing id")]
#[test_case(json!({"id": "PL1"}), "snippet.title" ; "missing title")]
#[test_case(json!({"id": 42, "snippet": {"title": "t"}}), "id" ; "non-string id")]
fn test_playlist_from_raw_invalid(raw: Value, expected_field: &str) {
    let err = Playlist::from_raw(&raw, &logger()).unwrap_err();
    match err {
        Error::Validation { field, .. } => assert_eq!(field, expected_field),
        other => panic!("Expected Validation, got {other:?}"),
    }
}

#[test]
fn test_playlist_from_raw_bad_timestamp() {
    let raw = json!({
        "id": "PL1",
        "snippet": {"title": "t", "publishedAt": "yesterday"}
    });
    let err = Playlist::from_raw(&raw, &logger()).unwrap_err();
    match err {
        Error::Validation { field, message } => {
            assert_eq!(field, "snippet.publishedAt");
            assert!(message.contains("yesterday"));
        }
        other => panic!("Expected Validation, got {other:?}"),
    }
}

// ============================================================================
// from_raw_many — fail-fast aggregation
// ============================================================================

#[test]
fn test_from_raw_many_converts_in_order() {
    let raws = vec![playlist_record("PL1"), playlist_record("PL2")];
    let playlists = Playlist::from_raw_many(&raws, &logger()).unwrap();

    assert_eq!(playlists.len(), 2);
    assert_eq!(playlists[0].id, "PL1");
    assert_eq!(playlists[1].id, "PL2");
}

#[test]
fn test_from_raw_many_fails_fast() {
    // Valid record followed by an invalid one: the aggregate is Err with no
    // partial list of the leading valid entities.
    let raws = vec![playlist_record("PL1"), json!({"snippet": {"title": "t"}})];
    let result = Playlist::from_raw_many(&raws, &logger());

    match result {
        Err(Error::Validation { field, .. }) => assert_eq!(field, "id"),
        other => panic!("Expected Err(Validation), got {other:?}"),
    }
}

#[test]
fn test_from_raw_many_empty_input() {
    let playlists = Playlist::from_raw_many(&[], &logger()).unwrap();
    assert!(playlists.is_empty());
}

// ============================================================================
// PlaylistItem
// ============================================================================

#[test]
fn test_playlist_item_from_raw() {
    let raw = json!({
        "id": "PLI1",
        "snippet": {
            "title": "A video",
            "playlistId": "PL1",
            "position": 3,
            "resourceId": {"kind": "youtube#video", "videoId": "v123"}
        }
    });
    let item = PlaylistItem::from_raw(&raw, &logger()).unwrap();

    assert_eq!(item.id, "PLI1");
    assert_eq!(item.video_id, "v123");
    assert_eq!(item.playlist_id.as_deref(), Some("PL1"));
    assert_eq!(item.position, Some(3));
}

#[test]
fn test_playlist_item_video_id_from_content_details() {
    let raw = json!({
        "id": "PLI1",
        "snippet": {"title": "A video"},
        "contentDetails": {"videoId": "v456"}
    });
    let item = PlaylistItem::from_raw(&raw, &logger()).unwrap();
    assert_eq!(item.video_id, "v456");
}

#[test]
fn test_playlist_item_missing_video_id() {
    let raw = json!({"id": "PLI1", "snippet": {"title": "A video"}});
    let err = PlaylistItem::from_raw(&raw, &logger()).unwrap_err();
    match err {
        Error::Validation { field, .. } => assert_eq!(field, "snippet.resourceId.videoId"),
        other => panic!("Expected Validation, got {other:?}"),
    }
}

// ============================================================================
// Channel
// ============================================================================

#[test]
fn test_channel_from_raw_parses_string_counts() {
    // statistics counts arrive as decimal strings
    let raw = json!({
        "id": "UC123",
        "snippet": {"title": "A channel", "customUrl": "@achannel"},
        "statistics": {
            "subscriberCount": "1200",
            "videoCount": "34",
            "viewCount": "567890"
        },
        "contentDetails": {"relatedPlaylists": {"uploads": "UU123"}}
    });
    let channel = Channel::from_raw(&raw, &logger()).unwrap();

    assert_eq!(channel.id, "UC123");
    assert_eq!(channel.custom_url.as_deref(), Some("@achannel"));
    assert_eq!(channel.subscriber_count, Some(1200));
    assert_eq!(channel.video_count, Some(34));
    assert_eq!(channel.view_count, Some(567_890));
    assert_eq!(channel.uploads_playlist_id.as_deref(), Some("UU123"));
}

#[test]
fn test_channel_hidden_subscriber_count() {
    let raw = json!({
        "id": "UC123",
        "snippet": {"title": "A channel"},
        "statistics": {"hiddenSubscriberCount": true}
    });
    let channel = Channel::from_raw(&raw, &logger()).unwrap();
    assert_eq!(channel.subscriber_count, None);
}

// ============================================================================
// Video
// ============================================================================

#[test]
fn test_video_from_raw() {
    let raw = json!({
        "id": "v123",
        "snippet": {
            "title": "A video",
            "channelId": "UC123",
            "tags": ["rust", "api"]
        },
        "contentDetails": {"duration": "PT4M13S"},
        "statistics": {"viewCount": "1000", "likeCount": "50"},
        "status": {"privacyStatus": "unlisted"}
    });
    let video = Video::from_raw(&raw, &logger()).unwrap();

    assert_eq!(video.id, "v123");
    assert_eq!(video.tags, vec!["rust".to_string(), "api".to_string()]);
    assert_eq!(video.duration.as_deref(), Some("PT4M13S"));
    assert_eq!(video.view_count, Some(1000));
    assert_eq!(video.like_count, Some(50));
    assert_eq!(video.privacy_status.as_deref(), Some("unlisted"));
}

#[test]
fn test_video_without_optional_blocks() {
    let raw = json!({"id": "v123", "snippet": {"title": "A video"}});
    let video = Video::from_raw(&raw, &logger()).unwrap();
    assert!(video.tags.is_empty());
    assert_eq!(video.view_count, None);
}

// ============================================================================
// Thumbnails
// ============================================================================

#[test]
fn test_thumbnails_best_prefers_largest() {
    let thumbnails: Thumbnails = serde_json::from_value(json!({
        "default": {"url": "d.jpg", "width": 120, "height": 90},
        "maxres": {"url": "m.jpg", "width": 1280, "height": 720}
    }))
    .unwrap();
    assert_eq!(thumbnails.best().unwrap().url, "m.jpg");
}

#[test]
fn test_malformed_thumbnails_are_dropped_not_fatal() {
    let raw = json!({
        "id": "PL1",
        "snippet": {
            "title": "t",
            // url must be a string; the whole block is dropped with a warning
            "thumbnails": {"default": {"url": 42}}
        }
    });
    let playlist = Playlist::from_raw(&raw, &logger()).unwrap();
    assert_eq!(playlist.thumbnails, None);
}
