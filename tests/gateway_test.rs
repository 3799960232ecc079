//! Integration tests for the streaming gateway
//!
//! These tests drive the proxy with scripted confirmation gates and
//! verify the lazy-construction invariants:
//! - No engine exists until a play is confirmed
//! - The engine is constructed at most once per gateway
//! - Declines and unknown ids leave the engine slot untouched

use stream_proxy::{
    MetadataCatalog, PlayOutcome, ProxyConfig, ScriptedGate, StreamingGateway, VideoEntry,
};

fn entry(video_id: &str, manifest: &str) -> VideoEntry {
    VideoEntry {
        video_id: video_id.to_string(),
        title: format!("Title for {}", video_id),
        description: "HLD Basics".to_string(),
        manifest: manifest.to_string(),
    }
}

fn default_catalog() -> MetadataCatalog {
    MetadataCatalog::from_entries(&ProxyConfig::default().catalog)
        .expect("default catalog should be valid")
}

#[tokio::test]
async fn test_unknown_id_reports_not_found() {
    let mut gateway = StreamingGateway::new(
        default_catalog(),
        Box::new(ScriptedGate::always_confirm()),
    );

    let outcome = gateway.play("vid_404").await;
    assert_eq!(outcome, PlayOutcome::MetadataNotFound);
    assert!(
        !gateway.has_engine(),
        "not-found must never construct an engine"
    );
}

#[tokio::test]
async fn test_declined_confirmation_keeps_engine_idle() {
    let mut gateway =
        StreamingGateway::new(default_catalog(), Box::new(ScriptedGate::new([false])));

    let outcome = gateway.play("vid_101").await;
    assert_eq!(outcome, PlayOutcome::Cancelled);
    assert!(
        !gateway.has_engine(),
        "declined play must never construct an engine"
    );
}

#[tokio::test]
async fn test_repeated_declines_never_construct_engine() {
    let mut gateway = StreamingGateway::new(
        default_catalog(),
        Box::new(ScriptedGate::new([false, false, false])),
    );

    for _ in 0..3 {
        let outcome = gateway.play("vid_101").await;
        assert_eq!(outcome, PlayOutcome::Cancelled);
    }
    assert!(!gateway.has_engine());
}

#[tokio::test]
async fn test_confirmed_play_streams_default_video() {
    let mut gateway = StreamingGateway::new(
        default_catalog(),
        Box::new(ScriptedGate::always_confirm()),
    );

    let outcome = gateway.play("vid_101").await;
    assert_eq!(outcome, PlayOutcome::Playing);
    assert_eq!(gateway.engine_manifest(), Some("playlist.m3u8"));
}

#[tokio::test]
async fn test_consecutive_confirmed_plays_reuse_engine() {
    let mut gateway = StreamingGateway::new(
        default_catalog(),
        Box::new(ScriptedGate::always_confirm()),
    );

    assert_eq!(gateway.play("vid_101").await, PlayOutcome::Playing);
    assert_eq!(gateway.play("vid_101").await, PlayOutcome::Playing);

    assert_eq!(gateway.engine_manifest(), Some("playlist.m3u8"));
}

#[tokio::test]
async fn test_engine_is_reused_across_different_videos() {
    // Two videos with distinct manifests: if the gateway reconstructed
    // the engine on the second play, it would carry the second manifest.
    let catalog = MetadataCatalog::from_entries(&[
        entry("vid_101", "playlist.m3u8"),
        entry("vid_202", "other.m3u8"),
    ])
    .expect("catalog should be valid");

    let mut gateway =
        StreamingGateway::new(catalog, Box::new(ScriptedGate::always_confirm()));

    assert_eq!(gateway.play("vid_101").await, PlayOutcome::Playing);
    assert_eq!(gateway.play("vid_202").await, PlayOutcome::Playing);

    assert_eq!(
        gateway.engine_manifest(),
        Some("playlist.m3u8"),
        "engine must be constructed once and reused, keeping its first manifest"
    );
}

#[tokio::test]
async fn test_decline_then_confirm_constructs_engine_once() {
    let mut gateway = StreamingGateway::new(
        default_catalog(),
        Box::new(ScriptedGate::new([false, true])),
    );

    assert_eq!(gateway.play("vid_101").await, PlayOutcome::Cancelled);
    assert!(!gateway.has_engine());

    assert_eq!(gateway.play("vid_101").await, PlayOutcome::Playing);
    assert!(gateway.has_engine());
}

#[tokio::test]
async fn test_independent_gateways_own_independent_engines() {
    let mut confirmed =
        StreamingGateway::new(default_catalog(), Box::new(ScriptedGate::new([true])));
    let mut declined =
        StreamingGateway::new(default_catalog(), Box::new(ScriptedGate::new([false])));

    assert_eq!(confirmed.play("vid_101").await, PlayOutcome::Playing);
    assert_eq!(declined.play("vid_101").await, PlayOutcome::Cancelled);

    assert!(confirmed.has_engine());
    assert!(!declined.has_engine());
}
