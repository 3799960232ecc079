//! Playback engine - the heavy resource behind the proxy
//!
//! Simulates connecting to blob storage and buffering initial segments.
//! Construction is the expensive step; the gateway defers it until a
//! playback has actually been confirmed.

use crate::streamer::{PlayOutcome, VideoStreamer};
use async_trait::async_trait;
use std::time::Duration;
use tokio::time::sleep;

/// Real subject: streams video segments referenced by a manifest
pub struct PlaybackEngine {
    manifest: String,
}

impl PlaybackEngine {
    /// Establish the (simulated) storage connection and buffer the
    /// initial segments for the given manifest
    pub async fn connect(manifest: &str) -> Self {
        tracing::info!(manifest = %manifest, "constructing playback engine");

        println!("[Storage] Establishing high-bandwidth connection...");

        // Stand-in for the initial buffering round-trip
        sleep(Duration::from_millis(150)).await;

        println!("[Storage] Buffering initial segments from: {}", manifest);

        tracing::info!(manifest = %manifest, "playback engine ready");

        Self {
            manifest: manifest.to_string(),
        }
    }

    /// Manifest this engine was constructed for
    pub fn manifest(&self) -> &str {
        &self.manifest
    }
}

#[async_trait]
impl VideoStreamer for PlaybackEngine {
    async fn play_video(&mut self, video_id: &str) -> PlayOutcome {
        tracing::info!(
            video_id = %video_id,
            manifest = %self.manifest,
            "playback started"
        );

        println!(
            "[Streaming] Video {} is now playing via {}",
            video_id, self.manifest
        );

        PlayOutcome::Playing
    }
}
