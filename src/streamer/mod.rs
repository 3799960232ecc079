//! Playback contract shared by the gateway and the engine

use async_trait::async_trait;

/// Outcome of a playback request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayOutcome {
    /// Playback was confirmed and the engine is streaming
    Playing,
    /// The caller declined at the confirmation step
    Cancelled,
    /// No metadata exists for the requested video id
    MetadataNotFound,
}

impl PlayOutcome {
    /// Check if the request ended with the engine streaming
    pub fn is_playing(&self) -> bool {
        matches!(self, PlayOutcome::Playing)
    }
}

/// Subject contract implemented by both the proxy gateway and the
/// real playback engine
#[async_trait]
pub trait VideoStreamer: Send {
    /// Play a video by identifier
    async fn play_video(&mut self, video_id: &str) -> PlayOutcome;
}
