//! Streaming gateway - the proxy in front of the playback engine
//!
//! The gateway resolves cheap metadata first, gates on an explicit
//! confirmation, and only then constructs the heavy playback engine.
//! The engine is built at most once per gateway and reused for every
//! subsequent confirmed play.

mod gate;

pub use gate::{is_affirmative, ConfirmationGate, ScriptedGate, StdinGate};

use crate::catalog::MetadataCatalog;
use crate::engine::PlaybackEngine;
use crate::streamer::{PlayOutcome, VideoStreamer};
use async_trait::async_trait;

/// Proxy mediating between callers and the playback engine
pub struct StreamingGateway {
    catalog: MetadataCatalog,
    /// Lazily constructed heavy resource; absent until the first
    /// confirmed play
    engine: Option<PlaybackEngine>,
    gate: Box<dyn ConfirmationGate>,
}

impl StreamingGateway {
    /// Create a gateway over the given catalog and confirmation gate
    pub fn new(catalog: MetadataCatalog, gate: Box<dyn ConfirmationGate>) -> Self {
        tracing::debug!(videos = catalog.len(), "creating streaming gateway");
        Self {
            catalog,
            engine: None,
            gate,
        }
    }

    /// Check whether the playback engine has been constructed
    pub fn has_engine(&self) -> bool {
        self.engine.is_some()
    }

    /// Manifest of the constructed engine, if any
    pub fn engine_manifest(&self) -> Option<&str> {
        self.engine.as_ref().map(|engine| engine.manifest())
    }

    /// Resolve metadata, gate on confirmation, then delegate to the
    /// engine (constructing it on first use)
    pub async fn play(&mut self, video_id: &str) -> PlayOutcome {
        tracing::debug!(video_id = %video_id, "resolving metadata");

        let meta = match self.catalog.lookup(video_id) {
            Some(meta) => meta.clone(),
            None => {
                tracing::warn!(video_id = %video_id, "metadata not found in catalog");
                println!("Error: video metadata not found for '{}'.", video_id);
                return PlayOutcome::MetadataNotFound;
            }
        };

        println!();
        println!("--- Metadata Loaded ---");
        println!("Title: {}", meta.title);
        println!("Description: {}", meta.description);
        println!("Manifest: {}", meta.manifest);
        println!("-----------------------");
        println!();

        // The only suspension point: everything past here depends on
        // the external decision
        if !self.gate.confirm().await {
            tracing::info!(video_id = %video_id, "playback declined, engine left idle");
            println!("Streaming cancelled. Keeping heavy resources idle.");
            return PlayOutcome::Cancelled;
        }

        let engine = self.engine_for(&meta.manifest).await;
        engine.play_video(video_id).await
    }

    /// Construct-if-absent accessor for the playback engine
    async fn engine_for(&mut self, manifest: &str) -> &mut PlaybackEngine {
        let engine = match self.engine.take() {
            Some(engine) => {
                tracing::debug!(manifest = %engine.manifest(), "reusing playback engine");
                engine
            }
            None => PlaybackEngine::connect(manifest).await,
        };
        self.engine.insert(engine)
    }
}

#[async_trait]
impl VideoStreamer for StreamingGateway {
    async fn play_video(&mut self, video_id: &str) -> PlayOutcome {
        self.play(video_id).await
    }
}
