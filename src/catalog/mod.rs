//! In-memory metadata catalog
//!
//! Simulates the document store a real platform would query for
//! lightweight video metadata before committing to playback.

use crate::config::VideoEntry;
use std::collections::HashMap;

/// Lightweight descriptive data about a video
///
/// Immutable once created; the catalog owns one instance per video id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoMetadata {
    /// Display title
    pub title: String,
    /// Display description
    pub description: String,
    /// Opaque reference to the streaming manifest
    pub manifest: String,
}

/// Catalog mapping video identifiers to their metadata
#[derive(Debug, Default)]
pub struct MetadataCatalog {
    entries: HashMap<String, VideoMetadata>,
}

impl MetadataCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Build a catalog from configured entries
    ///
    /// Fails on duplicate video ids so a misconfigured catalog is caught
    /// at startup rather than shadowing an entry silently.
    pub fn from_entries(entries: &[VideoEntry]) -> crate::Result<Self> {
        let mut catalog = Self::new();
        for entry in entries {
            if catalog.entries.contains_key(&entry.video_id) {
                anyhow::bail!("duplicate video id in catalog: {}", entry.video_id);
            }
            catalog.insert(
                entry.video_id.clone(),
                VideoMetadata {
                    title: entry.title.clone(),
                    description: entry.description.clone(),
                    manifest: entry.manifest.clone(),
                },
            );
        }
        Ok(catalog)
    }

    /// Insert a metadata record
    pub fn insert(&mut self, video_id: String, metadata: VideoMetadata) {
        self.entries.insert(video_id, metadata);
    }

    /// Look up metadata by video id
    pub fn lookup(&self, video_id: &str) -> Option<&VideoMetadata> {
        self.entries.get(video_id)
    }

    /// Number of catalogued videos
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
