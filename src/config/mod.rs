//! Configuration management for the streaming proxy

use serde::{Deserialize, Serialize};

/// Proxy configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProxyConfig {
    /// Video id the entry point plays
    pub default_video_id: String,
    /// Catalog entries seeded at startup
    pub catalog: Vec<VideoEntry>,
}

/// One seeded catalog entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoEntry {
    /// Video identifier
    pub video_id: String,
    /// Display title
    pub title: String,
    /// Display description
    pub description: String,
    /// Streaming manifest reference
    pub manifest: String,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            default_video_id: "vid_101".to_string(),
            catalog: vec![VideoEntry {
                video_id: "vid_101".to_string(),
                title: "System Design 101".to_string(),
                description: "HLD Basics".to_string(),
                manifest: "playlist.m3u8".to_string(),
            }],
        }
    }
}
