//! Stream Proxy - Lazy playback gateway
//!
//! This library provides the core functionality for the streaming proxy:
//! - Metadata catalog lookups
//! - Playback gating behind an explicit confirmation
//! - Lazy construction of the heavy playback engine
//! - Configuration management

pub mod catalog;
pub mod config;
pub mod engine;
pub mod gateway;
pub mod streamer;

// Re-export commonly used types
pub use catalog::{MetadataCatalog, VideoMetadata};
pub use config::{ProxyConfig, VideoEntry};
pub use engine::PlaybackEngine;
pub use gateway::{ConfirmationGate, ScriptedGate, StdinGate, StreamingGateway};
pub use streamer::{PlayOutcome, VideoStreamer};

/// Result type used throughout the proxy
pub type Result<T> = anyhow::Result<T>;
